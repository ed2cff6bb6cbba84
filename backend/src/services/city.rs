//! City slug resolution

use std::collections::HashMap;

use shared::{normalize_city_slug, City, CITIES};

use crate::error::{AppError, AppResult};

/// Resolves URL slugs to CWA location names
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct CityService {
    names: HashMap<&'static str, &'static str>,
}

impl CityService {
    pub fn new() -> Self {
        Self::from_cities(CITIES)
    }

    pub fn from_cities(cities: &[City]) -> Self {
        Self {
            names: cities.iter().map(|c| (c.slug, c.name)).collect(),
        }
    }

    /// Resolve a slug to its localized name
    ///
    /// The slug is lowercased before lookup. An unknown slug is reported with
    /// its original spelling.
    pub fn resolve(&self, slug: &str) -> AppResult<&'static str> {
        self.names
            .get(normalize_city_slug(slug).as_str())
            .copied()
            .ok_or_else(|| AppError::UnknownCity(slug.to_string()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CityService {
    fn default() -> Self {
        Self::new()
    }
}
