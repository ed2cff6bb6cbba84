//! Supported cities
//!
//! Maps the URL slugs accepted by the proxy to the localized names the CWA
//! open-data API expects in its `locationName` query parameter.

/// A supported city: URL slug and CWA location name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub slug: &'static str,
    pub name: &'static str,
}

/// Every administrative region covered by the F-C0032-001 dataset
pub const CITIES: &[City] = &[
    City { slug: "taipei", name: "臺北市" },
    City { slug: "new-taipei", name: "新北市" },
    City { slug: "taoyuan", name: "桃園市" },
    City { slug: "taichung", name: "臺中市" },
    City { slug: "tainan", name: "臺南市" },
    City { slug: "kaohsiung", name: "高雄市" },
    City { slug: "keelung", name: "基隆市" },
    City { slug: "hsinchu-city", name: "新竹市" },
    City { slug: "hsinchu", name: "新竹縣" },
    City { slug: "miaoli", name: "苗栗縣" },
    City { slug: "changhua", name: "彰化縣" },
    City { slug: "nantou", name: "南投縣" },
    City { slug: "yunlin", name: "雲林縣" },
    City { slug: "chiayi-city", name: "嘉義市" },
    City { slug: "chiayi", name: "嘉義縣" },
    City { slug: "pingtung", name: "屏東縣" },
    City { slug: "yilan", name: "宜蘭縣" },
    City { slug: "hualien", name: "花蓮縣" },
    City { slug: "taitung", name: "臺東縣" },
    City { slug: "penghu", name: "澎湖縣" },
    City { slug: "kinmen", name: "金門縣" },
    City { slug: "lienchiang", name: "連江縣" },
];

/// Canonical form of a slug as it is looked up in [`CITIES`]
pub fn normalize_city_slug(slug: &str) -> String {
    slug.to_lowercase()
}

/// Slugs in table order
pub fn city_slugs() -> Vec<&'static str> {
    CITIES.iter().map(|c| c.slug).collect()
}
