//! Business logic services for the Taiwan Weather Proxy

pub mod city;
pub mod forecast;
pub mod weather;

pub use city::CityService;
pub use weather::WeatherService;
