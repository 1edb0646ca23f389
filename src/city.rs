use crate::constants::MAX_CITY_NAME_LENGTH;
use crate::error::ValidationError;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    static ref CITY_NAME_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9 .,]+$").unwrap();
}

/// A named point on the map.
///
/// Two cities are the same city iff they share name and coordinates.
/// Cities are ordered by name first, then by coordinates.
///
/// # JSON
/// A city is serialized as `[name, [x, y]]`, e.g. `["boston", [100, 300]]`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "CityJson", into = "CityJson")]
pub struct City {
    name: String,
    x: u32,
    y: u32,
}

#[derive(Deserialize, Serialize)]
struct CityJson(String, [u32; 2]);

impl City {
    /// Creates a city, making sure its name is between 1 and 25 characters
    /// long and only contains letters, digits, spaces, commas and periods.
    ///
    /// Whether the coordinates fit a map is only checked once the city is placed on a [`crate::map::Map`].
    ///
    /// # Example
    /// ```
    /// use trains::city::City;
    ///
    /// assert!(City::new("Sault St. Marie", 100, 100).is_ok());
    /// assert!(City::new("Montréal", 100, 100).is_err());
    /// ```
    pub fn new(name: impl Into<String>, x: u32, y: u32) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.chars().count() > MAX_CITY_NAME_LENGTH || !CITY_NAME_REGEX.is_match(&name) {
            return Err(ValidationError::new(format!(
                "City name '{}' must be at most {} characters and match [a-zA-Z0-9 .,]+.",
                name, MAX_CITY_NAME_LENGTH
            )));
        }

        Ok(Self { name, x, y })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn x(&self) -> u32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.y
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ({}, {})", self.name, self.x, self.y)
    }
}

impl TryFrom<CityJson> for City {
    type Error = ValidationError;

    fn try_from(CityJson(name, [x, y]): CityJson) -> Result<Self, Self::Error> {
        Self::new(name, x, y)
    }
}

impl From<City> for CityJson {
    fn from(city: City) -> Self {
        Self(city.name, [city.x, city.y])
    }
}
