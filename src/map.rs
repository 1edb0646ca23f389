use crate::bfs::bfs;
use crate::card::Color;
use crate::city::City;
use crate::constants::{CONNECTION_LENGTHS, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH};
use crate::error::ValidationError;

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use tracing::debug;

/// Orders a pair of cities, so that `(a, b)` and `(b, a)` are stored identically.
#[inline]
fn unordered_pair(city1: City, city2: City) -> [City; 2] {
    if city1 <= city2 {
        [city1, city2]
    } else {
        [city2, city1]
    }
}

/// An edge between two distinct cities, with a color and a length.
///
/// The pair of cities is unordered: a connection from A to B is the same connection as one from B to A.
/// Connections are ordered by their cities, then length, then color.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Connection {
    /// Always sorted.
    cities: [City; 2],
    /// Number of rails, and cards of the connection's color, needed to acquire it.
    length: u8,
    color: Color,
}

impl Connection {
    /// Creates a connection between two distinct cities.
    /// Its length must be one of [`CONNECTION_LENGTHS`].
    ///
    /// # Example
    /// ```
    /// use trains::card::Color;
    /// use trains::city::City;
    /// use trains::map::Connection;
    ///
    /// let boston = City::new("boston", 100, 300).unwrap();
    /// let nyc = City::new("nyc", 100, 100).unwrap();
    ///
    /// assert!(Connection::new(boston.clone(), nyc.clone(), 3, Color::Green).is_ok());
    /// assert!(Connection::new(boston.clone(), nyc, 7, Color::Green).is_err());
    /// assert!(Connection::new(boston.clone(), boston, 3, Color::Green).is_err());
    /// ```
    pub fn new(city1: City, city2: City, length: u8, color: Color) -> Result<Self, ValidationError> {
        if city1 == city2 {
            return Err(ValidationError::new(format!(
                "A connection needs two distinct cities, but got {} twice.",
                city1
            )));
        }

        if !CONNECTION_LENGTHS.contains(&length) {
            return Err(ValidationError::new(format!(
                "Connection length must be in {:?}, but got {}.",
                CONNECTION_LENGTHS, length
            )));
        }

        Ok(Self {
            cities: unordered_pair(city1, city2),
            length,
            color,
        })
    }

    /// Both cities, sorted.
    #[inline]
    pub fn cities(&self) -> &[City; 2] {
        &self.cities
    }

    #[inline]
    pub fn length(&self) -> u8 {
        self.length
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [start, end] = &self.cities;
        write!(
            f,
            "Connection from {} to {} ({}, {})",
            start.name(),
            end.name(),
            self.color,
            self.length
        )
    }
}

/// A pair of distinct cities a player aims to connect, directly or not.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Destination {
    /// Always sorted.
    cities: [City; 2],
}

impl Destination {
    /// Creates a destination between two distinct cities.
    pub fn new(city1: City, city2: City) -> Result<Self, ValidationError> {
        if city1 == city2 {
            return Err(ValidationError::new(format!(
                "A destination needs two distinct cities, but got {} twice.",
                city1
            )));
        }

        Ok(Self::from_distinct(city1, city2))
    }

    #[inline]
    fn from_distinct(city1: City, city2: City) -> Self {
        Self {
            cities: unordered_pair(city1, city2),
        }
    }

    /// Both cities, sorted.
    #[inline]
    pub fn cities(&self) -> &[City; 2] {
        &self.cities
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [start, end] = &self.cities;
        write!(f, "Destination from {} to {}", start.name(), end.name())
    }
}

/// The game board: cities, the connections between them, and every destination they make possible.
///
/// A `Map` is immutable once built. Getters hand out copies, so nothing can alter the map after the
/// fact; cloning a `Map` yields a fully independent map.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Map {
    cities: BTreeSet<City>,
    connections: BTreeSet<Connection>,
    /// Derived from `cities` and `connections` once, at construction.
    destinations: BTreeSet<Destination>,
    height: u32,
    width: u32,
}

impl Map {
    /// Builds a map, validating that:
    ///   * The width and height are within `[MIN_WIDTH, MAX_WIDTH]` and `[MIN_HEIGHT, MAX_HEIGHT]`.
    ///   * Every city lies within `[0, width] x [0, height]`.
    ///   * No two cities share a name, nor coordinates.
    ///   * Every city of every connection is one of the map's cities.
    ///
    /// All destinations are computed right away.
    ///
    /// # Example
    /// ```
    /// use std::collections::BTreeSet;
    /// use trains::card::Color;
    /// use trains::city::City;
    /// use trains::map::{Connection, Map};
    ///
    /// let boston = City::new("boston", 100, 300).unwrap();
    /// let nyc = City::new("nyc", 100, 100).unwrap();
    /// let connection = Connection::new(boston.clone(), nyc.clone(), 3, Color::Green).unwrap();
    ///
    /// let map = Map::new(BTreeSet::from([boston, nyc]), BTreeSet::from([connection]), 700, 800);
    /// assert!(map.is_ok());
    /// assert_eq!(map.unwrap().destinations().len(), 1);
    /// ```
    pub fn new(
        cities: BTreeSet<City>,
        connections: BTreeSet<Connection>,
        height: u32,
        width: u32,
    ) -> Result<Self, ValidationError> {
        Self::validate_height_width(height, width)?;
        Self::validate_cities(&cities, height, width)?;
        Self::validate_connections(&connections, &cities)?;

        let destinations = Self::calculate_all_destinations(&cities, &connections);

        debug!(
            num_cities = cities.len(),
            num_connections = connections.len(),
            num_destinations = destinations.len(),
            "Built map of {}x{}.",
            width,
            height
        );

        Ok(Self {
            cities,
            connections,
            destinations,
            height,
            width,
        })
    }

    fn validate_height_width(height: u32, width: u32) -> Result<(), ValidationError> {
        if (MIN_WIDTH..=MAX_WIDTH).contains(&width) && (MIN_HEIGHT..=MAX_HEIGHT).contains(&height) {
            Ok(())
        } else {
            Err(ValidationError::new(format!(
                "Height must be between {} and {}, and width between {} and {}, but got {}x{}.",
                MIN_HEIGHT, MAX_HEIGHT, MIN_WIDTH, MAX_WIDTH, width, height
            )))
        }
    }

    fn validate_cities(
        cities: &BTreeSet<City>,
        height: u32,
        width: u32,
    ) -> Result<(), ValidationError> {
        let mut city_names = HashSet::with_capacity(cities.len());
        let mut city_coordinates = HashSet::with_capacity(cities.len());

        for city in cities {
            if city.x() > width || city.y() > height {
                return Err(ValidationError::new(format!(
                    "{} must lie within the map's bounds (0, 0) to ({}, {}).",
                    city, width, height
                )));
            }

            if !city_names.insert(city.name()) {
                return Err(ValidationError::new(format!(
                    "No duplicate city names ({}).",
                    city.name()
                )));
            }

            if !city_coordinates.insert((city.x(), city.y())) {
                return Err(ValidationError::new(format!(
                    "Two cities cannot have the same coordinates ({}, {}).",
                    city.x(),
                    city.y()
                )));
            }
        }

        Ok(())
    }

    fn validate_connections(
        connections: &BTreeSet<Connection>,
        cities: &BTreeSet<City>,
    ) -> Result<(), ValidationError> {
        for connection in connections {
            if let Some(city) = connection
                .cities()
                .iter()
                .find(|city| !cities.contains(*city))
            {
                return Err(ValidationError::new(format!(
                    "{} refers to {}, which is not on the map.",
                    connection, city
                )));
            }
        }

        Ok(())
    }

    /// Every pair of distinct cities that are linked through connections, directly or not.
    ///
    /// Connections can be travelled both ways, so each one is recorded in both directions before
    /// running the (directed) reachability search from every city.
    fn calculate_all_destinations(
        cities: &BTreeSet<City>,
        connections: &BTreeSet<Connection>,
    ) -> BTreeSet<Destination> {
        let mut neighbors: HashMap<&City, HashSet<&City>> = HashMap::new();
        for connection in connections {
            let [start, end] = connection.cities();
            neighbors.entry(start).or_default().insert(end);
            neighbors.entry(end).or_default().insert(start);
        }

        let mut destinations = BTreeSet::new();
        for city in cities {
            for reachable_city in bfs(city, &neighbors) {
                if reachable_city != city {
                    destinations.insert(Destination::from_distinct(
                        city.clone(),
                        reachable_city.clone(),
                    ));
                }
            }
        }

        destinations
    }

    /// A copy of all the cities on the map.
    pub fn cities(&self) -> BTreeSet<City> {
        self.cities.clone()
    }

    /// A copy of all the connections on the map.
    pub fn connections(&self) -> BTreeSet<Connection> {
        self.connections.clone()
    }

    /// A copy of all the destinations of the map.
    pub fn destinations(&self) -> BTreeSet<Destination> {
        self.destinations.clone()
    }

    pub fn city_names(&self) -> BTreeSet<String> {
        self.cities.iter().map(|city| city.name().to_owned()).collect()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Whether the given connection is one of this map's connections.
    #[inline]
    pub fn has_connection(&self, connection: &Connection) -> bool {
        self.connections.contains(connection)
    }

    /// Finds the city with the given name, if any.
    pub fn find_city(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.name() == name)
    }
}
