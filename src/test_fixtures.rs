//! Shared cities, connections and maps for unit tests.

use crate::card::Color;
use crate::city::City;
use crate::map::{Connection, Destination, Map};

use std::collections::BTreeSet;

pub(crate) fn boston() -> City {
    City::new("boston", 100, 300).unwrap()
}

pub(crate) fn nyc() -> City {
    City::new("nyc", 100, 100).unwrap()
}

pub(crate) fn la() -> City {
    City::new("la", 0, 100).unwrap()
}

pub(crate) fn dc() -> City {
    City::new("dc", 300, 100).unwrap()
}

pub(crate) fn nyc_to_dc() -> Connection {
    Connection::new(nyc(), dc(), 3, Color::Blue).unwrap()
}

pub(crate) fn nyc_to_boston() -> Connection {
    Connection::new(nyc(), boston(), 3, Color::Green).unwrap()
}

/// Four cities, where `la` is isolated from the others.
pub(crate) fn la_island_map() -> Map {
    Map::new(
        BTreeSet::from([boston(), nyc(), la(), dc()]),
        BTreeSet::from([nyc_to_dc(), nyc_to_boston()]),
        700,
        800,
    )
    .unwrap()
}

pub(crate) fn la_island_destinations() -> BTreeSet<Destination> {
    BTreeSet::from([
        Destination::new(nyc(), boston()).unwrap(),
        Destination::new(nyc(), dc()).unwrap(),
    ])
}

/// Five destinations to pick from, over the cities of [`la_island_map`].
pub(crate) fn choose_from_destinations() -> BTreeSet<Destination> {
    BTreeSet::from([
        Destination::new(boston(), dc()).unwrap(),
        Destination::new(boston(), la()).unwrap(),
        Destination::new(boston(), nyc()).unwrap(),
        Destination::new(nyc(), dc()).unwrap(),
        Destination::new(nyc(), la()).unwrap(),
    ])
}
