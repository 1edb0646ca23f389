//! Maps game objects to and from their JSON representation.
//!
//! Cities serialize on their own (see [`City`]). Everything else refers to cities by name only, so
//! reading it back requires the set of cities those names belong to.

use crate::card::Color;
use crate::city::City;
use crate::error::TranslationError;
use crate::map::{Connection, Destination, Map};
use crate::strategy::Move;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::{BTreeMap, BTreeSet};

const MORE_CARDS: &str = "more cards";

/// `{"boston": {"nyc": {"green": 3}}}`: the first city name always comes first lexicographically.
type ConnectionsJson = BTreeMap<String, BTreeMap<String, BTreeMap<Color, u8>>>;

#[derive(Deserialize, Serialize)]
struct MapJson {
    width: u32,
    height: u32,
    cities: Vec<City>,
    connections: ConnectionsJson,
}

/// `["boston", "nyc", "green", 3]`
#[derive(Deserialize, Serialize)]
struct AcquiredJson(String, String, Color, u8);

/// `["boston", "nyc"]`
#[derive(Deserialize, Serialize)]
struct DestinationJson(String, String);

#[derive(Deserialize, Serialize)]
struct ActionJson {
    action: ActionKindJson,
}

#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum ActionKindJson {
    MoreCards(String),
    AcquireConnection(AcquiredJson),
}

fn find_city(name: &str, cities: &BTreeSet<City>) -> Result<City, TranslationError> {
    cities
        .iter()
        .find(|city| city.name() == name)
        .cloned()
        .ok_or_else(|| TranslationError::UnknownCity(name.to_owned()))
}

/// Resolves two city names, which must be in lexicographic order.
fn find_ordered_cities(
    start: &str,
    end: &str,
    cities: &BTreeSet<City>,
) -> Result<(City, City), TranslationError> {
    if start >= end {
        return Err(TranslationError::Malformed(format!(
            "city pair: '{}' must come before '{}'",
            start, end
        )));
    }

    Ok((find_city(start, cities)?, find_city(end, cities)?))
}

fn connections_json(connections: &BTreeSet<Connection>) -> ConnectionsJson {
    let mut connections_json = ConnectionsJson::new();

    for connection in connections {
        let [start, end] = connection.cities();
        connections_json
            .entry(start.name().to_owned())
            .or_default()
            .entry(end.name().to_owned())
            .or_default()
            .insert(connection.color(), connection.length());
    }

    connections_json
}

fn connections_from_json(
    connections_json: ConnectionsJson,
    cities: &BTreeSet<City>,
) -> Result<BTreeSet<Connection>, TranslationError> {
    let mut connections = BTreeSet::new();

    for (start, ends) in connections_json {
        for (end, colors) in ends {
            let (start, end) = find_ordered_cities(&start, &end, cities)?;

            for (color, length) in colors {
                connections.insert(Connection::new(start.clone(), end.clone(), length, color)?);
            }
        }
    }

    Ok(connections)
}

fn acquired_json(connection: &Connection) -> AcquiredJson {
    let [start, end] = connection.cities();
    AcquiredJson(
        start.name().to_owned(),
        end.name().to_owned(),
        connection.color(),
        connection.length(),
    )
}

fn acquired_from_json(
    AcquiredJson(start, end, color, length): AcquiredJson,
    cities: &BTreeSet<City>,
) -> Result<Connection, TranslationError> {
    let (start, end) = find_ordered_cities(&start, &end, cities)?;
    Ok(Connection::new(start, end, length, color)?)
}

/// # Example
/// ```
/// use std::collections::BTreeSet;
/// use trains::card::Color;
/// use trains::city::City;
/// use trains::map::Connection;
/// use trains::translation::connections_to_json;
///
/// let boston = City::new("boston", 100, 300).unwrap();
/// let nyc = City::new("nyc", 100, 100).unwrap();
/// let connection = Connection::new(nyc, boston, 3, Color::Green).unwrap();
///
/// assert_eq!(
///     connections_to_json(&BTreeSet::from([connection])),
///     serde_json::json!({"boston": {"nyc": {"green": 3}}})
/// );
/// ```
pub fn connections_to_json(connections: &BTreeSet<Connection>) -> Value {
    json!(connections_json(connections))
}

pub fn json_to_connections(
    json: &Value,
    cities: &BTreeSet<City>,
) -> Result<BTreeSet<Connection>, TranslationError> {
    connections_from_json(ConnectionsJson::deserialize(json)?, cities)
}

pub fn acquired_to_json(connection: &Connection) -> Value {
    json!(acquired_json(connection))
}

pub fn json_to_acquired(json: &Value, cities: &BTreeSet<City>) -> Result<Connection, TranslationError> {
    acquired_from_json(AcquiredJson::deserialize(json)?, cities)
}

pub fn destination_to_json(destination: &Destination) -> Value {
    let [start, end] = destination.cities();
    json!(DestinationJson(start.name().to_owned(), end.name().to_owned()))
}

pub fn json_to_destination(
    json: &Value,
    cities: &BTreeSet<City>,
) -> Result<Destination, TranslationError> {
    let DestinationJson(start, end) = DestinationJson::deserialize(json)?;
    let (start, end) = find_ordered_cities(&start, &end, cities)?;
    Ok(Destination::new(start, end)?)
}

pub fn map_to_json(map: &Map) -> Value {
    let map_json = MapJson {
        width: map.width(),
        height: map.height(),
        cities: map.cities().into_iter().collect(),
        connections: connections_json(&map.connections()),
    };

    json!(map_json)
}

/// Reads a map, with its connections referring to its own cities.
pub fn json_to_map(json: &Value) -> Result<Map, TranslationError> {
    let map_json = MapJson::deserialize(json)?;
    let cities: BTreeSet<_> = map_json.cities.into_iter().collect();
    let connections = connections_from_json(map_json.connections, &cities)?;

    Ok(Map::new(cities, connections, map_json.height, map_json.width)?)
}

/// `{"action": "more cards"}`, or `{"action": ["boston", "nyc", "green", 3]}`.
pub fn move_to_json(player_move: &Move) -> Value {
    let action = match player_move {
        Move::AcquireConnection(connection) => {
            ActionKindJson::AcquireConnection(acquired_json(connection))
        }
        Move::MoreCards => ActionKindJson::MoreCards(String::from(MORE_CARDS)),
    };

    let action_json = ActionJson { action };
    json!(action_json)
}

pub fn json_to_move(json: &Value, cities: &BTreeSet<City>) -> Result<Move, TranslationError> {
    match ActionJson::deserialize(json)?.action {
        ActionKindJson::MoreCards(action) if action == MORE_CARDS => Ok(Move::MoreCards),
        ActionKindJson::MoreCards(action) => Err(TranslationError::Malformed(format!(
            "action: '{}'",
            action
        ))),
        ActionKindJson::AcquireConnection(acquired) => Ok(Move::AcquireConnection(
            acquired_from_json(acquired, cities)?,
        )),
    }
}
