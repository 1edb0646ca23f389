//! Decision policies for automated players.

use crate::card::Color;
use crate::constants::{HOLD_10_CARD_THRESHOLD, NUM_DESTINATIONS_PER_PLAYER};
use crate::map::{Connection, Destination, Map};
use crate::player_game_state::PlayerGameState;

use smallvec::SmallVec;
use std::collections::{BTreeSet, HashMap};
use tracing::warn;

/// What a player decides to do on their turn.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Move {
    /// Acquire this specific connection.
    AcquireConnection(Connection),
    /// Ask the referee for more cards.
    MoreCards,
}

/// A policy driving an automated player through a game.
pub trait Strategy {
    /// Called once when the game starts, with the map and the player's initial rails and cards.
    fn setup(&mut self, map: &Map, rails: u32, cards: &[Color]);

    /// Chooses [`NUM_DESTINATIONS_PER_PLAYER`] destinations out of the given ones,
    /// and returns the ones that were *not* chosen.
    fn pick(&mut self, destinations: &BTreeSet<Destination>) -> BTreeSet<Destination>;

    /// Decides on this turn's move.
    fn play(&mut self, player_game_state: &PlayerGameState) -> Move;

    /// Receives the cards handed out by the referee.
    fn more(&mut self, cards: &[Color]);

    /// Learns whether the player won the game.
    fn win(&mut self, _won: bool) {}
}

/// Bookkeeping shared by all the strategies.
#[derive(Debug, Default)]
struct StrategyKnowledge {
    /// Only populated once [`Strategy::setup`] is called.
    map: Option<Map>,
    rails: u32,
    cards: HashMap<Color, u32>,
    destinations: SmallVec<[Destination; NUM_DESTINATIONS_PER_PLAYER]>,
}

impl StrategyKnowledge {
    fn setup(&mut self, map: &Map, rails: u32, cards: &[Color]) {
        self.map = Some(map.clone());
        self.rails = rails;
        self.cards.clear();
        self.more(cards);
    }

    fn more(&mut self, cards: &[Color]) {
        for color in cards {
            *self.cards.entry(*color).or_insert(0) += 1;
        }
    }

    /// Keeps the destinations at `kept_range` in sorted order, and returns the others.
    fn pick(
        &mut self,
        destinations: &BTreeSet<Destination>,
        kept_range: std::ops::Range<usize>,
    ) -> BTreeSet<Destination> {
        let (kept, rejected): (Vec<_>, Vec<_>) = destinations
            .iter()
            .cloned()
            .enumerate()
            .partition(|(i, _)| kept_range.contains(i));

        self.destinations = kept.into_iter().map(|(_, destination)| destination).collect();
        rejected.into_iter().map(|(_, destination)| destination).collect()
    }

    /// The first connection, in sorted order, that the player can acquire.
    fn first_obtainable_connection(&self, player_game_state: &PlayerGameState) -> Option<Connection> {
        match &self.map {
            Some(map) => player_game_state
                .obtainable_connections(map)
                .into_iter()
                .next(),
            None => {
                warn!("Asked to play before the game was set up.");
                None
            }
        }
    }
}

/// Keeps the first destinations in sorted order, and hoards cards: it only acquires a connection
/// once it holds more than [`HOLD_10_CARD_THRESHOLD`] cards.
#[derive(Debug, Default)]
pub struct Hold10Strategy {
    knowledge: StrategyKnowledge,
}

impl Hold10Strategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for Hold10Strategy {
    fn setup(&mut self, map: &Map, rails: u32, cards: &[Color]) {
        self.knowledge.setup(map, rails, cards);
    }

    fn pick(&mut self, destinations: &BTreeSet<Destination>) -> BTreeSet<Destination> {
        self.knowledge
            .pick(destinations, 0..NUM_DESTINATIONS_PER_PLAYER)
    }

    fn play(&mut self, player_game_state: &PlayerGameState) -> Move {
        if player_game_state.num_cards() <= HOLD_10_CARD_THRESHOLD {
            return Move::MoreCards;
        }

        match self.knowledge.first_obtainable_connection(player_game_state) {
            Some(connection) => Move::AcquireConnection(connection),
            None => Move::MoreCards,
        }
    }

    fn more(&mut self, cards: &[Color]) {
        self.knowledge.more(cards);
    }
}

/// Keeps the last destinations in sorted order, and acquires a connection whenever it can.
#[derive(Debug, Default)]
pub struct BuyNowStrategy {
    knowledge: StrategyKnowledge,
}

impl BuyNowStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for BuyNowStrategy {
    fn setup(&mut self, map: &Map, rails: u32, cards: &[Color]) {
        self.knowledge.setup(map, rails, cards);
    }

    fn pick(&mut self, destinations: &BTreeSet<Destination>) -> BTreeSet<Destination> {
        let num_destinations = destinations.len();
        self.knowledge.pick(
            destinations,
            num_destinations.saturating_sub(NUM_DESTINATIONS_PER_PLAYER)..num_destinations,
        )
    }

    fn play(&mut self, player_game_state: &PlayerGameState) -> Move {
        match self.knowledge.first_obtainable_connection(player_game_state) {
            Some(connection) => Move::AcquireConnection(connection),
            None => Move::MoreCards,
        }
    }

    fn more(&mut self, cards: &[Color]) {
        self.knowledge.more(cards);
    }
}
