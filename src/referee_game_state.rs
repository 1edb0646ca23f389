use crate::card::Color;
use crate::constants::NUM_CARDS_PER_DRAW;
use crate::error::ValidationError;
use crate::map::{Connection, Map};
use crate::player_game_state::PlayerGameState;
use crate::strategy::Move;

use smallvec::SmallVec;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// The authoritative state of a game, as held by the referee.
///
/// Aggregates the map, every player's state in seating order, the deck of cards left to draw, and
/// whose turn it is. Like the player states it holds, it is never mutated: every transition
/// produces a new, fully re-validated [`RefereeGameState`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefereeGameState {
    map: Map,
    player_game_states: Vec<PlayerGameState>,
    /// Cards are drawn from the front.
    deck: Vec<Color>,
    active_player_idx: usize,
}

impl RefereeGameState {
    /// Creates the referee's state, validating that:
    ///   * Every connection acquired by a player is on the map.
    ///   * No connection is acquired by more than one player.
    ///   * Every player's view of all players' connections matches the players' actual connections,
    ///     in seating order. Hence, all views are identical.
    ///   * The active player's index is within `[0, number of players)`.
    pub fn new(
        map: Map,
        player_game_states: Vec<PlayerGameState>,
        deck: Vec<Color>,
        active_player_idx: usize,
    ) -> Result<Self, ValidationError> {
        Self::validate_player_game_states(&map, &player_game_states)?;

        if active_player_idx >= player_game_states.len() {
            return Err(ValidationError::new(format!(
                "Player index must be between 0 and {} (exclusive), but got {}.",
                player_game_states.len(),
                active_player_idx
            )));
        }

        Ok(Self {
            map,
            player_game_states,
            deck,
            active_player_idx,
        })
    }

    fn validate_player_game_states(
        map: &Map,
        player_game_states: &[PlayerGameState],
    ) -> Result<(), ValidationError> {
        let mut acquired_by_anyone = HashSet::new();
        let mut all_acquired_connections = Vec::with_capacity(player_game_states.len());

        for (seat, player_game_state) in player_game_states.iter().enumerate() {
            let acquired_connections = player_game_state.acquired_connections();

            for connection in &acquired_connections {
                if !map.has_connection(connection) {
                    return Err(ValidationError::new(format!(
                        "Player {} acquired {}, which is not on the map.",
                        seat, connection
                    )));
                }

                if !acquired_by_anyone.insert(connection.clone()) {
                    return Err(ValidationError::new(format!(
                        "{} is acquired by more than one player.",
                        connection
                    )));
                }
            }

            all_acquired_connections.push(acquired_connections);
        }

        for (seat, player_game_state) in player_game_states.iter().enumerate() {
            if player_game_state.all_acquired_connections() != all_acquired_connections {
                return Err(ValidationError::new(format!(
                    "Player {}'s view of all players' connections is inconsistent with the other players.",
                    seat
                )));
            }
        }

        Ok(())
    }

    #[inline]
    pub fn map(&self) -> &Map {
        &self.map
    }

    /// All players' states, in seating order.
    #[inline]
    pub fn player_game_states(&self) -> &[PlayerGameState] {
        &self.player_game_states
    }

    #[inline]
    pub fn active_player_game_state(&self) -> &PlayerGameState {
        &self.player_game_states[self.active_player_idx]
    }

    #[inline]
    pub fn deck(&self) -> &[Color] {
        &self.deck
    }

    #[inline]
    pub fn active_player_idx(&self) -> usize {
        self.active_player_idx
    }

    /// Whether the active player can acquire the given connection on this game's map.
    pub fn can_active_player_acquire_connection(&self, connection: &Connection) -> bool {
        self.active_player_game_state()
            .can_acquire_connection(connection, &self.map)
    }

    /// Returns the state after the active player acquired the given connection.
    ///
    /// The active player's state and every player's view of all players' connections are updated
    /// together, so the new state is consistent.
    ///
    /// Fails if the active player cannot acquire that connection.
    pub fn acquire_connection_for_active_player(
        &self,
        connection: &Connection,
    ) -> Result<Self, ValidationError> {
        if !self.can_active_player_acquire_connection(connection) {
            return Err(ValidationError::new(format!(
                "Player {} cannot acquire {}.",
                self.active_player_idx, connection
            )));
        }

        let seat = self.active_player_idx;
        let active_player_game_state = self
            .active_player_game_state()
            .obtain_connection_at(seat, connection)?;
        let all_acquired_connections = active_player_game_state.all_acquired_connections();

        let player_game_states = self
            .player_game_states
            .iter()
            .enumerate()
            .map(|(other_seat, player_game_state)| {
                if other_seat == seat {
                    Ok(active_player_game_state.clone())
                } else {
                    player_game_state.with_all_acquired_connections(all_acquired_connections.clone())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(seat, "Player acquired {}.", connection);

        Self::new(
            self.map.clone(),
            player_game_states,
            self.deck.clone(),
            self.active_player_idx,
        )
    }

    /// Returns the state after the active player drew [`NUM_CARDS_PER_DRAW`] cards from the deck,
    /// or whatever is left of it.
    pub fn draw_cards_for_active_player(&self) -> Result<Self, ValidationError> {
        let mut deck = self.deck.clone();
        let num_cards = NUM_CARDS_PER_DRAW.min(deck.len());
        let drawn_cards: SmallVec<[Color; NUM_CARDS_PER_DRAW]> = deck.drain(..num_cards).collect();

        let mut player_game_states = self.player_game_states.clone();
        player_game_states[self.active_player_idx] = self
            .active_player_game_state()
            .with_additional_cards(&drawn_cards)?;

        debug!(
            seat = self.active_player_idx,
            num_cards,
            deck_size = deck.len(),
            "Player drew cards."
        );

        Self::new(
            self.map.clone(),
            player_game_states,
            deck,
            self.active_player_idx,
        )
    }

    /// Returns the state where the next player, in seating order, is active.
    pub fn next_turn(&self) -> Self {
        Self {
            active_player_idx: (self.active_player_idx + 1) % self.player_game_states.len(),
            ..self.clone()
        }
    }

    /// Returns the state after the active player made the given move.
    /// The active player stays the same: call [`RefereeGameState::next_turn`] to move on.
    pub fn apply_move(&self, player_move: &Move) -> Result<Self, ValidationError> {
        match player_move {
            Move::AcquireConnection(connection) => {
                self.acquire_connection_for_active_player(connection)
            }
            Move::MoreCards => self.draw_cards_for_active_player(),
        }
    }

    /// Connections nobody has acquired yet.
    pub fn unacquired_connections(&self) -> BTreeSet<Connection> {
        let mut connections = self.map.connections();
        for player_game_state in &self.player_game_states {
            for connection in player_game_state.acquired_connections() {
                connections.remove(&connection);
            }
        }
        connections
    }
}
