use crate::card::Color;
use crate::constants::{MAX_CARDS_PER_COLOR, NUM_DESTINATIONS_PER_PLAYER, NUM_TOTAL_CARDS};
use crate::error::ValidationError;
use crate::map::{Connection, Destination, Map};

use std::collections::{BTreeSet, HashMap};
use strum::IntoEnumIterator;
use tracing::trace;

/// A snapshot of the game from one player's point of view.
///
/// Holds what the player owns (acquired connections, destinations, rails, cards), as well as the
/// connections acquired by *every* player, in seating order. This player's own acquired connections
/// must appear in that list.
///
/// The state is never mutated: acquiring a connection produces a new [`PlayerGameState`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlayerGameState {
    acquired_connections: BTreeSet<Connection>,
    destinations: BTreeSet<Destination>,
    rails: u32,
    /// It is guaranteed that the map has at all times key-value pairs for all colors.
    cards: HashMap<Color, u32>,
    /// Acquired connections of all players, in the order in which they play.
    all_acquired_connections: Vec<BTreeSet<Connection>>,
}

impl PlayerGameState {
    /// Creates a player's state, validating that:
    ///   * There are exactly [`NUM_DESTINATIONS_PER_PLAYER`] destinations.
    ///   * No color has more than [`MAX_CARDS_PER_COLOR`] cards, and there are at most
    ///     [`NUM_TOTAL_CARDS`] cards overall.
    ///   * `all_acquired_connections` is not empty, and contains `acquired_connections`.
    ///
    /// Colors missing from `cards` are added with a count of zero.
    pub fn new(
        acquired_connections: BTreeSet<Connection>,
        destinations: BTreeSet<Destination>,
        rails: u32,
        cards: HashMap<Color, u32>,
        all_acquired_connections: Vec<BTreeSet<Connection>>,
    ) -> Result<Self, ValidationError> {
        Self::validate_destinations(&destinations)?;
        Self::validate_cards(&cards)?;
        Self::validate_all_acquired_connections(&acquired_connections, &all_acquired_connections)?;

        Ok(Self {
            acquired_connections,
            destinations,
            rails,
            cards: Self::put_all_colors_in_cards(cards),
            all_acquired_connections,
        })
    }

    fn validate_destinations(destinations: &BTreeSet<Destination>) -> Result<(), ValidationError> {
        if destinations.len() != NUM_DESTINATIONS_PER_PLAYER {
            return Err(ValidationError::new(format!(
                "A player must have exactly {} destinations, but got {}.",
                NUM_DESTINATIONS_PER_PLAYER,
                destinations.len()
            )));
        }

        Ok(())
    }

    fn validate_cards(cards: &HashMap<Color, u32>) -> Result<(), ValidationError> {
        let mut total_cards: u64 = 0;

        for (color, count) in cards {
            if *count > MAX_CARDS_PER_COLOR {
                return Err(ValidationError::new(format!(
                    "A player cannot have more than {} {} cards, but got {}.",
                    MAX_CARDS_PER_COLOR, color, count
                )));
            }

            total_cards += u64::from(*count);
        }

        if total_cards > u64::from(NUM_TOTAL_CARDS) {
            return Err(ValidationError::new(format!(
                "A player cannot have more than {} cards, but got {}.",
                NUM_TOTAL_CARDS, total_cards
            )));
        }

        Ok(())
    }

    fn validate_all_acquired_connections(
        acquired_connections: &BTreeSet<Connection>,
        all_acquired_connections: &[BTreeSet<Connection>],
    ) -> Result<(), ValidationError> {
        if all_acquired_connections.is_empty() {
            return Err(ValidationError::new(
                "All players' connections cannot be empty: this player's connections must be in there.",
            ));
        }

        if !all_acquired_connections.contains(acquired_connections) {
            return Err(ValidationError::new(
                "This player's connections must be part of all players' connections.",
            ));
        }

        Ok(())
    }

    fn put_all_colors_in_cards(mut cards: HashMap<Color, u32>) -> HashMap<Color, u32> {
        for color in Color::iter() {
            cards.entry(color).or_insert(0);
        }
        cards
    }

    /// A copy of this player's acquired connections.
    pub fn acquired_connections(&self) -> BTreeSet<Connection> {
        self.acquired_connections.clone()
    }

    /// A copy of this player's destinations.
    pub fn destinations(&self) -> BTreeSet<Destination> {
        self.destinations.clone()
    }

    /// A copy of this player's cards, with an entry for every color.
    pub fn cards(&self) -> HashMap<Color, u32> {
        self.cards.clone()
    }

    /// How many cards of the given color this player has.
    #[inline]
    pub fn num_cards_of_color(&self, color: Color) -> u32 {
        self.cards.get(&color).copied().unwrap_or_default()
    }

    /// How many cards this player has, all colors included.
    pub fn num_cards(&self) -> u32 {
        self.cards.values().sum()
    }

    #[inline]
    pub fn rails(&self) -> u32 {
        self.rails
    }

    /// A copy of the connections acquired by every player, in seating order.
    pub fn all_acquired_connections(&self) -> Vec<BTreeSet<Connection>> {
        self.all_acquired_connections.clone()
    }

    /// The seat of the player that acquired the given connection, if any.
    pub fn owner_of(&self, connection: &Connection) -> Option<usize> {
        self.all_acquired_connections
            .iter()
            .position(|player_connections| player_connections.contains(connection))
    }

    /// This player's seat, found by looking for its acquired connections in all players' connections.
    ///
    /// Returns `None` if more than one player holds the exact same connections (e.g. at the start of the
    /// game, when nobody has acquired anything yet), as the seat cannot be told apart then. In that case,
    /// the seat must be provided explicitly, e.g. via [`PlayerGameState::obtain_connection_at`].
    pub fn index(&self) -> Option<usize> {
        let mut matching_seats = self
            .all_acquired_connections
            .iter()
            .enumerate()
            .filter(|(_, player_connections)| **player_connections == self.acquired_connections)
            .map(|(seat, _)| seat);

        match (matching_seats.next(), matching_seats.next()) {
            (Some(seat), None) => Some(seat),
            _ => None,
        }
    }

    /// Whether this player can acquire the given connection on the given map, i.e.:
    ///   * They have at least as many rails as the connection's length.
    ///   * They have at least as many cards of the connection's color as its length.
    ///   * The connection is on the map.
    ///   * Nobody has acquired the connection yet.
    pub fn can_acquire_connection(&self, connection: &Connection, map: &Map) -> bool {
        let length = u32::from(connection.length());

        if self.rails < length {
            trace!(rails = self.rails, "Cannot acquire {}: not enough rails.", connection);
            return false;
        }

        if self.num_cards_of_color(connection.color()) < length {
            trace!("Cannot acquire {}: not enough {} cards.", connection, connection.color());
            return false;
        }

        if !map.has_connection(connection) {
            trace!("Cannot acquire {}: not on the map.", connection);
            return false;
        }

        if let Some(owner) = self.owner_of(connection) {
            trace!(owner, "Cannot acquire {}: already acquired.", connection);
            return false;
        }

        true
    }

    /// Every connection of the map this player can acquire.
    pub fn obtainable_connections(&self, map: &Map) -> BTreeSet<Connection> {
        map.connections()
            .into_iter()
            .filter(|connection| self.can_acquire_connection(connection, map))
            .collect()
    }

    /// Returns the state after this player obtained the given connection: the connection is added to
    /// their acquired connections (here and in all players' connections), and its length is taken away
    /// from their rails and from their cards of its color.
    ///
    /// The caller must first make sure the connection can be acquired, via
    /// [`PlayerGameState::can_acquire_connection`]: this is not checked again.
    ///
    /// Fails if this player's seat is ambiguous (see [`PlayerGameState::index`]), or if the player
    /// does not have enough rails or cards.
    ///
    /// # Example
    /// ```
    /// use std::collections::{BTreeSet, HashMap};
    /// use trains::card::Color;
    /// use trains::city::City;
    /// use trains::map::{Connection, Destination, Map};
    /// use trains::player_game_state::PlayerGameState;
    ///
    /// let boston = City::new("boston", 100, 300).unwrap();
    /// let nyc = City::new("nyc", 100, 100).unwrap();
    /// let dc = City::new("dc", 300, 100).unwrap();
    /// let connection = Connection::new(boston.clone(), nyc.clone(), 3, Color::Green).unwrap();
    /// let map = Map::new(
    ///     BTreeSet::from([boston.clone(), nyc.clone(), dc.clone()]),
    ///     BTreeSet::from([connection.clone()]),
    ///     700,
    ///     800,
    /// )
    /// .unwrap();
    ///
    /// let player_game_state = PlayerGameState::new(
    ///     BTreeSet::new(),
    ///     BTreeSet::from([
    ///         Destination::new(boston.clone(), nyc.clone()).unwrap(),
    ///         Destination::new(dc, boston).unwrap(),
    ///     ]),
    ///     45,
    ///     HashMap::from([(Color::Green, 4)]),
    ///     vec![BTreeSet::new()],
    /// )
    /// .unwrap();
    /// assert!(player_game_state.can_acquire_connection(&connection, &map));
    ///
    /// let player_game_state = player_game_state.obtain_connection(&connection).unwrap();
    /// assert_eq!(player_game_state.rails(), 42);
    /// assert_eq!(player_game_state.num_cards_of_color(Color::Green), 1);
    /// assert!(!player_game_state.can_acquire_connection(&connection, &map));
    /// ```
    pub fn obtain_connection(&self, connection: &Connection) -> Result<Self, ValidationError> {
        let seat = self.index().ok_or_else(|| {
            ValidationError::new(
                "Cannot tell this player's seat apart, as other players hold the same connections.",
            )
        })?;

        self.obtain_connection_at(seat, connection)
    }

    /// Same as [`PlayerGameState::obtain_connection`], with this player's seat given explicitly.
    ///
    /// Fails if the connections at `seat` are not this player's connections.
    pub fn obtain_connection_at(
        &self,
        seat: usize,
        connection: &Connection,
    ) -> Result<Self, ValidationError> {
        if self.all_acquired_connections.get(seat) != Some(&self.acquired_connections) {
            return Err(ValidationError::new(format!(
                "Seat {} does not hold this player's connections.",
                seat
            )));
        }

        let length = u32::from(connection.length());

        let rails = self.rails.checked_sub(length).ok_or_else(|| {
            ValidationError::new(format!("Not enough rails to obtain {}.", connection))
        })?;

        let mut cards = self.cards.clone();
        let count = cards.entry(connection.color()).or_insert(0);
        *count = count.checked_sub(length).ok_or_else(|| {
            ValidationError::new(format!(
                "Not enough {} cards to obtain {}.",
                connection.color(),
                connection
            ))
        })?;

        let mut acquired_connections = self.acquired_connections.clone();
        acquired_connections.insert(connection.clone());

        let mut all_acquired_connections = self.all_acquired_connections.clone();
        all_acquired_connections[seat] = acquired_connections.clone();

        Self::new(
            acquired_connections,
            self.destinations.clone(),
            rails,
            cards,
            all_acquired_connections,
        )
    }

    /// Returns this state with all players' connections replaced, e.g. after another player acquired
    /// a connection. This player's own connections must still be in there.
    pub fn with_all_acquired_connections(
        &self,
        all_acquired_connections: Vec<BTreeSet<Connection>>,
    ) -> Result<Self, ValidationError> {
        Self::new(
            self.acquired_connections.clone(),
            self.destinations.clone(),
            self.rails,
            self.cards.clone(),
            all_acquired_connections,
        )
    }

    /// Returns this state with the given cards added to the player's hand.
    pub fn with_additional_cards(&self, new_cards: &[Color]) -> Result<Self, ValidationError> {
        let mut cards = self.cards.clone();
        for color in new_cards {
            *cards.entry(*color).or_insert(0) += 1;
        }

        Self::new(
            self.acquired_connections.clone(),
            self.destinations.clone(),
            self.rails,
            cards,
            self.all_acquired_connections.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::City;
    use crate::test_fixtures::*;

    use pretty_assertions::assert_eq;

    const RAILS: u32 = 45;

    fn cards(counts: &[(Color, u32)]) -> HashMap<Color, u32> {
        counts.iter().copied().collect()
    }

    fn player_game_state(
        acquired_connections: BTreeSet<Connection>,
        rails: u32,
        cards: HashMap<Color, u32>,
        all_acquired_connections: Vec<BTreeSet<Connection>>,
    ) -> PlayerGameState {
        PlayerGameState::new(
            acquired_connections,
            la_island_destinations(),
            rails,
            cards,
            all_acquired_connections,
        )
        .unwrap()
    }

    /// A lone player, with enough cards to acquire any connection of the LA island map.
    fn rich_lone_player() -> PlayerGameState {
        player_game_state(
            BTreeSet::new(),
            RAILS,
            cards(&[(Color::Blue, 5), (Color::Green, 5)]),
            vec![BTreeSet::new()],
        )
    }

    // Tests for `PlayerGameState::new`.

    #[test]
    fn new_rejects_wrong_number_of_destinations() {
        let one_destination = BTreeSet::from([Destination::new(nyc(), dc()).unwrap()]);
        let mut three_destinations = la_island_destinations();
        three_destinations.insert(Destination::new(boston(), dc()).unwrap());

        for destinations in [BTreeSet::new(), one_destination, three_destinations] {
            assert!(PlayerGameState::new(
                BTreeSet::new(),
                destinations,
                RAILS,
                HashMap::new(),
                vec![BTreeSet::new()],
            )
            .is_err());
        }
    }

    #[test]
    fn new_rejects_too_many_cards() {
        for too_many_cards in [
            cards(&[(Color::Red, MAX_CARDS_PER_COLOR + 1)]),
            cards(&[(Color::Red, NUM_TOTAL_CARDS), (Color::Blue, 1)]),
        ] {
            assert!(PlayerGameState::new(
                BTreeSet::new(),
                la_island_destinations(),
                RAILS,
                too_many_cards,
                vec![BTreeSet::new()],
            )
            .is_err());
        }
    }

    #[test]
    fn new_accepts_all_cards() {
        let state = player_game_state(
            BTreeSet::new(),
            RAILS,
            cards(&[(Color::Red, NUM_TOTAL_CARDS)]),
            vec![BTreeSet::new()],
        );
        assert_eq!(state.num_cards(), NUM_TOTAL_CARDS);
    }

    #[test]
    fn new_rejects_empty_all_acquired_connections() {
        assert!(PlayerGameState::new(
            BTreeSet::new(),
            la_island_destinations(),
            RAILS,
            HashMap::new(),
            Vec::new(),
        )
        .is_err());
    }

    #[test]
    fn new_rejects_all_acquired_connections_without_own_connections() {
        assert!(PlayerGameState::new(
            BTreeSet::from([nyc_to_dc()]),
            la_island_destinations(),
            RAILS,
            HashMap::new(),
            vec![BTreeSet::new(), BTreeSet::from([nyc_to_boston()])],
        )
        .is_err());
    }

    #[test]
    fn new_puts_all_colors_in_cards() {
        let state = player_game_state(
            BTreeSet::new(),
            RAILS,
            cards(&[(Color::Red, 2)]),
            vec![BTreeSet::new()],
        );

        let expected_cards = cards(&[
            (Color::Blue, 0),
            (Color::Green, 0),
            (Color::Red, 2),
            (Color::White, 0),
        ]);
        assert_eq!(state.cards(), expected_cards);
        assert_eq!(state.num_cards(), 2);
    }

    #[test]
    fn getters_return_copies() {
        let state = player_game_state(
            BTreeSet::from([nyc_to_dc()]),
            RAILS,
            HashMap::new(),
            vec![BTreeSet::from([nyc_to_dc()]), BTreeSet::new()],
        );

        let mut acquired_connections = state.acquired_connections();
        assert_eq!(acquired_connections, state.acquired_connections());
        acquired_connections.insert(nyc_to_boston());
        assert_eq!(state.acquired_connections(), BTreeSet::from([nyc_to_dc()]));

        let mut all_acquired_connections = state.all_acquired_connections();
        all_acquired_connections.clear();
        assert_eq!(state.all_acquired_connections().len(), 2);

        let mut cards = state.cards();
        cards.insert(Color::Red, 10);
        assert_eq!(state.num_cards_of_color(Color::Red), 0);
    }

    // Tests for `PlayerGameState::index`.

    #[test]
    fn index_of_unique_connections() {
        let state = player_game_state(
            BTreeSet::from([nyc_to_dc()]),
            RAILS,
            HashMap::new(),
            vec![BTreeSet::new(), BTreeSet::from([nyc_to_dc()])],
        );
        assert_eq!(state.index(), Some(1));
    }

    #[test]
    fn index_of_ambiguous_connections() {
        let state = player_game_state(
            BTreeSet::new(),
            RAILS,
            HashMap::new(),
            vec![BTreeSet::new(), BTreeSet::from([nyc_to_dc()]), BTreeSet::new()],
        );
        assert_eq!(state.index(), None);
    }

    #[test]
    fn owner_of_connection() {
        let state = player_game_state(
            BTreeSet::new(),
            RAILS,
            HashMap::new(),
            vec![BTreeSet::new(), BTreeSet::from([nyc_to_dc()])],
        );
        assert_eq!(state.owner_of(&nyc_to_dc()), Some(1));
        assert_eq!(state.owner_of(&nyc_to_boston()), None);
    }

    // Tests for `PlayerGameState::can_acquire_connection`.

    #[test]
    fn can_acquire_connection() {
        let state = rich_lone_player();
        let map = la_island_map();

        assert!(state.can_acquire_connection(&nyc_to_dc(), &map));
        assert!(state.can_acquire_connection(&nyc_to_boston(), &map));
    }

    #[test]
    fn cannot_acquire_connection_without_enough_rails() {
        let state = player_game_state(
            BTreeSet::new(),
            2,
            cards(&[(Color::Blue, 5)]),
            vec![BTreeSet::new()],
        );
        assert!(!state.can_acquire_connection(&nyc_to_dc(), &la_island_map()));
    }

    #[test]
    fn cannot_acquire_connection_without_enough_cards() {
        let state = player_game_state(
            BTreeSet::new(),
            RAILS,
            cards(&[(Color::Blue, 2), (Color::Red, 10)]),
            vec![BTreeSet::new()],
        );
        assert!(!state.can_acquire_connection(&nyc_to_dc(), &la_island_map()));
    }

    #[test]
    fn cannot_acquire_connection_not_on_map() {
        let la_to_boston = Connection::new(la(), boston(), 3, Color::Blue).unwrap();
        assert!(!rich_lone_player().can_acquire_connection(&la_to_boston, &la_island_map()));

        // Same cities and color, different length.
        let longer_nyc_to_dc = Connection::new(nyc(), dc(), 4, Color::Blue).unwrap();
        assert!(!rich_lone_player().can_acquire_connection(&longer_nyc_to_dc, &la_island_map()));

        // Same names, different coordinates.
        let other_dc = City::new("dc", 301, 100).unwrap();
        let nyc_to_other_dc = Connection::new(nyc(), other_dc, 3, Color::Blue).unwrap();
        assert!(!rich_lone_player().can_acquire_connection(&nyc_to_other_dc, &la_island_map()));
    }

    #[test]
    fn cannot_acquire_connection_already_acquired() {
        let map = la_island_map();

        let state = player_game_state(
            BTreeSet::new(),
            RAILS,
            cards(&[(Color::Blue, 5), (Color::Green, 5)]),
            vec![BTreeSet::new(), BTreeSet::from([nyc_to_dc()])],
        );
        assert!(!state.can_acquire_connection(&nyc_to_dc(), &map));
        assert!(state.can_acquire_connection(&nyc_to_boston(), &map));

        let state = player_game_state(
            BTreeSet::from([nyc_to_dc()]),
            RAILS,
            cards(&[(Color::Blue, 5)]),
            vec![BTreeSet::from([nyc_to_dc()])],
        );
        assert!(!state.can_acquire_connection(&nyc_to_dc(), &map));
    }

    #[test]
    fn obtainable_connections() {
        let map = la_island_map();

        assert_eq!(
            rich_lone_player().obtainable_connections(&map),
            BTreeSet::from([nyc_to_dc(), nyc_to_boston()])
        );

        let state = player_game_state(
            BTreeSet::new(),
            RAILS,
            cards(&[(Color::Green, 3)]),
            vec![BTreeSet::new()],
        );
        assert_eq!(
            state.obtainable_connections(&map),
            BTreeSet::from([nyc_to_boston()])
        );

        let state = player_game_state(BTreeSet::new(), RAILS, HashMap::new(), vec![BTreeSet::new()]);
        assert!(state.obtainable_connections(&map).is_empty());
    }

    // Tests for `PlayerGameState::obtain_connection`.

    #[test]
    fn obtain_connection() {
        let map = la_island_map();
        let state = player_game_state(
            BTreeSet::from([nyc_to_boston()]),
            RAILS,
            cards(&[(Color::Blue, 5), (Color::Red, 1)]),
            vec![BTreeSet::new(), BTreeSet::from([nyc_to_boston()])],
        );
        assert!(state.can_acquire_connection(&nyc_to_dc(), &map));

        let new_state = state.obtain_connection(&nyc_to_dc()).unwrap();

        let expected_acquired_connections = BTreeSet::from([nyc_to_boston(), nyc_to_dc()]);
        assert_eq!(
            new_state.acquired_connections(),
            expected_acquired_connections
        );
        assert_eq!(new_state.rails(), RAILS - 3);
        assert_eq!(new_state.num_cards_of_color(Color::Blue), 2);
        assert_eq!(new_state.num_cards_of_color(Color::Red), 1);
        assert_eq!(new_state.destinations(), state.destinations());
        assert_eq!(
            new_state.all_acquired_connections(),
            vec![BTreeSet::new(), expected_acquired_connections]
        );
        assert_eq!(new_state.index(), Some(1));
        assert!(!new_state.can_acquire_connection(&nyc_to_dc(), &map));

        // The original state is left untouched.
        assert_eq!(state.rails(), RAILS);
        assert_eq!(state.acquired_connections(), BTreeSet::from([nyc_to_boston()]));
    }

    #[test]
    fn obtain_connection_with_ambiguous_seat() {
        let state = player_game_state(
            BTreeSet::new(),
            RAILS,
            cards(&[(Color::Blue, 5)]),
            vec![BTreeSet::new(), BTreeSet::new()],
        );
        assert!(state.obtain_connection(&nyc_to_dc()).is_err());

        let new_state = state.obtain_connection_at(1, &nyc_to_dc()).unwrap();
        assert_eq!(
            new_state.all_acquired_connections(),
            vec![BTreeSet::new(), BTreeSet::from([nyc_to_dc()])]
        );
        assert_eq!(new_state.index(), Some(1));
    }

    #[test]
    fn obtain_connection_at_wrong_seat() {
        let state = player_game_state(
            BTreeSet::new(),
            RAILS,
            cards(&[(Color::Blue, 5)]),
            vec![BTreeSet::from([nyc_to_boston()]), BTreeSet::new()],
        );
        assert!(state.obtain_connection_at(0, &nyc_to_dc()).is_err());
        assert!(state.obtain_connection_at(2, &nyc_to_dc()).is_err());
        assert!(state.obtain_connection_at(1, &nyc_to_dc()).is_ok());
    }

    #[test]
    fn obtain_connection_without_enough_resources() {
        let state = player_game_state(
            BTreeSet::new(),
            2,
            cards(&[(Color::Blue, 5)]),
            vec![BTreeSet::new()],
        );
        assert!(state.obtain_connection(&nyc_to_dc()).is_err());

        let state = player_game_state(BTreeSet::new(), RAILS, HashMap::new(), vec![BTreeSet::new()]);
        assert!(state.obtain_connection(&nyc_to_dc()).is_err());
    }

    // Tests for the other state transitions.

    #[test]
    fn with_all_acquired_connections() {
        let state = rich_lone_player();

        let new_state = state
            .with_all_acquired_connections(vec![BTreeSet::new(), BTreeSet::from([nyc_to_dc()])])
            .unwrap();
        assert_eq!(new_state.index(), Some(0));
        assert!(!new_state.can_acquire_connection(&nyc_to_dc(), &la_island_map()));

        assert!(state
            .with_all_acquired_connections(vec![BTreeSet::from([nyc_to_dc()])])
            .is_err());
    }

    #[test]
    fn with_additional_cards() {
        let state = rich_lone_player();

        let new_state = state
            .with_additional_cards(&[Color::Red, Color::Blue, Color::Red])
            .unwrap();
        assert_eq!(new_state.num_cards_of_color(Color::Red), 2);
        assert_eq!(new_state.num_cards_of_color(Color::Blue), 6);
        assert_eq!(new_state.num_cards(), state.num_cards() + 3);

        let full_hand = player_game_state(
            BTreeSet::new(),
            RAILS,
            cards(&[(Color::White, NUM_TOTAL_CARDS)]),
            vec![BTreeSet::new()],
        );
        assert!(full_hand.with_additional_cards(&[Color::White]).is_err());
    }
}
