//! Fixed rules of the game, shared by the map, player and referee states.

/// Lengths a connection may have. Any other length is rejected.
pub const CONNECTION_LENGTHS: [u8; 3] = [3, 4, 5];

pub const MIN_WIDTH: u32 = 10;
pub const MAX_WIDTH: u32 = 800;
pub const MIN_HEIGHT: u32 = 10;
pub const MAX_HEIGHT: u32 = 800;

// City names may only use letters, digits, spaces, commas and periods.
pub const MAX_CITY_NAME_LENGTH: usize = 25;

/// Every player holds exactly this many destinations for the whole game.
pub const NUM_DESTINATIONS_PER_PLAYER: usize = 2;

/// Total number of cards in play. A player's hand can never exceed it,
/// and a freshly generated deck holds exactly that many cards.
pub const NUM_TOTAL_CARDS: u32 = 250;

/// Ceiling on how many cards of a single color a player may hold.
pub const MAX_CARDS_PER_COLOR: u32 = NUM_TOTAL_CARDS;

/// How many cards are handed to a player asking for more cards.
pub const NUM_CARDS_PER_DRAW: usize = 2;

/// Above this many cards, the "hold 10" strategy starts acquiring connections.
pub const HOLD_10_CARD_THRESHOLD: u32 = 10;
