pub mod bfs;
pub mod card;
pub mod city;
pub mod constants;
pub mod error;
pub mod map;
pub mod player_game_state;
pub mod referee_game_state;
pub mod strategy;
pub mod translation;

#[cfg(test)]
mod test_fixtures;
