pub mod player;
pub mod state;
pub mod turns;
pub mod zones;

pub use player::Player;
pub use state::{Game, GameConfig, GameResult, GameStats, DEFAULT_MAX_ROUNDS, HAND_SIZE};
pub use turns::{play_round, PlayedCard, RoundOutcome, BATTLE_STAKE};
pub use zones::{Deck, DECK_SIZE};
