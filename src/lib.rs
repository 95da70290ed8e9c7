pub mod card;
pub mod error;
pub mod game;
pub mod rng;
pub mod simulation;

pub use error::GameError;
