pub mod types;

pub use types::{Card, Rank, Suit};
