use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Not enough cards in the deck: requested {requested}, {available} available")]
    InsufficientCards { requested: usize, available: usize },
    #[error("{player} has no cards left to draw")]
    NoCardsToDraw { player: String },
    #[error("A game needs at least two players, {players} seated")]
    NotEnoughPlayers { players: usize },
    #[error("Invalid card: rank index {rank}, suit index {suit}")]
    InvalidCard { rank: usize, suit: usize },
}
