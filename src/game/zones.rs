use crate::card::{Card, Rank, Suit};
use crate::error::GameError;
use crate::rng::GameRng;

/// Number of cards in a full deck
pub const DECK_SIZE: usize = 52;

/// Deck - ordered pile the hands are dealt from
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full 52-card deck, shuffled
    pub fn new(rng: &mut GameRng) -> Self {
        let mut deck = Deck::standard();
        deck.shuffle(rng);
        deck
    }

    /// Full 52-card deck in suit-major order (Clubs 2..Ace, then Spades, ...)
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    /// Remove and return the first `n` cards, keeping the rest in order
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::InsufficientCards {
                requested: n,
                available: self.cards.len(),
            });
        }
        Ok(self.cards.drain(0..n).collect())
    }

    /// Put cards back and reshuffle the whole deck
    pub fn return_cards(&mut self, cards: Vec<Card>, rng: &mut GameRng) {
        self.cards.extend(cards);
        self.shuffle(rng);
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
