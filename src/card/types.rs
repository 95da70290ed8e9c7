use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Card ranks, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Position in `Rank::ALL` (2 is 0, Ace is 12)
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Rank> {
        Rank::ALL.get(index).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

/// Card suits. Only used to break ordering ties, never for gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Spades,
    Hearts,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Suit> {
        Suit::ALL.get(index).copied()
    }
}

/// A playing card.
///
/// Field order matters: the derived `Ord` compares rank first and suit second,
/// giving the total order `(rank_index, suit_index)`. Gameplay only ever
/// looks at [`Card::value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    /// Build a card from raw domain indices, rejecting anything outside
    /// the 13 ranks and 4 suits.
    pub fn from_indices(rank: usize, suit: usize) -> Result<Self, GameError> {
        match (Rank::from_index(rank), Suit::from_index(suit)) {
            (Some(r), Some(s)) => Ok(Card::new(r, s)),
            _ => Err(GameError::InvalidCard { rank, suit }),
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Gameplay value: the rank index alone
    pub fn value(&self) -> usize {
        self.rank.index()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {:?}", self.rank.name(), self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let card = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(card.to_string(), "Ace of Hearts");
        assert_eq!(Card::new(Rank::Ten, Suit::Clubs).to_string(), "10 of Clubs");
    }

    #[test]
    fn test_total_order_rank_then_suit() {
        let two_clubs = Card::new(Rank::Two, Suit::Clubs);
        let two_diamonds = Card::new(Rank::Two, Suit::Diamonds);
        let three_clubs = Card::new(Rank::Three, Suit::Clubs);

        assert!(two_clubs < two_diamonds);
        assert!(two_diamonds < three_clubs);
        assert!(Card::new(Rank::King, Suit::Spades) < Card::new(Rank::Ace, Suit::Clubs));
    }

    #[test]
    fn test_equality_needs_rank_and_suit() {
        let a = Card::new(Rank::Queen, Suit::Spades);
        let b = Card::new(Rank::Queen, Suit::Spades);
        let c = Card::new(Rank::Queen, Suit::Hearts);

        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
        // Same gameplay value even though the cards differ
        assert_eq!(a.value(), c.value());
    }

    #[test]
    fn test_from_indices() {
        let card = Card::from_indices(12, 2).expect("Ace of Hearts is valid");
        assert_eq!(card, Card::new(Rank::Ace, Suit::Hearts));

        assert_eq!(
            Card::from_indices(13, 0),
            Err(GameError::InvalidCard { rank: 13, suit: 0 })
        );
        assert_eq!(
            Card::from_indices(0, 4),
            Err(GameError::InvalidCard { rank: 0, suit: 4 })
        );
    }

    #[test]
    fn test_rank_indices() {
        for (i, rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(rank.index(), i);
        }
        assert_eq!(Rank::Two.index(), 0);
        assert_eq!(Rank::Ace.index(), 12);
        assert_eq!(Suit::Diamonds.index(), 3);
    }

    #[test]
    fn test_serialize() {
        let card = Card::new(Rank::King, Suit::Clubs);
        let json = serde_json::to_string(&card).expect("Card should serialize");
        assert_eq!(json, r#"{"rank":"K","suit":"Clubs"}"#);
    }
}
