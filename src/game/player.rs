use crate::card::Card;
use crate::error::GameError;
use crate::rng::GameRng;

/// A player and their two piles.
///
/// The active stack is drawn LIFO (top is the last element). Won cards go to
/// the discard stack, which is shuffled back in once the active stack runs out.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    active: Vec<Card>,
    discard: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            active: Vec::new(),
            discard: Vec::new(),
        }
    }

    /// Player starting with `cards` as their active stack
    pub fn with_hand(name: impl Into<String>, cards: Vec<Card>) -> Self {
        let mut player = Player::new(name);
        player.active = cards;
        player
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn active(&self) -> &[Card] {
        &self.active
    }

    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Place freshly dealt cards on the active stack
    pub fn receive(&mut self, cards: Vec<Card>) {
        self.active.extend(cards);
    }

    /// Draw the top card, recycling the discard stack first if needed
    pub fn draw(&mut self, rng: &mut GameRng) -> Result<Card, GameError> {
        if self.active.is_empty() {
            if self.discard.is_empty() {
                return Err(GameError::NoCardsToDraw {
                    player: self.name.clone(),
                });
            }
            std::mem::swap(&mut self.active, &mut self.discard);
            rng.shuffle(&mut self.active);
        }

        self.active.pop().ok_or_else(|| GameError::NoCardsToDraw {
            player: self.name.clone(),
        })
    }

    /// Append won cards to the discard stack, in the given order
    pub fn add_to_discard(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard.extend(cards);
    }

    /// Empty both stacks, active first then discard
    pub fn take_all(&mut self) -> Vec<Card> {
        let mut cards = std::mem::take(&mut self.active);
        cards.append(&mut self.discard);
        cards
    }

    pub fn remaining_count(&self) -> usize {
        self.active.len() + self.discard.len()
    }

    pub fn has_cards(&self) -> bool {
        self.remaining_count() > 0
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::game::zones::Deck;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_draw_is_lifo() {
        let mut rng = GameRng::new(Some(1));
        let mut player = Player::with_hand(
            "Test",
            vec![card(Rank::Two, Suit::Clubs), card(Rank::Ace, Suit::Spades)],
        );
        assert_eq!(player.draw(&mut rng), Ok(card(Rank::Ace, Suit::Spades)));
        assert_eq!(player.draw(&mut rng), Ok(card(Rank::Two, Suit::Clubs)));
    }

    #[test]
    fn test_draw_last_card_then_fail() {
        let mut rng = GameRng::new(Some(1));
        let two_clubs = card(Rank::Two, Suit::Clubs);
        let mut player = Player::with_hand("Test", vec![two_clubs]);

        assert_eq!(player.draw(&mut rng), Ok(two_clubs));
        assert!(player.active().is_empty());
        assert_eq!(
            player.draw(&mut rng),
            Err(GameError::NoCardsToDraw { player: "Test".to_string() })
        );
    }

    #[test]
    fn test_draw_recycles_discard() {
        let mut rng = GameRng::new(Some(5));
        let mut player = Player::new("Test");
        let won = vec![
            card(Rank::King, Suit::Hearts),
            card(Rank::Three, Suit::Clubs),
            card(Rank::Nine, Suit::Diamonds),
        ];
        player.add_to_discard(won.clone());
        assert_eq!(player.remaining_count(), 3);

        let drawn = player.draw(&mut rng).expect("discard should be recycled");
        assert!(won.contains(&drawn));
        assert_eq!(player.remaining_count(), 2);
        assert_eq!(player.active().len(), 2);
        assert!(player.discard().is_empty());
    }

    #[test]
    fn test_no_recycle_while_active_has_cards() {
        let mut rng = GameRng::new(Some(5));
        let mut player = Player::with_hand("Test", vec![card(Rank::Five, Suit::Spades)]);
        player.add_to_discard(vec![card(Rank::Six, Suit::Spades)]);

        assert_eq!(player.draw(&mut rng), Ok(card(Rank::Five, Suit::Spades)));
        assert_eq!(player.discard().len(), 1);
    }

    #[test]
    fn test_draw_from_dealt_hand() {
        let mut rng = GameRng::new(Some(2));
        let mut deck = Deck::new(&mut rng);
        let mut player = Player::new("Test");
        player.receive(deck.deal(5).expect("5 cards available"));

        player.draw(&mut rng).expect("player has cards");
        assert_eq!(player.active().len(), 4);
    }

    #[test]
    fn test_add_to_discard_keeps_order() {
        let mut player = Player::new("Test");
        let cards = vec![card(Rank::King, Suit::Hearts), card(Rank::Two, Suit::Spades)];
        player.add_to_discard(cards.clone());
        assert_eq!(player.discard(), cards.as_slice());
        assert_eq!(player.remaining_count(), 2);
        assert!(player.has_cards());
    }

    #[test]
    fn test_take_all_empties_both_stacks() {
        let mut player = Player::with_hand("Test", vec![card(Rank::Four, Suit::Clubs)]);
        player.add_to_discard(vec![card(Rank::Jack, Suit::Hearts)]);

        let cards = player.take_all();
        assert_eq!(
            cards,
            vec![card(Rank::Four, Suit::Clubs), card(Rank::Jack, Suit::Hearts)]
        );
        assert!(!player.has_cards());
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(Player::new("Alice").to_string(), "Alice");
    }
}
