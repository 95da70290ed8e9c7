use crate::error::GameError;
use crate::game::player::Player;
use crate::game::turns::{play_round, RoundOutcome};
use crate::game::zones::Deck;
use crate::rng::GameRng;
use serde::{Deserialize, Serialize};

/// Cards dealt to each player when they join
pub const HAND_SIZE: usize = 26;

/// Round cap the batch runner and CLI apply by default
pub const DEFAULT_MAX_ROUNDS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Print the round-by-round log to stdout
    pub verbose: bool,
    /// Stop playing rounds after this many and collect the cards.
    /// `None` plays until a player runs out.
    pub max_rounds: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            verbose: false,
            max_rounds: None,
        }
    }
}

/// Running tallies of what happened in the rounds played so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub rounds: u32,
    pub battles: u32,
    pub random_picks: u32,
    pub forfeited_battles: u32,
}

impl GameStats {
    fn record(&mut self, outcome: &RoundOutcome) {
        match *outcome {
            RoundOutcome::NotPlayed => return,
            RoundOutcome::Won { battle, random_pick, .. } => {
                if battle {
                    self.battles += 1;
                }
                if random_pick {
                    self.random_picks += 1;
                }
            }
            RoundOutcome::BattleForfeited { .. } => {
                self.forfeited_battles += 1;
            }
        }
        self.rounds += 1;
    }
}

/// Result of a finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: String,
    pub loser: String,
    pub stats: GameStats,
    /// True if the game was cut short by `max_rounds`
    pub round_limit_reached: bool,
    pub seed: u64,
}

/// A game of Bataille: one deck, its players and the random source they share
#[derive(Debug, Clone)]
pub struct Game {
    deck: Deck,
    players: Vec<Player>,
    rng: GameRng,
    config: GameConfig,
    stats: GameStats,
}

impl Game {
    pub fn new(seed: Option<u64>) -> Self {
        Game::with_config(GameConfig::default(), seed)
    }

    pub fn with_config(config: GameConfig, seed: Option<u64>) -> Self {
        let mut rng = GameRng::new(seed);
        let deck = Deck::new(&mut rng);
        Game {
            deck,
            players: Vec::new(),
            rng,
            config,
            stats: GameStats::default(),
        }
    }

    /// Seat a new player and deal them a hand. Returns the player's index.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<usize, GameError> {
        let hand = self.deck.deal(HAND_SIZE)?;
        let mut player = Player::new(name);
        player.receive(hand);
        self.players.push(player);
        Ok(self.players.len() - 1)
    }

    /// Seat an already-built player without dealing from the deck
    pub fn seat_player(&mut self, player: Player) -> usize {
        self.players.push(player);
        self.players.len() - 1
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, idx: usize) -> Option<&Player> {
        self.players.get(idx)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn rounds_played(&self) -> u32 {
        self.stats.rounds
    }

    pub fn remaining_counts(&self) -> Vec<usize> {
        self.players.iter().map(Player::remaining_count).collect()
    }

    /// Cards in the deck plus every player's stacks
    pub fn cards_in_circulation(&self) -> usize {
        self.deck.size() + self.players.iter().map(Player::remaining_count).sum::<usize>()
    }

    fn all_have_cards(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(Player::has_cards)
    }

    /// Play a single round and update the tallies
    pub fn play_round(&mut self) -> Result<RoundOutcome, GameError> {
        let round = self.stats.rounds + 1;
        let outcome = play_round(&mut self.players, &mut self.rng, round, self.config.verbose)?;
        self.stats.record(&outcome);

        if self.config.verbose && outcome != RoundOutcome::NotPlayed {
            for player in &self.players {
                println!("  {} has {} cards left", player, player.remaining_count());
            }
        }
        Ok(outcome)
    }

    /// Index of the player with the most cards, first in list order on equality
    fn leader(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (idx, player) in self.players.iter().enumerate() {
            match best {
                Some(b) if self.players[b].remaining_count() >= player.remaining_count() => {}
                _ => best = Some(idx),
            }
        }
        best
    }

    /// Index of the player with the fewest cards, first in list order on equality
    fn trailer(&self) -> Option<usize> {
        self.players
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| p.remaining_count())
            .map(|(idx, _)| idx)
    }

    /// Give every card still held to the player holding the most.
    /// Returns the winner's index, or None if there are no players.
    pub fn collect_all_cards(&mut self) -> Option<usize> {
        let winner = self.leader()?;
        for idx in 0..self.players.len() {
            if idx == winner {
                continue;
            }
            let cards = self.players[idx].take_all();
            self.players[winner].add_to_discard(cards);
        }

        if self.config.verbose {
            let w = &self.players[winner];
            println!(
                "[Game Over] {} wins, holding all {} cards",
                w,
                w.remaining_count()
            );
        }
        Some(winner)
    }

    /// Play rounds until someone runs out of cards (or the round limit is hit),
    /// then collect everything to the leader.
    pub fn play_game(&mut self) -> Result<GameResult, GameError> {
        if self.players.len() < 2 {
            return Err(GameError::NotEnoughPlayers {
                players: self.players.len(),
            });
        }
        let mut round_limit_reached = false;

        while self.all_have_cards() {
            if self.config.max_rounds.is_some_and(|limit| self.stats.rounds >= limit) {
                round_limit_reached = true;
                if self.config.verbose {
                    println!("[Limit] Stopping after {} rounds", self.stats.rounds);
                }
                break;
            }
            if self.play_round()? == RoundOutcome::NotPlayed {
                break;
            }
        }

        let winner = self.collect_all_cards().unwrap_or(0);
        let loser = self.trailer().unwrap_or(0);
        let winner_name = self.players[winner].name().to_string();
        let loser_name = self.players[loser].name().to_string();

        if self.config.verbose {
            println!("[Result] {} is out of cards and loses", loser_name);
            println!("[Result] {} wins after {} rounds", winner_name, self.stats.rounds);
        }

        Ok(GameResult {
            winner: winner_name,
            loser: loser_name,
            stats: self.stats,
            round_limit_reached,
            seed: self.rng.seed(),
        })
    }
}
