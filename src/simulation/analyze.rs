//! Batch statistics
//!
//! Aggregates the results of many simulated games and saves them as JSON.

use crate::game::GameResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Wins and losses for one player name across a batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
}

/// Aggregate results of a batch of games
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub games: usize,
    pub base_seed: u64,
    pub players: BTreeMap<String, PlayerRecord>,
    pub avg_rounds: f64,
    pub shortest_game: u32,
    pub longest_game: u32,
    /// Seed of the longest game, for replaying it
    pub longest_game_seed: u64,
    pub avg_battles: f64,
    pub random_picks: u32,
    pub forfeited_battles: u32,
    pub round_limit_hits: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[GameResult], base_seed: u64) -> Self {
        let mut summary = BatchSummary {
            games: results.len(),
            base_seed,
            ..Default::default()
        };
        if results.is_empty() {
            return summary;
        }

        let mut total_rounds = 0u64;
        let mut total_battles = 0u64;
        summary.shortest_game = u32::MAX;

        for result in results {
            summary.players.entry(result.winner.clone()).or_default().wins += 1;
            summary.players.entry(result.loser.clone()).or_default().losses += 1;

            let rounds = result.stats.rounds;
            total_rounds += rounds as u64;
            total_battles += result.stats.battles as u64;
            summary.shortest_game = summary.shortest_game.min(rounds);
            if rounds > summary.longest_game {
                summary.longest_game = rounds;
                summary.longest_game_seed = result.seed;
            }
            summary.random_picks += result.stats.random_picks;
            summary.forfeited_battles += result.stats.forfeited_battles;
            if result.round_limit_reached {
                summary.round_limit_hits += 1;
            }
        }

        let games = results.len() as f64;
        for record in summary.players.values_mut() {
            record.win_rate = record.wins as f64 / games;
        }
        summary.avg_rounds = total_rounds as f64 / games;
        summary.avg_battles = total_battles as f64 / games;
        summary
    }

    /// Write the summary as pretty JSON, stamped with the current local time
    pub fn save(&self, path: &str) -> Result<(), std::io::Error> {
        #[derive(Serialize)]
        struct Stamped<'a> {
            generated_at: String,
            #[serde(flatten)]
            summary: &'a BatchSummary,
        }

        let stamped = Stamped {
            generated_at: Local::now().to_rfc3339(),
            summary: self,
        };
        let json = serde_json::to_string_pretty(&stamped)?;
        std::fs::write(path, json)
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Games: {}", self.games)?;
        for (name, record) in &self.players {
            let bar = "█".repeat((record.win_rate * 50.0) as usize);
            writeln!(
                f,
                "  {:12} {:5.1}% {} ({} wins)",
                name,
                record.win_rate * 100.0,
                bar,
                record.wins
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Average rounds:  {:.1}", self.avg_rounds)?;
        writeln!(f, "Shortest game:   {} rounds", self.shortest_game)?;
        writeln!(
            f,
            "Longest game:    {} rounds (seed {})",
            self.longest_game, self.longest_game_seed
        )?;
        writeln!(f, "Battles / game:  {:.2}", self.avg_battles)?;
        writeln!(f, "Random picks:    {}", self.random_picks)?;
        writeln!(f, "Forfeited battles: {}", self.forfeited_battles)?;
        write!(f, "Round limit hit: {}", self.round_limit_hits)
    }
}
