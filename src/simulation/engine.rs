use crate::error::GameError;
use crate::game::{Game, GameConfig, GameResult};
use crate::rng::GameRng;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Play one full game between `names`, seated in order
pub fn run_game(names: &[String], seed: u64, config: GameConfig) -> Result<GameResult, GameError> {
    let mut game = Game::with_config(config, Some(seed));
    for name in names {
        game.add_player(name.as_str())?;
    }

    if config.verbose {
        println!("=== Game Start (seed: {}) ===", seed);
        for player in game.players() {
            println!("  {} is dealt {} cards", player, player.remaining_count());
        }
        println!();
    }

    game.play_game()
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} games ({per_sec})",
    ) {
        pb.set_style(style);
    }
    pb
}

/// Play `num_games` independent games in parallel.
///
/// Game `i` is seeded with `GameRng::derive(base_seed, i)`, so a batch with a
/// fixed base seed always gives the same results regardless of thread count.
pub fn run_batch(
    names: &[String],
    num_games: usize,
    base_seed: u64,
    max_rounds: u32,
    show_progress: bool,
) -> Result<Vec<GameResult>, GameError> {
    let pb = if show_progress {
        progress_bar(num_games as u64)
    } else {
        ProgressBar::hidden()
    };

    let config = GameConfig {
        verbose: false,
        max_rounds: Some(max_rounds),
    };

    let results = (0..num_games)
        .into_par_iter()
        .map(|i| {
            let result = run_game(names, GameRng::derive(base_seed, i as u64), config);
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>, _>>();

    pb.finish_and_clear();
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::DEFAULT_MAX_ROUNDS;

    fn names() -> Vec<String> {
        vec!["Alice".to_string(), "Bob".to_string()]
    }

    #[test]
    fn test_same_seed_same_game() {
        let config = GameConfig::default();
        let result1 = run_game(&names(), 54321, config).expect("game should finish");
        let result2 = run_game(&names(), 54321, config).expect("game should finish");
        assert_eq!(result1, result2, "Same seed should produce the same game");
    }

    #[test]
    fn test_winner_is_a_player() {
        let result = run_game(&names(), 7, GameConfig::default()).expect("game should finish");
        assert!(names().contains(&result.winner));
        assert!(names().contains(&result.loser));
        assert_ne!(result.winner, result.loser);
    }

    #[test]
    fn test_three_players_cannot_be_dealt() {
        let three = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let result = run_game(&three, 1, GameConfig::default());
        assert!(matches!(result, Err(GameError::InsufficientCards { .. })));
    }

    #[test]
    fn test_batch_is_deterministic() {
        let batch1 = run_batch(&names(), 16, 99, DEFAULT_MAX_ROUNDS, false).expect("batch should finish");
        let batch2 = run_batch(&names(), 16, 99, DEFAULT_MAX_ROUNDS, false).expect("batch should finish");
        assert_eq!(batch1.len(), 16);
        assert_eq!(batch1, batch2);
        assert_eq!(batch1[0].seed, GameRng::derive(99, 0));
    }

    #[test]
    fn test_batch_applies_round_limit() {
        let results = run_batch(&names(), 4, 3, 2, false).expect("batch should finish");
        for result in &results {
            assert!(result.round_limit_reached);
            assert_eq!(result.stats.rounds, 2);
        }
    }

    #[test]
    fn test_single_player_is_rejected() {
        let solo = vec!["Alice".to_string()];
        let result = run_game(&solo, 1, GameConfig::default());
        assert_eq!(result, Err(GameError::NotEnoughPlayers { players: 1 }));
    }

    #[test]
    fn test_batch_propagates_errors() {
        let three = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        assert!(run_batch(&three, 4, 1, DEFAULT_MAX_ROUNDS, false).is_err());
    }
}
