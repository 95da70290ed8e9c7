//! Round resolution.
//!
//! A round draws one card per player and gives every played card to the
//! highest rank. Equal top ranks start a battle: each tied player stakes
//! three more cards onto the table and the whole table is compared again,
//! so a staked card that beats the tied rank wins it for its owner. If the
//! top rank is still shared between players, the round is settled by a
//! uniform random pick among them, so a round never escalates more than once.

use crate::card::Card;
use crate::error::GameError;
use crate::game::player::Player;
use crate::rng::GameRng;

/// Cards each tied player commits to a battle
pub const BATTLE_STAKE: usize = 3;

/// A card on the table together with the index of the player who played it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedCard {
    pub player: usize,
    pub card: Card,
}

/// What happened in a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Fewer than two players, or some player is out of cards
    NotPlayed,
    /// `winner` took all `cards` on the table
    Won {
        winner: usize,
        cards: usize,
        battle: bool,
        random_pick: bool,
    },
    /// A tied player could not stake a battle; the table went to the tied
    /// player holding the most cards
    BattleForfeited { awarded_to: usize, cards: usize },
}

impl RoundOutcome {
    /// True when a winner was determined by comparison
    pub fn resolved(&self) -> bool {
        matches!(self, RoundOutcome::Won { .. })
    }
}

/// Plays sharing the highest value, one per player, in played order
fn top_plays(table: &[PlayedCard]) -> Vec<PlayedCard> {
    let mut ranked = table.to_vec();
    // Stable: equal values keep their played order
    ranked.sort_by(|a, b| b.card.value().cmp(&a.card.value()));

    let best = match ranked.first() {
        Some(play) => play.card.value(),
        None => return Vec::new(),
    };
    ranked
        .into_iter()
        .take_while(|play| play.card.value() == best)
        .fold(Vec::new(), |mut top: Vec<PlayedCard>, play| {
            if !top.iter().any(|seen| seen.player == play.player) {
                top.push(play);
            }
            top
        })
}

/// Tied player with the most remaining cards, first in list order on equality
fn forfeit_recipient(players: &[Player], tied: &[PlayedCard]) -> usize {
    let mut best = tied[0].player;
    for play in &tied[1..] {
        if players[play.player].remaining_count() > players[best].remaining_count() {
            best = play.player;
        }
    }
    best
}

fn award(players: &mut [Player], winner: usize, pool: &[PlayedCard]) {
    players[winner].add_to_discard(pool.iter().map(|play| play.card));
}

fn describe(players: &[Player], plays: &[PlayedCard]) -> String {
    plays
        .iter()
        .map(|play| format!("{} plays {}", players[play.player], play.card))
        .collect::<Vec<_>>()
        .join(" vs ")
}

/// Play one round, including at most one battle.
///
/// The pool holds every card put on the table this round in the order it was
/// played. Every comparison looks at the whole pool.
pub fn play_round(
    players: &mut [Player],
    rng: &mut GameRng,
    round: u32,
    verbose: bool,
) -> Result<RoundOutcome, GameError> {
    if players.len() < 2 || !players.iter().all(Player::has_cards) {
        return Ok(RoundOutcome::NotPlayed);
    }

    let mut pool = Vec::with_capacity(players.len() * (1 + BATTLE_STAKE));
    for (idx, player) in players.iter_mut().enumerate() {
        let card = player.draw(rng)?;
        pool.push(PlayedCard { player: idx, card });
    }
    let mut in_battle = false;

    if verbose {
        println!("[Round {}] {}", round, describe(players, &pool));
    }

    loop {
        let tied = top_plays(&pool);

        if tied.len() == 1 {
            let winner = tied[0];
            award(players, winner.player, &pool);
            if verbose {
                println!(
                    "[Result] {} wins {} cards with {}",
                    players[winner.player],
                    pool.len(),
                    winner.card
                );
            }
            return Ok(RoundOutcome::Won {
                winner: winner.player,
                cards: pool.len(),
                battle: in_battle,
                random_pick: false,
            });
        }

        if in_battle {
            let winner = tied[rng.random_range(tied.len())];
            award(players, winner.player, &pool);
            if verbose {
                println!(
                    "[Result] Tied again, {} picked at random and wins {} cards",
                    players[winner.player],
                    pool.len()
                );
            }
            return Ok(RoundOutcome::Won {
                winner: winner.player,
                cards: pool.len(),
                battle: true,
                random_pick: true,
            });
        }

        if verbose {
            println!("[Battle] {} tied players", tied.len());
        }

        let can_stake = tied
            .iter()
            .all(|play| players[play.player].remaining_count() >= BATTLE_STAKE);
        if !can_stake {
            let awarded_to = forfeit_recipient(players, &tied);
            award(players, awarded_to, &pool);
            if verbose {
                println!(
                    "[Battle] Not enough cards to battle, {} takes the {} cards on the table",
                    players[awarded_to],
                    pool.len()
                );
            }
            return Ok(RoundOutcome::BattleForfeited {
                awarded_to,
                cards: pool.len(),
            });
        }

        let staked_from = pool.len();
        for play in &tied {
            let player = &mut players[play.player];
            for _ in 0..BATTLE_STAKE {
                let card = player.draw(rng)?;
                pool.push(PlayedCard {
                    player: play.player,
                    card,
                });
            }
        }
        in_battle = true;

        if verbose {
            println!("[Battle] {}", describe(players, &pool[staked_from..]));
        }
    }
}
