pub mod analyze;
pub mod engine;

pub use analyze::{BatchSummary, PlayerRecord};
pub use engine::{run_batch, run_game};
