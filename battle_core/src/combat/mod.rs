//! Combat loop - alternating player and opponent turns until one side falls

mod resolution;
mod result;
mod state;

pub use resolution::{resolve_battle, resolve_battle_with, resolve_round};
pub use result::{BattleOutcome, BattleReport, BattleSummary, CombatEvent, RoundResult};
pub use state::BattleState;
