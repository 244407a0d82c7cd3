//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::types::{CharacterKind, CombatantStats};

// Selection
pub use crate::selection::{parse_selection, run_selector, Selection, SelectorOutcome};

// Combat
pub use crate::combat::{
    resolve_battle, resolve_battle_with, resolve_round, BattleOutcome, BattleReport, BattleState, BattleSummary,
    CombatEvent, RoundResult,
};

// Config
pub use crate::config::{ConfigError, Roster};

// Errors
pub use crate::error::{SelectionError, UnrecognizedSelection};
