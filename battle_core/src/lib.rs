//! battle_core - Rules for a one-on-one, turn-based text battle
//!
//! This library provides:
//! - Roster: Fixed stat table for the playable kinds and the opponent
//! - Selector: Menu, token matching and the retry loop that picks a kind
//! - BattleState: Health of both sides once a kind is chosen
//! - Combat resolution: Alternating fixed-damage turns until one side falls
//!
//! # Quick Start
//!
//! ```rust
//! use battle_core::prelude::*;
//!
//! let roster = Roster::default();
//! let state = BattleState::new(CharacterKind::Wizard, &roster);
//! let report = resolve_battle_with(state, |event| {
//!     println!("{}", event);
//!     Ok::<(), std::io::Error>(())
//! })?;
//!
//! assert_eq!(report.outcome, BattleOutcome::OpponentDefeated);
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod combat;
pub mod config;
pub mod error;
pub mod prelude;
pub mod selection;
pub mod types;

// Core API - what most users need
pub use combat::{
    resolve_battle, resolve_battle_with, resolve_round, BattleOutcome, BattleReport, BattleState,
};
pub use selection::{parse_selection, run_selector, Selection, SelectorOutcome};
pub use types::{CharacterKind, CombatantStats};

// Configuration
pub use config::{ConfigError, Roster};

// Errors
pub use error::{SelectionError, UnrecognizedSelection};
