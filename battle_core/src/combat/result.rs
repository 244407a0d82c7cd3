//! Combat events and results

use super::state::BattleState;
use crate::types::CharacterKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleOutcome {
    OpponentDefeated,
    PlayerDefeated,
}

/// Something that happened during a round; displays as one line of battle text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CombatEvent {
    PlayerStrike {
        character: CharacterKind,
        opponent: String,
        damage: i32,
        opponent_health: i32,
    },
    OpponentStrike {
        opponent: String,
        character: CharacterKind,
        damage: i32,
        player_health: i32,
    },
    OpponentDefeated {
        opponent: String,
    },
    PlayerDefeated {
        character: CharacterKind,
    },
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::PlayerStrike {
                character, opponent, ..
            } => write!(f, "The {} damaged the {}!", character, opponent),
            CombatEvent::OpponentStrike {
                opponent, character, ..
            } => write!(f, "The {} damaged the {}!", opponent, character),
            CombatEvent::OpponentDefeated { opponent } => {
                write!(f, "The {} has lost the battle!", opponent)
            }
            CombatEvent::PlayerDefeated { character } => {
                write!(f, "The {} has lost the battle!", character)
            }
        }
    }
}

/// Result of one round: a player turn and, unless it was fatal, an opponent turn
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundResult {
    pub events: Vec<CombatEvent>,
    /// Set when the round ended the battle
    pub outcome: Option<BattleOutcome>,
    /// Whether the opponent got to act this round
    pub opponent_acted: bool,
}

/// How a battle ended; the event text is streamed, not kept here
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    /// Rounds started, including the final one
    pub rounds: u32,
    pub final_state: BattleState,
}

impl BattleReport {
    pub fn player_won(&self) -> bool {
        self.outcome == BattleOutcome::OpponentDefeated
    }

    /// Compact serializable view of the outcome
    pub fn summary(&self) -> BattleSummary {
        BattleSummary {
            character: self.final_state.character,
            opponent: self.final_state.opponent_name.clone(),
            outcome: self.outcome,
            rounds: self.rounds,
            player_health: self.final_state.player_health,
            opponent_health: self.final_state.opponent_health,
        }
    }
}

/// Serializable end-of-battle summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSummary {
    pub character: CharacterKind,
    pub opponent: String,
    pub outcome: BattleOutcome,
    pub rounds: u32,
    pub player_health: i32,
    pub opponent_health: i32,
}
