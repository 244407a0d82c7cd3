//! Mutable battle state, created once a character is chosen

use crate::config::Roster;
use crate::types::{CharacterKind, CombatantStats};
use serde::{Deserialize, Serialize};

/// Health of both sides plus the fixed stats their turns read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleState {
    pub character: CharacterKind,
    pub player: CombatantStats,
    pub opponent_name: String,
    pub opponent: CombatantStats,
    /// May go below zero on the killing blow
    pub player_health: i32,
    /// May go below zero on the killing blow
    pub opponent_health: i32,
}

impl BattleState {
    /// Fresh state for `character` against the roster's opponent
    pub fn new(character: CharacterKind, roster: &Roster) -> Self {
        let player = roster.stats(character);
        BattleState {
            character,
            player,
            opponent_name: roster.opponent_name.clone(),
            opponent: roster.opponent,
            player_health: player.health,
            opponent_health: roster.opponent.health,
        }
    }

    /// Override both health values, keeping stats (for scenario setup)
    pub fn with_health(mut self, player_health: i32, opponent_health: i32) -> Self {
        self.player_health = player_health;
        self.opponent_health = opponent_health;
        self
    }

    pub fn is_player_defeated(&self) -> bool {
        self.player_health <= 0
    }

    pub fn is_opponent_defeated(&self) -> bool {
        self.opponent_health <= 0
    }
}
