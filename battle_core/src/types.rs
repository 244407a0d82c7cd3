//! Core types shared by the selector and the combat loop

use serde::{Deserialize, Serialize};
use std::fmt;

/// Playable character archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterKind {
    Wizard,
    Elf,
    Human,
}

impl CharacterKind {
    /// All kinds in menu order
    pub fn all() -> &'static [CharacterKind] {
        &[CharacterKind::Wizard, CharacterKind::Elf, CharacterKind::Human]
    }

    /// 1-based position in the selection menu
    pub fn menu_index(&self) -> u8 {
        match self {
            CharacterKind::Wizard => 1,
            CharacterKind::Elf => 2,
            CharacterKind::Human => 3,
        }
    }

    /// Lower-case name accepted as a selection token
    pub fn token(&self) -> &'static str {
        match self {
            CharacterKind::Wizard => "wizard",
            CharacterKind::Elf => "elf",
            CharacterKind::Human => "human",
        }
    }
}

impl fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterKind::Wizard => write!(f, "Wizard"),
            CharacterKind::Elf => write!(f, "Elf"),
            CharacterKind::Human => write!(f, "Human"),
        }
    }
}

/// Flat combat stats for one combatant
///
/// Both values are expected to be strictly positive; [`crate::Roster`]
/// validation enforces this for loaded tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantStats {
    /// Starting (and maximum) health
    pub health: i32,
    /// Damage dealt on every turn, no variance
    pub damage: i32,
}

impl CombatantStats {
    pub const fn new(health: i32, damage: i32) -> Self {
        CombatantStats { health, damage }
    }

    /// Number of hits needed to bring `health` to zero or below
    pub fn hits_to_defeat(&self, health: i32) -> u32 {
        if health <= 0 {
            return 0;
        }
        let health = i64::from(health);
        let damage = i64::from(self.damage.max(1));
        ((health + damage - 1) / damage) as u32
    }
}
