//! Combatant stat table, with optional TOML overrides

use super::ConfigError;
use crate::types::{CharacterKind, CombatantStats};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_OPPONENT_NAME: &str = "Dragon";

const WIZARD: CombatantStats = CombatantStats::new(70, 150);
const ELF: CombatantStats = CombatantStats::new(100, 100);
const HUMAN: CombatantStats = CombatantStats::new(150, 20);
const DRAGON: CombatantStats = CombatantStats::new(300, 50);

/// Stats for every playable kind plus the opponent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub wizard: CombatantStats,
    pub elf: CombatantStats,
    pub human: CombatantStats,
    pub opponent_name: String,
    pub opponent: CombatantStats,
}

impl Default for Roster {
    fn default() -> Self {
        Roster {
            wizard: WIZARD,
            elf: ELF,
            human: HUMAN,
            opponent_name: DEFAULT_OPPONENT_NAME.to_string(),
            opponent: DRAGON,
        }
    }
}

impl Roster {
    /// Stats for a playable kind
    pub fn stats(&self, kind: CharacterKind) -> CombatantStats {
        match kind {
            CharacterKind::Wizard => self.wizard,
            CharacterKind::Elf => self.elf,
            CharacterKind::Human => self.human,
        }
    }

    /// Load a roster from a TOML file, filling unset fields with defaults
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: path.to_path_buf(),
        })?;
        let roster = Self::parse(&content, path)?;
        debug!(path = %path.display(), "loaded roster");
        Ok(roster)
    }

    /// Parse a roster from a TOML string (for testing)
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: RosterFileConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            error: e,
            path: path.to_path_buf(),
        })?;

        Self::from_config(config).map_err(|message| ConfigError::Validation {
            message,
            path: path.to_path_buf(),
        })
    }

    /// Resolve a raw file config against the default table
    pub fn from_config(config: RosterFileConfig) -> Result<Self, String> {
        let defaults = Roster::default();
        let roster = Roster {
            wizard: config.wizard.resolve(defaults.wizard),
            elf: config.elf.resolve(defaults.elf),
            human: config.human.resolve(defaults.human),
            opponent: config.opponent.stats().resolve(defaults.opponent),
            opponent_name: config.opponent.name.unwrap_or(defaults.opponent_name),
        };
        roster.validate()?;
        Ok(roster)
    }

    /// Every health and damage value must be positive for combat to terminate
    pub fn validate(&self) -> Result<(), String> {
        for kind in CharacterKind::all() {
            check_stats(&kind.to_string(), self.stats(*kind))?;
        }
        if self.opponent_name.trim().is_empty() {
            return Err("opponent name must not be empty".to_string());
        }
        check_stats(&self.opponent_name, self.opponent)
    }
}

fn check_stats(label: &str, stats: CombatantStats) -> Result<(), String> {
    if stats.health <= 0 {
        return Err(format!("{} health must be positive, got {}", label, stats.health));
    }
    if stats.damage <= 0 {
        return Err(format!("{} damage must be positive, got {}", label, stats.damage));
    }
    Ok(())
}

/// TOML layout of a roster file; every section is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterFileConfig {
    #[serde(default)]
    pub wizard: StatsConfig,
    #[serde(default)]
    pub elf: StatsConfig,
    #[serde(default)]
    pub human: StatsConfig,
    #[serde(default)]
    pub opponent: OpponentConfig,
}

/// Partial stat overrides
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsConfig {
    #[serde(default)]
    pub health: Option<i32>,
    #[serde(default)]
    pub damage: Option<i32>,
}

impl StatsConfig {
    fn resolve(&self, fallback: CombatantStats) -> CombatantStats {
        CombatantStats {
            health: self.health.unwrap_or(fallback.health),
            damage: self.damage.unwrap_or(fallback.damage),
        }
    }
}

/// Opponent section: stats plus display name
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpponentConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub health: Option<i32>,
    #[serde(default)]
    pub damage: Option<i32>,
}

impl OpponentConfig {
    /// The stat overrides without the name
    pub fn stats(&self) -> StatsConfig {
        StatsConfig {
            health: self.health,
            damage: self.damage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_table() {
        let roster = Roster::default();
        assert_eq!(roster.stats(CharacterKind::Wizard), CombatantStats::new(70, 150));
        assert_eq!(roster.stats(CharacterKind::Elf), CombatantStats::new(100, 100));
        assert_eq!(roster.stats(CharacterKind::Human), CombatantStats::new(150, 20));
        assert_eq!(roster.opponent, CombatantStats::new(300, 50));
        assert_eq!(roster.opponent_name, "Dragon");
        assert!(roster.validate().is_ok());
    }

    #[test]
    fn test_shipped_roster_matches_default() {
        let roster = Roster::from_toml_str(include_str!("../../../config/roster.toml")).unwrap();
        assert_eq!(roster, Roster::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        let roster = Roster::from_toml_str("").unwrap();
        assert_eq!(roster, Roster::default());
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
[human]
damage = 40

[opponent]
name = "Wyvern"
health = 200
"#;
        let roster = Roster::from_toml_str(toml).unwrap();
        assert_eq!(roster.human, CombatantStats::new(150, 40));
        assert_eq!(roster.wizard, CombatantStats::new(70, 150));
        assert_eq!(roster.opponent_name, "Wyvern");
        assert_eq!(roster.opponent, CombatantStats::new(200, 50));
    }

    #[test]
    fn test_opponent_overrides_share_fallback() {
        let roster = Roster::from_toml_str("[opponent]\ndamage = 75\n").unwrap();
        assert_eq!(roster.opponent, CombatantStats::new(300, 75));
        assert_eq!(roster.opponent_name, "Dragon");

        let stats = OpponentConfig {
            name: Some("Wyvern".to_string()),
            health: Some(120),
            damage: None,
        }
        .stats();
        assert_eq!(stats.resolve(DRAGON), CombatantStats::new(120, 50));
    }

    #[test]
    fn test_rejects_non_positive_damage() {
        let err = Roster::from_toml_str("[elf]\ndamage = 0\n").unwrap_err();
        match err {
            ConfigError::Validation { message, .. } => {
                assert!(message.contains("Elf damage"), "{}", message);
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_empty_opponent_name() {
        let err = Roster::from_toml_str("[opponent]\nname = \"  \"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn test_rejects_unknown_section() {
        let err = Roster::from_toml_str("[orc]\nhealth = 10\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"[wizard]\nhealth = 90\n").unwrap();

        let roster = Roster::load_from_path(&path).unwrap();
        assert_eq!(roster.wizard, CombatantStats::new(90, 150));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Roster::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }
}
