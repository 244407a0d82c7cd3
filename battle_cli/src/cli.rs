use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "dragon-duel",
    version,
    about = "Pick a hero and trade blows with the dragon"
)]
pub struct Cli {
    /// TOML file overriding combatant health and damage.
    #[arg(long, value_name = "PATH")]
    pub roster: Option<PathBuf>,

    /// Print a JSON summary of the battle after it ends.
    #[arg(long)]
    pub summary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::parse_from(["dragon-duel"]);
        assert!(cli.roster.is_none());
        assert!(!cli.summary);
    }

    #[test]
    fn parse_roster_and_summary() {
        let cli = Cli::parse_from(["dragon-duel", "--roster", "stats.toml", "--summary"]);
        assert_eq!(cli.roster, Some(PathBuf::from("stats.toml")));
        assert!(cli.summary);
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["dragon-duel", "--seed", "3"]).is_err());
    }
}
