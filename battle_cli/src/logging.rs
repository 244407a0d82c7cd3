//! Diagnostics for `dragon-duel`.
//!
//! The game talks to the player on stdout, one line per menu entry or turn.
//! Tracing from `battle_core` (selection attempts, each turn's damage and the
//! remaining health, the final outcome) goes to stderr, so piping stdout
//! still yields only the battle text.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr subscriber.
///
/// `RUST_LOG` picks the level; without it only warnings show, which keeps a
/// normal game free of log lines.
///
/// # Example
/// ```bash
/// # every turn with health values
/// RUST_LOG=battle_core=debug dragon-duel
/// # just the battle outcome
/// RUST_LOG=battle_core=info dragon-duel --roster config/roster.toml
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).without_time().compact())
        .init();
}
