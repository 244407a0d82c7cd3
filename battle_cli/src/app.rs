//! One game session: selection, then combat, written to a line-based console

use anyhow::{Context, Result};
use battle_core::combat::BattleReport;
use battle_core::{resolve_battle_with, run_selector, Roster, SelectorOutcome};
use std::io::{BufRead, Write};
use tracing::info;

/// Play a session over `input`/`output`.
///
/// Returns `None` when the player chose to exit at the menu.
pub fn play<R, W>(input: &mut R, output: &mut W, roster: &Roster) -> Result<Option<BattleReport>>
where
    R: BufRead,
    W: Write,
{
    let state = match run_selector(input, output, roster).context("character selection")? {
        SelectorOutcome::Chosen(state) => state,
        SelectorOutcome::Exit => {
            info!("player left at the menu");
            return Ok(None);
        }
    };

    // Each line goes out as its turn resolves
    let report = resolve_battle_with(state, |event| {
        writeln!(output, "{}", event)?;
        output.flush()
    })
    .context("write battle text")?;

    Ok(Some(report))
}

/// Write the report summary as pretty JSON with a trailing newline.
pub fn write_summary<W: Write>(output: &mut W, report: &BattleReport) -> Result<()> {
    let payload = serde_json::to_string_pretty(&report.summary()).context("serialize summary")?;
    writeln!(output, "{}", payload).context("write summary")?;
    Ok(())
}
