//! Character selection - menu, token matching and the retry loop

use crate::combat::BattleState;
use crate::config::Roster;
use crate::error::{SelectionError, UnrecognizedSelection};
use crate::types::CharacterKind;
use std::io::{BufRead, Write};
use tracing::debug;

pub const MENU_TITLE: &str = "Choose your character:";
pub const PROMPT: &str = "Choose your character (1-4): ";
pub const FAREWELL: &str = "Goodbye!";

const EXIT_INDEX: u8 = 4;
const EXIT_TOKEN: &str = "exit";

/// Result of matching one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Selected(CharacterKind),
    ExitRequested,
    Invalid(UnrecognizedSelection),
}

/// How the selector finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorOutcome {
    /// A kind was chosen; combat can start from this state
    Chosen(BattleState),
    /// The player asked to leave; combat must not start
    Exit,
}

/// Match a raw input line against the accepted tokens
///
/// Comparison is case-insensitive and ignores surrounding whitespace. Each
/// kind accepts its menu number or its name; exit accepts `4` or `exit`.
pub fn parse_selection(raw: &str) -> Selection {
    let input = raw.trim().to_lowercase();

    if input == EXIT_TOKEN || input == EXIT_INDEX.to_string() {
        return Selection::ExitRequested;
    }

    let matched = CharacterKind::all()
        .iter()
        .find(|kind| input == kind.token() || input == kind.menu_index().to_string());

    match matched {
        Some(kind) => Selection::Selected(*kind),
        None => Selection::Invalid(UnrecognizedSelection { input }),
    }
}

/// Write the four menu options followed by the prompt
pub fn write_menu<W: Write>(output: &mut W) -> std::io::Result<()> {
    writeln!(output, "{}", MENU_TITLE)?;
    for kind in CharacterKind::all() {
        writeln!(output, "{}) {}", kind.menu_index(), kind)?;
    }
    writeln!(output, "{}) Exit", EXIT_INDEX)?;
    write!(output, "{}", PROMPT)?;
    output.flush()
}

/// Run the selection loop until a kind is chosen or exit is requested
///
/// Unrecognized input, including lines that are not valid UTF-8, is
/// reported and retried with no limit. End of input before a decision is an
/// error rather than an endless stream of retries.
pub fn run_selector<R, W>(
    input: &mut R,
    output: &mut W,
    roster: &Roster,
) -> Result<SelectorOutcome, SelectionError>
where
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        write_menu(output)?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            return Err(SelectionError::InputClosed);
        }

        // Bytes that are not UTF-8 are just another unknown choice
        let line = String::from_utf8_lossy(&buf);
        match parse_selection(&line) {
            Selection::Selected(kind) => {
                debug!(attempt, character = %kind, "character selected");
                writeln!(output, "You chose: {}", kind)?;
                return Ok(SelectorOutcome::Chosen(BattleState::new(kind, roster)));
            }
            Selection::ExitRequested => {
                debug!(attempt, "exit requested");
                writeln!(output, "{}", FAREWELL)?;
                return Ok(SelectorOutcome::Exit);
            }
            Selection::Invalid(err) => {
                debug!(attempt, input = %err.input, "unrecognized selection");
                writeln!(output, "{}", err)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<SelectorOutcome, SelectionError>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = run_selector(&mut reader, &mut output, &Roster::default());
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_numeric_and_name_tokens_agree() {
        for kind in CharacterKind::all() {
            let by_index = parse_selection(&kind.menu_index().to_string());
            let by_name = parse_selection(kind.token());
            assert_eq!(by_index, Selection::Selected(*kind));
            assert_eq!(by_name, Selection::Selected(*kind));
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(parse_selection("WIZARD"), Selection::Selected(CharacterKind::Wizard));
        assert_eq!(parse_selection("eLf"), Selection::Selected(CharacterKind::Elf));
        assert_eq!(parse_selection("Exit"), Selection::ExitRequested);
    }

    #[test]
    fn test_trims_line_ending() {
        assert_eq!(parse_selection("3\n"), Selection::Selected(CharacterKind::Human));
        assert_eq!(parse_selection("  human \r\n"), Selection::Selected(CharacterKind::Human));
        assert_eq!(parse_selection("4\n"), Selection::ExitRequested);
    }

    #[test]
    fn test_unrecognized_inputs() {
        for raw in ["", "5", "0", "dragon", "wiz", "1 2", "exit now"] {
            match parse_selection(raw) {
                Selection::Invalid(err) => assert_eq!(err.input, raw.trim().to_lowercase()),
                other => panic!("{:?} should be invalid, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_menu_text() {
        let mut output = Vec::new();
        write_menu(&mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Choose your character:\n1) Wizard\n2) Elf\n3) Human\n4) Exit\nChoose your character (1-4): "
        );
    }

    #[test]
    fn test_selector_retries_until_valid() {
        let (result, output) = run("knight\n\n2\n");
        let outcome = result.unwrap();

        match outcome {
            SelectorOutcome::Chosen(state) => {
                assert_eq!(state.character, CharacterKind::Elf);
                assert_eq!(state.player_health, 100);
                assert_eq!(state.opponent_health, 300);
            }
            SelectorOutcome::Exit => panic!("Expected a chosen character"),
        }
        assert_eq!(output.matches("Unknown character").count(), 2);
        assert_eq!(output.matches(MENU_TITLE).count(), 3);
        assert!(output.ends_with("You chose: Elf\n"));
    }

    #[test]
    fn test_selector_retries_after_invalid_utf8() {
        let mut reader = Cursor::new(b"\xff\xfe\n1\n".to_vec());
        let mut output = Vec::new();
        let outcome = run_selector(&mut reader, &mut output, &Roster::default()).unwrap();
        let output = String::from_utf8(output).unwrap();

        match outcome {
            SelectorOutcome::Chosen(state) => assert_eq!(state.character, CharacterKind::Wizard),
            SelectorOutcome::Exit => panic!("Expected a chosen character"),
        }
        assert_eq!(output.matches("Unknown character").count(), 1);
        assert!(output.ends_with("You chose: Wizard\n"));
    }

    #[test]
    fn test_selector_exit() {
        let (result, output) = run("EXIT\n1\n");
        assert_eq!(result.unwrap(), SelectorOutcome::Exit);
        assert!(output.ends_with("Goodbye!\n"));
        assert!(!output.contains("You chose"));
    }

    #[test]
    fn test_selector_input_closed() {
        let (result, output) = run("nope\n");
        assert!(matches!(result, Err(SelectionError::InputClosed)));
        assert!(output.contains("Unknown character"));
    }
}
