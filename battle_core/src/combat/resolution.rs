//! Battle resolution - apply alternating fixed-damage turns to a BattleState

use super::result::{BattleOutcome, BattleReport, CombatEvent, RoundResult};
use super::state::BattleState;
use std::convert::Infallible;
use tracing::{debug, info};

/// Resolve a single round against a battle state (immutable API)
///
/// Returns the new state and what happened:
/// 1. The player strikes the opponent
/// 2. If the opponent is at zero or below, the battle ends here and the
///    opponent does not act, even if its blow would also have been fatal
/// 3. The opponent strikes the player
/// 4. If the player is at zero or below, the battle ends
///
/// Health is not clamped, so a killing blow can leave it negative.
pub fn resolve_round(state: &BattleState) -> (BattleState, RoundResult) {
    let mut next = state.clone();
    let mut result = RoundResult::default();

    // Player turn
    next.opponent_health = next.opponent_health.saturating_sub(next.player.damage);
    debug!(
        character = %next.character,
        damage = next.player.damage,
        opponent_health = next.opponent_health,
        "player turn"
    );
    result.events.push(CombatEvent::PlayerStrike {
        character: next.character,
        opponent: next.opponent_name.clone(),
        damage: next.player.damage,
        opponent_health: next.opponent_health,
    });

    if next.is_opponent_defeated() {
        result.events.push(CombatEvent::OpponentDefeated {
            opponent: next.opponent_name.clone(),
        });
        result.outcome = Some(BattleOutcome::OpponentDefeated);
        return (next, result);
    }

    // Opponent turn
    next.player_health = next.player_health.saturating_sub(next.opponent.damage);
    result.opponent_acted = true;
    debug!(
        opponent = %next.opponent_name,
        damage = next.opponent.damage,
        player_health = next.player_health,
        "opponent turn"
    );
    result.events.push(CombatEvent::OpponentStrike {
        opponent: next.opponent_name.clone(),
        character: next.character,
        damage: next.opponent.damage,
        player_health: next.player_health,
    });

    if next.is_player_defeated() {
        result.events.push(CombatEvent::PlayerDefeated {
            character: next.character,
        });
        result.outcome = Some(BattleOutcome::PlayerDefeated);
    }

    (next, result)
}

/// Run rounds until one side is defeated, discarding the event text
///
/// Both damage values must be positive; a roster that passed validation
/// guarantees this, and with it termination.
pub fn resolve_battle(state: BattleState) -> BattleReport {
    match resolve_battle_with(state, |_| Ok::<(), Infallible>(())) {
        Ok(report) => report,
        Err(never) => match never {},
    }
}

/// Run rounds until one side is defeated, handing each event to `on_event`
/// as soon as its round resolves
///
/// Events are not retained, so memory stays flat however long the battle
/// runs. The first error from `on_event` stops the battle and is returned.
pub fn resolve_battle_with<E, F>(state: BattleState, mut on_event: F) -> Result<BattleReport, E>
where
    F: FnMut(&CombatEvent) -> Result<(), E>,
{
    debug_assert!(
        state.player.damage > 0 && state.opponent.damage > 0,
        "combat with non-positive damage never terminates"
    );

    let mut current = state;
    let mut rounds: u32 = 0;

    loop {
        rounds += 1;
        let (next, result) = resolve_round(&current);
        current = next;
        for event in &result.events {
            on_event(event)?;
        }

        if let Some(outcome) = result.outcome {
            info!(
                character = %current.character,
                ?outcome,
                rounds,
                player_health = current.player_health,
                opponent_health = current.opponent_health,
                "battle finished"
            );
            return Ok(BattleReport {
                outcome,
                rounds,
                final_state: current,
            });
        }
    }
}
