//! Battle state machine and target selection across several turns.

use battle_autopilot::battle::{select_best_target, BattleState, CombatantStatus, SharedBattle};
use battle_autopilot::{BattleConfig, BattleError};

// =============================================================================
// Stage Progression
// =============================================================================

#[test]
fn test_stage_change_resets_stage_turn() {
    let mut state = BattleState::new();
    assert_eq!(state.stage(), 1);

    state.new_turn(2, 3);
    assert_eq!(state.stage(), 2);
    assert_eq!(state.stage_turn(), 1);

    state.new_turn(2, 3);
    assert_eq!(state.stage(), 2);
    assert_eq!(state.stage_turn(), 2);
}

#[test]
fn test_full_encounter_counters() {
    let mut state = BattleState::new();
    let stages = [1, 1, 2, 2, 2, 3];
    let expected_stage_turn = [2, 3, 1, 2, 3, 1];

    for (turn, (&stage, &expected)) in stages.iter().zip(&expected_stage_turn).enumerate() {
        state.new_turn(stage, 3);
        assert_eq!(state.turn(), turn as u32 + 1);
        assert_eq!(state.stage_turn(), expected, "turn {}", turn + 1);
    }
    assert!(state.is_final_stage());
}

#[test]
fn test_stage_total_follows_reports() {
    let mut state = BattleState::new();
    state.new_turn(1, 5);
    assert_eq!(state.stage_total(), 5);
}

// =============================================================================
// Cooldowns
// =============================================================================

#[test]
fn test_skill_becomes_ready_after_cooldown() {
    let mut state = BattleState::new();
    state.use_skill(1, 2).unwrap();

    for remaining in (0..5).rev() {
        assert!(!state.is_skill_ready(1, 2).unwrap());
        state.new_turn(1, 3);
        assert_eq!(state.skill_cooldown(1, 2).unwrap(), remaining);
    }
    assert!(state.is_skill_ready(1, 2).unwrap());

    // Further turns keep it at zero
    state.new_turn(1, 3);
    assert_eq!(state.skill_cooldown(1, 2).unwrap(), 0);
}

#[test]
fn test_master_skill_default_and_custom_cooldown() {
    let mut state = BattleState::with_config(BattleConfig::default().with_master_skill_cooldown(3));
    state.use_master_skill(0).unwrap();
    state.use_master_skill_with_cooldown(1, 1).unwrap();

    state.new_turn(1, 3);
    assert!(!state.is_master_skill_ready(0).unwrap());
    assert!(state.is_master_skill_ready(1).unwrap());
    assert!(state.is_master_skill_ready(2).unwrap());
}

#[test]
fn test_index_errors() {
    let mut state = BattleState::new();
    assert_eq!(
        state.use_skill(0, 3),
        Err(BattleError::IndexOutOfRange { what: "skill", index: 3, len: 3 })
    );
    assert_eq!(
        state.is_skill_ready(3, 0),
        Err(BattleError::IndexOutOfRange { what: "combatant", index: 3, len: 3 })
    );
    assert!(state.use_master_skill(7).is_err());
    assert!(state.combatant(4).is_err());
}

// =============================================================================
// Targeting
// =============================================================================

#[test]
fn test_first_of_tied_maxima_is_targeted() {
    assert_eq!(select_best_target(&[0, 5000, 5000, 0, 0, 0]), 1);

    let mut state = BattleState::new();
    state.update_enemy_hp(&[0, 5000, 5000, 0, 0, 0]);
    assert_eq!(state.select_target(), 1);
}

#[test]
fn test_target_follows_hp_updates() {
    let mut state = BattleState::new();
    state.update_enemy_hp(&[30_000, 12_000, 9_000]);
    assert_eq!(state.select_target(), 0);

    // Front enemy falls, only the first two slots are re-read
    state.update_enemy_hp(&[0, 12_000]);
    assert_eq!(state.enemy_hp(), &[0, 12_000, 9_000, 0, 0, 0]);
    assert_eq!(state.select_target(), 1);
    assert_eq!(state.current_target(), 1);
}

// =============================================================================
// Encounters
// =============================================================================

#[test]
fn test_independent_encounters() {
    let mut a = BattleState::new();
    let mut b = BattleState::new();

    a.new_turn(2, 3);
    a.use_skill(0, 0).unwrap();

    assert_eq!(b.turn(), 0);
    assert!(b.is_skill_ready(0, 0).unwrap());
    b.new_turn(1, 3);
    assert_eq!(a.turn(), 1);
    assert_eq!(a.stage(), 2);
}

#[test]
fn test_summary_after_battle() {
    let mut state = BattleState::new();
    state.update_combatant(2, CombatantStatus { alive: false, hp: 0, np: 0 }).unwrap();
    for stage in [1, 2, 3] {
        state.new_turn(stage, 3);
    }

    let summary = state.summarize(false);
    assert_eq!(summary.turns, 3);
    assert!(!summary.victory);

    state.reset();
    assert_eq!(state.summarize(true).turns, 0);
    assert!(state.combatant(2).unwrap().alive);
}

#[test]
fn test_shared_battle_single_writer() {
    let shared = SharedBattle::new(BattleState::new());
    let watchdog = shared.clone();

    let target = shared.with(|state| {
        state.update_enemy_hp(&[100, 900, 300]);
        state.new_turn(1, 3);
        state.select_target()
    });
    assert_eq!(target, 1);

    // Watchdog restarts the encounter after a connection drop
    watchdog.reset();
    assert_eq!(shared.snapshot().turn(), 0);
}
