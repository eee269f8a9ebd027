use super::*;

// =============================================================
// RevealPhase
// =============================================================

#[test]
fn reveal_phase_starts_watching() {
    let phase = RevealPhase::default();
    assert_eq!(phase, RevealPhase::Watching);
    assert!(!phase.fired());
}

#[test]
fn reveal_ignores_ratios_below_threshold() {
    let mut phase = RevealPhase::default();
    assert!(!phase.note_visibility(0.0));
    assert!(!phase.note_visibility(0.2499));
    assert_eq!(phase, RevealPhase::Watching);
}

#[test]
fn reveal_fires_exactly_once_at_threshold() {
    let mut phase = RevealPhase::default();
    assert!(phase.note_visibility(0.25));
    assert!(phase.fired());

    // Later qualifying intersections never re-fire.
    assert!(!phase.note_visibility(1.0));
    assert!(!phase.note_visibility(0.25));
    assert_eq!(phase, RevealPhase::Fired);
}

// =============================================================
// SkillCounter
// =============================================================

fn run_to_completion(target: u32) -> Vec<u32> {
    let mut counter = SkillCounter::new(target);
    let mut seen = vec![counter.value()];
    // Generous tick bound so a regression cannot loop forever.
    for _ in 0..200 {
        if counter.done() {
            break;
        }
        seen.push(counter.tick());
    }
    seen
}

#[test]
fn step_size_has_floor_of_one() {
    assert_eq!(SkillCounter::step(0), 1);
    assert_eq!(SkillCounter::step(1), 1);
    assert_eq!(SkillCounter::step(30), 1);
    assert_eq!(SkillCounter::step(57), 2);
    assert_eq!(SkillCounter::step(100), 3);
}

#[test]
fn counter_for_57_lands_exactly_and_never_overshoots() {
    let seen = run_to_completion(57);
    assert_eq!(seen.last(), Some(&57));
    assert!(seen.iter().all(|v| *v <= 57));
    // Step of 2 from zero: 56 is the last even value before the clamp.
    assert_eq!(&seen[seen.len() - 2..], [56, 57]);
}

#[test]
fn counter_values_are_monotonic() {
    let seen = run_to_completion(90);
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(seen.last(), Some(&90));
}

#[test]
fn counter_for_zero_target_is_done_without_ever_exceeding_zero() {
    let mut counter = SkillCounter::new(0);
    assert!(counter.done());
    assert_eq!(counter.value(), 0);
    // Even if a stray tick arrives, the clamp holds the value at 0.
    assert_eq!(counter.tick(), 0);
    assert!(counter.done());
}

#[test]
fn counter_targets_above_100_are_clamped() {
    let counter = SkillCounter::new(250);
    assert_eq!(counter.target(), 100);
}

// =============================================================
// Skill entries
// =============================================================

#[test]
fn skill_entries_are_within_percentage_bounds() {
    let entries = skill_entries();
    assert!(!entries.is_empty());
    for entry in entries {
        assert!(entry.target <= 100, "{} exceeds 100", entry.label);
    }
}
