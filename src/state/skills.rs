//! Skill bar targets, the one-shot reveal state machine, and tick-driven
//! percentage counters.
//!
//! DESIGN
//! ======
//! Timers never live here. [`SkillCounter::tick`] advances one step and the
//! caller owns scheduling, so tests drive counters with a virtual clock and
//! the browser path drives them from a 20ms interval. The reveal trigger is
//! a two-state machine with no transition back: once fired, later viewport
//! intersections are ignored for the rest of the page lifetime.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

/// Visibility ratio that arms the reveal.
pub const REVEAL_THRESHOLD: f64 = 0.25;

/// Interval between counter ticks, in milliseconds.
pub const TICK_MS: u32 = 20;

/// A skill row: display label plus target completion percentage.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SkillEntry {
    pub label: String,
    pub target: u32,
}

/// The skills shown on the page, in display order.
#[must_use]
pub fn skill_entries() -> Vec<SkillEntry> {
    [("HTML & CSS", 90), ("JavaScript", 85), ("Rust & WASM", 70), ("Accessibility", 60)]
        .into_iter()
        .map(|(label, target)| SkillEntry { label: label.to_owned(), target })
        .collect()
}

/// One-shot reveal trigger for the skills section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Watching,
    Fired,
}

impl RevealPhase {
    /// Record an observed visibility ratio. Returns `true` exactly once, on
    /// the first ratio at or above [`REVEAL_THRESHOLD`].
    pub fn note_visibility(&mut self, ratio: f64) -> bool {
        if *self == Self::Watching && ratio >= REVEAL_THRESHOLD {
            *self = Self::Fired;
            return true;
        }
        false
    }

    #[must_use]
    pub fn fired(self) -> bool {
        self == Self::Fired
    }
}

/// A percentage counter climbing from 0 to its target in fixed steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCounter {
    target: u32,
    current: u32,
}

impl SkillCounter {
    #[must_use]
    pub fn new(target: u32) -> Self {
        Self { target: target.min(100), current: 0 }
    }

    /// Per-tick increment: `max(1, round(target / 30))`. The floor of 1
    /// keeps small targets moving; the clamp in [`tick`](Self::tick) keeps
    /// the final value exact.
    #[must_use]
    pub fn step(target: u32) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            (f64::from(target) / 30.0).round().max(1.0) as u32
        }
    }

    /// Advance one tick and return the new value, clamped to the target so
    /// the counter lands exactly and never overshoots.
    pub fn tick(&mut self) -> u32 {
        self.current = (self.current + Self::step(self.target)).min(self.target);
        self.current
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.current
    }

    #[must_use]
    pub fn target(self) -> u32 {
        self.target
    }

    /// Whether the counter has reached its target. True immediately for a
    /// target of 0, so a zero-percent skill never displays a larger value.
    #[must_use]
    pub fn done(self) -> bool {
        self.current >= self.target
    }
}
