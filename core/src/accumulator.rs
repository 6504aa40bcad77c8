use crate::types::TickLevel;
use serde::{Deserialize, Serialize};

/// Silence runs reaching the letter spacing needed before a character is
/// considered complete. The first run is normally the leading silence in
/// front of the first mark.
pub const LETTER_BOUNDARY_SILENCE_GAPS: u32 = 2;

/// When accumulated silence ends a character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryPolicy {
    pub silence_gaps: u32,
}

impl Default for BoundaryPolicy {
    fn default() -> Self {
        Self {
            silence_gaps: LETTER_BOUNDARY_SILENCE_GAPS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunCounters {
    pub consecutive_active_ticks: u32,
    pub consecutive_idle_ticks: u32,
}

impl RunCounters {
    fn observe(&mut self, level: TickLevel) {
        match level {
            TickLevel::Active => {
                self.consecutive_idle_ticks = 0;
                self.consecutive_active_ticks += 1;
            }
            TickLevel::Idle => {
                self.consecutive_active_ticks = 0;
                self.consecutive_idle_ticks += 1;
            }
        }
    }
}

/// Per-tick history of the character being received, plus the run counters
/// that decide when it is complete.
#[derive(Debug, Clone, Default)]
pub struct RunAccumulator {
    counters: RunCounters,
    silence_blocks: u32,
    buffer: Vec<bool>,
    policy: BoundaryPolicy,
}

impl RunAccumulator {
    pub fn new(policy: BoundaryPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Record one tick. Returns the full buffered history when this tick
    /// completes a character; the accumulator is reset at that point.
    pub fn push(&mut self, level: TickLevel, letter_spacing_ticks: u32) -> Option<Vec<bool>> {
        self.buffer.push(level.is_active());
        self.counters.observe(level);

        // Edge trigger: only the tick where the idle run reaches the spacing
        if level == TickLevel::Idle && self.counters.consecutive_idle_ticks == letter_spacing_ticks
        {
            self.silence_blocks += 1;
            log::trace!(
                "silence block {}/{} after {} ticks",
                self.silence_blocks,
                self.policy.silence_gaps,
                self.buffer.len()
            );
        }

        if self.silence_blocks >= self.policy.silence_gaps {
            let history = std::mem::take(&mut self.buffer);
            self.reset();
            return Some(history);
        }
        None
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.counters = RunCounters::default();
        self.silence_blocks = 0;
    }

    pub fn counters(&self) -> RunCounters {
        self.counters
    }

    pub fn silence_blocks(&self) -> u32 {
        self.silence_blocks
    }

    pub fn buffer(&self) -> &[bool] {
        &self.buffer
    }

    pub fn has_mark(&self) -> bool {
        self.buffer.contains(&true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(acc: &mut RunAccumulator, level: TickLevel, count: usize, spacing: u32) -> Vec<Vec<bool>> {
        (0..count).filter_map(|_| acc.push(level, spacing)).collect()
    }

    #[test]
    fn test_counters_reset_on_opposite_level() {
        let mut acc = RunAccumulator::default();
        feed(&mut acc, TickLevel::Active, 3, 22);
        assert_eq!(acc.counters().consecutive_active_ticks, 3);
        assert_eq!(acc.counters().consecutive_idle_ticks, 0);

        feed(&mut acc, TickLevel::Idle, 2, 22);
        assert_eq!(acc.counters().consecutive_active_ticks, 0);
        assert_eq!(acc.counters().consecutive_idle_ticks, 2);
        assert_eq!(acc.buffer(), &[true, true, true, false, false]);
    }

    #[test]
    fn test_silence_block_is_edge_triggered() {
        let mut acc = RunAccumulator::default();
        let emitted = feed(&mut acc, TickLevel::Idle, 100, 5);
        assert!(emitted.is_empty());
        assert_eq!(acc.silence_blocks(), 1);
        assert_eq!(acc.buffer().len(), 100);
    }

    #[test]
    fn test_second_silence_block_fires_boundary() {
        let mut acc = RunAccumulator::default();
        assert!(feed(&mut acc, TickLevel::Idle, 5, 5).is_empty());
        assert!(feed(&mut acc, TickLevel::Active, 3, 5).is_empty());
        assert!(feed(&mut acc, TickLevel::Idle, 4, 5).is_empty());

        let history = acc.push(TickLevel::Idle, 5).expect("boundary on fifth idle tick");
        assert_eq!(history.len(), 13);
        assert_eq!(history.iter().filter(|&&bit| bit).count(), 3);

        assert!(acc.buffer().is_empty());
        assert_eq!(acc.silence_blocks(), 0);
        assert_eq!(acc.counters(), RunCounters::default());
    }

    #[test]
    fn test_short_gaps_do_not_count() {
        let mut acc = RunAccumulator::default();
        for _ in 0..10 {
            feed(&mut acc, TickLevel::Active, 2, 5);
            feed(&mut acc, TickLevel::Idle, 4, 5);
        }
        assert_eq!(acc.silence_blocks(), 0);
        assert!(acc.has_mark());
    }

    #[test]
    fn test_policy_gap_count() {
        let mut acc = RunAccumulator::new(BoundaryPolicy { silence_gaps: 1 });
        feed(&mut acc, TickLevel::Active, 2, 3);
        let emitted = feed(&mut acc, TickLevel::Idle, 3, 3);
        assert_eq!(emitted, vec![vec![true, true, false, false, false]]);
    }
}
