//! Solver statistics tracking.

use std::time::Instant;

use tracing::info;

use crate::solver::Outcome;

/// Statistics collected during solving.
#[derive(Debug, Default, Clone)]
pub struct SolverStats {
    /// Positions where we computed the outcome by examining children
    pub positions_evaluated: u64,

    /// Cache hits (position already in the memo table)
    pub cache_hits: u64,

    /// Terminal positions (game ended - win/loss/draw)
    pub terminal_positions: u64,

    /// Maximum stack depth reached
    pub max_depth: u64,

    /// Breakdown of terminal outcomes
    pub first_wins: u64,
    pub first_loses: u64,
    pub draws: u64,

    /// For rate calculation
    start_time: Option<Instant>,
}

impl SolverStats {
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// Record a terminal position outcome
    pub fn record_terminal(&mut self, outcome: Outcome) {
        self.terminal_positions += 1;
        match outcome {
            Outcome::FirstWins => self.first_wins += 1,
            Outcome::FirstLoses => self.first_loses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Add another solver's counters to these. Keeps the earlier start time.
    pub fn merge(&mut self, other: &SolverStats) {
        self.positions_evaluated += other.positions_evaluated;
        self.cache_hits += other.cache_hits;
        self.terminal_positions += other.terminal_positions;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.first_wins += other.first_wins;
        self.first_loses += other.first_loses;
        self.draws += other.draws;
        self.start_time = match (self.start_time, other.start_time) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
    }

    /// Get current positions per second
    pub fn positions_per_sec(&self) -> f64 {
        if let Some(start) = self.start_time {
            let elapsed = start.elapsed().as_secs_f64();
            if elapsed > 0.0 {
                return self.positions_evaluated as f64 / elapsed;
            }
        }
        0.0
    }

    /// Log final summary
    pub fn log_summary(&self, table_size: usize) {
        info!(
            positions = self.positions_evaluated,
            unique = table_size,
            cache_hits = self.cache_hits,
            max_depth = self.max_depth,
            rate = format!("{:.0}/s", self.positions_per_sec()),
            "solver summary"
        );
        info!(
            terminals = self.terminal_positions,
            first_wins = self.first_wins,
            first_loses = self.first_loses,
            draws = self.draws,
            "terminal positions"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_terminal() {
        let mut stats = SolverStats::new();
        stats.record_terminal(Outcome::FirstWins);
        stats.record_terminal(Outcome::Draw);
        stats.record_terminal(Outcome::Draw);
        assert_eq!(stats.terminal_positions, 3);
        assert_eq!(stats.first_wins, 1);
        assert_eq!(stats.draws, 2);
        assert_eq!(stats.first_loses, 0);
    }

    #[test]
    fn test_merge() {
        let mut a = SolverStats::new();
        a.positions_evaluated = 10;
        a.max_depth = 4;
        a.record_terminal(Outcome::FirstLoses);

        let mut b = SolverStats::new();
        b.positions_evaluated = 5;
        b.cache_hits = 7;
        b.max_depth = 9;

        a.merge(&b);
        assert_eq!(a.positions_evaluated, 15);
        assert_eq!(a.cache_hits, 7);
        assert_eq!(a.max_depth, 9);
        assert_eq!(a.first_loses, 1);
    }
}
