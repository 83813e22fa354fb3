//! Classification counts over every encoding.

use std::fmt;

use rayon::prelude::*;
use tictactoe_core::{classify, Board, Classification, ENCODING_COUNT};

const KINDS: usize = Classification::ALL.len();

/// Number of encodings in each classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Census {
    counts: [u32; KINDS],
}

impl Census {
    /// Classify all 2^18 encodings across the rayon pool.
    pub fn compute() -> Census {
        let counts = (0..ENCODING_COUNT)
            .into_par_iter()
            .fold(
                || [0u32; KINDS],
                |mut acc, bits| {
                    acc[classify(Board(bits)).index()] += 1;
                    acc
                },
            )
            .reduce(
                || [0u32; KINDS],
                |mut a, b| {
                    for (x, y) in a.iter_mut().zip(b) {
                        *x += y;
                    }
                    a
                },
            );
        Census { counts }
    }

    pub fn count(&self, classification: Classification) -> u32 {
        self.counts[classification.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Encodings reachable in a real game.
    pub fn legal(&self) -> u32 {
        self.iter().filter(|(c, _)| c.is_legal()).map(|(_, n)| n).sum()
    }

    /// Counts in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Classification, u32)> + '_ {
        Classification::ALL.iter().map(|&c| (c, self.count(c)))
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (classification, count)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:<20} : {:>6}", classification.name(), count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_census_counts() {
        let census = Census::compute();
        assert_eq!(census.total(), ENCODING_COUNT);
        assert_eq!(census.legal(), 5478);
        assert_eq!(census.count(Classification::FirstWins), 626);
        assert_eq!(census.count(Classification::FirstLoses), 316);
        assert_eq!(census.count(Classification::Draw), 16);
        assert_eq!(
            census.count(Classification::FirstToMove) + census.count(Classification::SecondToMove),
            5478 - 626 - 316 - 16
        );
        // 4^9 encodings minus the 3^9 with no shared cell
        assert_eq!(census.count(Classification::IllegalOverlap), 262_144 - 19_683);
    }

    #[test]
    fn test_census_display() {
        let census = Census::compute();
        let text = census.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "first_wins           :    626");
        assert_eq!(lines[2], "draw                 :     16");
        assert!(!text.ends_with('\n'));
    }
}
