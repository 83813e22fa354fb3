//! Dense table of perfect-play results indexed by encoding.

use tictactoe_core::{Board, ENCODING_COUNT};

use crate::solver::Outcome;

/// One slot per encoding; `None` for boards without a result.
#[derive(Clone, PartialEq, Eq)]
pub struct OutcomeTable {
    outcomes: Vec<Option<Outcome>>,
    len: usize,
}

impl OutcomeTable {
    pub fn new() -> Self {
        Self {
            outcomes: vec![None; ENCODING_COUNT as usize],
            len: 0,
        }
    }

    #[inline]
    pub fn get(&self, board: Board) -> Option<Outcome> {
        self.outcomes[board.0 as usize]
    }

    /// Store a result, replacing any previous one.
    #[inline]
    pub fn insert(&mut self, board: Board, outcome: Outcome) {
        let slot = &mut self.outcomes[board.0 as usize];
        if slot.is_none() {
            self.len += 1;
        }
        *slot = Some(outcome);
    }

    /// Number of boards with a result.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Boards with a result, in numeric order.
    pub fn iter(&self) -> impl Iterator<Item = (Board, Outcome)> + '_ {
        self.outcomes
            .iter()
            .enumerate()
            .filter_map(|(i, o)| o.map(|o| (Board(i as u32), o)))
    }

    /// Boards on which the two tables disagree.
    pub fn mismatches(&self, other: &OutcomeTable) -> Vec<(Board, Option<Outcome>, Option<Outcome>)> {
        self.outcomes
            .iter()
            .zip(&other.outcomes)
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, (&a, &b))| (Board(i as u32), a, b))
            .collect()
    }
}

impl Default for OutcomeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OutcomeTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutcomeTable").field("len", &self.len).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut table = OutcomeTable::new();
        assert!(table.is_empty());
        table.insert(Board(5), Outcome::Draw);
        table.insert(Board(5), Outcome::FirstWins);
        table.insert(Board(1), Outcome::FirstLoses);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(Board(5)), Some(Outcome::FirstWins));
        assert_eq!(table.get(Board(2)), None);
    }

    #[test]
    fn test_iter_is_ordered() {
        let mut table = OutcomeTable::new();
        table.insert(Board(9), Outcome::Draw);
        table.insert(Board(3), Outcome::Draw);
        let boards: Vec<u32> = table.iter().map(|(b, _)| b.0).collect();
        assert_eq!(boards, vec![3, 9]);
    }

    #[test]
    fn test_mismatches() {
        let mut a = OutcomeTable::new();
        let mut b = OutcomeTable::new();
        a.insert(Board(1), Outcome::Draw);
        b.insert(Board(1), Outcome::Draw);
        a.insert(Board(2), Outcome::FirstWins);
        b.insert(Board(2), Outcome::FirstLoses);
        b.insert(Board(3), Outcome::Draw);
        let diff = a.mismatches(&b);
        assert_eq!(
            diff,
            vec![
                (Board(2), Some(Outcome::FirstWins), Some(Outcome::FirstLoses)),
                (Board(3), None, Some(Outcome::Draw)),
            ]
        );
    }
}
