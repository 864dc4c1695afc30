//! Contributions View
//!
//! Ranking is the server's job: the received order is ground truth and is
//! never re-sorted here.

use crate::models::Contributor;

/// A contributor with its 1-based display rank
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<'a> {
    pub rank: usize,
    pub contributor: &'a Contributor,
}

impl Ranked<'_> {
    /// The top contributor gets the crown
    pub fn is_leader(&self) -> bool {
        self.rank == 1
    }
}

/// Pair each contributor with its position in the received sequence
pub fn ranked(contributors: &[Contributor]) -> impl Iterator<Item = Ranked<'_>> {
    contributors
        .iter()
        .enumerate()
        .map(|(index, contributor)| Ranked {
            rank: index + 1,
            contributor,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_follows_server_order() {
        // Deliberately not sorted by points
        let board = vec![
            Contributor {
                id: Some("a".into()),
                name: "Asha".into(),
                points: 10,
            },
            Contributor {
                id: Some("b".into()),
                name: "Bikash".into(),
                points: 90,
            },
        ];

        let ranks: Vec<_> = ranked(&board)
            .map(|r| (r.rank, r.contributor.name.as_str(), r.is_leader()))
            .collect();

        assert_eq!(ranks, vec![(1, "Asha", true), (2, "Bikash", false)]);
    }

    #[test]
    fn test_empty_board() {
        assert_eq!(ranked(&[]).count(), 0);
    }
}
