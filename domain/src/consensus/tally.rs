//! Frequency tally of structurally valid sequences

use crate::node::NodeSequence;
use std::collections::HashMap;

/// Every structurally valid sequence produced during one run, in order
///
/// Used only after the attempt budget is exhausted: the most frequent
/// sequence wins, and among equally frequent ones the sequence that was
/// recorded first wins.
///
/// # Example
///
/// ```
/// use nodeseq_domain::{NodeSequence, SequenceTally};
///
/// let a = NodeSequence::from(["FetchData", "Show"]);
/// let b = NodeSequence::from(["SendRequest", "Show"]);
///
/// let mut tally = SequenceTally::new();
/// for seq in [&a, &b, &a, &b] {
///     tally.record(seq.clone());
/// }
///
/// assert_eq!(tally.most_frequent(), Some((&a, 2)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequenceTally {
    recorded: Vec<NodeSequence>,
}

impl SequenceTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, sequence: NodeSequence) {
        self.recorded.push(sequence);
    }

    /// Number of recorded sequences, duplicates included
    pub fn len(&self) -> usize {
        self.recorded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recorded.is_empty()
    }

    /// Distinct sequences with their counts, in first-seen order
    pub fn counts(&self) -> Vec<(&NodeSequence, usize)> {
        let mut index: HashMap<&NodeSequence, usize> = HashMap::new();
        let mut counts: Vec<(&NodeSequence, usize)> = Vec::new();

        for sequence in &self.recorded {
            match index.get(sequence) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(sequence, counts.len());
                    counts.push((sequence, 1));
                }
            }
        }

        counts
    }

    /// The highest-count sequence, earliest first-occurrence on ties
    pub fn most_frequent(&self) -> Option<(&NodeSequence, usize)> {
        self.counts()
            .into_iter()
            .fold(None, |best, (sequence, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((sequence, count)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(nodes: &[&str]) -> NodeSequence {
        nodes.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_tally() {
        let tally = SequenceTally::new();
        assert!(tally.is_empty());
        assert!(tally.most_frequent().is_none());
        assert!(tally.counts().is_empty());
    }

    #[test]
    fn test_clear_winner() {
        let a = seq(&["A"]);
        let b = seq(&["B"]);
        let mut tally = SequenceTally::new();
        tally.record(a.clone());
        tally.record(b.clone());
        tally.record(a.clone());

        assert_eq!(tally.most_frequent(), Some((&a, 2)));
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let a = seq(&["A"]);
        let b = seq(&["B"]);
        let mut tally = SequenceTally::new();
        for s in [&a, &b, &a, &b] {
            tally.record(s.clone());
        }

        assert_eq!(tally.most_frequent(), Some((&a, 2)));
    }

    #[test]
    fn test_tie_goes_to_first_seen_even_when_later_one_completes_first() {
        let a = seq(&["A"]);
        let b = seq(&["B"]);
        let mut tally = SequenceTally::new();
        for s in [&a, &b, &b, &a] {
            tally.record(s.clone());
        }

        assert_eq!(tally.most_frequent(), Some((&a, 2)));
    }

    #[test]
    fn test_later_sequence_with_higher_count_wins() {
        let a = seq(&["A"]);
        let b = seq(&["B"]);
        let mut tally = SequenceTally::new();
        for s in [&a, &b, &b] {
            tally.record(s.clone());
        }

        assert_eq!(tally.most_frequent(), Some((&b, 2)));
    }

    #[test]
    fn test_counts_are_order_sensitive() {
        let ab = seq(&["A", "B"]);
        let ba = seq(&["B", "A"]);
        let mut tally = SequenceTally::new();
        tally.record(ab.clone());
        tally.record(ba.clone());
        tally.record(ab.clone());

        assert_eq!(tally.counts(), vec![(&ab, 2), (&ba, 1)]);
        assert_eq!(tally.len(), 3);
    }
}
