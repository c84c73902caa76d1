use hashbrown::HashMap;

/// Distinct labels of the subset of `y` selected by `rows`, with their
/// counts, sorted by label value.
pub(crate) fn label_counts(y: &[u16], rows: &[usize]) -> Vec<(u16, usize)> {
    let mut counts: HashMap<u16, usize> = HashMap::new();
    for &row in rows {
        *counts.entry(y[row]).or_insert(0) += 1;
    }
    let mut counts: Vec<(u16, usize)> = counts.into_iter().collect();
    counts.sort_unstable_by_key(|&(label, _)| label);
    counts
}

/// Majority label of a non-empty subset, given its sorted label counts.
/// Count ties resolve to the lowest label value.
pub(crate) fn majority_label(counts: &[(u16, usize)]) -> u16 {
    let mut best = counts[0];
    for &candidate in &counts[1..] {
        if candidate.1 > best.1 {
            best = candidate;
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_counts_sorted() {
        let y = vec![5, 1, 5, 3, 1, 5];
        let rows: Vec<usize> = (0..y.len()).collect();
        assert_eq!(label_counts(&y, &rows), vec![(1, 2), (3, 1), (5, 3)]);
    }

    #[test]
    fn test_label_counts_subset() {
        let y = vec![5, 1, 5, 3, 1, 5];
        assert_eq!(label_counts(&y, &[1, 3]), vec![(1, 1), (3, 1)]);
    }

    #[test]
    fn test_majority_label() {
        assert_eq!(majority_label(&[(0, 2), (1, 4), (2, 1)]), 1);
    }

    #[test]
    fn test_majority_label_tie_takes_lowest() {
        assert_eq!(majority_label(&[(2, 3), (7, 3), (9, 1)]), 2);
    }
}
