//! Split finding.
//!
//! Scores candidate features by information gain and selects the split the
//! tree grower recurses on.
use crate::data::Matrix;
use crate::utils::label_counts;
use hashbrown::{HashMap, HashSet};
use rayon::prelude::*;

/// The selected split for one node: the feature to test and the information
/// gain it achieves on the node's subset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitInfo {
    pub split_feature: usize,
    pub split_gain: f64,
}

/// Shannon entropy, in bits, of a non-empty sequence of labels.
///
/// Zero for a single-class sequence, one for an evenly split binary
/// sequence, at most `log2(k)` for `k` distinct labels.
pub fn entropy(labels: &[u16]) -> f64 {
    let rows: Vec<usize> = (0..labels.len()).collect();
    entropy_indexed(labels, &rows)
}

/// Entropy of the subset of `y` selected by `rows`.
pub(crate) fn entropy_indexed(y: &[u16], rows: &[usize]) -> f64 {
    let n = rows.len() as f64;
    label_counts(y, rows)
        .iter()
        .map(|&(_, count)| {
            let p = count as f64 / n;
            -p * p.log2()
        })
        .sum()
}

/// Information gain of partitioning the subset of rows on one feature.
///
/// The partition is over the category values actually observed in the
/// subset; declared values with no rows contribute nothing to the
/// weighted sum.
pub fn information_gain(data: &Matrix<u16>, y: &[u16], rows: &[usize], feature: usize) -> f64 {
    let column = data.get_col(feature);
    let mut partitions: HashMap<u16, Vec<usize>> = HashMap::new();
    for &row in rows {
        partitions.entry(column[row]).or_default().push(row);
    }
    // Accumulate in category-value order so refits are bit-identical.
    let mut partitions: Vec<(u16, Vec<usize>)> = partitions.into_iter().collect();
    partitions.sort_unstable_by_key(|&(value, _)| value);
    let n = rows.len() as f64;
    let mut gain = entropy_indexed(y, rows);
    for (_, subset) in &partitions {
        gain -= (subset.len() as f64 / n) * entropy_indexed(y, subset);
    }
    gain
}

/// Score every feature on the subset and return the best split.
///
/// Features already used on the path are scored at negative infinity so
/// they can never win. Gain ties resolve to the lowest feature index.
pub(crate) fn best_split(data: &Matrix<u16>, y: &[u16], rows: &[usize], used: &HashSet<usize>) -> SplitInfo {
    let gains: Vec<f64> = (0..data.cols)
        .into_par_iter()
        .map(|feature| {
            if used.contains(&feature) {
                f64::NEG_INFINITY
            } else {
                information_gain(data, y, rows, feature)
            }
        })
        .collect();
    let mut best = SplitInfo {
        split_feature: 0,
        split_gain: gains[0],
    };
    for (feature, &gain) in gains.iter().enumerate().skip(1) {
        if gain > best.split_gain {
            best = SplitInfo {
                split_feature: feature,
                split_gain: gain,
            };
        }
    }
    best
}
