use serde::{Deserialize, Serialize};

use crate::aggregate::FrequencyTable;

/// A category paired with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: u64,
}

/// Descriptive statistics derived from a frequency table.
///
/// An empty frequency table yields `total == 0` and no extremes; a
/// single-entry table reports the same category for both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: u64,
    pub most_frequent: Option<CategoryCount>,
    pub least_frequent: Option<CategoryCount>,
}

pub fn summarize(frequency: &FrequencyTable) -> Summary {
    let most_frequent = frequency.entries().first().map(|(value, count)| CategoryCount {
        value: value.clone(),
        count: *count,
    });
    // Entries are sorted descending with ascending-value ties, and
    // `min_by_key` keeps the first minimum it sees, so ties on the
    // minimum also resolve to the smallest value.
    let least_frequent = frequency
        .entries()
        .iter()
        .min_by_key(|(_, count)| *count)
        .map(|(value, count)| CategoryCount {
            value: value.clone(),
            count: *count,
        });
    Summary {
        total: frequency.total(),
        most_frequent,
        least_frequent,
    }
}
