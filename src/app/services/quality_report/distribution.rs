//! Frequency counting for report distributions

use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered frequency counter
///
/// Keys remember the order in which they were first seen so that rankings
/// with tied counts are stable and reproducible between runs.
#[derive(Debug, Clone)]
pub struct FrequencyCounter<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
    total: usize,
}

impl<K> Default for FrequencyCounter<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
            total: 0,
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyCounter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`
    pub fn add(&mut self, key: K) {
        self.total += 1;
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Count for `key`, zero when never seen
    pub fn get(&self, key: &K) -> usize {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1)
            .unwrap_or(0)
    }

    /// Total number of occurrences counted
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ranked by count descending, ties in first-seen order
    ///
    /// `limit` caps the number of entries returned; `None` returns all.
    pub fn most_common(&self, limit: Option<usize>) -> Vec<(K, usize)> {
        let mut ranked = self.entries.clone();
        // sort_by is stable, which keeps first-seen order among ties
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyCounter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}

/// Percentage of `count` against `total`, zero when `total` is zero
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64) * 100.0
    }
}

/// Format an integer with `,` thousands separators
pub fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_total() {
        let counter: FrequencyCounter<&str> = ["a", "b", "a", "c", "a"].into_iter().collect();

        assert_eq!(counter.get(&"a"), 3);
        assert_eq!(counter.get(&"b"), 1);
        assert_eq!(counter.get(&"z"), 0);
        assert_eq!(counter.total(), 5);
        assert_eq!(counter.len(), 3);
    }

    #[test]
    fn test_most_common_ties_keep_first_seen_order() {
        let counter: FrequencyCounter<&str> =
            ["x", "y", "z", "y", "x", "w"].into_iter().collect();

        assert_eq!(
            counter.most_common(None),
            vec![("x", 2), ("y", 2), ("z", 1), ("w", 1)]
        );
        assert_eq!(counter.most_common(Some(3)), vec![("x", 2), ("y", 2), ("z", 1)]);
    }

    #[test]
    fn test_empty_counter() {
        let counter: FrequencyCounter<String> = FrequencyCounter::new();
        assert!(counter.is_empty());
        assert!(counter.most_common(Some(10)).is_empty());
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(3, 0), 0.0);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(45210), "45,210");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}
