//! Deterministic traversal of an aggregate.
//!
//! `HashMap` iteration order changes from run to run, so every encoder walks
//! the keys through `sorted_keys` to produce byte-identical output.

use super::Aggregate;

/// Keys of the aggregate in ascending byte-wise order
///
/// **Public** - shared by the folded, pprof and flamegraph encoders
pub fn sorted_keys(aggregate: &Aggregate) -> Vec<&str> {
    let mut keys: Vec<&str> = aggregate.keys().map(String::as_str).collect();
    // Keys are unique, so an unstable sort is still deterministic.
    keys.sort_unstable();
    keys
}

/// `(key, count)` pairs in the same order as `sorted_keys`
pub fn sorted_entries(aggregate: &Aggregate) -> Vec<(&str, u64)> {
    let mut entries: Vec<(&str, u64)> = aggregate
        .iter()
        .map(|(key, count)| (key.as_str(), *count))
        .collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_keys_bytewise() {
        let mut aggregate = Aggregate::new();
        aggregate.insert("b:1:x".to_string(), 1);
        aggregate.insert("B:1:x".to_string(), 1);
        aggregate.insert("a:1:x;z:1:y".to_string(), 1);
        aggregate.insert("a:1:x".to_string(), 1);

        assert_eq!(
            sorted_keys(&aggregate),
            vec!["B:1:x", "a:1:x", "a:1:x;z:1:y", "b:1:x"]
        );
    }

    #[test]
    fn test_sorted_entries_carry_counts() {
        let mut aggregate = Aggregate::new();
        aggregate.insert("y".to_string(), 2);
        aggregate.insert("x".to_string(), 9);

        assert_eq!(sorted_entries(&aggregate), vec![("x", 9), ("y", 2)]);
    }

    #[test]
    fn test_empty_aggregate() {
        assert!(sorted_keys(&Aggregate::new()).is_empty());
    }
}
