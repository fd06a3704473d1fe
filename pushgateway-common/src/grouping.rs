//! Grouping keys and job paths.
//!
//! A grouping key partitions the metrics of a job into separate groups on the
//! gateway. Each label/value pair becomes two path segments, in insertion
//! order, after `/metrics/job/{job}`.
//!
//! Nothing here is URL-encoded. Job names, labels and values are substituted
//! verbatim, so callers must pass path-safe strings: a value containing `/`
//! produces a different (wrong) path rather than an error.

/// Ordered label -> value mapping.
///
/// Insertion order is preserved. Labels are unique; inserting a label that is
/// already present replaces its value and keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingKey {
    pairs: Vec<(String, String)>,
}

impl GroupingKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a label, returning the previous value if the label was present.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let label = label.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.pairs.push((label, value));
                None
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(label, value);
        self
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }
}

impl<L: Into<String>, V: Into<String>> FromIterator<(L, V)> for GroupingKey {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let mut key = GroupingKey::new();
        for (label, value) in iter {
            key.insert(label, value);
        }
        key
    }
}

impl<L: Into<String>, V: Into<String>, const N: usize> From<[(L, V); N]> for GroupingKey {
    fn from(pairs: [(L, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Build `/metrics/job/{job}[/{label}/{value}]*`.
pub fn job_path(job: &str, grouping_key: &GroupingKey) -> String {
    let mut path = format!("/metrics/job/{}", job);
    for (label, value) in grouping_key.iter() {
        path.push('/');
        path.push_str(label);
        path.push('/');
        path.push_str(value);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grouping_key_path() {
        assert_eq!(job_path("batchjob", &GroupingKey::new()), "/metrics/job/batchjob");
    }

    #[test]
    fn test_pairs_follow_insertion_order() {
        let key = GroupingKey::new()
            .with("zone", "eu")
            .with("instance", "1")
            .with("app", "billing");

        assert_eq!(
            job_path("nightly", &key),
            "/metrics/job/nightly/zone/eu/instance/1/app/billing"
        );
    }

    #[test]
    fn test_insert_existing_label_keeps_position() {
        let mut key = GroupingKey::from([("a", "1"), ("b", "2")]);

        assert_eq!(key.insert("a", "3"), Some("1".to_string()));
        assert_eq!(key.len(), 2);
        assert_eq!(key.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_collect_deduplicates_labels() {
        let key: GroupingKey = vec![("x", "1"), ("y", "2"), ("x", "9")].into_iter().collect();

        assert_eq!(key.get("x"), Some("9"));
        assert_eq!(key.get("missing"), None);
        assert_eq!(job_path("j", &key), "/metrics/job/j/x/9/y/2");
    }

    #[test]
    fn test_values_are_not_encoded() {
        let key = GroupingKey::from([("path", "a/b"), ("space", "c d")]);

        assert_eq!(job_path("j", &key), "/metrics/job/j/path/a/b/space/c d");
    }
}
