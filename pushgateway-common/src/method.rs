//! HTTP verbs used to talk to the push gateway.

/// The HTTP verb of a gateway request.
///
/// Each variant maps to exactly one verb; there is no way to express an
/// arbitrary method string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PushMethod {
    /// Replace the whole metric group.
    Put,
    /// Merge into the metric group.
    Post,
    Delete,
}

impl PushMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PushMethod::Put => "PUT",
            PushMethod::Post => "POST",
            PushMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for PushMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
