use serde::Deserialize;
use serde::Serialize;

/// A cover identity at some location, e.g. Lifeguard at the Beach.
/// Roles are opaque display strings, the engine never interprets them.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Role(String);

impl Role {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}
impl From<String> for Role {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
