use super::role::Role;
use serde::Deserialize;
use serde::Serialize;

/// A place the whole table shares for a round, plus the pool of cover
/// roles it can hand out. Everyone but the spies plays one of these.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    roles: Vec<Role>,
}

impl Location {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// the pool of cover roles this location deals from
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
}

impl From<(&str, &[&str])> for Location {
    fn from((name, roles): (&str, &[&str])) -> Self {
        Self {
            name: name.to_string(),
            roles: roles.iter().copied().map(Role::from).collect(),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
