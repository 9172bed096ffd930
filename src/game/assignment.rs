use crate::locations::Role;

/// What one seat is secretly dealt at the start of a round.
///
/// # Variants
///
/// - `Spy` — left in the dark about the location, has to blend in
/// - `Cover(Role)` — knows the location and plays this role there
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum Assignment {
    Spy,
    Cover(Role),
}

impl Assignment {
    /// True if this seat was dealt a spy.
    pub fn is_spy(&self) -> bool {
        matches!(self, Self::Spy)
    }
    /// True if this seat knows the location.
    pub fn is_cover(&self) -> bool {
        matches!(self, Self::Cover(_))
    }
    /// Extracts the cover role, if any.
    pub fn role(&self) -> Option<&Role> {
        match self {
            Self::Cover(role) => Some(role),
            Self::Spy => None,
        }
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Spy => write!(f, "spy"),
            Self::Cover(role) => write!(f, "{}", role),
        }
    }
}
