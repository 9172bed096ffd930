/// A single press from whoever is holding the device.
///
/// These are the only moves in the briefing walk: turn the card over,
/// turn it back down, or pass the device along. Reveal and hide are
/// idempotent so a double tap never corrupts the walk.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Action {
    Reveal,
    Hide,
    Advance,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Reveal => "Reveal",
            Self::Hide => "Hide",
            Self::Advance => "Next",
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "reveal" | "r" => Ok(Self::Reveal),
            "hide" | "h" => Ok(Self::Hide),
            "advance" | "next" | "n" => Ok(Self::Advance),
            _ => Err("invalid briefing action"),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Reveal => write!(f, "REVEAL"),
            Self::Hide => write!(f, "HIDE"),
            Self::Advance => write!(f, "NEXT"),
        }
    }
}
