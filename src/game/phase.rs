use crate::Seat;

/// Where the device sits as it passes around the table.
///
/// Distinguishes between a seat holding their card face down, a seat
/// reading it, and the terminal state once everyone has been briefed.
///
/// # Variants
///
/// - `Hidden(Seat)` — seat holds the device, card face down
/// - `Shown(Seat)` — seat is reading their card
/// - `Playing` — briefings are over, the interrogation begins
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Phase {
    Hidden(Seat),
    Shown(Seat),
    Playing,
}

impl Phase {
    /// Extracts the seat holding the device. Panics once the round is underway.
    pub fn seat(&self) -> Seat {
        match self {
            Self::Hidden(seat) | Self::Shown(seat) => *seat,
            Self::Playing => panic!("everyone is briefed"),
        }
    }
    /// True if the current seat has yet to reveal.
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden(_))
    }
    /// True if the current seat is reading their card.
    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown(_))
    }
    /// True if the round is underway.
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }
    /// 1-indexed seat number for display.
    pub fn display(&self) -> usize {
        self.seat() + 1
    }
    /// Display label (e.g., "P1", "P2").
    pub fn label(&self) -> String {
        format!("P{}", self.display())
    }
}

impl From<Seat> for Phase {
    fn from(seat: Seat) -> Self {
        Self::Hidden(seat)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hidden(seat) => write!(f, "P{} down", seat + 1),
            Self::Shown(seat) => write!(f, "P{} up", seat + 1),
            Self::Playing => write!(f, "-"),
        }
    }
}
