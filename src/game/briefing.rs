use super::action::Action;
use super::assignment::Assignment;
use super::phase::Phase;
use super::round::Round;
use super::setup::Setup;
use crate::locations::Catalog;
use crate::locations::Location;
use crate::locations::Role;
use crate::Seat;
use rand::Rng;

/// The face of the device while one seat is reading it.
///
/// A spy card carries nothing at all. A cover card carries the shared
/// location and the seat's role there. Borrowed out of the briefing so
/// it cannot outlive the round it was dealt from.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Card<'a> {
    Spy,
    Cover { location: &'a Location, role: &'a Role },
}

impl Card<'_> {
    /// True if the reader is a spy.
    pub fn is_spy(&self) -> bool {
        matches!(self, Self::Spy)
    }
}

impl std::fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Spy => write!(f, "spy"),
            Self::Cover { location, role } => write!(f, "{} @ {}", role, location),
        }
    }
}

/// One pass of the device around the table after a deal.
///
/// Owns the round and walks it one seat at a time: reveal, read, hide,
/// pass. A seat's card is observable through [`Self::peek`] only while
/// that seat holds it face up, and the shared location through
/// [`Self::location`] only once the walk is over. The next seat always
/// receives the device face down.
///
/// Transitions are immutable: [`Self::legal`] lists the presses the
/// current phase accepts, [`Self::apply`] consumes the briefing and
/// returns the next one, and panics on any press that is not legal.
/// Reveal and hide are idempotent.
#[derive(Debug, Clone)]
pub struct Briefing {
    round: Round,
    phase: Phase,
}

impl From<Round> for Briefing {
    fn from(round: Round) -> Self {
        Self {
            round,
            phase: Phase::from(0),
        }
    }
}

impl Briefing {
    /// Deal a fresh round for this setup and seat the device at P1.
    pub fn deal<R: Rng>(catalog: &Catalog, setup: &Setup, rng: &mut R) -> anyhow::Result<Self> {
        Round::deal(catalog, setup.players(), setup.spies(), rng).map(Self::from)
    }

    //
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn seats(&self) -> usize {
        self.round.players()
    }
    pub fn spies(&self) -> usize {
        self.round.spies()
    }

    //
    /// The card the current seat is reading, face up only.
    pub fn peek(&self) -> Option<Card<'_>> {
        match self.phase {
            Phase::Shown(seat) => Some(self.card(seat)),
            _ => None,
        }
    }
    /// The shared location, on the table only once everyone is briefed.
    pub fn location(&self) -> Option<&Location> {
        match self.phase {
            Phase::Playing => Some(self.round.location()),
            _ => None,
        }
    }

    //
    pub fn legal(&self) -> Vec<Action> {
        match self.phase {
            Phase::Hidden(_) => vec![Action::Reveal, Action::Hide],
            Phase::Shown(_) => vec![Action::Reveal, Action::Hide, Action::Advance],
            Phase::Playing => vec![],
        }
    }
    pub fn is_allowed(&self, action: &Action) -> bool {
        self.legal().contains(action)
    }
    pub fn apply(mut self, action: Action) -> Self {
        assert!(self.is_allowed(&action));
        self.phase = match (self.phase, action) {
            (Phase::Hidden(seat), Action::Reveal) => Phase::Shown(seat),
            (Phase::Hidden(seat), Action::Hide) => Phase::Hidden(seat),
            (Phase::Shown(seat), Action::Reveal) => Phase::Shown(seat),
            (Phase::Shown(seat), Action::Hide) => Phase::Hidden(seat),
            (Phase::Shown(seat), Action::Advance) => self.pass(seat),
            _ => unreachable!(),
        };
        self
    }

    //
    fn card(&self, seat: Seat) -> Card<'_> {
        match self.round.assignment(seat) {
            Assignment::Spy => Card::Spy,
            Assignment::Cover(role) => Card::Cover {
                location: self.round.location(),
                role,
            },
        }
    }
    fn pass(&self, seat: Seat) -> Phase {
        if seat + 1 < self.seats() {
            Phase::Hidden(seat + 1)
        } else {
            Phase::Playing
        }
    }
}

impl std::fmt::Display for Briefing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.phase {
            Phase::Hidden(seat) => write!(f, "P{} of {} down", seat + 1, self.seats()),
            Phase::Shown(seat) => write!(f, "P{} of {} up", seat + 1, self.seats()),
            Phase::Playing => write!(f, "game on"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn beach() -> Briefing {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let catalog = Catalog::from(vec![Location::from((
            "Beach",
            &["Lifeguard", "Surfer", "Vendor"][..],
        ))]);
        let setup = Setup::try_from((4, 1)).unwrap();
        Briefing::deal(&catalog, &setup, rng).unwrap()
    }

    #[test]
    fn walks_the_whole_table() {
        let mut briefing = beach();
        for seat in 0..4 {
            assert!(briefing.phase() == Phase::Hidden(seat));
            assert!(briefing.peek().is_none());
            briefing = briefing.apply(Action::Reveal);
            assert!(briefing.phase() == Phase::Shown(seat));
            assert!(briefing.peek().is_some());
            briefing = briefing.apply(Action::Hide);
            assert!(briefing.phase() == Phase::Hidden(seat));
            assert!(briefing.peek().is_none());
            briefing = briefing.apply(Action::Reveal);
            briefing = briefing.apply(Action::Advance);
        }
        assert!(briefing.phase().is_playing());
        assert!(briefing.legal().is_empty());
        assert!(briefing.location().unwrap().name() == "Beach");
    }

    #[test]
    fn hiding_face_down_changes_nothing() {
        let briefing = beach();
        assert!(briefing.is_allowed(&Action::Hide));
        let briefing = briefing.apply(Action::Hide);
        assert!(briefing.phase() == Phase::Hidden(0));
        assert!(briefing.peek().is_none());
    }

    #[test]
    fn double_reveal_changes_nothing() {
        let briefing = beach().apply(Action::Reveal).apply(Action::Reveal);
        assert!(briefing.phase() == Phase::Shown(0));
        assert!(briefing.peek().is_some());
    }

    #[test]
    fn the_next_seat_starts_face_down() {
        let briefing = beach().apply(Action::Reveal).apply(Action::Advance);
        assert!(briefing.phase() == Phase::Hidden(1));
        assert!(briefing.peek().is_none());
    }

    #[test]
    fn legal_presses_follow_the_phase() {
        let briefing = beach();
        assert!(briefing.legal() == vec![Action::Reveal, Action::Hide]);
        assert!(!briefing.is_allowed(&Action::Advance));
        let briefing = briefing.apply(Action::Reveal);
        assert!(briefing.legal() == vec![Action::Reveal, Action::Hide, Action::Advance]);
    }

    #[test]
    fn the_location_stays_off_the_table_until_game_on() {
        let mut briefing = beach();
        for _ in 0..4 {
            assert!(briefing.location().is_none());
            briefing = briefing.apply(Action::Reveal);
            assert!(briefing.location().is_none());
            briefing = briefing.apply(Action::Advance);
        }
        assert!(briefing.location().is_some());
    }

    #[test]
    fn every_seat_reads_their_own_card() {
        let ref mut rng = SmallRng::seed_from_u64(12);
        let round = Round::deal(&Catalog::builtin(), 5, 2, rng).unwrap();
        let mut briefing = Briefing::from(round.clone());
        for seat in 0..5 {
            briefing = briefing.apply(Action::Reveal);
            let card = briefing.peek().unwrap();
            match round.assignment(seat) {
                Assignment::Spy => assert!(card.is_spy()),
                Assignment::Cover(role) => assert!(
                    card == Card::Cover {
                        location: round.location(),
                        role
                    }
                ),
            }
            briefing = briefing.apply(Action::Advance);
        }
        assert!(briefing.phase().is_playing());
    }

    #[test]
    #[should_panic]
    fn advancing_face_down_panics() {
        beach().apply(Action::Advance);
    }

    #[test]
    #[should_panic]
    fn pressing_after_game_on_panics() {
        let mut briefing = beach();
        for _ in 0..4 {
            briefing = briefing.apply(Action::Reveal).apply(Action::Advance);
        }
        briefing.apply(Action::Reveal);
    }
}
