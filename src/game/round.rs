use super::assignment::Assignment;
use crate::locations::Catalog;
use crate::locations::Location;
use crate::Seat;
use rand::Rng;

/// One complete deal: a location shared by the whole table and a
/// secret assignment per seat. Immutable once dealt, discarded and
/// replaced when the table restarts.
///
/// Dealing draws one location uniformly from the catalog, shuffles its
/// role pool, hands the first seats spy cards and the rest covers taken
/// cyclically from the shuffled pool, then shuffles the seating so spy
/// cards are not clustered at the front.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Round {
    location: Location,
    assignments: Vec<Assignment>,
}

impl Round {
    /// Deal a fresh round for this many seats and spies.
    ///
    /// Counts arrive pre-validated by the table setup. The only inputs
    /// rejected here are the ones no setup could make sense of: more
    /// spies than seats, an empty catalog, or a location with no roles
    /// to cover with.
    pub fn deal<R: Rng>(
        catalog: &Catalog,
        players: usize,
        spies: usize,
        rng: &mut R,
    ) -> anyhow::Result<Self> {
        use rand::seq::SliceRandom;
        if spies > players {
            return Err(anyhow::anyhow!(
                "more spies ({}) than players ({})",
                spies,
                players
            ));
        }
        let location = catalog
            .choose(rng)
            .ok_or_else(|| anyhow::anyhow!("catalog is empty"))?
            .clone();
        let covers = players - spies;
        if covers > 0 && location.roles().is_empty() {
            return Err(anyhow::anyhow!("no roles to deal at {}", location));
        }
        let mut pool = location.roles().to_vec();
        pool.shuffle(rng);
        let mut assignments = (0..spies)
            .map(|_| Assignment::Spy)
            .chain((0..covers).map(|i| Assignment::Cover(pool[i % pool.len()].clone())))
            .collect::<Vec<_>>();
        assignments.shuffle(rng);
        let round = Self {
            location,
            assignments,
        };
        log::debug!("{}", round);
        Ok(round)
    }

    //
    pub fn location(&self) -> &Location {
        &self.location
    }
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }
    pub fn assignment(&self, seat: Seat) -> &Assignment {
        &self.assignments[seat]
    }
    pub fn players(&self) -> usize {
        self.assignments.len()
    }
    pub fn spies(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_spy()).count()
    }
    pub fn covers(&self) -> usize {
        self.players() - self.spies()
    }
}

impl crate::Arbitrary for Round {
    fn random() -> Self {
        use super::setup::Setup;
        let ref mut rng = rand::rng();
        let setup = Setup::random();
        Self::deal(&Catalog::builtin(), setup.players(), setup.spies(), rng)
            .expect("builtin catalog deals")
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ·", self.location)?;
        for assignment in self.assignments.iter() {
            write!(f, " {}", assignment)?;
        }
        Ok(())
    }
}
