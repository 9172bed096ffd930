use crate::DEFAULT_PLAYERS;
use crate::DEFAULT_SPIES;
use crate::MAX_PLAYERS;
use crate::MIN_PLAYERS;
use crate::MIN_SPIES;

/// Table configuration agreed on before anything is dealt.
///
/// Keeps itself valid at all times: seats stay within table limits and
/// spies never outnumber half the table, so adding seats or planting
/// spies clamps rather than errors. Validation only happens at the
/// boundary, when untrusted counts arrive via `TryFrom`.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub struct Setup {
    players: usize,
    spies: usize,
}

impl Setup {
    pub fn players(&self) -> usize {
        self.players
    }
    pub fn spies(&self) -> usize {
        self.spies
    }
    /// seats that will receive a location and a cover role
    pub fn covers(&self) -> usize {
        self.players - self.spies
    }
    /// at most half the table can be spies
    pub fn max_spies(&self) -> usize {
        self.players / 2
    }

    //
    /// reseat the table, dragging the spy count down if the new
    /// table is too small to hide that many
    pub fn seat(self, players: usize) -> Self {
        let players = players.clamp(MIN_PLAYERS, MAX_PLAYERS);
        let spies = self.spies.min(players / 2);
        Self { players, spies }
    }
    /// plant this many spies, clamped to what the table can hide
    pub fn plant(self, spies: usize) -> Self {
        let spies = spies.clamp(MIN_SPIES, self.max_spies());
        Self { spies, ..self }
    }
}

impl Default for Setup {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS,
            spies: DEFAULT_SPIES,
        }
    }
}

impl TryFrom<(usize, usize)> for Setup {
    type Error = anyhow::Error;
    fn try_from((players, spies): (usize, usize)) -> Result<Self, Self::Error> {
        if players < MIN_PLAYERS || players > MAX_PLAYERS {
            return Err(anyhow::anyhow!(
                "players must be between {} and {}, got {}",
                MIN_PLAYERS,
                MAX_PLAYERS,
                players
            ));
        }
        if spies < MIN_SPIES {
            return Err(anyhow::anyhow!("at least {} spy required", MIN_SPIES));
        }
        if spies > players / 2 {
            return Err(anyhow::anyhow!(
                "at most {} spies for {} players, got {}",
                players / 2,
                players,
                spies
            ));
        }
        Ok(Self { players, spies })
    }
}

impl crate::Arbitrary for Setup {
    fn random() -> Self {
        let players = rand::random_range(MIN_PLAYERS..=MAX_PLAYERS);
        let spies = rand::random_range(MIN_SPIES..=players / 2);
        Self { players, spies }
    }
}

impl std::fmt::Display for Setup {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.spies {
            1 => write!(f, "{} players · 1 spy", self.players),
            n => write!(f, "{} players · {} spies", self.players, n),
        }
    }
}
