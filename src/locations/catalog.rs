use super::location::Location;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// The set of locations a table draws from. A catalog ships compiled
/// into the binary, or loads from a JSON file of the same shape:
/// `{ "locations": [ { "name": "Beach", "roles": ["Lifeguard", ...] } ] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    locations: Vec<Location>,
}

impl Catalog {
    /// the catalog compiled into the binary
    pub fn builtin() -> Self {
        serde_json::from_str(include_str!("../../data/locations.json"))
            .expect("builtin catalog is well formed")
    }

    /// read a catalog from a JSON file on disk
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read catalog {}: {}", path, e))?;
        Self::try_from(json.as_str())
    }

    /// draw one location uniformly at random
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Option<&Location> {
        use rand::prelude::IndexedRandom;
        self.locations.choose(rng)
    }

    /// look a location up by its display name
    pub fn find(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name() == name)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }
    pub fn len(&self) -> usize {
        self.locations.len()
    }
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<&str> for Catalog {
    type Error = anyhow::Error;
    fn try_from(json: &str) -> Result<Self, Self::Error> {
        serde_json::from_str(json).map_err(|e| anyhow::anyhow!("malformed catalog: {}", e))
    }
}

impl From<Vec<Location>> for Catalog {
    fn from(locations: Vec<Location>) -> Self {
        Self { locations }
    }
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} locations", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_playable() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.locations().iter().all(|l| !l.roles().is_empty()));
    }

    #[test]
    fn builtin_names_are_unique() {
        let catalog = Catalog::builtin();
        let mut names = catalog
            .locations()
            .iter()
            .map(|l| l.name().to_string())
            .collect::<Vec<_>>();
        names.sort();
        names.dedup();
        assert!(names.len() == catalog.len());
    }

    #[test]
    fn choosing_from_empty_catalog_is_none() {
        use rand::SeedableRng;
        let ref mut rng = rand::rngs::SmallRng::seed_from_u64(0);
        let catalog = Catalog::from(vec![]);
        assert!(catalog.choose(rng).is_none());
    }

    #[test]
    fn every_location_is_reachable() {
        use rand::SeedableRng;
        let ref mut rng = rand::rngs::SmallRng::seed_from_u64(42);
        let catalog = Catalog::builtin();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..10_000 {
            seen.insert(catalog.choose(rng).expect("nonempty").name().to_string());
        }
        assert!(seen.len() == catalog.len());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(Catalog::try_from("not json").is_err());
        assert!(Catalog::try_from(r#"{"locations": 5}"#).is_err());
    }

    #[test]
    fn roundtrips_through_json() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(Catalog::try_from(json.as_str()).unwrap() == catalog);
    }
}
