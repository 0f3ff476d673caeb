use particle_id::ParticleID;

/// A simulated particle as seen by the counter
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParticleRecord {
    /// Particle type
    pub id: ParticleID,
    /// Whether the particle originates directly from the primary interaction
    pub is_physical_primary: bool,
}

impl ParticleRecord {
    pub fn new(pdg_code: i32, is_physical_primary: bool) -> Self {
        Self {
            id: ParticleID::new(pdg_code),
            is_physical_primary,
        }
    }
}

/// Particles of a single event
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Event {
    /// Event id
    pub id: Option<i32>,
    /// Particles in the order they appear in the input
    pub particles: Vec<ParticleRecord>,
}

impl IntoIterator for Event {
    type Item = ParticleRecord;
    type IntoIter = std::vec::IntoIter<ParticleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.into_iter()
    }
}
