use crate::event::{Event, ParticleRecord};

// Ntuples only store the incoming partons and the outgoing particles
impl From<ntuple::Event> for Event {
    fn from(source: ntuple::Event) -> Self {
        let ntuple::Event {
            id,
            id1,
            id2,
            pdg_code,
            ..
        } = source;
        let mut particles = Vec::with_capacity(pdg_code.len() + 2);
        particles.push(ParticleRecord::new(id1, false));
        particles.push(ParticleRecord::new(id2, false));
        particles.extend(
            pdg_code
                .into_iter()
                .map(|pdg| ParticleRecord::new(pdg, true)),
        );
        Self {
            id: Some(id),
            particles,
        }
    }
}
