use std::io::{self, Write};

use log::trace;

use crate::{
    counts::CountTable,
    error::Error,
    event::ParticleRecord,
    source::ParticleSource,
    species::{Classifier, Species, PDG_ELECTRON, PDG_K_PLUS, PDG_PI_PLUS, PDG_PROTON},
};

/// Count physical primary particles per species
///
/// A scanner starts with an empty [CountTable]. Particles are added
/// with [Scanner::observe] or [Scanner::scan]. [Scanner::finish]
/// ends the run and returns the final [Summary].
#[derive(Debug)]
pub struct Scanner<W = io::Sink> {
    classifier: Classifier,
    counts: CountTable,
    particles: u64,
    primaries: u64,
    trace: Option<W>,
}

impl Scanner {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            counts: Default::default(),
            particles: 0,
            primaries: 0,
            trace: None,
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl<W: Write> Scanner<W> {
    /// Construct a scanner that writes a line for each particle to `trace`
    pub fn with_trace(classifier: Classifier, trace: W) -> Self {
        Self {
            classifier,
            counts: Default::default(),
            particles: 0,
            primaries: 0,
            trace: Some(trace),
        }
    }

    /// Add a single particle
    ///
    /// Returns the species bin the particle was counted in, if any.
    pub fn observe(&mut self, particle: ParticleRecord) -> Result<Option<Species>, Error> {
        let idx = self.particles;
        self.particles += 1;
        let pdg = particle.id.id();
        if let Some(trace) = self.trace.as_mut() {
            writeln!(
                trace,
                "Particle {idx} PDG: {pdg} physical primary: {}",
                u8::from(particle.is_physical_primary)
            )?;
        }
        if !particle.is_physical_primary {
            return Ok(None);
        }
        self.primaries += 1;
        let Some(species) = self.classifier.classify(particle.id) else {
            return Ok(None);
        };
        if let Some(trace) = self.trace.as_mut() {
            writeln!(
                trace,
                "Particle {idx} bin: {} PDG code: {pdg} kPion: {PDG_PI_PLUS} kProton: {PDG_PROTON} kElectron: {PDG_ELECTRON} kKPlus: {PDG_K_PLUS}",
                species.index()
            )?;
        }
        self.counts.increment(species);
        Ok(Some(species))
    }

    /// Add all particles from `source`, in order
    pub fn scan<S>(&mut self, mut source: S) -> Result<(), Error>
    where
        S: ParticleSource,
        Error: From<S::Error>,
    {
        let start = self.particles;
        while let Some(particle) = source.next_particle() {
            self.observe(particle?)?;
        }
        trace!("Scanned {} particles", self.particles - start);
        Ok(())
    }

    /// Current counts
    pub fn counts(&self) -> &CountTable {
        &self.counts
    }

    /// Finish the run
    pub fn finish(mut self) -> Result<Summary, Error> {
        if let Some(trace) = self.trace.as_mut() {
            trace.flush()?;
        }
        Ok(Summary {
            counts: self.counts,
            particles: self.particles,
            primaries: self.primaries,
        })
    }
}

/// Final result of a run
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Summary {
    /// Counts per species
    pub counts: CountTable,
    /// Number of observed particles
    pub particles: u64,
    /// Number of observed physical primaries
    pub primaries: u64,
}

impl Summary {
    /// Number of physical primaries that are not in any bin
    pub fn unmapped_primaries(&self) -> u64 {
        self.primaries - self.counts.total()
    }
}
