pub mod counts;
pub mod error;
pub mod event;
#[cfg(feature = "hepmc2")]
mod hepmc2;
#[cfg(feature = "lhef")]
mod lhef;
#[cfg(feature = "ntuple")]
mod ntuple;
pub mod reader;
pub mod report;
pub mod scanner;
pub mod source;
pub mod species;
pub mod table;

pub use crate::counts::CountTable;
pub use crate::error::Error;
pub use crate::event::{Event, ParticleRecord};
pub use crate::scanner::{Scanner, Summary};
pub use crate::source::ParticleSource;
pub use crate::species::{ChargeConjugation, Classifier, Species};
pub use particle_id::ParticleID;

/// Count the physical primaries of each species in `source`
pub fn count<S>(source: S, classifier: Classifier) -> Result<CountTable, Error>
where
    S: ParticleSource,
    Error: From<S::Error>,
{
    let mut scanner = Scanner::new(classifier);
    scanner.scan(source)?;
    Ok(scanner.finish()?.counts)
}
