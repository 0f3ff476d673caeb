use std::convert::Infallible;

use crate::event::ParticleRecord;

/// An ordered source of particle records
///
/// Every iterator over `Result<ParticleRecord, E>` is a particle source.
pub trait ParticleSource {
    type Error;

    /// Fetch the next particle, or `None` at the end of the input
    fn next_particle(&mut self) -> Option<Result<ParticleRecord, Self::Error>>;
}

impl<I, E> ParticleSource for I
where
    I: Iterator<Item = Result<ParticleRecord, E>>,
{
    type Error = E;

    fn next_particle(&mut self) -> Option<Result<ParticleRecord, E>> {
        self.next()
    }
}

/// Particle source that can't fail, e.g. for records already in memory
pub fn from_records<I>(records: I) -> impl ParticleSource<Error = Infallible>
where
    I: IntoIterator<Item = ParticleRecord>,
{
    records.into_iter().map(Ok::<_, Infallible>)
}
