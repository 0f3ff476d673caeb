use itertools::izip;
use lhef::{status::OUTGOING, HEPEUP};

use crate::event::{Event, ParticleRecord};

impl From<HEPEUP> for Event {
    fn from(source: HEPEUP) -> Self {
        let particles = izip!(source.IDUP, source.ISTUP)
            .map(|(id, status)| ParticleRecord::new(id, status == OUTGOING))
            .collect();
        Self {
            id: None,
            particles,
        }
    }
}

#[cfg(test)]
mod tests {
    use lhef::status::{INCOMING, INTERMEDIATE_RESONANCE};

    use super::*;

    #[test]
    fn outgoing_are_primary() {
        let ids = vec![2, -2, 23, 11, -11, 2212];
        let status = vec![
            INCOMING,
            INCOMING,
            INTERMEDIATE_RESONANCE,
            OUTGOING,
            OUTGOING,
            OUTGOING,
        ];
        let n = ids.len();
        let hepeup = HEPEUP {
            NUP: n as i32,
            IDRUP: 1,
            XWGTUP: 1.,
            SCALUP: 91.1876,
            AQEDUP: 1. / 128.,
            AQCDUP: 0.118,
            IDUP: ids,
            ISTUP: status,
            MOTHUP: vec![[0, 0]; n],
            ICOLUP: vec![[0, 0]; n],
            PUP: vec![[0.; 5]; n],
            VTIMUP: vec![0.; n],
            SPINUP: vec![9.; n],
            info: Default::default(),
            attr: Default::default(),
        };
        let event = Event::from(hepeup);
        assert_eq!(event.id, None);
        let expected = [
            ParticleRecord::new(2, false),
            ParticleRecord::new(-2, false),
            ParticleRecord::new(23, false),
            ParticleRecord::new(11, true),
            ParticleRecord::new(-11, true),
            ParticleRecord::new(2212, true),
        ];
        assert_eq!(event.particles, expected);
    }
}
