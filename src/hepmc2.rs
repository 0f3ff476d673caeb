use hepmc2::event::Vertex;

use crate::event::{Event, ParticleRecord};

const HEPMC_OUTGOING: i32 = 1;

impl From<hepmc2::Event> for Event {
    fn from(source: hepmc2::Event) -> Self {
        Self {
            id: Some(source.number),
            particles: particles(&source.vertices),
        }
    }
}

// Each particle is stored exactly once: either as outgoing particle
// of its production vertex or, if it has no production vertex, as
// incoming particle of its end vertex
fn particles(vertices: &[Vertex]) -> Vec<ParticleRecord> {
    let nparticles = vertices
        .iter()
        .map(|vx| vx.particles_in.len() + vx.particles_out.len())
        .sum();
    let mut particles = Vec::with_capacity(nparticles);
    for vx in vertices {
        let vx_particles = vx.particles_in.iter().chain(vx.particles_out.iter());
        particles.extend(vx_particles.map(|p| {
            ParticleRecord::new(p.id, p.status == HEPMC_OUTGOING)
        }));
    }
    particles
}

#[cfg(test)]
mod tests {
    use hepmc2::event::Particle;

    use super::*;

    fn particle(id: i32, status: i32) -> Particle {
        Particle {
            id,
            status,
            ..Default::default()
        }
    }

    #[test]
    fn vertex_order() {
        let vertices = vec![
            Vertex {
                barcode: -1,
                particles_in: vec![particle(2212, 4), particle(2212, 4)],
                particles_out: vec![particle(211, 1), particle(113, 2)],
                ..Default::default()
            },
            Vertex {
                barcode: -2,
                particles_out: vec![particle(-211, 1), particle(211, 1)],
                ..Default::default()
            },
        ];
        let particles = particles(&vertices);
        let expected = [
            ParticleRecord::new(2212, false),
            ParticleRecord::new(2212, false),
            ParticleRecord::new(211, true),
            ParticleRecord::new(113, false),
            ParticleRecord::new(-211, true),
            ParticleRecord::new(211, true),
        ];
        assert_eq!(particles, expected);
    }

    #[test]
    fn no_vertices() {
        assert!(particles(&[]).is_empty());
    }
}
