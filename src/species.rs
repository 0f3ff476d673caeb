use std::fmt::{self, Display};

use particle_id::ParticleID;

/// PDG code of the electron
pub const PDG_ELECTRON: i32 = 11;
/// PDG code of the positive kaon
pub const PDG_K_PLUS: i32 = 321;
/// PDG code of the positive pion
pub const PDG_PI_PLUS: i32 = 211;
/// PDG code of the proton
pub const PDG_PROTON: i32 = 2212;

/// Particle species we count
///
/// The order of the variants fixes the bin layout. Bins are numbered
/// starting from 0, see [Species::index].
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum Species {
    Electron,
    Kaon,
    Pion,
    Proton,
}

impl Species {
    /// All species in bin order
    pub const ALL: [Species; 4] = [
        Species::Electron,
        Species::Kaon,
        Species::Pion,
        Species::Proton,
    ];

    /// 0-based bin index
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short bin label
    pub const fn label(self) -> &'static str {
        use Species::*;
        match self {
            Electron => "el",
            Kaon => "ka",
            Pion => "pi",
            Proton => "pr",
        }
    }

    /// PDG code of the particle (not antiparticle) belonging to this species
    pub const fn pdg_code(self) -> i32 {
        use Species::*;
        match self {
            Electron => PDG_ELECTRON,
            Kaon => PDG_K_PLUS,
            Pion => PDG_PI_PLUS,
            Proton => PDG_PROTON,
        }
    }

    fn from_pdg_code(pdg: i32) -> Option<Self> {
        use Species::*;
        match pdg {
            PDG_ELECTRON => Some(Electron),
            PDG_K_PLUS => Some(Kaon),
            PDG_PI_PLUS => Some(Pion),
            PDG_PROTON => Some(Proton),
            _ => None,
        }
    }
}

impl Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label().fmt(f)
    }
}

/// Whether antiparticles are counted together with their particles
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ChargeConjugation {
    /// Only match e⁻, K⁺, π⁺, p
    #[default]
    Exact,
    /// Also match e⁺, K⁻, π⁻, p̄
    Symmetric,
}

/// Map PDG codes to [Species] bins
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Classifier {
    charge_conjugation: ChargeConjugation,
}

impl Classifier {
    pub fn new(charge_conjugation: ChargeConjugation) -> Self {
        Self { charge_conjugation }
    }

    pub fn charge_conjugation(&self) -> ChargeConjugation {
        self.charge_conjugation
    }

    /// Find the species bin for a particle id
    ///
    /// Returns `None` for all particles we don't count.
    pub fn classify(&self, id: ParticleID) -> Option<Species> {
        let pdg = id.id();
        match self.charge_conjugation {
            ChargeConjugation::Exact => Species::from_pdg_code(pdg),
            ChargeConjugation::Symmetric => {
                // i32::MIN has no positive counterpart
                let abs = i32::try_from(pdg.unsigned_abs()).ok()?;
                Species::from_pdg_code(abs)
            }
        }
    }
}

/// Find the species bin for a particle id, ignoring antiparticles
pub fn classify(id: ParticleID) -> Option<Species> {
    Classifier::default().classify(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(classify(ParticleID::new(11)), Some(Species::Electron));
        assert_eq!(classify(ParticleID::new(321)), Some(Species::Kaon));
        assert_eq!(classify(ParticleID::new(211)), Some(Species::Pion));
        assert_eq!(classify(ParticleID::new(2212)), Some(Species::Proton));
        for species in Species::ALL {
            assert_eq!(classify(ParticleID::new(species.pdg_code())), Some(species));
        }
    }

    #[test]
    fn unknown_codes() {
        for pdg in [0, 1, 13, 22, 111, 130, 2112, 3122, 1000010020, i32::MAX, i32::MIN] {
            assert_eq!(classify(ParticleID::new(pdg)), None, "{pdg}");
        }
    }

    #[test]
    fn antiparticles() {
        let exact = Classifier::default();
        let symmetric = Classifier::new(ChargeConjugation::Symmetric);
        for species in Species::ALL {
            let anti = ParticleID::new(-species.pdg_code());
            assert_eq!(exact.classify(anti), None);
            assert_eq!(symmetric.classify(anti), Some(species));
        }
        assert_eq!(symmetric.classify(ParticleID::new(i32::MIN)), None);
        assert_eq!(symmetric.classify(ParticleID::new(-22)), None);
    }

    #[test]
    fn bin_layout() {
        let labels = Species::ALL.map(|s| s.label());
        assert_eq!(labels, ["el", "ka", "pi", "pr"]);
        for (n, species) in Species::ALL.into_iter().enumerate() {
            assert_eq!(species.index(), n);
        }
    }
}
