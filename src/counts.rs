use std::{
    fmt::{self, Display},
    ops::Index,
};

use crate::species::Species;

/// Number of counted particles per species
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CountTable([u64; 4]);

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more particle of the given species
    pub fn increment(&mut self, species: Species) {
        self.0[species.index()] += 1;
    }

    /// Total number of counted particles
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Counts in bin order
    pub fn as_array(&self) -> &[u64; 4] {
        &self.0
    }

    /// Species together with their counts, in bin order
    pub fn iter(&self) -> impl Iterator<Item = (Species, u64)> + '_ {
        Species::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Index<Species> for CountTable {
    type Output = u64;

    fn index(&self, species: Species) -> &Self::Output {
        &self.0[species.index()]
    }
}

impl From<[u64; 4]> for CountTable {
    fn from(counts: [u64; 4]) -> Self {
        Self(counts)
    }
}

impl Display for CountTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>3}  {:<5} {:>12}", "bin", "label", "count")?;
        for (species, count) in self.iter() {
            writeln!(
                f,
                "{:>3}  {:<5} {:>12}",
                species.index(),
                species.label(),
                count
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let counts = CountTable::new();
        assert_eq!(counts.as_array(), &[0; 4]);
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn increment() {
        let mut counts = CountTable::new();
        counts.increment(Species::Pion);
        counts.increment(Species::Pion);
        counts.increment(Species::Proton);
        assert_eq!(counts[Species::Electron], 0);
        assert_eq!(counts[Species::Kaon], 0);
        assert_eq!(counts[Species::Pion], 2);
        assert_eq!(counts[Species::Proton], 1);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts, CountTable::from([0, 0, 2, 1]));
    }

    #[test]
    fn display() {
        let counts = CountTable::from([3, 0, 12, 1]);
        let table = counts.to_string();
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("label"));
        let rows: Vec<Vec<_>> = lines[1..]
            .iter()
            .map(|l| l.split_whitespace().collect())
            .collect();
        assert_eq!(rows[0], ["0", "el", "3"]);
        assert_eq!(rows[1], ["1", "ka", "0"]);
        assert_eq!(rows[2], ["2", "pi", "12"]);
        assert_eq!(rows[3], ["3", "pr", "1"]);
    }
}
