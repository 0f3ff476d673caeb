use mccounts::{
    reader::{FileFormat, FileReader},
    CountTable, Error, Scanner, Summary,
};

fn count_file(path: &str, expected_format: FileFormat) -> (usize, Summary) {
    let mut reader = FileReader::open(path, None).unwrap();
    assert_eq!(reader.format(), expected_format);
    let mut scanner = Scanner::default();
    scanner.scan(reader.particles()).unwrap();
    (reader.nevents(), scanner.finish().unwrap())
}

#[cfg(feature = "hepmc2")]
#[test]
fn hepmc2() {
    let (nevents, summary) = count_file("test_data/pions.hepmc", FileFormat::HepMC2);
    assert_eq!(nevents, 1);
    assert_eq!(summary.counts, CountTable::from([1, 0, 1, 0]));
    // two incoming beam protons are not primaries
    assert_eq!(summary.particles, 4);
    assert_eq!(summary.primaries, 2);
}

#[cfg(feature = "hepmc2")]
#[test]
fn hepmc2_read_error() {
    let mut reader = FileReader::open("test_data/broken.hepmc", None).unwrap();
    assert_eq!(reader.format(), FileFormat::HepMC2);
    let mut scanner = Scanner::default();
    let err = scanner.scan(reader.particles()).unwrap_err();
    assert!(
        matches!(err, Error::Read { format: FileFormat::HepMC2, .. }),
        "{err:?}"
    );
}

#[cfg(feature = "lhef")]
#[test]
fn lhef() {
    let (nevents, summary) = count_file("test_data/pions.lhe", FileFormat::Lhef);
    assert_eq!(nevents, 1);
    assert_eq!(summary.counts, CountTable::from([0, 0, 1, 1]));
    // incoming partons are not primaries
    assert_eq!(summary.particles, 4);
    assert_eq!(summary.primaries, 2);
}

#[cfg(feature = "lhef")]
#[test]
fn forced_format_mismatch() {
    let err = FileReader::open("test_data/mcparticles.txt", Some(FileFormat::Lhef))
        .err()
        .unwrap();
    assert!(matches!(err, Error::Read { format: FileFormat::Lhef, .. }), "{err:?}");
}
