use std::{
    fmt::{self, Display},
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
    str::FromStr,
};

use itertools::Itertools;
use log::{debug, trace};

use crate::{
    error::Error,
    event::{Event, ParticleRecord},
    table,
};

const ROOT_MAGIC: &[u8] = b"root";
const HEPMC2_START: &[u8] = b"HepMC::";
const LHEF_START: &[u8] = b"<LesHouchesEvents";

/// Supported input formats
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum FileFormat {
    #[cfg(feature = "hepmc2")]
    HepMC2,
    #[cfg(feature = "lhef")]
    Lhef,
    #[cfg(feature = "ntuple")]
    BlackHatNtuple,
    ParticleTable,
}

impl Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            #[cfg(feature = "hepmc2")]
            FileFormat::HepMC2 => "HepMC2",
            #[cfg(feature = "lhef")]
            FileFormat::Lhef => "LHEF",
            #[cfg(feature = "ntuple")]
            FileFormat::BlackHatNtuple => "BlackHat ntuple",
            FileFormat::ParticleTable => "particle table",
        };
        name.fmt(f)
    }
}

impl FromStr for FileFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            #[cfg(feature = "hepmc2")]
            "hepmc2" => Ok(FileFormat::HepMC2),
            #[cfg(feature = "lhef")]
            "lhef" | "lhe" => Ok(FileFormat::Lhef),
            #[cfg(feature = "ntuple")]
            "ntuple" => Ok(FileFormat::BlackHatNtuple),
            "table" => Ok(FileFormat::ParticleTable),
            _ => Err(format!("Unknown or unsupported format: {s}")),
        }
    }
}

/// Guess the format of an event file from its first bytes
pub fn detect_format(path: &Path) -> Result<FileFormat, Error> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_owned(),
        source,
    })?;
    let mut start = Vec::with_capacity(64);
    file.take(4096).read_to_end(&mut start)?;
    format_from_start(&start).ok_or_else(|| Error::UnknownFormat(path.to_owned()))
}

fn format_from_start(start: &[u8]) -> Option<FileFormat> {
    if start.starts_with(ROOT_MAGIC) {
        #[cfg(feature = "ntuple")]
        return Some(FileFormat::BlackHatNtuple);
        #[cfg(not(feature = "ntuple"))]
        return None;
    }
    let first = start
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(start.len());
    let start = &start[first..];
    if start.starts_with(HEPMC2_START) {
        #[cfg(feature = "hepmc2")]
        return Some(FileFormat::HepMC2);
        #[cfg(not(feature = "hepmc2"))]
        return None;
    }
    if start.starts_with(LHEF_START) {
        #[cfg(feature = "lhef")]
        return Some(FileFormat::Lhef);
        #[cfg(not(feature = "lhef"))]
        return None;
    }
    Some(FileFormat::ParticleTable)
}

type EventIter = Box<dyn Iterator<Item = Result<Event, Error>>>;

/// Read events from a file
pub struct FileReader {
    path: PathBuf,
    format: FileFormat,
    events: EventIter,
    nevents: usize,
}

impl FileReader {
    /// Open an event file
    ///
    /// If no format is given, it is detected from the file content.
    pub fn open(path: impl AsRef<Path>, format: Option<FileFormat>) -> Result<Self, Error> {
        let path = path.as_ref();
        let format = match format {
            Some(format) => format,
            None => detect_format(path)?,
        };
        debug!("Reading {path:?} as {format} file");
        let events = open_events(path, format)?;
        Ok(Self {
            path: path.to_owned(),
            format,
            events,
            nevents: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    /// Number of events read so far
    pub fn nevents(&self) -> usize {
        self.nevents
    }

    /// Iterate over all particles of all remaining events
    pub fn particles(&mut self) -> impl Iterator<Item = Result<ParticleRecord, Error>> + '_ {
        self.flatten_ok()
    }
}

impl Iterator for FileReader {
    type Item = Result<Event, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let event = self.events.next()?;
        if let Ok(event) = &event {
            self.nevents += 1;
            trace!(
                "Event {} ({:?}) with {} particles",
                self.nevents,
                event.id,
                event.particles.len()
            );
        }
        Some(event)
    }
}

fn open_file(path: &Path) -> Result<BufReader<File>, Error> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| Error::Open {
            path: path.to_owned(),
            source,
        })
}

fn open_events(path: &Path, format: FileFormat) -> Result<EventIter, Error> {
    match format {
        #[cfg(feature = "hepmc2")]
        FileFormat::HepMC2 => {
            let reader = hepmc2::Reader::from(open_file(path)?);
            let events = reader.map(move |event| {
                event.map(Event::from).map_err(Error::read(format))
            });
            Ok(Box::new(events))
        }
        #[cfg(feature = "lhef")]
        FileFormat::Lhef => {
            let mut reader = lhef::Reader::new(open_file(path)?)
                .map_err(Error::read(format))?;
            let events = std::iter::from_fn(move || {
                reader
                    .hepeup()
                    .map_err(Error::read(format))
                    .transpose()
                    .map(|event| event.map(Event::from))
            });
            Ok(Box::new(events))
        }
        #[cfg(feature = "ntuple")]
        FileFormat::BlackHatNtuple => {
            let reader = ntuple::Reader::new(path).map_err(|source| Error::Open {
                path: path.to_owned(),
                source,
            })?;
            let events = reader.map(move |event| {
                event.map(Event::from).map_err(Error::read(format))
            });
            Ok(Box::new(events))
        }
        FileFormat::ParticleTable => {
            Ok(Box::new(table::Reader::new(open_file(path)?)))
        }
    }
}
