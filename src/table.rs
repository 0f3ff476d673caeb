//! Plain-text particle tables
//!
//! Each line describes one particle with its PDG code and the bit flags
//! of the `O2mcparticle` table:
//!
//! ```text
//! # fPdgCode fFlags
//! E 0
//! 211 4
//! -11 1
//! E 1
//! 2212 4
//! ```
//!
//! A line starting with `E` opens a new event with an optional event
//! number. Particles before the first `E` line belong to an implicit
//! first event without number. Empty lines and lines starting with `#`
//! are ignored.
use std::io::{BufRead, ErrorKind};

use crate::{
    error::Error,
    event::{Event, ParticleRecord},
};

/// Particle was produced by the detector transport
pub const PRODUCED_BY_TRANSPORT: u8 = 0x1;
/// Particle is from a background event
pub const FROM_BACKGROUND_EVENT: u8 = 0x2;
/// Particle is a physical primary
pub const PHYSICAL_PRIMARY: u8 = 0x4;

pub fn is_physical_primary(flags: u8) -> bool {
    flags & PHYSICAL_PRIMARY == PHYSICAL_PRIMARY
}

/// Read events from a particle table
#[derive(Debug)]
pub struct Reader<R> {
    lines: std::io::Lines<R>,
    line_nr: usize,
    next_id: Option<Option<i32>>,
    done: bool,
}

impl<R: BufRead> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_nr: 0,
            next_id: None,
            done: false,
        }
    }

    fn read_event(&mut self) -> Result<Option<Event>, Error> {
        let mut event = match self.next_id.take() {
            Some(id) => Some(Event {
                id,
                ..Default::default()
            }),
            None => None,
        };
        for line in self.lines.by_ref() {
            self.line_nr += 1;
            let line_nr = self.line_nr;
            let line = line.map_err(|err| match err.kind() {
                ErrorKind::InvalidData => Error::Parse {
                    line: line_nr,
                    msg: "Line is not valid UTF-8".to_owned(),
                },
                _ => Error::Io(err),
            })?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(rest) = line.strip_prefix('E') {
                let id = parse_event_id(rest, line_nr)?;
                if event.is_some() {
                    self.next_id = Some(id);
                    return Ok(event);
                }
                event = Some(Event {
                    id,
                    ..Default::default()
                });
                continue;
            }
            let particle = parse_particle(line, line_nr)?;
            event.get_or_insert_with(Default::default).particles.push(particle);
        }
        Ok(event)
    }
}

impl<R: BufRead> Iterator for Reader<R> {
    type Item = Result<Event, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let res = self.read_event();
        if !matches!(res, Ok(Some(_))) {
            self.done = true;
        }
        res.transpose()
    }
}

fn parse_event_id(rest: &str, line: usize) -> Result<Option<i32>, Error> {
    let mut entries = rest.split_whitespace();
    let id = entries
        .next()
        .map(|id| {
            id.parse().map_err(|_| Error::Parse {
                line,
                msg: format!("Invalid event number: {id}"),
            })
        })
        .transpose()?;
    if let Some(extra) = entries.next() {
        return Err(Error::Parse {
            line,
            msg: format!("Unexpected entry after event number: {extra}"),
        });
    }
    Ok(id)
}

fn parse_particle(line: &str, line_nr: usize) -> Result<ParticleRecord, Error> {
    let err = |msg: String| Error::Parse { line: line_nr, msg };
    let entries: Vec<_> = line.split_whitespace().collect();
    let [pdg, flags] = entries[..] else {
        return Err(err(format!(
            "Expected two entries (PDG code, flags), found {}",
            entries.len()
        )));
    };
    let pdg: i32 = pdg
        .parse()
        .map_err(|_| err(format!("Invalid PDG code: {pdg}")))?;
    let flags: u8 = flags
        .parse()
        .map_err(|_| err(format!("Invalid particle flags: {flags}")))?;
    Ok(ParticleRecord::new(pdg, is_physical_primary(flags)))
}
