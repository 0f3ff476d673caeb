use std::path::PathBuf;

use clap::Parser;
use mccounts::{reader::FileFormat, ChargeConjugation};

/// Count physical primary electrons, kaons, pions, and protons
///
/// Arguments starting with '@' are read as files listing further
/// arguments, one per line.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub(crate) struct Opt {
    /// Input format. By default, the format is detected for each file.
    ///
    /// Possible values are 'hepmc2', 'lhef', 'ntuple', 'table', as far
    /// as they are enabled.
    #[arg(long)]
    pub(crate) format: Option<FileFormat>,

    /// Count antiparticles together with the corresponding particles.
    #[arg(long)]
    pub(crate) antiparticles: bool,

    /// Write a line for each particle to this file.
    #[arg(long)]
    pub(crate) trace: Option<PathBuf>,

    /// Draw a bar chart of the counts to this SVG file.
    #[cfg(feature = "plot")]
    #[arg(long)]
    pub(crate) plot: Option<PathBuf>,

    /// Title of the bar chart.
    #[cfg(feature = "plot")]
    #[arg(long, default_value = "PDG counts")]
    pub(crate) title: String,

    /// Verbosity level.
    ///
    /// Possible values with increasing amount of output are
    /// 'off', 'error', 'warn', 'info', 'debug', 'trace'.
    #[arg(short, long, default_value = "info")]
    pub(crate) loglevel: String,

    /// Input files.
    #[arg(value_name = "INFILES", required = true)]
    pub(crate) infiles: Vec<PathBuf>,
}

impl Opt {
    pub(crate) fn charge_conjugation(&self) -> ChargeConjugation {
        if self.antiparticles {
            ChargeConjugation::Symmetric
        } else {
            ChargeConjugation::Exact
        }
    }
}
