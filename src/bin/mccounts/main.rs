mod opt;

use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use crate::opt::Opt;

use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, error, info};
use mccounts::{reader::FileReader, report, Classifier, Scanner, Summary};

fn main() -> Result<()> {
    let args = argfile::expand_args_from(
        std::env::args_os(),
        argfile::parse_fromfile,
        argfile::PREFIX,
    )
    .with_context(|| "Failed to read argument file")?;
    let opt = Opt::parse_from(args);

    let env = Env::default().filter_or("MCCOUNTS_LOG", &opt.loglevel);
    env_logger::init_from_env(env);

    info!("mccounts {}", env!("CARGO_PKG_VERSION"));
    debug!("settings: {:#?}", opt);

    let classifier = Classifier::new(opt.charge_conjugation());
    let summary = match &opt.trace {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {path:?}"))?;
            let scanner = Scanner::with_trace(classifier, BufWriter::new(file));
            count(&opt, scanner)?
        }
        None => count(&opt, Scanner::new(classifier))?,
    };

    let stdout = io::stdout();
    report::write_summary(stdout.lock(), &summary)?;

    #[cfg(feature = "plot")]
    if let Some(path) = &opt.plot {
        report::plot(&summary.counts, &opt.title, path)
            .with_context(|| format!("Failed to write {path:?}"))?;
        info!("Wrote bar chart to {path:?}");
    }
    info!("done");
    Ok(())
}

fn count<W: Write>(opt: &Opt, mut scanner: Scanner<W>) -> Result<Summary> {
    let format = opt.format;
    let mut nopened = 0;
    for file in &opt.infiles {
        let mut reader = match FileReader::open(file, format) {
            Ok(reader) => reader,
            Err(err) => {
                error!("Skipping un-openable file {file:?}: {err}");
                continue;
            }
        };
        nopened += 1;
        info!("Counting particles in {file:?}");
        scanner
            .scan(reader.particles())
            .with_context(|| format!("Failed to read {file:?}"))?;
        debug!("Read {} events from {file:?}", reader.nevents());
    }
    if nopened == 0 {
        bail!("No input file could be opened");
    }
    let summary = scanner.finish()?;
    info!(
        "Counted {} of {} physical primaries ({} particles in total)",
        summary.counts.total(),
        summary.primaries,
        summary.particles
    );
    Ok(summary)
}
