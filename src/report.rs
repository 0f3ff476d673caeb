use std::io::{self, Write};

#[cfg(feature = "plot")]
use std::path::Path;

#[cfg(feature = "plot")]
use plotters::prelude::*;

#[cfg(feature = "plot")]
use crate::{counts::CountTable, error::Error, species::Species};
use crate::scanner::Summary;

/// Write the count table followed by the particle totals
pub fn write_summary<W: Write>(mut out: W, summary: &Summary) -> io::Result<()> {
    write!(out, "{}", summary.counts)?;
    writeln!(out)?;
    writeln!(out, "particles:          {:>12}", summary.particles)?;
    writeln!(out, "physical primaries: {:>12}", summary.primaries)?;
    writeln!(out, "counted:            {:>12}", summary.counts.total())?;
    writeln!(out, "unmapped primaries: {:>12}", summary.unmapped_primaries())?;
    Ok(())
}

/// Draw the counts as a bar chart in SVG format
///
/// There is one bar per species, labelled with the bin label and
/// annotated with the count.
#[cfg(feature = "plot")]
pub fn plot(counts: &CountTable, title: &str, path: &Path) -> Result<(), Error> {
    draw(counts, title, path).map_err(Error::Plot)
}

#[cfg(feature = "plot")]
fn draw(
    counts: &CountTable,
    title: &str,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let nbins = Species::ALL.len() as f32;
    let max = counts.as_array().iter().copied().max().unwrap_or_default();
    let ymax = (1.2 * max as f32).max(1.);

    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0f32..nbins, 0f32..ymax)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(10)
        .x_label_formatter(&|x| bin_label(*x))
        .y_desc("counts")
        .draw()?;

    for (species, count) in counts.iter() {
        let x0 = species.index() as f32;
        let x1 = x0 + 1.;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0 + 0.1, 0.), (x1 - 0.1, count as f32)],
            BLUE.mix(0.55).filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            count.to_string(),
            (x0 + 0.4, count as f32 + 0.05 * ymax),
            ("sans-serif", 16).into_font().color(&BLACK),
        )))?;
    }

    root.present()?;
    Ok(())
}

// axis labels sit at the bin centres
#[cfg(feature = "plot")]
fn bin_label(x: f32) -> String {
    let bin = x.floor();
    if bin < 0. || x - bin < 0.25 || x - bin > 0.75 {
        return String::new();
    }
    Species::ALL
        .get(bin as usize)
        .map(|s| s.label().to_owned())
        .unwrap_or_default()
}
