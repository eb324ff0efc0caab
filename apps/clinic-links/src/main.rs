//! clinic-links: nearest-neighbour links between health facilities.
//!
//! Loads the national clinics CSV, drops known-bad records, applies the
//! province/name selection, prints the map view, details and type
//! histogram, then links every facility to its nearest neighbour inside its
//! own province and exports the annotated edges.

mod cli;
mod logger;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use fl_core::Facility;
use fl_data::{MapView, load_facilities_csv, select_detail, type_distribution};
use fl_link::{EdgeAnnotation, Linker, LinkerKind, annotate, link_regions, partition_by_region};
use fl_output::{CsvEdgeWriter, EdgeWriter, GeoJsonEdgeWriter};

use cli::Cli;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    run(&cli).inspect_err(|e| error!("{e:#}"))
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.link_config()?;

    // 1. Load and clean.
    let loaded = load_facilities_csv(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    let all = cli.exclusions().apply(loaded);
    println!("=== clinic-links ===");
    println!("Facilities: {}  |  Input: {}", all.len(), cli.input.display());
    println!();

    // 2. Selection.
    let filter = cli.filter();
    let filtered = filter.apply(&all);
    if filtered.is_empty() {
        warn!(region = %cli.region, search = ?cli.search, "selection is empty");
    }

    let view = MapView::fit(&filtered, filter.is_region_selected());
    println!(
        "Selection: {} facilities  |  Map centre {}  zoom {}",
        filtered.len(),
        view.center,
        view.zoom
    );
    println!();

    print_details(&select_detail(&all, &filtered, cli.detail.as_deref(), cli.search.as_deref()));
    print_histogram(&filtered);

    // 3. Link each province on its own.
    let groups = partition_by_region(&filtered);
    let linker = LinkerKind::from(cli.linker).build(config);
    let t0 = Instant::now();
    let links = link_regions(linker.as_ref(), &groups).context("nearest-neighbour linking failed")?;
    info!(
        linker = linker.name(),
        regions = links.len(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "linking complete"
    );

    // 4. Annotate and export.
    let mut writers = open_writers(cli)?;
    let mut total = 0;
    for (group, region_links) in groups.iter().zip(&links) {
        let annotated = annotate(&group.facilities, &region_links.edges)
            .with_context(|| format!("failed to annotate region {}", group.region))?;
        for w in &mut writers {
            w.write_region(&group.region, &annotated)
                .with_context(|| format!("failed to write region {}", group.region))?;
        }
        print_edges(&group.region, &annotated);
        total += annotated.len();
    }
    for w in &mut writers {
        w.finish().context("failed to finish output")?;
    }

    if !writers.is_empty() {
        println!("{total} edges written to {}", cli.output_dir.display());
    }
    Ok(())
}

fn open_writers(cli: &Cli) -> Result<Vec<Box<dyn EdgeWriter>>> {
    let mut writers: Vec<Box<dyn EdgeWriter>> = Vec::new();
    if !cli.format.csv() && !cli.format.geojson() {
        return Ok(writers);
    }

    let dir = &cli.output_dir;
    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    if cli.format.csv() {
        writers.push(Box::new(CsvEdgeWriter::new(dir)?));
    }
    if cli.format.geojson() {
        writers.push(Box::new(GeoJsonEdgeWriter::new(dir)));
    }
    Ok(writers)
}

// ── Tables ────────────────────────────────────────────────────────────────────

fn print_details(selected: &[&Facility]) {
    println!("{:<8} {:<32} {:<14} {:<14} {:<6} {:>10} {:>10}", "ID", "Facility", "Province", "District", "Type", "Lat", "Lon");
    println!("{}", "-".repeat(100));
    for f in selected {
        println!(
            "{:<8} {:<32} {:<14} {:<14} {:<6} {:>10.4} {:>10.4}",
            f.id.get(), f.name, f.region, f.district, f.facility_type, f.position.lat, f.position.lon
        );
    }
    println!();
}

fn print_histogram(facilities: &[Facility]) {
    let counts = type_distribution(facilities);
    let Some(max) = counts.iter().map(|c| c.count).max() else {
        return;
    };
    println!("Facility types");
    for c in &counts {
        let bar = "#".repeat((c.count * 40).div_ceil(max));
        println!("  {:<8} {:>5}  {bar}", c.facility_type, c.count);
    }
    println!();
}

fn print_edges(region: &str, edges: &[EdgeAnnotation]) {
    println!("[{region}] {} links", edges.len());
    println!("{:<32} {:<32} {:>10}", "From", "Nearest", "km");
    println!("{}", "-".repeat(76));
    for a in edges {
        println!("{:<32} {:<32} {:>10}", a.from_name, a.to_name, a.label());
    }
    println!();
}
