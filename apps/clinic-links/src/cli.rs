//! Command-line arguments.

use std::path::PathBuf;

use anyhow::{Result, ensure};
use clap::{Parser, ValueEnum};

use fl_core::FacilityId;
use fl_data::{ALL_REGIONS, Exclusions, FacilityFilter};
use fl_link::{DEFAULT_TIE_EPSILON_KM, LinkConfig, LinkerKind, RegionPolicy};

/// Clinic in the national export whose coordinates are known to be wrong.
pub const KNOWN_BAD_CLINIC: &str = "Jokan-CHC (8629)";

#[derive(Parser, Debug)]
#[command(name = "clinic-links")]
#[command(about = "Link every health facility to its nearest neighbour within its province")]
pub struct Cli {
    /// Facility CSV (clinics export with Province Name, FacilityID, Latitude, ... columns).
    #[arg(long, short)]
    pub input: PathBuf,

    /// Province to show, or "All" to show and link every province separately.
    #[arg(long, default_value = ALL_REGIONS)]
    pub region: String,

    /// Case-insensitive substring of the facility name.
    #[arg(long)]
    pub search: Option<String>,

    /// Exact facility name to show in the details table.
    #[arg(long)]
    pub detail: Option<String>,

    /// Facility names to drop before anything else happens.
    #[arg(long = "exclude-name", default_value = KNOWN_BAD_CLINIC)]
    pub exclude_names: Vec<String>,

    /// Facility ids to drop before anything else happens.
    #[arg(long = "exclude-id")]
    pub exclude_ids: Vec<u32>,

    /// Ignore every exclusion, including the default one.
    #[arg(long)]
    pub no_exclusions: bool,

    #[arg(long, value_enum, default_value_t = LinkerArg::BruteForce)]
    pub linker: LinkerArg,

    /// Candidates within this distance of the nearest are tied; lowest input index wins.
    #[arg(long, default_value_t = DEFAULT_TIE_EPSILON_KM)]
    pub tie_epsilon_km: f64,

    /// Skip the single-province check inside the linker.
    #[arg(long)]
    pub trust_regions: bool,

    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LinkerArg {
    BruteForce,
    Rtree,
}

impl From<LinkerArg> for LinkerKind {
    fn from(arg: LinkerArg) -> Self {
        match arg {
            LinkerArg::BruteForce => LinkerKind::BruteForce,
            LinkerArg::Rtree => LinkerKind::RTree,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Geojson,
    Both,
    /// Print the table only.
    None,
}

impl OutputFormat {
    pub fn csv(self) -> bool {
        matches!(self, OutputFormat::Csv | OutputFormat::Both)
    }

    pub fn geojson(self) -> bool {
        matches!(self, OutputFormat::Geojson | OutputFormat::Both)
    }
}

impl Cli {
    pub fn link_config(&self) -> Result<LinkConfig> {
        ensure!(
            self.tie_epsilon_km.is_finite() && self.tie_epsilon_km >= 0.0,
            "--tie-epsilon-km must be a finite, non-negative number (got {})",
            self.tie_epsilon_km
        );
        let policy = if self.trust_regions { RegionPolicy::Trust } else { RegionPolicy::Validate };
        Ok(LinkConfig::default()
            .with_tie_epsilon_km(self.tie_epsilon_km)
            .with_region_policy(policy))
    }

    pub fn exclusions(&self) -> Exclusions {
        if self.no_exclusions {
            return Exclusions::new();
        }
        let by_name = self
            .exclude_names
            .iter()
            .filter(|n| !n.trim().is_empty())
            .fold(Exclusions::new(), |ex, n| ex.name(n.trim()));
        self.exclude_ids
            .iter()
            .fold(by_name, |ex, &id| ex.id(FacilityId(id)))
    }

    pub fn filter(&self) -> FacilityFilter {
        FacilityFilter::all()
            .region_selection(&self.region)
            .name_contains(self.search.as_deref().unwrap_or(""))
    }
}
