//! `fl-link` — nearest-neighbour linking of facilities.
//!
//! Given a set of facilities in one region, every facility is linked to its
//! nearest other facility by great-circle distance.  The result is a directed
//! edge list, one [`DistanceEdge`] per facility, ready to be annotated and
//! handed to a renderer.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`linker`]   | `Linker` trait, `BruteForceLinker`, `LinkerKind`              |
//! | [`rtree`]    | `RTreeLinker` (same contract, R-tree backed)                  |
//! | [`config`]   | `LinkConfig`, `RegionPolicy`                                  |
//! | [`edge`]     | `DistanceEdge`                                                |
//! | [`annotate`] | `EdgeAnnotation`, `annotate`                                  |
//! | [`regions`]  | `RegionGroup`, `partition_by_region`, `link_regions`          |
//! | [`error`]    | `LinkError`, `LinkResult<T>`                                  |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `link_regions` links region groups on Rayon's pool.       |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod annotate;
pub mod config;
pub mod edge;
pub mod error;
pub mod linker;
pub mod regions;
pub mod rtree;


pub use annotate::{EdgeAnnotation, annotate};
pub use config::{DEFAULT_TIE_EPSILON_KM, LinkConfig, RegionPolicy};
pub use edge::DistanceEdge;
pub use error::{LinkError, LinkResult};
pub use linker::{BruteForceLinker, Linker, LinkerKind};
pub use regions::{RegionGroup, RegionLinks, link_regions, partition_by_region};
pub use rtree::RTreeLinker;
