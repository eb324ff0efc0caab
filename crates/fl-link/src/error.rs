//! Linking error type.

use thiserror::Error;

use fl_core::{CoreError, FacilityId};

/// Errors produced by `fl-link`.
///
/// Every variant fails the whole batch: linkers never return a partial edge
/// list.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("facility {facility} has an invalid coordinate: {source}")]
    InvalidCoordinate {
        facility: FacilityId,
        #[source]
        source:   CoreError,
    },

    #[error("facility {facility} is in region {found:?} but the batch is for region {expected:?}")]
    RegionMismatch {
        facility: FacilityId,
        expected: String,
        found:    String,
    },

    #[error("edge references facility {0}, which is not in the facility set")]
    UnknownFacility(FacilityId),

    #[error("region {region:?}: {source}")]
    Region {
        region: String,
        #[source]
        source: Box<LinkError>,
    },
}

impl LinkError {
    /// Strip any [`LinkError::Region`] wrappers.
    pub fn root(&self) -> &LinkError {
        match self {
            LinkError::Region { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type LinkResult<T> = Result<T, LinkError>;
