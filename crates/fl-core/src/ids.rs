//! Strongly typed facility identifier.
//!
//! The inner integer is the upstream `FacilityID` column.  It is `pub` so
//! loaders can construct it directly; it is *not* an index into any `Vec`.

use std::fmt;
use std::str::FromStr;

/// Identifier of a health facility, unique within one dataset.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FacilityId(pub u32);

impl FacilityId {
    #[inline(always)]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FacilityId {
    #[inline(always)]
    fn from(n: u32) -> Self {
        FacilityId(n)
    }
}

impl FromStr for FacilityId {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(FacilityId)
    }
}
