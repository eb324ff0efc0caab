//! Linker configuration.

/// Candidates within this many kilometres of the minimum distance are treated
/// as tied.  Absorbs floating-point noise without merging genuinely distinct
/// neighbours (facilities are never 1 µm apart in practice).
pub const DEFAULT_TIE_EPSILON_KM: f64 = 1e-9;

/// What a linker does about the single-region precondition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RegionPolicy {
    /// Fail with [`LinkError::RegionMismatch`](crate::LinkError::RegionMismatch)
    /// if any facility's region differs from the first facility's.
    #[default]
    Validate,
    /// Assume the caller partitioned correctly; link whatever is given.
    Trust,
}

/// Shared configuration for every [`Linker`](crate::Linker) implementation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkConfig {
    /// Tie tolerance in kilometres.  Among candidates within this distance of
    /// the minimum, the lowest input index wins.
    pub tie_epsilon_km: f64,
    pub region_policy:  RegionPolicy,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            tie_epsilon_km: DEFAULT_TIE_EPSILON_KM,
            region_policy:  RegionPolicy::Validate,
        }
    }
}

impl LinkConfig {
    pub fn with_tie_epsilon_km(mut self, eps: f64) -> Self {
        self.tie_epsilon_km = eps;
        self
    }

    pub fn with_region_policy(mut self, policy: RegionPolicy) -> Self {
        self.region_policy = policy;
        self
    }
}
