//! Planner configuration.

use crate::{CoreError, CoreResult};

/// Assumed average road speed in city traffic, km/h.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 25.0;

/// Default number of alternative routes per request.
pub const DEFAULT_MAX_ALTERNATIVES: usize = 3;

/// Default radius of the nearby-landmark query, km.
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 5.0;

/// Tunables for a planning session.  Fixed for the lifetime of a planner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Speed used to turn a route distance into minutes.
    pub average_speed_kmh: f64,

    /// Upper bound on alternatives returned next to the shortest route.
    /// Zero disables the alternative search.
    pub max_alternatives: usize,

    /// Radius for "what else is near this landmark".
    pub nearby_radius_km: f64,
}

impl PlannerConfig {
    /// Reject speeds and radii that would make estimates meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.average_speed_kmh.is_finite() && self.average_speed_kmh > 0.0) {
            return Err(CoreError::Config(format!(
                "average_speed_kmh must be positive and finite, got {}",
                self.average_speed_kmh
            )));
        }
        if !(self.nearby_radius_km.is_finite() && self.nearby_radius_km >= 0.0) {
            return Err(CoreError::Config(format!(
                "nearby_radius_km must be non-negative and finite, got {}",
                self.nearby_radius_km
            )));
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
            max_alternatives: DEFAULT_MAX_ALTERNATIVES,
            nearby_radius_km: DEFAULT_NEARBY_RADIUS_KM,
        }
    }
}
