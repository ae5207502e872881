#[cfg(test)]
#[path = "../../tests/unit/models/travel_test.rs"]
mod travel_test;

use crate::utils::{Float, TourError, TourResult};

/// A default travel speed in length units per second.
pub const DEFAULT_SPEED: Float = 4.75;

/// Seconds in one hour.
const SECONDS_PER_HOUR: Float = 3600.;

/// Returns travel time in hours needed to cover the `distance` with given `speed` (length units
/// per second).
///
/// When the trip crosses a region boundary, time grows by a tenth for every location in the
/// destination region.
///
/// # Examples
///
/// ```
/// use tour_core::models::{travel_time, DEFAULT_SPEED};
///
/// let one_hour_distance = 3600. * DEFAULT_SPEED;
///
/// assert_eq!(travel_time(one_hour_distance, false, 3, DEFAULT_SPEED)?, 1.);
/// assert_eq!(travel_time(one_hour_distance, false, 0, DEFAULT_SPEED / 2.)?, 2.);
/// assert_eq!(travel_time(one_hour_distance, true, 20, DEFAULT_SPEED)?, 3.);
/// # Ok::<(), tour_core::utils::TourError>(())
/// ```
pub fn travel_time(
    distance: Float,
    crosses_region: bool,
    destination_population: usize,
    speed: Float,
) -> TourResult<Float> {
    if distance.is_nan() || distance < 0. {
        return Err(TourError::InvalidDistance(distance));
    }

    if !speed.is_finite() || speed <= 0. {
        return Err(TourError::InvalidSpeed(speed));
    }

    Ok(estimate_travel_time(distance, crosses_region, destination_population, speed))
}

/// Estimates travel time without validating arguments.
pub(crate) fn estimate_travel_time(
    distance: Float,
    crosses_region: bool,
    destination_population: usize,
    speed: Float,
) -> Float {
    let penalty = if crosses_region { destination_population as Float / 10. } else { 0. };

    (distance / speed) * (1. + penalty) / SECONDS_PER_HOUR
}
