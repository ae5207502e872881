//! Provides the way to generate synthetic countries for experiments and benchmarks.

#[cfg(test)]
#[path = "../../tests/unit/generators/generators_test.rs"]
mod generators_test;

use crate::models::{Country, Location, Position};
use crate::utils::{Float, TourError, TourResult};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// A region name used by generated single-region countries.
pub const DEFAULT_REGION: &str = "Centre";

/// Creates a country with a single depot at the origin and `size` settlements evenly spaced on
/// the circle of the given `radius`.
pub fn regular_n_gon(size: usize, radius: Float) -> TourResult<Country> {
    let depot = Location::new("Depot", DEFAULT_REGION, true, Position::Polar { r: 0., theta: 0. })?;

    let settlements = (0..size).map(|idx| {
        let theta = wrap_angle(2. * PI * idx as Float / size as Float);
        Location::new(&format!("Settlement {}", idx + 1), DEFAULT_REGION, false, Position::Polar { r: radius, theta })
    });

    let locations = std::iter::once(Ok(depot)).chain(settlements).collect::<TourResult<Vec<_>>>()?;

    Country::new(locations)
}

/// Creates a reproducible random country: locations are uniformly spread over the disk of the
/// given `radius` and randomly assigned to one of `regions`.
pub fn random_country(
    settlements: usize,
    depots: usize,
    regions: usize,
    radius: Float,
    seed: u64,
) -> TourResult<Country> {
    if regions == 0 {
        return Err(TourError::validation("regions", "expected at least one region"));
    }

    let mut rng = SmallRng::seed_from_u64(seed);

    let locations = (0..depots + settlements)
        .map(|idx| {
            let (name, is_depot) = if idx < depots {
                (format!("Depot {}", idx + 1), true)
            } else {
                (format!("Settlement {}", idx - depots + 1), false)
            };

            let region = format!("Region {}", rng.gen_range(1..=regions));
            let r = radius * rng.r#gen::<Float>().sqrt();
            let theta = rng.gen_range(-PI..=PI);

            Location::new(name.as_str(), region.as_str(), is_depot, Position::Polar { r, theta })
        })
        .collect::<TourResult<Vec<_>>>()?;

    Country::new(locations)
}

fn wrap_angle(theta: Float) -> Float {
    if theta > PI { theta - 2. * PI } else { theta }
}
