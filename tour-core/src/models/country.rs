#[cfg(test)]
#[path = "../../tests/unit/models/country_test.rs"]
mod country_test;

use crate::models::{DEFAULT_SPEED, Location, estimate_travel_time};
use crate::utils::{Float, TourError, TourResult};
use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::sync::Arc;

/// An immutable collection of locations which answers travel time queries between its members.
///
/// Depots and settlements are derived from the location role once, on construction, and keep
/// the input order.
pub struct Country {
    locations: Vec<Arc<Location>>,
    depots: Vec<Arc<Location>>,
    settlements: Vec<Arc<Location>>,
    pub(crate) depot_indices: Vec<usize>,
    pub(crate) settlement_indices: Vec<usize>,
    index: FxHashMap<Arc<Location>, usize>,
    region_population: FxHashMap<String, usize>,
    speed: Float,
}

impl Country {
    /// Creates a new instance of `Country` using the default speed.
    pub fn new(locations: Vec<Location>) -> TourResult<Self> {
        Self::with_speed(locations, DEFAULT_SPEED)
    }

    /// Creates a new instance of `Country` with custom travel speed (length units per second).
    pub fn with_speed(locations: Vec<Location>, speed: Float) -> TourResult<Self> {
        if !speed.is_finite() || speed <= 0. {
            return Err(TourError::InvalidSpeed(speed));
        }

        let locations = locations.into_iter().map(Arc::new).collect::<Vec<_>>();

        let mut index = FxHashMap::default();
        let mut region_population = FxHashMap::<String, usize>::default();
        for (idx, location) in locations.iter().enumerate() {
            if index.insert(location.clone(), idx).is_some() {
                return Err(TourError::DuplicateLocation(location.to_string()));
            }
            *region_population.entry(location.region().to_string()).or_default() += 1;
        }

        let (depot_indices, settlement_indices): (Vec<usize>, Vec<usize>) =
            (0..locations.len()).partition(|&idx| locations[idx].is_depot());

        let depots = depot_indices.iter().map(|&idx| locations[idx].clone()).collect();
        let settlements = settlement_indices.iter().map(|&idx| locations[idx].clone()).collect();

        Ok(Self { locations, depots, settlements, depot_indices, settlement_indices, index, region_population, speed })
    }

    /// Returns all locations in their original order.
    pub fn locations(&self) -> &[Arc<Location>] {
        self.locations.as_slice()
    }

    /// Returns all depots in their original order.
    pub fn depots(&self) -> &[Arc<Location>] {
        self.depots.as_slice()
    }

    /// Returns all settlements in their original order.
    pub fn settlements(&self) -> &[Arc<Location>] {
        self.settlements.as_slice()
    }

    /// Returns amount of depots.
    pub fn n_depots(&self) -> usize {
        self.depots.len()
    }

    /// Returns amount of settlements.
    pub fn n_settlements(&self) -> usize {
        self.settlements.len()
    }

    /// Returns travel speed.
    pub fn speed(&self) -> Float {
        self.speed
    }

    /// Returns true if location is a member of the country.
    pub fn contains(&self, location: &Location) -> bool {
        self.index.contains_key(location)
    }

    /// Finds a member by its name and region.
    pub fn get(&self, name: &str, region: &str) -> Option<&Arc<Location>> {
        self.locations.iter().find(|location| location.name() == name && location.region() == region)
    }

    /// Returns amount of locations in the region.
    pub fn region_population(&self, region: &str) -> usize {
        self.region_population.get(region).copied().unwrap_or_default()
    }

    /// Returns distinct region names in sorted order.
    pub fn regions(&self) -> Vec<&str> {
        let mut regions = self.region_population.keys().map(|region| region.as_str()).collect::<Vec<_>>();
        regions.sort_unstable();

        regions
    }

    /// Returns travel time in hours from one member to another. Time is asymmetric: it depends on
    /// the destination region population when the trip crosses a region boundary.
    pub fn travel_time(&self, from: &Location, to: &Location) -> TourResult<Float> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;

        Ok(self.leg_time(from, to))
    }

    /// Returns total travel time along the path of members, visiting them in the given order.
    pub fn path_time<L: Borrow<Location>>(&self, path: &[L]) -> TourResult<Float> {
        let indices = path.iter().map(|location| self.index_of(location.borrow())).collect::<TourResult<Vec<_>>>()?;

        Ok(indices.windows(2).map(|leg| self.leg_time(leg[0], leg[1])).sum())
    }

    pub(crate) fn location(&self, idx: usize) -> &Arc<Location> {
        &self.locations[idx]
    }

    pub(crate) fn index_of(&self, location: &Location) -> TourResult<usize> {
        self.index.get(location).copied().ok_or_else(|| TourError::NotInCountry(location.to_string()))
    }

    /// Returns travel time between two members given by their indices.
    pub(crate) fn leg_time(&self, from: usize, to: usize) -> Float {
        let (from, to) = (&self.locations[from], &self.locations[to]);
        let crosses_region = from.region() != to.region();

        estimate_travel_time(from.distance_to(to), crosses_region, self.region_population(to.region()), self.speed)
    }
}
