#[cfg(test)]
#[path = "../../tests/unit/construction/nearest_neighbour_test.rs"]
mod nearest_neighbour_test;

use crate::models::{Country, Location};
use crate::utils::{Float, TourError, TourResult, compare_floats};
use std::sync::Arc;

/// Specifies a trip destination candidate.
#[derive(Clone, Copy, Debug)]
pub enum Candidate<'a> {
    /// A direct reference to a country member.
    Location(&'a Location),
    /// An index into the country settlements.
    Index(usize),
}

impl<'a> From<&'a Location> for Candidate<'a> {
    fn from(location: &'a Location) -> Self {
        Candidate::Location(location)
    }
}

impl<'a> From<&'a Arc<Location>> for Candidate<'a> {
    fn from(location: &'a Arc<Location>) -> Self {
        Candidate::Location(location.as_ref())
    }
}

impl From<usize> for Candidate<'_> {
    fn from(index: usize) -> Self {
        Candidate::Index(index)
    }
}

/// A single trip to the fastest reachable destination.
#[derive(Clone, Debug)]
pub struct Trip {
    /// A destination.
    pub location: Arc<Location>,
    /// Travel time in hours.
    pub time: Float,
}

/// A closed tour which starts and ends at the same depot.
#[derive(Clone, Debug)]
pub struct Tour {
    /// Visited locations in order, the depot is the first and the last one.
    pub path: Vec<Arc<Location>>,
    /// Total travel time in hours.
    pub total_time: Float,
}

impl Tour {
    /// Returns the depot where tour starts and ends or `None` if the path is empty.
    pub fn depot(&self) -> Option<&Arc<Location>> {
        self.path.first()
    }
}

impl Country {
    /// Returns the fastest trip from the `current` location to one of the `candidates`, or all
    /// settlements when candidates are not specified.
    ///
    /// Ties are resolved in favour of the candidate ordered first by region and name. An empty
    /// candidate pool results in `None`.
    pub fn fastest_trip_from(
        &self,
        current: &Location,
        candidates: Option<&[Candidate<'_>]>,
    ) -> TourResult<Option<Trip>> {
        let from = self.index_of(current)?;

        let pool = match candidates {
            Some(candidates) => {
                candidates.iter().map(|candidate| self.resolve_candidate(candidate)).collect::<TourResult<Vec<_>>>()?
            }
            None => self.settlement_indices.clone(),
        };

        Ok(self
            .select_fastest(from, pool.as_slice())
            .map(|(position, time)| Trip { location: self.location(pool[position]).clone(), time }))
    }

    /// Builds a tour from the given depot visiting every settlement exactly once by always moving
    /// to the fastest reachable unvisited settlement.
    ///
    /// Runs in `O(n²)` for `n` settlements.
    pub fn nn_tour(&self, start_depot: &Location) -> TourResult<Tour> {
        let start = self.index_of(start_depot)?;

        if !self.location(start).is_depot() {
            return Err(TourError::NotADepot(start_depot.to_string()));
        }

        Ok(self.build_nn_tour(start))
    }

    pub(crate) fn build_nn_tour(&self, start: usize) -> Tour {
        let mut unvisited = self.settlement_indices.clone();
        let mut path = Vec::with_capacity(unvisited.len() + 2);
        let mut total_time = 0.;
        let mut current = start;

        path.push(self.location(start).clone());

        while let Some((position, time)) = self.select_fastest(current, unvisited.as_slice()) {
            current = unvisited.swap_remove(position);
            total_time += time;
            path.push(self.location(current).clone());
        }

        total_time += self.leg_time(current, start);
        path.push(self.location(start).clone());

        Tour { path, total_time }
    }

    /// Returns position in the pool of the fastest destination and travel time to it.
    fn select_fastest(&self, from: usize, pool: &[usize]) -> Option<(usize, Float)> {
        pool.iter().enumerate().map(|(position, &to)| (position, self.leg_time(from, to))).min_by(
            |&(a_position, a_time), &(b_position, b_time)| {
                compare_floats(a_time, b_time)
                    .then_with(|| self.location(pool[a_position]).cmp(self.location(pool[b_position])))
            },
        )
    }

    fn resolve_candidate(&self, candidate: &Candidate<'_>) -> TourResult<usize> {
        match *candidate {
            Candidate::Location(location) => self.index_of(location),
            Candidate::Index(index) => self
                .settlement_indices
                .get(index)
                .copied()
                .ok_or(TourError::IndexOutOfRange { index, size: self.settlement_indices.len() }),
        }
    }
}
