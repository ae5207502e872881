#[cfg(test)]
#[path = "../../tests/unit/construction/depot_site_test.rs"]
mod depot_site_test;

use crate::construction::Tour;
use crate::models::{Country, Location};
use crate::utils::{Environment, Timer, compare_floats, parallel_collect};
use std::cmp::Ordering;
use std::sync::Arc;

/// A depot together with its nearest-neighbour tour.
#[derive(Clone, Debug)]
pub struct DepotSite {
    /// A depot.
    pub depot: Arc<Location>,
    /// A tour which starts and ends at the depot.
    pub tour: Tour,
}

impl Country {
    /// Builds a nearest-neighbour tour for every depot, keeping the depot order.
    pub fn depot_tours(&self) -> Vec<DepotSite> {
        self.depot_indices.iter().map(|&idx| self.create_depot_site(idx)).collect()
    }

    /// Returns the depot with the fastest nearest-neighbour tour or `None` if there are no depots.
    /// Ties are resolved in favour of the depot ordered first by region and name.
    pub fn best_depot_site(&self) -> Option<DepotSite> {
        select_best_site(self.depot_tours())
    }

    /// Same as [`Self::best_depot_site`], but builds tours for different depots in parallel.
    pub fn best_depot_site_parallel(&self) -> Option<DepotSite> {
        select_best_site(parallel_collect(self.depot_indices.as_slice(), |&idx| self.create_depot_site(idx)))
    }

    /// Builds depot tours using given environment: it decides whether to run in parallel and
    /// receives build duration together with the tour time of every depot.
    pub fn depot_tours_with(&self, environment: &Environment) -> Vec<DepotSite> {
        let sites = Timer::measure_duration_with_callback(
            || {
                if environment.is_parallel {
                    parallel_collect(self.depot_indices.as_slice(), |&idx| self.create_depot_site(idx))
                } else {
                    self.depot_tours()
                }
            },
            |duration| {
                environment.log(format!("{} depot tours built in {}ms", self.n_depots(), duration.as_millis()).as_str())
            },
        );

        sites.iter().for_each(|site| {
            environment.log(format!("tour from {} takes {:.2} h", site.depot, site.tour.total_time).as_str())
        });

        sites
    }

    /// Selects the best depot site using given environment.
    pub fn best_depot_site_with(&self, environment: &Environment) -> Option<DepotSite> {
        let best = select_best_site(self.depot_tours_with(environment));

        match &best {
            Some(site) => environment.log(format!("best depot site: {}", site.depot).as_str()),
            None => environment.log("no depots in the country"),
        }

        best
    }

    fn create_depot_site(&self, idx: usize) -> DepotSite {
        DepotSite { depot: self.location(idx).clone(), tour: self.build_nn_tour(idx) }
    }
}

impl DepotSite {
    /// Returns the site with the fastest tour. Ties are resolved in favour of the depot ordered
    /// first by region and name.
    pub fn select_best(sites: &[DepotSite]) -> Option<&DepotSite> {
        sites.iter().min_by(|a, b| compare_sites(a, b))
    }
}

fn select_best_site(sites: Vec<DepotSite>) -> Option<DepotSite> {
    sites.into_iter().min_by(compare_sites)
}

fn compare_sites(a: &DepotSite, b: &DepotSite) -> Ordering {
    compare_floats(a.tour.total_time, b.tour.total_time).then_with(|| a.depot.as_ref().cmp(b.depot.as_ref()))
}
