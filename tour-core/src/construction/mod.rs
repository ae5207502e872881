//! Contains tour construction heuristics and depot selection built on top of [`Country`].
//!
//! [`Country`]: crate::models::Country

mod depot_site;
pub use self::depot_site::DepotSite;

mod nearest_neighbour;
pub use self::nearest_neighbour::{Candidate, Tour, Trip};
