//! Core crate contains the building blocks to model a country of depots and settlements and to
//! construct delivery tours over it using a ***nearest-neighbour*** heuristic.
//!
//! # Overview
//!
//! - [`Location`](models::Location): a named point in a region, either a depot or a settlement,
//!   positioned in Cartesian or polar coordinates.
//! - [`travel_time`](models::travel_time): an asymmetric travel time model which penalizes
//!   trips into other regions proportionally to the destination region population.
//! - [`Country`](models::Country): an immutable aggregate of locations which answers travel time
//!   queries and builds tours from its depots.
//!
//! # Examples
//!
//! ```
//! use tour_core::prelude::*;
//!
//! let locations = vec![
//!     Location::new("Depot", "North", true, Position::Cartesian { x: 0., y: 0. })?,
//!     Location::new("Farm", "North", false, Position::Cartesian { x: 1., y: 1. })?,
//!     Location::new("Mill", "North", false, Position::Cartesian { x: 2., y: 2. })?,
//! ];
//! let country = Country::new(locations)?;
//!
//! let depot = country.depots()[0].clone();
//! let tour = country.nn_tour(&depot)?;
//!
//! assert_eq!(tour.path.len(), 4);
//! assert_eq!(tour.path[1].name(), "Farm");
//! # Ok::<(), TourError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod generators;
pub mod models;
pub mod prelude;
pub mod utils;
