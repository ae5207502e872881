//! This module reimports commonly used types.

pub use crate::construction::{Candidate, DepotSite, Tour, Trip};

pub use crate::models::{Country, DEFAULT_SPEED, Location, NameWarning, Position, travel_time};

pub use crate::generators::{random_country, regular_n_gon};

pub use crate::utils::{
    Environment, Float, GenericError, GenericResult, InfoLogger, Timer, TourError, TourResult, compare_floats,
};
