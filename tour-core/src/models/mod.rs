//! A collection of models to represent a country of depots and settlements.

mod country;
pub use self::country::Country;

mod location;
pub use self::location::{Location, NameWarning, Position};

mod travel;
pub use self::travel::{DEFAULT_SPEED, travel_time};
pub(crate) use self::travel::estimate_travel_time;
