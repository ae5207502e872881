#[cfg(test)]
#[path = "../../tests/unit/models/location_test.rs"]
mod location_test;

use crate::utils::{Float, TourError, TourResult};
use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Represents a position on a plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// A Cartesian position.
    Cartesian {
        /// X coordinate.
        x: Float,
        /// Y coordinate.
        y: Float,
    },
    /// A polar position.
    Polar {
        /// Radius, must be non-negative.
        r: Float,
        /// Angle in radians, must be within `[-π, π]`.
        theta: Float,
    },
}

impl Position {
    /// Returns the position as Cartesian `(x, y)` pair.
    pub fn to_cartesian(&self) -> (Float, Float) {
        match *self {
            Position::Cartesian { x, y } => (x, y),
            Position::Polar { r, theta } => (r * theta.cos(), r * theta.sin()),
        }
    }

    /// Returns the distance between two positions. Positions of the same representation use
    /// the native formula, mixed ones are compared in Cartesian space.
    pub fn distance_to(&self, other: &Position) -> Float {
        match (*self, *other) {
            (Position::Cartesian { x: x1, y: y1 }, Position::Cartesian { x: x2, y: y2 }) => (x1 - x2).hypot(y1 - y2),
            (Position::Polar { r: r1, theta: t1 }, Position::Polar { r: r2, theta: t2 }) => {
                // NOTE law of cosines can go slightly below zero due to round-off
                (r1 * r1 + r2 * r2 - 2. * r1 * r2 * (t1 - t2).cos()).max(0.).sqrt()
            }
            _ => {
                let (x1, y1) = self.to_cartesian();
                let (x2, y2) = other.to_cartesian();

                (x1 - x2).hypot(y1 - y2)
            }
        }
    }

    fn validate(&self) -> TourResult<()> {
        match *self {
            Position::Cartesian { x, y } => {
                if !x.is_finite() || !y.is_finite() {
                    return Err(TourError::validation("position", format!("non-finite coordinates ({x}, {y})")));
                }
            }
            Position::Polar { r, theta } => {
                if !r.is_finite() || r < 0. {
                    return Err(TourError::validation("radius", format!("expected non-negative value, got {r}")));
                }

                if !(-PI..=PI).contains(&theta) {
                    return Err(TourError::validation("angle", format!("expected value within [-π, π], got {theta}")));
                }
            }
        }

        Ok(())
    }
}

/// A recoverable warning produced when a name or region was reformatted to title case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameWarning {
    /// A field name: `name` or `region`.
    pub field: &'static str,
    /// An original value.
    pub original: String,
    /// A value after normalization.
    pub normalized: String,
}

impl Display for NameWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}' was not in title case, using '{}'", self.field, self.original, self.normalized)
    }
}

/// Represents a named location which is either a depot or a settlement.
///
/// Identity is defined by the `(name, region)` pair: two locations with the same name and region
/// are equal regardless of their positions. Locations are ordered by region first, then by name.
#[derive(Clone, Debug)]
pub struct Location {
    name: String,
    region: String,
    is_depot: bool,
    position: Position,
}

impl Location {
    /// Creates a new location, validating name, region and position.
    pub fn new(name: &str, region: &str, is_depot: bool, position: Position) -> TourResult<Self> {
        validate_label("name", name)?;
        validate_label("region", region)?;
        position.validate()?;

        Ok(Self { name: name.to_string(), region: region.to_string(), is_depot, position })
    }

    /// Creates a new location with name and region converted to title case: every
    /// whitespace-separated word gets an uppercase first letter and lowercase rest. Returns a
    /// warning for every field which had to be reformatted.
    pub fn new_normalized(
        name: &str,
        region: &str,
        is_depot: bool,
        position: Position,
    ) -> TourResult<(Self, Vec<NameWarning>)> {
        validate_label("name", name)?;
        validate_label("region", region)?;

        let mut warnings = Vec::new();
        let mut normalize = |field: &'static str, value: &str| {
            let normalized = to_title_case(value);
            if normalized != value {
                warnings.push(NameWarning { field, original: value.to_string(), normalized: normalized.clone() });
            }
            normalized
        };

        let name = normalize("name", name);
        let region = normalize("region", region);

        Self::new(name.as_str(), region.as_str(), is_depot, position).map(|location| (location, warnings))
    }

    /// Returns location name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns region name.
    pub fn region(&self) -> &str {
        self.region.as_str()
    }

    /// Returns location position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns true if location is a depot.
    pub fn is_depot(&self) -> bool {
        self.is_depot
    }

    /// Returns true if location is a settlement. It is always an opposite of [`Self::is_depot`].
    pub fn is_settlement(&self) -> bool {
        !self.is_depot
    }

    /// Changes location role.
    pub fn set_depot(&mut self, is_depot: bool) {
        self.is_depot = is_depot;
    }

    /// Returns geometric distance to other location.
    pub fn distance_to(&self, other: &Location) -> Float {
        self.position.distance_to(&other.position)
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.region == other.region
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.region.hash(state);
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        self.region.cmp(&other.region).then_with(|| self.name.cmp(&other.name))
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) in {}", self.name, if self.is_depot { "Depot" } else { "Settlement" }, self.region)
    }
}

fn validate_label(field: &'static str, value: &str) -> TourResult<()> {
    if value.trim().is_empty() {
        return Err(TourError::validation(field, "expected non-empty string"));
    }

    if value.trim() != value {
        return Err(TourError::validation(field, format!("unexpected surrounding whitespace in '{value}'")));
    }

    Ok(())
}

/// Capitalizes the first letter of every whitespace-separated word and lowercases the rest, so
/// `o'neil` becomes `O'neil`. Runs of whitespace collapse into a single space.
fn to_title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
