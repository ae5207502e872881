//! Import from a simple csv format logic.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

use super::{FormatError, ImportOptions};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::io::{BufReader, BufWriter, Read, Write};
use tour_core::prelude::*;

#[derive(Debug, Deserialize)]
struct CsvLocation {
    location: String,
    region: String,
    depot: String,
    x: Option<Float>,
    y: Option<Float>,
    r: Option<Float>,
    theta: Option<Float>,
}

#[derive(Debug, Serialize)]
struct CsvCartesian<'a> {
    location: &'a str,
    region: &'a str,
    depot: &'a str,
    x: Float,
    y: Float,
}

#[derive(Debug, Serialize)]
struct CsvPolar<'a> {
    location: &'a str,
    region: &'a str,
    depot: &'a str,
    r: Float,
    theta: Float,
}

fn read_csv_entries<T, R: Read>(reader: BufReader<R>) -> Result<Vec<T>, Box<dyn Error>>
where
    for<'de> T: Deserialize<'de>,
{
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut entries = vec![];

    for entry in reader.deserialize() {
        entries.push(entry?);
    }

    Ok(entries)
}

fn parse_depot_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn parse_position(entry: &CsvLocation) -> Result<Position, String> {
    match (entry.x, entry.y, entry.r, entry.theta) {
        (Some(x), Some(y), None, None) => Ok(Position::Cartesian { x, y }),
        (None, None, Some(r), Some(theta)) => Ok(Position::Polar { r, theta }),
        _ => Err("expected either 'x' and 'y' or 'r' and 'theta' coordinates".to_string()),
    }
}

fn create_location(entry: &CsvLocation, options: &ImportOptions) -> Result<(Location, Vec<NameWarning>), String> {
    let is_depot = parse_depot_flag(entry.depot.as_str())
        .ok_or_else(|| format!("non-boolean depot flag '{}'", entry.depot))?;
    let position = parse_position(entry)?;

    let name = entry.location.as_str();
    let region = entry.region.as_str();

    let result = if options.normalize_names {
        Location::new_normalized(name, region, is_depot, position)
    } else {
        Location::new(name, region, is_depot, position).map(|location| (location, vec![]))
    };

    result.map_err(|err| err.to_string())
}

fn create_record_error(row: usize, entry: &CsvLocation, details: String) -> FormatError {
    FormatError::new_with_details(
        "E0001",
        format!("invalid location record at row {row}: '{}'", entry.location),
        "check location name, region, depot flag and coordinates".to_string(),
        details,
    )
}

/// Reads a country from csv format. Expected columns are `location,region,depot,x,y` for
/// Cartesian positions and `location,region,depot,r,theta` for polar ones.
pub fn read_csv_country<R: Read>(
    reader: BufReader<R>,
    options: &ImportOptions,
    environment: &Environment,
) -> Result<Country, FormatError> {
    let entries = read_csv_entries::<CsvLocation, _>(reader).map_err(|err| {
        FormatError::new_with_details(
            "E0000",
            "cannot read locations".to_string(),
            "check csv header and column values".to_string(),
            err.to_string(),
        )
    })?;

    let locations = entries.iter().enumerate().try_fold(Vec::with_capacity(entries.len()), |mut acc, (idx, entry)| {
        let (location, warnings) =
            create_location(entry, options).map_err(|details| create_record_error(idx + 1, entry, details))?;

        warnings.iter().for_each(|warning| environment.log(format!("warning: {warning}").as_str()));
        acc.push(location);

        Ok::<_, FormatError>(acc)
    })?;

    let country = Country::with_speed(locations, options.speed).map_err(|err| {
        FormatError::new_with_details(
            "E0002",
            "cannot create country".to_string(),
            "check that locations are unique and speed is positive".to_string(),
            err.to_string(),
        )
    })?;

    environment.log(
        format!(
            "loaded {} locations: {} depots, {} settlements in {} regions",
            country.locations().len(),
            country.n_depots(),
            country.n_settlements(),
            country.regions().len()
        )
        .as_str(),
    );

    Ok(country)
}

/// Writes a country in csv format. Polar columns are used only when every location has a polar
/// position.
pub fn write_csv_country<W: Write>(writer: BufWriter<W>, country: &Country) -> Result<(), GenericError> {
    let mut writer = csv::Writer::from_writer(writer);
    let is_polar = country.locations().iter().all(|location| matches!(location.position(), Position::Polar { .. }));

    for location in country.locations() {
        let depot = if location.is_depot() { "TRUE" } else { "FALSE" };
        let (name, region) = (location.name(), location.region());

        let result = match (is_polar, *location.position()) {
            (true, Position::Polar { r, theta }) => {
                writer.serialize(CsvPolar { location: name, region, depot, r, theta })
            }
            (_, position) => {
                let (x, y) = position.to_cartesian();
                writer.serialize(CsvCartesian { location: name, region, depot, x, y })
            }
        };

        result.map_err(|err| format!("cannot write location '{location}': {err}"))?;
    }

    writer.flush().map_err(GenericError::from)
}
