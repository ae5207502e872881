//! Contains logic to report tours and depot selection results.

#[cfg(test)]
#[path = "../../tests/unit/extensions/report_test.rs"]
mod report_test;

use serde::Serialize;
use std::io::{BufWriter, Write};
use tour_core::prelude::*;

/// A single visit within a tour.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopReport {
    /// Location name.
    pub name: String,
    /// Location region.
    pub region: String,
    /// True if location is a depot.
    pub is_depot: bool,
    /// Travel time in hours from the previous stop.
    pub leg_hours: Float,
}

/// A tour report.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourReport {
    /// Depot name.
    pub depot: String,
    /// Depot region.
    pub region: String,
    /// Visited stops in order, including the depot at both ends.
    pub stops: Vec<StopReport>,
    /// Total travel time in hours.
    pub total_hours: Float,
}

/// A summary of a depot tour.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateReport {
    /// Depot name.
    pub depot: String,
    /// Depot region.
    pub region: String,
    /// Total tour time in hours.
    pub total_hours: Float,
}

/// A depot selection report.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepotReport {
    /// The best tour if country has depots.
    pub best: Option<TourReport>,
    /// Tour summaries of every depot in their original order.
    pub candidates: Vec<CandidateReport>,
}

/// Creates a tour report.
pub fn create_tour_report(country: &Country, tour: &Tour) -> Result<TourReport, GenericError> {
    let depot = tour.depot().ok_or_else(|| GenericError::from("cannot report a tour with empty path"))?;

    let stops = std::iter::once(Ok(0.))
        .chain(tour.path.windows(2).map(|leg| country.travel_time(&leg[0], &leg[1])))
        .zip(tour.path.iter())
        .map(|(leg_hours, location)| {
            leg_hours.map(|leg_hours| StopReport {
                name: location.name().to_string(),
                region: location.region().to_string(),
                is_depot: location.is_depot(),
                leg_hours,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TourReport {
        depot: depot.name().to_string(),
        region: depot.region().to_string(),
        stops,
        total_hours: tour.total_time,
    })
}

/// Creates a depot selection report.
pub fn create_depot_report(
    country: &Country,
    sites: &[DepotSite],
    best: Option<&DepotSite>,
) -> Result<DepotReport, GenericError> {
    let candidates = sites
        .iter()
        .map(|site| CandidateReport {
            depot: site.depot.name().to_string(),
            region: site.depot.region().to_string(),
            total_hours: site.tour.total_time,
        })
        .collect();

    let best = best.map(|site| create_tour_report(country, &site.tour)).transpose()?;

    Ok(DepotReport { best, candidates })
}

/// Writes a report as json.
pub fn write_json<W: Write, T: Serialize>(writer: BufWriter<W>, report: &T) -> Result<(), GenericError> {
    serde_json::to_writer_pretty(writer, report).map_err(|err| format!("cannot write json report: '{err}'").into())
}

/// Writes a tour report as plain text: a location per line and total time.
pub fn write_tour_text<W: Write>(mut writer: BufWriter<W>, report: &TourReport) -> Result<(), GenericError> {
    writeln!(writer, "Tour from {} in {}:", report.depot, report.region)?;
    for stop in report.stops.iter() {
        let role = if stop.is_depot { "Depot" } else { "Settlement" };
        writeln!(writer, "\t{} ({role}) in {}", stop.name, stop.region)?;
    }
    writeln!(writer, "Total time: {:.2} h", report.total_hours)?;

    writer.flush().map_err(GenericError::from)
}

/// Writes a depot selection report as plain text.
pub fn write_depot_text<W: Write>(mut writer: BufWriter<W>, report: &DepotReport) -> Result<(), GenericError> {
    for candidate in report.candidates.iter() {
        writeln!(writer, "{} in {}: {:.2} h", candidate.depot, candidate.region, candidate.total_hours)?;
    }

    match &report.best {
        Some(best) => {
            writeln!(writer, "Best depot: {} in {}", best.depot, best.region)?;
            write_tour_text(writer, best)
        }
        None => {
            writeln!(writer, "No depots found")?;
            writer.flush().map_err(GenericError::from)
        }
    }
}
