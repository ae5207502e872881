use super::*;
use tour_core::models::Position;

fn create_line_country() -> Country {
    Country::new(vec![
        Location::new("Depot", "North", true, Position::Cartesian { x: 0., y: 0. }).unwrap(),
        Location::new("S1", "North", false, Position::Cartesian { x: 3., y: 4. }).unwrap(),
        Location::new("S2", "South", false, Position::Cartesian { x: 6., y: 8. }).unwrap(),
    ])
    .unwrap()
}

#[test]
fn can_create_tour_report() {
    let country = create_line_country();
    let tour = country.nn_tour(country.depots()[0].as_ref()).unwrap();

    let report = create_tour_report(&country, &tour).unwrap();

    assert_eq!(report.depot, "Depot");
    assert_eq!(report.stops.len(), 4);
    assert_eq!(report.stops[0].leg_hours, 0.);
    let names = report.stops.iter().map(|stop| stop.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Depot", "S1", "S2", "Depot"]);
    let sum = report.stops.iter().map(|stop| stop.leg_hours).sum::<Float>();
    assert!((sum - report.total_hours).abs() < 1E-9);
}

#[test]
fn can_write_tour_report_as_text() {
    let country = create_line_country();
    let tour = country.nn_tour(country.depots()[0].as_ref()).unwrap();
    let report = create_tour_report(&country, &tour).unwrap();
    let mut buffer = Vec::new();

    write_tour_text(BufWriter::new(&mut buffer), &report).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Tour from Depot in North:");
    assert_eq!(lines[2], "\tS1 (Settlement) in North");
    assert_eq!(lines[5], format!("Total time: {:.2} h", tour.total_time));
}

#[test]
fn can_write_depot_report_as_json() {
    let country = create_line_country();
    let sites = country.depot_tours();
    let best = DepotSite::select_best(sites.as_slice());
    let report = create_depot_report(&country, sites.as_slice(), best).unwrap();
    let mut buffer = Vec::new();

    write_json(BufWriter::new(&mut buffer), &report).unwrap();

    let value: serde_json::Value = serde_json::from_slice(buffer.as_slice()).unwrap();
    assert_eq!(value["best"]["depot"], "Depot");
    assert_eq!(value["best"]["stops"][1]["isDepot"], false);
    assert_eq!(value["candidates"].as_array().map(|candidates| candidates.len()), Some(1));
}

#[test]
fn can_write_depot_report_without_depots() {
    let country = Country::new(vec![
        Location::new("S1", "North", false, Position::Cartesian { x: 0., y: 0. }).unwrap(),
    ])
    .unwrap();
    let report = create_depot_report(&country, &[], None).unwrap();
    let mut buffer = Vec::new();

    write_depot_text(BufWriter::new(&mut buffer), &report).unwrap();

    assert_eq!(String::from_utf8(buffer).unwrap(), "No depots found\n");
}

#[test]
fn can_reject_report_of_empty_tour() {
    let country = create_line_country();
    let tour = Tour { path: vec![], total_time: 0. };

    let result = create_tour_report(&country, &tour);

    assert_eq!(result.err(), Some(GenericError::from("cannot report a tour with empty path")));
}
