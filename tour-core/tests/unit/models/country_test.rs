use super::*;
use crate::helpers::models::*;
use crate::models::travel_time;
use std::collections::HashSet;

#[test]
fn can_partition_locations_into_depots_and_settlements() {
    let country = create_skyrim_country();

    assert_eq!(country.locations().len(), 4);
    assert_eq!(get_names(country.depots()), vec!["Heartwood Mill", "Karthwasten"]);
    assert_eq!(get_names(country.settlements()), vec!["Riverwood", "Whiterun"]);
    assert_eq!(country.n_depots(), 2);
    assert_eq!(country.n_settlements(), 2);

    let all = country.locations().iter().cloned().collect::<HashSet<_>>();
    assert!(country.depots().iter().chain(country.settlements().iter()).all(|location| all.contains(location)));
    assert!(country.depots().iter().all(|depot| !country.settlements().contains(depot)));
}

#[test]
fn can_keep_locations_order() {
    let country = create_country(&[
        ("C", "North", false, 0., 0.),
        ("A", "South", true, 1., 0.),
        ("B", "North", false, 2., 0.),
    ]);

    assert_eq!(get_names(country.locations()), vec!["C", "A", "B"]);
    assert_eq!(get_names(country.settlements()), vec!["C", "B"]);
}

#[test]
fn can_reject_duplicate_locations() {
    let result = Country::new(vec![
        create_cartesian("A", "North", true, 0., 0.),
        create_cartesian("A", "North", false, 5., 5.),
    ]);

    assert!(matches!(result, Err(TourError::DuplicateLocation(_))));
}

#[test]
fn can_reject_invalid_speed() {
    let result = Country::with_speed(vec![create_cartesian("A", "North", true, 0., 0.)], 0.);

    assert_eq!(result.err(), Some(TourError::InvalidSpeed(0.)));
}

#[test]
fn can_count_region_population() {
    let country = create_skyrim_country();

    assert_eq!(country.region_population("Whiterun Hold"), 2);
    assert_eq!(country.region_population("The Rift"), 1);
    assert_eq!(country.region_population("Cyrodiil"), 0);
    assert_eq!(country.regions(), vec!["The Reach", "The Rift", "Whiterun Hold"]);
}

#[test]
fn can_find_members() {
    let country = create_skyrim_country();
    let kvatch = create_polar("Kvatch", "Cyrodiil", false, 175_000., -3. * std::f64::consts::FRAC_PI_4);

    assert!(country.contains(&create_cartesian("Riverwood", "Whiterun Hold", false, 0., 0.)));
    assert!(!country.contains(&kvatch));
    assert_eq!(country.get("Whiterun", "Whiterun Hold").map(|l| l.name()), Some("Whiterun"));
    assert!(country.get("Whiterun", "The Rift").is_none());
}

#[test]
fn can_calculate_asymmetric_travel_time() {
    let country = create_skyrim_country();
    let riverwood = country.get("Riverwood", "Whiterun Hold").unwrap().clone();
    let heartwood_mill = country.get("Heartwood Mill", "The Rift").unwrap().clone();
    let distance = riverwood.distance_to(&heartwood_mill);

    let there = country.travel_time(&riverwood, &heartwood_mill).unwrap();
    let back = country.travel_time(&heartwood_mill, &riverwood).unwrap();

    assert_float_eq!(there, travel_time(distance, true, 1, DEFAULT_SPEED).unwrap());
    assert_float_eq!(back, travel_time(distance, true, 2, DEFAULT_SPEED).unwrap());
    assert!(back > there);
}

#[test]
fn can_calculate_travel_time_within_region() {
    let country = create_line_country();
    let depot = country.get("Depot", "North").unwrap().clone();
    let s2 = country.get("S2", "North").unwrap().clone();

    let there = country.travel_time(&depot, &s2).unwrap();
    let back = country.travel_time(&s2, &depot).unwrap();

    assert_float_eq!(there, 8_f64.sqrt() / DEFAULT_SPEED / 3600.);
    assert_eq!(there, back);
}

#[test]
fn can_use_member_position_for_travel_time() {
    let country = create_line_country();
    let depot = create_cartesian("Depot", "North", true, 1000., 1000.);
    let s1 = create_cartesian("S1", "North", false, -50., 0.);

    let time = country.travel_time(&depot, &s1).unwrap();

    assert_float_eq!(time, 2_f64.sqrt() / DEFAULT_SPEED / 3600.);
}

#[test]
fn can_use_custom_speed() {
    let locations = vec![create_cartesian("A", "North", true, 0., 0.), create_cartesian("B", "North", false, 0., 36.)];
    let country = Country::with_speed(locations, 0.01).unwrap();

    let time = country.travel_time(country.locations()[0].as_ref(), country.locations()[1].as_ref()).unwrap();

    assert_eq!(country.speed(), 0.01);
    assert_float_eq!(time, 1.);
}

#[test]
fn can_reject_travel_time_for_unknown_location() {
    let country = create_skyrim_country();
    let riverwood = country.get("Riverwood", "Whiterun Hold").unwrap().clone();
    let kvatch = create_polar("Kvatch", "Cyrodiil", false, 175_000., -3. * std::f64::consts::FRAC_PI_4);

    let result = country.travel_time(&riverwood, &kvatch);

    assert_eq!(result, Err(TourError::NotInCountry("Kvatch (Settlement) in Cyrodiil".to_string())));
    assert!(country.travel_time(&kvatch, &riverwood).is_err());
    assert!(country.travel_time(&riverwood, &riverwood).is_ok());
}

#[test]
fn can_calculate_path_time() {
    let country = create_line_country();
    let path = ["Depot", "S1", "S2", "Depot"].map(|name| country.get(name, "North").unwrap().clone());

    let total = country.path_time(&path[..]).unwrap();

    assert_float_eq!(total, 2. * 8_f64.sqrt() / DEFAULT_SPEED / 3600.);
    assert_eq!(country.path_time::<Location>(&[]).unwrap(), 0.);
}
