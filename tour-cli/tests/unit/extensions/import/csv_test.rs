use super::*;
use std::sync::{Arc, Mutex};

const POLAR_CSV: &str = r"location,region,depot,r,theta
Riverwood,Whiterun Hold,FALSE,49877.15654485528,-1.1153081421843865
Heartwood Mill,The Rift,TRUE,164031.25924652288,-0.6236682227787959
Karthwasten,The Reach,TRUE,138231.89539682947,2.858973382047493
Whiterun,Whiterun Hold,FALSE,21197.215713390284,-0.3577712724508101
";

fn read_country(data: &str, options: &ImportOptions) -> Result<Country, FormatError> {
    read_csv_country(BufReader::new(data.as_bytes()), options, &Environment::silent())
}

fn get_error_code(data: &str) -> String {
    read_country(data, &ImportOptions::default()).err().map(|err| err.code).unwrap_or_default()
}

#[test]
fn can_read_polar_country() {
    let country = read_country(POLAR_CSV, &ImportOptions::default()).unwrap();

    assert_eq!(country.locations().len(), 4);
    assert_eq!(country.n_depots(), 2);
    assert_eq!(country.depots()[0].name(), "Heartwood Mill");
    assert_eq!(country.depots()[0].region(), "The Rift");
    assert!(matches!(country.locations()[0].position(), Position::Polar { .. }));
}

#[test]
fn can_read_cartesian_country_with_different_depot_flags() {
    let data = "location,region,depot,x,y\nA,North,true,0,0\nB,North,0,1,1\nC , North , 1 , 2 , 2\nD,North,False,3,3\n";

    let country = read_country(data, &ImportOptions::default()).unwrap();

    assert_eq!(country.n_depots(), 2);
    assert_eq!(country.depots()[1].name(), "C");
    assert_eq!(country.depots()[1].region(), "North");
    assert_eq!(*country.locations()[3].position(), Position::Cartesian { x: 3., y: 3. });
}

#[test]
fn can_apply_speed_from_options() {
    let options = ImportOptions { speed: 9.5, ..ImportOptions::default() };

    let country = read_country(POLAR_CSV, &options).unwrap();

    assert_eq!(country.speed(), 9.5);
}

#[test]
fn can_reject_invalid_records() {
    assert_eq!(get_error_code("location,region,depot,x,y\nA,North,yes,0,0\n"), "E0001");
    assert_eq!(get_error_code("location,region,depot,x,y\nA,North,TRUE,1,\n"), "E0001");
    assert_eq!(get_error_code("location,region,depot,r,theta\nA,North,TRUE,-1,0\n"), "E0001");
    assert_eq!(get_error_code("location,region,depot,x,y\n,North,TRUE,1,1\n"), "E0001");
}

#[test]
fn can_reject_malformed_csv() {
    assert_eq!(get_error_code("location,region,depot,x,y\nA,North,TRUE,abc,0\n"), "E0000");
    assert_eq!(get_error_code("name,depot,x,y\nA,TRUE,0,0\n"), "E0000");
}

#[test]
fn can_reject_duplicate_locations() {
    let data = "location,region,depot,x,y\nA,North,TRUE,0,0\nA,North,FALSE,1,1\n";

    let error = read_country(data, &ImportOptions::default()).err().unwrap();

    assert_eq!(error.code, "E0002");
    assert!(error.details.unwrap().contains("'A"));
}

#[test]
fn can_report_record_row_in_error() {
    let data = "location,region,depot,x,y\nA,North,TRUE,0,0\nB,North,maybe,1,1\n";

    let error = read_country(data, &ImportOptions::default()).err().unwrap();

    assert_eq!(error.cause, "invalid location record at row 2: 'B'");
    assert_eq!(error.details, Some("non-boolean depot flag 'maybe'".to_string()));
}

#[test]
fn can_normalize_names_and_log_warnings() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };
    let environment = Environment::new(logger, false);
    let options = ImportOptions { normalize_names: true, ..ImportOptions::default() };
    let data = "location,region,depot,x,y\nold mill,north ridge,1,0,0\nFarm,north ridge,0,3,4\n";

    let country = read_csv_country(BufReader::new(data.as_bytes()), &options, &environment).unwrap();

    assert_eq!(country.depots()[0].name(), "Old Mill");
    assert_eq!(country.regions(), vec!["North Ridge"]);
    let messages = messages.lock().unwrap();
    assert_eq!(messages.iter().filter(|msg| msg.starts_with("warning:")).count(), 3);
    assert_eq!(messages[0], "warning: name 'old mill' was not in title case, using 'Old Mill'");
    assert!(messages.last().unwrap().starts_with("loaded 2 locations: 1 depots, 1 settlements in 1 regions"));
}

#[test]
fn can_keep_names_without_normalization() {
    let data = "location,region,depot,x,y\nold mill,north ridge,1,0,0\n";

    let country = read_country(data, &ImportOptions::default()).unwrap();

    assert_eq!(country.depots()[0].name(), "old mill");
}

#[test]
fn can_write_polar_country_and_read_it_back() {
    let country = read_country(POLAR_CSV, &ImportOptions::default()).unwrap();
    let mut buffer = Vec::new();

    write_csv_country(BufWriter::new(&mut buffer), &country).unwrap();

    let data = String::from_utf8(buffer).unwrap();
    assert!(data.starts_with("location,region,depot,r,theta\n"));
    assert!(data.contains("Heartwood Mill,The Rift,TRUE,"));
    let restored = read_country(data.as_str(), &ImportOptions::default()).unwrap();
    assert_eq!(restored.locations(), country.locations());
    assert_eq!(restored.depots(), country.depots());
}

#[test]
fn can_write_mixed_country_as_cartesian() {
    let country = Country::new(vec![
        Location::new("A", "North", true, Position::Polar { r: 2., theta: 0. }).unwrap(),
        Location::new("B", "North", false, Position::Cartesian { x: 1., y: 1. }).unwrap(),
    ])
    .unwrap();
    let mut buffer = Vec::new();

    write_csv_country(BufWriter::new(&mut buffer), &country).unwrap();

    let data = String::from_utf8(buffer).unwrap();
    assert_eq!(data, "location,region,depot,x,y\nA,North,TRUE,2.0,0.0\nB,North,FALSE,1.0,1.0\n");
}
