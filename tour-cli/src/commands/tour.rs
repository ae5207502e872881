#[cfg(test)]
#[path = "../../tests/unit/commands/tour_test.rs"]
mod tour_test;

use super::*;
use tour_cli::extensions::render::render_country;

const DEPOT_ARG_NAME: &str = "depot";
const REGION_ARG_NAME: &str = "region";

pub fn get_tour_app() -> Command {
    let command = Command::new("tour")
        .about("Builds a nearest-neighbour tour which starts and ends at the given depot")
        .arg(
            Arg::new(DEPOT_ARG_NAME)
                .help("Specifies the name of the start depot")
                .short('d')
                .long(DEPOT_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(REGION_ARG_NAME)
                .help("Specifies the region of the start depot, required when the depot name is ambiguous")
                .short('r')
                .long(REGION_ARG_NAME)
                .required(false),
        );

    add_report_args(add_country_args(command))
}

pub fn run_tour(matches: &ArgMatches) -> GenericResult<()> {
    let config = get_config(matches)?;
    let environment = get_environment(matches, &config);
    let country = get_country(matches, &config, &environment)?;

    let depot = find_depot(matches, &country)?;
    let tour = Timer::measure_duration_with_callback(
        || country.nn_tour(depot.as_ref()),
        |duration| environment.log(format!("tour built in {}ms", duration.as_millis()).as_str()),
    )?;

    write_tour_report(matches, &create_tour_report(&country, &tour)?)?;

    if let Some(plot_path) = matches.get_one::<String>(PLOT_ARG_NAME) {
        render_country(&country, Some(tour.path.as_slice()), &config.render_options(), plot_path)?;
    }

    Ok(())
}

fn find_depot(matches: &ArgMatches, country: &Country) -> GenericResult<Arc<Location>> {
    let name = matches.get_one::<String>(DEPOT_ARG_NAME).ok_or_else(|| GenericError::from("depot is not set"))?;

    if let Some(region) = matches.get_one::<String>(REGION_ARG_NAME) {
        return country
            .get(name, region)
            .cloned()
            .ok_or_else(|| format!("cannot find location '{name}' in region '{region}'").into());
    }

    let mut candidates = country.locations().iter().filter(|location| location.name() == name);

    match (candidates.next(), candidates.next()) {
        (Some(location), None) => Ok(location.clone()),
        (Some(_), Some(_)) => Err(format!("location name '{name}' is ambiguous, specify its region").into()),
        (None, _) => Err(format!("cannot find location '{name}'").into()),
    }
}
