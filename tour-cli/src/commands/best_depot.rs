#[cfg(test)]
#[path = "../../tests/unit/commands/best_depot_test.rs"]
mod best_depot_test;

use super::*;
use tour_cli::extensions::render::render_country;

pub fn get_best_depot_app() -> Command {
    let command = Command::new("best-depot")
        .about("Builds a nearest-neighbour tour from every depot and selects the fastest one");

    add_report_args(add_country_args(command))
}

pub fn run_best_depot(matches: &ArgMatches) -> GenericResult<()> {
    let config = get_config(matches)?;
    let environment = get_environment(matches, &config);
    let country = get_country(matches, &config, &environment)?;

    let sites = country.depot_tours_with(&environment);
    let best = DepotSite::select_best(sites.as_slice());

    match best {
        Some(site) => environment.log(format!("best depot site: {}", site.depot).as_str()),
        None => environment.log("no depots in the country"),
    }

    write_depot_report(matches, &create_depot_report(&country, sites.as_slice(), best)?)?;

    if let Some(plot_path) = matches.get_one::<String>(PLOT_ARG_NAME) {
        let path = best.map(|site| site.tour.path.as_slice());
        render_country(&country, path, &config.render_options(), plot_path)?;
    }

    Ok(())
}
