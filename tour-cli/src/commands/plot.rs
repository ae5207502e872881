#[cfg(test)]
#[path = "../../tests/unit/commands/plot_test.rs"]
mod plot_test;

use super::*;
use tour_cli::extensions::render::render_country;

pub fn get_plot_app() -> Command {
    let command = Command::new("plot").about("Renders country locations as an svg image").arg(
        Arg::new(OUT_RESULT_ARG_NAME)
            .help("Specifies path to the svg file")
            .short('o')
            .long(OUT_RESULT_ARG_NAME)
            .required(true),
    );

    add_country_args(command)
}

pub fn run_plot(matches: &ArgMatches) -> GenericResult<()> {
    let config = get_config(matches)?;
    let environment = get_environment(matches, &config);
    let country = get_country(matches, &config, &environment)?;

    let out_path =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).ok_or_else(|| GenericError::from("out result is not set"))?;

    render_country(&country, None, &config.render_options(), out_path)
}
