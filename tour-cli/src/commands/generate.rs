#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use tour_cli::extensions::import::write_csv_country;

const KIND_ARG_NAME: &str = "KIND";
const SIZE_ARG_NAME: &str = "size";
const DEPOTS_ARG_NAME: &str = "depots";
const REGIONS_ARG_NAME: &str = "regions";
const RADIUS_ARG_NAME: &str = "radius";
const SEED_ARG_NAME: &str = "seed";

const DEFAULT_RADIUS: Float = 1000.;

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Generates a synthetic country and writes it in csv format")
        .arg(
            Arg::new(KIND_ARG_NAME)
                .help("Specifies country kind")
                .required(true)
                .value_parser(["n-gon", "random"])
                .index(1),
        )
        .arg(
            Arg::new(SIZE_ARG_NAME)
                .help("Amount of settlements in generated country")
                .short('s')
                .long(SIZE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(DEPOTS_ARG_NAME)
                .help("Amount of depots in random country. Default is 1")
                .short('d')
                .long(DEPOTS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(REGIONS_ARG_NAME)
                .help("Amount of regions in random country. Default is 1")
                .short('r')
                .long(REGIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RADIUS_ARG_NAME)
                .help("Radius of the disk which contains all locations. Default is 1000")
                .long(RADIUS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Seed of random country generator. Default is 0")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate(matches: &ArgMatches) -> GenericResult<()> {
    let country = generate_country_from_args(matches).map_err(|err| format!("cannot generate country: '{err}'"))?;
    let out_buffer = create_write_buffer(get_out_file(matches)?);

    write_csv_country(out_buffer, &country)
}

fn generate_country_from_args(matches: &ArgMatches) -> GenericResult<Country> {
    let kind = matches.get_one::<String>(KIND_ARG_NAME).map(|kind| kind.as_str()).unwrap_or("n-gon");
    let size = parse_int_value::<usize>(matches, SIZE_ARG_NAME, "size")?.unwrap_or_default();
    let radius = parse_float_value::<Float>(matches, RADIUS_ARG_NAME, "radius")?.unwrap_or(DEFAULT_RADIUS);

    let country = match kind {
        "n-gon" => regular_n_gon(size, radius),
        "random" => {
            let depots = parse_int_value::<usize>(matches, DEPOTS_ARG_NAME, "depots")?.unwrap_or(1);
            let regions = parse_int_value::<usize>(matches, REGIONS_ARG_NAME, "regions")?.unwrap_or(1);
            let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?.unwrap_or_default();

            random_country(size, depots, regions, radius, seed)
        }
        _ => return Err(format!("unknown country kind: '{kind}'").into()),
    };

    country.map_err(GenericError::from)
}
