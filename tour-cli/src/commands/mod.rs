use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod best_depot;
pub mod generate;
pub mod plot;
pub mod tour;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;
use std::sync::Arc;
use tour_cli::extensions::config::{Config, read_config};
use tour_cli::extensions::import::import_country;
use tour_cli::extensions::report::*;
use tour_core::prelude::*;

const CSV_ARG_NAME: &str = "CSV";
const CONFIG_ARG_NAME: &str = "config";
const FORMAT_ARG_NAME: &str = "format";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const PLOT_ARG_NAME: &str = "plot";
const LOG_ARG_NAME: &str = "log";

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> GenericResult<File> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'").into())
}

fn create_file(path: &str, description: &str) -> GenericResult<File> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'").into())
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> GenericResult<Option<T>> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'").into())
                .map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> GenericResult<Option<T>> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'").into())
                .map(Some)
        })
        .unwrap_or(Ok(None))
}

/// Adds arguments shared by commands which load a country from csv.
fn add_country_args(command: Command) -> Command {
    command
        .arg(Arg::new(CSV_ARG_NAME).help("Sets csv file with country locations").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to the json configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether progress should be logged to stdout")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

/// Adds arguments shared by commands which report results.
fn add_report_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies report format")
                .short('f')
                .long(FORMAT_ARG_NAME)
                .required(false)
                .default_value("json")
                .value_parser(["json", "text"]),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(PLOT_ARG_NAME)
                .help("Specifies path to the svg file for rendering the tour")
                .short('p')
                .long(PLOT_ARG_NAME)
                .required(false),
        )
}

fn get_config(matches: &ArgMatches) -> GenericResult<Config> {
    matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .unwrap_or_else(|| Ok(Config::default()))
}

fn get_environment(matches: &ArgMatches, config: &Config) -> Environment {
    let is_logging = matches.get_flag(LOG_ARG_NAME);
    let logger: InfoLogger = if is_logging { Arc::new(|msg: &str| println!("{msg}")) } else { Arc::new(|_: &str| {}) };

    config.create_environment(logger)
}

fn get_country(matches: &ArgMatches, config: &Config, environment: &Environment) -> GenericResult<Country> {
    let path = matches.get_one::<String>(CSV_ARG_NAME).ok_or_else(|| GenericError::from("csv file is not set"))?;
    let file = open_file(path, "country")?;

    import_country("csv", BufReader::new(file), &config.import_options(), environment)
}

fn write_tour_report(matches: &ArgMatches, report: &TourReport) -> GenericResult<()> {
    let out_buffer = create_write_buffer(get_out_file(matches)?);

    match get_format(matches) {
        "text" => write_tour_text(out_buffer, report),
        _ => write_json(out_buffer, report),
    }
}

fn write_depot_report(matches: &ArgMatches, report: &DepotReport) -> GenericResult<()> {
    let out_buffer = create_write_buffer(get_out_file(matches)?);

    match get_format(matches) {
        "text" => write_depot_text(out_buffer, report),
        _ => write_json(out_buffer, report),
    }
}

fn get_out_file(matches: &ArgMatches) -> GenericResult<Option<File>> {
    matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()
}

fn get_format(matches: &ArgMatches) -> &str {
    matches.get_one::<String>(FORMAT_ARG_NAME).map(|format| format.as_str()).unwrap_or("json")
}
