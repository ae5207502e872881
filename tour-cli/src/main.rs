//! A command line interface to build nearest-neighbour delivery tours.

#![forbid(unsafe_code)]

mod commands;

use clap::Command;
use commands::best_depot::{get_best_depot_app, run_best_depot};
use commands::generate::{get_generate_app, run_generate};
use commands::plot::{get_plot_app, run_plot};
use commands::tour::{get_tour_app, run_tour};
use std::process;

fn get_app() -> Command {
    Command::new("Delivery Tour Planner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to build nearest-neighbour delivery tours")
        .subcommand(get_tour_app())
        .subcommand(get_best_depot_app())
        .subcommand(get_plot_app())
        .subcommand(get_generate_app())
}

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("tour", tour_matches)) => run_tour(tour_matches),
        Some(("best-depot", best_depot_matches)) => run_best_depot(best_depot_matches),
        Some(("plot", plot_matches)) => run_plot(plot_matches),
        Some(("generate", generate_matches)) => run_generate(generate_matches),
        _ => {
            eprintln!("no subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
