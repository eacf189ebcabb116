use std::process;

use clap::Parser;
use colored::Colorize;

use jipdate::app;
use jipdate::cli::Args;
use jipdate::logging;

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(err) = app::run(args) {
        eprintln!("{} {}", "x".red(), err);
        process::exit(1);
    }
}
