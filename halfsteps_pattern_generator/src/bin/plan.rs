/// Plan a walk from a toml request and print the resulting trajectories
/// halfsteps_plan data/straight_walk.toml --format csv > walk.csv
use std::io::Write;

use anyhow::Context;
use clap::{arg, command};
use halfsteps_pattern_generator::{export, LinearHalfStepsSolver, PlanRequest};

fn main() -> Result<(), anyhow::Error> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let matches = command!()
        .arg(arg!(<REQUEST> "toml file with initial positions and footprints"))
        .arg(
            arg!(
                -f --format <FORMAT> "output format"
            )
            .value_parser(["csv", "json"])
            .default_value("csv")
            .required(false),
        )
        .arg(
            arg!(
                -o --output <OUTPUT> "write to this file instead of stdout"
            )
            .required(false),
        )
        .get_matches();

    let request_file = matches.get_one::<String>("REQUEST").unwrap();
    let format = matches.get_one::<String>("format").unwrap();

    let request = PlanRequest::load(request_file)?;
    log::info!(
        "planning {} footprints from {request_file}",
        request.footprints.len()
    );

    let mut pg = request.to_pattern_generator(LinearHalfStepsSolver);
    pg.compute_trajectories()
        .with_context(|| format!("couldn't plan {request_file}"))?;

    let rows = export::trajectory_rows(pg.trajectories());
    let mut writer: Box<dyn Write> = match matches.get_one::<String>("output") {
        Some(path) => Box::new(std::io::BufWriter::new(
            std::fs::File::create(path).with_context(|| format!("couldn't create {path}"))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };
    match format.as_str() {
        "json" => export::write_json(&mut writer, &rows)?,
        _ => export::write_csv(&mut writer, &rows)?,
    }
    writer.flush()?;

    Ok(())
}
