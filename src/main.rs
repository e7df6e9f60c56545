use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use itertools::Itertools;
use log::{info, warn};
use rand::Rng;

use pitwall::{
    errors::PitwallError,
    report,
    session::{LAP_COUNT, Session, SessionStore, VehicleCategory},
    stats,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Driver name; prompted for when omitted
    #[arg(short, long)]
    driver: Option<String>,

    /// Track name; prompted for when omitted
    #[arg(short, long)]
    track: Option<String>,

    /// Vehicle menu choice (1 = GT3, 2 = Formula, 3 = Rally); prompted for when omitted
    #[arg(short, long)]
    vehicle: Option<u32>,

    /// Comma-separated lap times in seconds; synthesized from the vehicle
    /// baseline when omitted
    #[arg(short, long, value_delimiter = ',')]
    laps: Option<Vec<f64>>,

    /// Report file path
    #[arg(short, long, default_value = "report.txt")]
    output: PathBuf,

    /// Optional JSON-lines dump of the recorded sessions
    #[arg(long)]
    session_log: Option<PathBuf>,
}

fn prompt(question: &str) -> Result<String, PitwallError> {
    print!("{question}");
    io::stdout()
        .flush()
        .map_err(|e| PitwallError::PromptIOError { source: e })?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|e| PitwallError::PromptIOError { source: e })?;
    Ok(line.trim().to_string())
}

fn prompt_vehicle() -> Result<VehicleCategory, PitwallError> {
    let menu = VehicleCategory::ALL
        .iter()
        .enumerate()
        .map(|(i, vehicle)| format!("{}. {}", i + 1, vehicle))
        .join("\n");
    println!("\nChoose a vehicle:\n{menu}");
    let answer = prompt("Choice: ")?;
    let choice = answer
        .parse::<u32>()
        .map_err(|_| PitwallError::InvalidVehicleChoice {
            choice: answer.clone(),
        })?;
    VehicleCategory::from_menu_choice(choice)
}

fn parse_laps(laps: Vec<f64>) -> Result<[f64; LAP_COUNT], PitwallError> {
    <[f64; LAP_COUNT]>::try_from(laps).map_err(|laps| PitwallError::InvalidLapTimes {
        reason: format!("expected {LAP_COUNT} lap times, got {}", laps.len()),
    })
}

// Same spread as the trackside simulator: up to 10 seconds over the baseline.
fn synthesize_laps(base_time_s: f64) -> [f64; LAP_COUNT] {
    let mut rng = rand::thread_rng();
    std::array::from_fn(|_| base_time_s + rng.gen_range(0.0..10.0))
}

fn run(args: Args) -> Result<(), PitwallError> {
    println!("========================================");
    println!("     Pitwall Practice Session Recorder");
    println!("========================================\n");

    let driver_name = match args.driver {
        Some(driver) => driver,
        None => prompt("Enter driver name: ")?,
    };
    let track_name = match args.track {
        Some(track) => track,
        None => prompt("Enter track name: ")?,
    };
    let vehicle = match args.vehicle {
        Some(choice) => VehicleCategory::from_menu_choice(choice)?,
        None => prompt_vehicle()?,
    };
    let lap_times_s = match args.laps {
        Some(laps) => parse_laps(laps)?,
        None => synthesize_laps(stats::base_lap_time(vehicle)),
    };

    let session = Session {
        driver_name,
        track_name,
        vehicle,
        lap_times_s,
    };

    let mut store = SessionStore::new();
    if store.add(session.clone()) {
        info!(
            "recorded {} session for {} at {}",
            session.vehicle, session.driver_name, session.track_name
        );
    } else {
        warn!("session store is full, session not recorded");
    }

    println!("\nLap Times:");
    for (lap_no, lap_time_s) in session.lap_times_s.iter().enumerate() {
        println!("Lap {}: {:.2} seconds", lap_no + 1, lap_time_s);
    }
    println!(
        "\nAverage Lap Time: {:.2} seconds",
        stats::average_lap(&session)
    );
    println!("Overall Average: {:.2} seconds", stats::overall_average(&store));

    report::write_report(&args.output, &store)?;
    info!("report written to {:?}", args.output);
    if let Some(log_path) = &args.session_log {
        report::write_session_log(log_path, &store)?;
        info!("session log written to {:?}", log_path);
    }

    println!("\nReport saved to {}", args.output.display());
    Ok(())
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let args = Args::parse();
    run(args).expect("Error while recording practice session");
}
