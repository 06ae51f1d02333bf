//! # Crane3D Simulation Harness
//!
//! Drives the crane model with constant forces and prints the resulting
//! state.
//!
//! # Usage
//!
//! ```bash
//! # One second of the default linear model at rest
//! crane3d_sim
//!
//! # Push the rail for 5 s with the complete non-linear model
//! crane3d_sim --model non_linear_complete --frail 20 --duration 5
//!
//! # Parameters from a file, state as JSON lines every 10 frames
//! crane3d_sim --config crane.toml --json-state --print-every 10
//! ```

use clap::Parser;
use crane3d_common::config::{ConfigLoader, SimConfig};
use crane3d_common::crane::config::ModelType;
use crane3d_common::crane::types::{ControlForces, ModelState};
use crane3d_model::Model;
use std::path::PathBuf;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

/// Crane3D - 3-axis overhead crane dynamics simulator
#[derive(Parser, Debug)]
#[command(name = "crane3d_sim")]
#[command(version)]
#[command(about = "Simulate a 3-axis overhead crane under constant control forces")]
#[command(long_about = None)]
struct Args {
    /// Path to a TOML configuration file ([shared], [model], [run]).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Dynamics variant (linear, linear2, non_linear_constant_line,
    /// non_linear_complete, non_linear_original).
    #[arg(short, long)]
    model: Option<ModelType>,

    /// Force driving the rail [N].
    #[arg(long, allow_hyphen_values = true)]
    frail: Option<f64>,

    /// Force driving the cart [N].
    #[arg(long, allow_hyphen_values = true)]
    fcart: Option<f64>,

    /// Force winding the lift-line [N].
    #[arg(long, allow_hyphen_values = true)]
    fwind: Option<f64>,

    /// Simulated time [s].
    #[arg(short, long)]
    duration: Option<f64>,

    /// Fixed integration step [s].
    #[arg(long)]
    fixed_time: Option<f64>,

    /// Caller frame period [s].
    #[arg(long)]
    frame_time: Option<f64>,

    /// Integrate each frame in one step instead of fixed ticks.
    #[arg(long)]
    variable_step: bool,

    /// Print the state every N frames (0 = final state only).
    #[arg(long)]
    print_every: Option<u32>,

    /// Print states as JSON lines.
    #[arg(long)]
    json_state: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("Simulation failed: {}", e);
        eprintln!("crane3d_sim: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    apply_overrides(&mut config, &args);

    setup_tracing(&args, &config);
    info!(
        "{} v{} starting ({})",
        config.shared.service_name,
        env!("CARGO_PKG_VERSION"),
        config.model.model_type
    );

    config.validate()?;

    let run = &config.run;
    let frames = run.frame_count();
    let mut model = Model::with_config(config.model.clone());

    info!(
        "Simulating {} frames of {:.4}s ({}), forces: rail={} cart={} wind={}",
        frames,
        run.frame_time,
        if run.variable_step {
            "variable step".to_string()
        } else {
            format!("fixed step {}s", run.fixed_time)
        },
        run.forces.rail,
        run.forces.cart,
        run.forces.wind
    );

    let mut state = model.state();
    for frame in 1..=frames {
        state = if run.variable_step {
            model.update(run.frame_time, run.forces)
        } else {
            model.update_fixed(run.fixed_time, run.frame_time, run.forces)
        };

        if run.print_every > 0 && frame % u64::from(run.print_every) == 0 && frame != frames {
            print_state(frame, &state, args.json_state)?;
        }
    }
    print_state(frames, &state, args.json_state)?;

    info!(
        "Simulation complete: {} fixed ticks, {:.6}s banked",
        model.tick_count(),
        model.simulation_time()
    );
    Ok(())
}

/// Command-line values win over the config file.
fn apply_overrides(config: &mut SimConfig, args: &Args) {
    if let Some(model_type) = args.model {
        config.model.model_type = model_type;
    }

    let forces = &mut config.run.forces;
    *forces = ControlForces::new(
        args.frail.unwrap_or(forces.rail),
        args.fcart.unwrap_or(forces.cart),
        args.fwind.unwrap_or(forces.wind),
    );

    if let Some(duration) = args.duration {
        config.run.duration = duration;
    }
    if let Some(fixed_time) = args.fixed_time {
        config.run.fixed_time = fixed_time;
    }
    if let Some(frame_time) = args.frame_time {
        config.run.frame_time = frame_time;
    }
    if let Some(print_every) = args.print_every {
        config.run.print_every = print_every;
    }
    config.run.variable_step |= args.variable_step;
}

fn print_state(frame: u64, state: &ModelState, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string(state)?);
    } else {
        println!("-- frame {frame} --");
        println!("{state}");
    }
    Ok(())
}

/// Setup tracing subscriber from CLI flags and the configured log level.
fn setup_tracing(args: &Args, config: &SimConfig) {
    let filter = if args.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.shared.log_level.as_directive()))
    };

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
