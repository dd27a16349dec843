use clap::{Parser, Subcommand, ValueEnum};
use opengolfcoach::{calculate_derived_values, calculate_shot, ShotInput};
use std::error::Error;

#[derive(Parser)]
#[command(name = "golfcoach")]
#[command(version)]
#[command(about = "Golf shot derived-value calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate derived values from launch parameters
    Shot {
        /// Ball speed (m/s)
        #[arg(short = 'v', long)]
        ball_speed: f64,

        /// Vertical launch angle (degrees)
        #[arg(short = 'a', long)]
        launch_angle: f64,

        /// Horizontal launch angle (degrees, positive = right)
        #[arg(long)]
        horizontal_angle: Option<f64>,

        /// Total spin (rpm)
        #[arg(short = 's', long)]
        total_spin: Option<f64>,

        /// Spin axis tilt (degrees)
        #[arg(long)]
        spin_axis: Option<f64>,

        /// Backspin component (rpm)
        #[arg(long)]
        backspin: Option<f64>,

        /// Sidespin component (rpm, positive = right)
        #[arg(long)]
        sidespin: Option<f64>,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
    /// Calculate derived values from a raw JSON payload
    Json {
        /// JSON object with launch-monitor field names
        payload: String,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Shot {
            ball_speed,
            launch_angle,
            horizontal_angle,
            total_spin,
            spin_axis,
            backspin,
            sidespin,
            output,
        } => {
            let input = ShotInput {
                ball_speed_meters_per_second: Some(ball_speed),
                vertical_launch_angle_degrees: Some(launch_angle),
                horizontal_launch_angle_degrees: horizontal_angle,
                total_spin_rpm: total_spin,
                spin_axis_degrees: spin_axis,
                backspin_rpm: backspin,
                sidespin_rpm: sidespin,
            };
            let result = calculate_shot(&input)?;
            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                OutputFormat::Table => print_table(&result),
            }
        }
        Commands::Json { payload } => {
            println!("{}", calculate_derived_values(&payload)?);
        }
    }

    Ok(())
}

fn print_table(result: &opengolfcoach::ShotResult) {
    let d = &result.open_golf_coach;
    let us = &d.us_customary_units;

    println!("Golf Shot Derived Values");
    println!("========================");
    println!(
        "  Carry distance:    {:8.1} m  ({:.1} yd)",
        d.carry_distance_meters, us.carry_distance_yards
    );
    println!(
        "  Total distance:    {:8.1} m  ({:.1} yd)",
        d.total_distance_meters, us.total_distance_yards
    );
    println!(
        "  Offline:           {:8.1} m  ({:.1} yd)",
        d.offline_distance_meters, us.offline_distance_yards
    );
    println!("  Peak height:       {:8.1} m", d.peak_height_meters);
    println!("  Flight time:       {:8.2} s", d.flight_time_seconds);
    println!("  Descent angle:     {:8.1} deg", d.descent_angle_degrees);
    println!();
    println!(
        "  Total spin:        {:8.0} rpm   Axis: {:.1} deg",
        d.total_spin_rpm, d.spin_axis_degrees
    );
    println!(
        "  Backspin:          {:8.0} rpm   Sidespin: {:.0} rpm",
        d.backspin_rpm, d.sidespin_rpm
    );
    println!();
    println!(
        "  Club speed (est):  {:8.1} m/s ({:.1} mph)",
        d.club_speed_meters_per_second, us.club_speed_mph
    );
    println!("  Smash factor:      {:8.2}", d.smash_factor);
    println!();
    println!("  Shot: {} [{}]", d.shot_name, d.shot_rank);
}
