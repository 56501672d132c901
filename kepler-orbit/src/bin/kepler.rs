use clap::{Parser, Subcommand, ValueEnum};
use kepler_orbit::{AnomalyMode, OrbitPositionSolver, OrbitState, OrbitalElements};
use kepler_time::{CalendarDate, JulianDate, VERNAL_EQUINOX_2010};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "kepler")]
#[command(about = "Julian Days, sidereal time and Keplerian orbit positions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a calendar date to a Julian Day
    Julian {
        /// Date as YYYY-MM-DD[THH:MM[:SS]]
        date: String,
        /// Reject out-of-range fields instead of rolling them over
        #[arg(long)]
        strict: bool,
    },
    /// Convert a Julian Day to a calendar date
    Calendar {
        #[arg(allow_negative_numbers = true)]
        jd: f64,
    },
    /// Mean sidereal time at Greenwich for a date
    StarTime {
        /// Date as YYYY-MM-DD[THH:MM[:SS]]
        date: String,
        /// Degrees added after normalization, e.g. east longitude
        #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
        correction: f64,
    },
    /// Heliocentric position after a number of days
    Position {
        /// Days since the element epoch
        #[arg(allow_negative_numbers = true)]
        days: f64,
        /// JSON file with orbital elements; missing fields use Mars defaults
        #[arg(long)]
        elements: Option<PathBuf>,
        /// Solve Kepler's equation to convergence instead of a single step
        #[arg(long)]
        converged: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Print the 2010 vernal equinox reference epoch
    Equinox,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Julian { date, strict } => {
            let date = parse_date(&date)?;
            let jd = if strict {
                JulianDate::try_from_calendar(&date)?
            } else {
                JulianDate::from_calendar(&date)
            };
            println!("{}", jd.julian_day());
        }
        Commands::Calendar { jd } => {
            let jd = JulianDate::from_julian_day(jd);
            println!("{}", jd);
            println!("{}", jd.to_calendar());
        }
        Commands::StarTime { date, correction } => {
            let jd = JulianDate::from_calendar(&parse_date(&date)?);
            let st = jd.sidereal_time();
            println!(
                "{:.6}° ({}) corrected={:.6}°",
                st.degrees(),
                st,
                jd.star_time_corrected(correction)
            );
        }
        Commands::Position {
            days,
            elements,
            converged,
            format,
        } => {
            let elements = match elements {
                Some(path) => {
                    let elements = OrbitalElements::from_json_file(&path)?;
                    elements.validate()?;
                    elements
                }
                None => OrbitalElements::default(),
            };
            let mode = if converged {
                AnomalyMode::converged()
            } else {
                AnomalyMode::SinglePass
            };
            let solver = OrbitPositionSolver::new(elements).with_mode(mode);
            let state = solver.try_state_at_time(days)?;

            match format {
                OutputFormat::Table => print_table(&state, days),
                OutputFormat::Json => print_json(&state, mode, days)?,
            }
        }
        Commands::Equinox => {
            let jd = *VERNAL_EQUINOX_2010;
            println!("{} JD {}", jd, jd.julian_day());
        }
    }

    Ok(())
}

fn parse_date(s: &str) -> anyhow::Result<CalendarDate> {
    s.parse()
        .map_err(|e| anyhow::anyhow!("Cannot parse date '{}': {}", s, e))
}

fn print_table(state: &OrbitState, days: f64) {
    println!("days          {:>18.6}", days);
    println!("mean anomaly  {:>18.6}°", state.mean_anomaly);
    println!("true anomaly  {:>18.6}°", state.true_anomaly);
    println!("radius        {:>18.6}", state.radius);
    println!("position      {}", state.position);
}

#[derive(serde::Serialize)]
struct JsonState {
    days: f64,
    mode: AnomalyMode,
    mean_anomaly: f64,
    true_anomaly: f64,
    radius: f64,
    position: kepler_core::Vector3,
}

fn print_json(state: &OrbitState, mode: AnomalyMode, days: f64) -> anyhow::Result<()> {
    let json = JsonState {
        days,
        mode,
        mean_anomaly: state.mean_anomaly,
        true_anomaly: state.true_anomaly,
        radius: state.radius,
        position: state.position,
    };
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
