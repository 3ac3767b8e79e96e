use clap::{Parser, Subcommand, ValueEnum};
use glucose_core::config::CatalogConfig;
use glucose_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "glucose-sim")]
#[command(about = "Blood glucose day simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log progress to stderr (-v summaries, -vv per-action detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a day of food and exercise (default)
    Simulate {
        /// Day plan TOML file (built-in sample day if omitted)
        #[arg(long)]
        plan: Option<PathBuf>,

        /// Time bucket width in minutes
        #[arg(long)]
        granularity: Option<u32>,

        /// Glucose level counted towards glycation
        #[arg(long)]
        threshold: Option<f64>,

        /// Food catalog CSV
        #[arg(long)]
        food_db: Option<PathBuf>,

        /// Exercise catalog CSV
        #[arg(long)]
        exercise_db: Option<PathBuf>,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also write the glucose series to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// List catalog items
    Catalog {
        #[arg(long, value_enum, default_value_t = KindArg::Food)]
        kind: KindArg,

        /// Food catalog CSV
        #[arg(long)]
        food_db: Option<PathBuf>,

        /// Exercise catalog CSV
        #[arg(long)]
        exercise_db: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Food,
    Exercise,
}

impl From<KindArg> for ItemKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Food => ItemKind::Food,
            KindArg::Exercise => ItemKind::Exercise,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    glucose_core::logging::init_cli(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Simulate {
            plan,
            granularity,
            threshold,
            food_db,
            exercise_db,
            json,
            csv,
        }) => {
            let mut settings = SimulationSettings::from(config.simulation.clone());
            if let Some(granularity) = granularity {
                settings.granularity_minutes = granularity;
            }
            if let Some(threshold) = threshold {
                settings.glycation_threshold = threshold;
            }
            settings.validate()?;
            let catalog_config = catalog_overrides(&config, food_db, exercise_db);
            cmd_simulate(plan, &settings, &catalog_config, json, csv)
        }
        Some(Commands::Catalog {
            kind,
            food_db,
            exercise_db,
        }) => {
            let catalog_config = catalog_overrides(&config, food_db, exercise_db);
            cmd_catalog(kind.into(), &catalog_config)
        }
        None => {
            // Default to "simulate" with the sample day
            let settings = SimulationSettings::from(config.simulation.clone());
            cmd_simulate(None, &settings, &config.catalog, false, None)
        }
    }
}

fn catalog_overrides(
    config: &Config,
    food_db: Option<PathBuf>,
    exercise_db: Option<PathBuf>,
) -> CatalogConfig {
    let mut catalog = config.catalog.clone();
    if food_db.is_some() {
        catalog.food_path = food_db;
    }
    if exercise_db.is_some() {
        catalog.exercise_path = exercise_db;
    }
    catalog
}

fn cmd_simulate(
    plan_path: Option<PathBuf>,
    settings: &SimulationSettings,
    catalog_config: &CatalogConfig,
    json: bool,
    csv_path: Option<PathBuf>,
) -> Result<()> {
    let catalog = Catalog::from_config(catalog_config)?;

    let plan = match plan_path {
        Some(path) => DayPlan::load(&path)?,
        None => {
            tracing::info!("No plan given, simulating the sample day");
            DayPlan::sample()
        }
    };

    let report = simulate_day(&catalog, &plan.actions, settings)?;

    if let Some(path) = csv_path {
        glucose_core::export::write_samples_csv(&report, &path)?;
    }

    if json {
        println!("{}", glucose_core::export::to_json(&report)?);
    } else {
        display_report(&report);
    }

    Ok(())
}

fn cmd_catalog(kind: ItemKind, catalog_config: &CatalogConfig) -> Result<()> {
    let catalog = Catalog::from_config(catalog_config)?;

    for item in catalog.items(kind) {
        println!(
            "{:>4}  {:>6.1}  {:>4.1}h  {}",
            item.id, item.total_impact, item.duration_hours, item.name
        );
    }

    Ok(())
}

fn display_report(report: &DayReport) {
    println!("\n==== blood sugar ====");
    for sample in &report.samples {
        println!(
            "index={}, time={}, glucose={:.2}",
            sample.index, sample.time, sample.glucose
        );
    }

    println!("\n==== events ====");
    for marker in &report.markers {
        println!(
            "index={}, time={}, status={:<5}, gradient={:.3}, name={}",
            marker.index,
            marker.time,
            marker.status.label(),
            marker.gradient,
            marker.name
        );
    }

    println!("\n==== glycation ====");
    println!(
        "\n{} minutes in high blood sugar (>= {})",
        report.glycation_minutes, report.glycation_threshold
    );
}
