//! Command line driver for the Game of Life field engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_field::{
    config::{CliOverrides, OutputFormat, Settings, StepMode},
    game_of_life::load_field_from_file,
    utils::{ColorOutput, FieldFormatter},
    Simulation,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "life_field")]
#[command(about = "Game of Life field simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation for a number of generations
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of rows (overrides config)
        #[arg(short, long, allow_negative_numbers = true)]
        rows: Option<i64>,

        /// Number of columns (overrides config)
        #[arg(short = 'C', long, allow_negative_numbers = true)]
        columns: Option<i64>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Initial density of living cells (overrides config)
        #[arg(short, long)]
        density: Option<f64>,

        /// Seed for the random initialization (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Pattern file inserted at the field's center (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Treat the field's edges as walls instead of wrapping around
        #[arg(long)]
        no_wrap: bool,

        /// Apply updates immediately so they influence the rest of the same step
        #[arg(long)]
        incremental: bool,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Show the update batch of every generation
        #[arg(long)]
        show_generations: bool,
    },

    /// Create a default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Flip cells of a field file and print the resulting updates
    Flip {
        /// Field file with rows of '0' and '1'
        #[arg(short, long)]
        field: PathBuf,

        /// Cells to flip, as row,column
        #[arg(required = true, value_parser = parse_position)]
        cells: Vec<(isize, isize)>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            rows,
            columns,
            generations,
            density,
            seed,
            pattern,
            no_wrap,
            incremental,
            format,
            show_generations,
        } => {
            let overrides = CliOverrides {
                rows,
                columns,
                generations,
                wrap_edges: no_wrap.then_some(false),
                step_mode: incremental.then_some(StepMode::Incremental),
                density,
                seed,
                pattern_file: pattern,
                format,
            };
            run_command(config, overrides, show_generations)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Flip { field, cells } => flip_command(field, cells),
    }
}

fn parse_position(value: &str) -> Result<(isize, isize), String> {
    let (row, column) = value
        .split_once(',')
        .ok_or_else(|| format!("expected row,column but got '{}'", value))?;
    let row = row.trim().parse::<isize>().map_err(|e| format!("invalid row '{}': {}", row, e))?;
    let column = column
        .trim()
        .parse::<isize>()
        .map_err(|e| format!("invalid column '{}': {}", column, e))?;
    Ok((row, column))
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        warn!("Config file {} not found, using defaults", config_path.display());
        Ok(Settings::default())
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides, show_generations: bool) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings.output.show_generations |= show_generations;

    settings.validate().context("Configuration validation failed")?;
    info!(
        "Field {}x{}, {} generations, wrap_edges: {}, step_mode: {:?}",
        settings.field.rows,
        settings.field.columns,
        settings.simulation.generations,
        settings.simulation.wrap_edges,
        settings.simulation.step_mode
    );

    let start_time = Instant::now();
    let mut simulation = Simulation::new(settings.clone()).context("Failed to create simulation")?;
    let reports = simulation.run();
    let total_time = start_time.elapsed();

    let output = FieldFormatter::format_run(
        simulation.field(),
        &reports,
        settings.output.format,
        settings.output.show_generations,
    )
    .context("Failed to format simulation output")?;
    println!("{}", output);

    if settings.output.format != OutputFormat::Json {
        println!(
            "{}",
            ColorOutput::success(&format!(
                "Ran {} generation(s) in {:.3}s, {} living cells",
                reports.len(),
                total_time.as_secs_f64(),
                simulation.field().living_count()
            ))
        );
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    println!("{}", ColorOutput::success("✅ Setup complete!"));
    Ok(())
}

fn flip_command(field_path: PathBuf, cells: Vec<(isize, isize)>) -> Result<()> {
    let mut field = load_field_from_file(&field_path)
        .with_context(|| format!("Failed to load field from {}", field_path.display()))?;

    for (row, column) in cells {
        match field.flip_cell(row, column) {
            Some(update) => println!("{}", update),
            None => println!(
                "{}",
                ColorOutput::warning(&format!("({}, {}) is outside the field", row, column))
            ),
        }
    }

    println!("\n{}", FieldFormatter::format_field_compact(&field));
    Ok(())
}
