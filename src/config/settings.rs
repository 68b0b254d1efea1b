//! Configuration settings for the simulation driver

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub field: FieldConfig,
    pub simulation: SimulationConfig,
    pub initialization: InitializationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub rows: i64,
    pub columns: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub generations: usize,
    pub wrap_edges: bool,
    pub step_mode: StepMode,
}

/// How a generation is evaluated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMode {
    /// Standard Life: every cell sees the previous generation
    #[default]
    Snapshot,
    /// Row-major in-place updates visible to later cells of the same step
    Incremental,
}

impl StepMode {
    pub fn is_incremental(self) -> bool {
        self == StepMode::Incremental
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializationConfig {
    pub density: f64,
    pub seed: Option<u64>,
    pub pattern_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_generations: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Visual,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field: FieldConfig {
                rows: 32,
                columns: 64,
            },
            simulation: SimulationConfig {
                generations: 10,
                wrap_edges: true,
                step_mode: StepMode::Snapshot,
            },
            initialization: InitializationConfig {
                density: 0.2,
                seed: None,
                pattern_file: None,
            },
            output: OutputConfig {
                format: OutputFormat::Visual,
                show_generations: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.field.rows < 0 || self.field.columns < 0 {
            anyhow::bail!(
                "Field dimensions must not be negative, got {}x{}",
                self.field.rows,
                self.field.columns
            );
        }

        if !(0.0..=1.0).contains(&self.initialization.density) {
            anyhow::bail!(
                "Density must be between 0 and 1, got {}",
                self.initialization.density
            );
        }

        if let Some(ref pattern_file) = self.initialization.pattern_file {
            if !pattern_file.exists() {
                anyhow::bail!("Pattern file does not exist: {}", pattern_file.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.field.rows = rows;
        }
        if let Some(columns) = cli_overrides.columns {
            self.field.columns = columns;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(wrap_edges) = cli_overrides.wrap_edges {
            self.simulation.wrap_edges = wrap_edges;
        }
        if let Some(step_mode) = cli_overrides.step_mode {
            self.simulation.step_mode = step_mode;
        }
        if let Some(density) = cli_overrides.density {
            self.initialization.density = density;
        }
        if let Some(seed) = cli_overrides.seed {
            self.initialization.seed = Some(seed);
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.initialization.pattern_file = Some(pattern_file.clone());
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<i64>,
    pub columns: Option<i64>,
    pub generations: Option<usize>,
    pub wrap_edges: Option<bool>,
    pub step_mode: Option<StepMode>,
    pub density: Option<f64>,
    pub seed: Option<u64>,
    pub pattern_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}
