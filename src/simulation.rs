//! Driver that builds a field from settings and advances it generation by generation

use crate::config::Settings;
use crate::game_of_life::{load_pattern_from_file, CellUpdate, Field, Pattern};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

/// The outcome of one generation advance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub generation: usize,
    pub updates: Vec<CellUpdate>,
    pub living_cells: usize,
}

/// Owns a field and the settings that drive it.
///
/// Every engine call receives `wrap_edges`, the step mode and the density
/// explicitly from the settings; the field itself holds only its cells.
pub struct Simulation {
    settings: Settings,
    field: Field,
    generation: usize,
}

impl Simulation {
    /// Create a simulation from settings, randomizing the field and inserting
    /// the configured pattern at its center
    pub fn new(settings: Settings) -> Result<Self> {
        let mut field = Field::try_new(settings.field.rows, settings.field.columns)
            .context("Failed to create field")?;

        let init = &settings.initialization;
        match init.seed {
            Some(seed) => field.randomize_with(init.density, &mut StdRng::seed_from_u64(seed)),
            None => field.randomize(init.density),
        }

        if let Some(ref pattern_file) = init.pattern_file {
            let pattern = load_pattern_from_file(pattern_file)
                .context("Failed to load pattern file")?;
            Self::insert_centered(&mut field, &pattern);
        }

        Ok(Self::with_field(settings, field))
    }

    /// Create a simulation around an existing field (useful for testing)
    pub fn with_field(settings: Settings, field: Field) -> Self {
        Self {
            settings,
            field,
            generation: 0,
        }
    }

    fn insert_centered(field: &mut Field, pattern: &Pattern) -> Vec<CellUpdate> {
        let center_row = (field.rows() / 2) as isize;
        let center_column = (field.columns() / 2) as isize;
        let updates = field.set_pattern(pattern, center_row, center_column);
        info!(
            "Inserted pattern {} at ({}, {}): {} cells",
            pattern.name.as_deref().unwrap_or("<unnamed>"),
            center_row,
            center_column,
            updates.len()
        );
        updates
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Advance one generation
    pub fn step(&mut self) -> GenerationReport {
        let simulation = &self.settings.simulation;
        let updates = self
            .field
            .step(simulation.wrap_edges, simulation.step_mode.is_incremental());
        self.generation += 1;

        GenerationReport {
            generation: self.generation,
            updates,
            living_cells: self.field.living_count(),
        }
    }

    /// Advance the configured number of generations, stopping early once a
    /// generation changes nothing
    pub fn run(&mut self) -> Vec<GenerationReport> {
        let generations = self.settings.simulation.generations;
        info!(
            "Running {} generations on a {}x{} field ({} living cells)",
            generations,
            self.field.rows(),
            self.field.columns(),
            self.field.living_count()
        );

        let mut reports = Vec::with_capacity(generations);
        for _ in 0..generations {
            let report = self.step();
            let settled = report.updates.is_empty();
            reports.push(report);
            if settled {
                info!("Field settled after {} generations", self.generation);
                break;
            }
        }
        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StepMode;
    use tempfile::tempdir;

    fn quiet_settings(rows: i64, columns: i64) -> Settings {
        let mut settings = Settings::default();
        settings.field.rows = rows;
        settings.field.columns = columns;
        settings.initialization.density = 0.0;
        settings
    }

    #[test]
    fn test_new_inserts_pattern_at_center() {
        let temp_dir = tempdir().unwrap();
        let pattern_path = temp_dir.path().join("blinker.cells");
        std::fs::write(&pattern_path, "1\n1\n1\n").unwrap();

        let mut settings = quiet_settings(5, 5);
        settings.initialization.pattern_file = Some(pattern_path);
        let simulation = Simulation::new(settings).unwrap();

        assert_eq!(simulation.field().living_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_seeded_initialization_is_reproducible() {
        let mut settings = quiet_settings(16, 16);
        settings.initialization.density = 0.3;
        settings.initialization.seed = Some(99);

        let first = Simulation::new(settings.clone()).unwrap();
        let second = Simulation::new(settings).unwrap();
        assert_eq!(first.field(), second.field());
    }

    #[test]
    fn test_negative_dimensions_fail() {
        assert!(Simulation::new(quiet_settings(-1, 4)).is_err());
    }

    #[test]
    fn test_run_stops_when_settled() {
        let mut field = Field::new(6, 6);
        field.set_pattern(&[(0, 0), (0, 1), (1, 0), (1, 1)], 2, 2);

        let mut settings = quiet_settings(6, 6);
        settings.simulation.generations = 10;
        let mut simulation = Simulation::with_field(settings, field);

        let reports = simulation.run();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].updates.is_empty());
        assert_eq!(reports[0].living_cells, 4);
        assert_eq!(simulation.generation(), 1);
    }

    #[test]
    fn test_step_uses_configured_mode() {
        let mut field = Field::new(5, 5);
        field.set_pattern(&[(0, -1), (0, 0), (0, 1)], 2, 2);

        let mut settings = quiet_settings(5, 5);
        settings.simulation.wrap_edges = false;
        let mut snapshot = Simulation::with_field(settings.clone(), field.clone());

        settings.simulation.step_mode = StepMode::Incremental;
        let mut incremental = Simulation::with_field(settings, field);

        assert_eq!(snapshot.step().updates.len(), 4);
        incremental.step();
        assert_ne!(snapshot.field(), incremental.field());
    }
}
