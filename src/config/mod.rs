//! Configuration management for the simulation driver

pub mod settings;

pub use settings::{
    CliOverrides, FieldConfig, InitializationConfig, OutputConfig, OutputFormat, Settings,
    SimulationConfig, StepMode,
};
