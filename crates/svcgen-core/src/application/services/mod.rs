//! Application services - orchestrate use cases.

pub mod generate_service;
pub mod unit_builder;

pub use generate_service::{
    FileOutcome, GenerateConfig, GenerateService, GenerateSummary, WriteStatus,
};
pub use unit_builder::UnitBuilder;
