//! # Studyroom Core Library
//!
//! This library provides the core business logic for Studyroom, a personal
//! study-planning assistant. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any outer
//! surface (web API, GUI) being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Analysis**: Aggregates raw study session records into a
//!   [`TaskAnalysis`] summary (category time totals, top tasks, counts)
//! - **Diagnosis**: A rule-based engine that converts a [`TaskAnalysis`] plus
//!   an exam target into Korean-language feedback about study habits, time
//!   balance, and goal achievability
//! - **Config**: TOML-based configuration for the exam requirement table and
//!   the study category label
//!
//! ## Key Components
//!
//! - [`DiagnosisEngine`]: Composes the balance, habit, and achievability
//!   scorers into a full [`Diagnosis`] report
//! - [`TaskAnalyzer`]: Session log aggregation
//! - [`StudyroomConfig`]: Application configuration management

pub mod analysis;
pub mod config;
pub mod diagnosis;
pub mod error;

pub use analysis::{days_until, CategoryTime, SessionRecord, TaskAnalysis, TaskAnalyzer, TopTask};
pub use config::StudyroomConfig;
pub use diagnosis::{
    AchievabilityBand, AchievabilityScore, BalanceBand, BalanceScore, Diagnosis, DiagnosisEngine,
    DiagnosisMetrics, DiversityBand, ExamRequirement, FocusBand, HabitScore, RequirementTable,
};
pub use error::{ConfigError, CoreError, Result};
