//! # Proposal Recap
//!
//! Reduces academic proposal payloads (activities, positional funding
//! tables, performance-indicator tables) into per-department summaries:
//! counts, Rupiah totals, percentages and time-based activity states.
//!
//! ## Usage
//!
//! ```bash
//! proposal-recap summarize proposals.json --stage fund-disbursement [--now TS] [--format json]
//! ```
//!
//! ## Modules
//!
//! - `money` - Amount parsing, Rupiah formatting and zero-guarded ratios
//! - `lifecycle` - Pending / started / finished classification of intervals
//! - `table` - Positional table cells, per-kind column layouts and the reducer
//! - `proposal` - Proposal records, stages and stage-shaped payload decoding
//! - `aggregate` - Activity and department event summaries for planning proposals
//! - `summary` - Per-department summary builders for every stage
//! - `report` - JSON, CSV and text-table rendering
//! - `config` - Layered configuration from files and the environment
//! - `error` - Error types with numeric codes
//! - `cli` - Command-line argument structures and command handlers
pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod money;
pub mod proposal;
pub mod report;
pub mod summary;
pub mod table;
