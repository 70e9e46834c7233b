//! Mods Optimizer engine library.
//!
//! Loads a persisted roster, brings every character up to the current schema
//! and writes it back out.
//!
//! ## Structure
//!
//! - `use_cases/` - Roster migration orchestration
//! - `infrastructure/` - External dependency implementations (ports + adapters)

pub mod infrastructure;
pub mod use_cases;
