//! Use cases - user stories orchestrated over domain types and ports.

pub mod roster;

pub use roster::{
    MigratedRoster, MigrationSummary, RosterDocument, RosterError, RosterMigration, SchemaVersion,
    CURRENT_SCHEMA_VERSION,
};
