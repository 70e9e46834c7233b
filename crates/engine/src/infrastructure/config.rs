//! Environment-driven engine configuration.

use std::path::PathBuf;

const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";
const DEFAULT_ROSTER_PATH: &str = "data/roster.json";
const DEFAULT_OUTPUT_PATH: &str = "data/roster.migrated.json";

/// Where the engine reads its inputs and writes its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Character catalog (per-character default targets).
    pub catalog_path: PathBuf,
    /// Persisted roster to migrate.
    pub roster_path: PathBuf,
    /// Destination for the current-schema roster.
    pub output_path: PathBuf,
}

impl EngineConfig {
    /// Read configuration from the process environment.
    ///
    /// - `MODSOPT_CATALOG_PATH` (default `data/catalog.json`)
    /// - `MODSOPT_ROSTER_PATH` (default `data/roster.json`)
    /// - `MODSOPT_OUTPUT_PATH` (default `data/roster.migrated.json`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values fall
    /// back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str, default: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            catalog_path: path("MODSOPT_CATALOG_PATH", DEFAULT_CATALOG_PATH),
            roster_path: path("MODSOPT_ROSTER_PATH", DEFAULT_ROSTER_PATH),
            output_path: path("MODSOPT_OUTPUT_PATH", DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let config = EngineConfig::default();

        assert_eq!(config.catalog_path, PathBuf::from("data/catalog.json"));
        assert_eq!(config.roster_path, PathBuf::from("data/roster.json"));
        assert_eq!(config.output_path, PathBuf::from("data/roster.migrated.json"));
    }

    #[test]
    fn overrides_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("MODSOPT_ROSTER_PATH", "/var/lib/modsopt/state.json"),
            ("MODSOPT_OUTPUT_PATH", "   "),
        ]);
        let config = EngineConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(
            config.roster_path,
            PathBuf::from("/var/lib/modsopt/state.json")
        );
        assert_eq!(config.output_path, PathBuf::from("data/roster.migrated.json"));
        assert_eq!(config.catalog_path, PathBuf::from("data/catalog.json"));
    }
}
