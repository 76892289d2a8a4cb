use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory layout for the analyze subcommand: one explicit struct
/// constructed per invocation, instead of path prefixes assembled ad hoc at
/// every call site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeConfig {
    /// Root containing `datasets/`, `output/`, `aisles/` and `orders/`.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Whether to write the per-instance containment report next to the
    /// aisle tables.
    #[serde(default = "default_write_containment")]
    pub write_containment: bool,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            write_containment: default_write_containment(),
        }
    }
}

impl AnalyzeConfig {
    /// `<root>/datasets/<name>`: the instance files to analyze.
    pub fn dataset_dir(&self, name: &str) -> PathBuf {
        self.root.join("datasets").join(name)
    }

    /// `<root>/output/output_<name>`: externally produced solutions, one per
    /// instance file, used to flag aisle/order usage.
    pub fn output_dir(&self, name: &str) -> PathBuf {
        self.root.join("output").join(format!("output_{name}"))
    }

    /// `<root>/aisles/<name>`: where the per-aisle tables are written.
    pub fn aisle_metrics_dir(&self, name: &str) -> PathBuf {
        self.root.join("aisles").join(name)
    }

    /// `<root>/orders/<name>`: where the per-order tables are written.
    pub fn order_metrics_dir(&self, name: &str) -> PathBuf {
        self.root.join("orders").join(name)
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_write_containment() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn directories_derive_from_the_root() {
        let config = AnalyzeConfig {
            root: PathBuf::from("/data"),
            ..AnalyzeConfig::default()
        };
        assert_eq!(config.dataset_dir("a"), Path::new("/data/datasets/a"));
        assert_eq!(config.output_dir("a"), Path::new("/data/output/output_a"));
        assert_eq!(config.aisle_metrics_dir("a"), Path::new("/data/aisles/a"));
        assert_eq!(config.order_metrics_dir("a"), Path::new("/data/orders/a"));
    }

    #[test]
    fn missing_config_fields_fall_back_to_defaults() {
        let config: AnalyzeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.root, PathBuf::from("."));
        assert!(config.write_containment);
    }
}
