//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{MIN_SLIP_WIDTH, PayrollConfig, SlipLayout, TaxSlabTable, TaxSlabsFile};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── tax_slabs.yaml    # Income-tax slab table (required)
/// └── slip_layout.yaml  # Salary slip title and width (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("{} tax slabs", loader.tax_slabs().slabs().len());
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `tax_slabs.yaml` is missing, if any file
    /// contains invalid YAML, or if the slab table or layout breaks a
    /// structural rule. A missing `slip_layout.yaml` falls back to the
    /// default layout.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let slabs_file = Self::load_yaml::<TaxSlabsFile>(&path.join("tax_slabs.yaml"))?;
        let tax_slabs = TaxSlabTable::new(slabs_file.slabs)?;

        let layout_path = path.join("slip_layout.yaml");
        let slip_layout = if layout_path.exists() {
            Self::load_yaml::<SlipLayout>(&layout_path)?
        } else {
            debug!(path = %layout_path.display(), "No slip layout file, using defaults");
            SlipLayout::default()
        };
        if slip_layout.width < MIN_SLIP_WIDTH {
            return Err(EngineError::LayoutTooNarrow {
                width: slip_layout.width,
                minimum: MIN_SLIP_WIDTH,
            });
        }

        debug!(
            path = %path.display(),
            slabs = tax_slabs.slabs().len(),
            slip_width = slip_layout.width,
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: PayrollConfig::new(tax_slabs, slip_layout),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the loaded income-tax slab table.
    pub fn tax_slabs(&self) -> &TaxSlabTable {
        self.config.tax_slabs()
    }

    /// Returns the loaded slip layout.
    pub fn slip_layout(&self) -> &SlipLayout {
        self.config.slip_layout()
    }
}
