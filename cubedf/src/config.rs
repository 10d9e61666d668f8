//! Selection and output settings of an analysis run.

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use serde::{Deserialize, Serialize};

use cubecore::data::pdg::NEUTRON;

/// Binning of a fixed-width 1D histogram.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistogramConfig {
    pub bins: usize,
    pub low: f64,
    pub high: f64,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        // delta T in ns around the vertex time
        Self { bins: 100, low: -10.0, high: 10.0 }
    }
}

/// Selection configuration.
///
/// Every field has a default, a config file only needs the values it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    // True-level CC0pi multiplicities
    pub required_primary_anti_muons: usize,
    pub required_primary_pions: usize,

    // Reconstructed primary anti-muon tracks
    pub required_anti_muon_objects: usize,

    // First objects with this PDG code go to the neutron histogram
    pub neutron_pdg: i32,

    pub delta_t: HistogramConfig,

    // Stop after this many events, all events when unset
    pub max_events: Option<usize>,

    // Dump objects, first object and vertex of selected events
    pub show_objects: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            required_primary_anti_muons: 1,
            required_primary_pions: 0,
            required_anti_muon_objects: 1,
            neutron_pdg: NEUTRON,
            delta_t: HistogramConfig::default(),
            max_events: None,
            show_objects: true,
        }
    }
}

impl SelectionConfig {
    /// CC1pi sideband: one primary pion next to the anti-muon, objects are not dumped.
    pub fn cc1pi() -> Self {
        Self {
            required_primary_pions: 1,
            show_objects: false,
            ..Self::default()
        }
    }

    /// Reads a JSON config file, missing fields take their default value.
    pub fn from_json_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)
            .map_err(|e| format!("failed to open config {}: {}", path.display(), e))?;
        let config: SelectionConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.delta_t.bins == 0 {
            return Err("delta_t.bins must be > 0".into());
        }
        if !(self.delta_t.low < self.delta_t.high) {
            return Err(format!(
                "delta_t range is empty: low {} must be below high {}",
                self.delta_t.low, self.delta_t.high
            )
            .into());
        }
        Ok(())
    }
}
