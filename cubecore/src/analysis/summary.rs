use std::fmt;
use std::fmt::Formatter;
use serde::{Deserialize, Serialize};

use crate::data::lorentz::LorentzVector;
use crate::data::recon::ObjectKind;

/// Position and identity of one object, as shown in object dumps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectSummary {
    pub kind: ObjectKind,
    pub object_id: u32,
    pub position: LorentzVector,
    pub pdg: i32,
    pub parent_id: i32,
}

impl fmt::Display for ObjectSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // "track:" is padded so that tracks and clusters line up
        write!(
            f,
            "{:<8} ({}) , pdg: {}, parentId: {}",
            format!("{}:", self.kind),
            self.position,
            self.pdg,
            self.parent_id
        )
    }
}

/// Outcome of the analysis of one event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub run_id: i32,
    pub event_id: i32,
    pub primary_anti_muon_trajectories: usize,
    pub primary_pion_trajectories: usize,
    pub primary_anti_muon_objects: usize,
    pub vertex: Option<LorentzVector>,
    pub first_object: Option<ObjectSummary>,
}

impl AnalysisSummary {
    /// Time between the vertex and the first object, if both were found.
    pub fn delta_t(&self) -> Option<f64> {
        match (&self.vertex, &self.first_object) {
            (Some(vertex), Some(first)) => Some(first.position.t - vertex.t),
            _ => None,
        }
    }
}
