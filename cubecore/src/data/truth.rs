use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::data::lorentz::LorentzVector;
use crate::data::pdg::PRIMARY_PARENT_ID;

/// A simulated particle history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct G4Trajectory {
    pub track_id: i32,
    // PRIMARY_PARENT_ID for particles leaving the interaction
    pub parent_id: i32,
    pub pdg_code: i32,
    #[serde(default)]
    pub particle_name: String,
    #[serde(default)]
    pub initial_position: LorentzVector,
}

impl G4Trajectory {
    pub fn new(track_id: i32, parent_id: i32, pdg_code: i32) -> Self {
        G4Trajectory {
            track_id,
            parent_id,
            pdg_code,
            particle_name: String::new(),
            initial_position: LorentzVector::default(),
        }
    }

    pub fn is_primary(&self) -> bool {
        self.parent_id == PRIMARY_PARENT_ID
    }
}

/// Trajectories of one event keyed by trajectory id.
pub type TrajectoryContainer = BTreeMap<i32, G4Trajectory>;

/// Builds a container keyed by each trajectory's own id, later duplicates win.
pub fn trajectory_container<I>(trajectories: I) -> TrajectoryContainer
where
    I: IntoIterator<Item = G4Trajectory>,
{
    trajectories.into_iter().map(|t| (t.track_id, t)).collect()
}
