use serde::{Deserialize, Serialize};

use crate::data::pdg::{ANTI_MUON, CHARGED_PION, NEUTRAL_PION};
use crate::data::truth::{G4Trajectory, TrajectoryContainer};

fn is_primary_anti_muon(trajectory: &G4Trajectory) -> bool {
    trajectory.is_primary() && trajectory.pdg_code == ANTI_MUON
}

fn is_primary_pion(trajectory: &G4Trajectory) -> bool {
    trajectory.is_primary()
        && (trajectory.pdg_code.abs() == CHARGED_PION || trajectory.pdg_code == NEUTRAL_PION)
}

pub fn count_primary_anti_muons(trajectories: &TrajectoryContainer) -> usize {
    trajectories.values().filter(|t| is_primary_anti_muon(t)).count()
}

pub fn count_primary_pions(trajectories: &TrajectoryContainer) -> usize {
    trajectories.values().filter(|t| is_primary_pion(t)).count()
}

/// True-level particle counts of one event, independent of reconstruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrueCounts {
    pub primary_anti_muons: usize,
    pub primary_pions: usize,
}

impl TrueCounts {
    pub fn from_trajectories(trajectories: &TrajectoryContainer) -> Self {
        TrueCounts {
            primary_anti_muons: count_primary_anti_muons(trajectories),
            primary_pions: count_primary_pions(trajectories),
        }
    }

    /// CC0pi at truth level with the given multiplicities.
    pub fn passes(&self, anti_muons: usize, pions: usize) -> bool {
        self.primary_anti_muons == anti_muons && self.primary_pions == pions
    }
}
