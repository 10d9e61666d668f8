//! Ground-truth identity of reconstructed objects.
//!
//! Lookups never fail: anything that cannot be resolved reads as `UNRESOLVED` (0),
//! which keeps the per-object classification total.

use serde::{Deserialize, Serialize};

use crate::analysis::main_trajectory::MainTrajectory;
use crate::data::pdg::{ANTI_MUON, MUON, PRIMARY_PARENT_ID, UNRESOLVED};
use crate::data::recon::ReconObject;
use crate::data::truth::{G4Trajectory, TrajectoryContainer};

/// Particle code, parent id and the parent's particle code of one object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticleIdentity {
    pub pdg: i32,
    pub parent_id: i32,
    pub parent_pdg: i32,
}

impl ParticleIdentity {
    pub fn is_anti_muon(&self) -> bool {
        self.pdg == ANTI_MUON
    }

    pub fn is_primary_anti_muon(&self) -> bool {
        self.pdg == ANTI_MUON && self.parent_id == PRIMARY_PARENT_ID
    }

    pub fn is_unresolved(&self) -> bool {
        self.pdg == UNRESOLVED
    }

    /// Produced by a muon of either charge.
    pub fn is_muon_descendant(&self) -> bool {
        self.parent_pdg.abs() == MUON
    }
}

pub struct IdentityResolver<'a> {
    trajectories: &'a TrajectoryContainer,
    main_trajectory: &'a dyn MainTrajectory,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(trajectories: &'a TrajectoryContainer, main_trajectory: &'a dyn MainTrajectory) -> Self {
        IdentityResolver { trajectories, main_trajectory }
    }

    fn main_trajectory_of(&self, object: &ReconObject) -> Option<&'a G4Trajectory> {
        let id = self.main_trajectory.main_trajectory(object)?;
        self.trajectories.get(&id)
    }

    /// PDG code of the object's main trajectory, `UNRESOLVED` if there is none.
    pub fn get_pdg(&self, object: &ReconObject) -> i32 {
        self.main_trajectory_of(object)
            .map(|trajectory| trajectory.pdg_code)
            .unwrap_or(UNRESOLVED)
    }

    /// Parent id of the object's main trajectory.
    ///
    /// An unresolved object reads 0, not `PRIMARY_PARENT_ID`, so it is never
    /// mistaken for a primary. Trajectory 0 is however a valid id, see `get_parent_pdg`.
    pub fn get_parent_id(&self, object: &ReconObject) -> i32 {
        self.main_trajectory_of(object)
            .map(|trajectory| trajectory.parent_id)
            .unwrap_or(UNRESOLVED)
    }

    /// PDG code of the trajectory with id `parent_id`, `UNRESOLVED` if absent.
    pub fn get_parent_pdg(&self, parent_id: i32) -> i32 {
        self.trajectories
            .get(&parent_id)
            .map(|trajectory| trajectory.pdg_code)
            .unwrap_or(UNRESOLVED)
    }

    pub fn identify(&self, object: &ReconObject) -> ParticleIdentity {
        let pdg = self.get_pdg(object);
        let parent_id = self.get_parent_id(object);
        let parent_pdg = self.get_parent_pdg(parent_id);
        ParticleIdentity { pdg, parent_id, parent_pdg }
    }
}
