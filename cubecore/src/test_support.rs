// Builders for hand-made events used across the unit tests.
use crate::data::event::{AlgorithmResult, Event, ObjectContainer};
use crate::data::lorentz::LorentzVector;
use crate::data::recon::{ReconCluster, ReconObject, ReconTrack, TrackState, TruthContribution};
use crate::data::truth::{trajectory_container, G4Trajectory};

pub fn trajectory(track_id: i32, parent_id: i32, pdg_code: i32) -> G4Trajectory {
    G4Trajectory::new(track_id, parent_id, pdg_code)
}

pub fn track_at(object_id: u32, front: LorentzVector, trajectory_id: i32) -> ReconObject {
    let back = LorentzVector::new(front.x, front.y, front.z + 50.0, front.t + 0.2);
    ReconTrack::new(
        object_id,
        front,
        vec![TrackState::new(front), TrackState::new(back)],
        vec![TruthContribution::new(trajectory_id, 10.0)],
    )
    .into()
}

pub fn track(object_id: u32, time: f64, trajectory_id: i32) -> ReconObject {
    track_at(object_id, LorentzVector::new(object_id as f64, 5.0, 10.0, time), trajectory_id)
}

pub fn cluster(object_id: u32, time: f64, trajectory_id: i32) -> ReconObject {
    ReconCluster::new(
        object_id,
        LorentzVector::new(object_id as f64, -5.0, 20.0, time),
        2.0,
        vec![TruthContribution::new(trajectory_id, 2.0)],
    )
    .into()
}

pub fn unmatched_cluster(object_id: u32, time: f64) -> ReconObject {
    ReconCluster::new(object_id, LorentzVector::new(object_id as f64, -5.0, 20.0, time), 1.0, vec![]).into()
}

pub fn event(trajectories: Vec<G4Trajectory>, containers: Vec<ObjectContainer>, groups: &[&str]) -> Event {
    Event {
        run_id: 0,
        event_id: 0,
        trajectories: trajectory_container(trajectories),
        object_containers: containers,
        algorithm_result: AlgorithmResult::new("CubeRecon", groups.iter().map(|g| g.to_string()).collect()),
    }
}

/// An event with all objects in one container named "final".
pub fn single_container_event(trajectories: Vec<G4Trajectory>, objects: Vec<ReconObject>) -> Event {
    event(trajectories, vec![ObjectContainer::new("final", objects)], &["final"])
}
