use std::fmt::Display;
use serde::{Deserialize, Serialize};

use crate::data::lorentz::LorentzVector;

/// Energy a single true trajectory deposited into a reconstructed object.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TruthContribution {
    pub trajectory_id: i32,
    pub energy: f64,
}

impl TruthContribution {
    pub fn new(trajectory_id: i32, energy: f64) -> Self {
        TruthContribution { trajectory_id, energy }
    }
}

/// One fitted state along a track.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackState {
    pub position: LorentzVector,
}

impl TrackState {
    pub fn new(position: LorentzVector) -> Self {
        TrackState { position }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReconTrack {
    pub object_id: u32,
    pub position: LorentzVector,
    // ordered from the start of the track, the first entry is the front state
    #[serde(default)]
    pub states: Vec<TrackState>,
    #[serde(default)]
    pub contributions: Vec<TruthContribution>,
}

impl ReconTrack {
    /// Creates a new `ReconTrack`.
    ///
    /// # Arguments
    ///
    /// * `object_id` - id of the object, unique within one event.
    /// * `position` - representative position of the track.
    /// * `states` - fitted states ordered from the front of the track.
    /// * `contributions` - true trajectories that deposited energy in the track.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubecore::data::lorentz::LorentzVector;
    /// use cubecore::data::recon::{ReconTrack, TrackState};
    ///
    /// let front = LorentzVector::new(1.0, 2.0, 3.0, 0.5);
    /// let track = ReconTrack::new(7, front, vec![TrackState::new(front)], vec![]);
    /// assert_eq!(track.front_state().unwrap().position, front);
    /// ```
    pub fn new(
        object_id: u32,
        position: LorentzVector,
        states: Vec<TrackState>,
        contributions: Vec<TruthContribution>,
    ) -> Self {
        ReconTrack { object_id, position, states, contributions }
    }

    pub fn front_state(&self) -> Option<&TrackState> {
        self.states.first()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReconCluster {
    pub object_id: u32,
    pub position: LorentzVector,
    // total deposited energy, informational only
    #[serde(default)]
    pub energy: f64,
    #[serde(default)]
    pub contributions: Vec<TruthContribution>,
}

impl ReconCluster {
    pub fn new(
        object_id: u32,
        position: LorentzVector,
        energy: f64,
        contributions: Vec<TruthContribution>,
    ) -> Self {
        ReconCluster { object_id, position, energy, contributions }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Track,
    Cluster,
}

impl ObjectKind {
    pub fn to_str(&self) -> &str {
        match self {
            ObjectKind::Track => "track",
            ObjectKind::Cluster => "cluster",
        }
    }
}

impl Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// A reconstructed candidate object.
///
/// # Description
///
/// Tracks and clusters are the only object kinds the analysis classifies, both
/// expose a four-position whose time is used to order the objects of an event.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReconObject {
    Track(ReconTrack),
    Cluster(ReconCluster),
}

impl ReconObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            ReconObject::Track(_) => ObjectKind::Track,
            ReconObject::Cluster(_) => ObjectKind::Cluster,
        }
    }

    pub fn object_id(&self) -> u32 {
        match self {
            ReconObject::Track(track) => track.object_id,
            ReconObject::Cluster(cluster) => cluster.object_id,
        }
    }

    pub fn position(&self) -> &LorentzVector {
        match self {
            ReconObject::Track(track) => &track.position,
            ReconObject::Cluster(cluster) => &cluster.position,
        }
    }

    /// Time coordinate used for ordering, the time of the object's position.
    pub fn time(&self) -> f64 {
        self.position().t
    }

    pub fn contributions(&self) -> &[TruthContribution] {
        match self {
            ReconObject::Track(track) => &track.contributions,
            ReconObject::Cluster(cluster) => &cluster.contributions,
        }
    }

    pub fn as_track(&self) -> Option<&ReconTrack> {
        match self {
            ReconObject::Track(track) => Some(track),
            ReconObject::Cluster(_) => None,
        }
    }

    pub fn as_cluster(&self) -> Option<&ReconCluster> {
        match self {
            ReconObject::Cluster(cluster) => Some(cluster),
            ReconObject::Track(_) => None,
        }
    }
}

impl From<ReconTrack> for ReconObject {
    fn from(track: ReconTrack) -> Self {
        ReconObject::Track(track)
    }
}

impl From<ReconCluster> for ReconObject {
    fn from(cluster: ReconCluster) -> Self {
        ReconObject::Cluster(cluster)
    }
}
