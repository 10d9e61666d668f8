use serde::{Deserialize, Serialize};

use crate::data::recon::ReconObject;
use crate::data::truth::TrajectoryContainer;

/// A named, ordered collection of reconstructed objects.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectContainer {
    pub name: String,
    #[serde(default)]
    pub objects: Vec<ReconObject>,
}

impl ObjectContainer {
    pub fn new(name: &str, objects: Vec<ReconObject>) -> Self {
        ObjectContainer { name: name.to_string(), objects }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReconObject> {
        self.objects.iter()
    }
}

/// Output of a reconstruction algorithm: the names of the object containers it
/// filled, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    pub name: String,
    #[serde(default)]
    pub object_containers: Vec<String>,
}

impl AlgorithmResult {
    pub fn new(name: &str, object_containers: Vec<String>) -> Self {
        AlgorithmResult { name: name.to_string(), object_containers }
    }
}

/// One simulated and reconstructed detector event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub run_id: i32,
    pub event_id: i32,
    #[serde(default)]
    pub trajectories: TrajectoryContainer,
    #[serde(default)]
    pub object_containers: Vec<ObjectContainer>,
    #[serde(default)]
    pub algorithm_result: AlgorithmResult,
}

impl Event {
    /// Looks up an object container by name, the first container with that name wins.
    pub fn object_container(&self, name: &str) -> Option<&ObjectContainer> {
        self.object_containers.iter().find(|c| c.name == name)
    }
}
