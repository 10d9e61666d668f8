use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::analysis::context::EventContext;
use crate::analysis::error::AnalysisError;
use crate::data::event::AlgorithmResult;
use crate::data::recon::{ReconCluster, ReconObject, ReconTrack};

/// Candidate objects of one event.
///
/// # Description
///
/// Holds "the" object container of the event as an ordered list of borrowed
/// objects, together with every track and cluster seen in any container of
/// the algorithm result.
///
#[derive(Clone, Debug, Default)]
pub struct ObjectStore<'a> {
    objects: Option<Vec<&'a ReconObject>>,
    tracks: Vec<&'a ReconTrack>,
    clusters: Vec<&'a ReconCluster>,
}

impl<'a> ObjectStore<'a> {
    pub fn new() -> Self {
        ObjectStore::default()
    }

    /// Collects the objects of every container named by `result`.
    ///
    /// Containers are visited in reverse declaration order and each non-empty one
    /// replaces the current object list, so the earliest declared non-empty
    /// container ends up as "the" container. Containers missing from the event
    /// are skipped without clearing an earlier choice.
    ///
    /// # Arguments
    ///
    /// * `context` - the event the container names are resolved against.
    /// * `result` - the algorithm result naming the containers.
    ///
    pub fn add(&mut self, context: &EventContext<'a>, result: &AlgorithmResult) -> Result<(), AnalysisError> {
        if result.object_containers.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        for name in result.object_containers.iter().rev() {
            let container = match context.object_container(name) {
                Some(container) => container,
                None => {
                    debug!(container = %name, "object container not present in event");
                    continue;
                }
            };

            if !container.is_empty() {
                self.objects = Some(container.iter().collect());
            }

            for object in container.iter() {
                match object {
                    ReconObject::Track(track) => self.tracks.push(track),
                    ReconObject::Cluster(cluster) => self.clusters.push(cluster),
                }
            }
            trace!(container = %name, objects = container.len(), "collected object container");
        }

        Ok(())
    }

    /// Stable sort of "the" container by ascending object time. NaN times go last.
    pub fn sort_objects_by_time(&mut self) {
        if let Some(objects) = self.objects.as_mut() {
            objects.sort_by_key(|object| OrderedFloat(object.time()));
        }
    }

    pub fn has_objects(&self) -> bool {
        self.objects.as_ref().map_or(false, |objects| !objects.is_empty())
    }

    /// "The" object container, empty when none was found.
    pub fn objects(&self) -> &[&'a ReconObject] {
        self.objects.as_deref().unwrap_or(&[])
    }

    pub fn tracks(&self) -> &[&'a ReconTrack] {
        &self.tracks
    }

    pub fn clusters(&self) -> &[&'a ReconCluster] {
        &self.clusters
    }
}
