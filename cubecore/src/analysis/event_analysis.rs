use tracing::{debug, trace};

use crate::analysis::context::EventContext;
use crate::analysis::error::AnalysisError;
use crate::analysis::identity::{IdentityResolver, ParticleIdentity};
use crate::analysis::store::ObjectStore;
use crate::analysis::summary::{AnalysisSummary, ObjectSummary};
use crate::analysis::truth_count::TrueCounts;
use crate::data::event::AlgorithmResult;
use crate::data::lorentz::LorentzVector;
use crate::data::pdg::ANTI_MUON;
use crate::data::recon::{ReconCluster, ReconObject, ReconTrack};

/// Analysis of one event.
///
/// # Description
///
/// Construction counts primary anti-muons and pions at truth level, collects
/// the reconstructed objects named by the algorithm result and sorts them by
/// time. The caller then applies its selection and asks for the reconstructed
/// anti-muon count, the vertex and the first object as needed.
///
pub struct EventAnalysis<'a> {
    context: EventContext<'a>,
    identity: IdentityResolver<'a>,
    true_counts: TrueCounts,
    store: ObjectStore<'a>,
    number_of_primary_anti_muon_object: usize,
    vertex: Option<LorentzVector>,
    first_object: Option<&'a ReconObject>,
}

impl<'a> EventAnalysis<'a> {
    /// Analyses the objects of the event's own algorithm result.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubecore::{AnalysisError, DominantContributor, Event, EventAnalysis, EventContext};
    ///
    /// // an event without any object container cannot be analysed
    /// let event = Event::default();
    /// let context = EventContext::new(&event, &DominantContributor);
    /// assert_eq!(EventAnalysis::new(context).err(), Some(AnalysisError::EmptyInput));
    /// ```
    pub fn new(context: EventContext<'a>) -> Result<Self, AnalysisError> {
        Self::with_result(context, context.algorithm_result())
    }

    /// Analyses the objects of `result`, resolving its container names in the event.
    ///
    /// Fails with `EmptyInput` when `result` names no container or when none of
    /// the named containers holds an object.
    pub fn with_result(context: EventContext<'a>, result: &AlgorithmResult) -> Result<Self, AnalysisError> {
        let true_counts = TrueCounts::from_trajectories(context.trajectories());

        let mut store = ObjectStore::new();
        store.add(&context, result)?;
        if !store.has_objects() {
            return Err(AnalysisError::EmptyInput);
        }
        store.sort_objects_by_time();

        debug!(
            event = context.event().event_id,
            objects = store.objects().len(),
            tracks = store.tracks().len(),
            clusters = store.clusters().len(),
            primary_anti_muons = true_counts.primary_anti_muons,
            primary_pions = true_counts.primary_pions,
            "event analysis constructed"
        );

        Ok(EventAnalysis {
            context,
            identity: context.identity(),
            true_counts,
            store,
            number_of_primary_anti_muon_object: 0,
            vertex: None,
            first_object: None,
        })
    }

    pub fn context(&self) -> &EventContext<'a> {
        &self.context
    }

    pub fn tracks(&self) -> &[&'a ReconTrack] {
        self.store.tracks()
    }

    pub fn clusters(&self) -> &[&'a ReconCluster] {
        self.store.clusters()
    }

    /// The time-sorted object container.
    pub fn objects(&self) -> &[&'a ReconObject] {
        self.store.objects()
    }

    pub fn true_counts(&self) -> TrueCounts {
        self.true_counts
    }

    pub fn number_of_primary_anti_muon_trajectory(&self) -> usize {
        self.true_counts.primary_anti_muons
    }

    pub fn number_of_primary_pion_trajectory(&self) -> usize {
        self.true_counts.primary_pions
    }

    /// Value of the last `set_number_of_primary_anti_muon_object` call, 0 before.
    pub fn number_of_primary_anti_muon_object(&self) -> usize {
        self.number_of_primary_anti_muon_object
    }

    pub fn get_pdg(&self, object: &ReconObject) -> i32 {
        self.identity.get_pdg(object)
    }

    pub fn get_parent_id(&self, object: &ReconObject) -> i32 {
        self.identity.get_parent_id(object)
    }

    pub fn get_parent_pdg(&self, parent_id: i32) -> i32 {
        self.identity.get_parent_pdg(parent_id)
    }

    pub fn identify(&self, object: &ReconObject) -> ParticleIdentity {
        self.identity.identify(object)
    }

    /// Counts the tracks whose main trajectory is a primary anti-muon.
    pub fn set_number_of_primary_anti_muon_object(&mut self) -> usize {
        let count = self
            .store
            .objects()
            .iter()
            .filter(|object| object.as_track().is_some())
            .filter(|object| self.identity.identify(object).is_primary_anti_muon())
            .count();
        self.number_of_primary_anti_muon_object = count;
        count
    }

    /// Takes the front state of the first anti-muon track as the vertex.
    ///
    /// Only the first anti-muon track is considered. A vertex at the spatial
    /// origin reads as not found.
    pub fn set_vertex(&mut self) -> Result<LorentzVector, AnalysisError> {
        let muon_track = self
            .store
            .objects()
            .iter()
            .filter_map(|object| object.as_track().map(|track| (*object, track)))
            .find(|(object, _)| self.identity.get_pdg(object) == ANTI_MUON);

        let vertex = muon_track
            .and_then(|(_, track)| track.front_state())
            .map(|state| state.position)
            .filter(|position| !position.is_spatial_origin())
            .ok_or(AnalysisError::NoVertexCandidate)?;

        debug!(event = self.context.event().event_id, %vertex, "vertex set");
        self.vertex = Some(vertex);
        Ok(vertex)
    }

    pub fn vertex(&self) -> Option<&LorentzVector> {
        self.vertex.as_ref()
    }

    /// Selects the earliest object that is neither an anti-muon, a muon
    /// descendant nor unresolved.
    pub fn set_first_object(&mut self) -> Result<&'a ReconObject, AnalysisError> {
        let mut first = None;
        for object in self.store.objects() {
            let identity = self.identity.identify(object);
            if identity.is_anti_muon() || identity.is_unresolved() || identity.is_muon_descendant() {
                trace!(object = object.object_id(), pdg = identity.pdg, parent_pdg = identity.parent_pdg, "skipped");
                continue;
            }
            first = Some(*object);
            break;
        }

        let first = first.ok_or(AnalysisError::NoFirstObjectCandidate)?;
        debug!(event = self.context.event().event_id, object = first.object_id(), time = first.time(), "first object set");
        self.first_object = Some(first);
        Ok(first)
    }

    pub fn first_object(&self) -> Option<&'a ReconObject> {
        self.first_object
    }

    pub fn object_summary(&self, object: &ReconObject) -> ObjectSummary {
        ObjectSummary {
            kind: object.kind(),
            object_id: object.object_id(),
            position: *object.position(),
            pdg: self.get_pdg(object),
            parent_id: self.get_parent_id(object),
        }
    }

    /// Summaries of the time-sorted objects.
    pub fn object_summaries(&self) -> Vec<ObjectSummary> {
        self.objects().iter().map(|object| self.object_summary(object)).collect()
    }

    pub fn first_object_summary(&self) -> Option<ObjectSummary> {
        self.first_object.map(|object| self.object_summary(object))
    }

    pub fn summary(&self) -> AnalysisSummary {
        let event = self.context.event();
        AnalysisSummary {
            run_id: event.run_id,
            event_id: event.event_id,
            primary_anti_muon_trajectories: self.true_counts.primary_anti_muons,
            primary_pion_trajectories: self.true_counts.primary_pions,
            primary_anti_muon_objects: self.number_of_primary_anti_muon_object,
            vertex: self.vertex,
            first_object: self.first_object_summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::main_trajectory::DominantContributor;
    use crate::data::event::ObjectContainer;
    use crate::data::recon::TruthContribution;
    use crate::test_support::{cluster, event, single_container_event, track, track_at, trajectory, unmatched_cluster};

    fn ids(objects: &[&ReconObject]) -> Vec<u32> {
        objects.iter().map(|o| o.object_id()).collect()
    }

    #[test]
    fn test_empty_result_is_rejected() {
        let event = event(vec![trajectory(1, -1, -13)], vec![], &[]);
        let context = EventContext::new(&event, &DominantContributor);
        assert_eq!(EventAnalysis::new(context).err(), Some(AnalysisError::EmptyInput));
    }

    #[test]
    fn test_groups_without_objects_are_rejected() {
        let event = event(vec![], vec![ObjectContainer::new("final", vec![])], &["final", "missing"]);
        let context = EventContext::new(&event, &DominantContributor);
        assert_eq!(EventAnalysis::new(context).err(), Some(AnalysisError::EmptyInput));
    }

    #[test]
    fn test_construction_counts_and_sorts() {
        let event = single_container_event(
            vec![trajectory(1, -1, -13), trajectory(2, -1, 111), trajectory(3, -1, 2112)],
            vec![cluster(1, 4.0, 3), track(2, 1.0, 1), unmatched_cluster(3, 2.0)],
        );
        let context = EventContext::new(&event, &DominantContributor);
        let analysis = EventAnalysis::new(context).unwrap();

        assert_eq!(analysis.number_of_primary_anti_muon_trajectory(), 1);
        assert_eq!(analysis.number_of_primary_pion_trajectory(), 1);
        assert_eq!(ids(analysis.objects()), vec![2, 3, 1]);
        assert_eq!(analysis.tracks().len(), 1);
        assert_eq!(analysis.clusters().len(), 2);
        assert_eq!(analysis.number_of_primary_anti_muon_object(), 0);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let event = single_container_event(
            vec![trajectory(1, -1, -13), trajectory(2, -1, 2212)],
            vec![cluster(1, 3.0, 2), track(2, 0.0, 1), cluster(3, 3.0, 2), track(4, -2.0, 2)],
        );
        let first = EventAnalysis::new(EventContext::new(&event, &DominantContributor)).unwrap();
        let second = EventAnalysis::new(EventContext::new(&event, &DominantContributor)).unwrap();

        assert_eq!(first.true_counts(), second.true_counts());
        assert_eq!(ids(first.objects()), ids(second.objects()));
        assert_eq!(first.object_summaries(), second.object_summaries());
    }

    #[test]
    fn test_reconstructed_anti_muon_count() {
        // only tracks of primary anti-muons count, a cluster or secondary anti-muon does not
        let event = single_container_event(
            vec![trajectory(1, -1, -13), trajectory(2, 7, -13), trajectory(7, -1, 2212)],
            vec![track(1, 0.0, 1), cluster(2, 0.5, 1), track(3, 1.0, 2), track(4, 2.0, 7)],
        );
        let mut analysis = EventAnalysis::new(EventContext::new(&event, &DominantContributor)).unwrap();
        assert_eq!(analysis.set_number_of_primary_anti_muon_object(), 1);
        assert_eq!(analysis.number_of_primary_anti_muon_object(), 1);
        assert_eq!(analysis.set_number_of_primary_anti_muon_object(), 1);
    }

    #[test]
    fn test_vertex_is_front_state_of_first_anti_muon_track() {
        let front = LorentzVector::new(1.0, 2.0, 3.0, 0.5);
        let event = single_container_event(
            vec![trajectory(1, -1, -13), trajectory(2, -1, 2212)],
            vec![
                track(1, 0.1, 2),
                track_at(2, front, 1),
                track_at(3, LorentzVector::new(9.0, 9.0, 9.0, 0.7), 1),
            ],
        );
        let mut analysis = EventAnalysis::new(EventContext::new(&event, &DominantContributor)).unwrap();
        assert_eq!(analysis.set_vertex(), Ok(front));
        assert_eq!(analysis.vertex(), Some(&front));
    }

    #[test]
    fn test_vertex_at_origin_is_not_a_candidate() {
        let event = single_container_event(
            vec![trajectory(1, -1, -13)],
            vec![track_at(1, LorentzVector::new(0.0, 0.0, 0.0, 0.5), 1)],
        );
        let mut analysis = EventAnalysis::new(EventContext::new(&event, &DominantContributor)).unwrap();
        assert_eq!(analysis.set_vertex(), Err(AnalysisError::NoVertexCandidate));
        assert!(analysis.vertex().is_none());
    }

    #[test]
    fn test_vertex_comes_from_first_anti_muon_track_only() {
        // the earlier track sits at the origin, the later one would be usable
        let event = single_container_event(
            vec![trajectory(1, -1, -13), trajectory(2, -1, -13)],
            vec![
                track_at(2, LorentzVector::new(4.0, 5.0, 6.0, 2.0), 2),
                track_at(1, LorentzVector::new(0.0, 0.0, 0.0, 0.5), 1),
            ],
        );
        let mut analysis = EventAnalysis::new(EventContext::new(&event, &DominantContributor)).unwrap();
        assert_eq!(analysis.set_vertex(), Err(AnalysisError::NoVertexCandidate));
        assert!(analysis.vertex().is_none());
    }

    #[test]
    fn test_first_anti_muon_track_without_states_has_no_vertex() {
        let stateless: ReconObject = ReconTrack::new(
            1,
            LorentzVector::new(1.0, 2.0, 3.0, 0.5),
            vec![],
            vec![TruthContribution::new(1, 10.0)],
        )
        .into();
        let event = single_container_event(
            vec![trajectory(1, -1, -13), trajectory(2, -1, -13)],
            vec![track_at(2, LorentzVector::new(4.0, 5.0, 6.0, 2.0), 2), stateless],
        );
        let mut analysis = EventAnalysis::new(EventContext::new(&event, &DominantContributor)).unwrap();
        assert_eq!(analysis.set_vertex(), Err(AnalysisError::NoVertexCandidate));
        assert!(analysis.vertex().is_none());
    }

    #[test]
    fn test_vertex_needs_an_anti_muon_track() {
        // an anti-muon cluster is not a vertex candidate
        let event = single_container_event(
            vec![trajectory(1, -1, -13), trajectory(2, -1, 13)],
            vec![cluster(1, 0.0, 1), track(2, 1.0, 2)],
        );
        let mut analysis = EventAnalysis::new(EventContext::new(&event, &DominantContributor)).unwrap();
        assert_eq!(analysis.set_vertex(), Err(AnalysisError::NoVertexCandidate));
    }

    #[test]
    fn test_first_object_skips_muon_and_descendants() {
        // muon(t=0), pion from the muon(t=1), muon-child(t=2), neutron(t=3)
        let event = single_container_event(
            vec![
                trajectory(1, -1, -13),
                trajectory(2, 1, 211),
                trajectory(3, 1, -11),
                trajectory(4, -1, 2112),
            ],
            vec![cluster(4, 3.0, 4), track(3, 2.0, 3), track(1, 0.0, 1), track(2, 1.0, 2)],
        );
        let mut analysis = EventAnalysis::new(EventContext::new(&event, &DominantContributor)).unwrap();
        let first = analysis.set_first_object().unwrap();
        assert_eq!(first.object_id(), 4);
        assert_eq!(first.time(), 3.0);
        assert_eq!(analysis.first_object().map(|o| o.object_id()), Some(4));
        assert_eq!(analysis.first_object_summary().map(|s| s.pdg), Some(2112));
    }

    #[test]
    fn test_first_object_skips_unresolved_objects() {
        let event = single_container_event(
            vec![trajectory(1, -1, -13), trajectory(4, -1, 2212)],
            vec![unmatched_cluster(1, 0.5), cluster(2, 1.0, 4), cluster(3, 0.7, 99)],
        );
        let mut analysis = EventAnalysis::new(EventContext::new(&event, &DominantContributor)).unwrap();
        assert_eq!(analysis.set_first_object().map(|o| o.object_id()), Ok(2));
    }

    #[test]
    fn test_primary_pion_is_a_first_object() {
        let event = single_container_event(
            vec![trajectory(1, -1, -13), trajectory(2, -1, 211), trajectory(4, -1, 2112)],
            vec![track(1, 0.0, 1), track(2, 1.0, 2), cluster(4, 3.0, 4)],
        );
        let mut analysis = EventAnalysis::new(EventContext::new(&event, &DominantContributor)).unwrap();
        assert_eq!(analysis.set_first_object().map(|o| o.object_id()), Ok(2));
    }

    #[test]
    fn test_only_muon_activity_has_no_first_object() {
        let event = single_container_event(
            vec![trajectory(1, -1, -13), trajectory(2, 1, -11), trajectory(3, 2, 22)],
            vec![track(1, 0.0, 1), cluster(2, 1.0, 2), cluster(3, 2.0, 1)],
        );
        let mut analysis = EventAnalysis::new(EventContext::new(&event, &DominantContributor)).unwrap();
        assert_eq!(analysis.set_first_object(), Err(AnalysisError::NoFirstObjectCandidate));
        assert!(analysis.first_object().is_none());
    }

    #[test]
    fn test_summary_after_full_analysis() {
        let front = LorentzVector::new(10.0, 20.0, 30.0, 1.0);
        let event = single_container_event(
            vec![trajectory(1, -1, -13), trajectory(4, -1, 2112)],
            vec![track_at(1, front, 1), cluster(4, 3.5, 4)],
        );
        let mut analysis = EventAnalysis::new(EventContext::new(&event, &DominantContributor)).unwrap();
        analysis.set_number_of_primary_anti_muon_object();
        analysis.set_vertex().unwrap();
        analysis.set_first_object().unwrap();

        let summary = analysis.summary();
        assert_eq!(summary.primary_anti_muon_trajectories, 1);
        assert_eq!(summary.primary_pion_trajectories, 0);
        assert_eq!(summary.primary_anti_muon_objects, 1);
        assert_eq!(summary.vertex, Some(front));
        assert!((summary.delta_t().unwrap() - 2.5).abs() < 1e-12);
    }
}
