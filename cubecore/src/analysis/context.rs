use crate::analysis::identity::IdentityResolver;
use crate::analysis::main_trajectory::MainTrajectory;
use crate::data::event::{AlgorithmResult, Event, ObjectContainer};
use crate::data::truth::TrajectoryContainer;

/// Everything the analysis of one event reads: the event itself and the
/// service associating reconstructed objects with true trajectories.
#[derive(Clone, Copy)]
pub struct EventContext<'a> {
    event: &'a Event,
    main_trajectory: &'a dyn MainTrajectory,
}

impl<'a> EventContext<'a> {
    pub fn new(event: &'a Event, main_trajectory: &'a dyn MainTrajectory) -> Self {
        EventContext { event, main_trajectory }
    }

    pub fn event(&self) -> &'a Event {
        self.event
    }

    pub fn trajectories(&self) -> &'a TrajectoryContainer {
        &self.event.trajectories
    }

    pub fn algorithm_result(&self) -> &'a AlgorithmResult {
        &self.event.algorithm_result
    }

    pub fn object_container(&self, name: &str) -> Option<&'a ObjectContainer> {
        self.event.object_container(name)
    }

    pub fn identity(&self) -> IdentityResolver<'a> {
        IdentityResolver::new(&self.event.trajectories, self.main_trajectory)
    }
}
