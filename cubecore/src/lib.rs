// data module
pub mod data {
    pub mod lorentz;
    pub mod pdg;
    pub mod recon;
    pub mod truth;
    pub mod event;
}

// analysis module
pub mod analysis {
    pub mod error;
    pub mod main_trajectory;
    pub mod context;
    pub mod identity;
    pub mod truth_count;
    pub mod store;
    pub mod event_analysis;
    pub mod summary;
    pub mod presentation;
}

#[cfg(test)]
pub(crate) mod test_support;

pub use analysis::context::EventContext;
pub use analysis::error::{AnalysisError, FailureReason};
pub use analysis::event_analysis::EventAnalysis;
pub use analysis::main_trajectory::{DominantContributor, MainTrajectory};
pub use analysis::summary::{AnalysisSummary, ObjectSummary};
pub use data::event::{AlgorithmResult, Event, ObjectContainer};
pub use data::lorentz::LorentzVector;
pub use data::recon::{ObjectKind, ReconCluster, ReconObject, ReconTrack, TrackState, TruthContribution};
pub use data::truth::{G4Trajectory, TrajectoryContainer};
