//! The per-event loop: CC0pi selection, vertex, first object and delta T.

use std::error::Error;
use std::io::Write;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use cubecore::{AnalysisError, AnalysisSummary, Event, EventAnalysis, EventContext, FailureReason, MainTrajectory};

use crate::config::SelectionConfig;
use crate::histogram::Histogram1D;

const SEPARATOR: &str = "--------------------------------";

/// Number of events leaving the selection at each stage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionTally {
    pub events_read: usize,
    pub empty_input: usize,
    pub failed_true_selection: usize,
    pub failed_reco_selection: usize,
    pub no_vertex_candidate: usize,
    pub no_first_object_candidate: usize,
    pub selected: usize,
}

impl SelectionTally {
    pub fn record_failure(&mut self, reason: FailureReason) {
        match reason {
            FailureReason::EmptyInput => self.empty_input += 1,
            FailureReason::NoVertexCandidate => self.no_vertex_candidate += 1,
            FailureReason::NoFirstObjectCandidate => self.no_first_object_candidate += 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum EventOutcome {
    Failed(AnalysisError),
    FailedTrueSelection,
    FailedRecoSelection,
    Selected(AnalysisSummary),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunReport {
    pub tally: SelectionTally,
    pub delta_t_neutron: Histogram1D,
    pub delta_t_other: Histogram1D,
    pub selected_events: Vec<AnalysisSummary>,
}

impl RunReport {
    pub fn new(config: &SelectionConfig) -> Self {
        RunReport {
            tally: SelectionTally::default(),
            delta_t_neutron: Histogram1D::from_config("#delta T, neutron", &config.delta_t),
            delta_t_other: Histogram1D::from_config("#delta T, other", &config.delta_t),
            selected_events: Vec::new(),
        }
    }
}

fn locate_first_object(analysis: &mut EventAnalysis) -> Result<(), AnalysisError> {
    analysis.set_vertex()?;
    analysis.set_first_object()?;
    Ok(())
}

pub struct EventLoop<'c> {
    config: &'c SelectionConfig,
    main_trajectory: &'c dyn MainTrajectory,
    report: RunReport,
}

impl<'c> EventLoop<'c> {
    /// Fails when `config` does not validate.
    pub fn new(config: &'c SelectionConfig, main_trajectory: &'c dyn MainTrajectory) -> Result<Self, Box<dyn Error>> {
        config.validate()?;
        Ok(EventLoop { config, main_trajectory, report: RunReport::new(config) })
    }

    /// Runs the selection on one event and records the outcome. Dumps of
    /// selected events go to `out` when `show_objects` is set.
    pub fn process<W: Write>(&mut self, index: usize, event: &Event, out: &mut W) -> Result<EventOutcome, Box<dyn Error>> {
        let outcome = self.select(index, event, out)?;
        self.record(&outcome);
        Ok(outcome)
    }

    fn select<W: Write>(&self, index: usize, event: &Event, out: &mut W) -> Result<EventOutcome, Box<dyn Error>> {
        let show = self.config.show_objects;
        let context = EventContext::new(event, self.main_trajectory);

        let mut analysis = match EventAnalysis::new(context) {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!(event = index, "skipping event: {}", e);
                return Ok(EventOutcome::Failed(e));
            }
        };

        // CC0pi, true selection
        if !analysis
            .true_counts()
            .passes(self.config.required_primary_anti_muons, self.config.required_primary_pions)
        {
            debug!(event = index, counts = ?analysis.true_counts(), "failed true selection");
            return Ok(EventOutcome::FailedTrueSelection);
        }

        // single reconstructed muon track
        if analysis.set_number_of_primary_anti_muon_object() != self.config.required_anti_muon_objects {
            debug!(
                event = index,
                anti_muon_objects = analysis.number_of_primary_anti_muon_object(),
                "failed reconstructed selection"
            );
            return Ok(EventOutcome::FailedRecoSelection);
        }

        if show {
            writeln!(out, "event: {}", index)?;
        }

        if let Err(e) = locate_first_object(&mut analysis) {
            warn!(event = index, "{}", e);
            if show {
                writeln!(out, "{}", e)?;
                writeln!(out, "{}", SEPARATOR)?;
            }
            return Ok(EventOutcome::Failed(e));
        }

        if show {
            analysis.show_all_objects(out)?;
            analysis.show_first_object(out)?;
            analysis.show_vertex(out)?;
            writeln!(out, "{}", SEPARATOR)?;
        }

        Ok(EventOutcome::Selected(analysis.summary()))
    }

    fn record(&mut self, outcome: &EventOutcome) {
        let report = &mut self.report;
        report.tally.events_read += 1;
        match outcome {
            EventOutcome::Failed(e) => report.tally.record_failure(e.reason()),
            EventOutcome::FailedTrueSelection => report.tally.failed_true_selection += 1,
            EventOutcome::FailedRecoSelection => report.tally.failed_reco_selection += 1,
            EventOutcome::Selected(summary) => {
                report.tally.selected += 1;
                if let (Some(delta_t), Some(first)) = (summary.delta_t(), summary.first_object.as_ref()) {
                    if first.pdg == self.config.neutron_pdg {
                        report.delta_t_neutron.fill(delta_t);
                    } else {
                        report.delta_t_other.fill(delta_t);
                    }
                }
                report.selected_events.push(summary.clone());
            }
        }
    }

    pub fn report(&self) -> &RunReport {
        &self.report
    }

    pub fn finish(self) -> RunReport {
        self.report
    }
}

/// Runs the event loop over `events`, honouring `max_events`.
pub fn run_events<W: Write>(
    events: &[Event],
    config: &SelectionConfig,
    main_trajectory: &dyn MainTrajectory,
    out: &mut W,
) -> Result<RunReport, Box<dyn Error>> {
    info!("total number of events : {}", events.len());

    let limit = config.max_events.unwrap_or(events.len());
    let mut event_loop = EventLoop::new(config, main_trajectory)?;
    for (index, event) in events.iter().take(limit).enumerate() {
        event_loop.process(index, event, out)?;
    }

    let report = event_loop.finish();
    info!(
        events = report.tally.events_read,
        selected = report.tally.selected,
        neutron_entries = report.delta_t_neutron.entries(),
        other_entries = report.delta_t_other.entries(),
        "run finished"
    );
    Ok(report)
}
