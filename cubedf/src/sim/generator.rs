//! Synthetic anti-neutrino events for demos and tests.
//!
//! Each event has a primary anti-muon leaving a track from a random vertex.
//! Depending on the settings it also carries a neutron, a proton, a primary
//! pion, the muon's decay positron and unmatched noise clusters, so that every
//! stage of the selection sees both passing and failing events.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use cubecore::data::event::{AlgorithmResult, Event, ObjectContainer};
use cubecore::data::pdg::{particle_name, ANTI_MUON, CHARGED_PION, NEUTRON, POSITRON, PRIMARY_PARENT_ID, PROTON};
use cubecore::data::truth::{trajectory_container, G4Trajectory};
use cubecore::{LorentzVector, ReconCluster, ReconObject, ReconTrack, TrackState, TruthContribution};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    // half size of the cubic active volume, mm
    pub half_size: f64,
    pub neutron_probability: f64,
    pub proton_probability: f64,
    pub pion_probability: f64,
    pub decay_positron_probability: f64,
    // events whose algorithm result names no container
    pub empty_result_probability: f64,
    pub max_noise_clusters: usize,
    // mean neutron delay after the vertex, ns
    pub neutron_delay: f64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            half_size: 1000.0,
            neutron_probability: 0.7,
            proton_probability: 0.4,
            pion_probability: 0.2,
            decay_positron_probability: 0.3,
            empty_result_probability: 0.02,
            max_noise_clusters: 2,
            neutron_delay: 3.0,
        }
    }
}

pub struct EventGenerator {
    settings: GeneratorSettings,
    rng: StdRng,
}

struct EventBuilder {
    trajectories: Vec<G4Trajectory>,
    objects: Vec<ReconObject>,
}

impl EventBuilder {
    fn trajectory(&mut self, parent_id: i32, pdg_code: i32, start: LorentzVector) -> i32 {
        let track_id = self.trajectories.len() as i32 + 1;
        self.trajectories.push(G4Trajectory {
            track_id,
            parent_id,
            pdg_code,
            particle_name: particle_name(pdg_code).to_string(),
            initial_position: start,
        });
        track_id
    }

    fn next_object_id(&self) -> u32 {
        self.objects.len() as u32 + 1
    }

    fn track(&mut self, trajectory_id: i32, front: LorentzVector, step: LorentzVector, states: usize, energy: f64) {
        let states: Vec<TrackState> = (0..states)
            .map(|i| {
                let k = i as f64;
                TrackState::new(LorentzVector::new(
                    front.x + k * step.x,
                    front.y + k * step.y,
                    front.z + k * step.z,
                    front.t + k * step.t,
                ))
            })
            .collect();
        let track = ReconTrack::new(self.next_object_id(), front, states, vec![TruthContribution::new(trajectory_id, energy)]);
        self.objects.push(track.into());
    }

    fn cluster(&mut self, position: LorentzVector, energy: f64, contributions: Vec<TruthContribution>) {
        let cluster = ReconCluster::new(self.next_object_id(), position, energy, contributions);
        self.objects.push(cluster.into());
    }
}

impl EventGenerator {
    pub fn new(settings: GeneratorSettings, seed: u64) -> Self {
        EventGenerator { settings, rng: StdRng::seed_from_u64(seed) }
    }

    fn point_near(&mut self, origin: &LorentzVector, spread: f64, delay: f64) -> LorentzVector {
        let offset = Uniform::new_inclusive(-spread, spread);
        LorentzVector::new(
            origin.x + offset.sample(&mut self.rng),
            origin.y + offset.sample(&mut self.rng),
            origin.z + offset.sample(&mut self.rng),
            origin.t + delay,
        )
    }

    fn exponential(&mut self, mean: f64) -> f64 {
        let u: f64 = self.rng.gen_range(f64::EPSILON..1.0);
        -mean * u.ln()
    }

    pub fn generate(&mut self, run_id: i32, event_id: i32) -> Event {
        let s = self.settings.clone();
        let mut builder = EventBuilder { trajectories: Vec::new(), objects: Vec::new() };

        let volume = Uniform::new_inclusive(-s.half_size, s.half_size);
        let vertex = LorentzVector::new(
            volume.sample(&mut self.rng),
            volume.sample(&mut self.rng),
            volume.sample(&mut self.rng),
            self.rng.gen_range(0.0..10.0),
        );

        let muon = builder.trajectory(PRIMARY_PARENT_ID, ANTI_MUON, vertex);
        let direction = self.point_near(&LorentzVector::default(), 1.0, 0.0);
        let step = LorentzVector::new(10.0 * direction.x, 10.0 * direction.y, 10.0 * direction.z + 20.0, 0.1);
        builder.track(muon, vertex, step, 12, 120.0);

        if self.rng.gen_bool(s.neutron_probability) {
            let delay = self.exponential(s.neutron_delay);
            let start = self.point_near(&vertex, 300.0, delay);
            let neutron = builder.trajectory(PRIMARY_PARENT_ID, NEUTRON, vertex);
            builder.cluster(start, self.rng.gen_range(1.0..15.0), vec![TruthContribution::new(neutron, 4.0)]);
        }

        if self.rng.gen_bool(s.proton_probability) {
            let proton = builder.trajectory(PRIMARY_PARENT_ID, PROTON, vertex);
            let delay = self.rng.gen_range(0.0..0.5);
            let front = self.point_near(&vertex, 5.0, delay);
            let step = self.point_near(&LorentzVector::default(), 8.0, 0.05);
            builder.track(proton, front, step, 4, 40.0);
        }

        if self.rng.gen_bool(s.pion_probability) {
            let pion = builder.trajectory(PRIMARY_PARENT_ID, CHARGED_PION, vertex);
            let delay = self.rng.gen_range(0.0..0.5);
            let front = self.point_near(&vertex, 5.0, delay);
            let step = self.point_near(&LorentzVector::default(), 10.0, 0.05);
            builder.track(pion, front, step, 6, 60.0);
        }

        if self.rng.gen_bool(s.decay_positron_probability) {
            // muon decay at rest near the end of the track
            let end = LorentzVector::new(vertex.x + 11.0 * step.x, vertex.y + 11.0 * step.y, vertex.z + 11.0 * step.z, vertex.t);
            let delay = self.exponential(2197.0);
            let positron = builder.trajectory(muon, POSITRON, end);
            let position = self.point_near(&end, 20.0, delay);
            builder.cluster(position, self.rng.gen_range(5.0..50.0), vec![TruthContribution::new(positron, 20.0)]);
        }

        let noise_clusters = self.rng.gen_range(0..=s.max_noise_clusters);
        for _ in 0..noise_clusters {
            let delay = self.rng.gen_range(-20.0..20.0);
            let position = self.point_near(&vertex, s.half_size, delay);
            builder.cluster(position, self.rng.gen_range(0.1..2.0), vec![]);
        }

        let names = if self.rng.gen_bool(s.empty_result_probability) {
            vec![]
        } else {
            vec!["final".to_string()]
        };

        Event {
            run_id,
            event_id,
            trajectories: trajectory_container(builder.trajectories),
            object_containers: vec![ObjectContainer::new("final", builder.objects)],
            algorithm_result: AlgorithmResult::new("CubeRecon", names),
        }
    }

    pub fn generate_events(&mut self, run_id: i32, count: usize) -> Vec<Event> {
        (0..count).map(|i| self.generate(run_id, i as i32)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubecore::data::pdg::MUON;
    use cubecore::{DominantContributor, EventAnalysis, EventContext};

    #[test]
    fn test_same_seed_same_events() {
        let a = EventGenerator::new(GeneratorSettings::default(), 42).generate_events(1, 20);
        let b = EventGenerator::new(GeneratorSettings::default(), 42).generate_events(1, 20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_event_has_a_primary_anti_muon_track() {
        let settings = GeneratorSettings { empty_result_probability: 0.0, ..Default::default() };
        let mut generator = EventGenerator::new(settings, 7);
        for event in generator.generate_events(0, 50) {
            let mut analysis = EventAnalysis::new(EventContext::new(&event, &DominantContributor)).unwrap();
            assert_eq!(analysis.number_of_primary_anti_muon_trajectory(), 1);
            assert_eq!(analysis.set_number_of_primary_anti_muon_object(), 1);
            assert!(analysis.set_vertex().is_ok());
        }
    }

    #[test]
    fn test_decay_positron_descends_from_muon() {
        let settings = GeneratorSettings {
            decay_positron_probability: 1.0,
            neutron_probability: 0.0,
            proton_probability: 0.0,
            pion_probability: 0.0,
            max_noise_clusters: 0,
            empty_result_probability: 0.0,
            ..Default::default()
        };
        let event = EventGenerator::new(settings, 3).generate(0, 0);
        let positron = event.trajectories.values().find(|t| t.pdg_code == POSITRON).unwrap();
        assert_eq!(event.trajectories[&positron.parent_id].pdg_code.abs(), MUON);

        let mut analysis = EventAnalysis::new(EventContext::new(&event, &DominantContributor)).unwrap();
        assert!(analysis.set_first_object().is_err());
    }
}
