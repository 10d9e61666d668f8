//! Association of reconstructed objects with the true trajectory that produced them.

use crate::data::recon::ReconObject;

/// Resolves a reconstructed object to the id of its main trajectory, the true
/// trajectory judged to dominate the object. `None` when nothing matches.
pub trait MainTrajectory {
    fn main_trajectory(&self, object: &ReconObject) -> Option<i32>;
}

/// Picks the trajectory with the largest summed energy among an object's truth
/// contributions. On equal energy the trajectory seen first wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct DominantContributor;

impl MainTrajectory for DominantContributor {
    fn main_trajectory(&self, object: &ReconObject) -> Option<i32> {
        // keep first-seen order so ties resolve deterministically
        let mut summed: Vec<(i32, f64)> = Vec::new();
        for contribution in object.contributions() {
            match summed.iter_mut().find(|(id, _)| *id == contribution.trajectory_id) {
                Some((_, energy)) => *energy += contribution.energy,
                None => summed.push((contribution.trajectory_id, contribution.energy)),
            }
        }

        let mut best: Option<(i32, f64)> = None;
        for (id, energy) in summed {
            match best {
                Some((_, best_energy)) if energy <= best_energy => {}
                _ => best = Some((id, energy)),
            }
        }
        best.map(|(id, _)| id)
    }
}
