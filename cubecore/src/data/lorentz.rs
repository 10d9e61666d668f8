use std::fmt;
use std::fmt::Formatter;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A four-position: spatial coordinates and time.
///
/// # Description
///
/// Used for object positions, track states and the reconstructed vertex.
/// Units follow the input files (mm and ns for the simulated cube detector).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LorentzVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub t: f64,
}

impl LorentzVector {
    /// Creates a new `LorentzVector`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubecore::data::lorentz::LorentzVector;
    ///
    /// let position = LorentzVector::new(1.0, 2.0, 3.0, 0.5);
    /// assert_eq!(position.t, 0.5);
    /// ```
    pub fn new(x: f64, y: f64, z: f64, t: f64) -> Self {
        LorentzVector { x, y, z, t }
    }

    /// True when all three spatial coordinates are exactly zero, time is ignored.
    pub fn is_spatial_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl fmt::Display for LorentzVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", [self.x, self.y, self.z, self.t].iter().join(", "))
    }
}
