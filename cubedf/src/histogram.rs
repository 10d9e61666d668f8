use serde::{Deserialize, Serialize};

use crate::config::HistogramConfig;

/// Fixed-width 1D histogram with under- and overflow counters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Histogram1D {
    pub title: String,
    pub low: f64,
    pub high: f64,
    pub counts: Vec<u64>,
    pub underflow: u64,
    pub overflow: u64,
    sum: f64,
    entries: u64,
}

impl Histogram1D {
    /// Creates an empty histogram with `bins` equal bins on [low, high).
    ///
    /// # Examples
    ///
    /// ```
    /// use cubedf::histogram::Histogram1D;
    ///
    /// let mut h = Histogram1D::new("delta T, neutron", 100, -10.0, 10.0);
    /// h.fill(0.05);
    /// assert_eq!(h.counts[50], 1);
    /// ```
    pub fn new(title: &str, bins: usize, low: f64, high: f64) -> Self {
        Histogram1D {
            title: title.to_string(),
            low,
            high,
            counts: vec![0; bins],
            underflow: 0,
            overflow: 0,
            sum: 0.0,
            entries: 0,
        }
    }

    pub fn from_config(title: &str, config: &HistogramConfig) -> Self {
        Histogram1D::new(title, config.bins, config.low, config.high)
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn bin_width(&self) -> f64 {
        (self.high - self.low) / self.bins() as f64
    }

    pub fn bin_low_edge(&self, bin: usize) -> f64 {
        self.low + bin as f64 * self.bin_width()
    }

    pub fn bin_center(&self, bin: usize) -> f64 {
        self.bin_low_edge(bin) + 0.5 * self.bin_width()
    }

    /// Bin of `value`, `None` outside [low, high) and for NaN.
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        if !(value >= self.low && value < self.high) {
            return None;
        }
        let last = self.bins().checked_sub(1)?;
        let bin = ((value - self.low) / self.bin_width()) as usize;
        // rounding at the upper edge
        Some(bin.min(last))
    }

    pub fn fill(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.entries += 1;
        match self.find_bin(value) {
            Some(bin) => {
                self.counts[bin] += 1;
                self.sum += value;
            }
            None if value < self.low => self.underflow += 1,
            None => self.overflow += 1,
        }
    }

    /// Number of fills, including under- and overflow.
    pub fn entries(&self) -> u64 {
        self.entries
    }

    /// Mean of the in-range fills.
    pub fn mean(&self) -> Option<f64> {
        let in_range: u64 = self.counts.iter().sum();
        if in_range == 0 {
            None
        } else {
            Some(self.sum / in_range as f64)
        }
    }
}
