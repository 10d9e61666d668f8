//! Text dumps of an analysed event, one line per object.

use std::io;
use std::io::Write;

use crate::analysis::event_analysis::EventAnalysis;

impl<'a> EventAnalysis<'a> {
    /// Writes the track and cluster counts followed by every time-sorted object.
    pub fn show_all_objects<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "number of tracks: {}", self.tracks().len())?;
        writeln!(out, "number of clusters: {}", self.clusters().len())?;
        for summary in self.object_summaries() {
            writeln!(out, "{}", summary)?;
        }
        Ok(())
    }

    pub fn show_first_object<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.first_object_summary() {
            Some(summary) => writeln!(out, "first object, {}", summary),
            None => writeln!(out, "no first object candidate"),
        }
    }

    pub fn show_vertex<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.vertex() {
            Some(vertex) => writeln!(out, "vertex: {}", vertex),
            None => writeln!(out, "no vertex candidate"),
        }
    }
}
