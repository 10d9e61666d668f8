use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::histogram::Histogram1D;
use crate::run::RunReport;

/// Writes one row per bin: low edge, center, high edge and count. Under- and
/// overflow follow as two extra rows.
pub fn write_histogram_csv<W: Write>(out: &mut W, histogram: &Histogram1D) -> Result<(), Box<dyn Error>> {
    writeln!(out, "# {}", histogram.title)?;
    writeln!(out, "bin,low,center,high,count")?;
    for (bin, count) in histogram.counts.iter().enumerate() {
        writeln!(
            out,
            "{},{},{},{},{}",
            bin,
            histogram.bin_low_edge(bin),
            histogram.bin_center(bin),
            histogram.bin_low_edge(bin + 1),
            count
        )?;
    }
    writeln!(out, "underflow,,,,{}", histogram.underflow)?;
    writeln!(out, "overflow,,,,{}", histogram.overflow)?;
    Ok(())
}

/// Writes `deltaTNeutron.csv`, `deltaTOther.csv` and `summary.json` into `dir`.
pub fn write_report(dir: &Path, report: &RunReport) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(dir)?;

    for (name, histogram) in [
        ("deltaTNeutron.csv", &report.delta_t_neutron),
        ("deltaTOther.csv", &report.delta_t_other),
    ] {
        let mut writer = BufWriter::new(File::create(dir.join(name))?);
        write_histogram_csv(&mut writer, histogram)?;
        writer.flush()?;
    }

    let mut writer = BufWriter::new(File::create(dir.join("summary.json"))?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_csv_layout() {
        let mut histogram = Histogram1D::new("delta T, other", 2, 0.0, 2.0);
        histogram.fill(0.5);
        histogram.fill(5.0);

        let mut buffer = Vec::new();
        write_histogram_csv(&mut buffer, &histogram).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "# delta T, other");
        assert_eq!(lines[2], "0,0,0.5,1,1");
        assert_eq!(lines[3], "1,1,1.5,2,0");
        assert_eq!(lines[5], "overflow,,,,1");
    }

    #[test]
    fn test_write_report_creates_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("plots");
        let report = RunReport::new(&crate::config::SelectionConfig::default());
        write_report(&out, &report).unwrap();

        assert!(out.join("deltaTNeutron.csv").is_file());
        assert!(out.join("deltaTOther.csv").is_file());
        let summary: serde_json::Value =
            serde_json::from_reader(File::open(out.join("summary.json")).unwrap()).unwrap();
        assert_eq!(summary["tally"]["events_read"], 0);
    }
}
