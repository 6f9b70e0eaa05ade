//! CSV export of hold thresholds

use std::{io, path::Path};

use serde::Serialize;

use crate::{Result, analysis::HoldThresholds};

#[derive(Debug, Serialize)]
struct ThresholdRecord {
    i: u32,
    j: u32,
    hold_at: u32,
}

/// Write `i,j,hold_at` rows, with a header, to any writer.
pub fn write_thresholds<W: io::Write>(writer: W, thresholds: &HoldThresholds) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for (i, j, hold_at) in thresholds.iter() {
        writer.serialize(ThresholdRecord { i, j, hold_at })?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the threshold grid to a CSV file at `path`.
pub fn write_thresholds_csv<P: AsRef<Path>>(path: P, thresholds: &HoldThresholds) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|source| crate::Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    write_thresholds(file, thresholds)?;
    log::info!("wrote hold thresholds to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analysis::hold_thresholds, solver::Solver};

    #[test]
    fn writes_header_and_one_row_per_slice() {
        let mut solver = Solver::piglet(2).unwrap();
        solver.solve(1e-9, 1_000).unwrap();
        let thresholds = hold_thresholds(&solver).unwrap();

        let mut buffer = Vec::new();
        write_thresholds(&mut buffer, &thresholds).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "i,j,hold_at");
        assert_eq!(lines.len(), 1 + 4);
        assert!(lines[1].starts_with("0,0,"));
    }
}
