//! CSV export of value trajectories.

use anyhow::{Context, Result};
use navlab_core::strategy::{StrategyComparison, ValuePoint};
use std::path::Path;

/// One strategy's trajectory as `date,value` CSV.
pub fn trajectory_csv(points: &[ValuePoint]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["date", "value"])?;
    for p in points {
        wtr.write_record([&p.date.to_string(), &format!("{:.2}", p.value)])?;
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// All three comparison curves in long form: `strategy,date,value`.
pub fn comparison_csv(cmp: &StrategyComparison) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["strategy", "date", "value"])?;
    for (name, points) in [("sip", &cmp.sip), ("lumpsum", &cmp.lumpsum), ("swp", &cmp.swp)] {
        for p in points {
            wtr.write_record([
                name,
                p.date.to_string().as_str(),
                format!("{:.2}", p.value).as_str(),
            ])?;
        }
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
