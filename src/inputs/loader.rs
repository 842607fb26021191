//! Load scenario configurations (JSON) and guide series (CSV)

use std::fs::File;
use std::io::{BufReader, Read};

use log::info;

use super::config::{Market, MarketInputs, ModelInputs};
use crate::error::{ModelError, Result};

/// Load a scenario configuration from a JSON file
pub fn load_inputs<P: AsRef<std::path::Path>>(path: P) -> Result<ModelInputs> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let inputs = inputs_from_reader(BufReader::new(file))?;
    info!("Loaded scenario configuration from {} (horizon {})", path.display(), inputs.horizon);
    Ok(inputs)
}

/// Parse a scenario configuration from any JSON reader
pub fn inputs_from_reader<R: Read>(reader: R) -> Result<ModelInputs> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read guide series from CSV into `markets`.
///
/// Each header names a guided market variable (`bbb_spread`, `vix`, ...);
/// a `quarter` column, if present, is ignored. A column's guide runs until
/// its first empty cell, so guides of different lengths can share a file.
/// Columns not in the file keep their existing guide.
pub fn load_guides<R: Read>(reader: R, markets: &mut MarketInputs) -> Result<()> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut columns: Vec<(usize, Market)> = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        if header.eq_ignore_ascii_case("quarter") {
            continue;
        }
        let market = Market::from_name(header)
            .ok_or_else(|| ModelError::Parse(format!("unknown guide column '{}'", header)))?;
        columns.push((idx, market));
    }

    let mut guides: Vec<Vec<f64>> = vec![Vec::new(); columns.len()];
    let mut ended = vec![false; columns.len()];

    for (row_number, result) in rdr.records().enumerate() {
        let record = result?;
        for (col, &(idx, market)) in columns.iter().enumerate() {
            let cell = record.get(idx).unwrap_or("");
            if cell.is_empty() {
                ended[col] = true;
                continue;
            }
            if ended[col] {
                return Err(ModelError::Parse(format!(
                    "guide for {} has a gap before row {}",
                    market.name(),
                    row_number + 1
                )));
            }
            let value: f64 = cell.parse().map_err(|_| {
                ModelError::Parse(format!(
                    "invalid value '{}' for {} in row {}",
                    cell,
                    market.name(),
                    row_number + 1
                ))
            })?;
            guides[col].push(value);
        }
    }

    for ((_, market), guide) in columns.into_iter().zip(guides) {
        info!("Loaded {}-quarter guide for {}", guide.len(), market.name());
        markets.get_mut(market).guide = guide;
    }

    Ok(())
}
