use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::model::{IrisDataset, IrisRecord, Species};

// ---------------------------------------------------------------------------
// Bundled dataset
// ---------------------------------------------------------------------------

/// The canonical 150-row Iris table (UCI variant), compiled into the binary.
const IRIS_CSV: &str = include_str!("../../assets/iris.csv");

/// One CSV row as it appears in the asset.
#[derive(Debug, Deserialize)]
struct RawRecord {
    sepal_length: f64,
    sepal_width: f64,
    petal_length: f64,
    petal_width: f64,
    species: String,
}

/// Load the bundled Iris dataset.
///
/// The asset is a compile-time constant, so a failure here means the asset
/// itself is broken; the error context pinpoints the offending row.
pub fn load_bundled() -> Result<IrisDataset> {
    parse_csv(IRIS_CSV).context("parsing bundled iris.csv")
}

fn parse_csv(text: &str) -> Result<IrisDataset> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut records = Vec::new();

    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;

        let species: Species = raw
            .species
            .parse()
            .with_context(|| format!("CSV row {row_no}"))?;

        let values = [
            raw.sepal_length,
            raw.sepal_width,
            raw.petal_length,
            raw.petal_width,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            bail!("CSV row {row_no}: non-finite feature value");
        }

        records.push(IrisRecord { values, species });
    }

    if records.is_empty() {
        bail!("dataset asset contains no records");
    }

    Ok(IrisDataset::from_records(records))
}
