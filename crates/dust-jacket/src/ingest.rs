//! CSV boundary: book rows in, jackets out
//!
//! Numeric fields are parsed and converted here, before any geometry runs, so
//! malformed input is reported separately from canvas precondition failures.

use crate::layout::DustJacket;
use crate::options::{ColumnMapping, JacketOptions, MeasurementSystem};
use crate::types::{JacketError, Result};
use csv::StringRecord;
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::Path;

/// Column written by the BookBuddy export holding `H x W x T unit`
pub const DIMENSIONS_COLUMN: &str = "Dimensions";

pub async fn load_jackets(
    path: impl AsRef<Path>,
    options: &JacketOptions,
) -> Result<Vec<DustJacket>> {
    let path = path.as_ref().to_owned();
    let options = options.clone();

    let contents = tokio::fs::read_to_string(&path).await?;

    let jackets = tokio::task::spawn_blocking(move || parse_jackets(contents.as_bytes(), &options))
        .await??;

    log::info!("Loaded {} jackets from {}", jackets.len(), path.display());
    Ok(jackets)
}

/// Parse every data row of a headed CSV into a jacket
pub fn parse_jackets(input: impl Read, options: &JacketOptions) -> Result<Vec<DustJacket>> {
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader.headers()?.clone();

    let mut jackets = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        jackets.push(DustJacket::from_record(index + 1, &headers, &record, options)?);
    }

    if jackets.is_empty() {
        return Err(JacketError::NoRows);
    }

    Ok(jackets)
}

impl DustJacket {
    /// Build a jacket from one CSV record; `row` is 1-based and only used in
    /// error messages.
    pub fn from_record(
        row: usize,
        headers: &StringRecord,
        record: &StringRecord,
        options: &JacketOptions,
    ) -> Result<Self> {
        let fields: BTreeMap<&str, &str> = headers.iter().zip(record.iter()).collect();
        let columns = &options.columns;

        let measure = |name: &str| -> Result<Option<f32>> {
            match fields.get(name).map(|value| value.trim()) {
                None | Some("") => Ok(None),
                Some(value) => match value.parse::<f32>() {
                    // "NaN" and "inf" parse as f32 but are not measurements
                    Ok(number) if number.is_finite() => Ok(Some(options.units.to_mm(number))),
                    _ => Err(JacketError::InvalidNumber {
                        row,
                        field: name.to_string(),
                        value: value.to_string(),
                    }),
                },
            }
        };
        let required = |name: &str| -> Result<f32> {
            measure(name)?.ok_or_else(|| JacketError::MissingField {
                row,
                field: name.to_string(),
            })
        };

        let book_height_mm = required(columns.height.as_str())?;
        let book_width_mm = required(columns.width.as_str())?;
        let book_thickness_mm = required(columns.thickness.as_str())?;
        let flap_width_mm = match measure(columns.flap_width.as_str())? {
            Some(flap) => flap,
            None => options
                .default_flap_width_mm
                .ok_or_else(|| JacketError::MissingField {
                    row,
                    field: columns.flap_width.clone(),
                })?,
        };

        let measurement_columns = [
            columns.height.as_str(),
            columns.width.as_str(),
            columns.thickness.as_str(),
            columns.flap_width.as_str(),
        ];
        let book_vars = fields
            .iter()
            .filter(|(name, _)| !measurement_columns.contains(*name))
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        Ok(DustJacket::new(
            book_height_mm,
            book_width_mm,
            book_thickness_mm,
            flap_width_mm,
            book_vars,
        ))
    }
}

/// Normalise a BookBuddy export.
///
/// Rows are copied as-is. When a `Dimensions` column is present, height,
/// width and thickness columns (in millimetres) are appended from it unless
/// the export already has them. Returns the number of rows written.
pub fn preprocess(input: impl Read, output: impl Write, columns: &ColumnMapping) -> Result<usize> {
    let mut reader = csv::Reader::from_reader(input);
    let mut writer = csv::Writer::from_writer(output);

    let mut headers = reader.headers()?.clone();
    let dimensions_index = headers.iter().position(|name| name == DIMENSIONS_COLUMN);
    let targets = [&columns.height, &columns.width, &columns.thickness];
    let already_split = targets
        .iter()
        .any(|target| headers.iter().any(|name| name == target.as_str()));

    let split_index = match dimensions_index {
        Some(index) if !already_split => {
            for target in targets {
                headers.push_field(target);
            }
            Some(index)
        }
        Some(_) => {
            log::info!("Export already has measurement columns, leaving dimensions as-is");
            None
        }
        None => None,
    };

    writer.write_record(&headers)?;

    let mut rows = 0;
    for (index, result) in reader.records().enumerate() {
        let mut record = result?;

        if let Some(column) = split_index {
            let raw = record.get(column).unwrap_or_default().to_string();
            match parse_dimensions(&raw) {
                Some((height, width, thickness)) => {
                    for value in [height, width, thickness] {
                        record.push_field(&format_mm(value));
                    }
                }
                None => {
                    log::warn!("Row {}: could not parse dimensions '{}'", index + 1, raw);
                    for _ in targets {
                        record.push_field("");
                    }
                }
            }
        }

        writer.write_record(&record)?;
        rows += 1;
    }

    writer.flush()?;
    Ok(rows)
}

/// Parse `"9.5 x 6.25 x 1.1 in"` into millimetres as `(height, width, thickness)`.
///
/// A missing unit suffix means inches.
pub fn parse_dimensions(text: &str) -> Option<(f32, f32, f32)> {
    let text = text.trim();
    let numbers =
        text.trim_end_matches(|c: char| c.is_alphabetic() || c == '"' || c == '.' || c == ' ');
    let suffix = text[numbers.len()..].trim();

    let units = if suffix.is_empty() {
        MeasurementSystem::Inches
    } else {
        MeasurementSystem::from_suffix(suffix)?
    };

    let values: Vec<f32> = numbers
        .split(['x', 'X', '×'])
        .map(|part| part.trim().parse::<f32>())
        .collect::<std::result::Result<_, _>>()
        .ok()?;

    match values.as_slice() {
        [height, width, thickness] => Some((
            units.to_mm(*height),
            units.to_mm(*width),
            units.to_mm(*thickness),
        )),
        _ => None,
    }
}

fn format_mm(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mm_rounds_to_hundredths() {
        assert_eq!(format_mm(241.3), "241.3");
        assert_eq!(format_mm(27.939999), "27.94");
        assert_eq!(format_mm(150.0), "150");
    }
}
