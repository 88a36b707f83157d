use crate::domain::model::Building;
use crate::utils::error::{Result, SkylineError};

/// How building lines are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordFormat {
    pub delimiter: u8,
    pub trim: bool,
    /// Reject buildings with `left >= right` or a negative height instead of
    /// passing them through.
    pub strict: bool,
}

impl Default for RecordFormat {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            strict: false,
        }
    }
}

const FIELDS_PER_RECORD: usize = 3;

pub fn parse_buildings(data: &[u8], format: RecordFormat) -> Result<Vec<Building>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(format.delimiter)
        .trim(if format.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(data);

    let mut buildings = Vec::new();
    for record in reader.records() {
        let record = record.map_err(invalid_utf8_as_record_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.len() != FIELDS_PER_RECORD {
            return Err(SkylineError::InvalidRecord {
                line,
                message: format!(
                    "expected {} fields, found {}",
                    FIELDS_PER_RECORD,
                    record.len()
                ),
            });
        }

        let building: Building =
            record
                .deserialize(None)
                .map_err(|e| SkylineError::InvalidRecord {
                    line,
                    message: e.to_string(),
                })?;

        if !building.is_well_formed() {
            if format.strict {
                return Err(SkylineError::InvalidRecord {
                    line,
                    message: format!(
                        "building {},{},{} needs left < right and a non-negative height",
                        building.left, building.right, building.height
                    ),
                });
            }
            tracing::warn!(
                "Line {}: degenerate building {:?} processed as given",
                line,
                building
            );
        }

        buildings.push(building);
    }

    tracing::debug!("Parsed {} buildings", buildings.len());
    Ok(buildings)
}

/// Bytes that are not UTF-8 belong to one line, so report them like any other
/// malformed field.
fn invalid_utf8_as_record_error(err: csv::Error) -> SkylineError {
    match err.kind() {
        csv::ErrorKind::Utf8 { pos, err: utf8 } => SkylineError::InvalidRecord {
            line: pos.as_ref().map(|p| p.line()).unwrap_or_default(),
            message: format!("field {} is not valid UTF-8", utf8.field() + 1),
        },
        _ => SkylineError::CsvError(err),
    }
}
