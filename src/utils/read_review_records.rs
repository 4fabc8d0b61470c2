use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use flate2::read::GzDecoder;
use log::{debug, warn};
use serde_json::{Map, Value};

use crate::constants::{EMOJIS_FIELD, GZIP_EXTENSION, JSON_EXTENSION, MISSING_FIELD_MARKERS};
use crate::models::{ReviewCorpus, ReviewRecord};
use crate::types::RecordIndex;
use crate::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReviewFileFormat {
    Csv,
    Json,
}

impl ReviewFileFormat {
    /// Picks a format from a file name, looking past a trailing `.gz`.
    pub fn from_path(path: &Path) -> (Self, bool) {
        let is_gzip = has_extension(path, GZIP_EXTENSION);
        let inner = if is_gzip {
            path.file_stem().map(Path::new).unwrap_or(path)
        } else {
            path
        };

        let format = if has_extension(inner, JSON_EXTENSION) {
            ReviewFileFormat::Json
        } else {
            ReviewFileFormat::Csv
        };

        (format, is_gzip)
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case(extension))
}

fn is_missing_marker(value: &str) -> bool {
    MISSING_FIELD_MARKERS.contains(&value.trim())
}

fn parse_rating(record_index: RecordIndex, raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if is_missing_marker(raw) {
        return None;
    }

    // Dataframe exports write integer columns with gaps as floats ("5.0")
    let rating = raw.parse::<i64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && value.fract() == 0.0)
            .map(|value| value as i64)
    });

    if rating.is_none() {
        warn!(
            "Record {} has an unreadable rating {:?}; treating it as absent",
            record_index, raw
        );
    }

    rating
}

/// Decodes one CSV cell. Invalid UTF-8 is replaced rather than rejected.
fn decode_cell(record: &ByteRecord, column: Option<usize>) -> Cow<'_, str> {
    column
        .and_then(|idx| record.get(idx))
        .map(String::from_utf8_lossy)
        .unwrap_or_default()
}

/// Reads review records from CSV with a header row. Columns are matched by name and any of
/// them may be absent.
///
/// A row holding bytes that are not valid UTF-8 is kept with `emojis` cleared, its text
/// fields decoded lossily, and the problem recorded in [`ReviewCorpus::malformed_fields`].
pub fn read_review_records_from_csv_reader<R: Read>(reader: R) -> Result<ReviewCorpus, Error> {
    let mut corpus = ReviewCorpus::default();

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();

    let column = |name: &str| headers.iter().position(|h| h.trim() == name);
    let name_column = column("name");
    let category_column = column("category");
    let review_column = column("review");
    let emojis_column = column(EMOJIS_FIELD);
    let rating_column = column("rating");
    let url_column = column("url");

    if emojis_column.is_none() {
        warn!(
            "Review CSV has no `{}` column; every review will contribute no tokens",
            EMOJIS_FIELD
        );
    }

    for (record_index, record) in reader.byte_records().enumerate() {
        let record = record?;

        let undecodable_column = record
            .iter()
            .position(|field| std::str::from_utf8(field).is_err());

        let emojis = match undecodable_column {
            Some(idx) => {
                let err = Error::MalformedField {
                    record_index,
                    field: headers.get(idx).unwrap_or("?").to_string(),
                    found: String::from_utf8_lossy(&record[idx]).into_owned(),
                };
                warn!("Ignoring reaction tokens: {}", err);
                corpus.malformed_fields.push(err);
                None
            }
            None => Some(decode_cell(&record, emojis_column))
                .filter(|value| !is_missing_marker(value))
                .map(|value| value.into_owned()),
        };

        let rating = rating_column
            .and_then(|idx| record.get(idx))
            .and_then(|value| std::str::from_utf8(value).ok())
            .and_then(|value| parse_rating(record_index, value));

        corpus.records.push(ReviewRecord {
            name: decode_cell(&record, name_column).into_owned(),
            category: decode_cell(&record, category_column).into_owned(),
            review: decode_cell(&record, review_column).into_owned(),
            emojis,
            rating,
            url: decode_cell(&record, url_column).into_owned(),
        });
    }

    debug!(
        "Read {} review records from CSV ({} malformed)",
        corpus.len(),
        corpus.malformed_fields.len()
    );

    Ok(corpus)
}

fn json_text(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        Some(Value::String(value)) => value.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn json_rating(record_index: RecordIndex, object: &Map<String, Value>) -> Option<i64> {
    match object.get("rating") {
        Some(Value::Number(number)) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|value| value.fract() == 0.0)
                .map(|value| value as i64)
        }),
        Some(Value::String(raw)) => parse_rating(record_index, raw),
        _ => None,
    }
}

/// Reads the `emojis` value of one JSON record, reporting anything that is neither a string
/// nor a missing value.
fn json_emojis(
    record_index: RecordIndex,
    object: &Map<String, Value>,
) -> Result<Option<String>, Error> {
    match object.get(EMOJIS_FIELD) {
        Some(Value::String(value)) if is_missing_marker(value) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(Value::Null) | None => Ok(None),
        Some(other) => Err(Error::MalformedField {
            record_index,
            field: EMOJIS_FIELD.to_string(),
            found: other.to_string(),
        }),
    }
}

/// Reads review records from a JSON array of objects.
///
/// A record whose `emojis` value has an unexpected shape is kept with `emojis` cleared, and
/// the problem is recorded in [`ReviewCorpus::malformed_fields`]. The same applies to array
/// entries that are not objects at all.
pub fn read_review_records_from_json_str(json: &str) -> Result<ReviewCorpus, Error> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    let mut corpus = ReviewCorpus::default();

    for (record_index, value) in values.into_iter().enumerate() {
        let object = match value {
            Value::Object(object) => object,
            other => {
                let err = Error::MalformedField {
                    record_index,
                    field: "record".to_string(),
                    found: other.to_string(),
                };
                warn!("Skipping review content: {}", err);
                corpus.malformed_fields.push(err);
                corpus.records.push(ReviewRecord::default());
                continue;
            }
        };

        let emojis = match json_emojis(record_index, &object) {
            Ok(emojis) => emojis,
            Err(err) => {
                warn!("Ignoring reaction tokens: {}", err);
                corpus.malformed_fields.push(err);
                None
            }
        };

        corpus.records.push(ReviewRecord {
            name: json_text(&object, "name"),
            category: json_text(&object, "category"),
            review: json_text(&object, "review"),
            emojis,
            rating: json_rating(record_index, &object),
            url: json_text(&object, "url"),
        });
    }

    debug!(
        "Read {} review records from JSON ({} malformed)",
        corpus.len(),
        corpus.malformed_fields.len()
    );

    Ok(corpus)
}

pub fn read_review_records_from_reader<R: Read>(
    mut reader: R,
    format: ReviewFileFormat,
) -> Result<ReviewCorpus, Error> {
    match format {
        ReviewFileFormat::Csv => read_review_records_from_csv_reader(reader),
        ReviewFileFormat::Json => {
            let mut json = String::new();
            reader.read_to_string(&mut json)?;
            read_review_records_from_json_str(&json)
        }
    }
}

/// Reads a review file, choosing CSV or JSON from its extension and decompressing `.gz` files.
pub fn read_review_records_from_path<P: AsRef<Path>>(path: P) -> Result<ReviewCorpus, Error> {
    let path = path.as_ref();
    let (format, is_gzip) = ReviewFileFormat::from_path(path);

    debug!(
        "Reading reviews from {:?} as {:?} (gzip: {})",
        path, format, is_gzip
    );

    let file = BufReader::new(File::open(path)?);

    if is_gzip {
        read_review_records_from_reader(GzDecoder::new(file), format)
    } else {
        read_review_records_from_reader(file, format)
    }
}
