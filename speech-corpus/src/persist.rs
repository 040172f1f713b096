//! Persisted corpus forms.
//!
//! The same seven columns are written as CSV (row text) and as Parquet
//! (columnar). Per-year shards use the Parquet form and are named
//! `<year>.parquet`.

use crate::sentence::SentenceRecord;
use crate::{Corpus, CorpusError, CorpusResult};
use parquet::data_type::{ByteArray, ByteArrayType, Int64Type};
use parquet::file::properties::WriterProperties;
use parquet::file::reader::{FileReader, SerializedFileReader};
use parquet::file::writer::{SerializedFileWriter, SerializedRowGroupWriter};
use parquet::record::Field;
use parquet::schema::parser::parse_message_type;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

const SENTENCE_SCHEMA: &str = "
message sentence_record {
    REQUIRED INT64 sentence_id;
    REQUIRED INT64 year;
    OPTIONAL BINARY section_title (UTF8);
    REQUIRED INT64 sentence_order;
    REQUIRED BINARY sentence_text (UTF8);
    REQUIRED INT64 word_count;
    REQUIRED INT64 char_count;
}
";

pub fn write_csv(path: &Path, records: &[SentenceRecord]) -> CorpusResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|e| CorpusError::io(path, e))?;
    debug!(path = %path.display(), rows = records.len(), "wrote csv corpus");
    Ok(())
}

pub fn read_csv(path: &Path) -> CorpusResult<Vec<SentenceRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

fn schema_error(path: &Path, message: impl Into<String>) -> CorpusError {
    CorpusError::Schema {
        path: path.display().to_string(),
        message: message.into(),
    }
}

fn write_int64_column<W: Write + Send>(
    path: &Path,
    row_group: &mut SerializedRowGroupWriter<'_, W>,
    values: &[i64],
) -> CorpusResult<()> {
    let mut column = row_group
        .next_column()?
        .ok_or_else(|| schema_error(path, "schema has fewer columns than the writer"))?;
    column.typed::<Int64Type>().write_batch(values, None, None)?;
    column.close()?;
    Ok(())
}

/// Writes a UTF8 column. `optional` columns carry definition levels so
/// that `None` values are stored as nulls.
fn write_text_column<W: Write + Send>(
    path: &Path,
    row_group: &mut SerializedRowGroupWriter<'_, W>,
    values: &[Option<&str>],
    optional: bool,
) -> CorpusResult<()> {
    let mut column = row_group
        .next_column()?
        .ok_or_else(|| schema_error(path, "schema has fewer columns than the writer"))?;

    let present: Vec<ByteArray> = values.iter().flatten().map(|v| ByteArray::from(*v)).collect();
    if optional {
        let definition_levels: Vec<i16> = values.iter().map(|v| i16::from(v.is_some())).collect();
        column
            .typed::<ByteArrayType>()
            .write_batch(&present, Some(&definition_levels[..]), None)?;
    } else {
        if present.len() != values.len() {
            return Err(schema_error(path, "null value in a required text column"));
        }
        column.typed::<ByteArrayType>().write_batch(&present, None, None)?;
    }
    column.close()?;
    Ok(())
}

pub fn write_parquet(path: &Path, records: &[SentenceRecord]) -> CorpusResult<()> {
    let schema = Arc::new(parse_message_type(SENTENCE_SCHEMA)?);
    let props = Arc::new(WriterProperties::builder().build());
    let file = File::create(path).map_err(|e| CorpusError::io(path, e))?;
    let mut writer = SerializedFileWriter::new(file, schema, props)?;

    if !records.is_empty() {
        let ints = |f: fn(&SentenceRecord) -> i64| records.iter().map(f).collect::<Vec<i64>>();
        let sections: Vec<Option<&str>> = records.iter().map(|r| r.section_title.as_deref()).collect();
        let texts: Vec<Option<&str>> = records.iter().map(|r| Some(r.sentence_text.as_str())).collect();

        let mut row_group = writer.next_row_group()?;
        write_int64_column(path, &mut row_group, &ints(|r| r.sentence_id as i64))?;
        write_int64_column(path, &mut row_group, &ints(|r| i64::from(r.year)))?;
        write_text_column(path, &mut row_group, &sections, true)?;
        write_int64_column(path, &mut row_group, &ints(|r| r.sentence_order as i64))?;
        write_text_column(path, &mut row_group, &texts, false)?;
        write_int64_column(path, &mut row_group, &ints(|r| r.word_count as i64))?;
        write_int64_column(path, &mut row_group, &ints(|r| r.char_count as i64))?;
        row_group.close()?;
    }

    writer.close()?;
    debug!(path = %path.display(), rows = records.len(), "wrote parquet corpus");
    Ok(())
}

#[derive(Default)]
struct RowFields {
    sentence_id: Option<i64>,
    year: Option<i64>,
    section_title: Option<String>,
    sentence_order: Option<i64>,
    sentence_text: Option<String>,
    word_count: Option<i64>,
    char_count: Option<i64>,
}

impl RowFields {
    fn into_record(self, path: &Path) -> CorpusResult<SentenceRecord> {
        let required = |value: Option<i64>, column: &str| {
            value.ok_or_else(|| schema_error(path, format!("missing column {}", column)))
        };
        let unsigned = |value: Option<i64>, column: &str| {
            let value = required(value, column)?;
            u64::try_from(value)
                .map_err(|_| schema_error(path, format!("negative value {} in {}", value, column)))
        };

        let year = required(self.year, "year")?;
        Ok(SentenceRecord {
            sentence_id: unsigned(self.sentence_id, "sentence_id")?,
            year: i32::try_from(year)
                .map_err(|_| schema_error(path, format!("year {} out of range", year)))?,
            section_title: self.section_title,
            sentence_order: unsigned(self.sentence_order, "sentence_order")?,
            sentence_text: self
                .sentence_text
                .ok_or_else(|| schema_error(path, "missing column sentence_text"))?,
            word_count: unsigned(self.word_count, "word_count")?,
            char_count: unsigned(self.char_count, "char_count")?,
        })
    }
}

pub fn read_parquet(path: &Path) -> CorpusResult<Vec<SentenceRecord>> {
    let file = File::open(path).map_err(|e| CorpusError::io(path, e))?;
    let reader = SerializedFileReader::new(file)?;

    let mut records = Vec::new();
    for row in reader.get_row_iter(None)? {
        let row = row?;
        let mut fields = RowFields::default();
        for (name, field) in row.get_column_iter() {
            match (name.as_str(), field) {
                ("sentence_id", Field::Long(v)) => fields.sentence_id = Some(*v),
                ("year", Field::Long(v)) => fields.year = Some(*v),
                ("section_title", Field::Str(v)) => fields.section_title = Some(v.clone()),
                ("section_title", Field::Null) => fields.section_title = None,
                ("sentence_order", Field::Long(v)) => fields.sentence_order = Some(*v),
                ("sentence_text", Field::Str(v)) => fields.sentence_text = Some(v.clone()),
                ("word_count", Field::Long(v)) => fields.word_count = Some(*v),
                ("char_count", Field::Long(v)) => fields.char_count = Some(*v),
                (other, value) => {
                    return Err(schema_error(
                        path,
                        format!("unexpected value {:?} in column {}", value, other),
                    ))
                }
            }
        }
        records.push(fields.into_record(path)?);
    }
    Ok(records)
}

/// `<dir>/<year>.parquet`
pub fn shard_path(dir: &Path, year: i32) -> PathBuf {
    dir.join(format!("{}.parquet", year))
}

/// Writes one Parquet shard per year present in the corpus. Shards in
/// `dir` for years the corpus no longer has are removed, so the directory
/// always reloads to exactly `corpus`.
pub fn write_shards(dir: &Path, corpus: &Corpus) -> CorpusResult<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| CorpusError::io(dir, e))?;

    let years = corpus.years();
    for stale in shard_years(dir)?.into_iter().filter(|y| !years.contains(y)) {
        let path = shard_path(dir, stale);
        fs::remove_file(&path).map_err(|e| CorpusError::io(&path, e))?;
        info!(year = stale, path = %path.display(), "removed stale shard");
    }

    let mut written = Vec::new();
    for year in years {
        let path = shard_path(dir, year);
        write_parquet(&path, corpus.year(year))?;
        written.push(path);
    }
    info!(directory = %dir.display(), shards = written.len(), "wrote per-year shards");
    Ok(written)
}

/// Loads the shard for `year`. A missing shard is reported and yields
/// `None`.
pub fn read_shard(dir: &Path, year: i32) -> CorpusResult<Option<Vec<SentenceRecord>>> {
    let path = shard_path(dir, year);
    if !path.exists() {
        warn!(year, path = %path.display(), "shard not found, skipping year");
        return Ok(None);
    }
    read_parquet(&path).map(Some)
}

/// Years that have a shard in `dir`, ascending.
pub fn shard_years(dir: &Path) -> CorpusResult<Vec<i32>> {
    let mut years = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| CorpusError::io(dir, e))? {
        let path = entry.map_err(|e| CorpusError::io(dir, e))?.path();
        if path.extension().map_or(false, |e| e == "parquet") {
            if let Some(year) = crate::document::year_from_path(&path) {
                years.push(year);
            }
        }
    }
    years.sort_unstable();
    Ok(years)
}

/// Concatenates every shard in `dir` in year order.
pub fn load_shards(dir: &Path) -> CorpusResult<Corpus> {
    let years = shard_years(dir)?;
    let mut records = Vec::new();
    for &year in &years {
        records.extend(read_parquet(&shard_path(dir, year))?);
    }
    info!(directory = %dir.display(), shards = years.len(), rows = records.len(), "loaded shards");
    Ok(Corpus::from_records(records))
}

/// Writes the combined CSV and Parquet files into `dir` and returns their
/// paths.
pub fn write_corpus(
    dir: &Path,
    corpus: &Corpus,
    csv_name: &str,
    parquet_name: &str,
) -> CorpusResult<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir).map_err(|e| CorpusError::io(dir, e))?;
    let csv_path = dir.join(csv_name);
    let parquet_path = dir.join(parquet_name);
    write_csv(&csv_path, corpus.records())?;
    info!(path = %csv_path.display(), "csv saved");
    write_parquet(&parquet_path, corpus.records())?;
    info!(path = %parquet_path.display(), "parquet saved");
    Ok((csv_path, parquet_path))
}
