//! Reading and writing the labelled ingredient dataset (CSV).
//!
//! The dataset has one row per phrase with the columns
//! `index,input,name,qty,range_end,unit,comment`. The `index` column is
//! optional; every other column must be present in the header.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::StringRecord;
use ingredient_tagger_core::Record;

use crate::error::{DataError, Result};

/// Columns every labelled data file must have.
pub const REQUIRED_COLUMNS: &[&str] = &["input", "name", "qty", "range_end", "unit", "comment"];

/// Positions of the required columns within a row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    input: usize,
    name: usize,
    qty: usize,
    range_end: usize,
    unit: usize,
    comment: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let position = |column: &str| headers.iter().position(|h| h == column);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| position(column).is_none())
            .map(|column| column.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DataError::InvalidHeader { missing });
        }

        let index = |column: &str| position(column).unwrap_or_default();
        Ok(Self {
            input: index("input"),
            name: index("name"),
            qty: index("qty"),
            range_end: index("range_end"),
            unit: index("unit"),
            comment: index("comment"),
        })
    }

    fn parse(&self, row: &StringRecord) -> Result<Record> {
        let text = |idx: usize| row.get(idx).unwrap_or_default().to_string();
        let number = |idx: usize, column: &'static str| -> Result<f64> {
            let value = row.get(idx).unwrap_or_default().trim();
            if value.is_empty() {
                return Ok(0.0);
            }
            value.parse().map_err(|_| DataError::InvalidNumber {
                line: row.position().map_or(0, |p| p.line()),
                column,
                value: value.to_string(),
            })
        };

        Ok(Record {
            input: text(self.input),
            name: text(self.name),
            qty: number(self.qty, "qty")?,
            range_end: number(self.range_end, "range_end")?,
            unit: text(self.unit),
            comment: text(self.comment),
        })
    }
}

/// Streams [`Record`]s out of a labelled data CSV.
///
/// The header is checked when the first row is requested. A header error
/// or a malformed row is yielded once, after which the reader is exhausted.
pub struct Reader<R> {
    inner: csv::Reader<R>,
    columns: Option<ColumnIndex>,
    done: bool,
}

impl Reader<File> {
    /// Open a labelled data file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: io::Read> Reader<R> {
    pub fn new(rdr: R) -> Self {
        Self {
            inner: csv::ReaderBuilder::new().flexible(true).from_reader(rdr),
            columns: None,
            done: false,
        }
    }

    fn next_record(&mut self) -> Result<Option<Record>> {
        let columns = match self.columns {
            Some(columns) => columns,
            None => {
                let columns = ColumnIndex::from_headers(self.inner.headers()?)?;
                self.columns = Some(columns);
                columns
            }
        };

        let mut row = StringRecord::new();
        if !self.inner.read_record(&mut row)? {
            return Ok(None);
        }
        columns.parse(&row).map(Some)
    }
}

impl<R: io::Read> Iterator for Reader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let next = self.next_record();
        if !matches!(next, Ok(Some(_))) {
            self.done = true;
        }
        next.transpose()
    }
}

/// Writes [`Record`]s back out as a labelled data CSV.
///
/// The header `input,name,qty,range_end,unit,comment` is written on
/// construction. Numbers always carry a decimal point ("4.0").
pub struct Writer<W: io::Write> {
    inner: csv::Writer<W>,
}

impl<W: io::Write> Writer<W> {
    pub fn new(wtr: W) -> Result<Self> {
        let mut inner = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(wtr);
        inner.write_record(REQUIRED_COLUMNS)?;
        Ok(Self { inner })
    }

    pub fn write_row(&mut self, record: &Record) -> Result<()> {
        let qty = format_number(record.qty);
        let range_end = format_number(record.range_end);
        self.inner.write_record([
            record.input.as_str(),
            record.name.as_str(),
            qty.as_str(),
            range_end.as_str(),
            record.unit.as_str(),
            record.comment.as_str(),
        ])?;
        Ok(())
    }

    pub fn write_rows<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        for record in records {
            self.write_row(record)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| DataError::Io(e.into_error()))
    }
}

fn format_number(value: f64) -> String {
    format!("{value:?}")
}
