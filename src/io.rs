//! Delimited text files for routes and fitted pages
//!
//! Both formats are headerless, one record per line:
//!
//! - coordinate files: `x,y`
//! - result files: `centre_x,centre_y,page_id,landscape,scale`, where
//!   `landscape` is `true` for landscape pages and `false` for portrait ones
//!
//! The delimiter is configurable for both. Fields are trimmed and blank
//! lines are skipped when reading.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};

use crate::cluster::{Coordinate, CoordinateList, Orientation, Page};
use crate::error::{PageFitError, Result};

pub const DEFAULT_DELIMITER: u8 = b',';

/// One line of a result file
#[derive(Debug, Clone, PartialEq)]
pub struct PageRecord {
    pub centre: Coordinate,
    pub page_id: String,
    pub orientation: Orientation,
    pub scale: f64,
}

impl From<&Page> for PageRecord {
    fn from(page: &Page) -> Self {
        PageRecord {
            centre: page.centre(),
            page_id: page.spec().page_id().to_string(),
            orientation: page.orientation(),
            scale: page.spec().scale(),
        }
    }
}

/// Reads a route from delimited `x,y` lines
///
/// # Errors
///
/// Returns [`PageFitError::Parse`] naming the line of the first record that
/// does not hold exactly two numbers
pub fn read_coordinates<R: Read>(reader: R, delimiter: u8) -> Result<CoordinateList> {
    let mut reader = reader_builder(delimiter).from_reader(reader);
    let mut coordinates = CoordinateList::new();

    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        let line = line_of(&record);
        expect_fields(&record, 2, line)?;

        let x = parse_number(&record[0], line)?;
        let y = parse_number(&record[1], line)?;
        coordinates.push(Coordinate([x, y]));
    }

    Ok(coordinates)
}

/// Writes a route as delimited `x,y` lines
///
/// Numbers use the shortest representation that parses back to the same value.
pub fn write_coordinates<W: Write>(
    writer: W,
    coordinates: &[Coordinate],
    delimiter: u8,
) -> Result<()> {
    let mut writer = writer_builder(delimiter).from_writer(writer);
    for c in coordinates {
        writer.write_record([c.x().to_string(), c.y().to_string()])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes fitted pages in result order
pub fn write_pages<W: Write>(writer: W, pages: &[Page], delimiter: u8) -> Result<()> {
    let mut writer = writer_builder(delimiter).from_writer(writer);
    for record in pages.iter().map(PageRecord::from) {
        writer.write_record([
            record.centre.x().to_string(),
            record.centre.y().to_string(),
            record.page_id,
            record.orientation.to_string(),
            record.scale.to_string(),
        ])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Reads a result file written by [`write_pages`]
pub fn read_pages<R: Read>(reader: R, delimiter: u8) -> Result<Vec<PageRecord>> {
    let mut reader = reader_builder(delimiter).from_reader(reader);
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        let line = line_of(&record);
        expect_fields(&record, 5, line)?;

        let orientation = record[3]
            .parse::<Orientation>()
            .map_err(|reason| PageFitError::Parse { line, reason })?;
        records.push(PageRecord {
            centre: Coordinate([
                parse_number(&record[0], line)?,
                parse_number(&record[1], line)?,
            ]),
            page_id: record[2].to_string(),
            orientation,
            scale: parse_number(&record[4], line)?,
        });
    }

    Ok(records)
}

pub fn load_coordinates(path: &Path, delimiter: u8) -> Result<CoordinateList> {
    let file = File::open(path).map_err(|e| PageFitError::io(path, e))?;
    read_coordinates(file, delimiter)
}

pub fn save_coordinates(path: &Path, coordinates: &[Coordinate], delimiter: u8) -> Result<()> {
    let file = File::create(path).map_err(|e| PageFitError::io(path, e))?;
    write_coordinates(file, coordinates, delimiter)
}

pub fn load_pages(path: &Path, delimiter: u8) -> Result<Vec<PageRecord>> {
    let file = File::open(path).map_err(|e| PageFitError::io(path, e))?;
    read_pages(file, delimiter)
}

pub fn save_pages(path: &Path, pages: &[Page], delimiter: u8) -> Result<()> {
    let file = File::create(path).map_err(|e| PageFitError::io(path, e))?;
    write_pages(file, pages, delimiter)
}

fn reader_builder(delimiter: u8) -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All);
    builder
}

fn writer_builder(delimiter: u8) -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .delimiter(delimiter)
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'));
    builder
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

fn expect_fields(record: &StringRecord, expected: usize, line: u64) -> Result<()> {
    if record.len() != expected {
        return Err(PageFitError::Parse {
            line,
            reason: format!("expected {expected} fields, found {}", record.len()),
        });
    }
    Ok(())
}

fn parse_number(field: &str, line: u64) -> Result<f64> {
    field.parse::<f64>().map_err(|e| PageFitError::Parse {
        line,
        reason: format!("invalid number {field:?}: {e}"),
    })
}
