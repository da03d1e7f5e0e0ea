//! Flat-file outputs: the raw response dump and the two CSV tables.

use crate::error::CliError;
use chrono::NaiveDate;
use pipeline::MenuReport;
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const RAW_DUMP_FILE: &str = "familymenu_raw.txt";
pub const MENU_CSV_FILE: &str = "menu.csv";
pub const EXCLUDED_CSV_FILE: &str = "excluded.csv";

const HEADER: [&str; 3] = ["Date", "DayOfWeek", "RecipeName"];

/// Output file locations, all inside one directory.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub raw: PathBuf,
    pub menu_csv: PathBuf,
    pub excluded_csv: PathBuf,
}

impl OutputPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            raw: dir.join(RAW_DUMP_FILE),
            menu_csv: dir.join(MENU_CSV_FILE),
            excluded_csv: dir.join(EXCLUDED_CSV_FILE),
        }
    }
}

/// Save the response body exactly as received.
pub fn write_raw(path: &Path, raw: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(CliError::output(parent))?;
    }
    fs::write(path, raw).map_err(CliError::output(path))
}

/// One row per kept item, in report order.
pub fn kept_rows(report: &MenuReport) -> Vec<[String; 3]> {
    report
        .days
        .iter()
        .flat_map(|day| day.kept.iter().map(move |name| row(day.date, name)))
        .collect()
}

/// One row per excluded item, deduplicated and sorted per day.
pub fn excluded_rows(report: &MenuReport) -> Vec<[String; 3]> {
    report
        .days
        .iter()
        .flat_map(|day| {
            day.excluded_sorted()
                .into_iter()
                .map(move |name| row(day.date, &name))
        })
        .collect()
}

fn row(date: NaiveDate, name: &str) -> [String; 3] {
    [
        date.format("%Y-%m-%d").to_string(),
        date.format("%A").to_string(),
        name.to_string(),
    ]
}

/// Write both CSV tables for a report.
pub fn write_report(paths: &OutputPaths, report: &MenuReport) -> Result<(), CliError> {
    write_csv(&paths.menu_csv, &kept_rows(report))?;
    write_csv(&paths.excluded_csv, &excluded_rows(report))
}

/// Write a header plus rows, replacing any existing file.
pub fn write_csv(path: &Path, rows: &[[String; 3]]) -> Result<(), CliError> {
    let file = File::create(path).map_err(CliError::output(path))?;
    let mut writer = BufWriter::new(file);
    write_rows(&mut writer, rows)
        .and_then(|_| writer.flush())
        .map_err(CliError::output(path))
}

fn write_rows(writer: &mut impl Write, rows: &[[String; 3]]) -> std::io::Result<()> {
    writeln!(writer, "{}", HEADER.join(","))?;
    for fields in rows {
        let line: Vec<Cow<str>> = fields.iter().map(|f| csv_field(f)).collect();
        writeln!(writer, "{}", line.join(","))?;
    }
    Ok(())
}

/// Quote a field when it holds a delimiter, quote or line break.
pub fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
