use anyhow::{bail, Result};
use csv::{ReaderBuilder, WriterBuilder};
use geocsv_core::entities::{Record, Table};
use std::{fs::File, io, path::Path};

/// Reads a table with a header row.
///
/// Rows shorter than the header are padded with empty cells,
/// rows with additional fields are rejected.
pub fn read_table<R: io::Read>(reader: R, delimiter: u8) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);
    let mut table = Table::new(reader.headers()?);
    for result in reader.records() {
        let record = result?;
        if record.len() > table.columns().len() {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            bail!(
                "Line {line} has {} fields, but the header only has {}",
                record.len(),
                table.columns().len()
            );
        }
        table.push(record.iter().collect::<Record>());
    }
    Ok(table)
}

pub fn read_table_from_file<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Table> {
    read_table(File::open(path)?, delimiter)
}

pub fn write_table<W: io::Write>(writer: W, delimiter: u8, table: &Table) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_writer(writer);
    writer.write_record(table.columns())?;
    for record in table.records() {
        writer.write_record(record.values())?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_table_to_file<P: AsRef<Path>>(path: P, delimiter: u8, table: &Table) -> Result<()> {
    write_table(File::create(path)?, delimiter, table)
}
