use crate::error::{CrawlError, Result};
use crate::results::BusinessRecord;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| CrawlError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| CrawlError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the first field of each row of a header-less URL list
///
/// Rows are trimmed and blank rows skipped. Quoted fields written by
/// [`write_url_list`] come back unquoted.
pub fn read_url_list<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut urls = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let url = record.get(0).unwrap_or_default().trim();
        if !url.is_empty() {
            urls.push(url.to_string());
        }
    }
    Ok(urls)
}

pub fn read_url_list_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    read_url_list(open(path.as_ref())?)
}

/// Writes a header-less single-column CSV of URLs
pub fn write_url_list<W: Write>(writer: W, urls: &[String]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for url in urls {
        wtr.write_record([url])?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_url_list_to_path<P: AsRef<Path>>(path: P, urls: &[String]) -> Result<()> {
    write_url_list(create(path.as_ref())?, urls)
}

/// Writes records as CSV with a `URL,Name,Phone,Address` header
pub fn write_records<W: Write>(writer: W, records: &[BusinessRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if records.is_empty() {
        // serde only emits the header alongside the first row
        wtr.write_record(["URL", "Name", "Phone", "Address"])?;
    }
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_records_to_path<P: AsRef<Path>>(path: P, records: &[BusinessRecord]) -> Result<()> {
    write_records(create(path.as_ref())?, records)
}

/// Reads records written by [`write_records`]
pub fn read_records<R: Read>(reader: R) -> Result<Vec<BusinessRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for record in rdr.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

pub fn read_records_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<BusinessRecord>> {
    read_records(open(path.as_ref())?)
}
