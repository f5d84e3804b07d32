mod parser;

use camino::Utf8Path;
use kdl::KdlDocument;
use log::debug;
use std::{fs, io};

use crate::records::Record;

pub use parser::{ParserError, ParserErrorData};

#[derive(Debug)]
#[allow(dead_code)]
pub enum RecordsReadError {
    Io(io::Error),
    Syntax(kdl::KdlError),
    Parser(ParserError),
}

pub fn open_and_read(path: &Utf8Path) -> Result<Vec<Record>, RecordsReadError> {
    debug!("Reading records from {}", path);
    let content = fs::read_to_string(path)?;

    read(&content)
}

fn read(content: &str) -> Result<Vec<Record>, RecordsReadError> {
    let doc: KdlDocument = content.parse()?;
    let mut records = vec![];

    for node in doc.nodes() {
        records.push(parser::parse_node(node)?);
    }

    if records.is_empty() {
        return Err(ParserError(S!("No records defined"), ParserErrorData::NoRecords).into());
    }

    Ok(records)
}

impl From<io::Error> for RecordsReadError {
    fn from(e: io::Error) -> Self {
        RecordsReadError::Io(e)
    }
}

impl From<kdl::KdlError> for RecordsReadError {
    fn from(e: kdl::KdlError) -> Self {
        RecordsReadError::Syntax(e)
    }
}

impl From<ParserError> for RecordsReadError {
    fn from(e: ParserError) -> Self {
        RecordsReadError::Parser(e)
    }
}
