use crate::records::Record;
use kdl::{KdlNode, KdlValue};

const FIELDS: [&str; 3] = ["who", "where", "what"];

#[derive(Debug)]
#[allow(dead_code)]
pub struct ParserError(pub String, pub ParserErrorData);

#[derive(Debug)]
#[allow(dead_code)]
pub enum ParserErrorData {
    UnknownNode { name: String },
    UnknownProperty { name: String },
    MissingField { name: String },
    TooManyArguments,
    UnexpectedChildren { name: String },
    InvalidType { field: String },
    NoRecords,
}

/// Parses a single `record` node.
///
/// Fields come from up to three positional arguments in `who`, `where`,
/// `what` order. Properties named after a field override the positional value.
pub fn parse_node(node: &KdlNode) -> Result<Record, ParserError> {
    let node_name = node.name().value();
    if node_name != "record" {
        return Err(ParserError(
            format!("Unknown node '{node_name}'"),
            ParserErrorData::UnknownNode {
                name: node_name.to_string(),
            },
        ));
    }

    if node.children().is_some() {
        return Err(ParserError(
            format!("Node '{node_name}' does not take a children block"),
            ParserErrorData::UnexpectedChildren {
                name: node_name.to_string(),
            },
        ));
    }

    let mut values: [Option<String>; 3] = [None, None, None];
    let mut position = 0;

    for entry in node.entries() {
        let index = match entry.name() {
            Some(id) => field_index(id.value())?,
            None => {
                if position >= FIELDS.len() {
                    return Err(ParserError(
                        S!("A record takes at most three arguments"),
                        ParserErrorData::TooManyArguments,
                    ));
                }
                position += 1;
                position - 1
            }
        };

        values[index] = Some(string_value(FIELDS[index], entry.value())?);
    }

    let [who, location, what] = values;

    Ok(Record {
        who: require(FIELDS[0], who)?,
        location: require(FIELDS[1], location)?,
        what: require(FIELDS[2], what)?,
    })
}

fn field_index(name: &str) -> Result<usize, ParserError> {
    FIELDS.iter().position(|f| *f == name).ok_or_else(|| {
        ParserError(
            format!("Unknown property '{name}'"),
            ParserErrorData::UnknownProperty {
                name: name.to_string(),
            },
        )
    })
}

fn string_value(field: &str, value: &KdlValue) -> Result<String, ParserError> {
    match value.as_string() {
        Some(s) => Ok(S!(s)),
        None => Err(ParserError(
            format!("Field '{field}' must be a string, got {value}"),
            ParserErrorData::InvalidType {
                field: field.to_string(),
            },
        )),
    }
}

fn require(field: &str, value: Option<String>) -> Result<String, ParserError> {
    value.ok_or_else(|| {
        ParserError(
            format!("Missing field '{field}'"),
            ParserErrorData::MissingField {
                name: field.to_string(),
            },
        )
    })
}
