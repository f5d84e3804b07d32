use serde::Serialize;

const BUILTIN: [(&str, &str, &str); 4] = [
    ("white", "saloon", "rope"),
    ("green", "kitchen", "chandelier"),
    ("black", "hallway", "revolver"),
    ("red", "office", "knife"),
];

/// One `(who, where, what)` entry. Each record renders to one pipeline block.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub who: String,
    #[serde(rename = "where")]
    pub location: String,
    pub what: String,
}

impl Record {
    pub fn new(who: &str, location: &str, what: &str) -> Self {
        Record {
            who: String::from(who),
            location: String::from(location),
            what: String::from(what),
        }
    }
}

/// The built-in records, in output order.
pub fn builtin() -> Vec<Record> {
    BUILTIN
        .iter()
        .map(|(who, location, what)| Record::new(who, location, what))
        .collect()
}
