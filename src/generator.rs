use crate::records::Record;
use crate::template::Template;
use log::debug;
use std::io::Write;
use std::result;

pub type Result<T> = result::Result<T, GeneratorError>;

#[derive(Debug)]
#[allow(dead_code)]
pub struct GeneratorError(String, GeneratorErrorData);

#[derive(Debug)]
#[allow(dead_code)]
pub enum GeneratorErrorData {
    Template(tera::Error),
    Io(std::io::Error),
}

/// Lazily renders one block per record, in record order.
///
/// The iterator borrows its inputs and holds no other state, so calling
/// `generate` again starts over from the first record.
pub fn generate<'a>(
    records: &'a [Record],
    template: &'a Template,
) -> impl Iterator<Item = Result<String>> + 'a {
    records.iter().map(move |record| {
        debug!("Rendering block for '{}'", record.what);
        Ok(template.render(record)?)
    })
}

/// Writes every block followed by a line break. Returns the number of blocks written.
pub fn write_all<W: Write>(records: &[Record], template: &Template, out: &mut W) -> Result<usize> {
    let mut written = 0;

    for block in generate(records, template) {
        let mut block = block?;
        block.push('\n');

        out.write_all(block.as_bytes())?;
        out.flush()?;
        written += 1;
    }

    Ok(written)
}

impl From<std::io::Error> for GeneratorError {
    fn from(e: std::io::Error) -> Self {
        GeneratorError(String::from("IO Error"), GeneratorErrorData::Io(e))
    }
}

impl From<tera::Error> for GeneratorError {
    fn from(e: tera::Error) -> Self {
        GeneratorError(
            format!("Template Error: {}", e),
            GeneratorErrorData::Template(e),
        )
    }
}
