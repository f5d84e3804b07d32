use crate::records::Record;
use tera::{Context, Tera};

const PLAIN: &str = include_str!("../templates/plain.yml");
const STAGED: &str = include_str!("../templates/staged.yml");

/// Which pipeline template to render. `Staged` adds `stage: build` to every job.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Plain,
    Staged,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Plain => "plain",
            Variant::Staged => "staged",
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            Variant::Plain => PLAIN,
            Variant::Staged => STAGED,
        }
    }
}

pub struct Template {
    tera: Tera,
    name: &'static str,
}

impl Template {
    pub fn for_variant(variant: Variant) -> Result<Self, tera::Error> {
        Self::from_source(variant.name(), variant.source())
    }

    pub fn from_source(name: &'static str, source: &str) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(name, source)?;

        Ok(Self { tera, name })
    }

    /// Substitutes the record's fields. Substituted values are never re-rendered.
    pub fn render(&self, record: &Record) -> Result<String, tera::Error> {
        let context = Context::from_serialize(record)?;
        self.tera.render(self.name, &context)
    }
}
