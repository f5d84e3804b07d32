macro_rules! S {
    ($s:expr) => {
        String::from($s)
    };
}

mod generator;
mod reader;
mod records;
mod template;

use camino::Utf8PathBuf;
use clap::ArgAction;
use log::{debug, error, LevelFilter};
use records::Record;
use std::io;
use template::{Template, Variant};

fn setup_logging(verbose: bool) {
    let mut builder = env_logger::builder();
    builder.format_timestamp(None);

    builder.filter_level(match verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    });

    builder.init();
}

fn bootstrap_cmd() -> clap::Command {
    let help_template: &'static str = color_print::cstr!(
r#"{about-with-newline}
{usage-heading} {usage}

<bold><underline>Options:</underline></bold>
{options}
{after-help}
"#);

    clap::Command::new("cluegen")
        .bin_name("cluegen")
        .about("Prints CI pipeline jobs for each (who, where, what) record")
        .help_template(help_template)
        .args(vec![
            clap::arg!(verbose: -v --verbose "Enables verbose output")
                .action(ArgAction::SetTrue),
            clap::arg!(variant: --variant <VARIANT> "Pipeline template to render")
                .value_parser(clap::value_parser!(Variant))
                .default_value("plain"),
            clap::arg!(records: -r --records <FILE> "KDL file replacing the built-in records")
                .action(ArgAction::Set),
        ])
}

fn main() {
    let matches = bootstrap_cmd().get_matches();
    setup_logging(matches.get_flag("verbose"));

    let variant = matches.get_one::<Variant>("variant").copied().unwrap_or_default();

    let records = match matches.get_one::<String>("records") {
        Some(file) => {
            let path = Utf8PathBuf::from(file);
            match reader::open_and_read(&path) {
                Ok(r) => r,
                Err(e) => {
                    error!("Error reading records file: {}. Error: {:#?}", path, e);
                    std::process::exit(1);
                }
            }
        }
        None => records::builtin(),
    };

    match run(&records, variant) {
        Ok(count) => debug!("Wrote {} blocks using the '{}' template", count, variant.name()),
        Err(e) => {
            error!("Error generating pipeline: {:?}", e);
            std::process::exit(1);
        }
    }
}

fn run(records: &[Record], variant: Variant) -> generator::Result<usize> {
    let template = Template::for_variant(variant)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    generator::write_all(records, &template, &mut out)
}
