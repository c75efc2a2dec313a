//! Command-line interface implementation for the template processor.
//! Provides argument parsing and help text formatting using clap.

use crate::config::Config;
use crate::constants::{DEFAULT_FIELD_MODIFIER, DEFAULT_OUTPUT_DIR, DEFAULT_REPLACE_PATTERN};
use crate::error::Result;
use crate::processor::{ensure_output_dir, Processor, Summary};
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::fs::{self, File};
use std::path::PathBuf;

const LONG_ABOUT: &str = r#"Template Processor

Generates one file per row of a CSV data file by replacing variable
placeholders in a template with the row's values.

SAMPLE_TEMPLATE is a UTF-8 text file holding the template.

DATA_FILE is a CSV file. Each row produces one hydrated file. Use
--ignore-header when the first row holds column titles.

TEMPLATE_VARS is a comma separated list of variable names. Columns of
DATA_FILE are mapped to the variables in the same order.

REPLACE_PATTERN is how a variable appears in SAMPLE_TEMPLATE. It must contain
the text 'variable', which stands for each name in TEMPLATE_VARS. The pattern
is a regular expression. Default '@variable'.

OUT_FILENAME_PATTERN names the generated files. Variables are referenced by
prefixing them with '@', e.g. '@serial.txt'.

FIELD_MODIFIER rewrites values before they are used, as a JSON object of
{"pattern": "replacement"}. Rules run in order. A value stored as
'220V; 1A; 50Hz' together with '{";": ","}' becomes '220V, 1A, 50Hz'.

TEMPLATE_VARS, OUT_FILENAME_PATTERN, FIELD_MODIFIER and REPLACE_PATTERN may each
be given as a path to a file holding the value.

Example:

  sample.txt
      Hello @name,

      Your @relation

  data.csv
      Person Name,Relation
      Ajay,brother
      Seema,sister

  template-processor -s sample.txt -d data.csv -v name,relation -p @name.txt -o letters -i

creates 'letters/Ajay.txt' and 'letters/Seema.txt'."#;

/// Command-line arguments structure for the template processor.
#[derive(Parser, Debug)]
#[command(
    name = "template-processor",
    author,
    version,
    about = "Hydrate a text template once per CSV row",
    long_about = LONG_ABOUT
)]
pub struct Args {
    /// Sample template file path
    #[arg(short = 's', long, value_name = "SAMPLE_TEMPLATE")]
    pub sample_template: PathBuf,

    /// CSV data file path
    #[arg(short = 'd', long, value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Template variables mapped to data columns, or a file holding them
    #[arg(short = 'v', long, value_name = "TEMPLATE_VARS")]
    pub template_variables: String,

    /// Pattern used to name created files ('@' prefixed variables), or a file holding it
    #[arg(short = 'p', long, value_name = "OUT_FILENAME_PATTERN")]
    pub filename_pattern: String,

    /// Field value replacements as {"pattern": "value"}, or a file holding them
    #[arg(short = 'm', long, value_name = "FIELD_MODIFIER", default_value = DEFAULT_FIELD_MODIFIER)]
    pub field_modifier: String,

    /// Directory where files are created
    #[arg(short = 'o', long, value_name = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_directory: PathBuf,

    /// Variable pattern to replace in the template, or a file holding it
    #[arg(short = 'r', long, value_name = "REPLACE_PATTERN", default_value = DEFAULT_REPLACE_PATTERN)]
    pub replace_pattern: String,

    /// Ignore the header row of the data file
    #[arg(short = 'i', long)]
    pub ignore_header: bool,

    /// Skip rows with missing columns or unsafe file names instead of aborting
    #[arg(long)]
    pub skip_invalid_rows: bool,

    /// Enable verbose logging output
    #[arg(long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the full help if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_long_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}

/// Runs the whole generation for parsed arguments.
///
/// # Flow
/// 1. Resolves and validates the configuration
/// 2. Creates the output directory
/// 3. Reads the template once
/// 4. Processes the data file row by row
pub fn run(args: Args) -> Result<Summary> {
    let config = Config::from_args(&args)?;
    config.log_summary();

    ensure_output_dir(&config.output_dir)?;
    let template = fs::read_to_string(&config.template_path)?;
    let data = File::open(&config.data_path)?;

    Processor::new(&config, &template).run(data)
}
