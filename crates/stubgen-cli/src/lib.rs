//! Stubgen CLI library
//!
//! Glue between argument parsing and the pipeline: assembles the
//! configuration, wires in the shipped collaborators (the syn-based
//! extractor and the stub formatter), runs one pass, and prints the report.

pub mod cli;
pub mod error;

pub use cli::Cli;
pub use error::{CliError, Result};

use stubgen_extractor::RustExtractor;
use stubgen_pipeline::Pipeline;
use stubgen_synthesizer::StubFormatter;

/// Exit code for a clean run.
pub const EXIT_OK: i32 = 0;

/// Exit code for a run that completed with item failures.
pub const EXIT_ITEM_FAILURES: i32 = 2;

/// Run one generation pass and return the process exit code.
pub async fn run(cli: Cli) -> Result<i32> {
    let config = cli.load_config()?;
    let pipeline = Pipeline::new(config, RustExtractor::new(), StubFormatter::new());

    let report = pipeline.run().await?;

    if !cli.quiet || !report.is_clean() {
        println!("{}", report.summary());
    }

    Ok(if report.is_clean() {
        EXIT_OK
    } else {
        EXIT_ITEM_FAILURES
    })
}
