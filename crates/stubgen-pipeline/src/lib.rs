//! Stubgen Pipeline
//!
//! The staged, concurrent generation pipeline: the core of stubgen.
//!
//! # Overview
//!
//! One run expands a source directory into file paths, reads each file,
//! extracts its type declarations, synthesizes one stub artifact per
//! declaration, and persists every artifact into the destination directory.
//!
//! # Architecture
//!
//! ```text
//! Enumerate ──▶ Read ──▶ Transform ──▶ Write
//!              (N_r)      (N_g)         (N_w)
//! ```
//!
//! The four stages form a strictly linear chain connected by bounded
//! channels. Each concurrent stage runs up to its configured number of items
//! in parallel; once the bound is reached further items queue, and full
//! queues slow the upstream stage down (backpressure). A stage signals
//! completion downstream by dropping its sender after its own input is
//! exhausted and all in-flight items have drained, so the run resolves only
//! once the writer has persisted everything the transformer ever produced.
//!
//! # Failure semantics
//!
//! Only an unreadable source directory is fatal. Every other failure is
//! scoped to the item that caused it: the item is dropped, the failure is
//! recorded, and unrelated items are unaffected. The final [`RunReport`]
//! distinguishes totals from itemized failures, so a run can succeed with
//! N write failures without silently swallowing any of them.
//!
//! # Example Usage
//!
//! ```no_run
//! use stubgen_extractor::RustExtractor;
//! use stubgen_pipeline::{Pipeline, PipelineConfig};
//! use stubgen_synthesizer::StubFormatter;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PipelineConfig::new("src", "generated");
//! let pipeline = Pipeline::new(config, RustExtractor::new(), StubFormatter::new());
//!
//! let report = pipeline.run().await?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod pipeline;
mod report;
mod stage;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pipeline::Pipeline;
pub use report::{ItemFailure, RunReport, StageKind};
