//! Report-to-notification pipeline
//!
//! - [`outcome`] - The `{messages}` / `{error}` result returned to the invoker
//! - [`orchestrator`] - Sequences fetch, format and dispatch for one run

pub mod orchestrator;
pub mod outcome;

pub use orchestrator::{invoke, PipelineOptions, PipelineRun, ReportPipeline};
pub use outcome::PipelineOutcome;
