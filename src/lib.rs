pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod report;

pub use config::ExportFormat;
pub use domain::{Record, Segment, Session, Stage, Value};
pub use error::{ReportError, Result};
pub use pipeline::{Pipeline, PipelineRun};
