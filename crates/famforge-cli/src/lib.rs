//! Batch driver for Famforge: generates household records and hands them
//! to the rendering collaborator, one document per iteration.

pub mod run;

pub use run::{run_batch, BatchError, BatchOptions, BatchReport};
