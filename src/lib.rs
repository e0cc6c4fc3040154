// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Small, pure string transformations: slug generation, truncation with a
//! suffix, capitalization, and word counting.
//!
//! Every operation is deterministic, allocation-local, and total over its
//! input domain, so the functions may be called from any number of threads
//! without coordination. On top of them the crate provides a YAML batch
//! document format whose jobs are resolved, validated, and executed in
//! parallel to produce a serializable report.

mod batch;
mod capitalize;
mod config;
mod error;
mod slug;
mod truncate;
mod words;

pub use batch::{
    BatchDocument, BatchJob, BatchReport, JobOutcome, JobOutput, JobSpec, load_jobs, parse_jobs,
    run_batch, run_batch_with_progress,
};
pub use capitalize::capitalize;
pub use config::{BatchConfig, BatchDefaults, JobEntry, Operation};
pub use error::{Error, io_error, stream_error};
pub use slug::{SlugStrategy, slugify};
pub use truncate::{DEFAULT_SUFFIX, TruncateOptions, truncate, truncate_with_suffix};
pub use words::count_words;
