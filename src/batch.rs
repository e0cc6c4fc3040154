// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Resolution and parallel execution of batch documents.
//!
//! Raw [`BatchConfig`] entries are resolved into [`BatchJob`]s with concrete
//! identifiers and truncation parameters. Resolution rejects documents that
//! would produce ambiguous reports (duplicate ids) or jobs that cannot run
//! (truncation without a bound). Resolved jobs are pure and independent, so
//! [`run_batch`] fans them out over the rayon thread pool while keeping the
//! report in document order.

use std::{collections::HashSet, fs, path::Path};

use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    capitalize::capitalize,
    config::{BatchConfig, BatchDefaults, JobEntry, Operation},
    error::{self, Error},
    slug::{SlugStrategy, slugify},
    truncate::{DEFAULT_SUFFIX, TruncateOptions},
    words::count_words,
};

/// Prefix for identifiers assigned to jobs without an explicit id.
const DEFAULT_ID_PREFIX: &str = "job-";

/// Operation together with the parameters it needs.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub enum JobSpec
{
    /// Slug generation.
    Slugify,
    /// Truncation with fully resolved options.
    Truncate(TruncateOptions,),
    /// Sentence-style capitalization.
    Capitalize,
    /// Word counting.
    CountWords,
}

impl JobSpec
{
    /// Returns the operation this spec executes.
    pub const fn operation(&self,) -> Operation
    {
        match self {
            Self::Slugify => Operation::Slugify,
            Self::Truncate(_,) => Operation::Truncate,
            Self::Capitalize => Operation::Capitalize,
            Self::CountWords => Operation::CountWords,
        }
    }
}

/// Fully resolved job ready for execution.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct BatchJob
{
    /// Unique identifier reported with the output.
    pub id:    String,
    /// Text the operation consumes.
    pub input: String,
    /// Operation and its parameters.
    pub spec:  JobSpec,
}

impl BatchJob
{
    /// Applies the job's operation to its input.
    pub fn run(&self,) -> JobOutput
    {
        match &self.spec {
            JobSpec::Slugify => JobOutput::Text(slugify(&self.input,),),
            JobSpec::Truncate(options,) => JobOutput::Text(options.apply(&self.input,),),
            JobSpec::Capitalize => JobOutput::Text(capitalize(&self.input,),),
            JobSpec::CountWords => JobOutput::Count(count_words(&self.input,),),
        }
    }
}

/// Document containing all resolved jobs.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct BatchDocument
{
    /// Jobs in document order.
    pub jobs: Vec<BatchJob,>,
}

/// Result of a single operation.
#[derive(Debug, Serialize, Clone, PartialEq, Eq,)]
#[serde(untagged)]
pub enum JobOutput
{
    /// Output of the string-producing operations.
    Text(String,),
    /// Output of word counting.
    Count(usize,),
}

/// Output of one job, keyed by its identifier.
#[derive(Debug, Serialize, Clone, PartialEq, Eq,)]
pub struct JobOutcome
{
    /// Identifier of the job.
    pub id:        String,
    /// Operation that produced the output.
    pub operation: Operation,
    /// Operation result.
    pub output:    JobOutput,
}

/// Outcomes of every job in a batch, in document order.
#[derive(Debug, Serialize, Clone, PartialEq, Eq,)]
pub struct BatchReport
{
    /// Job outcomes.
    pub results: Vec<JobOutcome,>,
}

/// Loads jobs from the provided YAML batch document path.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read, the YAML cannot be
/// deserialized, or the document violates invariants during resolution.
pub fn load_jobs(path: &Path,) -> Result<BatchDocument, Error,>
{
    debug!("Reading batch document from {}", path.display());
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_jobs(&contents,)
}

/// Parses jobs from the provided YAML document string.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML cannot be decoded
/// (including negative lengths) and [`Error::Validation`](Error::Validation)
/// when the document has no jobs, duplicate ids, or unusable truncation
/// parameters.
///
/// # Examples
///
/// ```
/// use textkit::{JobOutput, parse_jobs, run_batch};
///
/// let document = parse_jobs("jobs:\n  - operation: count_words\n    input: a b c\n",)?;
/// let report = run_batch(&document,);
/// assert_eq!(report.results[0].id, "job-1");
/// assert_eq!(report.results[0].output, JobOutput::Count(3));
/// # Ok::<(), textkit::Error>(())
/// ```
pub fn parse_jobs(contents: &str,) -> Result<BatchDocument, Error,>
{
    let config: BatchConfig = serde_yaml::from_str(contents,)?;
    if config.jobs.is_empty() {
        return Err(Error::validation("document must include at least one job",),);
    }

    resolve_jobs(&config,)
}

/// Resolves raw entries into jobs with unique identifiers.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) when an entry cannot be
/// resolved or two entries share an identifier.
fn resolve_jobs(config: &BatchConfig,) -> Result<BatchDocument, Error,>
{
    let mut jobs = Vec::with_capacity(config.jobs.len(),);
    let mut seen_ids = HashSet::with_capacity(config.jobs.len(),);

    for (index, entry,) in config.jobs.iter().enumerate() {
        let job = resolve_entry(index + 1, entry, &config.defaults,)?;

        if !seen_ids.insert(job.id.clone(),) {
            return Err(Error::validation(format!("duplicate job id '{}'", job.id),),);
        }

        debug!("Resolved job {} ({})", job.id, job.spec.operation());
        jobs.push(job,);
    }

    info!("Resolved {} batch jobs", jobs.len());
    Ok(BatchDocument {
        jobs,
    },)
}

/// Converts a raw entry at 1-based `position` into a resolved job.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) when the id has no
/// slug-worthy characters, a truncate job lacks a bound, or truncation
/// parameters are attached to another operation.
fn resolve_entry(
    position: usize,
    entry: &JobEntry,
    defaults: &BatchDefaults,
) -> Result<BatchJob, Error,>
{
    let id = match entry.id.as_deref() {
        Some(custom,) => SlugStrategy::builder(custom,).build().ok_or_else(|| {
            Error::validation(format!("job {position}: id '{custom}' has no usable characters"),)
        },)?,
        None => format!("{DEFAULT_ID_PREFIX}{position}"),
    };

    let spec = match entry.operation {
        Operation::Slugify => JobSpec::Slugify,
        Operation::Truncate => JobSpec::Truncate(resolve_truncate(&id, entry, defaults,)?,),
        Operation::Capitalize => JobSpec::Capitalize,
        Operation::CountWords => JobSpec::CountWords,
    };

    if !matches!(spec, JobSpec::Truncate(_,)) && (entry.max_length.is_some() || entry.suffix.is_some())
    {
        return Err(Error::validation(format!(
            "job '{id}': max_length and suffix only apply to truncate, not {}",
            entry.operation
        ),),);
    }

    Ok(BatchJob {
        id,
        input: entry.input.clone(),
        spec,
    },)
}

fn resolve_truncate(
    id: &str,
    entry: &JobEntry,
    defaults: &BatchDefaults,
) -> Result<TruncateOptions, Error,>
{
    let max_length = entry.max_length.or(defaults.max_length,).ok_or_else(|| {
        Error::validation(format!(
            "job '{id}': truncate requires max_length on the job or in defaults"
        ),)
    },)?;

    let suffix = entry
        .suffix
        .as_deref()
        .or(defaults.suffix.as_deref(),)
        .unwrap_or(DEFAULT_SUFFIX,);

    Ok(TruncateOptions::new(max_length,).with_suffix(suffix,),)
}

/// Executes every job of the document in parallel.
pub fn run_batch(document: &BatchDocument,) -> BatchReport
{
    run_batch_with_progress(document, &ProgressBar::hidden(),)
}

/// Executes every job of the document in parallel, advancing `progress` once
/// per finished job. The report preserves document order.
pub fn run_batch_with_progress(document: &BatchDocument, progress: &ProgressBar,) -> BatchReport
{
    progress.set_length(document.jobs.len() as u64,);

    let results: Vec<JobOutcome,> = document
        .jobs
        .par_iter()
        .map(|job| {
            let output = job.run();
            progress.inc(1,);
            JobOutcome {
                id: job.id.clone(),
                operation: job.spec.operation(),
                output,
            }
        },)
        .collect();

    progress.finish_and_clear();
    info!("Processed {} batch jobs", results.len());

    BatchReport {
        results,
    }
}
