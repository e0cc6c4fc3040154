// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Configuration document types describing batch jobs.
//!
//! The types in this module mirror the structure of the YAML documents
//! consumed by the `batch` subcommand. They keep optional values flexible to
//! allow per-job overrides on top of document-wide defaults; the
//! [`batch`](crate::batch) module resolves them into concrete jobs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Root configuration document describing every job in a batch.
///
/// # Examples
///
/// ```
/// use textkit::BatchConfig;
///
/// let yaml = r#"
/// defaults:
///   max_length: 8
/// jobs:
///   - operation: slugify
///     input: Hello World
/// "#;
/// let config: BatchConfig = serde_yaml::from_str(yaml,).expect("valid configuration",);
/// assert_eq!(config.jobs.len(), 1);
/// assert_eq!(config.defaults.max_length, Some(8));
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct BatchConfig
{
    /// Values applied to jobs that do not override them.
    #[serde(default)]
    pub defaults: BatchDefaults,

    /// Jobs to execute, in output order.
    #[serde(default)]
    pub jobs: Vec<JobEntry,>,
}

/// Document-wide defaults for truncation jobs.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq,)]
pub struct BatchDefaults
{
    /// Suffix used when a truncate job does not name one.
    #[serde(default)]
    pub suffix: Option<String,>,

    /// Bound used when a truncate job does not name one.
    #[serde(default, alias = "max-length", alias = "maxLength")]
    pub max_length: Option<usize,>,
}

/// Raw configuration entry describing a single job before resolution.
#[derive(Debug, Deserialize, Serialize, Clone,)]
pub struct JobEntry
{
    /// Optional identifier reported alongside the job output.
    #[serde(default)]
    pub id: Option<String,>,

    /// Operation applied to the input.
    pub operation: Operation,

    /// Text the operation consumes.
    #[serde(alias = "text")]
    pub input: String,

    /// Truncation bound override.
    #[serde(default, alias = "max-length", alias = "maxLength")]
    pub max_length: Option<usize,>,

    /// Truncation suffix override.
    #[serde(default)]
    pub suffix: Option<String,>,
}

/// String operations available to batch jobs.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash,)]
#[serde(rename_all = "snake_case")]
pub enum Operation
{
    /// [`slugify`](crate::slugify).
    #[serde(alias = "slug")]
    Slugify,
    /// [`truncate_with_suffix`](crate::truncate_with_suffix).
    Truncate,
    /// [`capitalize`](crate::capitalize).
    Capitalize,
    /// [`count_words`](crate::count_words).
    #[serde(alias = "count-words", alias = "countWords", alias = "words")]
    CountWords,
}

impl Operation
{
    /// Returns the canonical snake_case name of the operation.
    pub const fn as_str(self,) -> &'static str
    {
        match self {
            Self::Slugify => "slugify",
            Self::Truncate => "truncate",
            Self::Capitalize => "capitalize",
            Self::CountWords => "count_words",
        }
    }
}

impl fmt::Display for Operation
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(self.as_str(),)
    }
}
