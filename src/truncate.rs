// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Length-bounded truncation that marks cut text with a suffix.
//!
//! Lengths are measured in Unicode scalar values, so multi-byte characters
//! are never split. Inputs that already fit are returned verbatim.

use serde::{Deserialize, Serialize};

/// Suffix appended to truncated text when none is supplied.
pub const DEFAULT_SUFFIX: &str = "...";

/// Truncates `input` to `max_length` characters using [`DEFAULT_SUFFIX`].
///
/// # Examples
///
/// ```
/// use textkit::truncate;
///
/// assert_eq!(truncate("Hello World", 8), "Hello...");
/// assert_eq!(truncate("Hello", 5), "Hello");
/// ```
pub fn truncate(input: &str, max_length: usize,) -> String
{
    truncate_with_suffix(input, max_length, DEFAULT_SUFFIX,)
}

/// Truncates `input` to `max_length` characters, ending the result with
/// `suffix` whenever characters had to be dropped.
///
/// The result is exactly `max_length` characters long when
/// `max_length >= suffix.chars().count()`. A smaller bound leaves no room for
/// content and yields the whole suffix, which is then longer than
/// `max_length`.
///
/// # Examples
///
/// ```
/// use textkit::truncate_with_suffix;
///
/// assert_eq!(truncate_with_suffix("Hello World", 9, "…"), "Hello Wo…");
/// assert_eq!(truncate_with_suffix("Hello World", 2, "..."), "...");
/// ```
pub fn truncate_with_suffix(input: &str, max_length: usize, suffix: &str,) -> String
{
    if input.chars().count() <= max_length {
        return input.to_owned();
    }

    let keep = max_length.saturating_sub(suffix.chars().count(),);
    let cut = input.char_indices().nth(keep,).map_or(input.len(), |(index, _,)| index,);

    let mut truncated = String::with_capacity(cut + suffix.len(),);
    truncated.push_str(&input[..cut],);
    truncated.push_str(suffix,);
    truncated
}

/// Reusable truncation parameters.
///
/// # Examples
///
/// ```
/// use textkit::TruncateOptions;
///
/// let options = TruncateOptions::new(8,);
/// assert_eq!(options.apply("Hello World",), "Hello...");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
pub struct TruncateOptions
{
    /// Upper bound on the output length in characters.
    #[serde(alias = "max-length", alias = "maxLength")]
    pub max_length: usize,
    /// Marker appended when the input is cut.
    #[serde(default = "default_suffix")]
    pub suffix:     String,
}

impl TruncateOptions
{
    /// Creates options with the provided bound and the default suffix.
    pub fn new(max_length: usize,) -> Self
    {
        Self {
            max_length,
            suffix: default_suffix(),
        }
    }

    /// Replaces the suffix.
    pub fn with_suffix<S,>(mut self, suffix: S,) -> Self
    where
        S: Into<String,>,
    {
        self.suffix = suffix.into();
        self
    }

    /// Applies the options to `input`.
    pub fn apply(&self, input: &str,) -> String
    {
        truncate_with_suffix(input, self.max_length, &self.suffix,)
    }
}

fn default_suffix() -> String
{
    DEFAULT_SUFFIX.to_owned()
}
