// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Utilities for deriving URL-safe slugs from user-supplied strings.
//!
//! Slugs produced by this module contain only lowercase ASCII alphanumeric
//! characters separated by single hyphens. Every run of other characters
//! (whitespace, punctuation, underscores, existing hyphens and anything
//! outside ASCII) collapses into exactly one hyphen, and separators never
//! appear at either end of the result.

/// Builder for slug strings that can be used in URLs and identifiers.
#[derive(Debug, Clone, Copy,)]
pub struct SlugStrategy<'input,>
{
    source: &'input str,
}

impl<'input,> SlugStrategy<'input,>
{
    /// Creates a new slug builder for the provided string slice.
    ///
    /// The builder retains a borrowed view of the source to avoid allocations
    /// until [`build`](Self::build) is invoked.
    pub fn builder(source: &'input str,) -> Self
    {
        Self {
            source,
        }
    }

    /// Builds a slug from the provided source string. The source is
    /// lowercased first; the slug then contains only lowercase ASCII
    /// alphanumeric characters and single hyphen separators. Returns `None`
    /// when the input does not contain any slug-worthy characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use textkit::SlugStrategy;
    ///
    /// let slug = SlugStrategy::builder(" Docs/Overview  ",).build();
    /// assert_eq!(slug.as_deref(), Some("docs-overview"));
    /// ```
    pub fn build(self,) -> Option<String,>
    {
        let mut slug = String::with_capacity(self.source.len(),);
        let mut previous_hyphen = false;

        for candidate in self.source.chars().flat_map(char::to_lowercase,) {
            if candidate.is_ascii_alphanumeric() {
                slug.push(candidate,);
                previous_hyphen = false;
            } else if !previous_hyphen && !slug.is_empty() {
                slug.push('-',);
                previous_hyphen = true;
            }
        }

        if previous_hyphen {
            slug.pop();
        }

        if slug.is_empty() { None } else { Some(slug,) }
    }
}

/// Converts arbitrary text into a lowercase, hyphen-separated slug.
///
/// Returns an empty string when the input holds no ASCII letters or digits.
///
/// # Examples
///
/// ```
/// use textkit::slugify;
///
/// assert_eq!(slugify("Hello__World--Again"), "hello-world-again");
/// assert_eq!(slugify("?!"), "");
/// ```
pub fn slugify(input: &str,) -> String
{
    SlugStrategy::builder(input,).build().unwrap_or_default()
}
