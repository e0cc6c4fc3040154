// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Word counting over arbitrary whitespace.

/// Counts maximal runs of non-whitespace characters in `input`.
///
/// Whitespace follows the Unicode `White_Space` property, so spaces, tabs,
/// newlines and carriage returns all separate words, and any mixed run of
/// them counts as a single boundary.
///
/// # Examples
///
/// ```
/// use textkit::count_words;
///
/// assert_eq!(count_words("Hello\tworld\nagain"), 3);
/// assert_eq!(count_words("   "), 0);
/// ```
pub fn count_words(input: &str,) -> usize
{
    input.split_whitespace().count()
}
