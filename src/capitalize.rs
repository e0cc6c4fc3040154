// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Sentence-style capitalization of a whole string.

/// Uppercases the first character of `input` and lowercases the remainder.
///
/// Only the very first character of the string is uppercased; the first
/// letters of later words are lowercased like everything else. Characters
/// whose uppercase form expands (such as `ß`) expand in the output.
///
/// # Examples
///
/// ```
/// use textkit::capitalize;
///
/// assert_eq!(capitalize("hELLo WoRLD"), "Hello world");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(input: &str,) -> String
{
    let mut chars = input.chars();
    match chars.next() {
        None => String::new(),
        Some(first,) => {
            let mut capitalized = String::with_capacity(input.len(),);
            capitalized.extend(first.to_uppercase(),);
            capitalized.push_str(&chars.as_str().to_lowercase(),);
            capitalized
        }
    }
}
