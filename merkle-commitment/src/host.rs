// Copyright 2026 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Validation of path strings before they are used as commitment keys.

#[cfg(feature = "std")]
use crate::rstd::fmt;

/// Longest identifier accepted between two separators.
pub const MAX_SEGMENT_LENGTH: usize = 64;

/// Reasons a path string is rejected. Positions are segment indices.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Debug))]
pub enum PathViolation {
	/// The path is the empty string.
	Empty,
	/// The path begins or ends with a separator, or has two in a row.
	EmptySegment(usize),
	/// The segment is longer than the validator accepts.
	SegmentTooLong { index: usize, length: usize },
	/// The segment contains a character outside the identifier alphabet.
	InvalidCharacter { index: usize, character: char },
}

#[cfg(feature = "std")]
impl fmt::Display for PathViolation {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			PathViolation::Empty => write!(f, "Path is empty"),
			PathViolation::EmptySegment(index) =>
				write!(f, "Path cannot begin, end or have consecutive '/' (segment {})", index),
			PathViolation::SegmentTooLong { index, length } => write!(
				f,
				"Path segment {} has {} bytes, more than {}",
				index, length, MAX_SEGMENT_LENGTH
			),
			PathViolation::InvalidCharacter { index, character } =>
				write!(f, "Path segment {} contains invalid character {:?}", index, character),
		}
	}
}

#[cfg(feature = "std")]
impl crate::rstd::Error for PathViolation {}

/// Check applied to the string form of a path before a prefix is applied to it.
pub trait PathValidator {
	fn validate(&self, path: &str) -> Result<(), PathViolation>;
}

impl<F> PathValidator for F
where
	F: Fn(&str) -> Result<(), PathViolation>,
{
	fn validate(&self, path: &str) -> Result<(), PathViolation> {
		self(path)
	}
}

/// Identifier grammar of host paths: `/` separated segments of 1 to
/// [`MAX_SEGMENT_LENGTH`] characters from `a-z A-Z 0-9 . _ + - # [ ] < >`.
#[derive(Default, Clone, Copy)]
#[cfg_attr(feature = "std", derive(Debug))]
pub struct DefaultPathValidator;

impl PathValidator for DefaultPathValidator {
	fn validate(&self, path: &str) -> Result<(), PathViolation> {
		if path.is_empty() {
			return Err(PathViolation::Empty)
		}
		for (index, segment) in path.split('/').enumerate() {
			if segment.is_empty() {
				return Err(PathViolation::EmptySegment(index))
			}
			if segment.len() > MAX_SEGMENT_LENGTH {
				return Err(PathViolation::SegmentTooLong { index, length: segment.len() })
			}
			if let Some(character) = segment.chars().find(|c| !is_identifier_char(*c)) {
				return Err(PathViolation::InvalidCharacter { index, character })
			}
		}
		Ok(())
	}
}

fn is_identifier_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-' | '#' | '[' | ']' | '<' | '>')
}
