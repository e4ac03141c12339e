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

//! Key paths: the keys of one tree level and their textual form.
//!
//! A key path renders as its keys joined by `/`. URL keys are percent-encoded so
//! that a `/` inside a key never reads as a separator; hex keys render as `x:`
//! followed by upper-case hex.

use crate::rstd::{fmt, vec::Vec};
use parity_scale_codec::{Decode, Encode};
use percent_encoding::{percent_decode, percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left as is in a URL-encoded key. Everything else is escaped, including
/// `/` and `:`.
const URL_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'.')
	.remove(b'_')
	.remove(b'~')
	.remove(b'$')
	.remove(b'&')
	.remove(b'+')
	.remove(b'=')
	.remove(b'@');

const HEX_PREFIX: &str = "x:";

/// How a key is rendered in a path string.
#[derive(Clone, Copy, PartialEq, Eq, Encode, Decode)]
#[cfg_attr(feature = "std", derive(Debug))]
pub enum KeyEncoding {
	/// Percent-encoded bytes.
	Url,
	/// `x:` followed by upper-case hex.
	Hex,
}

/// A single key of a key path.
#[derive(Clone, PartialEq, Eq, Encode, Decode)]
#[cfg_attr(feature = "std", derive(Debug))]
pub struct Key {
	name: Vec<u8>,
	encoding: KeyEncoding,
}

impl Key {
	pub fn new(name: Vec<u8>, encoding: KeyEncoding) -> Self {
		Key { name, encoding }
	}

	pub fn name(&self) -> &[u8] {
		&self.name
	}

	pub fn encoding(&self) -> KeyEncoding {
		self.encoding
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.encoding {
			KeyEncoding::Url => write!(f, "{}", percent_encode(&self.name, URL_SEGMENT)),
			KeyEncoding::Hex => write!(f, "{}{}", HEX_PREFIX, hex::encode_upper(&self.name)),
		}
	}
}

/// Errors when parsing a key path string. Positions are segment indices.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Debug))]
pub enum KeyPathError {
	/// Two separators follow each other, or the path begins or ends with one.
	EmptySegment(usize),
	/// An `x:` segment is not valid hex.
	InvalidHex(usize),
	/// A `%` is not followed by two hex digits.
	InvalidEscape(usize),
}

#[cfg(feature = "std")]
impl fmt::Display for KeyPathError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			KeyPathError::EmptySegment(index) => write!(f, "Empty key at segment {}", index),
			KeyPathError::InvalidHex(index) => write!(f, "Invalid hex key at segment {}", index),
			KeyPathError::InvalidEscape(index) =>
				write!(f, "Invalid percent-encoding at segment {}", index),
		}
	}
}

#[cfg(feature = "std")]
impl crate::rstd::Error for KeyPathError {}

/// Ordered keys addressing a value inside one tree.
#[derive(Clone, PartialEq, Eq, Default, Encode, Decode)]
#[cfg_attr(feature = "std", derive(Debug))]
pub struct KeyPath(Vec<Key>);

impl KeyPath {
	pub fn new() -> Self {
		KeyPath(Vec::new())
	}

	/// Append a key, consuming and returning the path.
	pub fn append_key<K: AsRef<[u8]>>(mut self, name: K, encoding: KeyEncoding) -> Self {
		self.0.push(Key::new(name.as_ref().to_vec(), encoding));
		self
	}

	pub fn keys(&self) -> &[Key] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Parse the string form of a key path back into its keys.
	///
	/// An empty string is the empty key path.
	pub fn parse(path: &str) -> Result<Self, KeyPathError> {
		if path.is_empty() {
			return Ok(KeyPath::new())
		}

		let mut keys = Vec::new();
		for (index, segment) in path.split('/').enumerate() {
			if segment.is_empty() {
				return Err(KeyPathError::EmptySegment(index))
			}
			let key = match segment.strip_prefix(HEX_PREFIX) {
				Some(digits) => {
					let name = hex::decode(digits).map_err(|_| KeyPathError::InvalidHex(index))?;
					Key::new(name, KeyEncoding::Hex)
				},
				None => {
					if !is_well_escaped(segment.as_bytes()) {
						return Err(KeyPathError::InvalidEscape(index))
					}
					Key::new(percent_decode(segment.as_bytes()).collect(), KeyEncoding::Url)
				},
			};
			keys.push(key);
		}
		Ok(KeyPath(keys))
	}
}

impl fmt::Display for KeyPath {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for (index, key) in self.0.iter().enumerate() {
			if index != 0 {
				f.write_str("/")?;
			}
			write!(f, "{}", key)?;
		}
		Ok(())
	}
}

/// `percent_decode` passes malformed escapes through untouched, so they are
/// rejected here first.
fn is_well_escaped(segment: &[u8]) -> bool {
	let mut offset = 0;
	while offset < segment.len() {
		if segment[offset] != b'%' {
			offset += 1;
			continue
		}
		match segment.get(offset + 1..offset + 3) {
			Some(&[high, low]) if high.is_ascii_hexdigit() && low.is_ascii_hexdigit() =>
				offset += 3,
			_ => return false,
		}
	}
	true
}
