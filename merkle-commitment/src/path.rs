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

//! Commitment paths over nested trees and composition with store prefixes.

use crate::{
	host::{DefaultPathValidator, PathValidator, PathViolation},
	key_path::{KeyEncoding, KeyPath},
	prefix::MerklePrefix,
	rstd::{
		fmt,
		string::{String, ToString},
		vec,
		vec::Vec,
	},
};
use parity_scale_codec::{Decode, Encode};
use percent_encoding::percent_decode;

/// Errors when building or rendering a commitment path.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Debug))]
pub enum PathError {
	/// The path string does not satisfy the path validator.
	InvalidPath(PathViolation),
	/// A prefix must have at least one byte.
	EmptyPrefix,
	/// The unescaped path is not valid UTF-8. Holds the escaped path.
	InvalidEncoding(String),
}

#[cfg(feature = "std")]
impl fmt::Display for PathError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			PathError::InvalidPath(violation) => write!(f, "Invalid path: {}", violation),
			PathError::EmptyPrefix => write!(f, "Prefix can't be empty"),
			PathError::InvalidEncoding(path) =>
				write!(f, "Path {} does not unescape to valid UTF-8", path),
		}
	}
}

#[cfg(feature = "std")]
impl crate::rstd::Error for PathError {
	fn source(&self) -> Option<&(dyn crate::rstd::Error + 'static)> {
		match self {
			PathError::InvalidPath(violation) => Some(violation),
			_ => None,
		}
	}
}

/// Path of a value in a chain of nested trees: one key path per tree, outermost
/// tree first.
#[derive(Clone, PartialEq, Eq, Default, Encode, Decode)]
#[cfg_attr(feature = "std", derive(Debug))]
pub struct MerklePath {
	key_paths: Vec<KeyPath>,
}

impl MerklePath {
	/// A single level path made of URL-encoded keys.
	pub fn new<I>(segments: I) -> Self
	where
		I: IntoIterator,
		I::Item: AsRef<[u8]>,
	{
		let key_path = segments
			.into_iter()
			.fold(KeyPath::new(), |key_path, segment| key_path.append_key(segment, KeyEncoding::Url));
		MerklePath { key_paths: vec![key_path] }
	}

	pub fn from_key_paths(key_paths: Vec<KeyPath>) -> Self {
		MerklePath { key_paths }
	}

	pub fn key_paths(&self) -> &[KeyPath] {
		&self.key_paths
	}

	/// Number of levels.
	pub fn len(&self) -> usize {
		self.key_paths.len()
	}

	pub fn is_empty(&self) -> bool {
		self.key_paths.is_empty()
	}

	/// The path with percent-escapes decoded, for display only.
	pub fn pretty(&self) -> Result<String, PathError> {
		let encoded = self.to_string();
		let decoded =
			percent_decode(encoded.as_bytes()).decode_utf8().map(|path| path.into_owned());
		decoded.map_err(|_| PathError::InvalidEncoding(encoded))
	}
}

impl fmt::Display for MerklePath {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for (index, key_path) in self.key_paths.iter().enumerate() {
			if index != 0 {
				f.write_str("/")?;
			}
			write!(f, "{}", key_path)?;
		}
		Ok(())
	}
}

/// Prepend the store prefix to `path` as a new outermost level, checking the path
/// with [`DefaultPathValidator`].
pub fn apply_prefix(prefix: &MerklePrefix, path: &MerklePath) -> Result<MerklePath, PathError> {
	apply_prefix_with(&DefaultPathValidator, prefix, path)
}

/// [`apply_prefix`] with a caller supplied validator.
pub fn apply_prefix_with<V: PathValidator + ?Sized>(
	validator: &V,
	prefix: &MerklePrefix,
	path: &MerklePath,
) -> Result<MerklePath, PathError> {
	validator.validate(&path.to_string()).map_err(PathError::InvalidPath)?;
	if prefix.is_empty() {
		return Err(PathError::EmptyPrefix)
	}

	let mut key_paths = MerklePath::new(&[prefix.bytes()]).key_paths;
	key_paths.extend(path.key_paths.iter().cloned());
	Ok(MerklePath { key_paths })
}
