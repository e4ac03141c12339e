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

use crate::rstd::vec::Vec;
use parity_scale_codec::{Decode, Encode};

/// Key prefix of a store. Applied to a path it becomes the outermost level, the
/// key under which the store's own root is committed.
#[derive(Clone, PartialEq, Eq, Default, Encode, Decode)]
#[cfg_attr(feature = "std", derive(Debug))]
pub struct MerklePrefix {
	key_prefix: Vec<u8>,
}

impl MerklePrefix {
	pub fn new(key_prefix: Vec<u8>) -> Self {
		MerklePrefix { key_prefix }
	}

	pub fn bytes(&self) -> &[u8] {
		&self.key_prefix
	}

	pub fn is_empty(&self) -> bool {
		self.key_prefix.is_empty()
	}
}

impl From<Vec<u8>> for MerklePrefix {
	fn from(key_prefix: Vec<u8>) -> Self {
		MerklePrefix::new(key_prefix)
	}
}

impl AsRef<[u8]> for MerklePrefix {
	fn as_ref(&self) -> &[u8] {
		self.bytes()
	}
}
