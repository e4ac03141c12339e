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

/// Trusted root hash a chained proof is checked against, such as the app hash of
/// a block header.
#[derive(Clone, PartialEq, Eq, Default, Encode, Decode)]
#[cfg_attr(feature = "std", derive(Debug))]
pub struct MerkleRoot {
	hash: Vec<u8>,
}

impl MerkleRoot {
	pub fn new(hash: Vec<u8>) -> Self {
		MerkleRoot { hash }
	}

	pub fn hash(&self) -> &[u8] {
		&self.hash
	}

	/// An empty root is unset and never verifies anything.
	pub fn is_empty(&self) -> bool {
		self.hash.is_empty()
	}
}

impl From<Vec<u8>> for MerkleRoot {
	fn from(hash: Vec<u8>) -> Self {
		MerkleRoot::new(hash)
	}
}

impl AsRef<[u8]> for MerkleRoot {
	fn as_ref(&self) -> &[u8] {
		self.hash()
	}
}
