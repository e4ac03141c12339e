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

//! Chained commitment proofs.
//!
//! A chained proof is a list of single-tree proofs with the spec of the tree each
//! one was taken from. Proofs are ordered from the lowest subtree to the final
//! tree: the root calculated from each proof is the value proven present by the
//! next one.

#[cfg(feature = "std")]
use crate::rstd::fmt;
use crate::{
	rstd::{iter, slice, vec::Vec},
	verify::VerifyError,
};
use commitment_scheme::{ProofScheme, SchemeCodec};
use parity_scale_codec::{Decode, Encode, Error as CodecError, Input, Output};

/// Proofs for a chain of nested trees, lowest subtree first, with the spec of
/// each tree at the same position.
pub struct ChainedCommitmentProof<S: ProofScheme> {
	proofs: Vec<S::Proof>,
	specs: Vec<S::Spec>,
}

impl<S: ProofScheme> ChainedCommitmentProof<S> {
	/// Build a chain from its parts. The chain is checked by
	/// [`validate_basic`](Self::validate_basic), not here.
	pub fn new(proofs: Vec<S::Proof>, specs: Vec<S::Spec>) -> Self {
		ChainedCommitmentProof { proofs, specs }
	}

	pub fn proofs(&self) -> &[S::Proof] {
		&self.proofs
	}

	pub fn specs(&self) -> &[S::Spec] {
		&self.specs
	}

	/// Number of proofs in the chain.
	pub fn len(&self) -> usize {
		self.proofs.len()
	}

	/// Proof and spec pairs, lowest subtree first.
	pub fn levels(&self) -> iter::Zip<slice::Iter<'_, S::Proof>, slice::Iter<'_, S::Spec>> {
		self.proofs.iter().zip(self.specs.iter())
	}

	/// Whether either list is empty or holds an unset entry.
	pub fn is_empty(&self) -> bool {
		self.proofs.is_empty() ||
			self.specs.is_empty() ||
			self.proofs.iter().any(S::is_empty_proof) ||
			self.specs.iter().any(S::is_empty_spec)
	}

	/// Structural checks done before any verification.
	pub fn validate_basic(&self) -> Result<(), VerifyError<S::Error>> {
		if self.is_empty() || self.proofs.len() != self.specs.len() {
			return Err(VerifyError::MalformedProof)
		}
		if let Some(max) = S::MAX_CHAIN_DEPTH {
			if self.proofs.len() > max as usize {
				return Err(VerifyError::ChainTooDeep { depth: self.proofs.len(), max })
			}
		}
		Ok(())
	}
}

impl<S: ProofScheme> Clone for ChainedCommitmentProof<S> {
	fn clone(&self) -> Self {
		ChainedCommitmentProof { proofs: self.proofs.clone(), specs: self.specs.clone() }
	}
}

impl<S: ProofScheme> PartialEq for ChainedCommitmentProof<S> {
	fn eq(&self, other: &Self) -> bool {
		self.proofs == other.proofs && self.specs == other.specs
	}
}

#[cfg(feature = "std")]
impl<S: ProofScheme> fmt::Debug for ChainedCommitmentProof<S> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("ChainedCommitmentProof")
			.field("proofs", &self.proofs)
			.field("specs", &self.specs)
			.finish()
	}
}

/// Encoded as two lists of byte strings, each element in the scheme's own encoding.
impl<S: SchemeCodec> Encode for ChainedCommitmentProof<S> {
	fn encode_to<T: Output + ?Sized>(&self, dest: &mut T) {
		let proofs: Vec<Vec<u8>> = self.proofs.iter().map(S::encode_proof).collect();
		let specs: Vec<Vec<u8>> = self.specs.iter().map(S::encode_spec).collect();
		proofs.encode_to(dest);
		specs.encode_to(dest);
	}
}

impl<S: SchemeCodec> Decode for ChainedCommitmentProof<S> {
	fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
		let proofs = <Vec<Vec<u8>>>::decode(input)?
			.iter()
			.map(|proof| S::decode_proof(proof))
			.collect::<Result<Vec<_>, _>>()
			.map_err(|_| CodecError::from("Invalid sub-proof encoding"))?;
		let specs = <Vec<Vec<u8>>>::decode(input)?
			.iter()
			.map(|spec| S::decode_spec(spec))
			.collect::<Result<Vec<_>, _>>()
			.map_err(|_| CodecError::from("Invalid proof spec encoding"))?;
		Ok(ChainedCommitmentProof { proofs, specs })
	}
}
