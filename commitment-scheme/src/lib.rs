// Copyright 2017, 2026 Parity Technologies
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

//! Single-tree commitment proof schemes.
//!
//! A chained commitment proof is a sequence of proofs, one per tree level, each
//! checked with the rules of some single-tree scheme. This crate only describes
//! that scheme; it carries no hashing or proof logic of its own.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
use std::fmt::Debug;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "std")]
pub trait MaybeDebug: Debug {}
#[cfg(feature = "std")]
impl<T: Debug> MaybeDebug for T {}
#[cfg(not(feature = "std"))]
pub trait MaybeDebug {}
#[cfg(not(feature = "std"))]
impl<T> MaybeDebug for T {}

/// Shape of a single-tree proof as seen by the chain verifier.
#[derive(PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Debug))]
pub enum SubProof<'a, E, N> {
	/// Proof that a key is present with a given value.
	Existence(&'a E),
	/// Proof that a key is absent, bracketed by its neighbours.
	NonExistence(&'a N),
	/// Any other shape the scheme can carry (batched proofs, unset proofs).
	Unsupported,
}

impl<'a, E, N> Clone for SubProof<'a, E, N> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<'a, E, N> Copy for SubProof<'a, E, N> {}

/// Trait describing a proof scheme for a single Merkle tree. Used to abstract the
/// chain verifier over the tree format. All methods are associated functions: a
/// scheme holds no state.
pub trait ProofScheme {
	/// Proof for one tree level, as received from a peer.
	type Proof: Clone + PartialEq + MaybeDebug;
	/// Hashing and encoding parameters of one tree level.
	type Spec: Clone + PartialEq + MaybeDebug;
	/// Existence proof carried by a `Proof`.
	type ExistenceProof: MaybeDebug;
	/// Non-existence proof carried by a `Proof`.
	type NonExistenceProof: MaybeDebug;
	/// Error returned when a root cannot be calculated or an element cannot be decoded.
	type Error: MaybeDebug;

	/// Maximum number of levels accepted in a chain, `None` for no limit.
	const MAX_CHAIN_DEPTH: Option<u32> = None;

	/// Whether the proof is unset, the equivalent of a missing entry.
	fn is_empty_proof(proof: &Self::Proof) -> bool;

	/// Whether the spec is unset, the equivalent of a missing entry.
	fn is_empty_spec(spec: &Self::Spec) -> bool;

	/// Classify a proof.
	fn sub_proof(proof: &Self::Proof) -> SubProof<'_, Self::ExistenceProof, Self::NonExistenceProof>;

	/// Existence proof of the left neighbour of an absent key.
	fn left_neighbor(proof: &Self::NonExistenceProof) -> Option<&Self::ExistenceProof>;

	/// Compute the root of the tree the existence proof was taken from.
	fn calculate(proof: &Self::ExistenceProof) -> Result<Vec<u8>, Self::Error>;

	/// Check that `key` maps to `value` in the tree with the given `root`.
	fn verify_membership(
		spec: &Self::Spec,
		root: &[u8],
		proof: &Self::Proof,
		key: &[u8],
		value: &[u8],
	) -> bool;

	/// Check that `key` is absent from the tree with the given `root`.
	fn verify_non_membership(
		spec: &Self::Spec,
		root: &[u8],
		proof: &Self::Proof,
		key: &[u8],
	) -> bool;
}

/// Serialization of the scheme's own elements.
///
/// Chained proofs are transported as lists of opaque byte strings, each element
/// encoded the way the scheme itself encodes it.
pub trait SchemeCodec: ProofScheme {
	fn encode_proof(proof: &Self::Proof) -> Vec<u8>;
	fn decode_proof(data: &[u8]) -> Result<Self::Proof, Self::Error>;
	fn encode_spec(spec: &Self::Spec) -> Vec<u8>;
	fn decode_spec(data: &[u8]) -> Result<Self::Spec, Self::Error>;
}
