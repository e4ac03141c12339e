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

//! Verification of chained commitment proofs.
//!
//! Proofs run from the lowest subtree up to the final tree while the path lists
//! levels from the final tree down, so proof `i` of a chain of `n` is checked
//! against path level `n - 1 - i`. Every level but the last is checked against
//! the root calculated from its own proof; the last level is checked against the
//! trusted root, which is what ties the whole chain to it.

#[cfg(feature = "std")]
use crate::rstd::{fmt, Error};
use crate::{
	key_path::KeyPath,
	path::MerklePath,
	proof::ChainedCommitmentProof,
	rstd::{
		string::{String, ToString},
		vec::Vec,
	},
	root::MerkleRoot,
	LOG_TARGET,
};
use commitment_scheme::{ProofScheme, SubProof};
use log::{debug, trace};

/// Reasons a chained proof is rejected. All of them mean the proof is invalid for
/// the statement being verified; the variant tells where it failed.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Debug))]
pub enum VerifyError<E> {
	/// The chain is empty, holds an unset entry, or its proof and spec lists differ
	/// in length.
	MalformedProof,
	/// The chain has more levels than the scheme accepts.
	ChainTooDeep { depth: usize, max: u32 },
	/// The root, the path or the value is empty.
	EmptyParams,
	/// The chain does not have exactly one proof per path level.
	ChainLengthMismatch { proofs: usize, path: usize },
	/// The proof at this level is not an existence proof.
	NotExistenceProof(usize),
	/// The proof for the lowest subtree is not a non-existence proof.
	NotNonExistenceProof,
	/// The non-existence proof has no left neighbour to calculate the subtree root
	/// from.
	MissingLeftNeighbor,
	/// The subtree root could not be calculated from the proof at this level.
	CalculateRoot(usize, E),
	/// The proof at `level` does not hold for `path`.
	InvalidProof { level: usize, path: String },
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> fmt::Display for VerifyError<E> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			VerifyError::MalformedProof => write!(f, "Chained proof is empty or malformed"),
			VerifyError::ChainTooDeep { depth, max } =>
				write!(f, "Proof chain has {} levels, at most {} are accepted", depth, max),
			VerifyError::EmptyParams => write!(f, "Empty root, path or value"),
			VerifyError::ChainLengthMismatch { proofs, path } => write!(
				f,
				"Invalid chained proof: proof chain length {} not the same as path length {}",
				proofs, path
			),
			VerifyError::NotExistenceProof(level) =>
				write!(f, "Proof at level {} is not an existence proof", level),
			VerifyError::NotNonExistenceProof =>
				write!(f, "Proof for the lowest subtree is not a non-existence proof"),
			VerifyError::MissingLeftNeighbor =>
				write!(f, "Non-existence proof has no left neighbour"),
			VerifyError::CalculateRoot(level, err) =>
				write!(f, "Unable to calculate subtree root at level {}: {:?}", level, err),
			VerifyError::InvalidProof { level, path } =>
				write!(f, "Invalid proof for path {} at level {}", path, level),
		}
	}
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> Error for VerifyError<E> {}

impl<S: ProofScheme> ChainedCommitmentProof<S> {
	/// Verify that `value` is committed under `path` by the trusted `root`.
	pub fn verify_membership(
		&self,
		root: &MerkleRoot,
		path: &MerklePath,
		value: &[u8],
	) -> Result<(), VerifyError<S::Error>> {
		self.validate_basic()?;
		if root.is_empty() || path.is_empty() || value.is_empty() {
			return Err(VerifyError::EmptyParams)
		}
		self.check_chain_length(path)?;

		let mut value = value.to_vec();
		for (level, (proof, spec)) in self.levels().enumerate() {
			// Each subtree root is the value proven present one level up.
			value = self.verify_existence_level(level, proof, spec, root, path, &value)?;
		}
		Ok(())
	}

	/// Verify that nothing is committed under `path` by the trusted `root`: the key
	/// is absent from the lowest subtree, and each subtree root is present in the
	/// tree above it.
	pub fn verify_non_membership(
		&self,
		root: &MerkleRoot,
		path: &MerklePath,
	) -> Result<(), VerifyError<S::Error>> {
		self.validate_basic()?;
		if root.is_empty() || path.is_empty() {
			return Err(VerifyError::EmptyParams)
		}
		self.check_chain_length(path)?;

		let mut levels = self.levels().enumerate();
		let mut value = match levels.next() {
			Some((level, (proof, spec))) =>
				self.verify_absence_level(level, proof, spec, root, path)?,
			None => return Err(VerifyError::MalformedProof),
		};
		for (level, (proof, spec)) in levels {
			value = self.verify_existence_level(level, proof, spec, root, path, &value)?;
		}
		Ok(())
	}

	fn check_chain_length(&self, path: &MerklePath) -> Result<(), VerifyError<S::Error>> {
		if self.len() != path.len() {
			debug!(
				target: LOG_TARGET,
				"Proof chain length {} does not match path length {}",
				self.len(),
				path.len(),
			);
			return Err(VerifyError::ChainLengthMismatch { proofs: self.len(), path: path.len() })
		}
		Ok(())
	}

	/// Key path proven at `level`, taken from the path in reverse order.
	fn subpath<'p>(&self, path: &'p MerklePath, level: usize) -> &'p KeyPath {
		&path.key_paths()[path.len() - 1 - level]
	}

	/// Root the proof at `level` is checked against.
	fn anchor<'a>(&self, level: usize, root: &'a MerkleRoot, subroot: &'a [u8]) -> &'a [u8] {
		if level == self.len() - 1 {
			root.hash()
		} else {
			subroot
		}
	}

	/// Check the existence proof at `level` and return the subtree root it commits to.
	fn verify_existence_level(
		&self,
		level: usize,
		proof: &S::Proof,
		spec: &S::Spec,
		root: &MerkleRoot,
		path: &MerklePath,
		value: &[u8],
	) -> Result<Vec<u8>, VerifyError<S::Error>> {
		let subpath = self.subpath(path, level);
		trace!(target: LOG_TARGET, "Level {}: proving membership of {}", level, subpath);
		let key = subpath.to_string().into_bytes();

		let exist = match S::sub_proof(proof) {
			SubProof::Existence(exist) => exist,
			_ => {
				debug!(target: LOG_TARGET, "Level {}: not an existence proof", level);
				return Err(VerifyError::NotExistenceProof(level))
			},
		};
		let subroot = S::calculate(exist).map_err(|err| VerifyError::CalculateRoot(level, err))?;

		if !S::verify_membership(spec, self.anchor(level, root, &subroot), proof, &key, value) {
			debug!(target: LOG_TARGET, "Level {}: membership proof rejected", level);
			return Err(VerifyError::InvalidProof { level, path: path.to_string() })
		}
		Ok(subroot)
	}

	/// Check the non-existence proof of the lowest subtree and return its root.
	fn verify_absence_level(
		&self,
		level: usize,
		proof: &S::Proof,
		spec: &S::Spec,
		root: &MerkleRoot,
		path: &MerklePath,
	) -> Result<Vec<u8>, VerifyError<S::Error>> {
		let subpath = self.subpath(path, level);
		trace!(target: LOG_TARGET, "Level {}: proving absence of {}", level, subpath);
		let key = subpath.to_string().into_bytes();

		let nonexist = match S::sub_proof(proof) {
			SubProof::NonExistence(nonexist) => nonexist,
			_ => {
				debug!(target: LOG_TARGET, "Level {}: not a non-existence proof", level);
				return Err(VerifyError::NotNonExistenceProof)
			},
		};
		let left = S::left_neighbor(nonexist).ok_or(VerifyError::MissingLeftNeighbor)?;
		let subroot = S::calculate(left).map_err(|err| VerifyError::CalculateRoot(level, err))?;

		if !S::verify_non_membership(spec, self.anchor(level, root, &subroot), proof, &key) {
			debug!(target: LOG_TARGET, "Level {}: non-membership proof rejected", level);
			return Err(VerifyError::InvalidProof { level, path: path.to_string() })
		}
		Ok(subroot)
	}
}
