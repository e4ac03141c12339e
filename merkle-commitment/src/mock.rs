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

//! Proof scheme used by the unit tests. Proofs state their root outright, so
//! chains can be assembled by hand and every check is a plain comparison.

use crate::{ChainedCommitmentProof, MerklePath, MerkleRoot};
use commitment_scheme::{ProofScheme, SchemeCodec, SubProof};
use parity_scale_codec::{Decode, Encode};
use std::cell::Cell;

thread_local! {
	static CALCULATIONS: Cell<usize> = Cell::new(0);
}

/// Number of roots calculated on this thread so far.
pub fn calculations() -> usize {
	CALCULATIONS.with(|count| count.get())
}

#[derive(Clone, PartialEq, Debug, Encode, Decode)]
pub struct Existence {
	pub key: Vec<u8>,
	pub value: Vec<u8>,
	pub root: Vec<u8>,
}

#[derive(Clone, PartialEq, Debug, Encode, Decode)]
pub struct NonExistence {
	pub key: Vec<u8>,
	pub left: Option<Existence>,
}

#[derive(Clone, PartialEq, Debug, Encode, Decode)]
pub enum Proof {
	Exist(Existence),
	NonExist(NonExistence),
	Batch,
	Unset,
}

/// `false` stands for an unset spec.
#[derive(Clone, PartialEq, Debug, Encode, Decode)]
pub struct Spec(pub bool);

pub struct MockScheme;

impl ProofScheme for MockScheme {
	type Proof = Proof;
	type Spec = Spec;
	type ExistenceProof = Existence;
	type NonExistenceProof = NonExistence;
	type Error = &'static str;

	fn is_empty_proof(proof: &Proof) -> bool {
		*proof == Proof::Unset
	}

	fn is_empty_spec(spec: &Spec) -> bool {
		!spec.0
	}

	fn sub_proof(proof: &Proof) -> SubProof<'_, Existence, NonExistence> {
		match proof {
			Proof::Exist(exist) => SubProof::Existence(exist),
			Proof::NonExist(nonexist) => SubProof::NonExistence(nonexist),
			_ => SubProof::Unsupported,
		}
	}

	fn left_neighbor(proof: &NonExistence) -> Option<&Existence> {
		proof.left.as_ref()
	}

	fn calculate(proof: &Existence) -> Result<Vec<u8>, &'static str> {
		CALCULATIONS.with(|count| count.set(count.get() + 1));
		if proof.root.is_empty() {
			return Err("no root")
		}
		Ok(proof.root.clone())
	}

	fn verify_membership(_: &Spec, root: &[u8], proof: &Proof, key: &[u8], value: &[u8]) -> bool {
		match proof {
			Proof::Exist(exist) => exist.root == root && exist.key == key && exist.value == value,
			_ => false,
		}
	}

	fn verify_non_membership(_: &Spec, root: &[u8], proof: &Proof, key: &[u8]) -> bool {
		match proof {
			Proof::NonExist(NonExistence { key: absent, left: Some(left) }) =>
				absent == key && left.root == root && left.key.as_slice() < key,
			_ => false,
		}
	}
}

impl SchemeCodec for MockScheme {
	fn encode_proof(proof: &Proof) -> Vec<u8> {
		proof.encode()
	}

	fn decode_proof(mut data: &[u8]) -> Result<Proof, &'static str> {
		Proof::decode(&mut data).map_err(|_| "invalid proof")
	}

	fn encode_spec(spec: &Spec) -> Vec<u8> {
		spec.encode()
	}

	fn decode_spec(mut data: &[u8]) -> Result<Spec, &'static str> {
		Spec::decode(&mut data).map_err(|_| "invalid spec")
	}
}

/// Same as [`MockScheme`] but accepting at most `MAX` levels.
pub struct BoundedScheme<const MAX: u32>;

impl<const MAX: u32> ProofScheme for BoundedScheme<MAX> {
	type Proof = Proof;
	type Spec = Spec;
	type ExistenceProof = Existence;
	type NonExistenceProof = NonExistence;
	type Error = &'static str;

	const MAX_CHAIN_DEPTH: Option<u32> = Some(MAX);

	fn is_empty_proof(proof: &Proof) -> bool {
		MockScheme::is_empty_proof(proof)
	}

	fn is_empty_spec(spec: &Spec) -> bool {
		MockScheme::is_empty_spec(spec)
	}

	fn sub_proof(proof: &Proof) -> SubProof<'_, Existence, NonExistence> {
		MockScheme::sub_proof(proof)
	}

	fn left_neighbor(proof: &NonExistence) -> Option<&Existence> {
		MockScheme::left_neighbor(proof)
	}

	fn calculate(proof: &Existence) -> Result<Vec<u8>, &'static str> {
		MockScheme::calculate(proof)
	}

	fn verify_membership(spec: &Spec, root: &[u8], proof: &Proof, key: &[u8], value: &[u8]) -> bool {
		MockScheme::verify_membership(spec, root, proof, key, value)
	}

	fn verify_non_membership(spec: &Spec, root: &[u8], proof: &Proof, key: &[u8]) -> bool {
		MockScheme::verify_non_membership(spec, root, proof, key)
	}
}

pub fn exist(key: &str, value: &[u8], root: &[u8]) -> Proof {
	Proof::Exist(Existence { key: key.into(), value: value.to_vec(), root: root.to_vec() })
}

pub fn nonexist(key: &str, left_key: &str, root: &[u8]) -> Proof {
	let left = Existence { key: left_key.into(), value: b"neighbour".to_vec(), root: root.to_vec() };
	Proof::NonExist(NonExistence { key: key.into(), left: Some(left) })
}

pub fn chain(proofs: Vec<Proof>) -> ChainedCommitmentProof<MockScheme> {
	let specs = vec![Spec(true); proofs.len()];
	ChainedCommitmentProof::new(proofs, specs)
}

/// Two store levels, `store` holding `key`, as a path and the matching root.
pub fn two_levels(store: &str, key: &str) -> (MerkleRoot, MerklePath) {
	let path = crate::apply_prefix(
		&crate::MerklePrefix::new(store.as_bytes().to_vec()),
		&MerklePath::new(&[key]),
	)
	.unwrap();
	(MerkleRoot::new(b"root".to_vec()), path)
}
