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

//! Reference store trees producing ICS-23 proofs, and a two level multistore
//! built from them.
//!
//! Trees follow the Tendermint simple Merkle tree layout so that their proofs
//! verify under `tendermint_spec`.

mod standard_map;

pub use standard_map::{Alphabet, StandardMap, ValueMode};

use ics23::{
	commitment_proof::Proof, CommitmentProof, ExistenceProof, HashOp, HostFunctionsProvider,
	InnerOp, NonExistenceProof, ProofSpec,
};
use ics23_scheme::{tendermint_spec, HostFunctionsManager, Ics23Scheme};
use merkle_commitment::{ChainedCommitmentProof, KeyEncoding, KeyPath, MerklePath, MerkleRoot};
use std::collections::BTreeMap;

/// Chained proof type produced by this crate.
pub type ChainedProof = ChainedCommitmentProof<Ics23Scheme>;

/// Byte prepended to both children when hashing an inner node.
const INNER_PREFIX: u8 = 1;

/// Key under which a key path is committed: its rendered form.
pub fn committed_key(key_path: &KeyPath) -> Vec<u8> {
	key_path.to_string().into_bytes()
}

/// Key path made of a single URL-encoded key.
pub fn single_key(name: &str) -> KeyPath {
	KeyPath::new().append_key(name, KeyEncoding::Url)
}

/// Sorted key-value tree.
#[derive(Default, Clone, Debug)]
pub struct ReferenceTree {
	entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl ReferenceTree {
	pub fn new() -> Self {
		Default::default()
	}

	pub fn from_entries<I, K, V>(entries: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<[u8]>,
		V: AsRef<[u8]>,
	{
		let mut tree = Self::new();
		for (key, value) in entries {
			tree.insert(key, value);
		}
		tree
	}

	pub fn spec() -> ProofSpec {
		tendermint_spec()
	}

	pub fn insert<K: AsRef<[u8]>, V: AsRef<[u8]>>(&mut self, key: K, value: V) {
		self.entries.insert(key.as_ref().to_vec(), value.as_ref().to_vec());
	}

	pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
		self.entries.get(key).map(|value| value.as_slice())
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Root hash, empty for an empty tree.
	pub fn root(&self) -> Vec<u8> {
		let hashes = self.leaf_hashes();
		if hashes.is_empty() {
			return Vec::new()
		}
		subtree_root(&hashes)
	}

	/// Proof that `key` is in the tree with its current value.
	pub fn existence_proof(&self, key: &[u8]) -> Option<ExistenceProof> {
		let index = self.entries.keys().position(|k| k.as_slice() == key)?;
		Some(self.existence_proof_at(index))
	}

	/// Proof that `key` is not in the tree, with its neighbours on either side.
	pub fn non_existence_proof(&self, key: &[u8]) -> Option<NonExistenceProof> {
		if self.entries.contains_key(key) {
			return None
		}
		let right = self.entries.keys().position(|k| k.as_slice() > key);
		let left = match right {
			Some(0) => None,
			Some(index) => Some(index - 1),
			None => self.entries.len().checked_sub(1),
		};
		Some(NonExistenceProof {
			key: key.to_vec(),
			left: left.map(|index| self.existence_proof_at(index)),
			right: right.map(|index| self.existence_proof_at(index)),
		})
	}

	/// Existence proof when `key` is present, non-existence proof otherwise.
	pub fn commitment_proof(&self, key: &[u8]) -> CommitmentProof {
		let proof = match self.existence_proof(key) {
			Some(exist) => Proof::Exist(exist),
			None => Proof::Nonexist(self.non_existence_proof(key).expect("key is absent; qed")),
		};
		CommitmentProof { proof: Some(proof) }
	}

	fn existence_proof_at(&self, index: usize) -> ExistenceProof {
		let (key, value) = self.entries.iter().nth(index).expect("index within entries; qed");
		let mut path = Vec::new();
		proof_path(&self.leaf_hashes(), index, &mut path);
		ExistenceProof {
			key: key.clone(),
			value: value.clone(),
			leaf: Self::spec().leaf_spec,
			path,
		}
	}

	fn leaf_hashes(&self) -> Vec<Vec<u8>> {
		self.entries.iter().map(|(key, value)| leaf_hash(key, value)).collect()
	}
}

fn leaf_hash(key: &[u8], value: &[u8]) -> Vec<u8> {
	let leaf = ExistenceProof {
		key: key.to_vec(),
		value: value.to_vec(),
		leaf: ReferenceTree::spec().leaf_spec,
		path: Vec::new(),
	};
	ics23::calculate_existence_root::<HostFunctionsManager>(&leaf)
		.expect("leaf op of the spec is complete; qed")
}

fn inner_hash(left: &[u8], right: &[u8]) -> Vec<u8> {
	let mut preimage = Vec::with_capacity(1 + left.len() + right.len());
	preimage.push(INNER_PREFIX);
	preimage.extend_from_slice(left);
	preimage.extend_from_slice(right);
	HostFunctionsManager::sha2_256(&preimage).to_vec()
}

/// Largest power of two strictly below `count`.
fn split_point(count: usize) -> usize {
	debug_assert!(count > 1);
	let mut split = 1;
	while split * 2 < count {
		split *= 2;
	}
	split
}

fn subtree_root(hashes: &[Vec<u8>]) -> Vec<u8> {
	if hashes.len() == 1 {
		return hashes[0].clone()
	}
	let (left, right) = hashes.split_at(split_point(hashes.len()));
	inner_hash(&subtree_root(left), &subtree_root(right))
}

/// Root of `hashes`, pushing the inner ops from leaf `index` up to it onto `path`.
fn proof_path(hashes: &[Vec<u8>], index: usize, path: &mut Vec<InnerOp>) -> Vec<u8> {
	if hashes.len() == 1 {
		return hashes[0].clone()
	}
	let split = split_point(hashes.len());
	let (left, right) = hashes.split_at(split);
	let (left, right, op) = if index < split {
		let left = proof_path(left, index, path);
		let right = subtree_root(right);
		let op =
			InnerOp { hash: HashOp::Sha256 as i32, prefix: vec![INNER_PREFIX], suffix: right.clone() };
		(left, right, op)
	} else {
		let right = proof_path(right, index - split, path);
		let left = subtree_root(left);
		let mut prefix = vec![INNER_PREFIX];
		prefix.extend_from_slice(&left);
		let op = InnerOp { hash: HashOp::Sha256 as i32, prefix, suffix: Vec::new() };
		(left, right, op)
	};
	path.push(op);
	inner_hash(&left, &right)
}

/// Chained membership proof through `levels`, lowest subtree first. Each tree
/// but the last must hold the root of the one before it under its key path.
pub fn chained_membership_proof(levels: &[(&ReferenceTree, &KeyPath)]) -> Option<ChainedProof> {
	let mut proofs = Vec::with_capacity(levels.len());
	for (tree, key_path) in levels {
		let exist = tree.existence_proof(&committed_key(key_path))?;
		proofs.push(CommitmentProof { proof: Some(Proof::Exist(exist)) });
	}
	Some(ChainedCommitmentProof::new(proofs, vec![ReferenceTree::spec(); levels.len()]))
}

/// Chained non-membership proof: absence from the first tree, membership of its
/// root in the ones above.
pub fn chained_non_membership_proof(levels: &[(&ReferenceTree, &KeyPath)]) -> Option<ChainedProof> {
	let ((lowest, key_path), above) = levels.split_first()?;
	let absent = lowest.non_existence_proof(&committed_key(key_path))?;
	let mut proofs = vec![CommitmentProof { proof: Some(Proof::Nonexist(absent)) }];
	for (tree, key_path) in above {
		let exist = tree.existence_proof(&committed_key(key_path))?;
		proofs.push(CommitmentProof { proof: Some(Proof::Exist(exist)) });
	}
	Some(ChainedCommitmentProof::new(proofs, vec![ReferenceTree::spec(); levels.len()]))
}

/// Named substores whose roots are committed in an outer store tree.
#[derive(Default, Clone, Debug)]
pub struct MultiStore {
	stores: BTreeMap<String, ReferenceTree>,
}

impl MultiStore {
	pub fn new() -> Self {
		Default::default()
	}

	/// Insert `value` under `key` in the substore `store`, creating it if needed.
	pub fn insert(&mut self, store: &str, key: &KeyPath, value: &[u8]) {
		self.stores.entry(store.to_string()).or_default().insert(committed_key(key), value);
	}

	pub fn store(&self, store: &str) -> Option<&ReferenceTree> {
		self.stores.get(store)
	}

	/// Outer tree mapping each store name to the root of the store.
	pub fn outer(&self) -> ReferenceTree {
		ReferenceTree::from_entries(
			self.stores
				.iter()
				.map(|(name, store)| (committed_key(&single_key(name)), store.root())),
		)
	}

	pub fn root(&self) -> MerkleRoot {
		MerkleRoot::new(self.outer().root())
	}

	/// Path of `key` in `store`, store level first.
	pub fn path(&self, store: &str, key: &KeyPath) -> MerklePath {
		MerklePath::from_key_paths(vec![single_key(store), key.clone()])
	}

	pub fn membership_proof(&self, store: &str, key: &KeyPath) -> Option<ChainedProof> {
		let outer = self.outer();
		chained_membership_proof(&[(self.store(store)?, key), (&outer, &single_key(store))])
	}

	pub fn non_membership_proof(&self, store: &str, key: &KeyPath) -> Option<ChainedProof> {
		let outer = self.outer();
		chained_non_membership_proof(&[(self.store(store)?, key), (&outer, &single_key(store))])
	}
}
