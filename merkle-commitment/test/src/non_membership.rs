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

use crate::{init_logger, key_path, path, test_multistore, TEST_STORE};
use merkle_commitment::{MerkleRoot, VerifyError};
use reference_store::{chained_non_membership_proof, single_key, ReferenceTree};

#[test]
fn absent_key_in_substore() {
	init_logger();
	let multistore = test_multistore();
	let root = multistore.root();

	for segments in [&["connections", "connection-1"][..], &["ports", "transfer"], &["zzz"]] {
		let proof = multistore.non_membership_proof(TEST_STORE, &key_path(segments)).unwrap();
		let path = multistore.path(TEST_STORE, &key_path(segments));
		assert_eq!(proof.verify_non_membership(&root, &path), Ok(()));
	}
}

#[test]
fn absent_key_below_all_entries_is_rejected() {
	let multistore = test_multistore();
	let segments = &["aaa"];
	let proof = multistore.non_membership_proof(TEST_STORE, &key_path(segments)).unwrap();
	let path = multistore.path(TEST_STORE, &key_path(segments));

	assert_eq!(
		proof.verify_non_membership(&multistore.root(), &path),
		Err(VerifyError::MissingLeftNeighbor),
	);
}

#[test]
fn existence_proof_cannot_prove_absence() {
	let multistore = test_multistore();
	let segments = &["connections", "connection-0"];
	let proof = multistore.membership_proof(TEST_STORE, &key_path(segments)).unwrap();
	let path = multistore.path(TEST_STORE, &key_path(segments));

	assert_eq!(
		proof.verify_non_membership(&multistore.root(), &path),
		Err(VerifyError::NotNonExistenceProof),
	);
}

#[test]
fn absence_proof_of_other_key_is_rejected() {
	let multistore = test_multistore();
	let proof = multistore
		.non_membership_proof(TEST_STORE, &key_path(&["connections", "connection-1"]))
		.unwrap();
	let present = multistore.path(TEST_STORE, &key_path(&["connections", "connection-0"]));

	assert_eq!(
		proof.verify_non_membership(&multistore.root(), &present),
		Err(VerifyError::InvalidProof { level: 0, path: "ibc/connections/connection-0".into() }),
	);
}

#[test]
fn non_membership_proof_cannot_prove_membership() {
	let multistore = test_multistore();
	let segments = &["connections", "connection-1"];
	let proof = multistore.non_membership_proof(TEST_STORE, &key_path(segments)).unwrap();
	let path = multistore.path(TEST_STORE, &key_path(segments));

	assert_eq!(
		proof.verify_membership(&multistore.root(), &path, b"connection"),
		Err(VerifyError::NotExistenceProof(0)),
	);
}

#[test]
fn wrong_root_is_rejected() {
	let multistore = test_multistore();
	let segments = &["connections", "connection-1"];
	let proof = multistore.non_membership_proof(TEST_STORE, &key_path(segments)).unwrap();
	let path = multistore.path(TEST_STORE, &key_path(segments));

	assert!(matches!(
		proof.verify_non_membership(&MerkleRoot::new(vec![1; 32]), &path),
		Err(VerifyError::InvalidProof { level: 1, .. }),
	));
}

#[test]
fn single_level_absence_is_anchored_to_trusted_root() {
	let tree = ReferenceTree::from_entries(vec![("a", "1"), ("c", "3")]);
	let proof = chained_non_membership_proof(&[(&tree, &single_key("b"))]).unwrap();

	assert_eq!(proof.verify_non_membership(&MerkleRoot::new(tree.root()), &path(&["b"])), Ok(()));

	let other = ReferenceTree::from_entries(vec![("a", "1"), ("c", "4")]);
	assert_eq!(
		proof.verify_non_membership(&MerkleRoot::new(other.root()), &path(&["b"])),
		Err(VerifyError::InvalidProof { level: 0, path: "b".into() }),
	);
}

#[test]
fn mismatched_chain_length_is_rejected() {
	let tree = ReferenceTree::from_entries(vec![("a", "1"), ("c", "3")]);
	let proof = chained_non_membership_proof(&[(&tree, &single_key("b"))]).unwrap();
	let multistore = test_multistore();
	let path = multistore.path(TEST_STORE, &single_key("b"));

	assert_eq!(
		proof.verify_non_membership(&MerkleRoot::new(tree.root()), &path),
		Err(VerifyError::ChainLengthMismatch { proofs: 1, path: 2 }),
	);
}
