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

use crate::{key_path, test_multistore, TEST_STORE};
use hex_literal::hex;
use merkle_commitment::{MerklePath, MerkleRoot};
use parity_scale_codec::{Decode, Encode};
use reference_store::ChainedProof;

#[test]
fn chained_proof_survives_encoding() {
	let multistore = test_multistore();
	let segments = &["clients", "07-tendermint-0", "clientState"];
	let proof = multistore.membership_proof(TEST_STORE, &key_path(segments)).unwrap();
	let path = multistore.path(TEST_STORE, &key_path(segments));

	let decoded = ChainedProof::decode(&mut &proof.encode()[..]).unwrap();
	assert_eq!(decoded, proof);
	assert_eq!(decoded.verify_membership(&multistore.root(), &path, b"client state"), Ok(()));
}

#[test]
fn chained_proof_rejects_bad_encoding() {
	let multistore = test_multistore();
	let proof = multistore
		.non_membership_proof(TEST_STORE, &key_path(&["connections", "connection-1"]))
		.unwrap();
	let encoded = proof.encode();

	assert!(ChainedProof::decode(&mut &encoded[..encoded.len() - 1]).is_err());

	// One proof holding an invalid protobuf message, and no specs.
	assert!(ChainedProof::decode(&mut &hex!("04 0c ffffff 00")[..]).is_err());
}

#[test]
fn root_is_encoded_as_bytes() {
	let root = MerkleRoot::new(hex!("0102").to_vec());
	assert_eq!(root.encode(), hex!("08 0102").to_vec());
	assert_eq!(MerkleRoot::decode(&mut &hex!("08 0102")[..]).unwrap(), root);
}

#[test]
fn path_survives_encoding() {
	let multistore = test_multistore();
	let path = multistore.path(TEST_STORE, &key_path(&["connections", "connection-0"]));

	let decoded = MerklePath::decode(&mut &path.encode()[..]).unwrap();
	assert_eq!(decoded, path);
	assert_eq!(decoded.to_string(), "ibc/connections/connection-0");
}
