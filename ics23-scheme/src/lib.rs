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

//! `ProofScheme` implementation for ICS-23 commitment proofs.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::{
	string::{String, ToString},
	vec::Vec,
};
use core::{fmt, marker::PhantomData};

use commitment_scheme::{ProofScheme, SchemeCodec, SubProof};
use ics23::{
	commitment_proof::Proof, CommitmentProof, ExistenceProof, HostFunctionsProvider,
	NonExistenceProof, ProofSpec,
};
use prost::Message;

pub use ics23::{iavl_spec, smt_spec, tendermint_spec, HostFunctionsManager};

/// Errors raised by the ICS-23 scheme.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Debug))]
pub enum Ics23Error {
	/// The root could not be calculated from an existence proof.
	Calculate(String),
	/// A proof or spec could not be decoded from its protobuf encoding.
	Decode(prost::DecodeError),
}

impl fmt::Display for Ics23Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Ics23Error::Calculate(reason) => write!(f, "Unable to calculate root: {}", reason),
			Ics23Error::Decode(err) => write!(f, "Unable to decode protobuf message: {}", err),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for Ics23Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Ics23Error::Decode(err) => Some(err),
			_ => None,
		}
	}
}

/// ICS-23 proof scheme, generic over the host hash functions.
pub struct Ics23Scheme<H = HostFunctionsManager>(PhantomData<H>);

impl<H> Default for Ics23Scheme<H> {
	fn default() -> Self {
		Ics23Scheme(PhantomData)
	}
}

impl<H> Clone for Ics23Scheme<H> {
	fn clone(&self) -> Self {
		Ics23Scheme(PhantomData)
	}
}

impl<H: HostFunctionsProvider> ProofScheme for Ics23Scheme<H> {
	type Proof = CommitmentProof;
	type Spec = ProofSpec;
	type ExistenceProof = ExistenceProof;
	type NonExistenceProof = NonExistenceProof;
	type Error = Ics23Error;

	fn is_empty_proof(proof: &CommitmentProof) -> bool {
		proof.proof.is_none()
	}

	fn is_empty_spec(spec: &ProofSpec) -> bool {
		spec.leaf_spec.is_none() || spec.inner_spec.is_none()
	}

	fn sub_proof(proof: &CommitmentProof) -> SubProof<'_, ExistenceProof, NonExistenceProof> {
		match &proof.proof {
			Some(Proof::Exist(exist)) => SubProof::Existence(exist),
			Some(Proof::Nonexist(nonexist)) => SubProof::NonExistence(nonexist),
			_ => SubProof::Unsupported,
		}
	}

	fn left_neighbor(proof: &NonExistenceProof) -> Option<&ExistenceProof> {
		proof.left.as_ref()
	}

	fn calculate(proof: &ExistenceProof) -> Result<Vec<u8>, Ics23Error> {
		ics23::calculate_existence_root::<H>(proof)
			.map_err(|err| Ics23Error::Calculate(err.to_string()))
	}

	fn verify_membership(
		spec: &ProofSpec,
		root: &[u8],
		proof: &CommitmentProof,
		key: &[u8],
		value: &[u8],
	) -> bool {
		ics23::verify_membership::<H>(proof, spec, &root.to_vec(), key, value)
	}

	fn verify_non_membership(
		spec: &ProofSpec,
		root: &[u8],
		proof: &CommitmentProof,
		key: &[u8],
	) -> bool {
		ics23::verify_non_membership::<H>(proof, spec, &root.to_vec(), key)
	}
}

impl<H: HostFunctionsProvider> SchemeCodec for Ics23Scheme<H> {
	fn encode_proof(proof: &CommitmentProof) -> Vec<u8> {
		proof.encode_to_vec()
	}

	fn decode_proof(data: &[u8]) -> Result<CommitmentProof, Ics23Error> {
		CommitmentProof::decode(data).map_err(Ics23Error::Decode)
	}

	fn encode_spec(spec: &ProofSpec) -> Vec<u8> {
		spec.encode_to_vec()
	}

	fn decode_spec(data: &[u8]) -> Result<ProofSpec, Ics23Error> {
		ProofSpec::decode(data).map_err(Ics23Error::Decode)
	}
}
