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
#![cfg_attr(not(feature = "std"), no_std)]

//! Merkle commitment roots, prefixes, paths and chained proofs.
//!
//! Data committed under a single root often lives several trees deep: a store
//! tree holds the roots of substores, which hold the application keys. A
//! [`ChainedCommitmentProof`] carries one proof per tree, lowest subtree first,
//! and checks the whole chain against a single trusted [`MerkleRoot`]. The key
//! of every level is taken from a [`MerklePath`], which lists levels the other
//! way round, outermost first.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
mod rstd {
	pub use std::{error::Error, fmt, iter, slice, string, vec};
}

#[cfg(not(feature = "std"))]
mod rstd {
	pub use alloc::{string, vec};
	pub use core::{fmt, iter, slice};
}

pub mod host;
pub mod key_path;
pub mod path;
pub mod proof;
pub mod verify;

mod prefix;
mod root;

#[cfg(test)]
mod mock;

pub use self::{
	host::{DefaultPathValidator, PathValidator, PathViolation},
	key_path::{Key, KeyEncoding, KeyPath, KeyPathError},
	path::{apply_prefix, apply_prefix_with, MerklePath, PathError},
	prefix::MerklePrefix,
	proof::ChainedCommitmentProof,
	root::MerkleRoot,
	verify::VerifyError,
};
pub use commitment_scheme::{MaybeDebug, ProofScheme, SchemeCodec, SubProof};

/// Target used by all log records of this crate.
const LOG_TARGET: &str = "commitment";
