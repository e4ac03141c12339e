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

//! Deterministic key-value sets for filling reference stores.

use ics23::HostFunctionsProvider;
use ics23_scheme::HostFunctionsManager;

type Seed = [u8; 32];

/// Alphabet keys are drawn from.
pub enum Alphabet {
	/// Any byte.
	All,
	/// Lower case letters and digits, always valid path identifiers.
	Identifier,
	/// The given bytes.
	Custom(Vec<u8>),
}

/// How values are derived.
pub enum ValueMode {
	/// Same as the key.
	Mirror,
	/// Either 1 or 32 pseudo-random bytes.
	Random,
	/// Little endian index of the entry.
	Index,
}

/// Parameters of a generated key-value set.
pub struct StandardMap {
	pub alphabet: Alphabet,
	/// Minimum key length.
	pub min_key: usize,
	/// Extra key length added at most.
	pub journal_key: usize,
	pub value_mode: ValueMode,
	/// Number of entries.
	pub count: u32,
}

impl StandardMap {
	/// Step `seed` and return between `min_count` and `min_count + journal_count`
	/// bytes of it.
	fn random_bytes(min_count: usize, journal_count: usize, seed: &mut Seed) -> Vec<u8> {
		assert!(min_count + journal_count <= 32);
		*seed = HostFunctionsManager::sha2_256(&seed[..]);
		let r = min_count + (seed[31] as usize % (journal_count + 1));
		seed[0..r].to_vec()
	}

	fn random_value(seed: &mut Seed) -> Vec<u8> {
		*seed = HostFunctionsManager::sha2_256(&seed[..]);
		match seed[0] % 2 {
			1 => vec![seed[31]; 1],
			_ => seed.to_vec(),
		}
	}

	fn random_word(
		alphabet: &[u8],
		min_count: usize,
		journal_count: usize,
		seed: &mut Seed,
	) -> Vec<u8> {
		Self::random_bytes(min_count, journal_count, seed)
			.into_iter()
			.map(|byte| alphabet[byte as usize % alphabet.len()])
			.collect()
	}

	/// Entries generated from the all zero seed.
	pub fn make(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
		self.make_with(&mut Seed::default())
	}

	pub fn make_with(&self, seed: &mut Seed) -> Vec<(Vec<u8>, Vec<u8>)> {
		let identifier = b"abcdefghijklmnopqrstuvwxyz0123456789";

		(0..self.count)
			.map(|index| {
				let key = match self.alphabet {
					Alphabet::All => Self::random_bytes(self.min_key, self.journal_key, seed),
					Alphabet::Identifier =>
						Self::random_word(identifier, self.min_key, self.journal_key, seed),
					Alphabet::Custom(ref alphabet) =>
						Self::random_word(alphabet, self.min_key, self.journal_key, seed),
				};
				let value = match self.value_mode {
					ValueMode::Mirror => key.clone(),
					ValueMode::Random => Self::random_value(seed),
					ValueMode::Index => index.to_le_bytes().to_vec(),
				};
				(key, value)
			})
			.collect()
	}
}
