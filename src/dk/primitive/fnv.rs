// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// File: fnv.rs
// Author: digestkit maintainers
// Copyright (c) 2026 digestkit maintainers

//! FNV-1 and FNV-1a at 32, 64 and 128 bits.
//! Standard offset basis and prime; the state is written big-endian.

use digest::consts::{U1, U16, U4, U8};
use digest::core_api::BlockSizeUser;
use digest::{
	FixedOutput, HashMarker, Output, OutputSizeUser, Reset, Update,
};

const OFFSET_32: u32 = 0x811c_9dc5;
const PRIME_32: u32 = 0x0100_0193;
const OFFSET_64: u64 = 0xcbf2_9ce4_8422_2325;
const PRIME_64: u64 = 0x0000_0100_0000_01b3;
const OFFSET_128: u128 = 0x6c62_272e_07bb_0142_62b8_2175_6295_c58d;
const PRIME_128: u128 = 0x0000_0000_0100_0000_0000_0000_0000_013b;

macro_rules! fnv_digest {
	(
		$name:ident,
		$word:ty,
		$output:ty,
		$offset:expr,
		$prime:expr,
		xor_first = $xor_first:expr,
		$doc:literal
	) => {
		#[doc = $doc]
		#[derive(Clone, Copy, Debug)]
		pub struct $name {
			state: $word,
		}

		impl Default for $name {
			fn default() -> Self {
				Self { state: $offset }
			}
		}

		impl HashMarker for $name {}

		impl OutputSizeUser for $name {
			type OutputSize = $output;
		}

		impl BlockSizeUser for $name {
			type BlockSize = U1;
		}

		impl Update for $name {
			fn update(&mut self, data: &[u8]) {
				for &byte in data {
					if $xor_first {
						self.state ^= <$word>::from(byte);
						self.state = self.state.wrapping_mul($prime);
					} else {
						self.state = self.state.wrapping_mul($prime);
						self.state ^= <$word>::from(byte);
					}
				}
			}
		}

		impl FixedOutput for $name {
			fn finalize_into(self, out: &mut Output<Self>) {
				out.copy_from_slice(&self.state.to_be_bytes());
			}
		}

		impl Reset for $name {
			fn reset(&mut self) {
				self.state = $offset;
			}
		}
	};
}

fnv_digest!(Fnv1_32, u32, U4, OFFSET_32, PRIME_32, xor_first = false, "FNV-1, 32-bit.");
fnv_digest!(Fnv1a_32, u32, U4, OFFSET_32, PRIME_32, xor_first = true, "FNV-1a, 32-bit.");
fnv_digest!(Fnv1_64, u64, U8, OFFSET_64, PRIME_64, xor_first = false, "FNV-1, 64-bit.");
fnv_digest!(Fnv1a_64, u64, U8, OFFSET_64, PRIME_64, xor_first = true, "FNV-1a, 64-bit.");
fnv_digest!(
	Fnv1_128,
	u128,
	U16,
	OFFSET_128,
	PRIME_128,
	xor_first = false,
	"FNV-1, 128-bit."
);
fnv_digest!(
	Fnv1a_128,
	u128,
	U16,
	OFFSET_128,
	PRIME_128,
	xor_first = true,
	"FNV-1a, 128-bit."
);

#[cfg(test)]
mod tests {
	use super::*;
	use digest::Digest;
	use hex_literal::hex;

	#[test]
	fn empty_input_is_the_offset_basis() {
		assert_eq!(Fnv1_32::digest(b"")[..], OFFSET_32.to_be_bytes());
		assert_eq!(Fnv1a_64::digest(b"")[..], OFFSET_64.to_be_bytes());
		assert_eq!(Fnv1a_128::digest(b"")[..], OFFSET_128.to_be_bytes());
	}

	#[test]
	fn reference_vectors() {
		assert_eq!(Fnv1_32::digest(b"a")[..], hex!("050c5d7e"));
		assert_eq!(Fnv1a_32::digest(b"a")[..], hex!("e40c292c"));
		assert_eq!(Fnv1_64::digest(b"a")[..], hex!("af63bd4c8601b7be"));
		assert_eq!(Fnv1a_64::digest(b"a")[..], hex!("af63dc4c8601ec8c"));
		assert_eq!(Fnv1a_64::digest(b"foobar")[..], hex!("85944171f73967e8"));
		assert_eq!(
			Fnv1_128::digest(b"a")[..],
			hex!("d228cb69101a8caf78912b704e4a141e")
		);
		assert_eq!(
			Fnv1a_128::digest(b"a")[..],
			hex!("d228cb696f1a8caf78912b704e4a8964")
		);
	}

	#[test]
	fn reset_restores_offset_basis() {
		let mut hasher = Fnv1a_32::default();
		Update::update(&mut hasher, b"state");
		Reset::reset(&mut hasher);
		assert_eq!(hasher.finalize_fixed()[..], OFFSET_32.to_be_bytes());
	}
}
