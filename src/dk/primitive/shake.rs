// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// File: shake.rs
// Author: digestkit maintainers
// Copyright (c) 2026 digestkit maintainers

//! SHAKE128/SHAKE256 cut to a fixed output length.
//!
//! The lengths (32 and 64 bytes) are a convention of this crate: twice
//! the security level, the same minimum-length output other toolkits pick
//! when a SHAKE instance is used as a plain hash. The block size is the
//! sponge rate.

use digest::consts::{U136, U168, U32, U64};
use digest::core_api::BlockSizeUser;
use digest::{
	ExtendableOutput, FixedOutput, HashMarker, Output, OutputSizeUser,
	Reset, Update,
};
use sha3::{Shake128, Shake256};

macro_rules! fixed_shake {
	($name:ident, $inner:ty, $output:ty, $rate:ty, $doc:literal) => {
		#[doc = $doc]
		#[derive(Clone, Default)]
		pub struct $name {
			inner: $inner,
		}

		impl HashMarker for $name {}

		impl OutputSizeUser for $name {
			type OutputSize = $output;
		}

		impl BlockSizeUser for $name {
			type BlockSize = $rate;
		}

		impl Update for $name {
			fn update(&mut self, data: &[u8]) {
				self.inner.update(data);
			}
		}

		impl FixedOutput for $name {
			fn finalize_into(self, out: &mut Output<Self>) {
				self.inner.finalize_xof_into(out.as_mut_slice());
			}
		}

		impl Reset for $name {
			fn reset(&mut self) {
				*self = Self::default();
			}
		}
	};
}

fixed_shake!(
	Shake128Fixed,
	Shake128,
	U32,
	U168,
	"SHAKE128 squeezed to 32 bytes."
);
fixed_shake!(
	Shake256Fixed,
	Shake256,
	U64,
	U136,
	"SHAKE256 squeezed to 64 bytes."
);

#[cfg(test)]
mod tests {
	use super::*;
	use digest::Digest;
	use hex_literal::hex;

	#[test]
	fn shake128_matches_the_xof_prefix() {
		let out = Shake128Fixed::digest(b"");
		assert_eq!(
			out[..],
			hex!("7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26")
		);
		let mut reader = Shake128::default();
		Update::update(&mut reader, b"abc");
		let mut long = [0u8; 64];
		reader.finalize_xof_into(&mut long);
		assert_eq!(Shake128Fixed::digest(b"abc")[..], long[..32]);
	}

	#[test]
	fn shake256_output_is_64_bytes() {
		let out = Shake256Fixed::digest(b"abc");
		assert_eq!(out.len(), 64);
		assert_eq!(out[..4], hex!("48336660"));
	}

	#[test]
	fn block_sizes_follow_the_rate() {
		assert_eq!(Shake128Fixed::block_size(), 168);
		assert_eq!(Shake256Fixed::block_size(), 136);
	}

	#[test]
	fn reset_discards_absorbed_input() {
		let mut hasher = Shake128Fixed::default();
		Update::update(&mut hasher, b"discarded");
		Reset::reset(&mut hasher);
		assert_eq!(hasher.finalize_fixed(), Shake128Fixed::digest(b""));
	}
}
