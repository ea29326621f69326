// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// File: hmac.rs
// Author: digestkit maintainers
// Copyright (c) 2026 digestkit maintainers

//! HMAC functions, one per algorithm.
//!
//! Keys longer than the block are hashed first. For the CRC and FNV
//! adapters the block is a single byte, so only the first byte of a long
//! key's digest survives; that mirrors the generic construction exactly.

use ::hmac::{Mac, SimpleHmac};
use ::md5::Md5;
use ::sha1::Sha1;
use blake2::{Blake2b, Blake2b512, Blake2s256};
use digest::consts::{U32, U48};
use digest::core_api::BlockSizeUser;
#[cfg(test)]
use digest::typenum::Unsigned;
use digest::Digest;
use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

#[cfg(test)]
use crate::dk::algorithm::Algorithm;
use crate::dk::primitive::{
	Crc32, Crc64Ecma, Crc64Iso, Fnv1_128, Fnv1_32, Fnv1_64, Fnv1a_128,
	Fnv1a_32, Fnv1a_64, Shake128Fixed, Shake256Fixed,
};

pub(crate) fn keyed<D: Digest + BlockSizeUser>(
	message: &[u8],
	key: &[u8],
) -> Vec<u8> {
	// `SimpleHmac` hashes or pads the key, so every length is accepted.
	let mut mac = <SimpleHmac<D> as Mac>::new_from_slice(key)
		.unwrap_or_else(|_| unreachable!("HMAC accepts keys of any length"));
	Mac::update(&mut mac, message);
	mac.finalize().into_bytes().to_vec()
}

macro_rules! impl_mac_function {
	($($alg:ident: $name:ident => $hasher:ty, $doc:literal;)+) => {
		$(
			#[doc = $doc]
			pub fn $name(message: &[u8], key: &[u8]) -> Vec<u8> {
				keyed::<$hasher>(message, key)
			}
		)+

		/// Block length each MAC function keys with, read from the
		/// primitive's `BlockSizeUser`.
		#[cfg(test)]
		pub(crate) const BLOCK_SIZES: &[(Algorithm, usize)] = &[
			$((
				Algorithm::$alg,
				<<$hasher as BlockSizeUser>::BlockSize as Unsigned>::USIZE,
			),)+
		];
	};
}

impl_mac_function! {
	Sha1: hmac_sha1 => Sha1, "HMAC-SHA-1. Legacy.";
	Sha224: hmac_sha224 => Sha224, "HMAC-SHA-224.";
	Sha256: hmac_sha256 => Sha256, "HMAC-SHA-256.";
	Sha384: hmac_sha384 => Sha384, "HMAC-SHA-384.";
	Sha512: hmac_sha512 => Sha512, "HMAC-SHA-512.";
	Sha512_224: hmac_sha512_224 => Sha512_224, "HMAC-SHA-512/224.";
	Sha512_256: hmac_sha512_256 => Sha512_256, "HMAC-SHA-512/256.";
	Sha3_224: hmac_sha3_224 => Sha3_224, "HMAC-SHA3-224.";
	Sha3_256: hmac_sha3_256 => Sha3_256, "HMAC-SHA3-256.";
	Sha3_384: hmac_sha3_384 => Sha3_384, "HMAC-SHA3-384.";
	Sha3_512: hmac_sha3_512 => Sha3_512, "HMAC-SHA3-512.";
	Shake128: hmac_shake128 => Shake128Fixed, "HMAC over SHAKE128 cut to 32 bytes, 168-byte block.";
	Shake256: hmac_shake256 => Shake256Fixed, "HMAC over SHAKE256 cut to 64 bytes, 136-byte block.";
	Blake2s_256: hmac_blake2s_256 => Blake2s256, "HMAC-BLAKE2s-256 (generic HMAC, not keyed BLAKE2).";
	Blake2b_256: hmac_blake2b_256 => Blake2b<U32>, "HMAC-BLAKE2b-256 (generic HMAC, not keyed BLAKE2).";
	Blake2b_384: hmac_blake2b_384 => Blake2b<U48>, "HMAC-BLAKE2b-384 (generic HMAC, not keyed BLAKE2).";
	Blake2b_512: hmac_blake2b_512 => Blake2b512, "HMAC-BLAKE2b-512 (generic HMAC, not keyed BLAKE2).";
	Md5: hmac_md5 => Md5, "HMAC-MD5. Legacy.";
	Fnv1_32: hmac_fnv1_32 => Fnv1_32, "HMAC over FNV-1/32. Not cryptographically safe.";
	Fnv1a_32: hmac_fnv1a_32 => Fnv1a_32, "HMAC over FNV-1a/32. Not cryptographically safe.";
	Fnv1_64: hmac_fnv1_64 => Fnv1_64, "HMAC over FNV-1/64. Not cryptographically safe.";
	Fnv1a_64: hmac_fnv1a_64 => Fnv1a_64, "HMAC over FNV-1a/64. Not cryptographically safe.";
	Fnv1_128: hmac_fnv1_128 => Fnv1_128, "HMAC over FNV-1/128. Not cryptographically safe.";
	Fnv1a_128: hmac_fnv1a_128 => Fnv1a_128, "HMAC over FNV-1a/128. Not cryptographically safe.";
	Crc32: hmac_crc32 => Crc32, "HMAC over CRC-32. Not cryptographically safe.";
	Crc64Iso: hmac_crc64_iso => Crc64Iso, "HMAC over CRC-64/ISO. Not cryptographically safe.";
	Crc64Ecma: hmac_crc64_ecma => Crc64Ecma, "HMAC over CRC-64/ECMA. Not cryptographically safe.";
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dk::hash;
	use hex_literal::hex;

	#[test]
	fn single_byte_block_keeps_first_byte_of_hashed_key() {
		// "test" is longer than the 1-byte block, so the derived key is
		// the first byte of crc32("test"), 0xd8.
		assert_eq!(hash::crc32(b"test")[0], 0xd8);
		assert_eq!(hmac_crc32(b"abc", b"test"), hmac_crc32(b"abc", &[0xd8]));
		assert_eq!(hmac_crc32(b"abc", b"test")[..], hex!("85a9ee18"));
	}

	#[test]
	fn catalog_block_sizes_match_hmac_primitives() {
		let catalog = crate::dk::algorithm::catalog();
		assert_eq!(BLOCK_SIZES.len(), catalog.len());
		for entry in catalog {
			let (_, keyed_with) = BLOCK_SIZES
				.iter()
				.find(|(alg, _)| *alg == entry.algorithm)
				.unwrap();
			assert_eq!(entry.block_size, *keyed_with, "{}", entry.algorithm);
		}
	}

	#[test]
	fn zero_padding_of_short_keys() {
		// Keys shorter than the block are zero-padded.
		assert_eq!(
			hmac_sha256(b"abc", b"test"),
			hmac_sha256(b"abc", b"test\0\0\0")
		);
	}

	#[test]
	fn keyed_blake2_is_not_native_keying() {
		use blake2::digest::Mac as _;
		use blake2::Blake2bMac512;
		let mut native = Blake2bMac512::new_from_slice(b"test").unwrap();
		native.update(b"abc");
		let native = native.finalize().into_bytes().to_vec();
		assert_ne!(hmac_blake2b_512(b"abc", b"test"), native);
	}
}
