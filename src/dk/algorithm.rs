// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// File: algorithm.rs
// Author: digestkit maintainers
// Copyright (c) 2026 digestkit maintainers

//! Internal algorithm identifiers and the catalog that describes them.
//!
//! The catalog is the single source of truth for digest sizes. Size
//! constants and the schema size map are derived from it. Block sizes
//! restate each primitive's `BlockSizeUser` value and must agree with it.

use std::fmt;
use std::str::FromStr;

use strum::{EnumCount, FromRepr};

use super::schema::HashAlg;

/// Ordinal identifier of a digest algorithm.
///
/// Ordinals are stable. `Unknown` is reserved at zero and new algorithms
/// are only ever appended.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	PartialOrd,
	Ord,
	FromRepr,
	EnumCount,
)]
#[repr(u8)]
pub enum Algorithm {
	Unknown = 0,
	Sha1 = 1,
	Sha224 = 2,
	Sha256 = 3,
	Sha384 = 4,
	Sha512 = 5,
	Sha512_224 = 6,
	Sha512_256 = 7,
	Sha3_224 = 8,
	Sha3_256 = 9,
	Sha3_384 = 10,
	Sha3_512 = 11,
	Shake128 = 12,
	Shake256 = 13,
	Blake2s_256 = 14,
	Blake2b_256 = 15,
	Blake2b_384 = 16,
	Blake2b_512 = 17,
	Md5 = 18,
	Fnv1_32 = 19,
	Fnv1a_32 = 20,
	Fnv1_64 = 21,
	Fnv1a_64 = 22,
	Fnv1_128 = 23,
	Fnv1a_128 = 24,
	Crc32 = 25,
	Crc64Iso = 26,
	Crc64Ecma = 27,
}

/// How much an algorithm can be trusted for security purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
	Secure,
	/// Collisions are known; kept for interoperability.
	Legacy,
	/// A checksum or non-cryptographic hash. HMAC over these is not a
	/// MAC in any security sense.
	NonCryptographic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlgorithmMetadata {
	pub algorithm: Algorithm,
	/// Canonical lowercase identifier, e.g. `sha512_224`.
	pub identifier: &'static str,
	pub display_name: &'static str,
	/// Output length in bytes.
	pub size: usize,
	/// Block length in bytes of the primitive, as used by HMAC.
	pub block_size: usize,
	pub strength: Strength,
}

impl AlgorithmMetadata {
	const fn new(
		algorithm: Algorithm,
		identifier: &'static str,
		display_name: &'static str,
		size: usize,
		block_size: usize,
		strength: Strength,
	) -> Self {
		Self {
			algorithm,
			identifier,
			display_name,
			size,
			block_size,
			strength,
		}
	}

	const fn secure(
		algorithm: Algorithm,
		identifier: &'static str,
		display_name: &'static str,
		size: usize,
		block_size: usize,
	) -> Self {
		Self::new(
			algorithm,
			identifier,
			display_name,
			size,
			block_size,
			Strength::Secure,
		)
	}

	const fn legacy(
		algorithm: Algorithm,
		identifier: &'static str,
		display_name: &'static str,
		size: usize,
		block_size: usize,
	) -> Self {
		Self::new(
			algorithm,
			identifier,
			display_name,
			size,
			block_size,
			Strength::Legacy,
		)
	}

	const fn checksum(
		algorithm: Algorithm,
		identifier: &'static str,
		display_name: &'static str,
		size: usize,
	) -> Self {
		Self::new(
			algorithm,
			identifier,
			display_name,
			size,
			1,
			Strength::NonCryptographic,
		)
	}

	pub fn is_cryptographic(&self) -> bool {
		self.strength != Strength::NonCryptographic
	}
}

// Indexed by ordinal - 1.
const CATALOG: [AlgorithmMetadata; Algorithm::COUNT - 1] = [
	AlgorithmMetadata::legacy(Algorithm::Sha1, "sha1", "SHA-1", 20, 64),
	AlgorithmMetadata::secure(
		Algorithm::Sha224,
		"sha224",
		"SHA-224",
		28,
		64,
	),
	AlgorithmMetadata::secure(
		Algorithm::Sha256,
		"sha256",
		"SHA-256",
		32,
		64,
	),
	AlgorithmMetadata::secure(
		Algorithm::Sha384,
		"sha384",
		"SHA-384",
		48,
		128,
	),
	AlgorithmMetadata::secure(
		Algorithm::Sha512,
		"sha512",
		"SHA-512",
		64,
		128,
	),
	AlgorithmMetadata::secure(
		Algorithm::Sha512_224,
		"sha512_224",
		"SHA-512/224",
		28,
		128,
	),
	AlgorithmMetadata::secure(
		Algorithm::Sha512_256,
		"sha512_256",
		"SHA-512/256",
		32,
		128,
	),
	AlgorithmMetadata::secure(
		Algorithm::Sha3_224,
		"sha3_224",
		"SHA3-224",
		28,
		144,
	),
	AlgorithmMetadata::secure(
		Algorithm::Sha3_256,
		"sha3_256",
		"SHA3-256",
		32,
		136,
	),
	AlgorithmMetadata::secure(
		Algorithm::Sha3_384,
		"sha3_384",
		"SHA3-384",
		48,
		104,
	),
	AlgorithmMetadata::secure(
		Algorithm::Sha3_512,
		"sha3_512",
		"SHA3-512",
		64,
		72,
	),
	AlgorithmMetadata::secure(
		Algorithm::Shake128,
		"shake128",
		"SHAKE128",
		32,
		168,
	),
	AlgorithmMetadata::secure(
		Algorithm::Shake256,
		"shake256",
		"SHAKE256",
		64,
		136,
	),
	AlgorithmMetadata::secure(
		Algorithm::Blake2s_256,
		"blake2s_256",
		"BLAKE2s-256",
		32,
		64,
	),
	AlgorithmMetadata::secure(
		Algorithm::Blake2b_256,
		"blake2b_256",
		"BLAKE2b-256",
		32,
		128,
	),
	AlgorithmMetadata::secure(
		Algorithm::Blake2b_384,
		"blake2b_384",
		"BLAKE2b-384",
		48,
		128,
	),
	AlgorithmMetadata::secure(
		Algorithm::Blake2b_512,
		"blake2b_512",
		"BLAKE2b-512",
		64,
		128,
	),
	AlgorithmMetadata::legacy(Algorithm::Md5, "md5", "MD5", 16, 64),
	AlgorithmMetadata::checksum(
		Algorithm::Fnv1_32,
		"fnv1_32",
		"FNV-1/32",
		4,
	),
	AlgorithmMetadata::checksum(
		Algorithm::Fnv1a_32,
		"fnv1a_32",
		"FNV-1a/32",
		4,
	),
	AlgorithmMetadata::checksum(
		Algorithm::Fnv1_64,
		"fnv1_64",
		"FNV-1/64",
		8,
	),
	AlgorithmMetadata::checksum(
		Algorithm::Fnv1a_64,
		"fnv1a_64",
		"FNV-1a/64",
		8,
	),
	AlgorithmMetadata::checksum(
		Algorithm::Fnv1_128,
		"fnv1_128",
		"FNV-1/128",
		16,
	),
	AlgorithmMetadata::checksum(
		Algorithm::Fnv1a_128,
		"fnv1a_128",
		"FNV-1a/128",
		16,
	),
	AlgorithmMetadata::checksum(
		Algorithm::Crc32,
		"crc32",
		"CRC-32",
		4,
	),
	AlgorithmMetadata::checksum(
		Algorithm::Crc64Iso,
		"crc64_iso",
		"CRC-64/ISO",
		8,
	),
	AlgorithmMetadata::checksum(
		Algorithm::Crc64Ecma,
		"crc64_ecma",
		"CRC-64/ECMA",
		8,
	),
];

/// Every recognized algorithm, in ordinal order.
pub fn catalog() -> &'static [AlgorithmMetadata] {
	&CATALOG
}

impl Algorithm {
	/// Iterates every recognized algorithm; `Unknown` is not included.
	pub fn all() -> impl Iterator<Item = Algorithm> {
		catalog().iter().map(|entry| entry.algorithm)
	}

	pub fn metadata(self) -> Option<&'static AlgorithmMetadata> {
		match self {
			Algorithm::Unknown => None,
			alg => catalog().get(alg as usize - 1),
		}
	}

	/// Digest length in bytes. `Unknown` has no digest and reports zero.
	pub const fn digest_size(self) -> usize {
		match self {
			Algorithm::Unknown => 0,
			alg => CATALOG[alg as usize - 1].size,
		}
	}

	pub fn strength(self) -> Option<Strength> {
		self.metadata().map(|entry| entry.strength)
	}

	/// Looks up an algorithm by canonical identifier (`sha3_256`,
	/// `sha3-256`), display name (`SHA3-256`) or schema name
	/// (`SHA3_256`). Matching ignores ASCII case.
	pub fn from_name(name: &str) -> Option<Algorithm> {
		let needle = name.trim().to_ascii_lowercase().replace('-', "_");
		catalog()
			.iter()
			.find(|entry| {
				entry.identifier == needle
					|| entry.display_name.eq_ignore_ascii_case(name.trim())
			})
			.map(|entry| entry.algorithm)
			.or_else(|| {
				HashAlg::from_str(name.trim())
					.ok()
					.and_then(HashAlg::algorithm)
			})
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.metadata() {
			Some(entry) => f.write_str(entry.display_name),
			None => f.write_str("unknown"),
		}
	}
}
