// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// File: registry.rs
// Author: digestkit maintainers
// Copyright (c) 2026 digestkit maintainers

//! Lookup tables for the hash sub-registry.

use strum::EnumCount;

use super::functions::*;
use super::HashFn;
use crate::dk::algorithm::Algorithm;
use crate::dk::error::RegistryError;
use crate::dk::schema::HashAlg;
use crate::dk::weak;

const REGISTRY: &str = "hash";

// Indexed by `Algorithm` ordinal.
const TABLE: [Option<HashFn>; Algorithm::COUNT] = [
	None,
	Some(sha1 as HashFn),
	Some(sha224 as HashFn),
	Some(sha256 as HashFn),
	Some(sha384 as HashFn),
	Some(sha512 as HashFn),
	Some(sha512_224 as HashFn),
	Some(sha512_256 as HashFn),
	Some(sha3_224 as HashFn),
	Some(sha3_256 as HashFn),
	Some(sha3_384 as HashFn),
	Some(sha3_512 as HashFn),
	Some(shake128 as HashFn),
	Some(shake256 as HashFn),
	Some(blake2s_256 as HashFn),
	Some(blake2b_256 as HashFn),
	Some(blake2b_384 as HashFn),
	Some(blake2b_512 as HashFn),
	Some(md5 as HashFn),
	Some(fnv1_32 as HashFn),
	Some(fnv1a_32 as HashFn),
	Some(fnv1_64 as HashFn),
	Some(fnv1a_64 as HashFn),
	Some(fnv1_128 as HashFn),
	Some(fnv1a_128 as HashFn),
	Some(crc32 as HashFn),
	Some(crc64_iso as HashFn),
	Some(crc64_ecma as HashFn),
];

pub fn from_algorithm(alg: Algorithm) -> Option<HashFn> {
	TABLE[alg as usize]
}

pub fn from_hash_alg(alg: HashAlg) -> Option<HashFn> {
	alg.algorithm().and_then(from_algorithm)
}

/// Lookup by raw internal ordinal.
pub fn from_ordinal(ordinal: u8) -> Option<HashFn> {
	Algorithm::from_repr(ordinal).and_then(from_algorithm)
}

/// Lookup by raw schema value, as decoded from configuration.
pub fn from_hash_alg_value(value: i32) -> Option<HashFn> {
	HashAlg::from_repr(value).and_then(from_hash_alg)
}

/// Resolves a configured algorithm name (see [`Algorithm::from_name`]).
pub fn resolve(name: &str) -> Result<HashFn, RegistryError> {
	let Some(alg) = Algorithm::from_name(name) else {
		tracing::debug!(registry = REGISTRY, name, "registry miss");
		return Err(RegistryError::unsupported(REGISTRY, name));
	};
	let hash = from_algorithm(alg)
		.ok_or_else(|| RegistryError::unsupported(REGISTRY, name))?;
	weak::emit_warning(REGISTRY, alg);
	Ok(hash)
}

/// Resolves a raw schema value, distinguishing an undefined value from
/// the reserved unknown identifier.
pub fn resolve_value(value: i32) -> Result<HashFn, RegistryError> {
	let Some(alg) = HashAlg::from_repr(value) else {
		tracing::debug!(registry = REGISTRY, value, "undefined schema value");
		return Err(RegistryError::unknown_value(REGISTRY, value));
	};
	let Some(internal) = alg.algorithm() else {
		tracing::debug!(registry = REGISTRY, %alg, "registry miss");
		return Err(RegistryError::unsupported(REGISTRY, alg.into()));
	};
	let hash = from_algorithm(internal)
		.ok_or_else(|| RegistryError::unsupported(REGISTRY, alg.into()))?;
	weak::emit_warning(REGISTRY, internal);
	Ok(hash)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dk::error::RegistryErrorKind;

	#[test]
	fn table_entries_produce_catalog_sizes() {
		for alg in Algorithm::all() {
			let hash = from_algorithm(alg).unwrap();
			assert_eq!(hash(b"abc").len(), alg.digest_size(), "{}", alg);
		}
	}

	#[test]
	fn unknown_is_a_miss() {
		assert!(from_algorithm(Algorithm::Unknown).is_none());
		assert!(from_hash_alg(HashAlg::Unknown).is_none());
		assert!(from_ordinal(0).is_none());
		assert!(from_ordinal(200).is_none());
		assert!(from_hash_alg_value(0).is_none());
		assert!(from_hash_alg_value(-7).is_none());
		assert!(from_hash_alg_value(1_000).is_none());
	}

	#[test]
	fn resolve_reports_error_kinds() {
		assert!(resolve("sha-256").is_ok());
		let err = resolve("ripemd160").unwrap_err();
		assert_eq!(err.kind(), RegistryErrorKind::UnsupportedAlgorithm);
		let err = resolve("Unknown").unwrap_err();
		assert_eq!(err.kind(), RegistryErrorKind::UnsupportedAlgorithm);

		assert!(resolve_value(HashAlg::Crc32 as i32).is_ok());
		let err = resolve_value(0).unwrap_err();
		assert_eq!(err.kind(), RegistryErrorKind::UnsupportedAlgorithm);
		let err = resolve_value(64).unwrap_err();
		assert_eq!(err.kind(), RegistryErrorKind::UnknownValue);
	}
}
