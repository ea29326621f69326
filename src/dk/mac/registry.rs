// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// File: registry.rs
// Author: digestkit maintainers
// Copyright (c) 2026 digestkit maintainers

//! Lookup tables for the MAC sub-registry. Total over the same
//! algorithm set as the hash sub-registry.

use strum::EnumCount;

use super::hmac::*;
use super::MacFn;
use crate::dk::algorithm::Algorithm;
use crate::dk::error::RegistryError;
use crate::dk::schema::HashAlg;
use crate::dk::weak;

const REGISTRY: &str = "MAC";

// Indexed by `Algorithm` ordinal.
const TABLE: [Option<MacFn>; Algorithm::COUNT] = [
	None,
	Some(hmac_sha1 as MacFn),
	Some(hmac_sha224 as MacFn),
	Some(hmac_sha256 as MacFn),
	Some(hmac_sha384 as MacFn),
	Some(hmac_sha512 as MacFn),
	Some(hmac_sha512_224 as MacFn),
	Some(hmac_sha512_256 as MacFn),
	Some(hmac_sha3_224 as MacFn),
	Some(hmac_sha3_256 as MacFn),
	Some(hmac_sha3_384 as MacFn),
	Some(hmac_sha3_512 as MacFn),
	Some(hmac_shake128 as MacFn),
	Some(hmac_shake256 as MacFn),
	Some(hmac_blake2s_256 as MacFn),
	Some(hmac_blake2b_256 as MacFn),
	Some(hmac_blake2b_384 as MacFn),
	Some(hmac_blake2b_512 as MacFn),
	Some(hmac_md5 as MacFn),
	Some(hmac_fnv1_32 as MacFn),
	Some(hmac_fnv1a_32 as MacFn),
	Some(hmac_fnv1_64 as MacFn),
	Some(hmac_fnv1a_64 as MacFn),
	Some(hmac_fnv1_128 as MacFn),
	Some(hmac_fnv1a_128 as MacFn),
	Some(hmac_crc32 as MacFn),
	Some(hmac_crc64_iso as MacFn),
	Some(hmac_crc64_ecma as MacFn),
];

pub fn from_algorithm(alg: Algorithm) -> Option<MacFn> {
	TABLE[alg as usize]
}

pub fn from_hash_alg(alg: HashAlg) -> Option<MacFn> {
	alg.algorithm().and_then(from_algorithm)
}

pub fn from_ordinal(ordinal: u8) -> Option<MacFn> {
	Algorithm::from_repr(ordinal).and_then(from_algorithm)
}

pub fn from_hash_alg_value(value: i32) -> Option<MacFn> {
	HashAlg::from_repr(value).and_then(from_hash_alg)
}

/// Resolves a configured algorithm name. Resolving a legacy or
/// non-cryptographic algorithm succeeds but logs a warning.
pub fn resolve(name: &str) -> Result<MacFn, RegistryError> {
	let Some(alg) = Algorithm::from_name(name) else {
		tracing::debug!(registry = REGISTRY, name, "registry miss");
		return Err(RegistryError::unsupported(REGISTRY, name));
	};
	let mac = from_algorithm(alg)
		.ok_or_else(|| RegistryError::unsupported(REGISTRY, name))?;
	weak::emit_warning(REGISTRY, alg);
	Ok(mac)
}

pub fn resolve_value(value: i32) -> Result<MacFn, RegistryError> {
	let Some(alg) = HashAlg::from_repr(value) else {
		tracing::debug!(registry = REGISTRY, value, "undefined schema value");
		return Err(RegistryError::unknown_value(REGISTRY, value));
	};
	let Some(internal) = alg.algorithm() else {
		tracing::debug!(registry = REGISTRY, %alg, "registry miss");
		return Err(RegistryError::unsupported(REGISTRY, alg.into()));
	};
	let mac = from_algorithm(internal)
		.ok_or_else(|| RegistryError::unsupported(REGISTRY, alg.into()))?;
	weak::emit_warning(REGISTRY, internal);
	Ok(mac)
}
