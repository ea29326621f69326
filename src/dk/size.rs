// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// File: size.rs
// Author: digestkit maintainers
// Copyright (c) 2026 digestkit maintainers

//! Digest sizes in bytes, for callers that size buffers before hashing.
//! All values come from the algorithm catalog.

use std::collections::HashMap;
use std::sync::LazyLock;

use strum::IntoEnumIterator;

use super::algorithm::Algorithm;
use super::schema::HashAlg;

pub const SIZE_SHA1: usize = Algorithm::Sha1.digest_size();
pub const SIZE_SHA224: usize = Algorithm::Sha224.digest_size();
pub const SIZE_SHA256: usize = Algorithm::Sha256.digest_size();
pub const SIZE_SHA384: usize = Algorithm::Sha384.digest_size();
pub const SIZE_SHA512: usize = Algorithm::Sha512.digest_size();
pub const SIZE_SHA512_224: usize = Algorithm::Sha512_224.digest_size();
pub const SIZE_SHA512_256: usize = Algorithm::Sha512_256.digest_size();
pub const SIZE_SHA3_224: usize = Algorithm::Sha3_224.digest_size();
pub const SIZE_SHA3_256: usize = Algorithm::Sha3_256.digest_size();
pub const SIZE_SHA3_384: usize = Algorithm::Sha3_384.digest_size();
pub const SIZE_SHA3_512: usize = Algorithm::Sha3_512.digest_size();
pub const SIZE_SHAKE128: usize = Algorithm::Shake128.digest_size();
pub const SIZE_SHAKE256: usize = Algorithm::Shake256.digest_size();
pub const SIZE_BLAKE2S_256: usize = Algorithm::Blake2s_256.digest_size();
pub const SIZE_BLAKE2B_256: usize = Algorithm::Blake2b_256.digest_size();
pub const SIZE_BLAKE2B_384: usize = Algorithm::Blake2b_384.digest_size();
pub const SIZE_BLAKE2B_512: usize = Algorithm::Blake2b_512.digest_size();
pub const SIZE_MD5: usize = Algorithm::Md5.digest_size();
pub const SIZE_FNV1_32: usize = Algorithm::Fnv1_32.digest_size();
pub const SIZE_FNV1A_32: usize = Algorithm::Fnv1a_32.digest_size();
pub const SIZE_FNV1_64: usize = Algorithm::Fnv1_64.digest_size();
pub const SIZE_FNV1A_64: usize = Algorithm::Fnv1a_64.digest_size();
pub const SIZE_FNV1_128: usize = Algorithm::Fnv1_128.digest_size();
pub const SIZE_FNV1A_128: usize = Algorithm::Fnv1a_128.digest_size();
pub const SIZE_CRC32: usize = Algorithm::Crc32.digest_size();
pub const SIZE_CRC64_ISO: usize = Algorithm::Crc64Iso.digest_size();
pub const SIZE_CRC64_ECMA: usize = Algorithm::Crc64Ecma.digest_size();

/// Digest size keyed by schema identifier. `HashAlg::Unknown` is absent.
pub static HASH_SIZES: LazyLock<HashMap<HashAlg, usize>> =
	LazyLock::new(|| {
		HashAlg::iter()
			.filter_map(|alg| {
				alg.algorithm().map(|internal| (alg, internal.digest_size()))
			})
			.collect()
	});

pub fn digest_size(alg: HashAlg) -> Option<usize> {
	HASH_SIZES.get(&alg).copied()
}
