// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// File: functions.rs
// Author: digestkit maintainers
// Copyright (c) 2026 digestkit maintainers

//! One function per algorithm. Each returns exactly the catalog size in
//! bytes and cannot fail.

use blake2::{Blake2b, Blake2b512, Blake2s256};
use digest::consts::{U32, U48};
use digest::Digest;
use ::md5::Md5;
use ::sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

use crate::dk::primitive::{
	Crc32, Crc64Ecma, Crc64Iso, Fnv1_128, Fnv1_32, Fnv1_64, Fnv1a_128,
	Fnv1a_32, Fnv1a_64, Shake128Fixed, Shake256Fixed,
};

pub(crate) fn one_shot<D: Digest>(input: &[u8]) -> Vec<u8> {
	D::digest(input).to_vec()
}

macro_rules! impl_hash_function {
	($($name:ident => $hasher:ty, $doc:literal;)+) => {
		$(
			#[doc = $doc]
			pub fn $name(input: &[u8]) -> Vec<u8> {
				one_shot::<$hasher>(input)
			}
		)+
	};
}

impl_hash_function! {
	sha1 => Sha1, "SHA-1 (FIPS 180-4), 20 bytes.";
	sha224 => Sha224, "SHA-224, 28 bytes.";
	sha256 => Sha256, "SHA-256, 32 bytes.";
	sha384 => Sha384, "SHA-384, 48 bytes.";
	sha512 => Sha512, "SHA-512, 64 bytes.";
	sha512_224 => Sha512_224, "SHA-512/224, 28 bytes.";
	sha512_256 => Sha512_256, "SHA-512/256, 32 bytes.";
	sha3_224 => Sha3_224, "SHA3-224 (FIPS 202), 28 bytes.";
	sha3_256 => Sha3_256, "SHA3-256, 32 bytes.";
	sha3_384 => Sha3_384, "SHA3-384, 48 bytes.";
	sha3_512 => Sha3_512, "SHA3-512, 64 bytes.";
	shake128 => Shake128Fixed, "SHAKE128, the first 32 bytes of output.";
	shake256 => Shake256Fixed, "SHAKE256, the first 64 bytes of output.";
	blake2s_256 => Blake2s256, "Unkeyed BLAKE2s-256 (RFC 7693).";
	blake2b_256 => Blake2b<U32>, "Unkeyed BLAKE2b with a 32-byte digest.";
	blake2b_384 => Blake2b<U48>, "Unkeyed BLAKE2b with a 48-byte digest.";
	blake2b_512 => Blake2b512, "Unkeyed BLAKE2b-512.";
	md5 => Md5, "MD5 (RFC 1321). Legacy.";
	fnv1_32 => Fnv1_32, "FNV-1, 32-bit. Not cryptographic.";
	fnv1a_32 => Fnv1a_32, "FNV-1a, 32-bit. Not cryptographic.";
	fnv1_64 => Fnv1_64, "FNV-1, 64-bit. Not cryptographic.";
	fnv1a_64 => Fnv1a_64, "FNV-1a, 64-bit. Not cryptographic.";
	fnv1_128 => Fnv1_128, "FNV-1, 128-bit. Not cryptographic.";
	fnv1a_128 => Fnv1a_128, "FNV-1a, 128-bit. Not cryptographic.";
	crc32 => Crc32, "CRC-32 (IEEE), big-endian. Not cryptographic.";
	crc64_iso => Crc64Iso, "CRC-64/ISO, big-endian. Not cryptographic.";
	crc64_ecma => Crc64Ecma, "CRC-64/ECMA, big-endian. Not cryptographic.";
}
