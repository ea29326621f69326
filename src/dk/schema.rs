// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// Module: schema (external identifier space)
// Author: digestkit maintainers
// Copyright (c) 2026 digestkit maintainers

//! Algorithm identifiers as they appear in configuration.
//!
//! `HashAlg` mirrors the enum defined by the configuration schema. Its
//! integer values are owned by that schema and are unrelated to the
//! ordinals of [`Algorithm`].

use strum::{Display, EnumIter, EnumString, FromRepr, IntoStaticStr};

use super::algorithm::Algorithm;

#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Display,
	EnumIter,
	EnumString,
	FromRepr,
	IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum HashAlg {
	#[strum(to_string = "Unknown")]
	Unknown = 0,
	#[strum(to_string = "SHA1")]
	Sha1 = 1,
	#[strum(to_string = "SHA224")]
	Sha224 = 2,
	#[strum(to_string = "SHA256")]
	Sha256 = 3,
	#[strum(to_string = "SHA384")]
	Sha384 = 4,
	#[strum(to_string = "SHA512")]
	Sha512 = 5,
	#[strum(to_string = "SHA512_224")]
	Sha512_224 = 6,
	#[strum(to_string = "SHA512_256")]
	Sha512_256 = 7,
	#[strum(to_string = "SHA3_224")]
	Sha3_224 = 8,
	#[strum(to_string = "SHA3_256")]
	Sha3_256 = 9,
	#[strum(to_string = "SHA3_384")]
	Sha3_384 = 10,
	#[strum(to_string = "SHA3_512")]
	Sha3_512 = 11,
	#[strum(to_string = "SHAKE128")]
	Shake128 = 12,
	#[strum(to_string = "SHAKE256")]
	Shake256 = 13,
	#[strum(to_string = "MD5")]
	Md5 = 14,
	#[strum(to_string = "FNV1_32")]
	Fnv1_32 = 15,
	#[strum(to_string = "FNV1a_32")]
	Fnv1a_32 = 16,
	#[strum(to_string = "FNV1_64")]
	Fnv1_64 = 17,
	#[strum(to_string = "FNV1a_64")]
	Fnv1a_64 = 18,
	#[strum(to_string = "FNV1_128")]
	Fnv1_128 = 19,
	#[strum(to_string = "FNV1a_128")]
	Fnv1a_128 = 20,
	#[strum(to_string = "CRC32")]
	Crc32 = 21,
	#[strum(to_string = "CRC64ISO")]
	Crc64Iso = 22,
	#[strum(to_string = "CRC64ECMA")]
	Crc64Ecma = 23,
	#[strum(to_string = "BLAKE2s_256")]
	Blake2s_256 = 24,
	#[strum(to_string = "BLAKE2b_256")]
	Blake2b_256 = 25,
	#[strum(to_string = "BLAKE2b_384")]
	Blake2b_384 = 26,
	#[strum(to_string = "BLAKE2b_512")]
	Blake2b_512 = 27,
}

impl HashAlg {
	/// The internal identifier for this schema value. `Unknown` maps to
	/// nothing.
	pub const fn algorithm(self) -> Option<Algorithm> {
		Some(match self {
			HashAlg::Unknown => return None,
			HashAlg::Sha1 => Algorithm::Sha1,
			HashAlg::Sha224 => Algorithm::Sha224,
			HashAlg::Sha256 => Algorithm::Sha256,
			HashAlg::Sha384 => Algorithm::Sha384,
			HashAlg::Sha512 => Algorithm::Sha512,
			HashAlg::Sha512_224 => Algorithm::Sha512_224,
			HashAlg::Sha512_256 => Algorithm::Sha512_256,
			HashAlg::Sha3_224 => Algorithm::Sha3_224,
			HashAlg::Sha3_256 => Algorithm::Sha3_256,
			HashAlg::Sha3_384 => Algorithm::Sha3_384,
			HashAlg::Sha3_512 => Algorithm::Sha3_512,
			HashAlg::Shake128 => Algorithm::Shake128,
			HashAlg::Shake256 => Algorithm::Shake256,
			HashAlg::Md5 => Algorithm::Md5,
			HashAlg::Fnv1_32 => Algorithm::Fnv1_32,
			HashAlg::Fnv1a_32 => Algorithm::Fnv1a_32,
			HashAlg::Fnv1_64 => Algorithm::Fnv1_64,
			HashAlg::Fnv1a_64 => Algorithm::Fnv1a_64,
			HashAlg::Fnv1_128 => Algorithm::Fnv1_128,
			HashAlg::Fnv1a_128 => Algorithm::Fnv1a_128,
			HashAlg::Crc32 => Algorithm::Crc32,
			HashAlg::Crc64Iso => Algorithm::Crc64Iso,
			HashAlg::Crc64Ecma => Algorithm::Crc64Ecma,
			HashAlg::Blake2s_256 => Algorithm::Blake2s_256,
			HashAlg::Blake2b_256 => Algorithm::Blake2b_256,
			HashAlg::Blake2b_384 => Algorithm::Blake2b_384,
			HashAlg::Blake2b_512 => Algorithm::Blake2b_512,
		})
	}
}

impl Algorithm {
	pub const fn hash_alg(self) -> Option<HashAlg> {
		Some(match self {
			Algorithm::Unknown => return None,
			Algorithm::Sha1 => HashAlg::Sha1,
			Algorithm::Sha224 => HashAlg::Sha224,
			Algorithm::Sha256 => HashAlg::Sha256,
			Algorithm::Sha384 => HashAlg::Sha384,
			Algorithm::Sha512 => HashAlg::Sha512,
			Algorithm::Sha512_224 => HashAlg::Sha512_224,
			Algorithm::Sha512_256 => HashAlg::Sha512_256,
			Algorithm::Sha3_224 => HashAlg::Sha3_224,
			Algorithm::Sha3_256 => HashAlg::Sha3_256,
			Algorithm::Sha3_384 => HashAlg::Sha3_384,
			Algorithm::Sha3_512 => HashAlg::Sha3_512,
			Algorithm::Shake128 => HashAlg::Shake128,
			Algorithm::Shake256 => HashAlg::Shake256,
			Algorithm::Blake2s_256 => HashAlg::Blake2s_256,
			Algorithm::Blake2b_256 => HashAlg::Blake2b_256,
			Algorithm::Blake2b_384 => HashAlg::Blake2b_384,
			Algorithm::Blake2b_512 => HashAlg::Blake2b_512,
			Algorithm::Md5 => HashAlg::Md5,
			Algorithm::Fnv1_32 => HashAlg::Fnv1_32,
			Algorithm::Fnv1a_32 => HashAlg::Fnv1a_32,
			Algorithm::Fnv1_64 => HashAlg::Fnv1_64,
			Algorithm::Fnv1a_64 => HashAlg::Fnv1a_64,
			Algorithm::Fnv1_128 => HashAlg::Fnv1_128,
			Algorithm::Fnv1a_128 => HashAlg::Fnv1a_128,
			Algorithm::Crc32 => HashAlg::Crc32,
			Algorithm::Crc64Iso => HashAlg::Crc64Iso,
			Algorithm::Crc64Ecma => HashAlg::Crc64Ecma,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::str::FromStr;
	use strum::IntoEnumIterator;

	#[test]
	fn mapping_is_one_to_one() {
		let mut mapped = 0;
		for alg in HashAlg::iter() {
			match alg.algorithm() {
				Some(internal) => {
					assert_eq!(internal.hash_alg(), Some(alg));
					mapped += 1;
				}
				None => assert_eq!(alg, HashAlg::Unknown),
			}
		}
		assert_eq!(mapped, Algorithm::all().count());
		for internal in Algorithm::all() {
			let external = internal.hash_alg().unwrap();
			assert_eq!(external.algorithm(), Some(internal));
		}
	}

	#[test]
	fn schema_names_round_trip() {
		for alg in HashAlg::iter() {
			let name = alg.to_string();
			assert_eq!(HashAlg::from_str(&name).unwrap(), alg);
		}
		assert_eq!(HashAlg::from_str("sha512_224").unwrap(), HashAlg::Sha512_224);
		assert_eq!(HashAlg::from_str("Blake2B_256").unwrap(), HashAlg::Blake2b_256);
		assert!(HashAlg::from_str("SHA-256").is_err());
	}

	#[test]
	fn raw_values() {
		assert_eq!(HashAlg::from_repr(0), Some(HashAlg::Unknown));
		assert_eq!(HashAlg::from_repr(3), Some(HashAlg::Sha256));
		assert_eq!(HashAlg::from_repr(27), Some(HashAlg::Blake2b_512));
		assert_eq!(HashAlg::from_repr(28), None);
		assert_eq!(HashAlg::from_repr(-1), None);
		assert_eq!(HashAlg::Crc64Ecma as i32, 23);
	}
}
