// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// Module: primitive (digest adapters)
// Author: digestkit maintainers
// Copyright (c) 2026 digestkit maintainers

//! Adapters that expose SHAKE, CRC and FNV through the `digest` 0.10
//! traits, so the hash and MAC registries can treat every algorithm as a
//! fixed-output [`digest::Digest`] with a block size.
//!
//! The RustCrypto primitives (SHA-1/2/3, MD5, BLAKE2) already implement
//! these traits and are used directly.

pub mod crc;
pub mod fnv;
pub mod shake;

pub use self::crc::{Crc32, Crc64Ecma, Crc64Iso};
pub use self::fnv::{
	Fnv1_128, Fnv1_32, Fnv1_64, Fnv1a_128, Fnv1a_32, Fnv1a_64,
};
pub use self::shake::{Shake128Fixed, Shake256Fixed};
