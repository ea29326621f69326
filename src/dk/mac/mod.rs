// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// Module: mac (message authentication codes)
// Author: digestkit maintainers
// Copyright (c) 2026 digestkit maintainers

//! MAC sub-registry: HMAC over every primitive the hash sub-registry
//! offers, sharing the [`MacFn`] signature.
//!
//! The construction is always RFC 2104 HMAC with the primitive's own block
//! size. That includes BLAKE2, whose native keyed mode is deliberately not
//! used, and the CRC/FNV checksums. HMAC over a checksum is not a secure
//! MAC: those variants exist for compatibility only and must not guard
//! anything secret.

pub mod hmac;
pub mod registry;

pub use self::hmac::*;
pub use registry::{
	from_algorithm, from_hash_alg, from_hash_alg_value, from_ordinal,
	resolve, resolve_value,
};

/// Signature shared by every MAC function: `(message, key)`. Absent
/// message or key is the empty slice.
pub type MacFn = fn(&[u8], &[u8]) -> Vec<u8>;

/// Runs `mac` with optional message and key, treating `None` as empty.
pub fn mac_opt(
	mac: MacFn,
	message: Option<&[u8]>,
	key: Option<&[u8]>,
) -> Vec<u8> {
	mac(message.unwrap_or_default(), key.unwrap_or_default())
}
