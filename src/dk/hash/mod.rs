// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// Module: hash (unkeyed digests)
// Author: digestkit maintainers
// Copyright (c) 2026 digestkit maintainers

//! Hash sub-registry: one-shot, unkeyed digests sharing the [`HashFn`]
//! signature, and the lookups that select them.

pub mod functions;
pub mod registry;

pub use functions::*;
pub use registry::{
	from_algorithm, from_hash_alg, from_hash_alg_value, from_ordinal,
	resolve, resolve_value,
};

/// Signature shared by every hash function. An absent input is the empty
/// slice.
pub type HashFn = fn(&[u8]) -> Vec<u8>;

/// Runs `hash` over an optional input, treating `None` as empty.
pub fn digest_opt(hash: HashFn, input: Option<&[u8]>) -> Vec<u8> {
	hash(input.unwrap_or_default())
}
