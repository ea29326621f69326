// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// File: lib.rs
// Author: digestkit maintainers
// Copyright (c) 2026 digestkit maintainers

//! A closed registry of one-shot digest functions.
//!
//! Two sub-registries share one algorithm set:
//!
//! * [`dk::hash`]: `fn(&[u8]) -> Vec<u8>`, plain digests.
//! * [`dk::mac`]: `fn(&[u8], &[u8]) -> Vec<u8>`, HMAC over the same
//!   primitives, taking `(message, key)`.
//!
//! Functions are selected by the internal [`Algorithm`] ordinal or by the
//! configuration schema's [`HashAlg`]. Lookups return `None` for the
//! reserved unknown identifier and for anything out of range.
//!
//! ```
//! use digestkit::{hash, HashAlg};
//!
//! let sha256 = hash::from_hash_alg(HashAlg::Sha256).unwrap();
//! assert_eq!(sha256(b"abc").len(), 32);
//! assert!(hash::from_hash_alg(HashAlg::Unknown).is_none());
//! ```

pub mod dk {
	pub mod algorithm;
	pub mod error;
	pub mod hash;
	pub mod mac;
	pub mod primitive;
	pub mod schema;
	pub mod size;
	pub mod weak;
}

pub use dk::algorithm::{Algorithm, AlgorithmMetadata, Strength};
pub use dk::error::{RegistryError, RegistryErrorKind};
pub use dk::hash::{self, HashFn};
pub use dk::mac::{self, MacFn};
pub use dk::schema::HashAlg;
pub use dk::size::{digest_size, HASH_SIZES};
