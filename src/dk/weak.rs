// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// Module: weak algorithm warnings helper
// Author: digestkit maintainers
// Copyright (c) 2026 digestkit maintainers

//! Identifies weak and non-cryptographic algorithms and builds the
//! warning text the registries log when one is resolved by name.

use super::algorithm::{Algorithm, Strength};

const NIST_REFERENCE: &str =
	"https://doi.org/10.6028/NIST.SP.800-131Ar2";
const BSI_REFERENCE: &str =
	"https://www.bsi.bund.de/SharedDocs/Downloads/EN/BSI/Publications/TechGuidelines/TG02102/BSI-TR-02102-1.pdf";

const RFC2104_REFERENCE: &str = "https://www.rfc-editor.org/rfc/rfc2104";

const LEGACY_REFERENCES: &[&str] = &[NIST_REFERENCE, BSI_REFERENCE];
const CHECKSUM_REFERENCES: &[&str] = &[RFC2104_REFERENCE];

/// Metadata describing a flagged algorithm.
#[derive(Debug, Clone)]
pub struct WeakAlgorithmMetadata {
	pub algorithm: Algorithm,
	/// Replacement suggestion (e.g., "Use SHA-256").
	pub replacement_hint: &'static str,
}

/// Warning content for a flagged algorithm.
#[derive(Debug, Clone)]
pub struct WarningMessage {
	pub headline: String,
	pub body: String,
	pub references: &'static [&'static str],
}

impl WarningMessage {
	pub fn banner(&self) -> String {
		format!("{} {}", self.headline, self.body)
	}
}

const WEAK_ALGORITHMS: &[WeakAlgorithmMetadata] = &[
	WeakAlgorithmMetadata {
		algorithm: Algorithm::Md5,
		replacement_hint: "Use SHA-256 or BLAKE2b for new digests",
	},
	WeakAlgorithmMetadata {
		algorithm: Algorithm::Sha1,
		replacement_hint: "Use SHA-256 or SHA-512",
	},
	WeakAlgorithmMetadata {
		algorithm: Algorithm::Fnv1_32,
		replacement_hint: "Use HMAC-SHA-256 where a key is involved",
	},
	WeakAlgorithmMetadata {
		algorithm: Algorithm::Fnv1a_32,
		replacement_hint: "Use HMAC-SHA-256 where a key is involved",
	},
	WeakAlgorithmMetadata {
		algorithm: Algorithm::Fnv1_64,
		replacement_hint: "Use HMAC-SHA-256 where a key is involved",
	},
	WeakAlgorithmMetadata {
		algorithm: Algorithm::Fnv1a_64,
		replacement_hint: "Use HMAC-SHA-256 where a key is involved",
	},
	WeakAlgorithmMetadata {
		algorithm: Algorithm::Fnv1_128,
		replacement_hint: "Use HMAC-SHA-256 where a key is involved",
	},
	WeakAlgorithmMetadata {
		algorithm: Algorithm::Fnv1a_128,
		replacement_hint: "Use HMAC-SHA-256 where a key is involved",
	},
	WeakAlgorithmMetadata {
		algorithm: Algorithm::Crc32,
		replacement_hint: "Use HMAC-SHA-256 where a key is involved",
	},
	WeakAlgorithmMetadata {
		algorithm: Algorithm::Crc64Iso,
		replacement_hint: "Use HMAC-SHA-256 where a key is involved",
	},
	WeakAlgorithmMetadata {
		algorithm: Algorithm::Crc64Ecma,
		replacement_hint: "Use HMAC-SHA-256 where a key is involved",
	},
];

pub fn metadata_for(
	algorithm: Algorithm,
) -> Option<&'static WeakAlgorithmMetadata> {
	WEAK_ALGORITHMS
		.iter()
		.find(|entry| entry.algorithm == algorithm)
}

/// Returns warning content for flagged algorithms, `None` otherwise.
pub fn warning_for(algorithm: Algorithm) -> Option<WarningMessage> {
	let metadata = metadata_for(algorithm)?;
	let message = match algorithm.strength()? {
		Strength::Secure => return None,
		Strength::Legacy => WarningMessage {
			headline: format!(
				"WARNING: {} is a weak algorithm (collisions known)",
				algorithm
			),
			body: format!(
				"See NIST SP 800-131A rev.2 §3 and BSI TR-02102-1 recommendations. {}.",
				metadata.replacement_hint
			),
			references: LEGACY_REFERENCES,
		},
		Strength::NonCryptographic => WarningMessage {
			headline: format!(
				"WARNING: {} is a checksum, not a cryptographic hash; \
				HMAC over it does not authenticate",
				algorithm
			),
			body: format!(
				"Its output is linear or easily forged, so keying it does \
				not make it a PRF (RFC 2104 §6). {}.",
				metadata.replacement_hint
			),
			references: CHECKSUM_REFERENCES,
		},
	};
	Some(message)
}

pub fn all_metadata() -> &'static [WeakAlgorithmMetadata] {
	WEAK_ALGORITHMS
}

/// Logs the warning for `algorithm`, if it has one.
pub(crate) fn emit_warning(registry: &str, algorithm: Algorithm) {
	if let Some(message) = warning_for(algorithm) {
		tracing::warn!(
			registry,
			algorithm = %algorithm,
			references = %message.references.join(" | "),
			"{}",
			message.banner()
		);
	}
}
