// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// File: properties.rs
// Author: digestkit maintainers
// Copyright (c) 2026 digestkit maintainers

use digestkit::{hash, mac, Algorithm};
use proptest::prelude::*;

fn algorithm() -> impl Strategy<Value = Algorithm> {
	let all: Vec<Algorithm> = Algorithm::all().collect();
	proptest::sample::select(all)
}

proptest! {
	/// Output length is fixed by the algorithm, whatever the input.
	#[test]
	fn hash_length_is_fixed(
		alg in algorithm(),
		input in proptest::collection::vec(any::<u8>(), 0..2048),
	) {
		let hash = hash::from_algorithm(alg).unwrap();
		prop_assert_eq!(hash(&input).len(), alg.digest_size());
	}

	/// Same for MACs, over arbitrary message and key lengths, including
	/// keys longer than any block.
	#[test]
	fn mac_length_is_fixed(
		alg in algorithm(),
		message in proptest::collection::vec(any::<u8>(), 0..512),
		key in proptest::collection::vec(any::<u8>(), 0..300),
	) {
		let mac = mac::from_algorithm(alg).unwrap();
		prop_assert_eq!(mac(&message, &key).len(), alg.digest_size());
	}

	#[test]
	fn hash_is_deterministic(
		alg in algorithm(),
		input in proptest::collection::vec(any::<u8>(), 0..512),
	) {
		let hash = hash::from_algorithm(alg).unwrap();
		let copy = input.clone();
		prop_assert_eq!(hash(&input), hash(&copy));
	}

	/// Keying always changes the result for the cryptographic families.
	#[test]
	fn mac_differs_from_hash(
		alg in algorithm().prop_filter("cryptographic", |alg| {
			alg.metadata().map_or(false, |m| m.is_cryptographic())
		}),
		message in proptest::collection::vec(any::<u8>(), 0..256),
		key in proptest::collection::vec(any::<u8>(), 1..128),
	) {
		let hash = hash::from_algorithm(alg).unwrap();
		let mac = mac::from_algorithm(alg).unwrap();
		prop_assert_ne!(mac(&message, &key), hash(&message));
	}
}
