// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// File: logging.rs
// Author: digestkit maintainers
// Copyright (c) 2026 digestkit maintainers

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use digestkit::{hash, mac, Algorithm, HashAlg};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Clone, Default)]
struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		if *event.metadata().level() == Level::WARN {
			self.0.fetch_add(1, Ordering::SeqCst);
		}
	}
}

fn warnings<F: FnOnce()>(f: F) -> usize {
	let counter = WarnCounter::default();
	let subscriber = tracing_subscriber::registry().with(counter.clone());
	tracing::subscriber::with_default(subscriber, f);
	counter.0.load(Ordering::SeqCst)
}

#[test]
fn weak_algorithms_warn_once_on_name_resolution() {
	assert_eq!(warnings(|| assert!(hash::resolve("md5").is_ok())), 1);
	assert_eq!(warnings(|| assert!(mac::resolve("crc32").is_ok())), 1);
	assert_eq!(warnings(|| assert!(hash::resolve("fnv1a_64").is_ok())), 1);
	assert_eq!(warnings(|| assert!(mac::resolve("SHA1").is_ok())), 1);
}

#[test]
fn both_registries_warn_on_value_resolution() {
	let md5 = HashAlg::Md5 as i32;
	assert_eq!(warnings(|| assert!(hash::resolve_value(md5).is_ok())), 1);
	assert_eq!(warnings(|| assert!(mac::resolve_value(md5).is_ok())), 1);
	let crc = HashAlg::Crc64Iso as i32;
	assert_eq!(warnings(|| assert!(hash::resolve_value(crc).is_ok())), 1);
	assert_eq!(warnings(|| assert!(mac::resolve_value(crc).is_ok())), 1);
}

#[test]
fn secure_algorithms_do_not_warn() {
	assert_eq!(warnings(|| assert!(hash::resolve("sha256").is_ok())), 0);
	assert_eq!(warnings(|| assert!(mac::resolve("sha3_512").is_ok())), 0);
	let blake = HashAlg::Blake2b_256 as i32;
	assert_eq!(warnings(|| assert!(hash::resolve_value(blake).is_ok())), 0);
	assert_eq!(warnings(|| assert!(mac::resolve_value(blake).is_ok())), 0);
}

#[test]
fn misses_and_plain_lookups_do_not_warn() {
	assert_eq!(warnings(|| assert!(hash::resolve("ripemd160").is_err())), 0);
	assert_eq!(warnings(|| assert!(mac::resolve_value(0).is_err())), 0);
	assert_eq!(warnings(|| assert!(mac::resolve_value(99).is_err())), 0);
	assert_eq!(
		warnings(|| {
			let hmac = mac::from_algorithm(Algorithm::Crc32).unwrap();
			hmac(b"abc", b"test");
			hash::from_hash_alg(HashAlg::Md5).unwrap()(b"abc");
		}),
		0
	);
}
