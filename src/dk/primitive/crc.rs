// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// File: crc.rs
// Author: digestkit maintainers
// Copyright (c) 2026 digestkit maintainers

//! CRC checksums as one-byte-block digests.
//!
//! | Adapter     | Catalog entry      | Notes                              |
//! |-------------|--------------------|------------------------------------|
//! | `Crc32`     | `CRC_32_ISO_HDLC`  | IEEE 802.3 polynomial              |
//! | `Crc64Iso`  | `CRC_64_GO_ISO`    | ISO 3309 polynomial, reflected     |
//! | `Crc64Ecma` | `CRC_64_XZ`        | ECMA-182 polynomial, reflected     |
//!
//! Results are written big-endian.

use crc::{Crc, CRC_32_ISO_HDLC, CRC_64_GO_ISO, CRC_64_XZ};
use digest::consts::{U1, U4, U8};
use digest::core_api::BlockSizeUser;
use digest::{
	FixedOutput, HashMarker, Output, OutputSizeUser, Reset, Update,
};

static CRC_32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);
static CRC_64_ISO: Crc<u64> = Crc::<u64>::new(&CRC_64_GO_ISO);
static CRC_64_ECMA: Crc<u64> = Crc::<u64>::new(&CRC_64_XZ);

macro_rules! crc_digest {
	($name:ident, $engine:ident, $width:ty, $output:ty, $doc:literal) => {
		#[doc = $doc]
		pub struct $name {
			state: crc::Digest<'static, $width>,
		}

		impl Default for $name {
			fn default() -> Self {
				Self {
					state: $engine.digest(),
				}
			}
		}

		impl HashMarker for $name {}

		impl OutputSizeUser for $name {
			type OutputSize = $output;
		}

		impl BlockSizeUser for $name {
			type BlockSize = U1;
		}

		impl Update for $name {
			fn update(&mut self, data: &[u8]) {
				self.state.update(data);
			}
		}

		impl FixedOutput for $name {
			fn finalize_into(self, out: &mut Output<Self>) {
				out.copy_from_slice(&self.state.finalize().to_be_bytes());
			}
		}

		impl Reset for $name {
			fn reset(&mut self) {
				*self = Self::default();
			}
		}
	};
}

crc_digest!(Crc32, CRC_32, u32, U4, "CRC-32 (IEEE).");
crc_digest!(Crc64Iso, CRC_64_ISO, u64, U8, "CRC-64 with the ISO polynomial.");
crc_digest!(
	Crc64Ecma,
	CRC_64_ECMA,
	u64,
	U8,
	"CRC-64 with the ECMA-182 polynomial."
);
