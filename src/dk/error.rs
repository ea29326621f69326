// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// File: error.rs
// Author: digestkit maintainers
// Copyright (c) 2026 digestkit maintainers

//! Errors returned by the name- and value-based resolution helpers.
//! Plain table lookups return `Option` and never construct these.

use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryErrorKind {
	/// The identifier is well-formed but names no registered algorithm,
	/// including the reserved unknown identifier.
	UnsupportedAlgorithm,
	/// A raw schema value outside the defined enumerators.
	UnknownValue,
}

#[derive(Debug)]
pub struct RegistryError {
	kind: RegistryErrorKind,
	message: Cow<'static, str>,
}

impl RegistryError {
	pub fn new(
		kind: RegistryErrorKind,
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub(crate) fn unsupported(registry: &str, identifier: &str) -> Self {
		Self::new(
			RegistryErrorKind::UnsupportedAlgorithm,
			format!("unsupported {} algorithm `{}`", registry, identifier),
		)
	}

	pub(crate) fn unknown_value(registry: &str, value: i32) -> Self {
		Self::new(
			RegistryErrorKind::UnknownValue,
			format!(
				"{} algorithm value {} is not defined by the schema",
				registry, value
			),
		)
	}

	pub fn kind(&self) -> RegistryErrorKind {
		self.kind
	}

	pub fn message(&self) -> &str {
		self.message.as_ref()
	}
}

impl std::fmt::Display for RegistryError {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl std::error::Error for RegistryError {}
