// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors produced when building declarations from untyped input.

use alloc::string::String;

use thiserror::Error;

/// Error returned by the untyped [`Property`](crate::Property) constructors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// A custom property name did not start with `--`.
    #[error("custom property `{0}` must start with `--`")]
    InvalidCustomName(String),
    /// A property name was empty.
    #[error("property name is empty")]
    EmptyName,
}
