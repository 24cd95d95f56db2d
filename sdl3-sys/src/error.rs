// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for the dispatch core.
//!
//! The native library never raises: it returns `false` or a null pointer and
//! leaves a message in its last-error slot. This module defines the Rust side
//! of that contract, plus the failures of the loading machinery itself.

/// Convenience result type using [`Error`] as the error variant.
pub type Result<T> = core::result::Result<T, Error>;

/// Boxed error reported by an OS loader or an [`crate::ExportTable`] implementation.
pub type LoaderError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when loading the native library or calling into it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The shared library could not be found or loaded.
    ///
    /// Nothing in the binding layer can run without the library, so this is
    /// reported once per explicit attempt and never retried behind the caller's back.
    #[error("Loading library \"{library}\": {source}")]
    LibraryLoad {
        /// Path or file name handed to the OS loader.
        library: String,
        /// The loader's own diagnostic.
        #[source]
        source: LoaderError,
    },

    /// The loaded library has no export with the requested name.
    ///
    /// This points at a version skew between the bindings and the installed
    /// library, not at a transient condition.
    #[error("Symbol \"{symbol}\" not found in \"{library}\": {reason}")]
    SymbolNotFound {
        /// The export that was requested.
        symbol: String,
        /// The library it was looked up in.
        library: String,
        /// The loader's diagnostic, as first observed.
        reason: String,
    },

    /// A call following the boolean/null failure convention reported failure.
    ///
    /// `message` is whatever the native last-error slot held right after the
    /// call. Under concurrent failures on other threads it may belong to a
    /// different call.
    #[error("{function} failed: {message}")]
    NativeCall {
        /// Name of the native function that failed.
        function: &'static str,
        /// The native diagnostic string.
        message: String,
    },

    /// The process-wide library handle or configuration was already set.
    #[error("The process-wide library or its configuration is already initialized")]
    AlreadyInitialized,

    /// The library configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A generic error for wrapper-level failures with no dedicated variant.
    #[error("Other error: {0}")]
    Other(String),

    /// Failed to convert a Rust string to a C-compatible null-terminated string.
    #[error("Null string: {0}")]
    NulString(#[from] std::ffi::NulError),
}

impl Error {
    /// Returns the native diagnostic of a [`Error::NativeCall`], if this is one.
    pub fn native_message(&self) -> Option<&str> {
        match self {
            Error::NativeCall { message, .. } => Some(message),
            _ => None,
        }
    }
}
