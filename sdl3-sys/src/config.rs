// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Location of the native library and of its last-error getter.
//!
//! The process-wide handle returned by [`crate::acquire`] is opened from the
//! configuration returned by [`current`]. Embedders that ship the library in a
//! non-standard place call [`configure`] once, before the first call into the
//! bindings.

use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use serde::Deserialize;

use crate::{Error, Result};

/// Export that returns the native library's last-error message.
pub const DEFAULT_ERROR_SYMBOL: &str = "SDL_GetError";

/// Base name of the native library, without platform prefix or suffix.
pub const LIBRARY_BASE_NAME: &str = "SDL3";

static CONFIG: OnceLock<LibraryConfig> = OnceLock::new();

/// Returns the platform file name of the native library (`libSDL3.so`,
/// `libSDL3.dylib` or `SDL3.dll`).
///
/// The name is handed to the OS loader as is, so the loader's standard search
/// path applies.
///
/// # Examples
///
/// ```
/// use sdl3_sys::config::default_library_path;
///
/// let path = default_library_path();
/// assert!(path.to_string_lossy().contains("SDL3"));
/// ```
pub fn default_library_path() -> PathBuf {
    libloading::library_filename(LIBRARY_BASE_NAME).into()
}

/// How to find the native library.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// File name or path of the shared library.
    pub path: PathBuf,
    /// Export used to read the last-error message after a failed call.
    pub error_symbol: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            path: default_library_path(),
            error_symbol: DEFAULT_ERROR_SYMBOL.to_string(),
        }
    }
}

impl LibraryConfig {
    /// Creates a configuration for the library at `path` with the default error getter.
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the document is not valid JSON or has
    /// fields of the wrong type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdl3_sys::config::LibraryConfig;
    ///
    /// # fn main() -> Result<(), sdl3_sys::Error> {
    /// let config = LibraryConfig::from_json(r#"{ "path": "/opt/sdl/lib/libSDL3.so.0" }"#)?;
    /// assert_eq!(config.error_symbol, "SDL_GetError");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_json(document: &str) -> Result<Self> {
        serde_json::from_str(document).map_err(|error| Error::Config(error.to_string()))
    }
}

/// Sets the process-wide configuration.
///
/// # Errors
///
/// Returns [`Error::AlreadyInitialized`] if a configuration was already set,
/// or was already read by a first [`crate::acquire`].
pub fn configure(config: LibraryConfig) -> Result<()> {
    CONFIG.set(config).map_err(|_| Error::AlreadyInitialized)
}

/// Returns the process-wide configuration, fixing it to the default if
/// [`configure`] was never called.
pub fn current() -> &'static LibraryConfig {
    CONFIG.get_or_init(LibraryConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = LibraryConfig::from_json("{}").unwrap();
        assert_eq!(config, LibraryConfig::default());
        assert_eq!(config.error_symbol, DEFAULT_ERROR_SYMBOL);
    }

    #[test]
    fn fields_override_defaults() {
        let config = LibraryConfig::from_json(
            r#"{ "path": "vendor/libSDL3.so.0", "error_symbol": "Custom_GetError" }"#,
        )
        .unwrap();
        assert_eq!(config.path, PathBuf::from("vendor/libSDL3.so.0"));
        assert_eq!(config.error_symbol, "Custom_GetError");
    }

    #[test]
    fn malformed_document_is_a_config_error() {
        let error = LibraryConfig::from_json(r#"{ "path": 42 }"#).unwrap_err();
        assert!(matches!(error, Error::Config(_)));
    }

    #[test]
    fn with_path_keeps_the_default_error_getter() {
        let config = LibraryConfig::with_path(".pixi/envs/default/lib/libSDL3.so");
        assert_eq!(config.path, PathBuf::from(".pixi/envs/default/lib/libSDL3.so"));
        assert_eq!(config.error_symbol, DEFAULT_ERROR_SYMBOL);
    }
}
