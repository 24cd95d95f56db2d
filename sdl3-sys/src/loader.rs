// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! The OS dynamic-loader seam.
//!
//! [`ExportTable`] is everything the dispatch core needs from a loaded shared
//! object: look up an export by name, and unload. [`SharedObject`] implements
//! it with `libloading`; tests substitute their own tables.

use std::{
    ffi::c_void,
    path::{Path, PathBuf},
    ptr::NonNull,
};

use crate::{Error, Result, error::LoaderError};

/// The export table of a loaded shared object.
///
/// Lookups are assumed to be a pure function of the name for as long as the
/// table is alive, which is what lets [`crate::SymbolCache`] keep the first
/// answer forever.
pub trait ExportTable: Send + Sync {
    /// Returns the address of the export named `symbol`.
    fn lookup(&self, symbol: &str) -> core::result::Result<NonNull<c_void>, LoaderError>;

    /// Unloads the shared object.
    fn close(self: Box<Self>) -> core::result::Result<(), LoaderError> {
        Ok(())
    }
}

/// A shared library opened through the OS loader.
pub struct SharedObject {
    path: PathBuf,
    library: libloading::Library,
}

impl SharedObject {
    /// Opens the shared library at `path`.
    ///
    /// A bare file name is resolved with the OS loader's standard search
    /// rules (`LD_LIBRARY_PATH`, rpath, system directories, ...).
    ///
    /// # Errors
    ///
    /// Returns [`Error::LibraryLoad`] if the loader cannot find or load the library.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        // Safety: loading runs the library's initializers. The path is trusted
        // to name the native library these bindings were generated for.
        let library = unsafe { libloading::Library::new(&path) }.map_err(|source| {
            Error::LibraryLoad {
                library: path.display().to_string(),
                source: Box::new(source),
            }
        })?;

        tracing::debug!("Loaded native library \"{}\"", path.display());
        Ok(Self { path, library })
    }

    /// Returns the path the library was opened with.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExportTable for SharedObject {
    fn lookup(&self, symbol: &str) -> core::result::Result<NonNull<c_void>, LoaderError> {
        // Safety: the export is read as an untyped address and never called here.
        let address: *mut c_void = unsafe { *self.library.get::<*mut c_void>(symbol.as_bytes())? };
        NonNull::new(address)
            .ok_or_else(|| format!("export \"{symbol}\" has a null address").into())
    }

    fn close(self: Box<Self>) -> core::result::Result<(), LoaderError> {
        self.library.close()?;
        Ok(())
    }
}
