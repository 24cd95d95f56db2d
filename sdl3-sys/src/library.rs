// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Native library handles and the process-wide instance.
//!
//! A [`Library`] owns a loaded shared object together with its
//! [`SymbolCache`]. A [`crate::Bound`] borrows the library it came from, so
//! the library cannot be closed while the `Bound` is alive. A function pointer
//! copied out of a `Bound` carries no such borrow and must not be called after
//! [`Library::close`]. The process-wide library lives in a [`LibraryCell`] and
//! is `&'static`; it is never unloaded, so pointers bound from it stay valid.

use std::{
    ffi::c_void,
    fmt,
    path::Path,
    ptr::NonNull,
    sync::{Mutex, MutexGuard, OnceLock, PoisonError},
};

use crate::{
    Error, ExportTable, Result, SharedObject, SymbolCache,
    config::{self, DEFAULT_ERROR_SYMBOL, LibraryConfig},
};

/// A loaded native library and the cache of its resolved exports.
pub struct Library {
    pub(crate) name: String,
    pub(crate) exports: Box<dyn ExportTable>,
    pub(crate) symbols: SymbolCache,
    pub(crate) error_symbol: String,
}

impl Library {
    /// Opens the shared library at `path` through the OS loader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LibraryLoad`] if the library cannot be found or loaded.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sdl3_sys::{Library, config::default_library_path};
    ///
    /// # fn main() -> Result<(), sdl3_sys::Error> {
    /// let library = Library::open(default_library_path())?;
    /// let version = library.resolve("SDL_GetVersion")?;
    /// println!("SDL_GetVersion is at {version:p}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let exports = SharedObject::open(path)?;
        Ok(Self::from_exports(path.display().to_string(), Box::new(exports)))
    }

    /// Opens the library described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LibraryLoad`] if the library cannot be found or loaded.
    pub fn open_with_config(config: &LibraryConfig) -> Result<Self> {
        Ok(Self::open(&config.path)?.with_error_symbol(config.error_symbol.as_str()))
    }

    /// Wraps an already loaded export table.
    ///
    /// `name` is only used in diagnostics.
    pub fn from_exports(name: impl Into<String>, exports: Box<dyn ExportTable>) -> Self {
        Self {
            name: name.into(),
            exports,
            symbols: SymbolCache::new(),
            error_symbol: DEFAULT_ERROR_SYMBOL.to_string(),
        }
    }

    /// Replaces the export used to read the last-error message.
    pub fn with_error_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.error_symbol = symbol.into();
        self
    }

    /// Name or path the library was opened with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Export used to read the last-error message.
    pub fn error_symbol(&self) -> &str {
        &self.error_symbol
    }

    /// The cache of resolved exports.
    pub fn symbols(&self) -> &SymbolCache {
        &self.symbols
    }

    /// Returns the untyped address of the export `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SymbolNotFound`] if the library has no such export.
    pub fn resolve(&self, symbol: &str) -> Result<NonNull<c_void>> {
        self.symbols
            .resolve(self.exports.as_ref(), &self.name, symbol, "*mut c_void")
    }

    /// Unloads the library.
    ///
    /// Consuming `self` guarantees nothing bound from this library outlives it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LibraryLoad`] carrying the loader's diagnostic if
    /// unloading fails.
    pub fn close(self) -> Result<()> {
        let Self { name, exports, .. } = self;
        exports
            .close()
            .map_err(|source| Error::LibraryLoad { library: name, source })
    }
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("name", &self.name)
            .field("error_symbol", &self.error_symbol)
            .field("cached_symbols", &self.symbols.len())
            .finish()
    }
}

/// A failed load, kept so that implicit users see it without reloading.
#[derive(Debug)]
struct LoadFailure {
    library: String,
    reason: String,
}

impl LoadFailure {
    fn record(error: &Error) -> Self {
        match error {
            Error::LibraryLoad { library, source } => Self {
                library: library.clone(),
                reason: source.to_string(),
            },
            other => Self {
                library: String::new(),
                reason: other.to_string(),
            },
        }
    }

    fn to_error(&self) -> Error {
        Error::LibraryLoad {
            library: self.library.clone(),
            source: self.reason.clone().into(),
        }
    }
}

/// A slot holding one lazily loaded [`Library`].
///
/// Once the library is published, reading it is a single atomic load. The
/// internal mutex is only taken while the slot is still empty, so that racing
/// first callers run the loader exactly once.
///
/// A failed load is remembered: [`LibraryCell::get_or_open`] reports it again
/// without running the loader, and only [`LibraryCell::get_or_retry`] makes a
/// new attempt.
#[derive(Debug)]
pub struct LibraryCell {
    library: OnceLock<Library>,
    init: Mutex<Option<LoadFailure>>,
}

impl Default for LibraryCell {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryCell {
    /// Creates an empty cell.
    pub const fn new() -> Self {
        Self {
            library: OnceLock::new(),
            init: Mutex::new(None),
        }
    }

    /// Returns the library if it has been published.
    pub fn get(&self) -> Option<&Library> {
        self.library.get()
    }

    /// Returns `true` if the last load attempt failed and nothing is published.
    pub fn has_failed(&self) -> bool {
        self.get().is_none() && self.lock().is_some()
    }

    /// Returns the published library, running `open` if no attempt was made yet.
    ///
    /// Concurrent callers block until the first one finishes. If an earlier
    /// attempt failed, its error is returned again and `open` is not run.
    ///
    /// # Errors
    ///
    /// Returns the error of `open`, or [`Error::LibraryLoad`] replaying the
    /// earlier failure.
    pub fn get_or_open<F>(&self, open: F) -> Result<&Library>
    where
        F: FnOnce() -> Result<Library>,
    {
        self.open_with(open, false)
    }

    /// Like [`LibraryCell::get_or_open`], but a remembered failure is
    /// discarded and `open` runs again.
    ///
    /// # Errors
    ///
    /// Returns whatever `open` returns.
    pub fn get_or_retry<F>(&self, open: F) -> Result<&Library>
    where
        F: FnOnce() -> Result<Library>,
    {
        self.open_with(open, true)
    }

    fn open_with<F>(&self, open: F, retry: bool) -> Result<&Library>
    where
        F: FnOnce() -> Result<Library>,
    {
        if let Some(library) = self.library.get() {
            return Ok(library);
        }

        let mut failure = self.lock();
        if let Some(library) = self.library.get() {
            return Ok(library);
        }
        if !retry && let Some(failure) = failure.as_ref() {
            return Err(failure.to_error());
        }
        match open() {
            Ok(library) => {
                *failure = None;
                Ok(self.library.get_or_init(|| library))
            }
            Err(error) => {
                *failure = Some(LoadFailure::record(&error));
                Err(error)
            }
        }
    }

    /// Publishes `library` if the cell is still empty, replacing a remembered failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyInitialized`] if a library was already
    /// published. `library` is dropped in that case.
    pub fn install(&self, library: Library) -> Result<&Library> {
        let mut failure = self.lock();
        if self.library.get().is_some() {
            return Err(Error::AlreadyInitialized);
        }
        *failure = None;
        Ok(self.library.get_or_init(|| library))
    }

    fn lock(&self) -> MutexGuard<'_, Option<LoadFailure>> {
        self.init.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

static GLOBAL: LibraryCell = LibraryCell::new();

fn open_configured() -> Result<Library> {
    Library::open_with_config(config::current()).inspect_err(|error| {
        tracing::error!("Failed to load the native library: {}", error);
    })
}

/// Returns the process-wide library, loading it if needed.
///
/// The library is opened from [`config::current`]. The OS-level load runs
/// once no matter how many threads race here. If an earlier load failed, this
/// call is a new attempt; bound functions and [`crate::check`] never retry on
/// their own and keep reporting the earlier failure instead.
///
/// # Errors
///
/// Returns [`Error::LibraryLoad`] if the load fails.
///
/// # Examples
///
/// ```no_run
/// # fn main() -> Result<(), sdl3_sys::Error> {
/// let library = sdl3_sys::acquire()?;
/// assert!(std::ptr::eq(library, sdl3_sys::acquire()?));
/// # Ok(())
/// # }
/// ```
pub fn acquire() -> Result<&'static Library> {
    GLOBAL.get_or_retry(open_configured)
}

/// The process-wide library for implicit users: loads it on first use and
/// replays a failed load instead of repeating it.
pub(crate) fn process_library() -> Result<&'static Library> {
    GLOBAL.get_or_open(open_configured)
}

/// Publishes an embedder-provided library as the process-wide one.
///
/// Must happen before the first successful load.
///
/// # Errors
///
/// Returns [`Error::AlreadyInitialized`] if the process-wide library is already set.
pub fn install(library: Library) -> Result<&'static Library> {
    GLOBAL.install(library)
}
