// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::{
    cell::Cell,
    collections::HashMap,
    ffi::{CStr, c_char, c_int, c_void},
    ptr::NonNull,
    sync::{Arc, Mutex},
};

use sdl3_sys::{ExportTable, Library, LoaderError};

/// Ensures logging is initialized only once per test binary.
static LOG_ONCE: std::sync::Once = std::sync::Once::new();

/// Initializes logging (respects the `RUST_LOG` environment variable).
pub fn setup_logging() {
    LOG_ONCE.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::builder()
                    .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                    .from_env_lossy(),
            )
            .init();
    });
}

/// Per-symbol count of OS-level lookups.
pub type LookupCounts = Arc<Mutex<HashMap<String, usize>>>;

/// Export table standing in for the OS loader.
pub struct StubExports {
    symbols: HashMap<&'static str, usize>,
    lookups: LookupCounts,
}

impl StubExports {
    pub fn lookups(&self) -> LookupCounts {
        self.lookups.clone()
    }
}

impl ExportTable for StubExports {
    fn lookup(&self, symbol: &str) -> Result<NonNull<c_void>, LoaderError> {
        *self
            .lookups
            .lock()
            .unwrap()
            .entry(symbol.to_string())
            .or_default() += 1;
        self.symbols
            .get(symbol)
            .and_then(|address| NonNull::new(*address as *mut c_void))
            .ok_or_else(|| format!("undefined symbol: {symbol}").into())
    }
}

pub fn lookup_count(lookups: &LookupCounts, symbol: &str) -> usize {
    lookups.lock().unwrap().get(symbol).copied().unwrap_or(0)
}

thread_local! {
    static LAST_ERROR: Cell<&'static CStr> = const { Cell::new(c"") };
}

extern "C" fn get_error() -> *const c_char {
    LAST_ERROR.with(|slot| slot.get().as_ptr())
}

extern "C" fn add(a: c_int, b: c_int) -> c_int {
    a + b
}

extern "C" fn fail() -> bool {
    LAST_ERROR.with(|slot| slot.set(c"boom"));
    false
}

/// Exports `add(int, int) -> int`, `fail() -> bool` (sets "boom") and `SDL_GetError`.
pub fn stub_exports() -> StubExports {
    let symbols = HashMap::from([
        ("SDL_GetError", get_error as usize),
        ("add", add as usize),
        ("fail", fail as usize),
    ]);
    StubExports {
        symbols,
        lookups: LookupCounts::default(),
    }
}

/// Builds the stub library and returns it with its lookup counters.
pub fn stub_library() -> (Library, LookupCounts) {
    let exports = stub_exports();
    let lookups = exports.lookups();
    (Library::from_exports("stub", Box::new(exports)), lookups)
}
