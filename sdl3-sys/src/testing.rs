// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Test doubles for the OS loader and a small stub native library.

use std::{
    cell::Cell,
    collections::HashMap,
    ffi::{CStr, c_char, c_int, c_void},
    ptr::NonNull,
    sync::atomic::{AtomicUsize, Ordering},
};

use crate::{ConstPtr, ExportTable, Library, MutPtr, error::LoaderError};

/// Export table backed by a name → address map, counting every lookup.
#[derive(Debug, Default)]
pub(crate) struct StubExports {
    symbols: HashMap<&'static str, usize>,
    lookups: AtomicUsize,
}

impl StubExports {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, symbol: &'static str, address: usize) -> Self {
        self.symbols.insert(symbol, address);
        self
    }

    pub(crate) fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ExportTable for StubExports {
    fn lookup(&self, symbol: &str) -> core::result::Result<NonNull<c_void>, LoaderError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.symbols
            .get(symbol)
            .and_then(|address| NonNull::new(*address as *mut c_void))
            .ok_or_else(|| format!("undefined symbol: {symbol}").into())
    }
}

// The stub keeps its last error per thread, so parallel tests cannot
// overwrite each other's messages.
thread_local! {
    static LAST_ERROR: Cell<&'static CStr> = const { Cell::new(c"") };
}

fn set_error(message: &'static CStr) {
    LAST_ERROR.with(|slot| slot.set(message));
}

pub(crate) extern "C" fn stub_get_error() -> *const c_char {
    LAST_ERROR.with(|slot| slot.get().as_ptr())
}

pub(crate) extern "C" fn stub_add(a: c_int, b: c_int) -> c_int {
    a + b
}

pub(crate) extern "C" fn stub_fail() -> bool {
    set_error(c"boom");
    false
}

pub(crate) extern "C" fn stub_succeed() -> bool {
    true
}

pub(crate) extern "C" fn stub_open_nothing() -> *mut c_void {
    set_error(c"no such device");
    std::ptr::null_mut()
}

pub(crate) extern "C" fn stub_identity(ptr: MutPtr<u32>) -> MutPtr<u32> {
    ptr
}

pub(crate) extern "C" fn stub_identity_const(ptr: ConstPtr<u32>) -> ConstPtr<u32> {
    ptr
}

pub(crate) extern "C" fn stub_name() -> *const c_char {
    c"stub".as_ptr()
}

/// A library exporting the stub functions above, with `SDL_GetError` as its
/// error getter.
pub(crate) fn stub_exports() -> StubExports {
    StubExports::new()
        .with("SDL_GetError", stub_get_error as usize)
        .with("add", stub_add as usize)
        .with("fail", stub_fail as usize)
        .with("succeed", stub_succeed as usize)
        .with("open_nothing", stub_open_nothing as usize)
        .with("identity", stub_identity as usize)
        .with("identity_const", stub_identity_const as usize)
        .with("name", stub_name as usize)
}

pub(crate) fn stub_library() -> Library {
    Library::from_exports("stub", Box::new(stub_exports()))
}
