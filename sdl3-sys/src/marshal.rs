// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! String marshaling between Rust and `const char *`.
//!
//! Arguments are passed as NUL-terminated copies that the caller keeps alive
//! for the duration of the call. Returned strings are copied into owned
//! `String`s immediately; the native memory is never freed here, since every
//! string-returning native function documents its own ownership.

use std::ffi::{CStr, CString, c_char};

use crate::{ConstPtr, Result};

/// Copies `value` into a NUL-terminated string for passing to native code.
///
/// # Errors
///
/// Returns [`crate::Error::NulString`] if `value` contains an interior NUL.
pub fn to_c_string(value: &str) -> Result<CString> {
    Ok(CString::new(value)?)
}

/// Borrows a C string as a non-null read-only pointer argument.
pub fn c_str_ptr(value: &CStr) -> ConstPtr<c_char> {
    // Safety: a `CStr` is never at the null address.
    unsafe { ConstPtr::new_unchecked(value.as_ptr()) }
}

/// Returns the pointer of an optional string argument, null for `None`.
pub fn opt_c_str_ptr(value: Option<&CStr>) -> *const c_char {
    value.map(CStr::as_ptr).unwrap_or(std::ptr::null())
}

/// Copies a native string into an owned `String`, or `None` for null.
///
/// Invalid UTF-8 is replaced with U+FFFD.
///
/// # Safety
///
/// A non-null `ptr` must point to a NUL-terminated string that stays valid
/// until this function returns.
pub unsafe fn from_c_str(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}
