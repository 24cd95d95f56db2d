// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! SDL's last-error message (`SDL_error.h`).
//!
//! Failing wrappers already carry the message in [`crate::Error::NativeCall`];
//! these are for code that calls the raw layer directly.

use sdl3_sys::{abi, check, marshal, native_fn};

use crate::Result;

/// Returns the message of the last error on this thread.
///
/// The message is only meaningful right after a call that signalled
/// failure; successful calls do not clear it.
pub fn get_error() -> Result<String> {
    let get_error = unsafe { native_fn!(SDL_GetError: abi::SDL_GetError) }?;
    Ok(unsafe { marshal::from_c_str(get_error()) }.unwrap_or_default())
}

/// Clears the message of the last error on this thread.
pub fn clear_error() -> Result<()> {
    let clear_error = unsafe { native_fn!(SDL_ClearError: abi::SDL_ClearError) }?;
    check("SDL_ClearError", unsafe { clear_error() })
}
