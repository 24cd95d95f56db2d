// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Name of the running platform (`SDL_platform.h`).

use sdl3_sys::{abi, marshal, native_fn};

use crate::Result;

/// Returns the platform name SDL was built for, e.g. `"Linux"` or `"macOS"`.
pub fn get_platform() -> Result<String> {
    let get_platform = unsafe { native_fn!(SDL_GetPlatform: abi::SDL_GetPlatform) }?;
    Ok(unsafe { marshal::from_c_str(get_platform()) }.unwrap_or_default())
}
