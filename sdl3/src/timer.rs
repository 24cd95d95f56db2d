// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Time since initialization and delays (`SDL_timer.h`).

use std::time::Duration;

use sdl3_sys::{abi, native_fn};

use crate::Result;

/// Time elapsed since SDL was initialized, in milliseconds resolution.
pub fn get_ticks() -> Result<Duration> {
    let get_ticks = unsafe { native_fn!(SDL_GetTicks: abi::SDL_GetTicks) }?;
    Ok(Duration::from_millis(unsafe { get_ticks() }))
}

/// Time elapsed since SDL was initialized, in nanoseconds resolution.
pub fn get_ticks_ns() -> Result<Duration> {
    let get_ticks_ns = unsafe { native_fn!(SDL_GetTicksNS: abi::SDL_GetTicksNS) }?;
    Ok(Duration::from_nanos(unsafe { get_ticks_ns() }))
}

/// Blocks the calling thread for at least `duration`, rounded down to whole
/// milliseconds and saturating at `u32::MAX` milliseconds.
pub fn delay(duration: Duration) -> Result<()> {
    let sdl_delay = unsafe { native_fn!(SDL_Delay: abi::SDL_Delay) }?;
    let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    unsafe { sdl_delay(ms) };
    Ok(())
}
