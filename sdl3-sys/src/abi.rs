// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Raw SDL3 C declarations used by the safe wrappers.
//!
//! Each function alias is named after the export it describes and spells out
//! its C signature, so that `native_fn!(SDL_Init: abi::SDL_Init)` binds the
//! export under the matching type. These declarations mirror the SDL 3.2
//! headers; a mismatch is undefined behaviour, not an error.

#![allow(non_camel_case_types)]

use std::{
    ffi::{c_char, c_int},
    marker::{PhantomData, PhantomPinned},
};

use crate::{ConstPtr, MutPtr};

// SDL_init.h

/// Subsystem mask accepted by `SDL_Init` and friends.
pub type SDL_InitFlags = u32;

pub const SDL_INIT_AUDIO: SDL_InitFlags = 0x0000_0010;
/// Implies `SDL_INIT_EVENTS`.
pub const SDL_INIT_VIDEO: SDL_InitFlags = 0x0000_0020;
/// Implies `SDL_INIT_EVENTS`.
pub const SDL_INIT_JOYSTICK: SDL_InitFlags = 0x0000_0200;
pub const SDL_INIT_HAPTIC: SDL_InitFlags = 0x0000_1000;
/// Implies `SDL_INIT_JOYSTICK`.
pub const SDL_INIT_GAMEPAD: SDL_InitFlags = 0x0000_2000;
pub const SDL_INIT_EVENTS: SDL_InitFlags = 0x0000_4000;
/// Implies `SDL_INIT_EVENTS`.
pub const SDL_INIT_SENSOR: SDL_InitFlags = 0x0000_8000;
/// Implies `SDL_INIT_EVENTS`.
pub const SDL_INIT_CAMERA: SDL_InitFlags = 0x0001_0000;

pub type SDL_Init = unsafe extern "C" fn(flags: SDL_InitFlags) -> bool;
pub type SDL_InitSubSystem = unsafe extern "C" fn(flags: SDL_InitFlags) -> bool;
pub type SDL_QuitSubSystem = unsafe extern "C" fn(flags: SDL_InitFlags);
pub type SDL_WasInit = unsafe extern "C" fn(flags: SDL_InitFlags) -> SDL_InitFlags;
pub type SDL_Quit = unsafe extern "C" fn();

// SDL_error.h

pub type SDL_GetError = unsafe extern "C" fn() -> *const c_char;
pub type SDL_ClearError = unsafe extern "C" fn() -> bool;

// SDL_version.h

pub type SDL_GetVersion = unsafe extern "C" fn() -> c_int;
pub type SDL_GetRevision = unsafe extern "C" fn() -> *const c_char;

/// `SDL_VERSIONNUM(major, minor, micro)`.
pub const fn sdl_versionnum(major: c_int, minor: c_int, micro: c_int) -> c_int {
    major * 1_000_000 + minor * 1_000 + micro
}

// SDL_timer.h

pub type SDL_GetTicks = unsafe extern "C" fn() -> u64;
pub type SDL_GetTicksNS = unsafe extern "C" fn() -> u64;
pub type SDL_Delay = unsafe extern "C" fn(ms: u32);

// SDL_platform.h

pub type SDL_GetPlatform = unsafe extern "C" fn() -> *const c_char;

// SDL_video.h

/// Opaque window handle.
#[repr(C)]
pub struct SDL_Window {
    _data: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

pub type SDL_WindowID = u32;
pub type SDL_WindowFlags = u64;

pub const SDL_WINDOW_FULLSCREEN: SDL_WindowFlags = 0x0000_0000_0000_0001;
pub const SDL_WINDOW_OPENGL: SDL_WindowFlags = 0x0000_0000_0000_0002;
pub const SDL_WINDOW_HIDDEN: SDL_WindowFlags = 0x0000_0000_0000_0008;
pub const SDL_WINDOW_BORDERLESS: SDL_WindowFlags = 0x0000_0000_0000_0010;
pub const SDL_WINDOW_RESIZABLE: SDL_WindowFlags = 0x0000_0000_0000_0020;
pub const SDL_WINDOW_MINIMIZED: SDL_WindowFlags = 0x0000_0000_0000_0040;
pub const SDL_WINDOW_MAXIMIZED: SDL_WindowFlags = 0x0000_0000_0000_0080;
pub const SDL_WINDOW_HIGH_PIXEL_DENSITY: SDL_WindowFlags = 0x0000_0000_0000_2000;
pub const SDL_WINDOW_VULKAN: SDL_WindowFlags = 0x0000_0000_1000_0000;
pub const SDL_WINDOW_METAL: SDL_WindowFlags = 0x0000_0000_2000_0000;

/// Returns a new window, or null on failure.
pub type SDL_CreateWindow = unsafe extern "C" fn(
    title: ConstPtr<c_char>,
    w: c_int,
    h: c_int,
    flags: SDL_WindowFlags,
) -> *mut SDL_Window;
pub type SDL_DestroyWindow = unsafe extern "C" fn(window: MutPtr<SDL_Window>);
/// Returns 0 on failure.
pub type SDL_GetWindowID = unsafe extern "C" fn(window: MutPtr<SDL_Window>) -> SDL_WindowID;
/// The returned string is owned by the window.
pub type SDL_GetWindowTitle = unsafe extern "C" fn(window: MutPtr<SDL_Window>) -> *const c_char;
pub type SDL_SetWindowTitle =
    unsafe extern "C" fn(window: MutPtr<SDL_Window>, title: ConstPtr<c_char>) -> bool;
