// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Subsystem initialization and shutdown (`SDL_init.h`).

use std::ops::{BitAnd, BitOr, BitOrAssign};

use sdl3_sys::{abi, check, native_fn};

use crate::Result;

/// Mask of SDL subsystems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InitFlags(abi::SDL_InitFlags);

impl InitFlags {
    /// Audio playback and recording.
    pub const AUDIO: Self = Self(abi::SDL_INIT_AUDIO);
    /// Windows and displays; implies `EVENTS`.
    pub const VIDEO: Self = Self(abi::SDL_INIT_VIDEO);
    /// Joysticks; implies `EVENTS`.
    pub const JOYSTICK: Self = Self(abi::SDL_INIT_JOYSTICK);
    /// Force feedback.
    pub const HAPTIC: Self = Self(abi::SDL_INIT_HAPTIC);
    /// Gamepads; implies `JOYSTICK`.
    pub const GAMEPAD: Self = Self(abi::SDL_INIT_GAMEPAD);
    /// The event queue.
    pub const EVENTS: Self = Self(abi::SDL_INIT_EVENTS);
    /// Sensors; implies `EVENTS`.
    pub const SENSOR: Self = Self(abi::SDL_INIT_SENSOR);
    /// Cameras; implies `EVENTS`.
    pub const CAMERA: Self = Self(abi::SDL_INIT_CAMERA);

    /// No subsystem.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Wraps a raw mask; unknown bits are kept.
    pub const fn from_bits(bits: abi::SDL_InitFlags) -> Self {
        Self(bits)
    }

    /// The raw mask.
    pub const fn bits(self) -> abi::SDL_InitFlags {
        self.0
    }

    /// Returns `true` if no subsystem is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every subsystem in `other` is also in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for InitFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for InitFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for InitFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Initializes the SDL library and the subsystems in `flags`.
///
/// # Errors
///
/// Returns [`crate::Error::NativeCall`] with SDL's message if a subsystem
/// cannot be initialized.
///
/// # Examples
///
/// ```no_run
/// use sdl3::InitFlags;
///
/// # fn main() -> Result<(), sdl3::Error> {
/// sdl3::init(InitFlags::VIDEO | InitFlags::EVENTS)?;
/// // ...
/// sdl3::quit()?;
/// # Ok(())
/// # }
/// ```
pub fn init(flags: InitFlags) -> Result<()> {
    let sdl_init = unsafe { native_fn!(SDL_Init: abi::SDL_Init) }?;
    check("SDL_Init", unsafe { sdl_init(flags.bits()) })
}

/// Initializes additional subsystems. Each call must be paired with
/// [`quit_sub_system`].
///
/// # Errors
///
/// Returns [`crate::Error::NativeCall`] on failure.
pub fn init_sub_system(flags: InitFlags) -> Result<()> {
    let init_sub_system = unsafe { native_fn!(SDL_InitSubSystem: abi::SDL_InitSubSystem) }?;
    check("SDL_InitSubSystem", unsafe { init_sub_system(flags.bits()) })
}

/// Shuts down subsystems started with [`init_sub_system`].
pub fn quit_sub_system(flags: InitFlags) -> Result<()> {
    let quit_sub_system = unsafe { native_fn!(SDL_QuitSubSystem: abi::SDL_QuitSubSystem) }?;
    unsafe { quit_sub_system(flags.bits()) };
    Ok(())
}

/// Returns which of the subsystems in `flags` are initialized; an empty mask
/// asks for all of them.
pub fn was_init(flags: InitFlags) -> Result<InitFlags> {
    let was_init = unsafe { native_fn!(SDL_WasInit: abi::SDL_WasInit) }?;
    Ok(InitFlags::from_bits(unsafe { was_init(flags.bits()) }))
}

/// Shuts down every subsystem.
pub fn quit() -> Result<()> {
    let sdl_quit = unsafe { native_fn!(SDL_Quit: abi::SDL_Quit) }?;
    unsafe { sdl_quit() };
    Ok(())
}
