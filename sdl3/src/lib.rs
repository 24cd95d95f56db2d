// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! # SDL3 - Simple DirectMedia Layer
//!
//! Safe wrappers over the SDL3 C library, loaded at runtime through
//! [`sdl3_sys`].
//!
//! ## Overview
//!
//! Every function here binds its SDL export on first use, calls it, and maps
//! SDL's failure convention (`false` or a null pointer) into
//! [`Error::NativeCall`] carrying the message from `SDL_GetError`. Nothing is
//! linked at build time; the library is opened the first time any wrapper is
//! called, from the path configured with [`sdl3_sys::config::configure`] or
//! the platform's default `SDL3` library name.
//!
//! Covered so far:
//!
//! - [`init`] / [`quit`] and subsystem management
//! - [`get_error`] / [`clear_error`]
//! - [`get_version`] / [`get_revision`] / [`get_platform`]
//! - [`get_ticks`] / [`get_ticks_ns`] / [`delay`]
//! - [`Window`]
//!
//! ## Example
//!
//! ```no_run
//! use sdl3::{InitFlags, Window, WindowFlags};
//!
//! # fn main() -> Result<(), sdl3::Error> {
//! sdl3::init(InitFlags::VIDEO)?;
//! println!("SDL {} on {}", sdl3::get_version()?, sdl3::get_platform()?);
//!
//! let mut window = Window::new("Hello", 640, 480, WindowFlags::RESIZABLE)?;
//! window.set_title("Hello, SDL")?;
//! sdl3::delay(std::time::Duration::from_secs(1))?;
//!
//! drop(window);
//! sdl3::quit()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! SDL keeps its last error per thread and never clears it on success, so
//! the message is read exactly once, right after the call that failed. A
//! successful call never returns an error.

#![warn(missing_docs)]

mod error;
mod init;
mod platform;
mod timer;
mod version;
mod video;

pub use sdl3_sys::{Error, Result};

pub use error::{clear_error, get_error};
pub use init::{InitFlags, init, init_sub_system, quit, quit_sub_system, was_init};
pub use platform::get_platform;
pub use timer::{delay, get_ticks, get_ticks_ns};
pub use version::{Version, get_revision, get_version};
pub use video::{Window, WindowFlags};
