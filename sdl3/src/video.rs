// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Windows (`SDL_video.h`).

use std::ops::{BitOr, BitOrAssign};

use sdl3_sys::{MutPtr, abi, check, marshal, native_fn};

use crate::{Error, Result};

/// Window creation and state flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WindowFlags(abi::SDL_WindowFlags);

impl WindowFlags {
    /// Fullscreen mode.
    pub const FULLSCREEN: Self = Self(abi::SDL_WINDOW_FULLSCREEN);
    /// Usable with an OpenGL context.
    pub const OPENGL: Self = Self(abi::SDL_WINDOW_OPENGL);
    /// Not shown on creation.
    pub const HIDDEN: Self = Self(abi::SDL_WINDOW_HIDDEN);
    /// No window decoration.
    pub const BORDERLESS: Self = Self(abi::SDL_WINDOW_BORDERLESS);
    /// The user may resize the window.
    pub const RESIZABLE: Self = Self(abi::SDL_WINDOW_RESIZABLE);
    /// Minimized.
    pub const MINIMIZED: Self = Self(abi::SDL_WINDOW_MINIMIZED);
    /// Maximized.
    pub const MAXIMIZED: Self = Self(abi::SDL_WINDOW_MAXIMIZED);
    /// Requests a high pixel density back buffer on supporting displays.
    pub const HIGH_PIXEL_DENSITY: Self = Self(abi::SDL_WINDOW_HIGH_PIXEL_DENSITY);
    /// Usable with a Vulkan instance.
    pub const VULKAN: Self = Self(abi::SDL_WINDOW_VULKAN);
    /// Usable with a Metal view.
    pub const METAL: Self = Self(abi::SDL_WINDOW_METAL);

    /// No flag.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Wraps a raw mask; unknown bits are kept.
    pub const fn from_bits(bits: abi::SDL_WindowFlags) -> Self {
        Self(bits)
    }

    /// The raw mask.
    pub const fn bits(self) -> abi::SDL_WindowFlags {
        self.0
    }

    /// Returns `true` if every flag in `other` is also in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for WindowFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for WindowFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// An SDL window, destroyed when dropped.
///
/// SDL requires windows to be used from the thread that initialized the video
/// subsystem, so `Window` is neither `Send` nor `Sync`.
pub struct Window {
    raw: Option<MutPtr<abi::SDL_Window>>,
}

impl Window {
    /// Creates a window with a title, a size in screen coordinates and flags.
    ///
    /// # Errors
    ///
    /// - [`Error::NulString`] if `title` contains a NUL byte.
    /// - [`Error::NativeCall`] with SDL's message if the window cannot be
    ///   created, e.g. because the video subsystem is not initialized.
    pub fn new(title: &str, width: i32, height: i32, flags: WindowFlags) -> Result<Self> {
        let title = marshal::to_c_string(title)?;
        let create_window = unsafe { native_fn!(SDL_CreateWindow: abi::SDL_CreateWindow) }?;
        let raw = check("SDL_CreateWindow", unsafe {
            create_window(marshal::c_str_ptr(&title), width, height, flags.bits())
        })?;
        tracing::debug!(window = ?raw, "Created SDL window");
        Ok(Self { raw: Some(raw) })
    }

    /// The native handle, for passing to raw calls.
    pub fn as_raw(&self) -> Result<MutPtr<abi::SDL_Window>> {
        self.raw
            .ok_or_else(|| Error::Other("SDL window already destroyed".to_string()))
    }

    /// The numeric ID SDL uses for this window in events.
    pub fn id(&self) -> Result<abi::SDL_WindowID> {
        let raw = self.as_raw()?;
        let get_window_id = unsafe { native_fn!(SDL_GetWindowID: abi::SDL_GetWindowID) }?;
        let id = unsafe { get_window_id(raw) };
        check("SDL_GetWindowID", id != 0)?;
        Ok(id)
    }

    /// The window title, copied out of SDL.
    pub fn title(&self) -> Result<String> {
        let raw = self.as_raw()?;
        let get_window_title =
            unsafe { native_fn!(SDL_GetWindowTitle: abi::SDL_GetWindowTitle) }?;
        Ok(unsafe { marshal::from_c_str(get_window_title(raw)) }.unwrap_or_default())
    }

    /// Changes the window title.
    ///
    /// # Errors
    ///
    /// - [`Error::NulString`] if `title` contains a NUL byte.
    /// - [`Error::NativeCall`] with SDL's message if SDL rejects the change.
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        let raw = self.as_raw()?;
        let title = marshal::to_c_string(title)?;
        let set_window_title =
            unsafe { native_fn!(SDL_SetWindowTitle: abi::SDL_SetWindowTitle) }?;
        check("SDL_SetWindowTitle", unsafe {
            set_window_title(raw, marshal::c_str_ptr(&title))
        })
    }

    /// Destroys the window now, reporting a failure to bind the destructor.
    pub fn destroy(mut self) -> Result<()> {
        self.destroy_inner()
    }

    fn destroy_inner(&mut self) -> Result<()> {
        let Some(raw) = self.raw.take() else {
            return Ok(());
        };
        let destroy_window = unsafe { native_fn!(SDL_DestroyWindow: abi::SDL_DestroyWindow) }?;
        unsafe { destroy_window(raw) };
        Ok(())
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window").field("raw", &self.raw).finish()
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        if let Err(err) = self.destroy_inner() {
            tracing::error!("Failed to destroy SDL window: {:?}", err);
        }
    }
}
