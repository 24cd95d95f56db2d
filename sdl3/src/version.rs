// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Version of the loaded library (`SDL_version.h`).

use std::fmt;

use sdl3_sys::{abi, marshal, native_fn};

use crate::Result;

/// A decoded `SDL_VERSIONNUM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// Incremented on ABI breaks.
    pub major: i32,
    /// Incremented on new API; even numbers are releases.
    pub minor: i32,
    /// Incremented on bug fixes.
    pub micro: i32,
}

impl Version {
    /// Decodes `major * 1000000 + minor * 1000 + micro`.
    pub const fn from_number(number: i32) -> Self {
        Self {
            major: number / 1_000_000,
            minor: (number / 1_000) % 1_000,
            micro: number % 1_000,
        }
    }

    /// Encodes back into `SDL_VERSIONNUM` form.
    pub const fn number(self) -> i32 {
        abi::sdl_versionnum(self.major, self.minor, self.micro)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// Returns the version of the loaded library, which may differ from the
/// headers these bindings were generated from.
pub fn get_version() -> Result<Version> {
    let get_version = unsafe { native_fn!(SDL_GetVersion: abi::SDL_GetVersion) }?;
    Ok(Version::from_number(unsafe { get_version() }))
}

/// Returns the source revision the library was built from, possibly empty.
pub fn get_revision() -> Result<String> {
    let get_revision = unsafe { native_fn!(SDL_GetRevision: abi::SDL_GetRevision) }?;
    Ok(unsafe { marshal::from_c_str(get_revision()) }.unwrap_or_default())
}
