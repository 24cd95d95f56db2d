// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! # sdl3-sys: dynamic dispatch core for the SDL3 C ABI
//!
//! This crate loads the SDL3 shared library at runtime and lets call sites
//! bind its exports under statically declared signatures. Every generated
//! wrapper in the [`sdl3`] crate is a thin call site of this core.
//!
//! ## Overview
//!
//! - [`Library`]: an opened shared object plus the cache of its resolved
//!   exports. [`acquire`] returns the process-wide instance, loading it once.
//!   A failed load is remembered: bound functions keep reporting it, and only
//!   an explicit [`acquire`] tries again.
//! - [`SymbolCache`]: name → address map; the OS loader is asked once per name.
//! - [`Library::bind`] / [`CachedFn`] / [`native_fn!`]: reinterpret a cached
//!   address as a declared `unsafe extern "C" fn` type.
//! - [`Library::check`] / [`check`]: turn a `false`/null return into
//!   [`Error::NativeCall`] carrying the library's last-error message.
//! - [`Ptr`]: raw pointers tagged with mutability and nullability, usable
//!   directly in `extern "C"` signatures.
//!
//! ## Flow of a call
//!
//! ```text
//! call site ──► native_fn!(Name: Sig) ──► CachedFn ──► LibraryCell ──► Library
//!     │                                                      │
//!     │                                           SymbolCache::resolve ──► OS loader
//!     ▼
//! native call ──► check(name, ret) ──► Ok(value) | Err(Error::NativeCall { .. })
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use sdl3_sys::{abi, check, native_fn};
//!
//! # fn main() -> Result<(), sdl3_sys::Error> {
//! let sdl_init = unsafe { native_fn!(SDL_Init: abi::SDL_Init) }?;
//! check("SDL_Init", unsafe { sdl_init(abi::SDL_INIT_VIDEO) })?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Safety
//!
//! The native export table has no type information. A call site that binds
//! an export under the wrong signature, or writes through a pointer declared
//! [`Const`], has undefined behaviour that this crate cannot detect. That is
//! why binding is `unsafe`; the declarations in [`abi`] are expected to be
//! generated from the SDL headers.
//!
//! ## Thread Safety
//!
//! - [`Library`] is `Send + Sync`; symbol lookups may run on any thread.
//! - The one-time library load and cache insertion are the only internal
//!   synchronization points.
//! - The native last-error slot belongs to SDL (per thread in SDL3). Read it
//!   only through [`Library::check`], on the thread that made the failing call.
//!
//! [`sdl3`]: https://docs.rs/sdl3

pub mod abi;
mod bind;
mod cache;
pub mod config;
mod error;
mod library;
mod loader;
pub mod marshal;
mod ptr;
mod status;

#[cfg(test)]
mod testing;

pub use bind::{Bound, CachedFn};
pub use cache::{SymbolCache, SymbolEntry};
pub use error::{Error, LoaderError, Result};
pub use library::{Library, LibraryCell, acquire, install};
pub use loader::{ExportTable, SharedObject};
pub use ptr::{
    Const, ConstPtr, Mut, MutPtr, Mutability, NonNullable, Nullability, Nullable, OptConstPtr,
    OptMutPtr, Ptr,
};
pub use status::{Status, check};
