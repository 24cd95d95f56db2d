// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Translating the boolean/null failure convention into [`Error::NativeCall`].
//!
//! Failing native calls return `false` or a null pointer and leave a message
//! in the library's last-error slot. Successful calls do not clear that slot,
//! so the message is only meaningful right after a failure. [`Library::check`]
//! reads it on the failure branch and nowhere else.
//!
//! The slot is owned by the native library. SDL keeps it per thread, so a
//! message read on the failing thread belongs to that thread's call. A
//! library with a single global slot offers no such guarantee when several
//! threads fail at once; this layer adds no locking of its own.

use std::ffi::{CStr, c_char};

use crate::{
    ConstPtr, Error, Library, MutPtr, Result, library::process_library, marshal,
    ptr::{Mutability, NonNullable, Nullable, Ptr},
};

/// The failure convention of a native return type.
pub trait Status {
    /// What a successful call produces.
    type Success;

    /// Returns the success value, or `None` if the value signals failure.
    fn into_success(self) -> Option<Self::Success>;
}

/// `true` on success.
impl Status for bool {
    type Success = ();

    fn into_success(self) -> Option<()> {
        self.then_some(())
    }
}

/// Non-null on success.
impl<T> Status for *mut T {
    type Success = MutPtr<T>;

    fn into_success(self) -> Option<MutPtr<T>> {
        MutPtr::new(self)
    }
}

/// Non-null on success.
impl<T> Status for *const T {
    type Success = ConstPtr<T>;

    fn into_success(self) -> Option<ConstPtr<T>> {
        ConstPtr::new(self)
    }
}

/// Non-null on success.
impl<T, M: Mutability> Status for Ptr<T, M, Nullable> {
    type Success = Ptr<T, M, NonNullable>;

    fn into_success(self) -> Option<Ptr<T, M, NonNullable>> {
        self.non_null()
    }
}

type GetErrorFn = unsafe extern "C" fn() -> *const c_char;

impl Library {
    /// Turns the return value of `function` into a [`Result`].
    ///
    /// On success the value is passed through untouched; returned pointers
    /// are neither dereferenced nor freed. On failure the last-error message
    /// is read immediately.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NativeCall`] when `ret` signals failure, or the
    /// resolution error of the error getter if it cannot be bound.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sdl3_sys::{abi, native_fn};
    ///
    /// # fn main() -> Result<(), sdl3_sys::Error> {
    /// let library = sdl3_sys::acquire()?;
    /// let sdl_init = unsafe { native_fn!(SDL_Init: abi::SDL_Init) }?;
    /// library.check("SDL_Init", unsafe { sdl_init(abi::SDL_INIT_VIDEO) })?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn check<R: Status>(&self, function: &'static str, ret: R) -> Result<R::Success> {
        match ret.into_success() {
            Some(success) => Ok(success),
            None => Err(self.native_failure(function)),
        }
    }

    /// Like [`Library::check`] for functions returning a string, null on failure.
    ///
    /// # Safety
    ///
    /// A non-null `ret` must point to a NUL-terminated string that stays
    /// valid for the duration of this call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NativeCall`] when `ret` is null.
    pub unsafe fn check_str(&self, function: &'static str, ret: *const c_char) -> Result<String> {
        let ptr = self.check(function, ret)?;
        // Safety: non-null, and NUL-terminated per the caller's contract.
        Ok(unsafe { CStr::from_ptr(ptr.as_ptr()) }
            .to_string_lossy()
            .into_owned())
    }

    /// Reads the native last-error message.
    ///
    /// Only meaningful right after a call that signalled failure. An unset
    /// slot reads as the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SymbolNotFound`] if the error getter is not exported.
    pub fn last_error(&self) -> Result<String> {
        // Safety: the error getter has the C signature `const char *(void)`.
        let get_error = unsafe { self.bind::<GetErrorFn>(&self.error_symbol)? };
        // Safety: the getter returns null or a NUL-terminated string owned by
        // the library, which is copied before any other native call.
        let message = unsafe { marshal::from_c_str(get_error()) };
        Ok(message.unwrap_or_default())
    }

    fn native_failure(&self, function: &'static str) -> Error {
        match self.last_error() {
            Ok(message) => {
                tracing::debug!("{} failed: {}", function, message);
                Error::NativeCall { function, message }
            }
            Err(error) => error,
        }
    }
}

/// [`Library::check`] against the process-wide library.
///
/// # Errors
///
/// Returns [`Error::NativeCall`] when `ret` signals failure.
pub fn check<R: Status>(function: &'static str, ret: R) -> Result<R::Success> {
    process_library()?.check(function, ret)
}
