// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Binding exports to statically declared call signatures.
//!
//! # Safety model
//!
//! A native export table carries names and addresses, nothing else. Binding
//! an export reinterprets its address as whatever function-pointer type the
//! call site declares, exactly like casting a function pointer in C. If the
//! declared signature does not match the native definition (argument types,
//! return type, struct layouts, calling convention), calling the result is
//! undefined behaviour. No runtime check is possible, and none is attempted:
//! declarations are expected to be generated from the native headers.
//!
//! The only property checked here is that the declared type is
//! pointer-sized, and that check happens at compile time.

use std::{any::type_name, ffi::c_void, marker::PhantomData, mem, ops::Deref, sync::OnceLock};

use crate::{Library, Result, library::process_library};

/// A callable bound from a [`Library`], borrowing it.
///
/// Dereferences to the declared function-pointer type, so it is called like
/// the function itself. While a `Bound` is alive its library cannot be closed:
///
/// ```compile_fail,E0505
/// use sdl3_sys::{Library, abi};
///
/// # fn main() -> Result<(), sdl3_sys::Error> {
/// let library = Library::open("libSDL3.so")?;
/// let get_ticks = unsafe { library.bind::<abi::SDL_GetTicks>("SDL_GetTicks")? };
/// library.close()?;
/// let _ = unsafe { get_ticks() };
/// # Ok(())
/// # }
/// ```
///
/// Dereferencing copies the bare function pointer out, and that copy does not
/// borrow the library. Only a `Bound<'static, F>` may be turned into a plain
/// `F` with [`Bound::get`].
pub struct Bound<'lib, F> {
    function: F,
    _library: PhantomData<&'lib Library>,
}

impl<F: Copy> Clone for Bound<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Copy> Copy for Bound<'_, F> {}

impl<F> Deref for Bound<'_, F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.function
    }
}

impl<F: Copy> Bound<'static, F> {
    /// Returns the bare function pointer.
    ///
    /// Only available for libraries that are never unloaded.
    pub fn get(self) -> F {
        self.function
    }
}

impl Library {
    /// Binds the export `symbol` under the caller-declared signature `F`.
    ///
    /// The address is resolved through the library's [`crate::SymbolCache`],
    /// so only the first bind of a name reaches the OS loader.
    ///
    /// # Safety
    ///
    /// `F` must be an `unsafe extern "C" fn` type matching the native
    /// definition of `symbol` exactly. Nothing verifies this; a mismatch is
    /// undefined behaviour at the first call.
    ///
    /// A function pointer copied out of the returned [`Bound`] must not be
    /// called after [`Library::close`]; the borrow only covers the `Bound`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SymbolNotFound`] if the library has no such export.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::ffi::c_int;
    ///
    /// # fn main() -> Result<(), sdl3_sys::Error> {
    /// let library = sdl3_sys::acquire()?;
    /// let get_version = unsafe { library.bind::<unsafe extern "C" fn() -> c_int>("SDL_GetVersion")? };
    /// println!("SDL {}", unsafe { get_version() });
    /// # Ok(())
    /// # }
    /// ```
    pub unsafe fn bind<F: Copy>(&self, symbol: &str) -> Result<Bound<'_, F>> {
        const {
            assert!(
                mem::size_of::<F>() == mem::size_of::<*mut c_void>(),
                "a bound signature must be a function pointer"
            )
        };
        let address =
            self.symbols
                .resolve(self.exports.as_ref(), &self.name, symbol, type_name::<F>())?;
        // Safety: `F` is pointer-sized (checked above); that it is the right
        // function type is the caller's obligation.
        let function = unsafe { mem::transmute_copy::<*mut c_void, F>(&address.as_ptr()) };
        Ok(Bound {
            function,
            _library: PhantomData,
        })
    }
}

/// A per-call-site slot caching one export of the process-wide library.
///
/// After the first successful [`CachedFn::get`], a call costs one atomic load.
/// Misses are not stored here; the library's symbol cache already remembers them.
///
/// Usually declared through [`native_fn!`](crate::native_fn).
pub struct CachedFn<F> {
    symbol: &'static str,
    function: OnceLock<F>,
}

impl<F: Copy> CachedFn<F> {
    /// Creates an empty slot for `symbol`.
    pub const fn new(symbol: &'static str) -> Self {
        Self {
            symbol,
            function: OnceLock::new(),
        }
    }

    /// The export this slot binds.
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Returns the bound function, loading the library and resolving the
    /// export on first use.
    ///
    /// # Safety
    ///
    /// Same contract as [`Library::bind`]: `F` must match the native
    /// definition of the export exactly.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::LibraryLoad`] if the process-wide library cannot
    /// be loaded, or [`crate::Error::SymbolNotFound`] if it lacks the export.
    /// After a failed load no new load is attempted here; the earlier failure
    /// is returned until [`crate::acquire`] succeeds.
    pub unsafe fn get(&self) -> Result<F> {
        if let Some(function) = self.function.get() {
            return Ok(*function);
        }
        let bound = unsafe { process_library()?.bind::<F>(self.symbol)? };
        Ok(*self.function.get_or_init(|| bound.get()))
    }
}

/// Binds an export of the process-wide library through a call-site `static`.
///
/// `native_fn!(Name: Signature)` resolves the export `Name` once and returns
/// `Result<Signature>`. It must be used inside `unsafe`, because the
/// signature is asserted by the caller, not verified.
///
/// # Examples
///
/// ```no_run
/// use sdl3_sys::{abi, native_fn};
///
/// # fn main() -> Result<(), sdl3_sys::Error> {
/// let get_ticks = unsafe { native_fn!(SDL_GetTicks: abi::SDL_GetTicks) }?;
/// let ms = unsafe { get_ticks() };
/// # let _ = ms;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! native_fn {
    ($symbol:ident : $signature:ty) => {{
        static FUNCTION: $crate::CachedFn<$signature> = $crate::CachedFn::new(stringify!($symbol));
        FUNCTION.get()
    }};
}
