// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Tagged raw pointers for native signatures.
//!
//! [`Ptr`] carries two independent type-level tags: whether the pointee may be
//! written through it ([`Mut`] / [`Const`]) and whether null is a valid,
//! checkable state ([`Nullable`] / [`NonNullable`]). The tags exist only in the
//! type; the runtime representation is a bare address, so a `Ptr` can appear
//! directly in an `extern "C"` signature.
//!
//! Ownership is never implied by a `Ptr`. Who frees the pointee, and when, is
//! part of each native function's contract.
//!
//! Writing through a read-only pointer does not compile:
//!
//! ```compile_fail
//! use sdl3_sys::ConstPtr;
//!
//! let value = 7u32;
//! let ptr = ConstPtr::from_ref(&value);
//! let _ = ptr.as_mut_ptr();
//! ```
//!
//! Neither does asking a non-nullable pointer whether it is null:
//!
//! ```compile_fail
//! use sdl3_sys::ConstPtr;
//!
//! let value = 7u32;
//! let ptr = ConstPtr::from_ref(&value);
//! let _ = ptr.is_null();
//! ```

use std::{fmt, marker::PhantomData, ptr::NonNull};

mod sealed {
    pub trait Sealed {}
}

/// Mutability tag of a [`Ptr`].
pub trait Mutability: sealed::Sealed {}

/// Nullability tag of a [`Ptr`].
pub trait Nullability: sealed::Sealed {}

/// The pointee may be written through this pointer.
#[derive(Debug)]
pub enum Mut {}

/// The pointee must only be read through this pointer.
#[derive(Debug)]
pub enum Const {}

/// Null is a valid value and can be checked for.
#[derive(Debug)]
pub enum Nullable {}

/// Null is a contract violation and cannot be observed.
#[derive(Debug)]
pub enum NonNullable {}

impl sealed::Sealed for Mut {}
impl sealed::Sealed for Const {}
impl sealed::Sealed for Nullable {}
impl sealed::Sealed for NonNullable {}
impl Mutability for Mut {}
impl Mutability for Const {}
impl Nullability for Nullable {}
impl Nullability for NonNullable {}

/// A raw native address tagged with mutability `M` and nullability `N`.
#[repr(transparent)]
pub struct Ptr<T, M: Mutability = Const, N: Nullability = Nullable> {
    raw: *mut T,
    _tags: PhantomData<(fn() -> M, fn() -> N)>,
}

/// Read-only, never null.
pub type ConstPtr<T> = Ptr<T, Const, NonNullable>;
/// Writable, never null.
pub type MutPtr<T> = Ptr<T, Mut, NonNullable>;
/// Read-only, may be null.
pub type OptConstPtr<T> = Ptr<T, Const, Nullable>;
/// Writable, may be null.
pub type OptMutPtr<T> = Ptr<T, Mut, Nullable>;

impl<T, M: Mutability, N: Nullability> Ptr<T, M, N> {
    const fn from_raw(raw: *mut T) -> Self {
        Self {
            raw,
            _tags: PhantomData,
        }
    }

    /// Returns the address for reading.
    pub const fn as_ptr(self) -> *const T {
        self.raw
    }

    /// Reinterprets the pointee type, keeping both tags.
    pub const fn cast<U>(self) -> Ptr<U, M, N> {
        Ptr::from_raw(self.raw.cast())
    }

    /// Drops write permission. Always allowed.
    pub const fn as_const(self) -> Ptr<T, Const, N> {
        Ptr::from_raw(self.raw)
    }
}

impl<T, N: Nullability> Ptr<T, Mut, N> {
    /// Returns the address for writing.
    pub const fn as_mut_ptr(self) -> *mut T {
        self.raw
    }
}

impl<T> Ptr<T, Const, Nullable> {
    /// Wraps a read-only address that may be null.
    pub const fn new(raw: *const T) -> Self {
        Self::from_raw(raw.cast_mut())
    }
}

impl<T> Ptr<T, Mut, Nullable> {
    /// Wraps a writable address that may be null.
    pub const fn new(raw: *mut T) -> Self {
        Self::from_raw(raw)
    }
}

impl<T, M: Mutability> Ptr<T, M, Nullable> {
    /// The null pointer.
    pub const fn null() -> Self {
        Self::from_raw(std::ptr::null_mut())
    }

    /// Returns `true` if the address is null.
    pub fn is_null(self) -> bool {
        self.raw.is_null()
    }

    /// Checks for null once, producing a pointer that can no longer be null.
    pub fn non_null(self) -> Option<Ptr<T, M, NonNullable>> {
        (!self.raw.is_null()).then(|| Ptr::from_raw(self.raw))
    }
}

impl<T> Ptr<T, Const, NonNullable> {
    /// Wraps a read-only address, or returns `None` if it is null.
    pub fn new(raw: *const T) -> Option<Self> {
        (!raw.is_null()).then(|| Self::from_raw(raw.cast_mut()))
    }

    /// Wraps a read-only address without checking it.
    ///
    /// # Safety
    ///
    /// `raw` must not be null.
    pub const unsafe fn new_unchecked(raw: *const T) -> Self {
        Self::from_raw(raw.cast_mut())
    }

    /// Borrows a Rust value as a read-only native pointer.
    pub fn from_ref(value: &T) -> Self {
        Self::from_raw((value as *const T).cast_mut())
    }
}

impl<T> Ptr<T, Mut, NonNullable> {
    /// Wraps a writable address, or returns `None` if it is null.
    pub fn new(raw: *mut T) -> Option<Self> {
        (!raw.is_null()).then(|| Self::from_raw(raw))
    }

    /// Wraps a writable address without checking it.
    ///
    /// # Safety
    ///
    /// `raw` must not be null.
    pub const unsafe fn new_unchecked(raw: *mut T) -> Self {
        Self::from_raw(raw)
    }

    /// Borrows a Rust value as a writable native pointer.
    pub fn from_mut(value: &mut T) -> Self {
        Self::from_raw(value as *mut T)
    }

    /// Dereferences for writing.
    ///
    /// # Safety
    ///
    /// The pointee must be a valid, initialized `T` that nothing else accesses
    /// for `'a`.
    pub unsafe fn as_mut<'a>(self) -> &'a mut T {
        unsafe { &mut *self.raw }
    }
}

impl<T, M: Mutability> Ptr<T, M, NonNullable> {
    /// Returns the address as a [`NonNull`].
    pub fn as_non_null(self) -> NonNull<T> {
        // Safety: constructors of non-nullable pointers reject null.
        unsafe { NonNull::new_unchecked(self.raw) }
    }

    /// Dereferences for reading.
    ///
    /// # Safety
    ///
    /// The pointee must be a valid, initialized `T` that is not written for `'a`.
    pub unsafe fn as_ref<'a>(self) -> &'a T {
        unsafe { &*self.raw }
    }
}

impl<T, M: Mutability> From<Ptr<T, M, NonNullable>> for Ptr<T, M, Nullable> {
    fn from(ptr: Ptr<T, M, NonNullable>) -> Self {
        Ptr::from_raw(ptr.raw)
    }
}

impl<T, M: Mutability, N: Nullability> Clone for Ptr<T, M, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, M: Mutability, N: Nullability> Copy for Ptr<T, M, N> {}

impl<T, M: Mutability, N: Nullability> PartialEq for Ptr<T, M, N> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.raw, other.raw)
    }
}

impl<T, M: Mutability, N: Nullability> Eq for Ptr<T, M, N> {}

impl<T, M: Mutability, N: Nullability> fmt::Debug for Ptr<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ptr({:p})", self.raw)
    }
}
