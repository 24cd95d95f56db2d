// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Per-library cache of resolved exports.

use std::{
    collections::HashMap,
    ffi::c_void,
    ptr::NonNull,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::{Error, ExportTable, Result};

/// One resolved export.
#[derive(Debug, Clone)]
pub struct SymbolEntry {
    name: String,
    address: NonNull<c_void>,
    signature: &'static str,
}

// Safety: the entry only records an address inside a loaded library. It is
// never dereferenced by the cache.
unsafe impl Send for SymbolEntry {}
unsafe impl Sync for SymbolEntry {}

impl SymbolEntry {
    /// The export name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved address.
    pub fn address(&self) -> NonNull<c_void> {
        self.address
    }

    /// Type name of the signature the export was first resolved under.
    pub fn signature(&self) -> &'static str {
        self.signature
    }
}

#[derive(Debug)]
enum Slot {
    Resolved(SymbolEntry),
    Missing(String),
}

impl Slot {
    fn to_result(&self, symbol: &str, library: &str) -> Result<NonNull<c_void>> {
        match self {
            Slot::Resolved(entry) => Ok(entry.address),
            Slot::Missing(reason) => Err(Error::SymbolNotFound {
                symbol: symbol.to_string(),
                library: library.to_string(),
                reason: reason.clone(),
            }),
        }
    }
}

/// Map from export name to resolved address.
///
/// Entries are append-only: once a name has an answer, found or missing, that
/// answer is returned for the rest of the cache's life.
#[derive(Debug, Default)]
pub struct SymbolCache {
    slots: RwLock<HashMap<String, Slot>>,
}

impl SymbolCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the address of `symbol`, asking `exports` only on the first request.
    ///
    /// Racing first requests may each query `exports`, but only the first
    /// stored answer is kept and every racer returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SymbolNotFound`] if `exports` has no such symbol. The
    /// miss is cached and reported identically on every later request.
    pub fn resolve(
        &self,
        exports: &dyn ExportTable,
        library: &str,
        symbol: &str,
        signature: &'static str,
    ) -> Result<NonNull<c_void>> {
        if let Some(slot) = self.read().get(symbol) {
            return slot.to_result(symbol, library);
        }

        let looked_up = exports.lookup(symbol);

        let mut slots = self.write();
        let slot = slots
            .entry(symbol.to_string())
            .or_insert_with(|| match looked_up {
                Ok(address) => {
                    tracing::debug!("Resolved \"{}\" in \"{}\" at {:p}", symbol, library, address);
                    Slot::Resolved(SymbolEntry {
                        name: symbol.to_string(),
                        address,
                        signature,
                    })
                }
                Err(reason) => {
                    tracing::warn!("Symbol \"{}\" not found in \"{}\": {}", symbol, library, reason);
                    Slot::Missing(reason.to_string())
                }
            });
        slot.to_result(symbol, library)
    }

    /// Returns the entry for `symbol` if it has been resolved.
    pub fn get(&self, symbol: &str) -> Option<SymbolEntry> {
        match self.read().get(symbol) {
            Some(Slot::Resolved(entry)) => Some(entry.clone()),
            _ => None,
        }
    }

    /// Number of names with a cached answer, including misses.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if nothing has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // The map is append-only, so a writer that panicked cannot leave it
    // half-updated; poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Slot>> {
        self.slots.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Slot>> {
        self.slots.write().unwrap_or_else(PoisonError::into_inner)
    }
}
