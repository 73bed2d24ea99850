// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Handles to acquired reset signals.

use alloc::vec::Vec;
use core::fmt;
use core::slice;

use crate::hil::reset::{ResetController, ResetId};
use crate::ErrorCode;

/// A claim on a single reset signal.
///
/// Clients provide storage for handles, but only the reset API binds and
/// unbinds them. A handle is created unbound, becomes bound through one of the
/// `get_*` calls of [`ResetControl`](super::ResetControl), and returns to
/// unbound when it is freed.
///
/// Handles are neither `Clone` nor `Copy`, so a claim exists in exactly one
/// place.
pub struct ResetHandle<'a> {
    owner: Option<&'a dyn ResetController>,
    id: ResetId,
}

impl<'a> ResetHandle<'a> {
    /// An unbound handle, for client storage that is filled in later.
    pub const fn unbound() -> ResetHandle<'a> {
        ResetHandle {
            owner: None,
            id: ResetId::new(0),
        }
    }

    pub(crate) fn bound(owner: &'a dyn ResetController, id: ResetId) -> ResetHandle<'a> {
        ResetHandle {
            owner: Some(owner),
            id,
        }
    }

    /// Whether this handle refers to a signal.
    pub fn is_valid(&self) -> bool {
        self.owner.is_some()
    }

    /// The provider-local id of the signal, if bound.
    pub fn id(&self) -> Option<ResetId> {
        self.owner.map(|_| self.id)
    }

    /// Whether this handle is backed by `controller`.
    pub fn is_owned_by(&self, controller: &dyn ResetController) -> bool {
        self.owner
            .is_some_and(|owner| core::ptr::addr_eq(owner, controller))
    }

    pub(crate) fn binding(&self) -> Option<(&'a dyn ResetController, ResetId)> {
        self.owner.map(|owner| (owner, self.id))
    }

    /// Drop the binding and return what it was.
    pub(crate) fn unbind(&mut self) -> Option<(&'a dyn ResetController, ResetId)> {
        let binding = self.binding();
        self.owner = None;
        self.id = ResetId::new(0);
        binding
    }
}

impl Default for ResetHandle<'_> {
    fn default() -> Self {
        ResetHandle::unbound()
    }
}

impl fmt::Debug for ResetHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.owner {
            Some(_) => write!(f, "ResetHandle({})", self.id.value()),
            None => write!(f, "ResetHandle(unbound)"),
        }
    }
}

/// All reset signals of one client device, in the order the mapping declares
/// them.
///
/// The bulk owns its handles. Dropping it releases the storage, but not the
/// signals: call [`release_bulk`](super::ResetControl::release_bulk) first if
/// they should be put back into reset and freed.
#[derive(Debug, Default)]
pub struct ResetHandleBulk<'a> {
    resets: Vec<ResetHandle<'a>>,
}

impl<'a> ResetHandleBulk<'a> {
    /// An empty bulk.
    pub const fn new() -> ResetHandleBulk<'a> {
        ResetHandleBulk { resets: Vec::new() }
    }

    /// An empty bulk with room for exactly `count` handles, or `NOMEM`.
    pub(crate) fn with_capacity(count: usize) -> Result<ResetHandleBulk<'a>, ErrorCode> {
        let mut resets = Vec::new();
        resets
            .try_reserve_exact(count)
            .map_err(|_| ErrorCode::NOMEM)?;
        Ok(ResetHandleBulk { resets })
    }

    pub(crate) fn push(&mut self, handle: ResetHandle<'a>) {
        self.resets.push(handle);
    }

    /// Number of handles in the bulk.
    pub fn count(&self) -> usize {
        self.resets.len()
    }

    pub fn get(&self, index: usize) -> Option<&ResetHandle<'a>> {
        self.resets.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, ResetHandle<'a>> {
        self.resets.iter()
    }

    pub(crate) fn handles_mut(&mut self) -> &mut [ResetHandle<'a>] {
        &mut self.resets
    }
}

impl<'b, 'a> IntoIterator for &'b ResetHandleBulk<'a> {
    type Item = &'b ResetHandle<'a>;
    type IntoIter = slice::Iter<'b, ResetHandle<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.resets.iter()
    }
}
