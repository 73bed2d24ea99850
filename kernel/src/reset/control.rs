// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! The reset-control consumer interface and its provider-backed
//! implementation.

use crate::config::CONFIG;
use crate::device::DeviceId;
use crate::hil::reset::{ResetMapping, ResetSpec};
use crate::reset::{ResetHandle, ResetHandleBulk};
use crate::ErrorCode;

/// Operations drivers use to acquire and drive reset signals.
///
/// There are two implementations: [`ResetApi`], which resolves signals
/// through a board mapping and forwards to the reset controllers, and
/// [`NoResetSupport`](super::NoResetSupport) for images without a reset
/// subsystem. Drivers are written against this trait and behave the same way
/// with either.
///
/// Control operations on an unbound handle do nothing and succeed, so a
/// handle obtained with one of the `get_optional_*` calls can be driven
/// unconditionally. Bulk operations are defined element by element on top of
/// the single-handle operations.
pub trait ResetControl<'a> {
    /// Acquire the `index`-th reset signal of `device`.
    ///
    /// Returns `NODEVICE` if the device declares fewer signals, and passes
    /// through any error from the reset controller.
    fn get_by_index(&self, device: DeviceId, index: usize) -> Result<ResetHandle<'a>, ErrorCode>;

    /// Acquire the reset signal of `device` called `name`.
    fn get_by_name(&self, device: DeviceId, name: &str) -> Result<ResetHandle<'a>, ErrorCode>;

    /// Like `get_by_index`, but a signal the device does not declare yields
    /// an unbound handle instead of `NODEVICE`.
    fn get_optional_by_index(
        &self,
        device: DeviceId,
        index: usize,
    ) -> Result<ResetHandle<'a>, ErrorCode> {
        match self.get_by_index(device, index) {
            Err(ErrorCode::NODEVICE) => Ok(ResetHandle::unbound()),
            result => result,
        }
    }

    /// Like `get_by_name`, but a signal the device does not declare yields an
    /// unbound handle instead of `NODEVICE`.
    fn get_optional_by_name(
        &self,
        device: DeviceId,
        name: &str,
    ) -> Result<ResetHandle<'a>, ErrorCode> {
        match self.get_by_name(device, name) {
            Err(ErrorCode::NODEVICE) => Ok(ResetHandle::unbound()),
            result => result,
        }
    }

    /// Acquire every reset signal of `device`, in declaration order.
    ///
    /// Either all signals are acquired or none are: on failure, the signals
    /// acquired so far by this call are released before the error is
    /// returned.
    fn get_bulk(&self, device: DeviceId) -> Result<ResetHandleBulk<'a>, ErrorCode>;

    /// Claim a resolved signal at its controller. The `get_*` calls already do
    /// this; calling it again is only safe if the controller allows it.
    fn request(&self, handle: &ResetHandle<'a>) -> Result<(), ErrorCode>;

    /// Release a signal and unbind the handle. Freeing an unbound handle does
    /// nothing.
    fn free(&self, handle: &mut ResetHandle<'a>) -> Result<(), ErrorCode>;

    /// Put the hardware behind a signal into reset.
    fn assert(&self, handle: &ResetHandle<'a>) -> Result<(), ErrorCode>;

    /// Take the hardware behind a signal out of reset.
    fn deassert(&self, handle: &ResetHandle<'a>) -> Result<(), ErrorCode>;

    /// Whether a signal is currently asserted.
    fn status(&self, handle: &ResetHandle<'a>) -> Result<bool, ErrorCode>;

    /// Assert every signal of a bulk, in order, stopping at the first error.
    fn assert_bulk(&self, bulk: &ResetHandleBulk<'a>) -> Result<(), ErrorCode> {
        for handle in bulk.iter().filter(|handle| handle.is_valid()) {
            self.assert(handle)?;
        }
        Ok(())
    }

    /// Deassert every signal of a bulk, in order, stopping at the first error.
    ///
    /// Signals deasserted before the failing one stay deasserted.
    fn deassert_bulk(&self, bulk: &ResetHandleBulk<'a>) -> Result<(), ErrorCode> {
        for handle in bulk.iter().filter(|handle| handle.is_valid()) {
            self.deassert(handle)?;
        }
        Ok(())
    }

    /// Assert and free every bound handle of `handles`. Unbound handles are
    /// skipped, so releasing the same array twice is harmless.
    ///
    /// Every bound handle is freed even if asserting it or an earlier handle
    /// fails. The first error is returned.
    fn release_all(&self, handles: &mut [ResetHandle<'a>]) -> Result<(), ErrorCode> {
        let mut result = Ok(());
        for handle in handles.iter_mut().filter(|handle| handle.is_valid()) {
            let asserted = self.assert(handle);
            let freed = self.free(handle);
            if result.is_ok() {
                result = asserted.and(freed);
            }
        }
        result
    }

    /// `release_all` over the handles of a bulk.
    fn release_bulk(&self, bulk: &mut ResetHandleBulk<'a>) -> Result<(), ErrorCode> {
        self.release_all(bulk.handles_mut())
    }
}

/// Reset control backed by real reset controllers.
///
/// Signals are resolved through a board-provided [`ResetMapping`]; the
/// controller named by the mapping translates the entry into a signal id and
/// then owns every operation on the resulting handle.
pub struct ResetApi<'a> {
    mapping: &'a dyn ResetMapping<'a>,
}

impl<'a> ResetApi<'a> {
    pub const fn new(mapping: &'a dyn ResetMapping<'a>) -> ResetApi<'a> {
        ResetApi { mapping }
    }

    fn acquire(&self, spec: ResetSpec<'a>) -> Result<ResetHandle<'a>, ErrorCode> {
        let id = spec.controller.xlate(spec.args)?;
        let handle = ResetHandle::bound(spec.controller, id);
        self.request(&handle)?;
        Ok(handle)
    }

    fn set_asserted(&self, handle: &ResetHandle<'a>, asserted: bool) -> Result<(), ErrorCode> {
        let Some((controller, id)) = handle.binding() else {
            return Ok(());
        };
        let result = controller.set_asserted(id, asserted);
        if CONFIG.trace_resets {
            debug!("reset: set {:?} asserted={} -> {:?}", handle, asserted, result);
        }
        result
    }
}

impl<'a> ResetControl<'a> for ResetApi<'a> {
    fn get_by_index(&self, device: DeviceId, index: usize) -> Result<ResetHandle<'a>, ErrorCode> {
        let result = self
            .mapping
            .resolve_index(device, index)
            .and_then(|spec| self.acquire(spec));
        if CONFIG.trace_resets {
            debug!("reset: get {:?}[{}] -> {:?}", device, index, result);
        }
        result
    }

    fn get_by_name(&self, device: DeviceId, name: &str) -> Result<ResetHandle<'a>, ErrorCode> {
        let result = self
            .mapping
            .resolve_name(device, name)
            .and_then(|spec| self.acquire(spec));
        if CONFIG.trace_resets {
            debug!("reset: get {:?}[\"{}\"] -> {:?}", device, name, result);
        }
        result
    }

    fn get_bulk(&self, device: DeviceId) -> Result<ResetHandleBulk<'a>, ErrorCode> {
        let count = self.mapping.signal_count(device);
        let mut bulk = ResetHandleBulk::with_capacity(count)?;

        for index in 0..count {
            match self.get_by_index(device, index) {
                Ok(handle) => bulk.push(handle),
                Err(e) => {
                    // Do not leave the signals acquired so far claimed.
                    let released = self.release_bulk(&mut bulk);
                    if CONFIG.trace_resets && released.is_err() {
                        debug!(
                            "reset: bulk {:?} failed at {} ({:?}), release -> {:?}",
                            device, index, e, released
                        );
                    }
                    return Err(e);
                }
            }
        }
        Ok(bulk)
    }

    fn request(&self, handle: &ResetHandle<'a>) -> Result<(), ErrorCode> {
        let (controller, id) = handle.binding().ok_or(ErrorCode::INVAL)?;
        controller.request(id)
    }

    fn free(&self, handle: &mut ResetHandle<'a>) -> Result<(), ErrorCode> {
        match handle.unbind() {
            Some((controller, id)) => {
                let result = controller.free(id);
                if CONFIG.trace_resets {
                    debug!("reset: free {} -> {:?}", id.value(), result);
                }
                result
            }
            None => Ok(()),
        }
    }

    fn assert(&self, handle: &ResetHandle<'a>) -> Result<(), ErrorCode> {
        self.set_asserted(handle, true)
    }

    fn deassert(&self, handle: &ResetHandle<'a>) -> Result<(), ErrorCode> {
        self.set_asserted(handle, false)
    }

    fn status(&self, handle: &ResetHandle<'a>) -> Result<bool, ErrorCode> {
        let (controller, id) = handle.binding().ok_or(ErrorCode::INVAL)?;
        controller.status(id)
    }
}
