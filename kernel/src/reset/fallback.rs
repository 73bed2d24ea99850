// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Reset control for images without a reset subsystem.
//!
//! Acquisition fails with `NOSUPPORT`, so a driver that cannot work without
//! its reset line notices at `get_*` time. Every control operation succeeds
//! without doing anything, so a driver that deasserts its resets on a best
//! effort basis initializes the same way it would with a real controller.

use crate::device::DeviceId;
use crate::reset::{ResetControl, ResetHandle, ResetHandleBulk};
use crate::ErrorCode;

/// The [`ResetControl`] implementation to hand to drivers when the board has
/// no reset controllers.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoResetSupport;

impl<'a> ResetControl<'a> for NoResetSupport {
    fn get_by_index(&self, _device: DeviceId, _index: usize) -> Result<ResetHandle<'a>, ErrorCode> {
        Err(ErrorCode::NOSUPPORT)
    }

    fn get_by_name(&self, _device: DeviceId, _name: &str) -> Result<ResetHandle<'a>, ErrorCode> {
        Err(ErrorCode::NOSUPPORT)
    }

    fn get_bulk(&self, _device: DeviceId) -> Result<ResetHandleBulk<'a>, ErrorCode> {
        Err(ErrorCode::NOSUPPORT)
    }

    fn request(&self, _handle: &ResetHandle<'a>) -> Result<(), ErrorCode> {
        Err(ErrorCode::NOSUPPORT)
    }

    fn free(&self, _handle: &mut ResetHandle<'a>) -> Result<(), ErrorCode> {
        Ok(())
    }

    fn assert(&self, _handle: &ResetHandle<'a>) -> Result<(), ErrorCode> {
        Ok(())
    }

    fn deassert(&self, _handle: &ResetHandle<'a>) -> Result<(), ErrorCode> {
        Ok(())
    }

    fn status(&self, _handle: &ResetHandle<'a>) -> Result<bool, ErrorCode> {
        Err(ErrorCode::NOSUPPORT)
    }

    fn assert_bulk(&self, _bulk: &ResetHandleBulk<'a>) -> Result<(), ErrorCode> {
        Ok(())
    }

    fn deassert_bulk(&self, _bulk: &ResetHandleBulk<'a>) -> Result<(), ErrorCode> {
        Ok(())
    }

    fn release_all(&self, _handles: &mut [ResetHandle<'a>]) -> Result<(), ErrorCode> {
        Ok(())
    }

    fn release_bulk(&self, _bulk: &mut ResetHandleBulk<'a>) -> Result<(), ErrorCode> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEV: DeviceId = DeviceId::new("ethernet@1c30000");

    #[test]
    fn acquisition_is_unsupported() {
        let resets: &dyn ResetControl = &NoResetSupport;
        assert_eq!(resets.get_by_index(DEV, 0).err(), Some(ErrorCode::NOSUPPORT));
        assert_eq!(
            resets.get_by_name(DEV, "phy-reset").err(),
            Some(ErrorCode::NOSUPPORT)
        );
        assert_eq!(resets.get_bulk(DEV).err(), Some(ErrorCode::NOSUPPORT));
        // Absence of the subsystem is not the same as absence of the signal.
        assert_eq!(
            resets.get_optional_by_index(DEV, 0).err(),
            Some(ErrorCode::NOSUPPORT)
        );
        assert_eq!(
            resets.get_optional_by_name(DEV, "phy-reset").err(),
            Some(ErrorCode::NOSUPPORT)
        );
    }

    #[test]
    fn control_operations_succeed() {
        let resets: &dyn ResetControl = &NoResetSupport;
        let mut handle = ResetHandle::unbound();
        assert_eq!(resets.assert(&handle), Ok(()));
        assert_eq!(resets.deassert(&handle), Ok(()));
        assert_eq!(resets.free(&mut handle), Ok(()));
        assert!(!handle.is_valid());

        let mut bulk = ResetHandleBulk::new();
        assert_eq!(resets.assert_bulk(&bulk), Ok(()));
        assert_eq!(resets.deassert_bulk(&bulk), Ok(()));
        assert_eq!(resets.release_bulk(&mut bulk), Ok(()));

        let mut handles = [ResetHandle::unbound(), ResetHandle::unbound()];
        assert_eq!(resets.release_all(&mut handles), Ok(()));
        assert_eq!(resets.release_all(&mut handles), Ok(()));
    }
}
