// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Board-provided table of reset signals.
//!
//! Boards without a device tree describe which reset signals each client
//! device uses with a static table. The entries of a device are its signals,
//! in table order: the first entry for a device is its index 0.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! let ccu = static_init!(CcuReset, CcuReset::new_a64());
//! let bindings = static_init!(
//!     [ResetBinding<'static>; 2],
//!     [
//!         ResetBinding::new(EMAC, Some("stmmaceth"), ccu, &[a64::RST_BUS_EMAC]),
//!         ResetBinding::new(MMC0, Some("ahb"), ccu, &[a64::RST_BUS_MMC0]),
//!     ]
//! );
//! let table = static_init!(ResetTable<'static>, ResetTable::new(bindings));
//! let resets = static_init!(ResetApi<'static>, ResetApi::new(table));
//! ```

use kernel::device::DeviceId;
use kernel::hil::reset::{ResetController, ResetMapping, ResetSpec};
use kernel::ErrorCode;

/// One reset signal of one client device.
pub struct ResetBinding<'a> {
    device: DeviceId,
    name: Option<&'static str>,
    controller: &'a dyn ResetController,
    args: &'a [u32],
}

impl<'a> ResetBinding<'a> {
    pub const fn new(
        device: DeviceId,
        name: Option<&'static str>,
        controller: &'a dyn ResetController,
        args: &'a [u32],
    ) -> ResetBinding<'a> {
        ResetBinding {
            device,
            name,
            controller,
            args,
        }
    }

    fn spec(&self) -> ResetSpec<'a> {
        ResetSpec {
            controller: self.controller,
            args: self.args,
        }
    }
}

pub struct ResetTable<'a> {
    bindings: &'a [ResetBinding<'a>],
}

impl<'a> ResetTable<'a> {
    pub const fn new(bindings: &'a [ResetBinding<'a>]) -> ResetTable<'a> {
        ResetTable { bindings }
    }

    fn signals(&self, device: DeviceId) -> impl Iterator<Item = &'a ResetBinding<'a>> {
        self.bindings
            .iter()
            .filter(move |binding| binding.device == device)
    }
}

impl<'a> ResetMapping<'a> for ResetTable<'a> {
    fn signal_count(&self, device: DeviceId) -> usize {
        self.signals(device).count()
    }

    fn resolve_index(&self, device: DeviceId, index: usize) -> Result<ResetSpec<'a>, ErrorCode> {
        self.signals(device)
            .nth(index)
            .map(ResetBinding::spec)
            .ok_or(ErrorCode::NODEVICE)
    }

    fn resolve_name(&self, device: DeviceId, name: &str) -> Result<ResetSpec<'a>, ErrorCode> {
        self.signals(device)
            .find(|binding| binding.name == Some(name))
            .map(ResetBinding::spec)
            .ok_or(ErrorCode::NODEVICE)
    }
}
