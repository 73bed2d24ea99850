// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Identity of a client device.

use core::fmt;

/// Names a client device, such as a device-tree node (`ethernet@1c30000`) or
/// a board-table entry.
///
/// The kernel does not look inside the name; it is only compared for
/// equality by the mapping that resolves a device's resources.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DeviceId(&'static str);

impl DeviceId {
    pub const fn new(name: &'static str) -> DeviceId {
        DeviceId(name)
    }

    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
