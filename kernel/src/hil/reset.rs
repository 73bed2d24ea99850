// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Interfaces for reset controllers and for the board-specific mapping of
//! client devices to reset signals.
//!
//! A reset controller (provider) owns one or more reset signals, each named by
//! a [`ResetId`] that only the controller interprets. Client drivers never use
//! these traits directly; they go through
//! [`ResetControl`](crate::reset::ResetControl), which resolves a device's
//! signals through a [`ResetMapping`] and then talks to the controller that
//! the mapping returned.
//!
//! ```text
//!   driver ──► ResetControl ──► ResetMapping ──► ResetSpec { controller, args }
//!                    │                                  │
//!                    └────────────► ResetController ◄───┘
//! ```

use crate::device::DeviceId;
use crate::ErrorCode;

/// A reset signal identifier, meaningful only to the controller that issued
/// it.
///
/// Ids from different controllers must never be compared with each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetId(usize);

impl ResetId {
    pub const fn new(raw: usize) -> ResetId {
        ResetId(raw)
    }

    /// The raw value, for use by the controller that issued this id.
    pub const fn value(&self) -> usize {
        self.0
    }
}

/// A reset controller.
///
/// Only `set_asserted` is mandatory. Controllers that do not distinguish
/// between resolving a signal and claiming it can rely on the default
/// `request` and `free`.
pub trait ResetController {
    /// Translate the argument cells of a mapping entry into a signal id.
    ///
    /// The default expects exactly one cell holding the id.
    fn xlate(&self, args: &[u32]) -> Result<ResetId, ErrorCode> {
        match args {
            [id] => Ok(ResetId::new(*id as usize)),
            _ => Err(ErrorCode::INVAL),
        }
    }

    /// Claim a signal. Return `INVAL` if `id` does not name a signal of this
    /// controller.
    fn request(&self, _id: ResetId) -> Result<(), ErrorCode> {
        Ok(())
    }

    /// Release a signal previously claimed with `request`.
    fn free(&self, _id: ResetId) -> Result<(), ErrorCode> {
        Ok(())
    }

    /// Drive a signal into (`true`) or out of (`false`) reset.
    ///
    /// Any wait for the reset to complete in hardware happens here, before
    /// returning.
    fn set_asserted(&self, id: ResetId, asserted: bool) -> Result<(), ErrorCode>;

    /// Whether a signal is currently asserted.
    fn status(&self, _id: ResetId) -> Result<bool, ErrorCode> {
        Err(ErrorCode::NOSUPPORT)
    }
}

/// A resolved mapping entry: the controller that implements a signal and the
/// arguments to hand to its `xlate`.
#[derive(Clone, Copy)]
pub struct ResetSpec<'a> {
    pub controller: &'a dyn ResetController,
    pub args: &'a [u32],
}

/// Resolves the reset signals declared for a client device.
///
/// Signals of a device are enumerated in a fixed order (the device-tree
/// property order, or the order of a board table). Index `i` always refers
/// to the `i`-th signal in that order.
pub trait ResetMapping<'a> {
    /// Number of reset signals declared for `device`. Zero if the device is
    /// unknown or declares none.
    fn signal_count(&self, device: DeviceId) -> usize;

    /// Resolve the `index`-th signal of `device`, or `NODEVICE`.
    fn resolve_index(&self, device: DeviceId, index: usize) -> Result<ResetSpec<'a>, ErrorCode>;

    /// Resolve the signal of `device` called `name`, or `NODEVICE`.
    fn resolve_name(&self, device: DeviceId, name: &str) -> Result<ResetSpec<'a>, ErrorCode>;
}
