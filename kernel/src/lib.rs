// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Core boot kernel.
//!
//! The kernel crate implements the reset-control consumer API shared by every
//! driver of the boot firmware, and holds the Hardware Interface Layer (HIL)
//! definitions that reset controllers and board mappings implement.
//!
//! Chips implement the HIL traits in `hil::reset`; boards build a mapping
//! table and pick a [`reset::ResetControl`] implementation; drivers only see
//! that trait.

#![warn(unreachable_pub)]
#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
pub mod debug;
pub mod device;
pub mod errorcode;
pub mod hil;
pub mod reset;
pub mod utilities;

mod config;

pub use crate::errorcode::ErrorCode;
