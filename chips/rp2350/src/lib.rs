// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral implementations for the RP2350 MCU.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod resets;
