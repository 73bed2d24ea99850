// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral implementations for Allwinner sun50i (A64) SoCs.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod ccu_reset;
