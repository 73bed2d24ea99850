// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Cross-crate tests: drivers probing through a board reset table.

#![no_std]

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod probe;
