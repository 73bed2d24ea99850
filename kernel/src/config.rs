// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Data structure for storing compile-time configuration options in the kernel.
//!
//! Configuration is expressed as a typed `const` object rather than with
//! `#[cfg(...)]` blocks. Every code path is type-checked by the compiler, even
//! those that end up disabled, and the compiler folds the constants so that a
//! disabled branch has no cost in the resulting image.
//!
//! The same reasoning applies to the reset subsystem itself: the provider-backed
//! [`ResetApi`](crate::reset::ResetApi) and the
//! [`NoResetSupport`](crate::reset::NoResetSupport) fallback are both always
//! compiled, and the board picks one when it wires up its drivers.

/// Data structure holding compile-time configuration options.
///
/// To change the configuration, modify the relevant values in the `CONFIG`
/// constant object defined at the end of this file.
pub(crate) struct Config {
    /// Whether the reset API should trace every acquisition, release and
    /// signal change to the debug output.
    ///
    /// If enabled, the kernel prints the client device, the resolved signal
    /// id and the result of each call. This is useful when bringing up a new
    /// board table, where a wrong index or name silently leaves a peripheral
    /// in reset.
    pub(crate) trace_resets: bool,
}

/// A unique instance of `Config` where compile-time configuration options are
/// defined. This is the only location in the kernel where `cfg!(feature = ..)`
/// is used.
pub(crate) const CONFIG: Config = Config {
    trace_resets: cfg!(feature = "trace_resets"),
};
