// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Reset-control consumer API.
//!
//! A reset is a hardware signal that returns a hardware block (or a whole
//! off-CPU chip) to a known initial state. Drivers usually reset their
//! hardware when they start, or to recover from an error. The signal is
//! typically owned by a separate reset controller; this module lets drivers
//! ask for their signals without knowing which controller implements them,
//! or whether the mapping comes from the device tree or a board table.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! fn probe(resets: &dyn ResetControl<'static>) -> Result<(), ErrorCode> {
//!     let mut bulk = resets.get_bulk(EMAC)?;
//!     resets.deassert_bulk(&bulk)?;
//!     // ...
//!     resets.release_bulk(&mut bulk)
//! }
//! ```

mod control;
mod fallback;
mod handle;

pub use self::control::{ResetApi, ResetControl};
pub use self::fallback::NoResetSupport;
pub use self::handle::{ResetHandle, ResetHandleBulk};
