// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

use core::cell::Cell;

use capsules_core::reset_table::{ResetBinding, ResetTable};
use kernel::device::DeviceId;
use kernel::hil::reset::{ResetController, ResetId};
use kernel::reset::{NoResetSupport, ResetApi, ResetControl, ResetHandleBulk};
use kernel::static_init;
use kernel::ErrorCode;

const EMAC: DeviceId = DeviceId::new("ethernet@1c30000");
const MMC0: DeviceId = DeviceId::new("mmc@1c0f000");

const PHY_RESET: usize = 3;
const CORE_RESET: usize = 7;
const PHY_ARGS: [u32; 1] = [PHY_RESET as u32];
const CORE_ARGS: [u32; 1] = [CORE_RESET as u32];

/// A bank of 32 reset lines, bit set while asserted. Lines come out of reset
/// held, like after power-on.
struct ResetBank {
    asserted: Cell<u32>,
    claimed: Cell<u32>,
    stuck: Cell<Option<usize>>,
}

impl ResetBank {
    fn new() -> ResetBank {
        ResetBank {
            asserted: Cell::new(u32::MAX),
            claimed: Cell::new(0),
            stuck: Cell::new(None),
        }
    }

    fn is_asserted(&self, line: usize) -> bool {
        self.asserted.get() & (1 << line) != 0
    }

    fn is_claimed(&self, line: usize) -> bool {
        self.claimed.get() & (1 << line) != 0
    }
}

impl ResetController for ResetBank {
    fn request(&self, id: ResetId) -> Result<(), ErrorCode> {
        let bit = 1 << id.value();
        if self.claimed.get() & bit != 0 {
            return Err(ErrorCode::BUSY);
        }
        self.claimed.set(self.claimed.get() | bit);
        Ok(())
    }

    fn free(&self, id: ResetId) -> Result<(), ErrorCode> {
        self.claimed.set(self.claimed.get() & !(1 << id.value()));
        Ok(())
    }

    fn set_asserted(&self, id: ResetId, asserted: bool) -> Result<(), ErrorCode> {
        if !asserted && self.stuck.get() == Some(id.value()) {
            return Err(ErrorCode::FAIL);
        }
        let bit = 1 << id.value();
        let lines = self.asserted.get();
        self.asserted
            .set(if asserted { lines | bit } else { lines & !bit });
        Ok(())
    }

    fn status(&self, id: ResetId) -> Result<bool, ErrorCode> {
        Ok(self.is_asserted(id.value()))
    }
}

/// What an Ethernet MAC driver does at probe time.
fn probe_emac<'a>(resets: &dyn ResetControl<'a>) -> Result<ResetHandleBulk<'a>, ErrorCode> {
    let mut bulk = resets.get_bulk(EMAC)?;
    if let Err(e) = resets.deassert_bulk(&bulk) {
        let _ = resets.release_bulk(&mut bulk);
        return Err(e);
    }
    Ok(bulk)
}

fn board_bindings(bank: &ResetBank) -> [ResetBinding<'_>; 3] {
    [
        ResetBinding::new(EMAC, Some("phy-reset"), bank, &PHY_ARGS),
        ResetBinding::new(MMC0, Some("ahb"), bank, &[12]),
        ResetBinding::new(EMAC, Some("core-reset"), bank, &CORE_ARGS),
    ]
}

#[test]
fn probe_brings_both_signals_out_of_reset_in_order() {
    let bank = ResetBank::new();
    let bindings = board_bindings(&bank);
    let table = ResetTable::new(&bindings);
    let resets = ResetApi::new(&table);

    let bulk = probe_emac(&resets).unwrap();

    assert_eq!(bulk.count(), 2);
    assert_eq!(bulk.get(0).and_then(|h| h.id()), Some(ResetId::new(PHY_RESET)));
    assert_eq!(bulk.get(1).and_then(|h| h.id()), Some(ResetId::new(CORE_RESET)));
    assert!(!bank.is_asserted(PHY_RESET));
    assert!(!bank.is_asserted(CORE_RESET));
    assert!(bank.is_asserted(12));
    assert!(bulk.iter().all(|h| h.is_owned_by(&bank)));
}

#[test]
fn deassert_failure_stops_at_the_failing_signal() {
    let bank = ResetBank::new();
    bank.stuck.set(Some(CORE_RESET));
    let bindings = board_bindings(&bank);
    let table = ResetTable::new(&bindings);
    let resets = ResetApi::new(&table);

    let bulk = resets.get_bulk(EMAC).unwrap();
    assert_eq!(resets.deassert_bulk(&bulk), Err(ErrorCode::FAIL));
    assert!(!bank.is_asserted(PHY_RESET));
    assert!(bank.is_asserted(CORE_RESET));
}

#[test]
fn failed_probe_leaves_nothing_claimed() {
    let bank = ResetBank::new();
    bank.stuck.set(Some(CORE_RESET));
    let bindings = board_bindings(&bank);
    let table = ResetTable::new(&bindings);
    let resets = ResetApi::new(&table);

    assert_eq!(probe_emac(&resets).err(), Some(ErrorCode::FAIL));
    assert!(!bank.is_claimed(PHY_RESET));
    assert!(!bank.is_claimed(CORE_RESET));
    assert!(bank.is_asserted(PHY_RESET));

    // Both lines can be claimed again by the next probe attempt.
    bank.stuck.set(None);
    assert!(probe_emac(&resets).is_ok());
}

#[test]
fn a_claimed_signal_fails_the_second_bulk_and_rolls_back() {
    let bank = ResetBank::new();
    let bindings = board_bindings(&bank);
    let table = ResetTable::new(&bindings);
    let resets = ResetApi::new(&table);

    let core = resets.get_by_name(EMAC, "core-reset").unwrap();
    assert_eq!(resets.get_bulk(EMAC).err(), Some(ErrorCode::BUSY));
    assert!(!bank.is_claimed(PHY_RESET));
    assert!(bank.is_claimed(CORE_RESET));
    assert!(core.is_valid());
}

#[test]
fn remove_releases_every_signal_once() {
    let bank = ResetBank::new();
    let bindings = board_bindings(&bank);
    let table = ResetTable::new(&bindings);
    let resets = ResetApi::new(&table);

    let mut bulk = probe_emac(&resets).unwrap();
    assert_eq!(resets.release_bulk(&mut bulk), Ok(()));
    assert!(bulk.iter().all(|h| !h.is_valid()));
    assert!(bank.is_asserted(PHY_RESET) && bank.is_asserted(CORE_RESET));
    assert_eq!(bank.claimed.get(), 0);

    assert_eq!(resets.release_bulk(&mut bulk), Ok(()));
}

#[test]
fn optional_signal_missing_from_the_table() {
    let bank = ResetBank::new();
    let bindings = board_bindings(&bank);
    let table = ResetTable::new(&bindings);
    let resets = ResetApi::new(&table);

    let mut phy = resets.get_optional_by_name(MMC0, "phy-reset").unwrap();
    assert!(!phy.is_valid());
    assert_eq!(resets.deassert(&phy), Ok(()));
    assert_eq!(resets.free(&mut phy), Ok(()));
    assert_eq!(bank.asserted.get(), u32::MAX);
}

#[test]
fn images_without_reset_support_fail_probe_cleanly() {
    let resets = NoResetSupport;

    assert_eq!(probe_emac(&resets).err(), Some(ErrorCode::NOSUPPORT));

    let mut bulk = ResetHandleBulk::new();
    assert_eq!(resets.deassert_bulk(&bulk), Ok(()));
    assert_eq!(resets.release_bulk(&mut bulk), Ok(()));
}

#[test]
fn board_setup_hands_drivers_a_static_reset_api() {
    let (bank, resets): (&'static ResetBank, &'static dyn ResetControl<'static>) = unsafe {
        let bank: &'static ResetBank = static_init!(ResetBank, ResetBank::new());
        let bindings = static_init!([ResetBinding<'static>; 3], board_bindings(bank));
        let table = static_init!(ResetTable<'static>, ResetTable::new(bindings));
        (bank, static_init!(ResetApi<'static>, ResetApi::new(table)))
    };

    let ahb = resets.get_by_index(MMC0, 0).unwrap();
    assert_eq!(resets.deassert(&ahb), Ok(()));
    assert_eq!(resets.status(&ahb), Ok(false));
    assert!(bank.is_claimed(12) && !bank.is_asserted(12));
}
