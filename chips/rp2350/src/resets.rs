// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright OxidOS Automotive 2025.

//! Reset controller for the RP2350 RESETS block.
//!
//! Every peripheral has one bit in the RESET register; while the bit is set
//! the peripheral is held in reset. After a bit is cleared, the matching bit
//! of RESET_DONE goes high once the peripheral is out of reset.
//!
//! Signal ids are the bit numbers, see [`Peripheral`].

use kernel::hil::reset::{ResetController, ResetId};
use kernel::utilities::registers::interfaces::{ReadWriteable, Readable};
use kernel::utilities::registers::{register_bitfields, register_structs, Field, ReadWrite};
use kernel::utilities::StaticRef;
use kernel::ErrorCode;

register_structs! {
    ResetsRegisters {
        (0x000 => reset: ReadWrite<u32, RESET::Register>),
        (0x004 => _reserved0),
        (0x008 => reset_done: ReadWrite<u32, RESET_DONE::Register>),
        (0x00C => @END),
    }
}

register_bitfields![u32,
    RESET [
        /// One bit per [`Peripheral`], set while it is held in reset.
        PERIPHERALS OFFSET(0) NUMBITS(29) []
    ],
    RESET_DONE [
        /// One bit per [`Peripheral`], set once it is out of reset.
        PERIPHERALS OFFSET(0) NUMBITS(29) []
    ]
];

const RESETS_BASE: StaticRef<ResetsRegisters> =
    unsafe { StaticRef::new(0x40020000 as *const ResetsRegisters) };

/// How many times RESET_DONE is read before a deassert gives up.
const RESET_DONE_POLLS: usize = 10_000;

/// Peripherals behind the RESETS block. The discriminant is the signal id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Peripheral {
    Adc = 0,
    BusController = 1,
    Dma = 2,
    Hstx = 3,
    I2c0 = 4,
    I2c1 = 5,
    IOBank0 = 6,
    IOQSpi = 7,
    Jtag = 8,
    PadsBank0 = 9,
    PadsQSpi = 10,
    Pio0 = 11,
    Pio1 = 12,
    Pio2 = 13,
    PllSys = 14,
    PllUsb = 15,
    Pwm = 16,
    Sha256 = 17,
    Spi0 = 18,
    Spi1 = 19,
    Syscfg = 20,
    SysInfo = 21,
    TBMan = 22,
    Timer0 = 23,
    Timer1 = 24,
    Trng = 25,
    Uart0 = 26,
    Uart1 = 27,
    UsbCtrl = 28,
}

const PERIPHERAL_COUNT: usize = Peripheral::UsbCtrl as usize + 1;

impl Peripheral {
    /// The id to use in a board reset table.
    pub const fn id(self) -> u32 {
        self as u32
    }
}

pub struct Resets {
    registers: StaticRef<ResetsRegisters>,
}

impl Resets {
    pub const fn new() -> Resets {
        Resets::with_registers(RESETS_BASE)
    }

    const fn with_registers(registers: StaticRef<ResetsRegisters>) -> Resets {
        Resets { registers }
    }

    fn check(id: ResetId) -> Result<usize, ErrorCode> {
        if id.value() < PERIPHERAL_COUNT {
            Ok(id.value())
        } else {
            Err(ErrorCode::INVAL)
        }
    }

    fn reset_field(id: ResetId) -> Result<Field<u32, RESET::Register>, ErrorCode> {
        Resets::check(id).map(|bit| Field::new(1, bit))
    }

    fn reset_done_field(id: ResetId) -> Result<Field<u32, RESET_DONE::Register>, ErrorCode> {
        Resets::check(id).map(|bit| Field::new(1, bit))
    }
}

impl ResetController for Resets {
    fn request(&self, id: ResetId) -> Result<(), ErrorCode> {
        Resets::check(id).map(|_| ())
    }

    fn set_asserted(&self, id: ResetId, asserted: bool) -> Result<(), ErrorCode> {
        let reset = Resets::reset_field(id)?;
        if asserted {
            self.registers.reset.modify(reset.val(1));
            return Ok(());
        }

        self.registers.reset.modify(reset.val(0));
        let done = Resets::reset_done_field(id)?;
        for _ in 0..RESET_DONE_POLLS {
            if self.registers.reset_done.is_set(done) {
                return Ok(());
            }
        }
        Err(ErrorCode::BUSY)
    }

    fn status(&self, id: ResetId) -> Result<bool, ErrorCode> {
        let reset = Resets::reset_field(id)?;
        Ok(self.registers.reset.is_set(reset))
    }
}
