// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Reset controller in the Clock Control Unit (CCU) of sun50i SoCs.
//!
//! The CCU gathers the reset bits of the SoC in a handful of registers. The
//! bits are active low: a cleared bit holds the block in reset, a set bit
//! releases it. Signal ids follow the device-tree binding numbering of the
//! A64 CCU (see [`a64`]), and each id maps to one bit of one register through
//! a per-SoC table.

use kernel::hil::reset::{ResetController, ResetId};
use kernel::utilities::registers::interfaces::{ReadWriteable, Readable};
use kernel::utilities::registers::{register_structs, Field, ReadWrite};
use kernel::utilities::StaticRef;
use kernel::ErrorCode;

register_structs! {
    CcuRegisters {
        (0x000 => _reserved0),
        (0x0CC => usbphy_cfg: ReadWrite<u32>),
        (0x0D0 => _reserved1),
        (0x0F4 => dram_cfg: ReadWrite<u32>),
        (0x0F8 => _reserved2),
        (0x0FC => mbus_reset: ReadWrite<u32>),
        (0x100 => _reserved3),
        (0x2C0 => bus_soft_rst0: ReadWrite<u32>),
        (0x2C4 => bus_soft_rst1: ReadWrite<u32>),
        (0x2C8 => bus_soft_rst2: ReadWrite<u32>),
        (0x2CC => _reserved4),
        (0x2D0 => bus_soft_rst3: ReadWrite<u32>),
        (0x2D4 => _reserved5),
        (0x2D8 => bus_soft_rst4: ReadWrite<u32>),
        (0x2DC => @END),
    }
}

const CCU_BASE: StaticRef<CcuRegisters> =
    unsafe { StaticRef::new(0x01C2_0000 as *const CcuRegisters) };

/// CCU registers that hold reset bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetRegister {
    UsbPhyCfg,
    DramCfg,
    MbusReset,
    BusSoftReset0,
    BusSoftReset1,
    BusSoftReset2,
    BusSoftReset3,
    BusSoftReset4,
}

/// Location of one reset signal.
#[derive(Clone, Copy, Debug)]
pub struct ResetBit {
    pub register: ResetRegister,
    pub bit: u8,
}

const fn bit(register: ResetRegister, bit: u8) -> ResetBit {
    ResetBit { register, bit }
}

/// Reset ids of the A64 CCU.
pub mod a64 {
    pub const RST_USB_PHY0: u32 = 0;
    pub const RST_USB_PHY1: u32 = 1;
    pub const RST_USB_HSIC: u32 = 2;
    pub const RST_DRAM: u32 = 3;
    pub const RST_MBUS: u32 = 4;
    pub const RST_BUS_MIPI_DSI: u32 = 5;
    pub const RST_BUS_CE: u32 = 6;
    pub const RST_BUS_DMA: u32 = 7;
    pub const RST_BUS_MMC0: u32 = 8;
    pub const RST_BUS_MMC1: u32 = 9;
    pub const RST_BUS_MMC2: u32 = 10;
    pub const RST_BUS_NAND: u32 = 11;
    pub const RST_BUS_DRAM: u32 = 12;
    pub const RST_BUS_EMAC: u32 = 13;
    pub const RST_BUS_TS: u32 = 14;
    pub const RST_BUS_HSTIMER: u32 = 15;
    pub const RST_BUS_SPI0: u32 = 16;
    pub const RST_BUS_SPI1: u32 = 17;
    pub const RST_BUS_OTG: u32 = 18;
    pub const RST_BUS_EHCI0: u32 = 19;
    pub const RST_BUS_EHCI1: u32 = 20;
    pub const RST_BUS_OHCI0: u32 = 21;
    pub const RST_BUS_OHCI1: u32 = 22;
    pub const RST_BUS_VE: u32 = 23;
    pub const RST_BUS_TCON0: u32 = 24;
    pub const RST_BUS_TCON1: u32 = 25;
    pub const RST_BUS_DEINTERLACE: u32 = 26;
    pub const RST_BUS_CSI: u32 = 27;
    pub const RST_BUS_HDMI0: u32 = 28;
    pub const RST_BUS_HDMI1: u32 = 29;
    pub const RST_BUS_DE: u32 = 30;
    pub const RST_BUS_GPU: u32 = 31;
    pub const RST_BUS_MSGBOX: u32 = 32;
    pub const RST_BUS_SPINLOCK: u32 = 33;
    pub const RST_BUS_DBG: u32 = 34;
    pub const RST_BUS_LVDS: u32 = 35;
    pub const RST_BUS_CODEC: u32 = 36;
    pub const RST_BUS_SPDIF: u32 = 37;
    pub const RST_BUS_THS: u32 = 38;
    pub const RST_BUS_I2S0: u32 = 39;
    pub const RST_BUS_I2S1: u32 = 40;
    pub const RST_BUS_I2S2: u32 = 41;
    pub const RST_BUS_I2C0: u32 = 42;
    pub const RST_BUS_I2C1: u32 = 43;
    pub const RST_BUS_I2C2: u32 = 44;
    pub const RST_BUS_SCR: u32 = 45;
    pub const RST_BUS_UART0: u32 = 46;
    pub const RST_BUS_UART1: u32 = 47;
    pub const RST_BUS_UART2: u32 = 48;
    pub const RST_BUS_UART3: u32 = 49;
    pub const RST_BUS_UART4: u32 = 50;
}

use ResetRegister::{
    BusSoftReset0, BusSoftReset1, BusSoftReset2, BusSoftReset3, BusSoftReset4, DramCfg, MbusReset,
    UsbPhyCfg,
};

/// A64 reset table, indexed by the ids in [`a64`].
pub const A64_RESETS: [ResetBit; 51] = [
    bit(UsbPhyCfg, 0),
    bit(UsbPhyCfg, 1),
    bit(UsbPhyCfg, 2),
    bit(DramCfg, 31),
    bit(MbusReset, 31),
    bit(BusSoftReset0, 1),
    bit(BusSoftReset0, 5),
    bit(BusSoftReset0, 6),
    bit(BusSoftReset0, 8),
    bit(BusSoftReset0, 9),
    bit(BusSoftReset0, 10),
    bit(BusSoftReset0, 13),
    bit(BusSoftReset0, 14),
    bit(BusSoftReset0, 17),
    bit(BusSoftReset0, 18),
    bit(BusSoftReset0, 19),
    bit(BusSoftReset0, 20),
    bit(BusSoftReset0, 21),
    bit(BusSoftReset0, 23),
    bit(BusSoftReset0, 24),
    bit(BusSoftReset0, 25),
    bit(BusSoftReset0, 28),
    bit(BusSoftReset0, 29),
    bit(BusSoftReset1, 0),
    bit(BusSoftReset1, 3),
    bit(BusSoftReset1, 4),
    bit(BusSoftReset1, 5),
    bit(BusSoftReset1, 8),
    bit(BusSoftReset1, 10),
    bit(BusSoftReset1, 11),
    bit(BusSoftReset1, 12),
    bit(BusSoftReset1, 20),
    bit(BusSoftReset1, 21),
    bit(BusSoftReset1, 22),
    bit(BusSoftReset1, 31),
    bit(BusSoftReset2, 0),
    bit(BusSoftReset3, 0),
    bit(BusSoftReset3, 1),
    bit(BusSoftReset3, 8),
    bit(BusSoftReset3, 12),
    bit(BusSoftReset3, 13),
    bit(BusSoftReset3, 14),
    bit(BusSoftReset4, 0),
    bit(BusSoftReset4, 1),
    bit(BusSoftReset4, 2),
    bit(BusSoftReset4, 5),
    bit(BusSoftReset4, 16),
    bit(BusSoftReset4, 17),
    bit(BusSoftReset4, 18),
    bit(BusSoftReset4, 19),
    bit(BusSoftReset4, 20),
];

pub struct CcuReset {
    registers: StaticRef<CcuRegisters>,
    resets: &'static [ResetBit],
}

impl CcuReset {
    /// The reset controller of the A64 CCU.
    pub const fn new_a64() -> CcuReset {
        CcuReset::new(CCU_BASE, &A64_RESETS)
    }

    const fn new(registers: StaticRef<CcuRegisters>, resets: &'static [ResetBit]) -> CcuReset {
        CcuReset { registers, resets }
    }

    /// Number of reset signals this controller implements.
    pub fn num_resets(&self) -> usize {
        self.resets.len()
    }

    fn register(&self, register: ResetRegister) -> &ReadWrite<u32> {
        match register {
            UsbPhyCfg => &self.registers.usbphy_cfg,
            DramCfg => &self.registers.dram_cfg,
            MbusReset => &self.registers.mbus_reset,
            BusSoftReset0 => &self.registers.bus_soft_rst0,
            BusSoftReset1 => &self.registers.bus_soft_rst1,
            BusSoftReset2 => &self.registers.bus_soft_rst2,
            BusSoftReset3 => &self.registers.bus_soft_rst3,
            BusSoftReset4 => &self.registers.bus_soft_rst4,
        }
    }

    fn lookup(&self, id: ResetId) -> Result<(&ReadWrite<u32>, Field<u32, ()>), ErrorCode> {
        let reset = self.resets.get(id.value()).ok_or(ErrorCode::INVAL)?;
        Ok((
            self.register(reset.register),
            Field::new(1, usize::from(reset.bit)),
        ))
    }
}

impl ResetController for CcuReset {
    fn request(&self, id: ResetId) -> Result<(), ErrorCode> {
        self.lookup(id).map(|_| ())
    }

    fn set_asserted(&self, id: ResetId, asserted: bool) -> Result<(), ErrorCode> {
        let (register, field) = self.lookup(id)?;
        // Active low: a cleared bit holds the block in reset.
        register.modify(field.val(u32::from(!asserted)));
        Ok(())
    }

    fn status(&self, id: ResetId) -> Result<bool, ErrorCode> {
        let (register, field) = self.lookup(id)?;
        Ok(!register.is_set(field))
    }
}
