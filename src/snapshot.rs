//! Machine snapshots.
//!
//! A [`Snapshot`] captures everything needed to resume execution
//! deterministically: CPU registers, the mapped bank, both interrupt lines,
//! the cycle counter and system RAM. The cartridge image and peripheral
//! register files are owned by the host and are not included.
//!
//! **Byte layout** (version 1, 2071 bytes, little-endian):
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 4 | magic `2A03` |
//! | 4 | 1 | layout version |
//! | 5 | 5 | A, X, Y, SP, P |
//! | 10 | 2 | PC |
//! | 12 | 2 | bank |
//! | 14 | 1 | lines (bit 0 NMI pending, bit 1 IRQ asserted) |
//! | 15 | 8 | total cycles |
//! | 23 | 2048 | RAM |

use crate::bus::CPU_RAM_SIZE;
use crate::cpu::CpuState;
use crate::error::{CoreError, Result};

const MAGIC: &[u8; 4] = b"2A03";
const VERSION: u8 = 1;

const OFF_VERSION: usize = 4;
const OFF_REGS: usize = 5;
const OFF_PC: usize = 10;
const OFF_BANK: usize = 12;
const OFF_LINES: usize = 14;
const OFF_CYCLES: usize = 15;
const OFF_RAM: usize = 23;

/// Size of a serialized snapshot.
pub const SNAPSHOT_SIZE: usize = OFF_RAM + CPU_RAM_SIZE;

const LINE_NMI: u8 = 0b01;
const LINE_IRQ: u8 = 0b10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub cpu: CpuState,
    pub bank: u16,
    pub nmi_pending: bool,
    pub irq_line: bool,
    pub cycles: u64,
    pub ram: [u8; CPU_RAM_SIZE],
}

impl Snapshot {
    /// Serialize into the version 1 layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SNAPSHOT_SIZE);
        out.extend_from_slice(MAGIC);
        out.push(VERSION);
        out.extend_from_slice(&[
            self.cpu.a(),
            self.cpu.x(),
            self.cpu.y(),
            self.cpu.sp(),
            self.cpu.status(),
        ]);
        out.extend_from_slice(&self.cpu.pc().to_le_bytes());
        out.extend_from_slice(&self.bank.to_le_bytes());

        let mut lines = 0;
        if self.nmi_pending {
            lines |= LINE_NMI;
        }
        if self.irq_line {
            lines |= LINE_IRQ;
        }
        out.push(lines);

        out.extend_from_slice(&self.cycles.to_le_bytes());
        out.extend_from_slice(&self.ram);
        out
    }

    /// Parse a version 1 snapshot.
    ///
    /// # Errors
    ///
    /// `MalformedSnapshot` when the length, magic, version or line bits are
    /// wrong.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() != SNAPSHOT_SIZE {
            return Err(CoreError::MalformedSnapshot("wrong length"));
        }
        if &data[..OFF_VERSION] != MAGIC {
            return Err(CoreError::MalformedSnapshot("bad magic"));
        }
        if data[OFF_VERSION] != VERSION {
            return Err(CoreError::MalformedSnapshot("unsupported version"));
        }
        let lines = data[OFF_LINES];
        if lines & !(LINE_NMI | LINE_IRQ) != 0 {
            return Err(CoreError::MalformedSnapshot("unknown interrupt line bits"));
        }

        let regs = &data[OFF_REGS..OFF_PC];
        let pc = u16::from_le_bytes([data[OFF_PC], data[OFF_PC + 1]]);
        let cpu = CpuState::from_raw(regs[0], regs[1], regs[2], regs[3], pc, regs[4]);
        let bank = u16::from_le_bytes([data[OFF_BANK], data[OFF_BANK + 1]]);

        let mut cycle_bytes = [0u8; 8];
        cycle_bytes.copy_from_slice(&data[OFF_CYCLES..OFF_RAM]);

        let mut ram = [0u8; CPU_RAM_SIZE];
        ram.copy_from_slice(&data[OFF_RAM..]);

        Ok(Self {
            cpu,
            bank,
            nmi_pending: lines & LINE_NMI != 0,
            irq_line: lines & LINE_IRQ != 0,
            cycles: u64::from_le_bytes(cycle_bytes),
            ram,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        let mut ram = [0u8; CPU_RAM_SIZE];
        ram[0] = 0x11;
        ram[CPU_RAM_SIZE - 1] = 0x99;
        Snapshot {
            cpu: CpuState::from_raw(0x01, 0x02, 0x03, 0xF0, 0xC123, 0xE5),
            bank: 0x0102,
            nmi_pending: true,
            irq_line: false,
            cycles: 0x0102_0304_0506_0708,
            ram,
        }
    }

    #[test]
    fn layout_offsets() {
        let bytes = sample().to_bytes();
        assert_eq!(bytes.len(), 2071);
        assert_eq!(&bytes[0..4], b"2A03");
        assert_eq!(bytes[4], 1);
        assert_eq!(&bytes[5..10], &[0x01, 0x02, 0x03, 0xF0, 0xE5]);
        assert_eq!(&bytes[10..12], &[0x23, 0xC1]);
        assert_eq!(&bytes[12..14], &[0x02, 0x01]);
        assert_eq!(bytes[14], 0b01);
        assert_eq!(bytes[15], 0x08);
        assert_eq!(bytes[22], 0x01);
        assert_eq!(bytes[23], 0x11);
        assert_eq!(bytes[2070], 0x99);
    }

    #[test]
    fn bytes_round_trip() {
        let snap = sample();
        assert_eq!(Snapshot::from_bytes(&snap.to_bytes()).unwrap(), snap);
    }

    #[test]
    fn rejects_bad_input() {
        let good = sample().to_bytes();

        assert!(matches!(
            Snapshot::from_bytes(&good[..100]),
            Err(CoreError::MalformedSnapshot(_))
        ));

        let mut bad = good.clone();
        bad[0] = b'X';
        assert_eq!(
            Snapshot::from_bytes(&bad),
            Err(CoreError::MalformedSnapshot("bad magic"))
        );

        let mut bad = good.clone();
        bad[4] = 2;
        assert!(Snapshot::from_bytes(&bad).is_err());

        let mut bad = good;
        bad[14] = 0x80;
        assert!(Snapshot::from_bytes(&bad).is_err());
    }

    #[test]
    fn status_bit_five_forced_on_load() {
        let mut bytes = sample().to_bytes();
        bytes[9] = 0x00;
        let snap = Snapshot::from_bytes(&bytes).unwrap();
        assert_eq!(snap.cpu.status(), 0x20);
    }
}
