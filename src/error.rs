/*!
error.rs - Error taxonomy for the CPU core.

Two classes of failure exist:
- Configuration errors (bad cartridge image, bank index, reset vector, snapshot
  bytes). These surface at initialization or when the offending value is set.
- Illegal opcodes, raised by `step` before any state is touched.

Bus accesses never fail: every address has a defined read/write behavior.
*/

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("cartridge image is empty")]
    EmptyImage,

    #[error("invalid program page size {0:#X} (must be a non-zero power of two)")]
    InvalidPageSize(usize),

    #[error("cartridge image truncated: {len:#X} bytes is not a whole number of {page_size:#X}-byte pages")]
    TruncatedImage { len: usize, page_size: usize },

    #[error("bank {bank} out of range: image holds {bank_count} pages of {page_size:#X} bytes")]
    InvalidBank {
        bank: u16,
        bank_count: u16,
        page_size: usize,
    },

    #[error("reset vector at {vector:#06X} points to {target:#06X}, outside executable memory")]
    MalformedResetVector { vector: u16, target: u16 },

    #[error("illegal opcode {opcode:#04X} at PC {pc:#06X}")]
    IllegalOpcode { opcode: u8, pc: u16 },

    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(&'static str),

    #[error("invalid iNES image: {0}")]
    InvalidRomHeader(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let e = CoreError::IllegalOpcode {
            opcode: 0x02,
            pc: 0x8010,
        };
        assert_eq!(e.to_string(), "illegal opcode 0x02 at PC 0x8010");

        let e = CoreError::MalformedResetVector {
            vector: 0xFFFC,
            target: 0x4020,
        };
        assert!(e.to_string().contains("0x4020"));
    }
}
