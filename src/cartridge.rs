/*!
Cartridge program storage and the bank selector.

Features:
- `CartridgeImage` holds PRG bytes organized into fixed-size pages
- Construct from raw PRG bytes (`new`) or from an iNES (v1) file (`from_ines_bytes`)
- `BankSelector` picks which page is mapped at $8000

Notes:
- The CPU window $8000-$FFFF is 32 KiB. A byte at address `a` lives at
  `bank * page_size + (a - 0x8000)` in the image.
- Images shorter than the window are mirrored at load time so the window is
  always backed (a single 16 KiB page appears at both $8000 and $C000, as on
  NROM-128 boards). The image length must divide the window evenly in that case.
- A bank is valid when the whole window starting at its page fits inside the
  image. Validation happens when the bank is selected, so reads never go out of
  range.
- iNES 2.0 headers are rejected. CHR data and mapper numbers are ignored; only
  the PRG payload is kept.
*/

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{CoreError, Result};

/// Default program page size (16 KiB).
pub const PRG_PAGE_SIZE: usize = 16 * 1024;

/// Size of the CPU-visible program window ($8000-$FFFF).
pub const PRG_WINDOW_SIZE: usize = 0x8000;

const INES_HEADER_LEN: usize = 16;
const INES_TRAINER_LEN: usize = 512;

/// Index of the program page mapped at $8000.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BankSelector(u16);

impl BankSelector {
    pub const fn new(bank: u16) -> Self {
        Self(bank)
    }

    pub const fn index(self) -> u16 {
        self.0
    }
}

/// Immutable program storage, organized into pages of `page_size` bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct CartridgeImage {
    prg: Vec<u8>,
    page_size: usize,
}

impl std::fmt::Debug for CartridgeImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartridgeImage")
            .field("prg_len", &self.prg.len())
            .field("page_size", &self.page_size)
            .field("bank_count", &self.bank_count())
            .finish()
    }
}

impl CartridgeImage {
    // -------------- Construction --------------

    /// Build an image from raw PRG bytes.
    ///
    /// Fails when the data is empty, the page size is not a power of two, the
    /// data is not a whole number of pages, or a short image cannot be mirrored
    /// evenly across the 32 KiB window.
    pub fn new(prg: Vec<u8>, page_size: usize) -> Result<Self> {
        if prg.is_empty() {
            return Err(CoreError::EmptyImage);
        }
        if page_size == 0 || !page_size.is_power_of_two() {
            return Err(CoreError::InvalidPageSize(page_size));
        }
        let len = prg.len();
        if len % page_size != 0 {
            return Err(CoreError::TruncatedImage { len, page_size });
        }

        let prg = if len < PRG_WINDOW_SIZE {
            if PRG_WINDOW_SIZE % len != 0 {
                return Err(CoreError::TruncatedImage { len, page_size });
            }
            debug!(
                "mirroring {:#X}-byte PRG image across the {:#X}-byte window",
                len, PRG_WINDOW_SIZE
            );
            prg.repeat(PRG_WINDOW_SIZE / len)
        } else {
            prg
        };

        Ok(Self { prg, page_size })
    }

    /// Parse an iNES (v1) file and keep its PRG payload as 16 KiB pages.
    pub fn from_ines_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < INES_HEADER_LEN {
            return Err(CoreError::InvalidRomHeader(
                "data too small for iNES header".into(),
            ));
        }
        if &data[0..4] != b"NES\x1A" {
            return Err(CoreError::InvalidRomHeader(
                "invalid magic (expected NES<1A>)".into(),
            ));
        }

        let prg_16k_units = data[4] as usize;
        let flags6 = data[6];
        let flags7 = data[7];

        // NES 2.0 if (flags7 & 0x0C) == 0x08
        if (flags7 & 0x0C) == 0x08 {
            return Err(CoreError::InvalidRomHeader(
                "NES 2.0 format is not supported".into(),
            ));
        }

        let mut offset = INES_HEADER_LEN;
        if (flags6 & 0b0000_0100) != 0 {
            offset += INES_TRAINER_LEN;
        }

        let prg_len = prg_16k_units * PRG_PAGE_SIZE;
        if prg_len == 0 {
            return Err(CoreError::EmptyImage);
        }
        let end = offset + prg_len;
        if data.len() < end {
            return Err(CoreError::TruncatedImage {
                len: data.len().saturating_sub(offset),
                page_size: PRG_PAGE_SIZE,
            });
        }

        Self::new(data[offset..end].to_vec(), PRG_PAGE_SIZE)
    }

    /// Load an iNES file from disk.
    pub fn from_ines_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path.as_ref()).map_err(|e| {
            CoreError::InvalidRomHeader(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::from_ines_bytes(&data)
    }

    // -------------- Accessors --------------

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.prg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prg.is_empty()
    }

    /// Number of whole pages in the (possibly mirrored) image.
    pub fn bank_count(&self) -> u16 {
        (self.prg.len() / self.page_size).min(u16::MAX as usize) as u16
    }

    /// Read a byte at an offset into the image.
    ///
    /// Offsets past the end read as 0; the bus never produces one for a
    /// validated bank.
    #[inline]
    pub fn read_program_byte(&self, offset: u32) -> u8 {
        self.prg.get(offset as usize).copied().unwrap_or(0)
    }

    // -------------- Banking --------------

    /// Check that the 32 KiB window starting at `bank` fits in the image.
    pub fn check_bank(&self, bank: BankSelector) -> Result<()> {
        let start = bank.index() as usize * self.page_size;
        if start + PRG_WINDOW_SIZE <= self.prg.len() {
            Ok(())
        } else {
            Err(CoreError::InvalidBank {
                bank: bank.index(),
                bank_count: self.bank_count(),
                page_size: self.page_size,
            })
        }
    }

    /// Image offset for a CPU address in $8000-$FFFF under `bank`.
    #[inline]
    pub fn window_offset(&self, bank: BankSelector, addr: u16) -> u32 {
        (bank.index() as u32) * (self.page_size as u32) + u32::from(addr.wrapping_sub(0x8000))
    }
}
