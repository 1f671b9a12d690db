//! Shared test utilities: program-image builders, a ready-made peripheral rig
//! and recording register surfaces.
//!
//! Program images are 32 KiB (two 16 KiB pages), so bank 0 fills the whole
//! `$8000-$FFFF` window. Unused bytes are `NOP` ($EA) so interrupt handlers
//! and stray jumps run harmlessly. Vectors:
//! - RESET -> `$8000` unless overridden
//! - NMI   -> [`NMI_HANDLER`]
//! - IRQ   -> [`IRQ_HANDLER`]
//!
//! Notes on iNES header fields used by `build_ines`:
//! - bytes[0..4] = b"NES\x1A"
//! - byte 4 = PRG ROM size in 16 KiB units
//! - byte 5 = CHR ROM size in 8 KiB units
//! - byte 6 = Flags 6 (mirroring, battery, trainer, mapper low nibble)
//! - byte 7 = Flags 7 (NES 2.0 indicator, mapper high nibble)
//! - byte 8 = PRG RAM size in 8 KiB units
//! - bytes 9..15 = padding

#![allow(dead_code)]

use crate::apu::ApuRegisterFile;
use crate::bus::{AudioUnit, Bus, PictureUnit, PpuRegister};
use crate::cartridge::{CartridgeImage, PRG_PAGE_SIZE, PRG_WINDOW_SIZE};
use crate::config::CoreConfig;
use crate::cpu::Cpu;
use crate::error::Result;
use crate::ppu::PpuRegisterFile;
use crate::system::System;

pub const NMI_HANDLER: u16 = 0x9000;
pub const IRQ_HANDLER: u16 = 0x9800;
pub const DEFAULT_ENTRY: u16 = 0x8000;

/// Build a minimal iNES (v1) image. PRG is filled with $AA, CHR with $CC.
pub fn build_ines(
    prg_16k: usize,
    chr_8k: usize,
    flags6: u8,
    flags7: u8,
    prg_ram_8k: u8,
    trainer: Option<&[u8; 512]>,
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(
        16 + trainer.map_or(0, |_| 512) + prg_16k * 16 * 1024 + chr_8k * 8 * 1024,
    );

    bytes.extend_from_slice(b"NES\x1A");
    bytes.push(prg_16k as u8);
    bytes.push(chr_8k as u8);
    bytes.push(flags6);
    bytes.push(flags7);
    bytes.push(prg_ram_8k);
    bytes.extend_from_slice(&[0u8; 7]);

    if let Some(t) = trainer {
        bytes.extend_from_slice(t);
    }
    bytes.resize(bytes.len() + prg_16k * 16 * 1024, 0xAA);
    bytes.resize(bytes.len() + chr_8k * 8 * 1024, 0xCC);
    bytes
}

/// `pages` pages of `page_size` bytes; every byte of page `n` holds `n`.
pub fn paged_prg(pages: usize, page_size: usize) -> Vec<u8> {
    (0..pages)
        .flat_map(|n| std::iter::repeat_n(n as u8, page_size))
        .collect()
}

/// A 32 KiB NOP-filled image with `program` placed at CPU address `at` and
/// the three vectors written at $FFFA-$FFFF.
pub fn program_image(program: &[u8], at: u16, reset: u16) -> Vec<u8> {
    let mut prg = vec![0xEA; PRG_WINDOW_SIZE];
    let start = usize::from(at - 0x8000);
    prg[start..start + program.len()].copy_from_slice(program);
    set_vectors(&mut prg, reset, NMI_HANDLER, IRQ_HANDLER);
    prg
}

/// Write NMI / RESET / IRQ vectors at the top of a 32 KiB window image.
pub fn set_vectors(prg: &mut [u8], reset: u16, nmi: u16, irq: u16) {
    let base = PRG_WINDOW_SIZE - 6;
    prg[base..base + 2].copy_from_slice(&nmi.to_le_bytes());
    prg[base + 2..base + 4].copy_from_slice(&reset.to_le_bytes());
    prg[base + 4..base + 6].copy_from_slice(&irq.to_le_bytes());
}

/// Cartridge plus stub peripherals, owned together so tests can borrow them
/// into a `Bus` or `System`.
pub struct Rig {
    pub cart: CartridgeImage,
    pub ppu: PpuRegisterFile,
    pub apu: ApuRegisterFile,
}

impl Rig {
    /// Program at $8000, reset vector $8000.
    pub fn new(program: &[u8]) -> Self {
        Self::at(DEFAULT_ENTRY, program)
    }

    /// Program and reset vector at `pc`.
    pub fn at(pc: u16, program: &[u8]) -> Self {
        Self::from_prg(program_image(program, pc, pc))
    }

    /// Program at $8000 with an arbitrary reset vector.
    pub fn with_reset_vector(program: &[u8], reset: u16) -> Self {
        Self::from_prg(program_image(program, DEFAULT_ENTRY, reset))
    }

    pub fn from_prg(prg: Vec<u8>) -> Self {
        let cart = CartridgeImage::new(prg, PRG_PAGE_SIZE).expect("test image");
        Self::from_image(cart)
    }

    pub fn from_image(cart: CartridgeImage) -> Self {
        Self {
            cart,
            ppu: PpuRegisterFile::new(),
            apu: ApuRegisterFile::new(),
        }
    }

    pub fn bus(&mut self) -> Bus<'_> {
        Bus::new(&self.cart, &mut self.ppu, &mut self.apu)
    }

    pub fn system(&mut self) -> Result<System<'_>> {
        System::power_on(
            CoreConfig::default().with_page_size(self.cart.page_size()),
            &self.cart,
            &mut self.ppu,
            &mut self.apu,
        )
    }
}

/// Run `f` against a bus over `program` (at $8000). `reset_vector` defaults
/// to $8000.
pub fn with_bus<R>(program: &[u8], reset_vector: Option<u16>, f: impl FnOnce(&mut Bus<'_>) -> R) -> R {
    let mut rig = Rig::with_reset_vector(program, reset_vector.unwrap_or(DEFAULT_ENTRY));
    let mut bus = rig.bus();
    f(&mut bus)
}

/// Run `f` with a freshly reset CPU whose program starts at $8000.
pub fn with_cpu<R>(program: &[u8], f: impl FnOnce(&mut Cpu, &mut Bus<'_>) -> R) -> R {
    with_cpu_at(DEFAULT_ENTRY, program, f)
}

/// Run `f` with a freshly reset CPU whose program starts at `pc`.
pub fn with_cpu_at<R>(pc: u16, program: &[u8], f: impl FnOnce(&mut Cpu, &mut Bus<'_>) -> R) -> R {
    let mut rig = Rig::at(pc, program);
    let mut bus = rig.bus();
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus).expect("reset");
    f(&mut cpu, &mut bus)
}

// -------------------------------------------------------------------------
// Recording register surfaces
// -------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read(PpuRegister),
    Write(PpuRegister, u8),
    Dma(u8),
}

/// Logs every register access; reads return `read_value`.
#[derive(Debug, Default)]
pub struct RecordingPpu {
    pub log: Vec<Access>,
    pub read_value: u8,
    pub dma_data: Option<Box<[u8; 256]>>,
}

impl PictureUnit for RecordingPpu {
    fn read_register(&mut self, reg: PpuRegister) -> u8 {
        self.log.push(Access::Read(reg));
        self.read_value
    }

    fn write_register(&mut self, reg: PpuRegister, value: u8) {
        self.log.push(Access::Write(reg, value));
    }

    fn oam_dma(&mut self, page: u8, data: &[u8; 256]) {
        self.log.push(Access::Dma(page));
        self.dma_data = Some(Box::new(*data));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioAccess {
    Read(u16),
    Write(u16, u8),
}

#[derive(Debug, Default)]
pub struct RecordingApu {
    pub log: Vec<AudioAccess>,
    pub read_value: u8,
}

impl AudioUnit for RecordingApu {
    fn read_register(&mut self, addr: u16) -> u8 {
        self.log.push(AudioAccess::Read(addr));
        self.read_value
    }

    fn write_register(&mut self, addr: u16, value: u8) {
        self.log.push(AudioAccess::Write(addr, value));
    }
}
