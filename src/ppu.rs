/*!
Stub picture unit: a plain register file behind the `PictureUnit` surface.

Scope:
- Latches the last value written to each register (PPUCTRL, PPUMASK, OAMADDR,
  OAMDATA, PPUSCROLL, PPUADDR, PPUDATA) and the last OAM DMA page.
- PPUSTATUS is host-controlled via `set_status`; reading it returns the value
  unchanged (no vblank clear, no write-toggle reset).
- OAM DMA copies the 256-byte payload into a local OAM array starting at
  OAMADDR, wrapping, as the hardware does.

No rendering or timing is modeled. Real picture units plug into the bus by
implementing `PictureUnit` themselves.
*/

use crate::bus::{PictureUnit, PpuRegister};

#[derive(Clone, Debug)]
pub struct PpuRegisterFile {
    regs: [u8; 8],
    oam: [u8; 256],
    oam_dma_page: Option<u8>,
}

impl Default for PpuRegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl PpuRegisterFile {
    pub fn new() -> Self {
        Self {
            regs: [0; 8],
            oam: [0; 256],
            oam_dma_page: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Raw latched value, regardless of readability.
    pub fn register(&self, reg: PpuRegister) -> u8 {
        self.regs[reg.index()]
    }

    /// Host-side setter for PPUSTATUS (the CPU cannot write it).
    pub fn set_status(&mut self, value: u8) {
        self.regs[PpuRegister::Status.index()] = value;
    }

    pub fn oam(&self) -> &[u8; 256] {
        &self.oam
    }

    /// Page of the most recent OAM DMA, if any.
    pub fn oam_dma_page(&self) -> Option<u8> {
        self.oam_dma_page
    }
}

impl PictureUnit for PpuRegisterFile {
    fn read_register(&mut self, reg: PpuRegister) -> u8 {
        self.regs[reg.index()]
    }

    fn write_register(&mut self, reg: PpuRegister, value: u8) {
        self.regs[reg.index()] = value;
        if reg == PpuRegister::OamData {
            let addr = self.regs[PpuRegister::OamAddr.index()];
            self.oam[addr as usize] = value;
            self.regs[PpuRegister::OamAddr.index()] = addr.wrapping_add(1);
        }
    }

    fn oam_dma(&mut self, page: u8, data: &[u8; 256]) {
        self.oam_dma_page = Some(page);
        let start = self.regs[PpuRegister::OamAddr.index()];
        for (i, &b) in data.iter().enumerate() {
            self.oam[start.wrapping_add(i as u8) as usize] = b;
        }
    }
}
