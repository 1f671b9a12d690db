/*!
interfaces: register surfaces the bus forwards peripheral traffic to.

The bus owns no peripheral state. It decodes an address into a register and
hands the access to one of these traits; side effects (status clears, address
latches, DMA) belong to the implementor.

Usage:
- `PictureUnit` receives the eight $2000-$2007 registers (after stride-8
  mirroring) and the OAM DMA trigger written at $4014.
- `AudioUnit` receives $4000-$4017 except $4014, including the I/O ports at
  $4016/$4017 that share the range.
*/

/// The eight CPU-visible picture-unit registers, indexed by `address & 7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PpuRegister {
    Ctrl,
    Mask,
    Status,
    OamAddr,
    OamData,
    Scroll,
    Addr,
    Data,
}

impl PpuRegister {
    pub const ALL: [PpuRegister; 8] = [
        PpuRegister::Ctrl,
        PpuRegister::Mask,
        PpuRegister::Status,
        PpuRegister::OamAddr,
        PpuRegister::OamData,
        PpuRegister::Scroll,
        PpuRegister::Addr,
        PpuRegister::Data,
    ];

    /// Decode any address in $2000-$3FFF (mirrored every 8 bytes).
    #[inline]
    pub fn from_address(addr: u16) -> Self {
        Self::ALL[(addr & 0x0007) as usize]
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// STATUS, OAMDATA and DATA return data; the rest are write-only.
    #[inline]
    pub fn is_readable(self) -> bool {
        matches!(
            self,
            PpuRegister::Status | PpuRegister::OamData | PpuRegister::Data
        )
    }

    /// STATUS is the only read-only register.
    #[inline]
    pub fn is_writable(self) -> bool {
        self != PpuRegister::Status
    }
}

/// Register surface of the picture unit.
pub trait PictureUnit {
    /// Read a readable register. Side effects are the implementor's.
    fn read_register(&mut self, reg: PpuRegister) -> u8;

    /// Write a writable register.
    fn write_register(&mut self, reg: PpuRegister, value: u8);

    /// OAM DMA triggered by a write of `page` to $4014. `data` holds the bytes
    /// at $XX00-$XXFF as seen by the CPU bus.
    fn oam_dma(&mut self, page: u8, data: &[u8; 256]);
}

/// Register surface of the audio / I/O unit ($4000-$4017, minus $4014).
pub trait AudioUnit {
    fn read_register(&mut self, addr: u16) -> u8;

    fn write_register(&mut self, addr: u16, value: u8);
}
