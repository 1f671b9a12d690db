#![doc = r#"
Bus module: CPU memory map façade and focused submodules.

Modules and responsibilities
- Bus: owns system RAM, the bank selector, the interrupt lines and the cycle
  counter; borrows the cartridge image and both peripheral register surfaces
  for the lifetime of the session.
- cpu_interface: CPU-visible address decoder (read/write/read_word).
- ppu_registers: $2000-$3FFF window (stride-8 mirroring, readable/writable rules).
- apu_registers: $4000-$4017 window and the $4014 OAM DMA trigger.
- ram: 2 KiB internal RAM with mirroring.
- interfaces: `PictureUnit` / `AudioUnit` register surfaces and `PpuRegister`.

The bus keeps no peripheral state: register traffic is forwarded verbatim.
"#]

use log::{debug, warn};

use crate::cartridge::{BankSelector, CartridgeImage};
use crate::error::Result;

pub mod apu_registers;
pub mod cpu_interface;
pub mod interfaces;
pub mod ppu_registers;
pub mod ram;


pub use interfaces::{AudioUnit, PictureUnit, PpuRegister};
pub use ram::{CPU_RAM_SIZE, Ram};

pub struct Bus<'a> {
    // 2KB CPU RAM
    ram: Ram,

    // Borrowed collaborators
    ppu: &'a mut dyn PictureUnit,
    apu: &'a mut dyn AudioUnit,
    cartridge: &'a CartridgeImage,

    // Program window bank
    bank: BankSelector,

    // CPU cycles reported by completed steps
    cycles: u64,

    // Interrupt lines
    nmi_pending: bool,
    irq_line: bool,
}

impl std::fmt::Debug for Bus<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bus")
            .field("cartridge", self.cartridge)
            .field("bank", &self.bank)
            .field("cycles", &self.cycles)
            .field("nmi_pending", &self.nmi_pending)
            .field("irq_line", &self.irq_line)
            .finish()
    }
}

impl<'a> Bus<'a> {
    /// Build a bus over a cartridge and two register surfaces, bank 0 mapped.
    pub fn new(
        cartridge: &'a CartridgeImage,
        ppu: &'a mut dyn PictureUnit,
        apu: &'a mut dyn AudioUnit,
    ) -> Self {
        Self {
            ram: Ram::new(),
            ppu,
            apu,
            cartridge,
            bank: BankSelector::default(),
            cycles: 0,
            nmi_pending: false,
            irq_line: false,
        }
    }

    /// Clear RAM, interrupt lines and the cycle counter. The bank is kept.
    pub fn reset(&mut self) {
        self.ram.reset();
        self.nmi_pending = false;
        self.irq_line = false;
        self.cycles = 0;
    }

    // -----------------------------
    // CPU-visible memory interface
    // -----------------------------

    #[inline]
    pub fn read(&mut self, addr: u16) -> u8 {
        cpu_interface::cpu_read(self, addr)
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        cpu_interface::cpu_write(self, addr, value);
    }

    /// Little-endian word read used for vectors.
    #[inline]
    pub fn read_word(&mut self, addr: u16) -> u16 {
        cpu_interface::cpu_read_word(self, addr)
    }

    // -----------------------------
    // Banking
    // -----------------------------

    /// Map `bank` at $8000. Rejected banks leave the current mapping in place.
    pub fn select_bank(&mut self, bank: u16) -> Result<()> {
        let selector = BankSelector::new(bank);
        if let Err(e) = self.cartridge.check_bank(selector) {
            warn!("rejected bank selection: {}", e);
            return Err(e);
        }
        debug!("bank {} mapped at $8000", bank);
        self.bank = selector;
        Ok(())
    }

    pub fn bank(&self) -> BankSelector {
        self.bank
    }

    pub fn cartridge(&self) -> &CartridgeImage {
        self.cartridge
    }

    // -----------------------------
    // RAM access (snapshots, debuggers)
    // -----------------------------

    pub fn ram(&self) -> &Ram {
        &self.ram
    }

    pub fn ram_mut(&mut self) -> &mut Ram {
        &mut self.ram
    }

    // -----------------------------
    // Interrupt lines
    // -----------------------------

    /// Latch a non-maskable interrupt; serviced at the next step boundary.
    pub fn signal_nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Drive the (level-triggered) IRQ line.
    pub fn set_irq_line(&mut self, asserted: bool) {
        self.irq_line = asserted;
    }

    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    pub fn irq_line(&self) -> bool {
        self.irq_line
    }

    /// Consume a pending NMI.
    pub(crate) fn take_nmi(&mut self) -> bool {
        std::mem::take(&mut self.nmi_pending)
    }

    // -----------------------------
    // Timing
    // -----------------------------

    #[inline]
    pub(crate) fn add_cycles(&mut self, cycles: u8) {
        self.cycles = self.cycles.wrapping_add(u64::from(cycles));
    }

    pub fn total_cycles(&self) -> u64 {
        self.cycles
    }

    // -----------------------------
    // Snapshot plumbing
    // -----------------------------

    pub(crate) fn restore_lines(&mut self, nmi_pending: bool, irq_line: bool, cycles: u64) {
        self.nmi_pending = nmi_pending;
        self.irq_line = irq_line;
        self.cycles = cycles;
    }
}
