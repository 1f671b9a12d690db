//! System integration.
//!
//! [`System`] pairs a [`Cpu`] with a [`Bus`] for one session. The cartridge
//! image and both peripheral register surfaces are borrowed for the
//! system's lifetime, so nothing else can touch them while it runs.

use log::{debug, warn};

use crate::bus::{AudioUnit, Bus, PictureUnit};
use crate::cartridge::CartridgeImage;
use crate::config::CoreConfig;
use crate::cpu::Cpu;
use crate::error::{CoreError, Result};
use crate::snapshot::Snapshot;

#[derive(Debug)]
pub struct System<'a> {
    cpu: Cpu,
    bus: Bus<'a>,
}

impl<'a> System<'a> {
    /// Wire up a bus, map the configured bank and run the reset sequence.
    ///
    /// # Errors
    ///
    /// Fails when the image was built with a different page size, when the
    /// initial bank is out of range, or when the reset vector is malformed.
    pub fn power_on(
        config: CoreConfig,
        cartridge: &'a CartridgeImage,
        ppu: &'a mut dyn PictureUnit,
        apu: &'a mut dyn AudioUnit,
    ) -> Result<Self> {
        if cartridge.page_size() != config.page_size {
            warn!(
                "configured page size {:#X} does not match image page size {:#X}",
                config.page_size,
                cartridge.page_size()
            );
            return Err(CoreError::InvalidPageSize(config.page_size));
        }

        let mut bus = Bus::new(cartridge, ppu, apu);
        bus.select_bank(config.initial_bank)?;

        let mut cpu = Cpu::with_config(config);
        cpu.reset(&mut bus)?;
        debug!("power on: {:?}", cartridge);

        Ok(Self { cpu, bus })
    }

    /// Execute one instruction or interrupt entry.
    pub fn step(&mut self) -> Result<u8> {
        self.cpu.step(&mut self.bus)
    }

    /// Execute up to `max_instructions`, stopping at the first error.
    pub fn run(&mut self, max_instructions: usize) -> Result<u64> {
        self.cpu.run(&mut self.bus, max_instructions)
    }

    pub fn read_bus(&mut self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    pub fn write_bus(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    /// Clear RAM, interrupt lines and cycles, then rerun the reset sequence.
    /// The mapped bank is kept.
    ///
    /// The reset vector is validated before anything is cleared; on error
    /// the machine is unchanged.
    pub fn reset(&mut self) -> Result<()> {
        let entry = self.cpu.resolve_entry(&mut self.bus)?;
        self.bus.reset();
        self.cpu.state_mut().reset_to(entry);
        debug!("system reset, PC = {:#06X}", entry);
        Ok(())
    }

    pub fn request_nmi(&mut self) {
        self.bus.signal_nmi();
    }

    pub fn set_irq_line(&mut self, asserted: bool) {
        self.bus.set_irq_line(asserted);
    }

    pub fn select_bank(&mut self, bank: u16) -> Result<()> {
        self.bus.select_bank(bank)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cpu: *self.cpu.state(),
            bank: self.bus.bank().index(),
            nmi_pending: self.bus.nmi_pending(),
            irq_line: self.bus.irq_line(),
            cycles: self.bus.total_cycles(),
            ram: *self.bus.ram().contents(),
        }
    }

    /// Restore a snapshot taken from a system over the same image.
    ///
    /// The bank is validated first; on error nothing is changed.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.bus.select_bank(snapshot.bank)?;
        *self.cpu.state_mut() = snapshot.cpu;
        self.bus.ram_mut().load(&snapshot.ram);
        self.bus
            .restore_lines(snapshot.nmi_pending, snapshot.irq_line, snapshot.cycles);
        debug!("restored snapshot at cycle {}", snapshot.cycles);
        Ok(())
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &Bus<'a> {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus<'a> {
        &mut self.bus
    }
}
