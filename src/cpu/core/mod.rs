/*!
core::Cpu - 6502 CPU façade wrapping `CpuState`.

Design
======
- `Cpu` owns a `CpuState` and the `CoreConfig` it was built with.
- Public API exposes construction, reset (with reset-vector validation),
  stepping, register accessors and flag helpers.
- `step` delegates to the generic dispatcher operating on `CpuState`.
*/

use log::{debug, warn};

use crate::bus::Bus;
use crate::config::CoreConfig;
use crate::cpu::state::{CpuState, RESET_VECTOR};
use crate::error::{CoreError, Result};

/// Reset targets in this range can never hold code: registers, expansion
/// space and unbacked static RAM.
const NON_EXECUTABLE: std::ops::RangeInclusive<u16> = 0x2000..=0x7FFF;

#[derive(Debug, Clone, Default)]
pub struct Cpu {
    state: CpuState,
    config: CoreConfig,
}

impl Cpu {
    /// Construct a new CPU with power‑up defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CoreConfig) -> Self {
        Self {
            state: CpuState::new(),
            config,
        }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Return mutable reference to internal state.
    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    /// Return registers to the reset pattern and load PC.
    ///
    /// With validation enabled a malformed reset vector is rejected and the
    /// state is left untouched. See [`Cpu::resolve_entry`].
    pub fn reset(&mut self, bus: &mut Bus<'_>) -> Result<()> {
        let entry = self.resolve_entry(bus)?;
        self.state.reset_to(entry);
        debug!("CPU reset, PC = {:#06X}", entry);
        Ok(())
    }

    /// Address the next reset will start at.
    ///
    /// The configured entry point if one is set, otherwise the vector at
    /// $FFFC/$FFFD. With validation enabled a vector pointing into
    /// $2000-$7FFF fails with `MalformedResetVector`. Only the vector bytes in
    /// the program window are read.
    pub fn resolve_entry(&self, bus: &mut Bus<'_>) -> Result<u16> {
        if let Some(pc) = self.config.entry_point {
            return Ok(pc);
        }
        let target = bus.read_word(RESET_VECTOR);
        if self.config.validate_reset_vector && NON_EXECUTABLE.contains(&target) {
            warn!("reset vector points at {:#06X}, outside executable space", target);
            return Err(CoreError::MalformedResetVector {
                vector: RESET_VECTOR,
                target,
            });
        }
        Ok(target)
    }

    /// Execute one instruction (or interrupt entry) and return its cycles.
    pub fn step(&mut self, bus: &mut Bus<'_>) -> Result<u8> {
        crate::cpu::dispatch::step(&mut self.state, bus)
    }

    /// Convenience: run up to `max_instructions`, stopping at the first error.
    /// Returns the cycles consumed.
    pub fn run(&mut self, bus: &mut Bus<'_>, max_instructions: usize) -> Result<u64> {
        let mut cycles = 0u64;
        for _ in 0..max_instructions {
            cycles += u64::from(self.step(bus)?);
        }
        Ok(cycles)
    }

    // ---------------------------------------------------------------------
    // Register accessors (read)
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a()
    }
    pub fn x(&self) -> u8 {
        self.state.x()
    }
    pub fn y(&self) -> u8 {
        self.state.y()
    }
    pub fn sp(&self) -> u8 {
        self.state.sp()
    }
    pub fn pc(&self) -> u16 {
        self.state.pc()
    }
    pub fn status(&self) -> u8 {
        self.state.status()
    }

    // ---------------------------------------------------------------------
    // Register mutators (write)
    // ---------------------------------------------------------------------
    pub fn set_a(&mut self, v: u8) {
        self.state.set_a(v);
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.set_x(v);
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.set_y(v);
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.set_sp(v);
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.set_pc(v);
    }
    pub fn set_status(&mut self, v: u8) {
        self.state.set_status(v);
    }

    // ---------------------------------------------------------------------
    // Flag helpers
    // ---------------------------------------------------------------------
    pub fn set_flag(&mut self, mask: u8, on: bool) {
        self.state.assign_flag(mask, on);
    }

    pub fn get_flag(&self, mask: u8) -> bool {
        self.state.is_flag_set(mask)
    }
}

// -------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------
