#![doc = r#"
rp2a03: the NES CPU core.

A 6502 instruction engine without decimal mode, wired to the console's CPU
memory map: 2 KiB of mirrored RAM, the picture-unit and audio/I-O register
windows, and a banked 32 KiB program window.

Modules:
- apu: stub audio register file implementing `bus::AudioUnit`
- bus: CPU address decoder, RAM, interrupt lines and cycle counter
- cartridge: program image, bank selection and the iNES loader
- config: power-on configuration
- cpu: 6502 core (facade + state + table + dispatch + execute modules)
- error: `CoreError` and the crate `Result`
- ppu: stub picture register file implementing `bus::PictureUnit`
- snapshot: deterministic machine snapshots and their byte layout
- system: CPU + bus for one session

The library never installs a logger; hosts choose one for the `log` facade.
In tests, shared builders are available under `crate::test_utils`.
"#]

pub mod apu;
pub mod bus;
pub mod cartridge;
pub mod config;
pub mod cpu;
pub mod error;
pub mod ppu;
pub mod snapshot;
pub mod system;

// Re-export commonly used types at the crate root for convenience.
pub use bus::Bus;
pub use cartridge::CartridgeImage;
pub use config::CoreConfig;
pub use cpu::Cpu;
pub use error::{CoreError, Result};
pub use snapshot::Snapshot;
pub use system::System;

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
