//! Core configuration.

use crate::cartridge::PRG_PAGE_SIZE;

/// Power-on configuration for a [`System`](crate::System).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreConfig {
    /// Size in bytes of one program-storage page. Defaults to 16 KiB.
    pub page_size: usize,
    /// Bank mapped at `$8000` after power-on.
    pub initial_bank: u16,
    /// Start execution here instead of at the reset vector.
    pub entry_point: Option<u16>,
    /// Reject reset vectors that point into register/expansion space.
    pub validate_reset_vector: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            page_size: PRG_PAGE_SIZE,
            initial_bank: 0,
            entry_point: None,
            validate_reset_vector: true,
        }
    }
}

impl CoreConfig {
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_initial_bank(mut self, bank: u16) -> Self {
        self.initial_bank = bank;
        self
    }

    #[must_use]
    pub fn with_entry_point(mut self, pc: u16) -> Self {
        self.entry_point = Some(pc);
        self
    }

    #[must_use]
    pub fn without_vector_validation(mut self) -> Self {
        self.validate_reset_vector = false;
        self
    }
}
