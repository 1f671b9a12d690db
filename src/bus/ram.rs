/*!
RAM module: the 2 KiB CPU RAM with mirrored access.

CPU address map for internal RAM:
- $0000-$07FF: 2 KiB internal RAM
- $0800-$1FFF: Mirrors of $0000-$07FF (mask with & 0x07FF)

Owned by the Bus and reached through the CPU-visible address dispatcher.
*/

/// Size of CPU internal RAM (in bytes).
pub const CPU_RAM_SIZE: usize = 0x0800;

/// CPU internal RAM with mirrored access helpers.
///
/// Callers pass CPU addresses; the mask down to the physical range happens here.
#[derive(Clone, PartialEq, Eq)]
pub struct Ram {
    data: [u8; CPU_RAM_SIZE],
}

impl std::fmt::Debug for Ram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ram").field("size", &CPU_RAM_SIZE).finish()
    }
}

impl Default for Ram {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Ram {
    /// Create a new RAM instance initialized to 0.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: [0; CPU_RAM_SIZE],
        }
    }

    /// Clear RAM contents to 0.
    #[inline]
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    /// Read a byte from $0000-$1FFF, applying 2 KiB mirroring.
    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.data[Self::mirror_index(addr)]
    }

    /// Write a byte to $0000-$1FFF, applying 2 KiB mirroring.
    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.data[Self::mirror_index(addr)] = value;
    }

    #[inline]
    pub fn contents(&self) -> &[u8; CPU_RAM_SIZE] {
        &self.data
    }

    /// Overwrite the whole RAM (snapshot restore).
    #[inline]
    pub fn load(&mut self, contents: &[u8; CPU_RAM_SIZE]) {
        self.data.copy_from_slice(contents);
    }

    /// Compute the physical RAM index for a CPU address using 2 KiB mirroring.
    #[inline]
    pub fn mirror_index(addr: u16) -> usize {
        (addr as usize) & (CPU_RAM_SIZE - 1)
    }
}
