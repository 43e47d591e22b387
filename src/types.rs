use std::fmt::{self, Display};

/// Size of a single guest access, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessWidth {
    Byte = 1,
    Half = 2,
    Word = 4,
}

impl AccessWidth {
    pub fn from_size(size: u32) -> Option<AccessWidth> {
        match size {
            1 => Some(AccessWidth::Byte),
            2 => Some(AccessWidth::Half),
            4 => Some(AccessWidth::Word),
            _ => None,
        }
    }

    pub const fn bytes(self) -> u32 {
        self as u32
    }

    /// Merge `value` into `cell` at the byte lane selected by the low
    /// offset bits, leaving the lanes outside the access untouched.
    /// Lanes extending past bit 31 are clamped, never rejected.
    pub fn merge(self, cell: u32, offset: u32, value: u32) -> u32 {
        let shift = (offset & 0x3) * 8;
        let mask = ((1u64 << (8 * self.bytes())) - 1) << shift;
        ((cell as u64 & !mask) | (((value as u64) << shift) & mask)) as u32
    }
}

/// A guest access whose byte offset decodes to no register. Non-fatal:
/// the access becomes a no-op and the caller continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadOffset(pub u32);

impl Display for BadOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bad offset {:#06x}", self.0)
    }
}
