use bitflags::bitflags;

bitflags! {
    /// CTRL bits with modeled behavior; the rest of the register is
    /// plain storage.
    pub struct Ctrl: u32 {
        const SFTRST  = 1 << 31;
        const CLKGATE = 1 << 30;
    }
}

/// Edge detector for CTRL writes. A write that raises `SFTRST` against
/// the previously stored value latches `CLKGATE` into the result,
/// acknowledging the clock-gate request; every other write is a plain
/// overwrite.
pub fn apply_write(old: u32, new: u32) -> u32 {
    let was = Ctrl::from_bits_truncate(old);
    let req = Ctrl::from_bits_truncate(new);

    if req.contains(Ctrl::SFTRST) && !was.contains(Ctrl::SFTRST) {
        new | Ctrl::CLKGATE.bits()
    } else {
        new
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_write, Ctrl};

    #[test]
    fn rising_sftrst_latches_clkgate() {
        assert_eq!(
            apply_write(0x0000_1234, 0x8000_1234),
            0x8000_1234 | Ctrl::CLKGATE.bits()
        );
    }

    #[test]
    fn held_sftrst_is_a_plain_overwrite() {
        assert_eq!(apply_write(0xC000_0000, 0x8000_0000), 0x8000_0000);
    }

    #[test]
    fn clearing_sftrst_keeps_written_bits_only() {
        assert_eq!(apply_write(0xC000_0000, 0x4000_0000), 0x4000_0000);
        assert_eq!(apply_write(0xC000_0000, 0x0000_0000), 0x0000_0000);
    }

    #[test]
    fn low_bits_never_trigger_the_latch() {
        assert_eq!(apply_write(0x0000_0000, 0x7FFF_FFFF), 0x7FFF_FFFF);
    }
}
