//! Embedded default palette
//!
//! The six classic peg colors, compiled into the binary.

/// Default swatches as (name, 0xRRGGBB)
pub const DEFAULT_SWATCHES: &[(&str, u32)] = &[
    ("rose", 0xEF_47_6F),
    ("yellow", 0xFF_D1_66),
    ("green", 0x06_D6_A0),
    ("blue", 0x11_8A_B2),
    ("violet", 0x6A_4C_93),
    ("orange", 0xFF_9F_1C),
];

/// Number of default swatches
pub const DEFAULT_COUNT: usize = 6;
