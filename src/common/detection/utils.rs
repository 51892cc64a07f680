//! Constants shared by the detection and container code.

/// Magic number at the start of every compound file.
pub const OLE2_SIGNATURE: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
