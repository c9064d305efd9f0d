use binrw::binrw;

// All on-disk structures are raw byte layouts at fixed offsets, modelled
// here with explicit pads. Name fields stay raw bytes, cleaning happens at
// the call sites.

/// One record of a `0000` directory index file.
#[binrw]
#[brw(big)]
#[derive(Debug, Default, Clone)]
pub struct IndexRecord {
    #[brw(pad_before = 1)]
    pub name: [u8; 16],
    #[brw(pad_before = 1)]
    pub path: [u8; 14],
}

impl IndexRecord {
    pub fn byte_len() -> u32 {
        32
    }
}

/// The header region of a sample file, up to and including the rate field.
/// PCM data starts later at a fixed offset, see [`crate::sample`].
#[binrw]
#[brw(big)]
#[derive(Debug, Default, Clone)]
pub struct SampleHeader {
    #[brw(pad_before = 0x28)]
    pub sample_rate: u16,
}

impl SampleHeader {
    pub fn byte_len() -> u32 {
        0x2A
    }
}

/// The name fields of a bank descriptor file: the mono sample reference and
/// the left/right pair, right directly follows left.
#[binrw]
#[brw(big)]
#[derive(Debug, Default, Clone)]
pub struct BankRecord {
    #[brw(pad_before = 0x32)]
    pub primary: [u8; 16],
    #[brw(pad_before = 0x36)]
    pub left: [u8; 16],
    pub right: [u8; 16],
}

impl BankRecord {
    pub fn byte_len() -> u32 {
        0x98
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use binrw::BinWriterExt;

    use crate::records::{BankRecord, IndexRecord, SampleHeader};

    #[test]
    pub fn check_byte_lens() {
        let mut buf = Vec::new();

        let record = IndexRecord::default();
        Cursor::new(&mut buf).write_be(&record).unwrap();
        assert_eq!(IndexRecord::byte_len() as usize, buf.len());

        buf.clear();
        let header = SampleHeader::default();
        Cursor::new(&mut buf).write_be(&header).unwrap();
        assert_eq!(SampleHeader::byte_len() as usize, buf.len());

        buf.clear();
        let bank = BankRecord::default();
        Cursor::new(&mut buf).write_be(&bank).unwrap();
        assert_eq!(BankRecord::byte_len() as usize, buf.len());
    }
}
