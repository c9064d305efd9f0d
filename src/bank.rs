use std::{
    fs::{self, File},
    io::BufReader,
    path::Path,
};

use binrw::BinReaderExt;

use crate::{names::printable_strip, records::BankRecord, ReadError};

/// Bank descriptors are the `F`-prefixed files of an `SBNK` directory.
const BANK_FILE_PREFIX: char = 'F';

/// One bank descriptor: up to three samples referenced by logical name,
/// the mono reference plus a left/right pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankEntry {
    pub primary: String,
    pub left: String,
    pub right: String,
}

impl BankEntry {
    /// Decodes the name fields of one bank descriptor file.
    pub fn from_file(path: &Path) -> Result<Self, ReadError> {
        let record: BankRecord = BufReader::new(File::open(path)?).read_be()?;
        Ok(Self {
            primary: printable_strip(&record.primary),
            left: printable_strip(&record.left),
            right: printable_strip(&record.right),
        })
    }
}

/// Reads all bank descriptors of `sbnk_dir`, ordered by file name.
///
/// A volume without an `SBNK` directory simply has no banks; anything else
/// that keeps the directory or a descriptor from being read is an error.
pub fn read_bank_entries(sbnk_dir: &Path) -> Result<Vec<BankEntry>, ReadError> {
    if !sbnk_dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut bank_files = Vec::new();
    for entry in fs::read_dir(sbnk_dir)? {
        let entry = entry?;
        if entry
            .file_name()
            .to_str()
            .is_some_and(|n| n.starts_with(BANK_FILE_PREFIX))
        {
            bank_files.push(entry.path());
        }
    }
    bank_files.sort();
    bank_files
        .iter()
        .map(|path| BankEntry::from_file(path))
        .collect()
}

#[cfg(test)]
mod test {
    use tempfile::TempDir;

    use super::*;

    fn field(name: &str, pad: u8) -> [u8; 16] {
        let mut raw = [pad; 16];
        raw[..name.len()].copy_from_slice(name.as_bytes());
        raw
    }

    fn write_bank_file(path: &Path, primary: &str, left: &str, right: &str) {
        let mut raw = vec![0u8; 0x32];
        raw.extend_from_slice(&field(primary, 0));
        raw.resize(0x78, 0);
        raw.extend_from_slice(&field(left, b' '));
        raw.extend_from_slice(&field(right, b' '));
        fs::write(path, raw).unwrap();
    }

    #[test]
    fn decodes_name_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("F0001");
        write_bank_file(&path, "KICK", "KICK_L", "KICK_R");
        assert_eq!(
            BankEntry::from_file(&path).unwrap(),
            BankEntry {
                primary: "KICK".into(),
                left: "KICK_L".into(),
                right: "KICK_R".into(),
            }
        );
    }

    #[test]
    fn only_f_prefixed_files_are_descriptors() {
        let dir = TempDir::new().unwrap();
        write_bank_file(&dir.path().join("F0001"), "KICK", "", "");
        fs::write(dir.path().join("0000"), [0u8; 16]).unwrap();
        fs::write(dir.path().join("G0001"), [0u8; 0x98]).unwrap();
        let entries = read_bank_entries(dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].primary, "KICK");
    }

    #[test]
    fn entries_are_ordered_by_file_name() {
        let dir = TempDir::new().unwrap();
        write_bank_file(&dir.path().join("F0002"), "SNARE", "", "");
        write_bank_file(&dir.path().join("F0001"), "KICK", "", "");
        let entries = read_bank_entries(dir.path()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.primary.as_str()).collect();
        assert_eq!(names, ["KICK", "SNARE"]);
    }

    #[test]
    fn missing_bank_dir_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let entries = read_bank_entries(&dir.path().join("SBNK")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn truncated_descriptor_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("F0001");
        fs::write(&path, [0u8; 0x40]).unwrap();
        assert!(BankEntry::from_file(&path).is_err());
    }
}
