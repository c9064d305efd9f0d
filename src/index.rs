use std::{collections::HashMap, fs, io::Cursor, path::Path};

use binrw::BinReaderExt;

use crate::{
    names::{clean_name, printable_strip},
    records::IndexRecord,
    ReadError,
};

/// Every indexed directory stores its records under this name.
pub const INDEX_FILE_NAME: &str = "0000";

/// Reads the index file of `dir` into a map from on-disk short name to
/// logical name.
///
/// Records are decoded until the stream runs out; a trailing chunk shorter
/// than one record is the end-of-stream marker, not an error.
pub fn read_index(dir: &Path) -> Result<HashMap<String, String>, ReadError> {
    let data = fs::read(dir.join(INDEX_FILE_NAME))?;
    let mut cursor = Cursor::new(&data);
    let mut mapping = HashMap::new();
    while data.len() as u64 - cursor.position() >= IndexRecord::byte_len() as u64 {
        let record: IndexRecord = cursor.read_be()?;
        mapping.insert(printable_strip(&record.path), clean_name(&record.name));
    }
    Ok(mapping)
}
