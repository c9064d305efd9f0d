use std::{
    fs::File,
    io::{Read, Seek, SeekFrom},
    path::{Path, PathBuf},
};

use binrw::BinReaderExt;
use once_cell::unsync::OnceCell;

use crate::{records::SampleHeader, ReadError};

/// Byte offset of the first PCM frame in a sample file. Everything from
/// here to the end of the file is sample data, there is no length field.
const PCM_DATA_OFFSET: u64 = 0x200;

/// One mono recording stored in the proprietary on-disk format.
///
/// The rate and PCM data are decoded on first access and cached for the
/// life of the instance. The path never changes after construction, so the
/// caches never need invalidation.
#[derive(Debug)]
pub struct Sample {
    path: PathBuf,
    short_name: String,
    name: String,
    rate: OnceCell<u16>,
    pcm: OnceCell<Vec<i16>>,
}

impl Sample {
    pub fn new(path: PathBuf, short_name: String, name: String) -> Self {
        Self {
            path,
            short_name,
            name,
            rate: OnceCell::new(),
            pcm: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The on-disk file name the sample was resolved from.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// The logical name from the volume's sample index.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display name, the on-disk name joined to the logical name.
    pub fn full_name(&self) -> String {
        format!("{}-{}", self.short_name, self.name)
    }

    /// Sample rate in Hz from the fixed header field.
    pub fn sample_rate(&self) -> Result<u16, ReadError> {
        self.rate
            .get_or_try_init(|| {
                let mut f = File::open(&self.path)?;
                let header: SampleHeader = f.read_be()?;
                Ok(header.sample_rate)
            })
            .copied()
    }

    /// All PCM frames following the header region, converted to host order.
    pub fn pcm_samples(&self) -> Result<&[i16], ReadError> {
        self.pcm
            .get_or_try_init(|| {
                let mut f = File::open(&self.path)?;
                f.seek(SeekFrom::Start(PCM_DATA_OFFSET))?;
                let mut raw = Vec::new();
                f.read_to_end(&mut raw)?;
                Ok(raw
                    .chunks_exact(2)
                    .map(|frame| i16::from_be_bytes([frame[0], frame[1]]))
                    .collect())
            })
            .map(Vec::as_slice)
    }
}
