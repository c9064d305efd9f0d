use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use once_cell::unsync::OnceCell;

use crate::{
    bank::{read_bank_entries, BankEntry},
    index::read_index,
    names::clean_name,
    sample::Sample,
    ReadError,
};

/// Index entry value marking the file that stores the disk's logical name.
const DISK_NAME_MARKER: &str = "_DSKNAME";
/// Volume subdirectory holding the sample files and their own index.
const SAMPLE_DIR_NAME: &str = "SMPL";
/// Volume subdirectory holding the bank descriptor files.
const BANK_DIR_NAME: &str = "SBNK";

/// The root of one sampler storage medium, a directory of disk directories.
#[derive(Debug)]
pub struct Drive {
    path: PathBuf,
    disks: OnceCell<Vec<Disk>>,
}

impl Drive {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            disks: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The drive's directory name, trailing separators ignored.
    pub fn name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    /// All disks of the drive, ordered by directory name. Non-directory
    /// entries and non UTF-8 names are skipped.
    pub fn disks(&self) -> Result<&[Disk], ReadError> {
        self.disks
            .get_or_try_init(|| {
                let mut disks = Vec::new();
                for entry in fs::read_dir(&self.path)? {
                    let entry = entry?;
                    if !entry.metadata()?.is_dir() {
                        continue;
                    }
                    if let Some(name) = entry.file_name().to_str() {
                        disks.push(Disk::new(entry.path(), name.to_string()));
                    }
                }
                disks.sort_by(|a, b| a.short_name.cmp(&b.short_name));
                Ok(disks)
            })
            .map(Vec::as_slice)
    }
}

/// One sample disk within a drive. Its directory carries an index file
/// mapping every entry to a logical name, one of which is the disk name
/// marker; all others denote volumes.
#[derive(Debug)]
pub struct Disk {
    path: PathBuf,
    short_name: String,
    index: OnceCell<HashMap<String, String>>,
    name: OnceCell<String>,
    volumes: OnceCell<Vec<Volume>>,
}

impl Disk {
    fn new(path: PathBuf, short_name: String) -> Self {
        Self {
            path,
            short_name,
            index: OnceCell::new(),
            name: OnceCell::new(),
            volumes: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The on-disk directory name.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Mapping from on-disk entry name to logical name for this disk.
    pub fn index(&self) -> Result<&HashMap<String, String>, ReadError> {
        self.index.get_or_try_init(|| read_index(&self.path))
    }

    /// The disk's logical name, read from the file its marker index entry
    /// points at. A missing marker entry or unreadable marker file reads as
    /// the empty string.
    pub fn name(&self) -> Result<&str, ReadError> {
        self.name
            .get_or_try_init(|| {
                let marker_file = self
                    .index()?
                    .iter()
                    .find(|(_, name)| name.as_str() == DISK_NAME_MARKER)
                    .map(|(key, _)| key.clone());
                let name = match marker_file {
                    Some(file) => match fs::read(self.path.join(file)) {
                        Ok(raw) => clean_name(&raw),
                        Err(_) => String::new(),
                    },
                    None => String::new(),
                };
                Ok(name)
            })
            .map(String::as_str)
    }

    /// Display name: the directory name joined to the logical name.
    pub fn full_name(&self) -> Result<String, ReadError> {
        Ok(format!("{}-{}", self.short_name, self.name()?))
    }

    /// All volumes of the disk, ordered by on-disk entry name.
    pub fn volumes(&self) -> Result<&[Volume], ReadError> {
        self.volumes
            .get_or_try_init(|| {
                let mut entries: Vec<(&String, &String)> = self
                    .index()?
                    .iter()
                    .filter(|(_, name)| name.as_str() != DISK_NAME_MARKER)
                    .collect();
                entries.sort();
                Ok(entries
                    .into_iter()
                    .map(|(key, name)| {
                        Volume::new(self.path.join(key), key.clone(), name.clone())
                    })
                    .collect())
            })
            .map(Vec::as_slice)
    }
}

/// One named collection of samples and banks within a disk.
#[derive(Debug)]
pub struct Volume {
    path: PathBuf,
    short_name: String,
    name: String,
    sample_index: OnceCell<HashMap<String, String>>,
    samples: OnceCell<Vec<Sample>>,
    banks: OnceCell<Vec<BankEntry>>,
}

impl Volume {
    fn new(path: PathBuf, short_name: String, name: String) -> Self {
        Self {
            path,
            short_name,
            name,
            sample_index: OnceCell::new(),
            samples: OnceCell::new(),
            banks: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The on-disk directory name, which is also the volume's index key in
    /// the disk.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// The logical name from the disk index.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display name: the on-disk name joined to the logical name.
    pub fn full_name(&self) -> String {
        format!("{}-{}", self.short_name, self.name)
    }

    /// Path of the sample subdirectory.
    pub fn sample_dir_path(&self) -> PathBuf {
        self.path.join(SAMPLE_DIR_NAME)
    }

    /// Mapping from on-disk sample file name to logical sample name.
    pub fn sample_index(&self) -> Result<&HashMap<String, String>, ReadError> {
        self.sample_index
            .get_or_try_init(|| read_index(&self.sample_dir_path()))
    }

    /// All samples of the volume, ordered by on-disk file name.
    pub fn samples(&self) -> Result<&[Sample], ReadError> {
        self.samples
            .get_or_try_init(|| {
                let sample_dir = self.sample_dir_path();
                let mut entries: Vec<(&String, &String)> =
                    self.sample_index()?.iter().collect();
                entries.sort();
                Ok(entries
                    .into_iter()
                    .map(|(key, name)| {
                        Sample::new(sample_dir.join(key), key.clone(), name.clone())
                    })
                    .collect())
            })
            .map(Vec::as_slice)
    }

    /// All bank entries of the volume, ordered by bank file name.
    pub fn bank_entries(&self) -> Result<&[BankEntry], ReadError> {
        self.banks
            .get_or_try_init(|| read_bank_entries(&self.path.join(BANK_DIR_NAME)))
            .map(Vec::as_slice)
    }
}
