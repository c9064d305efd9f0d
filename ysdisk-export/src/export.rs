use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use log::info;
use ysdisk::{sample::Sample, Drive, Volume};

/// File name of the per-volume bank listing report.
const BANK_REPORT_NAME: &str = "sample_bank.txt";

/// Writes the whole drive below `dest`: one directory per disk, one per
/// volume, one WAV per sample plus the volume's bank listing.
pub fn export_drive(drive: &Drive, dest: &Path) -> anyhow::Result<()> {
    let dest = dest.join(drive.name());
    fs::create_dir_all(&dest)?;
    // resolve the full tree first so the progress total is exact and
    // structural errors surface before anything is written
    let mut total = 0;
    for disk in drive.disks()? {
        for volume in disk.volumes()? {
            total += volume.samples()?.len();
        }
    }
    info!("exporting {total} samples to {dest:?}");
    let mut progress = Progress::new(total);
    for disk in drive.disks()? {
        let disk_dest = dest.join(disk.full_name()?);
        fs::create_dir(&disk_dest)?;
        for volume in disk.volumes()? {
            let volume_dest = disk_dest.join(volume.full_name());
            fs::create_dir(&volume_dest)?;
            write_bank_report(volume, &volume_dest.join(BANK_REPORT_NAME))?;
            for sample in volume.samples()? {
                let sample_dest = volume_dest.join(format!("{}.wav", sample.name()));
                progress.step(&sample_dest);
                write_wav(sample, &sample_dest)
                    .with_context(|| format!("error writing {sample_dest:?}"))?;
            }
        }
    }
    progress.finish();
    Ok(())
}

/// Dumps the volume's bank name triples as an indented JSON listing.
fn write_bank_report(volume: &Volume, path: &Path) -> anyhow::Result<()> {
    let triples: Vec<[&str; 3]> = volume
        .bank_entries()?
        .iter()
        .map(|bank| [bank.primary.as_str(), bank.left.as_str(), bank.right.as_str()])
        .collect();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &triples)?;
    writer.flush()?;
    Ok(())
}

/// Writes one sample as a mono 16 bit PCM WAV file.
fn write_wav(sample: &Sample, path: &Path) -> anyhow::Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: sample.sample_rate()?.into(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &frame in sample.pcm_samples()? {
        writer.write_sample(frame)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Single-line conversion counter, rewritten in place on stdout.
struct Progress {
    total: usize,
    done: usize,
    last_len: usize,
}

impl Progress {
    fn new(total: usize) -> Self {
        Self {
            total,
            done: 0,
            last_len: 0,
        }
    }

    fn step(&mut self, path: &Path) {
        self.done += 1;
        let percent = if self.total == 0 {
            100
        } else {
            self.done * 100 / self.total
        };
        let line = format!(
            "Converting {}/{} ({percent}%): {path:?}",
            self.done, self.total
        );
        let mut stdout = io::stdout();
        let _ = write!(stdout, "\r{:width$}\r{line}", "", width = self.last_len);
        let _ = stdout.flush();
        self.last_len = line.len();
    }

    fn finish(&mut self) {
        if self.last_len > 0 {
            println!();
        }
    }
}
