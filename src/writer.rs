use std::collections::HashMap;
use std::io::Write;
use std::thread;
use std::time::Duration;

use serde::Serialize;

use crate::generator::LineGenerator;
use crate::logger::AppendFile;
use crate::model::entry::Level;
use crate::model::error::GeneratorError;

#[derive(Debug, Serialize)]
struct LevelCount {
    level: Level,
    count: u64,
}

pub struct LogWriter {
    generator: LineGenerator,
    target: AppendFile,
    tally: HashMap<Level, u64>,
}

impl LogWriter {

    pub fn new(target: AppendFile, generator: LineGenerator) -> Self {
        LogWriter {
            generator,
            target,
            tally: HashMap::new(),
        }
    }

    /// Generates `count` entries and appends each one to the target file,
    /// reporting progress after every write and sleeping `delay` in between.
    /// There is no sleep after the last entry, so the run returns as soon as
    /// it is written. Stops at the first failed write; lines already written
    /// stay in place.
    pub fn write_logs<W: Write>(
        &mut self,
        count: u64,
        delay: Duration,
        progress: &mut W,
    ) -> Result<(), GeneratorError> {
        writeln!(
            progress,
            "Starting to write {} log entries to {}",
            count,
            self.target.path().display()
        )?;
        tracing::info!(
            path = %self.target.path().display(),
            count,
            ?delay,
            "writing log entries"
        );

        for i in 1..=count {
            let entry = self.generator.next_entry();

            if let Err(err) = self.target.append(&entry.to_string()) {
                tracing::debug!(entry = i, %err, "append failed");
                return Err(err.into());
            }
            tracing::debug!(entry = i, level = %entry.level, "appended");
            *self.tally.entry(entry.level).or_insert(0) += 1;

            writeln!(progress, "Written log entry {}/{}", i, count)?;
            progress.flush()?;

            if i < count && !delay.is_zero() {
                thread::sleep(delay);
            }
        }

        tracing::info!(written = self.written(), "finished writing log entries");
        Ok(())
    }

    pub fn count_for(&self, level: Level) -> u64 {
        self.tally.get(&level).copied().unwrap_or(0)
    }

    pub fn written(&self) -> u64 {
        self.tally.values().sum()
    }

    /// Writes a `level,count` CSV table, one row per level in declaration order.
    pub fn output_summary<W: Write>(&self, out: W) -> Result<(), GeneratorError> {
        let mut writer = csv::Writer::from_writer(out);

        for level in Level::ALL {
            writer.serialize(LevelCount {
                level,
                count: self.count_for(level),
            })?;
        }

        writer.flush()?;
        Ok(())
    }
}
