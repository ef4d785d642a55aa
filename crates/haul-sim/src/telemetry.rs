//! CSV telemetry: one row per agent per tick.
//!
//! Output columns: `tick, agent_id, mode, carried, x, y`.
//!
//! Observer hooks cannot return errors, so write failures are parked
//! internally; callers drain them with [`CsvTelemetry::take_error`] after
//! the run (matching how output errors are surfaced elsewhere rather than
//! aborting a simulation mid-flight).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use haul_controller::Mode;
use haul_core::Tick;
use haul_world::AgentBody;

use crate::{SimObserver, SimResult};

/// Writes per-agent-tick rows to any `Write` sink.
pub struct CsvTelemetry<W: Write> {
    writer:   Writer<W>,
    rows:     usize,
    error:    Option<csv::Error>,
    finished: bool,
}

impl CsvTelemetry<File> {
    /// Create `agent_ticks.csv` inside `dir` and write the header row.
    pub fn create(dir: &Path) -> SimResult<Self> {
        let writer = Writer::from_path(dir.join("agent_ticks.csv"))?;
        Self::from_csv_writer(writer)
    }
}

impl<W: Write> CsvTelemetry<W> {
    /// Wrap an arbitrary sink (e.g. an in-memory buffer in tests).
    pub fn from_writer(sink: W) -> SimResult<Self> {
        Self::from_csv_writer(Writer::from_writer(sink))
    }

    fn from_csv_writer(mut writer: Writer<W>) -> SimResult<Self> {
        writer.write_record(["tick", "agent_id", "mode", "carried", "x", "y"])?;
        Ok(Self { writer, rows: 0, error: None, finished: false })
    }

    /// Rows written so far (header excluded).
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// The first write error encountered, if any.
    pub fn take_error(&mut self) -> Option<csv::Error> {
        self.error.take()
    }

    /// Flush and stop writing.  Idempotent.
    pub fn finish(&mut self) -> SimResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }

    /// Recover the underlying sink (flushing first).
    pub fn into_inner(self) -> SimResult<W> {
        self.writer.into_inner().map_err(|e| {
            crate::SimError::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
        })
    }
}

impl<W: Write> SimObserver for CsvTelemetry<W> {
    fn on_agent_ticked(&mut self, tick: Tick, body: &AgentBody, mode: Mode) {
        if self.error.is_some() || self.finished {
            return;
        }
        let result = self.writer.write_record(&[
            tick.0.to_string(),
            body.id.0.to_string(),
            mode.as_str().to_string(),
            body.store.used_total().to_string(),
            body.pos.x.to_string(),
            body.pos.y.to_string(),
        ]);
        match result {
            Ok(()) => self.rows += 1,
            Err(e) => self.error = Some(e),
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        if let Err(e) = self.writer.flush() {
            if self.error.is_none() {
                self.error = Some(e.into());
            }
        }
        self.finished = true;
    }
}
