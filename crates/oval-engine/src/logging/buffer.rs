use std::fs::{self, File, OpenOptions};
use std::io::Write as _;
use std::path::PathBuf;

use log::Level;

/// Output targets chosen when a [`BufferedLog`] is started.
#[derive(Debug, Clone, Default)]
pub struct SinkConfig {
    /// Print flushed records to stdout.
    pub console: bool,
    /// Directory receiving a session file `debug_log_<YYYYMMDD_HHMMSS>.log`.
    pub file_dir: Option<PathBuf>,
}

impl SinkConfig {
    /// Console only, no file.
    pub fn console() -> Self {
        Self { console: true, file_dir: None }
    }
}

/// Buffered, session-scoped log sink.
///
/// Records accumulate in memory with a timestamp and level tag until
/// [`flush`](Self::flush) writes them out. The sink is inert until
/// [`start`](Self::start): records and flushes before that are dropped.
///
/// File problems never reach the caller; they downgrade the sink to
/// console-only output and are reported through the buffer itself.
#[derive(Debug, Default)]
pub struct BufferedLog {
    started: bool,
    console: bool,
    file: Option<PathBuf>,
    buffer: String,
}

impl BufferedLog {
    /// An inert sink.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Path of the session file, if file output is active.
    pub fn file_path(&self) -> Option<&std::path::Path> {
        self.file.as_deref()
    }

    pub fn console_enabled(&self) -> bool {
        self.console
    }

    /// Records not yet flushed.
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// Starts the session. Call once per session; a second call starts a new one.
    pub fn start(&mut self, config: SinkConfig) {
        self.started = true;
        self.console = config.console;
        self.file = None;

        if let Some(dir) = config.file_dir {
            let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
            let path = dir.join(format!("debug_log_{stamp}.log"));

            match fs::create_dir_all(&dir).and_then(|_| File::create(&path)) {
                Ok(_) => self.file = Some(path),
                Err(e) => {
                    log::warn!("could not create log file {}: {e}", path.display());
                    self.console = true;
                    self.record(&format!("Could not create new log file. Error message:\n{e}"), Level::Error);
                    self.record("Logging to the console only.", Level::Warn);
                }
            }
        }

        self.record("Logger started.", Level::Info);
    }

    /// Appends `"<YYYY/MM/DD HH:MM:SS> [<TAG>] <message>\n"` to the buffer.
    pub fn record(&mut self, message: &str, level: Level) {
        if !self.started {
            return;
        }
        let stamp = chrono::Local::now().format("%Y/%m/%d %H:%M:%S");
        self.buffer.push_str(&format!("{stamp} [{}] {message}\n", level_tag(level)));
    }

    /// Shorthand for an INFO record.
    pub fn info(&mut self, message: &str) {
        self.record(message, Level::Info);
    }

    /// Writes the buffer to the file and/or console, then clears it.
    pub fn flush(&mut self) {
        if !self.started {
            return;
        }

        if let Some(path) = self.file.clone() {
            let written = OpenOptions::new()
                .append(true)
                .create(true)
                .open(&path)
                .and_then(|mut f| f.write_all(self.buffer.as_bytes()));

            if let Err(e) = written {
                log::warn!("could not flush to {}: {e}", path.display());
                self.console = true;
                self.record(&format!("Could not flush to the log file. Error message:\n{e}"), Level::Warn);
            }
        }

        if self.console {
            print!("{}", self.buffer);
        }

        self.buffer.clear();
    }

    /// Flushes and returns to the inert state.
    pub fn stop(&mut self) {
        self.flush();
        self.started = false;
        self.file = None;
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
