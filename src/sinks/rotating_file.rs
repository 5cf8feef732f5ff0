//! Size-based rotating file sink
//!
//! Records go to `<base>`. After each write the file size is checked; once it
//! reaches the cap the files shift (`<base>` becomes `<base>.1`, `<base>.1`
//! becomes `<base>.2`, ...) and only the newest `max_files` backups are kept.

use crate::core::{FormattedRecord, LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Largest accepted number of retained backups
pub const MAX_FILES: usize = 200_000;

struct FileState {
    writer: Option<BufWriter<File>>,
    current_size: u64,
}

/// Rotating file sink with fixed rotation parameters
///
/// # Examples
///
/// ```no_run
/// use logger_facade::sinks::RotatingFileSink;
///
/// // 5 MB per file, keep 3 backups
/// let sink = RotatingFileSink::new("/var/log/app/svc", 5 * 1024 * 1024, 3).unwrap();
/// assert_eq!(sink.max_files(), 3);
/// ```
pub struct RotatingFileSink {
    base_path: PathBuf,
    max_size: u64,
    max_files: usize,
    state: Mutex<FileState>,
}

impl RotatingFileSink {
    /// Open (or create) the log file at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if `max_size` is zero, if `max_files` exceeds
    /// [`MAX_FILES`], or if the directory or file cannot be created or opened
    pub fn new<P: AsRef<Path>>(path: P, max_size: u64, max_files: usize) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();

        if max_size == 0 {
            return Err(LoggerError::config(
                "RotatingFileSink",
                "maximum file size must be greater than zero",
            ));
        }

        if max_files > MAX_FILES {
            return Err(LoggerError::config(
                "RotatingFileSink",
                format!("maximum number of files {} exceeds {}", max_files, MAX_FILES),
            ));
        }

        // Create parent directory if it doesn't exist
        if let Some(parent) = base_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    LoggerError::io_operation(
                        "create log directory",
                        format!("Failed to create directory '{}'", parent.display()),
                        e,
                    )
                })?;
            }
        }

        let (file, current_size) = Self::open(&base_path).map_err(|e| {
            LoggerError::file_sink(base_path.display().to_string(), format!("Failed to open: {}", e))
        })?;

        Ok(Self {
            base_path,
            max_size,
            max_files,
            state: Mutex::new(FileState {
                writer: Some(BufWriter::new(file)),
                current_size,
            }),
        })
    }

    fn open(path: &Path) -> std::io::Result<(File, u64)> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let size = file.metadata()?.len();
        Ok((file, size))
    }

    /// Path of the `index`-th backup: `<base>.<index>`
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.base_path.as_os_str().to_os_string();
        name.push(format!(".{}", index));
        PathBuf::from(name)
    }

    fn rotate(&self, state: &mut FileState) -> Result<()> {
        // Close the current file before renaming it
        if let Some(mut writer) = state.writer.take() {
            writer.flush().map_err(|e| {
                LoggerError::file_rotation(
                    self.base_path.display().to_string(),
                    format!("Failed to flush before rotation: {}", e),
                )
            })?;
        }

        if self.max_files == 0 {
            fs::remove_file(&self.base_path).map_err(|e| {
                LoggerError::file_rotation(
                    self.base_path.display().to_string(),
                    format!("Failed to truncate log file: {}", e),
                )
            })?;
        } else {
            let oldest = self.backup_path(self.max_files);
            if oldest.exists() {
                // Best effort; the rename below overwrites it anyway on unix
                let _ = fs::remove_file(&oldest);
            }

            for i in (1..self.max_files).rev() {
                let src = self.backup_path(i);
                if src.exists() {
                    Self::rename(&src, &self.backup_path(i + 1))?;
                }
            }

            if self.base_path.exists() {
                Self::rename(&self.base_path, &self.backup_path(1))?;
            }
        }

        let (file, size) = Self::open(&self.base_path).map_err(|e| {
            LoggerError::file_rotation(
                self.base_path.display().to_string(),
                format!("Failed to create new log file: {}", e),
            )
        })?;
        state.writer = Some(BufWriter::new(file));
        state.current_size = size;

        Ok(())
    }

    fn rename(from: &Path, to: &Path) -> Result<()> {
        if fs::rename(from, to).is_ok() {
            return Ok(());
        }

        // Some platforms refuse to rename onto an existing file
        if to.exists() {
            let _ = fs::remove_file(to);
        }
        fs::rename(from, to).map_err(|e| {
            LoggerError::file_rotation(
                from.display().to_string(),
                format!("Failed to rename to '{}': {}", to.display(), e),
            )
        })
    }

    /// Reopen the base file after a failed rotation so writing can continue
    fn recover(&self, state: &mut FileState) {
        if state.writer.is_some() {
            // Allow the file to grow past the cap instead of retrying every write
            state.current_size = 0;
            return;
        }

        match Self::open(&self.base_path) {
            Ok((file, _)) => {
                state.writer = Some(BufWriter::new(file));
                state.current_size = 0;
            }
            Err(e) => {
                eprintln!(
                    "[LOGGER ERROR] Failed to reopen '{}' after rotation failure: {}",
                    self.base_path.display(),
                    e
                );
            }
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.base_path
    }

    /// Byte capacity of a single file
    #[must_use]
    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Number of rotated files retained
    #[must_use]
    pub fn max_files(&self) -> usize {
        self.max_files
    }

    #[must_use]
    pub fn current_size(&self) -> u64 {
        self.state.lock().current_size
    }
}

impl Sink for RotatingFileSink {
    fn write(&self, record: &FormattedRecord) -> Result<()> {
        let mut state = self.state.lock();

        let writer = state
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("File writer not initialized"))?;

        let mut line = String::with_capacity(record.line.len() + 1);
        line.push_str(&record.line);
        line.push('\n');

        writer.write_all(line.as_bytes()).map_err(|e| {
            LoggerError::file_sink(
                self.base_path.display().to_string(),
                format!("Failed to write log entry: {}", e),
            )
        })?;
        state.current_size += line.len() as u64;

        if state.current_size >= self.max_size {
            if let Err(e) = self.rotate(&mut state) {
                self.recover(&mut state);
                return Err(e);
            }
        }

        Ok(())
    }

    fn flush(&self) -> Result<()> {
        if let Some(ref mut writer) = self.state.lock().writer {
            writer.flush().map_err(|e| {
                LoggerError::file_sink(
                    self.base_path.display().to_string(),
                    format!("Failed to flush: {}", e),
                )
            })?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "rotating_file"
    }
}

impl Drop for RotatingFileSink {
    fn drop(&mut self) {
        if let Some(mut writer) = self.state.get_mut().writer.take() {
            // Best effort flush - ignore errors during drop
            let _ = writer.flush();
        }
    }
}
