//! Password output to terminal, file, or clipboard.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use copypasta::ClipboardProvider;
use log::{debug, info};
use thiserror::Error;
use zeroize::{Zeroize, Zeroizing};

use super::{GenerateError, generate, validate};
use crate::settings::Settings;

const BUF_CAPACITY: usize = 8 * 1024;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("Failed to write {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write passwords: {0}")]
    Io(#[from] io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Buffered writer that zeroes its buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let res = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        res
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        // Never let the buffer grow: a reallocation would leave an unzeroed copy behind.
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
        let _ = self.inner.flush();
    }
}

/// Write `settings.number_of_passwords` passwords, one per line.
/// The request is validated once up front so nothing is written on failure.
pub fn write_batch<W: Write>(out: &mut W, settings: &Settings) -> Result<usize, OutputError> {
    validate(settings.pass_length, &settings.classes)?;

    let count = settings.number_of_passwords;
    let mut out = SecureBufWriter::new(out);
    for _ in 0..count {
        let pass = generate(settings.pass_length, settings.classes)?;
        out.write_all(pass.as_str().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    debug!("wrote {count} password(s)");
    Ok(count)
}

pub fn to_terminal(settings: &Settings) -> Result<usize, OutputError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_batch(&mut out, settings)
}

/// Append passwords to `path`, creating it (and its parent directory) if needed.
/// Returns the canonical path for display.
pub fn to_file(settings: &Settings, path: &Path) -> Result<PathBuf, OutputError> {
    validate(settings.pass_length, &settings.classes)?;

    let file_err = |source| OutputError::File {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(file_err)?;
    }

    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path).map_err(file_err)?;

    write_batch(&mut file, settings)?;

    let full_path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    info!("passwords appended to {}", full_path.display());
    Ok(full_path)
}

/// Generate all passwords into one newline-joined buffer that is zeroed on drop.
pub fn collect(settings: &Settings) -> Result<Zeroizing<String>, OutputError> {
    validate(settings.pass_length, &settings.classes)?;

    let count = settings.number_of_passwords;
    let capacity = settings.pass_length.saturating_add(1).saturating_mul(count).min(1 << 20);
    let mut passwords = Zeroizing::new(String::with_capacity(capacity));

    for i in 0..count {
        let pass = generate(settings.pass_length, settings.classes)?;
        if i > 0 {
            passwords.push('\n');
        }
        passwords.push_str(pass.as_str());
    }
    Ok(passwords)
}

/// Hand the batch to the clipboard. The buffer is moved, not copied.
pub fn to_clipboard<C: ClipboardProvider>(
    ctx: &mut C,
    settings: &Settings,
) -> Result<(), OutputError> {
    let mut passwords = collect(settings)?;
    ctx.set_contents(std::mem::take(&mut *passwords))
        .map_err(|e| OutputError::Clipboard(e.to_string()))?;
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    info!("{} password(s) copied to clipboard", settings.number_of_passwords);
    Ok(())
}
