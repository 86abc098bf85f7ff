use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, OnceLock, RwLock};

/// Default filter when `RUST_LOG` is unset; toasts on stdout stay readable.
const DEFAULT_FILTER: &str = "warn";

#[derive(Clone)]
struct SharedWriter {
    inner: Arc<RwLock<Option<std::fs::File>>>,
}

struct MultiWriter {
    inner: Arc<RwLock<Option<std::fs::File>>>,
}

impl SharedWriter {
    fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
        }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedWriter {
    type Writer = MultiWriter;

    fn make_writer(&'a self) -> Self::Writer {
        MultiWriter {
            inner: self.inner.clone(),
        }
    }
}

impl Write for MultiWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = io::stderr().write(buf)?;
        if let Ok(mut guard) = self.inner.write() {
            if let Some(file) = guard.as_mut() {
                let _ = file.write_all(buf);
            }
        }
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Ok(mut guard) = self.inner.write() {
            if let Some(file) = guard.as_mut() {
                let _ = file.flush();
            }
        }
        Ok(())
    }
}

static WRITER: OnceLock<SharedWriter> = OnceLock::new();

/// Routes `log` records into a fmt subscriber writing to stderr. Call once,
/// before the CLI is parsed; the log file is attached later.
pub fn init() {
    let _ = tracing_log::LogTracer::init();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

    let writer = SharedWriter::new();
    let _ = WRITER.set(writer.clone());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
}

/// Also appends every log line to `log_file`; `None` detaches the file.
pub fn set_log_file(log_file: Option<&Path>) {
    let Some(writer) = WRITER.get() else {
        return;
    };
    let file = match log_file {
        None => None,
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                let _ = std::fs::create_dir_all(parent);
            }
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => Some(file),
                Err(err) => {
                    log::warn!("cannot open log file {}: {}", path.display(), err);
                    return;
                }
            }
        }
    };
    if let Ok(mut guard) = writer.inner.write() {
        *guard = file;
    }
}
