use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;

use crate::debug_log::{DebugLogWriter, global_debug_log};

pub struct DelegatingWriter {
    inner: DelegatingInner,
}

enum DelegatingInner {
    File(Arc<File>),
    Debug(DebugLogWriter),
    Stderr(io::Stderr),
}

impl DelegatingWriter {
    fn new(file: Option<Arc<File>>) -> Self {
        let inner = match (file, global_debug_log()) {
            (Some(file), _) => DelegatingInner::File(file),
            (None, Some(handle)) => DelegatingInner::Debug(handle.writer()),
            (None, None) => DelegatingInner::Stderr(io::stderr()),
        };
        DelegatingWriter { inner }
    }
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.inner {
            DelegatingInner::File(f) => (&**f).write(buf),
            DelegatingInner::Debug(w) => w.write(buf),
            DelegatingInner::Stderr(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            DelegatingInner::File(f) => (&**f).flush(),
            DelegatingInner::Debug(w) => w.flush(),
            DelegatingInner::Stderr(s) => s.flush(),
        }
    }
}

/// Routes each event to the log file, the debug log buffer or stderr, in that
/// order of preference.
#[derive(Clone, Debug, Default)]
pub struct SubscriberMakeWriter {
    file: Option<Arc<File>>,
}

impl SubscriberMakeWriter {
    pub fn to_file(file: File) -> Self {
        Self {
            file: Some(Arc::new(file)),
        }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        DelegatingWriter::new(self.file.clone())
    }
}

pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber. With `log_file` set, lines are appended to
/// that file; otherwise they go to the debug log buffer when one is registered,
/// or to stderr. Safe to call multiple times; later calls are no-ops.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let make_writer = match log_file {
        Some(path) => SubscriberMakeWriter::to_file(open_log_file(path)?),
        None => SubscriberMakeWriter::default(),
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(make_writer)
        .with_target(false)
        .with_thread_names(false)
        .with_ansi(false)
        .try_init();
    Ok(())
}
