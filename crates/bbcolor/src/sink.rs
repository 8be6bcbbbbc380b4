use std::fmt;
use std::io;
use std::io::Write;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;

/// A shared handle to a writable destination for formatted lines.
///
/// Clones refer to the same writer. The formatter only ever writes to a
/// sink; it never opens or closes the underlying stream.
#[derive(Clone)]
pub struct Sink(Arc<Mutex<Box<dyn Write + Send>>>);

impl Sink {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self(Arc::new(Mutex::new(Box::new(writer))))
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Writes `line` followed by a newline as a single write.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        let mut writer = self.0.lock();
        writer.write_all(buf.as_bytes())?;
        writer.flush()
    }

    /// Whether both handles refer to the same writer.
    pub fn same_as(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sink").field(&Arc::as_ptr(&self.0)).finish()
    }
}

static DEFAULT_SINK: OnceCell<Sink> = OnceCell::new();

/// Installs the process-wide default sink.
///
/// Only the first initialization wins: once set, or once read through
/// [`default_sink`], the default is fixed for the life of the process and
/// the rejected sink is handed back.
pub fn init_default_sink(sink: Sink) -> Result<(), Sink> {
    DEFAULT_SINK.set(sink)
}

/// The process-wide default sink shared by every formatter. Standard
/// output unless [`init_default_sink`] ran first.
pub fn default_sink() -> Sink {
    DEFAULT_SINK.get_or_init(Sink::stdout).clone()
}
