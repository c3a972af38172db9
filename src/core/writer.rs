//! Shared output destinations
//!
//! Handlers render a whole record into a local buffer and then hand it to a
//! `SharedWriter`, which holds its lock only for the duration of the write.
//! Concurrent records on one destination therefore never interleave.

use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Clone)]
pub struct SharedWriter {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl SharedWriter {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Write one fully rendered record
    pub fn write_record(&self, buf: &[u8]) -> io::Result<()> {
        let mut writer = self.inner.lock();
        writer.write_all(buf)
    }

    pub fn flush(&self) -> io::Result<()> {
        self.inner.lock().flush()
    }

    /// Whether two handles point at the same destination
    pub fn same_destination(&self, other: &SharedWriter) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.write_record(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.lock().flush()
    }
}

impl fmt::Debug for SharedWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedWriter").finish_non_exhaustive()
    }
}

/// Duplicates every write to each destination in order
///
/// Stops at the first destination that fails and returns that error;
/// destinations after it do not receive the buffer.
#[derive(Debug, Clone, Default)]
pub struct MultiWriter {
    writers: Vec<SharedWriter>,
}

impl MultiWriter {
    pub fn new(writers: Vec<SharedWriter>) -> Self {
        Self { writers }
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}

impl Write for MultiWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for writer in &self.writers {
            writer.write_record(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for writer in &self.writers {
            writer.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_multi_writer_duplicates() {
        let a = Capture::default();
        let b = Capture::default();
        let mut multi = MultiWriter::new(vec![
            SharedWriter::new(a.clone()),
            SharedWriter::new(b.clone()),
        ]);

        multi.write_all(b"line\n").unwrap();
        assert_eq!(a.0.lock().as_slice(), b"line\n");
        assert_eq!(b.0.lock().as_slice(), b"line\n");
    }

    #[test]
    fn test_multi_writer_stops_at_first_failure() {
        let after = Capture::default();
        let mut multi = MultiWriter::new(vec![
            SharedWriter::new(Broken),
            SharedWriter::new(after.clone()),
        ]);

        assert!(multi.write_all(b"x\n").is_err());
        assert!(after.0.lock().is_empty());
    }

    #[test]
    fn test_clones_share_destination() {
        let writer = SharedWriter::new(Capture::default());
        let clone = writer.clone();
        assert!(writer.same_destination(&clone));
        assert!(!writer.same_destination(&SharedWriter::new(Capture::default())));
    }
}
