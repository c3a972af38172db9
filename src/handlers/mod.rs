//! Handler implementations

pub mod json;
pub mod multi;
pub mod pretty;

pub use json::JsonHandler;
pub use multi::MultiHandler;
pub use pretty::PrettyHandler;

pub use crate::core::{Handler, HandlerRef};

#[cfg(test)]
pub(crate) mod testing {
    use parking_lot::Mutex;
    use std::io::{self, Write};
    use std::sync::Arc;

    /// In-memory destination that can be inspected after writes
    #[derive(Clone, Default)]
    pub(crate) struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }

        pub(crate) fn lines(&self) -> Vec<String> {
            self.contents().lines().map(str::to_string).collect()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Destination that rejects every write
    pub(crate) struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "destination closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
