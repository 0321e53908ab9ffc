//! Clipboard writer with fallback
//!
//! Copy tries the system clipboard first. When that is unavailable or
//! fails, the text is staged in a scratch buffer on the fallback target,
//! copied from there, and the scratch buffer is detached again on every
//! path.

use std::io::Write;

use base64::Engine;
use guide_core::prelude::*;

/// Which mechanism performed a successful copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// Platform clipboard
    System,
    /// Scratch buffer on the fallback target
    Fallback,
}

/// Primary clipboard write primitive
pub trait ClipboardBackend {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Handle to a staged scratch buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScratchId(u64);

/// Fallback copy target: stage text off-screen, copy it, remove it
pub trait ScratchTarget {
    fn attach_scratch(&mut self, text: &str) -> Result<ScratchId>;

    fn select_and_copy(&mut self, id: ScratchId) -> Result<()>;

    fn detach_scratch(&mut self, id: ScratchId);
}

/// Detaches its scratch buffer when dropped
struct ScratchGuard<'a> {
    target: &'a mut dyn ScratchTarget,
    id: ScratchId,
}

impl<'a> ScratchGuard<'a> {
    fn attach(target: &'a mut dyn ScratchTarget, text: &str) -> Result<Self> {
        let id = target.attach_scratch(text)?;
        Ok(Self { target, id })
    }

    fn select_and_copy(&mut self) -> Result<()> {
        self.target.select_and_copy(self.id)
    }
}

impl Drop for ScratchGuard<'_> {
    fn drop(&mut self) {
        self.target.detach_scratch(self.id);
    }
}

/// Copies text using the best available mechanism
#[derive(Default)]
pub struct ClipboardWriter {
    primary: Option<Box<dyn ClipboardBackend>>,
    fallback: Option<Box<dyn ScratchTarget>>,
}

impl ClipboardWriter {
    pub fn new(
        primary: Option<Box<dyn ClipboardBackend>>,
        fallback: Option<Box<dyn ScratchTarget>>,
    ) -> Self {
        Self { primary, fallback }
    }

    /// System clipboard when one can be opened, OSC 52 on stdout otherwise
    pub fn system() -> Self {
        let primary = SystemClipboard::open().map(|c| Box::new(c) as Box<dyn ClipboardBackend>);
        let fallback: Box<dyn ScratchTarget> = Box::new(Osc52Target::new(std::io::stdout()));
        Self::new(primary, Some(fallback))
    }

    /// Copy `text`, trying the primary backend first
    pub fn copy(&mut self, text: &str) -> Result<CopyMethod> {
        if let Some(primary) = self.primary.as_deref_mut() {
            match primary.write_text(text) {
                Ok(()) => {
                    debug!("Copied {} bytes to system clipboard", text.len());
                    return Ok(CopyMethod::System);
                }
                Err(e) => warn!("System clipboard failed, trying fallback: {}", e),
            }
        }

        let Some(fallback) = self.fallback.as_deref_mut() else {
            return Err(Error::clipboard("no clipboard available"));
        };

        let mut guard = ScratchGuard::attach(fallback, text)?;
        guard.select_and_copy()?;
        debug!("Copied {} bytes via fallback", text.len());
        Ok(CopyMethod::Fallback)
    }
}

// ─────────────────────────────────────────────────────────
// Concrete backends
// ─────────────────────────────────────────────────────────

/// Platform clipboard via arboard
pub struct SystemClipboard {
    clipboard: arboard::Clipboard,
}

impl SystemClipboard {
    /// None when no clipboard is reachable (headless, remote shells)
    pub fn open() -> Option<Self> {
        match arboard::Clipboard::new() {
            Ok(clipboard) => Some(Self { clipboard }),
            Err(e) => {
                debug!("System clipboard unavailable: {}", e);
                None
            }
        }
    }
}

impl ClipboardBackend for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| Error::clipboard(e.to_string()))
    }
}

/// Terminal clipboard through the OSC 52 escape sequence.
///
/// The staged sequence is the scratch buffer; copying writes it to the
/// terminal.
pub struct Osc52Target<W: Write> {
    out: W,
    staged: Option<(ScratchId, String)>,
    next_id: u64,
}

impl<W: Write> Osc52Target<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            staged: None,
            next_id: 0,
        }
    }

    pub fn has_staged(&self) -> bool {
        self.staged.is_some()
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> ScratchTarget for Osc52Target<W> {
    fn attach_scratch(&mut self, text: &str) -> Result<ScratchId> {
        if self.staged.is_some() {
            return Err(Error::clipboard("scratch buffer already attached"));
        }
        let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
        let id = ScratchId(self.next_id);
        self.next_id += 1;
        self.staged = Some((id, format!("\x1b]52;c;{}\x07", encoded)));
        Ok(id)
    }

    fn select_and_copy(&mut self, id: ScratchId) -> Result<()> {
        let sequence = match &self.staged {
            Some((staged, sequence)) if *staged == id => sequence,
            _ => return Err(Error::clipboard("scratch buffer not attached")),
        };
        self.out
            .write_all(sequence.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|e| Error::clipboard(format!("terminal write failed: {}", e)))
    }

    fn detach_scratch(&mut self, id: ScratchId) {
        if matches!(&self.staged, Some((staged, _)) if *staged == id) {
            self.staged = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct FailingBackend;

    impl ClipboardBackend for FailingBackend {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            Err(Error::clipboard("denied"))
        }
    }

    #[derive(Default)]
    struct RecordingBackend {
        written: Arc<Mutex<Vec<String>>>,
    }

    impl ClipboardBackend for RecordingBackend {
        fn write_text(&mut self, text: &str) -> Result<()> {
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    /// Records attach/detach calls and optionally fails the copy step
    #[derive(Clone, Default)]
    struct CountingTarget {
        log: Arc<Mutex<Vec<&'static str>>>,
        fail_copy: bool,
    }

    impl ScratchTarget for CountingTarget {
        fn attach_scratch(&mut self, _text: &str) -> Result<ScratchId> {
            self.log.lock().unwrap().push("attach");
            Ok(ScratchId(7))
        }

        fn select_and_copy(&mut self, _id: ScratchId) -> Result<()> {
            self.log.lock().unwrap().push("copy");
            if self.fail_copy {
                Err(Error::clipboard("copy command rejected"))
            } else {
                Ok(())
            }
        }

        fn detach_scratch(&mut self, _id: ScratchId) {
            self.log.lock().unwrap().push("detach");
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_primary_success_skips_fallback() {
        let backend = RecordingBackend::default();
        let written = backend.written.clone();
        let target = CountingTarget::default();
        let log = target.log.clone();

        let mut writer = ClipboardWriter::new(Some(Box::new(backend)), Some(Box::new(target)));
        assert_eq!(writer.copy("Sharpen").unwrap(), CopyMethod::System);
        assert_eq!(*written.lock().unwrap(), vec!["Sharpen".to_string()]);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_primary_failure_uses_fallback() {
        let target = CountingTarget::default();
        let log = target.log.clone();

        let mut writer = ClipboardWriter::new(Some(Box::new(FailingBackend)), Some(Box::new(target)));
        assert_eq!(writer.copy("Sharpen").unwrap(), CopyMethod::Fallback);
        assert_eq!(*log.lock().unwrap(), vec!["attach", "copy", "detach"]);
    }

    #[test]
    fn test_fallback_failure_still_detaches_once() {
        let target = CountingTarget {
            fail_copy: true,
            ..CountingTarget::default()
        };
        let log = target.log.clone();

        let mut writer = ClipboardWriter::new(None, Some(Box::new(target)));
        let err = writer.copy("Sharpen").unwrap_err();
        assert!(matches!(err, Error::Clipboard { .. }));
        assert_eq!(*log.lock().unwrap(), vec!["attach", "copy", "detach"]);
    }

    #[test]
    fn test_no_mechanism_is_error() {
        let mut writer = ClipboardWriter::default();
        assert!(writer.copy("x").is_err());
    }

    #[test]
    fn test_osc52_writes_base64_sequence() {
        let mut target = Osc52Target::new(Vec::new());
        let id = target.attach_scratch("hi").unwrap();
        target.select_and_copy(id).unwrap();
        target.detach_scratch(id);

        assert_eq!(target.output().as_slice(), b"\x1b]52;c;aGk=\x07");
        assert!(!target.has_staged());
    }

    #[test]
    fn test_osc52_failed_write_leaves_nothing_staged() {
        let mut target = Osc52Target::new(BrokenPipe);
        {
            let mut guard = ScratchGuard::attach(&mut target, "hi").unwrap();
            assert!(guard.select_and_copy().is_err());
        }
        assert!(!target.has_staged());

        // A fresh attach works after the failed copy
        assert!(target.attach_scratch("again").is_ok());
    }

    #[test]
    fn test_osc52_rejects_unknown_scratch() {
        let mut target = Osc52Target::new(Vec::new());
        assert!(target.select_and_copy(ScratchId(99)).is_err());
    }
}
