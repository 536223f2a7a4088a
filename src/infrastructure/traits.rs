//! I/O boundary traits for testability
//!
//! Report generation happens behind [`ReportSink`], so the dispatch can be
//! exercised with an in-memory sink.

use std::io::{self, Write};

use crate::application::services::ReportRequest;

/// Receiver of a validated report request.
pub trait ReportSink {
    /// Generate and write the report.
    fn emit(&mut self, request: &ReportRequest) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Writes the plain report header to any writer.
#[derive(Debug)]
pub struct HeaderSink<W: Write> {
    out: W,
}

impl<W: Write> HeaderSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl HeaderSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportSink for HeaderSink<W> {
    fn emit(&mut self, request: &ReportRequest) -> io::Result<()> {
        self.out.write_all(request.header().as_bytes())?;
        self.out.flush()
    }
}
