//! Error adapter for converting EtymographError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. The notation is
//! never rejected, so no error carries source spans; each is rendered with a
//! stable code and, where useful, a hint.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan};

use etymograph::EtymographError;

/// Adapter rendering an [`EtymographError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a EtymographError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            EtymographError::Io(_) => "etymograph::io",
            EtymographError::Hash(_) => "etymograph::hash",
            EtymographError::Config(_) => "etymograph::config",
            EtymographError::Export(_) => "etymograph::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            EtymographError::Config(_) => {
                "check the [style] section of the configuration file; colors accept any CSS color"
            }
            EtymographError::Hash(_) => "no graph was produced; the whole document is rejected",
            EtymographError::Io(_) | EtymographError::Export(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wrap an [`EtymographError`] for rendering.
pub fn to_reportable(err: &EtymographError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

/// Renders `err` as a full diagnostic report.
///
/// Falls back to the plain error message if the handler fails to format.
pub fn render_report(err: &EtymographError, handler: &GraphicalReportHandler) -> String {
    let mut report = String::new();
    match handler.render_report(&mut report, &to_reportable(err)) {
        Ok(()) => report,
        Err(_) => err.to_string(),
    }
}
