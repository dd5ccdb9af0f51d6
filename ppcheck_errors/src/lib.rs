pub use codespan_reporting;
use codespan_reporting::term::termcolor::{Ansi, NoColor};
use ppcheck_common::{ctx::HasContext, spanned::Location};

pub type Report = codespan_reporting::diagnostic::Diagnostic<usize>;

pub enum DiagnosticSeverity {
    Error,
    Warning,
}
pub enum LabelKind {
    Primary,
    Secondary,
}
pub struct Label {
    kind: LabelKind,
    location: Location,
    message: String,
}
pub trait Diagnostic: Sized {
    fn title<'a>(&self) -> &'a str;
    fn severity(&self) -> DiagnosticSeverity;
    fn labels(&self) -> Vec<Label> {
        vec![]
    }
    fn notes(&self) -> Vec<String> {
        vec![]
    }
    fn into_codespan_report(&self) -> Report {
        let diag = match self.severity() {
            DiagnosticSeverity::Error => Report::error(),
            DiagnosticSeverity::Warning => Report::warning(),
        };
        let mut diag = diag.with_message(self.title()).with_notes(self.notes());
        for label in self.labels() {
            let style = match label.kind {
                LabelKind::Primary => codespan_reporting::diagnostic::LabelStyle::Primary,
                LabelKind::Secondary => codespan_reporting::diagnostic::LabelStyle::Secondary,
            };
            diag.labels.push(codespan_reporting::diagnostic::Label::new(style, label.location.file_id, label.location.range).with_message(label.message));
        }

        diag
    }
}

/// Renders reports against the files of a context
pub trait RenderDiagnostic {
    fn render_diagnostic(&self, report: &Report, colored: bool) -> String;
}

impl<C: HasContext> RenderDiagnostic for C {
    fn render_diagnostic(&self, report: &Report, colored: bool) -> String {
        let config = codespan_reporting::term::Config::default();
        let mut output_buffer = Vec::new();
        let emitted = if colored {
            codespan_reporting::term::emit(&mut Ansi::new(&mut output_buffer), &config, &self.ctx().files, report)
        } else {
            codespan_reporting::term::emit(&mut NoColor::new(&mut output_buffer), &config, &self.ctx().files, report)
        };
        match emitted {
            Ok(()) => String::from_utf8_lossy(&output_buffer).into_owned(),
            // a label pointing outside its file still deserves its message
            Err(_) => report.message.clone(),
        }
    }
}
pub mod errors;
