use ppcheck_common::ctx::Context;
use ppcheck_errors::{RenderDiagnostic, Report};

/// Receives diagnostics from inside a transformer as they happen
pub trait Listener {
    fn handle_warning(&mut self, ctx: &Context, report: &Report);
    fn handle_error(&mut self, ctx: &Context, report: &Report);
}

/// Renders every diagnostic against its source and hands it to the `log` facade
#[derive(Debug, Default)]
pub struct LogListener;

impl Listener for LogListener {
    fn handle_warning(&mut self, ctx: &Context, report: &Report) {
        log::warn!("{}", ctx.render_diagnostic(report, false));
    }
    fn handle_error(&mut self, ctx: &Context, report: &Report) {
        log::error!("{}", ctx.render_diagnostic(report, false));
    }
}
