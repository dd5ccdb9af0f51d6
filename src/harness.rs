use std::{
    io::{self, Write},
    path::Path,
};

use ppcheck_transformer::{LogListener, Passthrough, Source, Transformer};

use crate::{collect::collect, config::HarnessConfig, error::CheckError, interpret::Interpreter};

/// Runs fixtures through a fresh transformer each and checks the output.
///
/// `out` receives `print` directives and debug echo, `err` the dumps written on failure.
pub struct Harness<T: Transformer + 'static = Passthrough> {
    config: HarnessConfig,
    factory: Box<dyn Fn() -> T>,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl Harness<Passthrough> {
    pub fn new(config: HarnessConfig) -> Self {
        Self::with_transformer(config, Passthrough::new)
    }
}

impl<T: Transformer + 'static> Harness<T> {
    pub fn with_transformer<F: Fn() -> T + 'static>(config: HarnessConfig, factory: F) -> Self {
        Self {
            config,
            factory: Box::new(factory),
            out: Box::new(io::stdout()),
            err: Box::new(io::stderr()),
        }
    }
    pub fn with_channels<O: Write + 'static, E: Write + 'static>(mut self, out: O, err: E) -> Self {
        self.out = Box::new(out);
        self.err = Box::new(err);
        self
    }
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }
    /// A transformer configured the same way for every run
    fn prepare(&self, source: Source) -> T {
        let mut transformer = (self.factory)();
        for feature in &self.config.features {
            transformer.add_feature(*feature);
        }
        for warning in &self.config.warnings {
            transformer.add_warning(*warning);
        }
        transformer.set_listener(Box::new(LogListener));
        let (name, definition) = &self.config.identifying_macro;
        transformer.add_macro(name, definition);
        if self.config.include_fixture_dir && matches!(source, Source::File(_)) {
            transformer.system_include_path().add(self.config.fixture_dir.clone());
        }
        transformer.add_input(source);
        transformer
    }
    /// Collects the whole output of `source`, echoing it to `out` when `debug` is set
    pub fn parse(&mut self, source: Source, debug: bool) -> Result<(T, String), CheckError> {
        let mut transformer = self.prepare(source);
        let echo: Option<&mut dyn Write> = if debug { Some(self.out.as_mut()) } else { None };
        let output = collect(&mut transformer, echo)?;
        Ok((transformer, output))
    }
    pub fn parse_code_fragment(&mut self, code: &str) -> Result<String, CheckError> {
        self.parse(Source::fragment(code), false).map(|(_, output)| output)
    }
    /// Checks `output` against a check file without a transformer behind it
    pub fn check(&mut self, check_path: &Path, output: &str) -> Result<(), CheckError> {
        Interpreter::new(output, self.out.as_mut(), self.err.as_mut()).check_file(check_path)
    }
    /// Runs `<fixture_dir>/<name>` and checks it against `<fixture_dir>/<name>.check`
    pub fn verify(&mut self, name: &str, debug: bool) -> Result<(), CheckError> {
        let (transformer, output) = self.parse(Source::File(self.config.fixture_path(name)), debug)?;
        let check_path = self.config.check_path(name);
        Interpreter::new(&output, self.out.as_mut(), self.err.as_mut()).with_transformer(&transformer).check_file(&check_path)
    }
    /// [`Harness::verify`] for use inside `#[test]`, panics with the failure
    pub fn test_file(&mut self, name: &str) {
        if let Err(err) = self.verify(name, false) {
            panic!("{}: {}", name, err);
        }
    }
    pub fn test_file_debug(&mut self, name: &str) {
        if let Err(err) = self.verify(name, true) {
            panic!("{}: {}", name, err);
        }
    }
}
