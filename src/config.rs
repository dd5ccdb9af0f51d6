use std::path::PathBuf;

use ppcheck_common::flags::{Feature, Warning};

/// How every transformer is set up before it sees a fixture
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Fixtures and their `.check` files live here
    pub fixture_dir: PathBuf,
    pub features: Vec<Feature>,
    pub warnings: Vec<Warning>,
    /// Predefined so sources can tell which implementation they run under
    pub identifying_macro: (String, String),
    /// Add `fixture_dir` to the system include path when checking a fixture file
    pub include_fixture_dir: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            fixture_dir: PathBuf::from("tests/tc_data"),
            features: vec![Feature::Digraphs, Feature::Trigraphs, Feature::LineMarkers],
            warnings: vec![Warning::Import],
            identifying_macro: ("__PPCHECK__".to_string(), "1".to_string()),
            include_fixture_dir: true,
        }
    }
}

impl HarnessConfig {
    pub fn with_fixture_dir<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            fixture_dir: dir.into(),
            ..Default::default()
        }
    }
    pub fn fixture_path(&self, name: &str) -> PathBuf {
        self.fixture_dir.join(name)
    }
    /// `<fixture>.check`, next to the fixture
    pub fn check_path(&self, name: &str) -> PathBuf {
        self.fixture_dir.join(format!("{name}.check"))
    }
}
