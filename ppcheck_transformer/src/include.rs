use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HeaderNameKind {
    /// Angled brackets <>
    Angled,
    /// Normal quotations ""
    Quoted,
}

/// Ordered list of directories searched for included files
#[derive(Debug, Default, Clone)]
pub struct IncludePath {
    dirs: Vec<PathBuf>,
}

impl IncludePath {
    pub fn add<P: Into<PathBuf>>(&mut self, dir: P) {
        self.dirs.push(dir.into());
    }
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }
    /// Quoted names are looked up next to the including file before the search path, angled names only on the search path
    pub fn locate(&self, name: &str, kind: HeaderNameKind, current_dir: Option<&Path>) -> Option<PathBuf> {
        let local = match kind {
            HeaderNameKind::Quoted => current_dir,
            HeaderNameKind::Angled => None,
        };
        local.into_iter().chain(self.dirs.iter().map(PathBuf::as_path)).map(|dir| dir.join(name)).find(|candidate| candidate.is_file())
    }
}
