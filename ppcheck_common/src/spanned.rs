use std::ops::Range;

/// Byte range within one file of a [`crate::ctx::Context`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub range: Range<usize>,
    pub file_id: usize,
}

impl Location {
    pub fn new(file_id: usize, range: Range<usize>) -> Self {
        Self { range, file_id }
    }
    pub fn until(&self, other: &Self) -> Self {
        debug_assert_eq!(self.file_id, other.file_id);
        Self {
            range: self.range.start..other.range.end,
            file_id: self.file_id,
        }
    }
}
