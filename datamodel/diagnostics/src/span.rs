/// The stable identifier of a source file inside one compilation run. Files
/// are numbered in the order they were handed to the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(pub u32);

impl FileId {
    /// The file id of a single-file compilation run.
    pub const ZERO: FileId = FileId(0);
}

/// A byte range in one source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// The offset of the first byte.
    pub start: usize,
    /// The offset after the last byte.
    pub end: usize,
    /// The source file the range points into.
    pub file_id: FileId,
}

impl Span {
    pub fn new(start: usize, end: usize, file_id: FileId) -> Span {
        Span { start, end, file_id }
    }

    /// A zero-length span at the start of the first file. Used for synthetic
    /// diagnostics that have no meaningful source location.
    pub fn empty() -> Span {
        Span {
            start: 0,
            end: 0,
            file_id: FileId::ZERO,
        }
    }

    /// Is the byte offset inside this span?
    pub fn contains(&self, position: usize) -> bool {
        position >= self.start && position <= self.end
    }

    /// Does the other span overlap with this one?
    pub fn overlaps(self, other: Span) -> bool {
        self.file_id == other.file_id && (self.contains(other.start) || self.contains(other.end))
    }
}
