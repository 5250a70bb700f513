//! Source locations reported by the GAMS compiler.

use std::fmt;
use std::path::{Path, PathBuf};

use smol_str::SmolStr;

/// A position in a source file as emitted by the compiler (1-indexed).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number, starting at 1.
    pub column: u32,
    /// Path of the file as written by the compiler.
    pub file: PathBuf,
    /// File stem of `file` (`model` for `/work/model.gms`).
    pub file_base: SmolStr,
}

impl SourceLocation {
    pub fn new(line: u32, column: u32, file: impl Into<PathBuf>) -> Self {
        let file = file.into();
        let file_base = file_stem(&file);
        Self {
            line,
            column,
            file,
            file_base,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// Stem of a compiler-written path.
///
/// The compiler may run on another platform than the one reading its
/// output, so both `/` and `\` are treated as separators.
fn file_stem(path: &Path) -> SmolStr {
    let raw = path.to_string_lossy();
    let name = raw.rsplit(['/', '\\']).next().unwrap_or(&raw);
    match name.rfind('.') {
        Some(0) | None => SmolStr::new(name),
        Some(dot) => SmolStr::new(&name[..dot]),
    }
}
