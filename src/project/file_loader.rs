//! Loading compiler artifacts from disk.
//!
//! Compiler output is not guaranteed to be valid UTF-8 (descriptions keep
//! whatever encoding the model source used), so lines are decoded lossily.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::config::AnalysisConfig;
use crate::hir::{
    IncludeTree, IncludeTreeOptions, SymbolTable, build_include_tree, build_reference_tree,
};
use crate::ide::{Analysis, AnalysisHost};
use crate::syntax::{IncludeSummaryAbsent, parse_include_summary};

/// Errors that can occur while loading compiler artifacts.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error while reading a file.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The listing has no include summary.
    #[error("{}: {source}", path.display())]
    IncludeSummaryAbsent {
        path: PathBuf,
        #[source]
        source: IncludeSummaryAbsent,
    },
}

impl LoadError {
    /// Create an IO error for a path.
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Build a symbol table from a reference dump file, reading it line by line.
pub fn load_reference_dump(path: &Path) -> Result<SymbolTable, LoadError> {
    let file = File::open(path).map_err(|err| LoadError::io(path, err))?;

    let mut read_error = None;
    let lines = BufReader::new(file)
        .split(b'\n')
        .map_while(|line| match line {
            Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            Err(err) => {
                read_error = Some(err);
                None
            }
        });
    let table = build_reference_tree(lines);

    match read_error {
        Some(err) => Err(LoadError::io(path, err)),
        None => Ok(table),
    }
}

/// Build the include tree from a listing file.
///
/// `Ok(None)` means the summary was present but had no rows.
pub fn load_listing(
    path: &Path,
    options: &IncludeTreeOptions,
) -> Result<Option<IncludeTree>, LoadError> {
    let bytes = std::fs::read(path).map_err(|err| LoadError::io(path, err))?;
    let text = String::from_utf8_lossy(&bytes);
    let records =
        parse_include_summary(&text).map_err(|source| LoadError::IncludeSummaryAbsent {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(build_include_tree(&records, options))
}

/// Load both artifacts of one compile and swap them into `host` together.
///
/// A listing without an include summary leaves the snapshot without an
/// include tree; that is the normal state when include tracing is off.
pub fn load_into_host(
    host: &AnalysisHost,
    config: &AnalysisConfig,
    reference_dump: &Path,
    listing: Option<&Path>,
) -> Result<(), LoadError> {
    let (symbols, includes) = rayon::join(
        || load_reference_dump(reference_dump),
        || match listing {
            Some(path) => load_listing(path, &config.include_tree),
            None => Ok(None),
        },
    );

    let includes = match includes {
        Ok(tree) => tree,
        Err(LoadError::IncludeSummaryAbsent { path, .. }) => {
            tracing::debug!("no include summary in {}", path.display());
            None
        }
        Err(err) => return Err(err),
    };

    host.set_analysis(Analysis::new(symbols?, includes));
    Ok(())
}
