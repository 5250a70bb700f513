//! Analysis settings.
//!
//! With the `serde` feature, settings deserialize from editor configuration
//! in camelCase:
//!
//! ```json
//! { "includeTree": { "ignoreTypes": ["GDXIN"], "ignoreFiles": ["stdlib"] } }
//! ```

pub use crate::hir::IncludeTreeOptions;

/// Settings for building the analysis models.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct AnalysisConfig {
    pub include_tree: IncludeTreeOptions,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include_tree(mut self, options: IncludeTreeOptions) -> Self {
        self.include_tree = options;
        self
    }
}
