//! Record formats of the external compiler artifacts.
//!
//! Both formats are fixed wire formats owned by the compiler. Each line is
//! classified on its own; assembling records into models happens in
//! [`crate::hir`].

pub mod listing;
pub mod reference_dump;

pub use listing::{
    INCLUDE_SUMMARY_HEADER, IncludeFileSummaryRecord, IncludeSummaryAbsent, parse_include_summary,
};
pub use reference_dump::{
    DefinitionRecord, LocationRecord, MalformedReason, MalformedReferenceRecord, ReferenceAction,
    ReferenceRecord,
};
