//! Fee schedule providers and catalogs.

pub mod in_memory;
pub mod json_catalog;
pub mod sample_catalog;
