//! Boundary adapters for reading requests and writing quotes.

pub mod csv;
