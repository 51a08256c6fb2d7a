//! Validation source strategies.
//!
//! Only the filesystem strategy exists. The pipeline itself takes plain
//! `(path, text)` pairs, so another source would only need its own module
//! here.

pub mod fs;
