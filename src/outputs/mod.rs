//! Output generation for scraped records.
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! └── 2026-08-06/
//!     ├── 09-15-02.json
//!     └── 21-15-07.json
//! ```

pub mod json;
