//! Presentation of a loaded article list.
//!
//! # Submodules
//!
//! - [`listing`]: renders articles as a plain-text list for the terminal
//! - [`json`]: writes the list to a dated JSON file
//! - [`browser`]: opens a listed article in the system browser
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     └── articles.json
//! ```

pub mod browser;
pub mod json;
pub mod listing;
