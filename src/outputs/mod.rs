//! Output generation for the digest.
//!
//! # Submodules
//!
//! - [`html`]: renders a digest into the HTML body of the email
//! - [`json`]: optionally archives each digest as a JSON file
//!
//! # Archive layout
//!
//! ```text
//! archive_dir/
//! ├── 2025-05-05.json
//! └── 2025-05-06.json
//! ```

pub mod html;
pub mod json;
