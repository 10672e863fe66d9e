//! CLI command implementations.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `list` | Filter the catalog once and print the visible models |
//! | `show` | Print one model |
//! | `session` | Interactive view session on stdin/stdout |
//! | `notice` | Print the clinical-use disclaimer |
//!
//! # Example Usage
//!
//! ```bash
//! # Stable imaging models
//! diaglab list --modality Imaging --status Stable
//!
//! # Same thing with filter syntax, as JSON
//! diaglab list --query "modality:imaging status:stable" --format json
//!
//! # Interactive session
//! diaglab session
//! ```

mod output;
mod session;

pub use output::{
    CLINICAL_NOTICE, OutputFormat, write_detail, write_json, write_summary, write_table,
    write_yaml,
};
pub use session::{SessionCommand, apply_command, run_session};
