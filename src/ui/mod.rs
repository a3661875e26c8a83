//! User interface module - console reporting for pipeline logs.
//!
//! git-autotag runs unattended, so there are no prompts; everything the
//! operator sees goes through [`formatter`].

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_command, display_commit_analysis, display_decision,
    display_error, display_proposed_tag, display_status, display_success,
};
