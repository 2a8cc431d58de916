//! File plumbing around the renderer: verbatim copies, `theme.conf`
//! patching, and removal of build output.

mod clean;
mod copy;
mod patch;

pub use clean::clean_dir;
pub use copy::{copy_file, copy_icons};
pub use patch::{patch_config, patch_text, LINE_ENDING};
