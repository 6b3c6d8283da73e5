mod helpers;

// Re-export
pub use assertions::{assert_commands_in_range, assert_strips_reassemble};
pub use helpers::*;
