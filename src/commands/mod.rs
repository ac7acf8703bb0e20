pub mod completions;
pub mod detect;
pub mod formats;
