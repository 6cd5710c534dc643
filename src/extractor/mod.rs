pub mod json;
pub mod with_raw;
