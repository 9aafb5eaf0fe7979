// Adapters layer: file formats on either side of the matcher.

pub mod input;
pub mod output;
