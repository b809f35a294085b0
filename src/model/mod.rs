pub mod word;

pub use word::*;
