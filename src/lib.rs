pub mod config;
pub mod convert;
pub mod export;
pub mod model;

pub use config::*;
pub use convert::*;
pub use export::*;
pub use model::*;
