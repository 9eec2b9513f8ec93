pub mod record;
pub mod summary;

pub use record::*;
pub use summary::*;
