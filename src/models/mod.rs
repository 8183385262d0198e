pub mod catalog;
pub mod storage;
pub mod video;

pub use catalog::*;
pub use storage::*;
pub use video::*;
