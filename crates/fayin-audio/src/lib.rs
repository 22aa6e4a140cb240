pub mod prober;
pub mod resolver;

pub use prober::{AudioProber, FsProber, HttpProber};
pub use resolver::{AudioHit, AudioResolver};
