pub mod storage;
pub mod timer;
