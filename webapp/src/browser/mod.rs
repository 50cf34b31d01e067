pub mod dom;
pub mod listener;
pub mod storage;
