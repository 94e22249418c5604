pub mod refresh;
pub mod release;
pub mod repo;
pub mod result;
pub mod server;
pub mod sources;
pub mod storage;
