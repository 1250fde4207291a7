pub mod client;
pub mod compress;
pub mod local;
pub mod orchestrator;
pub mod remote;
pub mod stations;
pub mod storage;
pub mod uploads;
