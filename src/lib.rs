pub mod chat;
pub mod domain;
pub mod processing;
pub mod search;
pub mod storage;
