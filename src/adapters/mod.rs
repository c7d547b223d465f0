// Adapters layer: concrete implementations of the domain ports (http, storage, notifications).

pub mod http;
pub mod notify;
pub mod storage;
