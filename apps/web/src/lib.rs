//! Credfolio web gateway: viewer deep links plus the extraction and storage
//! pass-through proxies the front end talks to.

pub mod config;
pub mod errors;
pub mod extract;
pub mod routes;
pub mod state;
pub mod storage;
pub mod viewer;
