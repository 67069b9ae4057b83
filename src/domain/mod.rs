pub mod bus;
pub mod error;
pub mod event;
pub mod id;
pub mod money;
pub mod provider;
pub mod session;
