pub mod rpc;
pub mod store;
