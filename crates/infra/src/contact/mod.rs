//! Contact enquiry delivery over HTTP

pub mod gateway;

pub use gateway::HttpContactGateway;
