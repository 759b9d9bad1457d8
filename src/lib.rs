//! # SQL Advise Client
//!
//! Client for a remote SQL Server advisory service reached over gRPC.
//!
//! - [`client`] - connection handle, statement splitting and advice
//! - [`proto`] - wire messages and RPC stubs
//! - [`model`] - statement, rule and session records
//! - [`config`] - configuration loading
//! - [`output`] - result formatting
//! - [`error`] - error types and constructors

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod proto;
