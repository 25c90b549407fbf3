//! marquee - an in-memory movie catalogue service
//!
//! The [`catalogue`] module holds the record-management core. The
//! [`http_server`] and [`cli`] modules wrap it in a JSON HTTP API and a
//! command-line entry point.

pub mod catalogue;
pub mod cli;
pub mod http_server;
pub mod observability;
