//! Metro route planner server.
//!
//! A web application that answers: "what is the cheapest way to get from
//! this station to that one, and where do I change line?"
//!
//! The transit network is loaded once at startup from a route-definition
//! file and queried read-only thereafter, so any number of route queries
//! can run concurrently without coordination.

pub mod domain;
pub mod ingest;
pub mod network;
pub mod planner;
pub mod render;
pub mod web;
