//! Insight Agent: an HTTP service for analyzing customer feedback text.
//!
//! Exposes a small JSON API: `POST /analyze` computes word and non-whitespace
//! character counts for a submitted string, and `GET /health` reports
//! liveness for load balancers and orchestrators.

pub mod analysis;
pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
