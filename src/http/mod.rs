//! HTTP client layer — `PriceFeedHttp`, a plain fetch-and-parse boundary.

pub mod client;

pub use client::PriceFeedHttp;
