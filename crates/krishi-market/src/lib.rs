//! Mandi price data and government scheme content for KrishiSahay.
//!
//! Queries the open government dataset and degrades to embedded tables on
//! any failure or empty result. Unlike the other adapters this one never
//! fails outward; the `Live`/`Fallback` tag says which data you got.

pub mod client;
pub mod error;
pub mod fallback;
pub mod filter;
pub mod schemes;
pub mod types;

pub use client::MarketClient;
pub use error::MarketError;
pub use fallback::fallback_rows;
pub use filter::{matches_search, sort_by_price, PriceColumn, SortDir};
pub use schemes::{schemes, SchemeClient, SchemeRecord};
pub use types::{MarketData, MarketRecord};
