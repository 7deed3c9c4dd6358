//! Testing utilities for Violet clients and providers.
//!
//! ## Fake API
//!
//! [`FakeVioletApi`] runs a `wiremock` server that behaves like the Violet
//! webhook endpoints: it logs users in, stores webhooks in memory, answers
//! `404` for unknown ids, and rejects requests without the application and
//! token headers. Every request is journaled so tests can assert how many
//! calls an operation made.
//!
//! ```no_run
//! use violet_testing::FakeVioletApi;
//!
//! # tokio_test::block_on(async {
//! let api = FakeVioletApi::start().await;
//! let id = api.insert_webhook("ORDER_UPDATED", "https://example.com/hook");
//!
//! // point a client at api.base_url() ...
//!
//! assert_eq!(api.count("GET", &format!("events/webhooks/{id}")), 0);
//! # });
//! ```

mod mock;

pub use mock::{FakeAccount, FakeVioletApi, RecordedRequest};
