//! # NEIS Adapters
//!
//! Concrete [`SchoolResolver`](geupsik_common::ports::SchoolResolver) and
//! [`MealFetcher`](geupsik_common::ports::MealFetcher) implementations over the
//! NEIS open API (`https://open.neis.go.kr/hub`).
//!
//! * [`client`]: request conventions shared by both services.
//! * [`envelope`]: strict decoding of the response wrapper.
//! * [`school`] / [`meal`]: row types and the port implementations.

pub mod client;
pub mod envelope;
pub mod meal;
pub mod school;

pub use client::{Endpoint, NeisClient};
pub use meal::NeisMealFetcher;
pub use school::NeisSchoolResolver;
