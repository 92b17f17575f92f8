// tests/support/mocks/mod.rs
pub mod lookup;
pub mod time;

pub use lookup::{CountingLookup, FailingLookup, RendezvousLookup};
pub use time::{DummyClock, fixed_now};
