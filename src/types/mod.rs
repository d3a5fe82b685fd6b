//! Types shared between the controller, the worker threads and the UI.

mod item;
mod request;

pub use item::Match;
pub use request::{Direction, SearchRequest};
