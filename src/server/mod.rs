//! Accepting connections and dispatching them to handlers.

pub mod listener;

pub use listener::Listener;
