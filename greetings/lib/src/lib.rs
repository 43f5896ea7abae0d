//! Greetings library.
//!
//! Generates a short, randomly worded greeting for each name it is given.
//!
//! ## Core Types
//!
//! - [`Greeter`] - Generates greetings from an owned random source
//! - [`Greetings`] - Greetings keyed by name
//! - [`DuplicatePolicy`] - How a batch treats repeated names
//! - [`GreetingError`] - Validation failures
//!
//! ## Convenience Functions
//!
//! - [`hello`] - Greet one name using the thread-local generator
//! - [`hellos`] - Greet many names using the thread-local generator
//! - [`greeting_candidates`] - Every greeting a name could receive
//!
//! ## Logging
//!
//! Generated greetings, overwritten duplicates, and rejected names are
//! reported through `tracing`. Install a subscriber to see them.

mod error;
mod greeter;
mod types;

pub use error::GreetingError;
pub use greeter::{
    DEFAULT_NAMES, GREETING_FILLERS, Greeter, greeting_candidates, hello, hellos,
};
pub use types::{DuplicatePolicy, Greetings};
