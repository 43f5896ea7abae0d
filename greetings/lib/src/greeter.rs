//! Greeting generation.

use std::collections::BTreeMap;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::GreetingError;
use crate::types::{DuplicatePolicy, Greetings};

/// Phrases that follow the name in a greeting.
pub const GREETING_FILLERS: &[&str] = &["welcome", "great to see you", "well met"];

/// Names greeted when the caller supplies none.
pub const DEFAULT_NAMES: &[&str] = &["Laura", "Alejandro", "Soledad"];

/// Returns every greeting that could be generated for `name`, in filler order.
///
/// ## Examples
///
/// ```
/// use greetings_lib::greeting_candidates;
///
/// let candidates = greeting_candidates("Laura");
/// assert_eq!(candidates[0], "Hi Laura, welcome!");
/// ```
pub fn greeting_candidates(name: &str) -> Vec<String> {
    GREETING_FILLERS
        .iter()
        .map(|filler| format_greeting(name, filler))
        .collect()
}

fn format_greeting(name: &str, filler: &str) -> String {
    format!("Hi {name}, {filler}!")
}

/// Generates greetings using an owned random source.
///
/// The random source picks the filler phrase for each greeting. Use
/// [`Greeter::seeded`] for reproducible output.
///
/// ## Examples
///
/// ```
/// use greetings_lib::{Greeter, greeting_candidates};
///
/// let mut greeter = Greeter::new();
/// let greetings = greeter.hellos(["Laura", "Alejandro", "Soledad"]).unwrap();
///
/// assert_eq!(greetings.len(), 3);
/// let laura = greetings.get("Laura").unwrap();
/// assert!(greeting_candidates("Laura").iter().any(|c| c == laura));
/// ```
#[derive(Debug, Clone)]
pub struct Greeter<R = ThreadRng> {
    rng: R,
    duplicates: DuplicatePolicy,
}

impl Greeter<ThreadRng> {
    /// Creates a greeter backed by the thread-local random generator.
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for Greeter<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Greeter<StdRng> {
    /// Creates a greeter whose output is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Greeter<R> {
    /// Creates a greeter backed by the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            duplicates: DuplicatePolicy::default(),
        }
    }

    /// Sets how [`Greeter::hellos`] treats repeated names.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Generates a greeting for a single name.
    ///
    /// ## Errors
    ///
    /// Returns [`GreetingError::EmptyName`] if `name` is empty.
    pub fn hello(&mut self, name: &str) -> Result<String, GreetingError> {
        if name.is_empty() {
            debug!("rejected empty name");
            return Err(GreetingError::EmptyName);
        }

        let filler = GREETING_FILLERS[self.rng.gen_range(0..GREETING_FILLERS.len())];
        let greeting = format_greeting(name, filler);
        debug!(name = %name, greeting = %greeting, "generated greeting");

        Ok(greeting)
    }

    /// Generates a greeting for every name, keyed by name.
    ///
    /// Stops at the first invalid name and returns its error; no partial
    /// result is produced. Repeated names are handled according to the
    /// greeter's [`DuplicatePolicy`]. An empty input yields empty greetings.
    ///
    /// ## Errors
    ///
    /// - [`GreetingError::EmptyName`] if any name is empty.
    /// - [`GreetingError::DuplicateName`] if a name repeats under
    ///   [`DuplicatePolicy::Reject`].
    pub fn hellos<I, S>(&mut self, names: I) -> Result<Greetings, GreetingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut greetings = Greetings::new();

        for name in names {
            let name = name.as_ref();
            let greeting = self.hello(name)?;

            if self.duplicates == DuplicatePolicy::Reject && greetings.contains(name) {
                debug!(name = %name, "rejected duplicate name");
                return Err(GreetingError::DuplicateName {
                    name: name.to_string(),
                });
            }

            if greetings.insert(name.to_string(), greeting).is_some() {
                debug!(name = %name, "duplicate name replaced an earlier greeting");
            }
        }

        Ok(greetings)
    }

    /// Generates a greeting for every name, keeping one per occurrence.
    ///
    /// Greetings for a repeated name are kept in input order. The duplicate
    /// policy does not apply here.
    ///
    /// ## Errors
    ///
    /// Returns [`GreetingError::EmptyName`] if any name is empty.
    pub fn hellos_grouped<I, S>(
        &mut self,
        names: I,
    ) -> Result<BTreeMap<String, Vec<String>>, GreetingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for name in names {
            let name = name.as_ref();
            let greeting = self.hello(name)?;
            grouped.entry(name.to_string()).or_default().push(greeting);
        }

        Ok(grouped)
    }
}

/// Generates a greeting for `name` with a fresh thread-local generator.
///
/// ## Errors
///
/// Returns [`GreetingError::EmptyName`] if `name` is empty.
pub fn hello(name: &str) -> Result<String, GreetingError> {
    Greeter::new().hello(name)
}

/// Generates a greeting for every name with a fresh thread-local generator.
///
/// Later greetings for a repeated name replace earlier ones.
///
/// ## Errors
///
/// Returns [`GreetingError::EmptyName`] at the first empty name.
///
/// ## Examples
///
/// ```
/// use greetings_lib::{GreetingError, hellos};
///
/// let greetings = hellos(["Laura", "Soledad"]).unwrap();
/// assert!(greetings.get("Soledad").unwrap().contains("Soledad"));
///
/// assert_eq!(hellos(["Laura", ""]).unwrap_err(), GreetingError::EmptyName);
/// ```
pub fn hellos<I, S>(names: I) -> Result<Greetings, GreetingError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Greeter::new().hellos(names)
}
