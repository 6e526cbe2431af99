use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};

/// The name of the wildcard arm, used when the selector doesn't resolve to any variant.
pub const DEFAULT_ARM: &str = "_DEFAULT_";

type Arm<'a, R> = Box<dyn Fn() -> R + 'a>;

/// A table of callbacks keyed by variant name, passed to [`Enum::match_on`](super::Enum::match_on)
/// or [`Enum::try_match`](super::Enum::try_match).
///
/// Handlers are borrowed during dispatch, so one table can be reused for any number of matches.
///
/// # Examples
/// ```
/// # use seqkit::collections::{Enum, Handlers};
/// let mut status = Enum::new();
/// status.add_with_value("SUCCESS", 5);
/// status.add("FAILURE");
/// status.freeze();
///
/// let handlers = Handlers::new()
///     .on("SUCCESS", || 1)
///     .on("FAILURE", || 2)
///     .otherwise(|| 0);
///
/// assert_eq!(status.match_on(6, &handlers), Some(2));
/// assert_eq!(status.match_on("SUCCESS", &handlers), Some(1));
/// assert_eq!(status.match_on("UNKNOWN", &handlers), Some(0));
/// ```
pub struct Handlers<'a, R> {
    arms: HashMap<String, Arm<'a, R>>,
}

impl<'a, R> Handlers<'a, R> {
    pub fn new() -> Handlers<'a, R> {
        Handlers {
            arms: HashMap::new(),
        }
    }

    /// Registers `f` as the handler for the variant called `name`, replacing any previous one.
    pub fn on<F>(mut self, name: impl Into<String>, f: F) -> Handlers<'a, R>
    where
        F: Fn() -> R + 'a,
    {
        self.arms.insert(name.into(), Box::new(f));
        self
    }

    /// Registers the wildcard arm. Equivalent to `on(DEFAULT_ARM, f)`.
    ///
    /// The wildcard only handles selectors that don't resolve to a variant; it doesn't excuse a
    /// registered variant from needing its own handler.
    pub fn otherwise<F>(self, f: F) -> Handlers<'a, R>
    where
        F: Fn() -> R + 'a,
    {
        self.on(DEFAULT_ARM, f)
    }

    /// Returns true if there is a handler registered under `name`.
    pub fn covers(&self, name: &str) -> bool {
        self.arms.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    pub(crate) fn call(&self, name: &str) -> Option<R> {
        self.arms.get(name).map(|arm| arm())
    }
}

impl<R> Default for Handlers<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Debug for Handlers<'_, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.arms.keys().collect();
        names.sort();
        f.debug_struct("Handlers").field("arms", &names).finish()
    }
}
