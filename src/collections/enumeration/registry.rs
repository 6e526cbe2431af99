use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use log::{debug, error, trace};

use super::{DEFAULT_ARM, EnumValue, Handlers, UnattendedBranches, VariantNotFound};

const SEED_ID: i64 = 1;

/// A registry of named variants, each holding an [`EnumValue`].
///
/// Variants added with [`add`](Enum::add) are numbered automatically: the internal counter starts
/// at 1 and is incremented before each assignment, so the first automatic variant gets 2. Adding
/// a variant with an explicit integer value via [`add_with_value`](Enum::add_with_value) moves the
/// counter to that value, and automatic numbering continues from there.
///
/// A registry starts out open and can be [frozen](Enum::freeze) once. After that every attempt to
/// add a variant is ignored. Re-adding an existing name is always ignored and never changes its
/// value or the counter.
///
/// # Examples
/// ```
/// # use seqkit::collections::{Enum, EnumValue};
/// let mut colors = Enum::new();
/// colors.add("RED");
/// colors.add_with_value("GREEN", 10);
/// colors.add("BLUE");
/// colors.freeze();
///
/// assert_eq!(colors.get("RED"), Some(&EnumValue::Int(2)));
/// assert_eq!(colors.get("BLUE"), Some(&EnumValue::Int(11)));
/// assert_eq!(colors.variant(10).unwrap(), "GREEN");
/// ```
#[derive(Debug, Clone)]
pub struct Enum {
    id: i64,
    frozen: bool,
    items: Vec<(String, EnumValue)>,
    // Name -> position in `items`.
    index: HashMap<String, usize>,
}

impl Enum {
    /// Creates an open registry with no variants.
    pub fn new() -> Enum {
        Enum {
            id: SEED_ID,
            frozen: false,
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Stops the registry from accepting new variants. Freezing twice has no further effect.
    pub fn freeze(&mut self) {
        if !self.frozen {
            debug!("freezing enum with {} variants", self.items.len());
        }
        self.frozen = true;
    }

    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Returns the current value of the automatic numbering counter, which is the value that the
    /// most recent automatic (or explicit integer) variant received, or 1 for a fresh registry.
    pub const fn id(&self) -> i64 {
        self.id
    }

    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the value assigned to the variant called `name`.
    pub fn get(&self, name: &str) -> Option<&EnumValue> {
        self.index.get(name).map(|&i| &self.items[i].1)
    }

    /// Returns an iterator over every variant and its value, in registration order.
    pub fn items(&self) -> impl ExactSizeIterator<Item = (&str, &EnumValue)> + '_ {
        self.items.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Registers `name` with the next automatic value. Returns true if the variant was added,
    /// false if the registry is frozen or `name` is already registered.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if !self.accepts(&name) {
            return false;
        }

        // Wraps on overflow rather than panicking.
        self.id = self.id.wrapping_add(1);
        self.insert(name, EnumValue::Int(self.id));
        true
    }

    /// Registers `name` with an explicit `value`. If `value` is an integer, the automatic counter
    /// is moved to it, so later calls to [`add`](Enum::add) continue numbering from `value + 1`.
    /// Returns false without changing anything if the registry is frozen or `name` is already
    /// registered.
    pub fn add_with_value(&mut self, name: impl Into<String>, value: impl Into<EnumValue>) -> bool {
        let name = name.into();
        if !self.accepts(&name) {
            return false;
        }

        let value = value.into();
        if let Some(id) = value.as_int() {
            self.id = id;
        }
        self.insert(name, value);
        true
    }

    /// Resolves `key` to a variant name.
    ///
    /// A text key that is itself a registered name resolves to that name. Otherwise the variant
    /// whose value equals `key` is returned, taking the earliest registered one if several share
    /// a value.
    ///
    /// # Errors
    /// Returns [`VariantNotFound`] if `key` matches neither a name nor a value.
    pub fn variant(&self, key: impl Into<EnumValue>) -> Result<&str, VariantNotFound> {
        let key = key.into();
        self.resolve(&key).ok_or(VariantNotFound { key })
    }

    /// Calls the handler for the variant that `selector` resolves to and returns its result.
    ///
    /// Before anything is called, every registered variant must have a handler in `handlers`. If
    /// the selector doesn't resolve to a variant, the [wildcard](Handlers::otherwise) arm is used
    /// instead, and [`None`] is returned if there is no wildcard either.
    ///
    /// # Errors
    /// Returns [`UnattendedBranches`] naming every variant without a handler. No handler is called
    /// in that case.
    pub fn try_match<R>(
        &self,
        selector: impl Into<EnumValue>,
        handlers: &Handlers<'_, R>,
    ) -> Result<Option<R>, UnattendedBranches> {
        let names: Vec<String> = self
            .items
            .iter()
            .filter(|(name, _)| !handlers.covers(name))
            .map(|(name, _)| name.clone())
            .collect();
        if !names.is_empty() {
            return Err(UnattendedBranches { names });
        }

        let selector = selector.into();
        let res = match self.resolve(&selector) {
            Some(name) if handlers.covers(name) => handlers.call(name),
            _ => handlers.call(DEFAULT_ARM),
        };
        Ok(res)
    }

    /// Like [`try_match`](Enum::try_match), but treats missing handlers as a bug at the call site.
    ///
    /// # Panics
    /// Panics if any registered variant has no handler in `handlers`, with a message listing every
    /// such variant.
    pub fn match_on<R>(
        &self,
        selector: impl Into<EnumValue>,
        handlers: &Handlers<'_, R>,
    ) -> Option<R> {
        match self.try_match(selector, handlers) {
            Ok(res) => res,
            Err(err) => {
                error!("{err}");
                panic!("{err}")
            },
        }
    }

    fn accepts(&self, name: &str) -> bool {
        if self.frozen {
            debug!("ignoring variant {name:?}, enum is frozen");
            false
        } else if self.index.contains_key(name) {
            debug!("ignoring variant {name:?}, already registered");
            false
        } else {
            true
        }
    }

    fn insert(&mut self, name: String, value: EnumValue) {
        trace!("registered variant {name} = {value}");
        self.index.insert(name.clone(), self.items.len());
        self.items.push((name, value));
    }

    fn resolve(&self, key: &EnumValue) -> Option<&str> {
        if let Some(&i) = key.as_text().and_then(|name| self.index.get(name)) {
            return Some(&self.items[i].0);
        }

        self.items
            .iter()
            .find(|(_, value)| value == key)
            .map(|(name, _)| name.as_str())
    }
}

impl Default for Enum {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Enum {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.items()
                .map(|(name, value)| format!("{name} = {value}"))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
