//! Keyed registry of live review sessions.
//!
//! Each interaction channel (a terminal, a browser connection) owns one
//! session under its key. Sessions are created on first access and live
//! until [`SessionStore::reset`] or until the store is dropped.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::clock::{Clock, SystemClock};
use crate::entities::Scan;
use crate::session::ReviewSession;

/// In-memory map from session key to [`ReviewSession`].
///
/// Mutation goes through `&mut self`. Callers that share a store between
/// threads wrap it in a `Mutex`.
#[derive(Debug)]
pub struct SessionStore<C: Clock + Clone = SystemClock> {
    sessions: HashMap<String, ReviewSession<C>>,
    clock: C,
}

impl SessionStore<SystemClock> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for SessionStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock + Clone> SessionStore<C> {
    /// Build a store whose sessions all read time from clones of `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            sessions: HashMap::new(),
            clock,
        }
    }

    /// Return the session for `key`, creating it from `load()` on first access.
    ///
    /// `load` runs only when no session exists for the key.
    pub fn get_or_create<F>(&mut self, key: &str, load: F) -> &mut ReviewSession<C>
    where
        F: FnOnce() -> Vec<Scan>,
    {
        let clock = &self.clock;
        self.sessions.entry(key.to_string()).or_insert_with(|| {
            let scans = load();
            tracing::debug!(session_key = key, scans = scans.len(), "review session created");
            ReviewSession::with_clock(scans, clock.clone())
        })
    }

    /// Fallible variant of [`get_or_create`](Self::get_or_create) for loaders
    /// that read from disk or the network.
    ///
    /// # Errors
    ///
    /// Returns the loader's error; the store is unchanged in that case.
    pub fn try_get_or_create<F, E>(
        &mut self,
        key: &str,
        load: F,
    ) -> Result<&mut ReviewSession<C>, E>
    where
        F: FnOnce() -> Result<Vec<Scan>, E>,
    {
        match self.sessions.entry(key.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let scans = load()?;
                tracing::debug!(session_key = key, scans = scans.len(), "review session created");
                Ok(entry.insert(ReviewSession::with_clock(scans, self.clock.clone())))
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ReviewSession<C>> {
        self.sessions.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut ReviewSession<C>> {
        self.sessions.get_mut(key)
    }

    /// Discard the session for `key`. Returns whether one existed.
    pub fn reset(&mut self, key: &str) -> bool {
        let existed = self.sessions.remove(key).is_some();
        if existed {
            tracing::debug!(session_key = key, "review session discarded");
        }
        existed
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.sessions.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Keys of live sessions, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.sessions.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
