//! Alias allocation for quantified activity bindings.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// Alias allocation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Text placed before the counter in every alias.
    pub alias_prefix: String,
    /// Counter value of the first alias.
    pub first_index: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            alias_prefix: "activity alias ".to_string(),
            first_index: 0,
        }
    }
}

/// A constraint-compilation session.
///
/// Owns the alias counter used by
/// [`Constraint::for_each_activity`](super::Constraint::for_each_activity).
/// Aliases are unique within a session and allocated in a deterministic
/// order, so the same build code always produces the same document. A
/// session may be shared across threads; increments are atomic.
///
/// # Examples
///
/// ```
/// use mission_constraints::builder::Session;
///
/// let session = Session::new();
/// assert_eq!(session.next_alias(), "activity alias 0");
/// assert_eq!(session.next_alias(), "activity alias 1");
/// ```
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    /// Aliases handed out so far.
    allocated: AtomicU64,
}

impl Session {
    /// Creates a session with default settings.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates a session with explicit settings.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            allocated: AtomicU64::new(0),
        }
    }

    /// The settings in use.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Allocates a fresh alias.
    ///
    /// The index wraps past `u64::MAX` back to 0, so aliases stay unique
    /// for 2^64 allocations whatever `first_index` is.
    pub fn next_alias(&self) -> String {
        let n = self.allocated.fetch_add(1, Ordering::Relaxed);
        let index = self.config.first_index.wrapping_add(n);
        let alias = format!("{}{}", self.config.alias_prefix, index);
        trace!(alias = %alias, "allocated activity alias");
        alias
    }

    /// Number of aliases allocated so far.
    pub fn allocated(&self) -> u64 {
        self.allocated.load(Ordering::Relaxed)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
