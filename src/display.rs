//! Primary display geometry and its cache.

use crate::error::{Error, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Size of the primary display in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplaySize {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl DisplaySize {
    /// Create a new display size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Reject geometry that cannot bound a cursor.
    pub fn validate(self) -> Result<Self> {
        if self.width <= 0 || self.height <= 0 {
            Err(Error::DisplayUnavailable(format!(
                "platform reported an empty display ({self})"
            )))
        } else {
            Ok(self)
        }
    }
}

impl fmt::Display for DisplaySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Lazily filled cache of the primary display size.
///
/// Every platform query bumps the generation counter, so callers can tell
/// whether a value they hold predates the most recent refresh.
#[derive(Debug, Default)]
pub struct DisplayCache {
    cached: Option<DisplaySize>,
    generation: u64,
}

impl DisplayCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached size, or run `fetch` when empty or when `refresh` is set.
    ///
    /// A failed fetch leaves the cache untouched and is returned as is.
    pub fn query<F>(&mut self, refresh: bool, fetch: F) -> Result<DisplaySize>
    where
        F: FnOnce() -> Result<DisplaySize>,
    {
        if !refresh && let Some(size) = self.cached {
            return Ok(size);
        }

        let fresh = fetch()?.validate()?;
        if let Some(cached) = self.cached
            && cached != fresh
        {
            log::warn!("{}", Error::StaleState { cached, fresh });
        }

        self.cached = Some(fresh);
        self.generation += 1;
        log::debug!(
            "primary display is {fresh} (generation {})",
            self.generation
        );
        Ok(fresh)
    }

    /// The cached size, without querying.
    pub fn cached(&self) -> Option<DisplaySize> {
        self.cached
    }

    /// Number of platform queries that have populated the cache.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drop the cached value so the next query goes to the platform.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_cached_value_skips_platform() {
        let calls = Cell::new(0);
        let fetch = || {
            calls.set(calls.get() + 1);
            Ok(DisplaySize::new(1920, 1080))
        };

        let mut cache = DisplayCache::new();
        let first = cache.query(false, fetch).unwrap();
        let second = cache.query(false, fetch).unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.generation(), 1);
    }

    #[test]
    fn test_refresh_bumps_generation() {
        let mut cache = DisplayCache::new();
        cache
            .query(false, || Ok(DisplaySize::new(1920, 1080)))
            .unwrap();
        let fresh = cache
            .query(true, || Ok(DisplaySize::new(2560, 1440)))
            .unwrap();

        assert_eq!(fresh, DisplaySize::new(2560, 1440));
        assert_eq!(cache.cached(), Some(fresh));
        assert_eq!(cache.generation(), 2);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_value() {
        let mut cache = DisplayCache::new();
        cache
            .query(false, || Ok(DisplaySize::new(800, 600)))
            .unwrap();
        let err = cache
            .query(true, || Err(Error::DisplayUnavailable("headless".into())))
            .unwrap_err();

        assert!(matches!(err, Error::DisplayUnavailable(_)));
        assert_eq!(cache.cached(), Some(DisplaySize::new(800, 600)));
        assert_eq!(cache.generation(), 1);
    }

    #[test]
    fn test_empty_display_is_unavailable() {
        let mut cache = DisplayCache::new();
        let err = cache
            .query(false, || Ok(DisplaySize::new(0, 1080)))
            .unwrap_err();
        assert!(matches!(err, Error::DisplayUnavailable(_)));
        assert_eq!(cache.cached(), None);
    }

    #[test]
    fn test_invalidate_forces_query() {
        let calls = Cell::new(0);
        let fetch = || {
            calls.set(calls.get() + 1);
            Ok(DisplaySize::new(1280, 720))
        };

        let mut cache = DisplayCache::new();
        cache.query(false, fetch).unwrap();
        cache.invalidate();
        cache.query(false, fetch).unwrap();
        assert_eq!(calls.get(), 2);
    }
}
