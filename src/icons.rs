//! Icon caching for podcrab
//!
//! This module provides the memoizing icon cache backing the channel and
//! episode tree views. The actual themed-icon backend stays behind the
//! [`IconSource`] trait, so the cache itself carries no toolkit dependency.

use crate::config::{BULLET_ICON_NAME, Config, FALLBACK_ICON_NAME};
use crate::error::Result;
use log::warn;
use std::collections::HashMap;

/// A themed-icon backend
///
/// Implementations resolve icon names against the current icon theme and
/// composite status badges onto rendered icons.
pub trait IconSource {
    /// The rendered icon type produced by this backend
    type Icon: Clone;

    /// Loads a themed icon by name at the given pixel size
    fn load(&self, name: &str, size: u32) -> Result<Self::Icon>;

    /// Composites a status badge onto the bottom-right corner of an icon
    fn composite_badge(&self, icon: &mut Self::Icon, badge: &Self::Icon);
}

/// A memoizing cache of rendered tree view icons
///
/// Icons are cached by `(name, bullet)` with no eviction; the set of icons a
/// tree view displays is small and fixed.
pub struct IconCache<S: IconSource> {
    source: S,
    icon_size: u32,
    emblem_size: u32,
    cache: HashMap<(String, bool), S::Icon>,
}

impl<S: IconSource> IconCache<S> {
    /// Creates an icon cache with default sizes
    pub fn new(source: S) -> Self {
        Self::with_config(source, &Config::default())
    }

    /// Creates an icon cache with sizes taken from a configuration
    pub fn with_config(source: S, config: &Config) -> Self {
        Self {
            source,
            icon_size: config.icon_size,
            emblem_size: config.emblem_size,
            cache: HashMap::new(),
        }
    }

    /// Loads an icon suitable for display in a tree view row
    ///
    /// Optionally composites a status bullet onto the icon. Icons that cannot
    /// be resolved fall back to the default icon; the bullet is dropped when
    /// the emblem itself cannot be loaded.
    ///
    /// # Arguments
    /// * `name` - The themed icon name
    /// * `bullet` - Whether to composite the status bullet
    ///
    /// # Returns
    /// Returns the rendered icon, or None if not even the default icon can be
    /// loaded
    pub fn get(&mut self, name: &str, bullet: bool) -> Option<S::Icon> {
        let key = (name.to_string(), bullet);
        if let Some(icon) = self.cache.get(&key) {
            return Some(icon.clone());
        }

        let mut icon = match self.source.load(name, self.icon_size) {
            Ok(icon) => icon,
            Err(error) => {
                warn!("Cannot load icon '{name}', will use default icon: {error}");
                match self.source.load(FALLBACK_ICON_NAME, self.icon_size) {
                    Ok(icon) => icon,
                    Err(error) => {
                        warn!("Cannot load default icon: {error}");
                        return None;
                    }
                }
            }
        };

        if bullet {
            match self.source.load(BULLET_ICON_NAME, self.emblem_size) {
                Ok(badge) => self.source.composite_badge(&mut icon, &badge),
                Err(error) => warn!("Error adding emblem to icon '{name}': {error}"),
            }
        }

        self.cache.insert(key, icon.clone());
        Some(icon)
    }

    /// Returns the number of cached icons
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns true if no icons have been cached yet
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::RefCell;

    /// Fake backend that renders icons as strings and counts loads
    struct FakeSource {
        known: Vec<&'static str>,
        loads: RefCell<usize>,
    }

    impl FakeSource {
        fn new(known: Vec<&'static str>) -> Self {
            Self {
                known,
                loads: RefCell::new(0),
            }
        }
    }

    impl IconSource for FakeSource {
        type Icon = String;

        fn load(&self, name: &str, size: u32) -> Result<String> {
            *self.loads.borrow_mut() += 1;
            if self.known.contains(&name) {
                Ok(format!("{name}@{size}"))
            } else {
                Err(Error::IconLoadFailed {
                    name: name.to_string(),
                    context: "not in theme".to_string(),
                })
            }
        }

        fn composite_badge(&self, icon: &mut String, badge: &String) {
            icon.push('+');
            icon.push_str(badge);
        }
    }

    #[test]
    fn test_get_loads_at_configured_size() {
        let source = FakeSource::new(vec!["podcast"]);
        let mut cache = IconCache::new(source);
        assert_eq!(cache.get("podcast", false), Some("podcast@16".to_string()));
    }

    #[test]
    fn test_get_memoizes_by_name_and_bullet() {
        let source = FakeSource::new(vec!["podcast", BULLET_ICON_NAME]);
        let mut cache = IconCache::new(source);

        let plain = cache.get("podcast", false).unwrap();
        let badged = cache.get("podcast", true).unwrap();
        assert_ne!(plain, badged);
        assert_eq!(cache.len(), 2);

        let loads_before = *cache.source.loads.borrow();
        assert_eq!(cache.get("podcast", false), Some(plain));
        assert_eq!(cache.get("podcast", true), Some(badged));
        assert_eq!(*cache.source.loads.borrow(), loads_before);
    }

    #[test]
    fn test_get_composites_bullet() {
        let source = FakeSource::new(vec!["podcast", BULLET_ICON_NAME]);
        let mut cache = IconCache::new(source);
        assert_eq!(
            cache.get("podcast", true),
            Some(format!("podcast@16+{BULLET_ICON_NAME}@10"))
        );
    }

    #[test]
    fn test_get_falls_back_to_default_icon() {
        let source = FakeSource::new(vec![FALLBACK_ICON_NAME]);
        let mut cache = IconCache::new(source);
        assert_eq!(
            cache.get("missing", false),
            Some(format!("{FALLBACK_ICON_NAME}@16"))
        );
    }

    #[test]
    fn test_get_keeps_plain_icon_when_emblem_fails() {
        let source = FakeSource::new(vec!["podcast"]);
        let mut cache = IconCache::new(source);
        assert_eq!(cache.get("podcast", true), Some("podcast@16".to_string()));
    }

    #[test]
    fn test_get_reports_none_when_everything_fails() {
        let source = FakeSource::new(vec![]);
        let mut cache = IconCache::new(source);
        assert_eq!(cache.get("missing", false), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_with_config_sizes() {
        let source = FakeSource::new(vec!["podcast"]);
        let config = Config::new().with_icon_size(24);
        let mut cache = IconCache::with_config(source, &config);
        assert_eq!(cache.get("podcast", false), Some("podcast@24".to_string()));
    }
}
