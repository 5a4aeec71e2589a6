//! User preferences and the storage port they persist through
//!
//! The design system reads preferences once at construction and writes the
//! affected key back on every change. Storage itself is the host's concern;
//! [`MemoryPreferences`] is the default in-process store.

use crate::color_set::ColorSetName;
use crate::theme::Theme;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};

/// Persisted preference keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum PreferenceKey {
    UseSystemAppearance,
    ExplicitTheme,
    SelectedColorSet,
}

impl PreferenceKey {
    /// Storage key
    pub fn as_str(self) -> &'static str {
        match self {
            PreferenceKey::UseSystemAppearance => "useSystemTheme",
            PreferenceKey::ExplicitTheme => "currentTheme",
            PreferenceKey::SelectedColorSet => "selectedColorSet",
        }
    }

    pub fn all() -> &'static [PreferenceKey] {
        &[
            PreferenceKey::UseSystemAppearance,
            PreferenceKey::ExplicitTheme,
            PreferenceKey::SelectedColorSet,
        ]
    }
}

/// Key/value storage for preferences
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: PreferenceKey) -> Option<String>;
    fn set(&self, key: PreferenceKey, value: String);
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Arc<T> {
    fn get(&self, key: PreferenceKey) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: PreferenceKey, value: String) {
        (**self).set(key, value)
    }
}

/// In-memory preference store
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<FxHashMap<&'static str, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with raw values, as if a previous session had saved them
    pub fn with_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (PreferenceKey, String)>,
    {
        let store = Self::new();
        for (key, value) in values {
            store.set(key, value);
        }
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: PreferenceKey) -> Option<String> {
        self.values.lock().unwrap().get(key.as_str()).cloned()
    }

    fn set(&self, key: PreferenceKey, value: String) {
        self.values.lock().unwrap().insert(key.as_str(), value);
    }
}

/// The user's theming choices
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Preferences {
    /// Follow the platform appearance instead of `theme`
    pub use_system_appearance: bool,
    /// Explicit theme, used when not following the platform
    pub theme: Theme,
    pub color_set: ColorSetName,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            use_system_appearance: true,
            theme: Theme::Light,
            color_set: ColorSetName::ModernBlue,
        }
    }
}

impl Preferences {
    /// Read preferences from `store`
    ///
    /// Missing keys take their default. Values that fail to parse are logged
    /// and also take their default.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let defaults = Self::default();
        Self {
            use_system_appearance: load_value(
                store,
                PreferenceKey::UseSystemAppearance,
                defaults.use_system_appearance,
            ),
            theme: load_value(store, PreferenceKey::ExplicitTheme, defaults.theme),
            color_set: load_value(store, PreferenceKey::SelectedColorSet, defaults.color_set),
        }
    }

    /// Stored representation of one preference
    pub fn value(&self, key: PreferenceKey) -> String {
        match key {
            PreferenceKey::UseSystemAppearance => self.use_system_appearance.to_string(),
            PreferenceKey::ExplicitTheme => self.theme.id().to_string(),
            PreferenceKey::SelectedColorSet => self.color_set.display_name().to_string(),
        }
    }

    /// Write every preference to `store`
    pub fn save(&self, store: &dyn PreferenceStore) {
        for &key in PreferenceKey::all() {
            store.set(key, self.value(key));
        }
    }

    /// Keys whose values differ from `other`
    pub fn changed_keys(&self, other: &Preferences) -> Vec<PreferenceKey> {
        PreferenceKey::all()
            .iter()
            .copied()
            .filter(|&key| self.value(key) != other.value(key))
            .collect()
    }
}

fn load_value<T: std::str::FromStr>(
    store: &dyn PreferenceStore,
    key: PreferenceKey,
    default: T,
) -> T {
    let Some(raw) = store.get(key) else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(
                "Preferences::load - ignoring unreadable value {:?} for '{}'",
                raw,
                key.as_str()
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_yields_defaults() {
        let prefs = Preferences::load(&MemoryPreferences::new());
        assert_eq!(prefs, Preferences::default());
        assert!(prefs.use_system_appearance);
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryPreferences::new();
        let prefs = Preferences {
            use_system_appearance: false,
            theme: Theme::Dark,
            color_set: ColorSetName::CharcoalDark,
        };
        prefs.save(&store);
        assert_eq!(store.get(PreferenceKey::ExplicitTheme).as_deref(), Some("dark"));
        assert_eq!(
            store.get(PreferenceKey::SelectedColorSet).as_deref(),
            Some("Charcoal - Dark")
        );
        assert_eq!(Preferences::load(&store), prefs);
    }

    #[test]
    fn test_unreadable_values_fall_back() {
        let store = MemoryPreferences::with_values([
            (PreferenceKey::UseSystemAppearance, "maybe".to_string()),
            (PreferenceKey::ExplicitTheme, "sepia".to_string()),
            (PreferenceKey::SelectedColorSet, "Deep Purple".to_string()),
        ]);
        let prefs = Preferences::load(&store);
        assert!(prefs.use_system_appearance);
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.color_set, ColorSetName::DeepPurple);
    }

    #[test]
    fn test_changed_keys() {
        let before = Preferences::default();
        let after = Preferences {
            theme: Theme::Dark,
            ..before
        };
        assert_eq!(after.changed_keys(&before), vec![PreferenceKey::ExplicitTheme]);
        assert!(before.changed_keys(&before).is_empty());
    }
}
