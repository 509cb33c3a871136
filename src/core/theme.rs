//! Light/dark theme preference
//!
//! The preference is read once at startup (stored value, else the system
//! preference), written back on every change, and applied as a `dark` class
//! on the document root. Storage and class application are hooks so the
//! settings can be exercised without a browser.

use std::cell::RefCell;
use std::collections::HashMap;

use derive_more::Display;
use thiserror::Error;

/// Storage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on the document root for the dark theme.
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum ThemePreference {
    #[display("light")]
    Light,
    #[display("dark")]
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `light`/`dark` is ignored.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("could not write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Key/value persistence for the preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Where the preference becomes visible (the document root's class list).
pub trait ThemeSurface {
    fn set_dark(&self, dark: bool);
}

/// In-memory store, used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The process-wide theme value with explicit persistence.
#[derive(Debug)]
pub struct ThemeSettings<S, T> {
    current: ThemePreference,
    store: S,
    surface: T,
}

impl<S: PreferenceStore, T: ThemeSurface> ThemeSettings<S, T> {
    /// Resolve the startup preference and apply it to the surface.
    pub fn new(store: S, surface: T, system_prefers_dark: bool) -> Self {
        let current = Self::resolve(&store, system_prefers_dark);
        surface.set_dark(current.is_dark());
        Self {
            current,
            store,
            surface,
        }
    }

    /// Stored preference if valid, else the system preference.
    pub fn resolve(store: &S, system_prefers_dark: bool) -> ThemePreference {
        store
            .load(THEME_STORAGE_KEY)
            .and_then(|value| ThemePreference::parse(&value))
            .unwrap_or_else(|| ThemePreference::from_system(system_prefers_dark))
    }

    pub fn get(&self) -> ThemePreference {
        self.current
    }

    /// Persist and apply a new preference.
    ///
    /// A failed write is logged; the preference still changes for this session.
    pub fn set(&mut self, preference: ThemePreference) {
        if let Err(e) = self.store.save(THEME_STORAGE_KEY, preference.as_str()) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
        self.current = preference;
        self.surface.set_dark(preference.is_dark());
    }

    /// Flip between light and dark, returning the new preference.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &T {
        &self.surface
    }
}
