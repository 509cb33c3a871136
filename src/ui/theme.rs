//! Theme context module for managing the light/dark theme
//!
//! Provides:
//! - ThemeContext for reactive theme state
//! - localStorage persistence and the `dark` root class as browser hooks
//! - System theme detection via prefers-color-scheme as the startup fallback
//! - ThemeToggle button

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::theme::{PreferenceStore, StorageError, ThemePreference, ThemeSettings, ThemeSurface};
#[cfg(not(feature = "ssr"))]
use crate::core::theme::DARK_CLASS;
use crate::ui::icon::{Icon, icons};

/// Preference store backed by `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(not(feature = "ssr"))]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(feature = "ssr")]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(not(feature = "ssr"))]
        {
            let storage = web_sys::window()
                .and_then(|window| window.local_storage().ok().flatten())
                .ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write {
                    key: key.to_string(),
                    reason: format!("{:?}", e),
                })
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}

/// The `<html>` element's class list
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl ThemeSurface for DocumentRoot {
    fn set_dark(&self, dark: bool) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(html) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element())
            {
                let class_list = html.class_list();
                if dark {
                    let _ = class_list.add_1(DARK_CLASS);
                } else {
                    let _ = class_list.remove_1(DARK_CLASS);
                }
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = dark;
        }
    }
}

pub type BrowserThemeSettings = ThemeSettings<LocalStorageStore, DocumentRoot>;

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current preference
    pub preference: RwSignal<ThemePreference>,
    /// Whether the dark theme is active
    pub is_dark: Memo<bool>,
    settings: StoredValue<BrowserThemeSettings>,
}

impl ThemeContext {
    /// Set the preference, persist it and apply the root class
    pub fn set(&self, preference: ThemePreference) {
        self.settings.update_value(|settings| settings.set(preference));
        self.preference.set(preference);
    }

    /// Switch between light and dark
    pub fn toggle(&self) {
        if let Some(next) = self.settings.try_update_value(|settings| settings.toggle()) {
            self.preference.set(next);
        }
    }
}

/// Detect system color scheme preference
fn detect_system_prefers_dark() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                return media_query.matches();
            }
        }
    }
    false
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let settings = ThemeSettings::new(LocalStorageStore, DocumentRoot, detect_system_prefers_dark());
    let preference = RwSignal::new(settings.get());
    let is_dark = Memo::new(move |_| preference.get().is_dark());

    let ctx = ThemeContext {
        preference,
        is_dark,
        settings: StoredValue::new(settings),
    };

    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

/// Theme toggle button component
///
/// Both icons are rendered and the root `dark` class picks one, so the
/// server markup matches whatever preference the browser resolves.
#[component]
pub fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    view! {
        <button
            class="p-2 rounded-full text-gray-600 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            <Icon name=icons::MOON class="w-5 h-5 block dark:hidden" />
            <Icon name=icons::SUN class="w-5 h-5 hidden dark:block" />
        </button>
    }
}
