//! `localStorage`-backed locale preference.
//!
//! Intentionally small and synchronous at the browser API boundary. The stored value is
//! the bare locale token (`"en"`), kept compatible with what the previous site version
//! persisted under the same key.

use content_model::Locale;

/// `localStorage` key holding the persisted locale token.
pub const LOCALE_PREF_KEY: &str = "language";

/// Browser locale preference backed by `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalePrefs;

impl LocalePrefs {
    /// Loads the persisted locale; absent, unreadable, or unknown tokens yield `None`.
    pub fn load(self) -> Option<Locale> {
        self.load_raw().as_deref().and_then(Locale::parse)
    }

    /// Persists the locale token.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the write fails.
    pub fn save(self, locale: Locale) -> Result<(), String> {
        self.save_raw(locale.as_str())
    }

    fn load_raw(self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(LOCALE_PREF_KEY).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn save_raw(self, token: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| "localStorage unavailable".to_string())?;
            storage
                .set_item(LOCALE_PREF_KEY, token)
                .map_err(|err| format!("localStorage set_item failed: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = token;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_wasm_prefs_are_inert() {
        let prefs = LocalePrefs;
        assert_eq!(prefs.load(), None);
        assert_eq!(prefs.save(Locale::Jp), Ok(()));
    }
}
