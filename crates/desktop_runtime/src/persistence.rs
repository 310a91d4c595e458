//! Theme preference persistence over the host [`PrefsStore`] contract.

use platform_host::{load_pref_with, save_pref_with, PrefsStore, THEME_PREF_KEY};

use crate::theme::ThemeName;

/// Loads the persisted theme display name, if any.
///
/// # Errors
///
/// Returns the store or JSON error.
pub async fn load_theme(prefs: &dyn PrefsStore) -> Result<Option<String>, String> {
    load_pref_with(prefs, THEME_PREF_KEY).await
}

/// Persists `theme` by display name.
///
/// # Errors
///
/// Returns the store or JSON error.
pub async fn persist_theme(prefs: &dyn PrefsStore, theme: ThemeName) -> Result<(), String> {
    save_pref_with(prefs, THEME_PREF_KEY, &theme.display_name()).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn persisted_theme_is_loaded_by_display_name() {
        let prefs = MemoryPrefsStore::default();
        block_on(persist_theme(&prefs, ThemeName::OldRadio)).expect("persist");
        assert_eq!(
            block_on(load_theme(&prefs)).expect("load"),
            Some("Old Radio".to_string())
        );
    }

    #[test]
    fn missing_theme_loads_as_none() {
        let prefs = MemoryPrefsStore::default();
        assert_eq!(block_on(load_theme(&prefs)).expect("load"), None);
    }
}
