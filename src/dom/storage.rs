//! LocalStorage-backed preference store.

use web_sys::Storage;

use crate::constants::STORAGE_KEY;
use crate::controller::{PreferenceStore, StoreError};
use crate::theme::Mode;

/// [`PreferenceStore`] over `window.localStorage`.
///
/// Construction never fails; a missing or denied storage object surfaces
/// as [`StoreError`] on every access, which the controller degrades to an
/// in-memory-only mode.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Some(storage),
            Some(Ok(None)) | None => None,
            Some(Err(e)) => {
                log::debug!("localStorage access denied: {e:?}");
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage.as_ref().ok_or(StoreError::Unavailable)
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Result<Option<Mode>, StoreError> {
        let raw = self
            .storage()?
            .get_item(STORAGE_KEY)
            .map_err(|e| StoreError::Denied(format!("{e:?}")))?;
        match raw {
            Some(value) => match value.parse::<Mode>() {
                Ok(mode) => Ok(Some(mode)),
                Err(e) => {
                    // Treated as "no explicit preference" per the storage
                    // contract, not as a failure.
                    log::warn!("ignoring stored theme preference: {e}");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    fn save(&mut self, mode: Mode) -> Result<(), StoreError> {
        self.storage()?
            .set_item(STORAGE_KEY, mode.as_str())
            .map_err(|e| StoreError::Denied(format!("{e:?}")))
    }
}
