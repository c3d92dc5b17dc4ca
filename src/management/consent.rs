use crate::{Res, management::LocalStorage};

/// Local-storage key holding the consent flag.
pub const CONSENT_KEY: &str = "cookieAccepted";

pub const CONSENT_NOTICE: &str = "This tool uses cookies for authentication.";

/// One-time consent acknowledgment.
///
/// The flag is read once when the manager is created and written once on
/// acceptance. Only the exact value `"true"` counts as accepted.
pub struct ConsentManager {
    storage: LocalStorage,
    accepted: bool,
}

impl ConsentManager {
    pub fn new(storage: LocalStorage) -> Self {
        let accepted = storage.get_item(CONSENT_KEY) == Some("true");
        Self { storage, accepted }
    }

    pub async fn load() -> Res<Self> {
        Ok(Self::new(LocalStorage::load().await?))
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Whether the consent banner should be shown.
    pub fn show_banner(&self) -> bool {
        !self.accepted
    }

    pub async fn accept(&mut self) -> Res<()> {
        if !self.accepted {
            self.storage.set_item(CONSENT_KEY, "true").await?;
            self.accepted = true;
        }
        Ok(())
    }
}
