mod consent;
mod state;
mod storage;

pub use consent::CONSENT_KEY;
pub use consent::CONSENT_NOTICE;
pub use consent::ConsentManager;
pub use state::Action;
pub use state::ActionKind;
pub use state::AppState;
pub use state::Status;
pub use storage::LocalStorage;
