use std::process::ExitCode;

use crate::{
    info,
    management::{CONSENT_NOTICE, ConsentManager},
    success, warning,
};

/// Shows the consent state, or records acceptance when `accept` is set.
pub async fn consent(accept: bool) -> ExitCode {
    let mut consent = match ConsentManager::load().await {
        Ok(c) => c,
        Err(e) => {
            warning!("Failed to read local storage. Err: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if !accept {
        if consent.is_accepted() {
            info!("Consent already accepted.");
        } else {
            info!("{} Run `spotsafe consent --accept` to accept.", CONSENT_NOTICE);
        }
        return ExitCode::SUCCESS;
    }

    match consent.accept().await {
        Ok(()) => {
            success!("Consent accepted.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            warning!("Failed to store consent. Err: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Prints the consent banner until it has been accepted.
pub async fn banner() {
    match ConsentManager::load().await {
        Ok(consent) if consent.show_banner() => {
            warning!(
                "{} Run `spotsafe consent --accept` to dismiss this notice.",
                CONSENT_NOTICE
            );
        }
        Ok(_) => {}
        Err(e) => log::debug!("Cannot read consent flag: {}", e),
    }
}
