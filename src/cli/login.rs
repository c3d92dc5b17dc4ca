use std::process::ExitCode;

use crate::{
    backup::BackupClient,
    cli::session::{self, TokenSource},
    info,
    management::AppState,
};

/// Runs the login flow and prints the received token.
pub async fn login(source: TokenSource) -> ExitCode {
    let client = BackupClient::from_env();
    let state = session::login(AppState::default(), &source, &client).await;

    let token = state.token().cloned();
    let (_, failed) = session::render_status(state);
    if failed {
        return ExitCode::FAILURE;
    }

    match token {
        Some(token) => {
            info!("Reuse it with: export SPOTSAFE_ACCESS_TOKEN=<token>");
            println!("{}", token.as_str());
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    }
}
