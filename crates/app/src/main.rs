mod error;
mod settings;

#[tokio::main]
async fn main() -> error::Result<()> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "reignscore={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let tokens = settings.auth.token_table()?;
    if tokens.is_empty() {
        tracing::warn!("no auth clients configured, every simulator request will be rejected");
    }

    let addr = settings.address();
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|err| {
        tracing::error!("failed to bind server listener on {addr}: {err}");
        err
    })?;

    server::run_with_listener(server::ServerState::new(tokens), listener).await?;
    Ok(())
}
