use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

use ruledesk::lifecycle::tracing::setup_tracing;
use ruledesk::lifecycle::StoreSystem;
use ruledesk::model::SessionCreate;
use ruledesk::server::{self, AppConfig, AppState};

#[derive(Debug, Parser)]
#[command(name = "ruledesk", version, about = "Rule-authoring action server")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "RULEDESK_BIND", default_value = "127.0.0.1:3001")]
    bind: SocketAddr,

    /// Public base URL of the web app, used in execution links.
    #[arg(long, env = "NEXTAUTH_URL", default_value = server::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Accept the `x-python-script-access` header on the prompt endpoint.
    #[arg(long, env = "RULEDESK_SCRIPT_ACCESS")]
    script_access: bool,

    /// Issue a session for this tenant at startup and print its token.
    #[arg(long, value_name = "TENANT")]
    dev_session: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let args = Args::parse();

    let config = AppConfig::new()
        .with_bind_address(args.bind)
        .with_base_url(&args.base_url)
        .map_err(|e| e.to_string())?
        .with_script_access(args.script_access);
    if config.script_access {
        info!("Script access is enabled");
    }

    let system = StoreSystem::new().map_err(|e| e.to_string())?;

    if let Some(tenant) = args.dev_session {
        let session = system
            .session_client
            .create_session(SessionCreate {
                user_id: "dev".to_string(),
                tenant_id: tenant,
                branch_id: None,
                ttl: chrono::Duration::hours(24),
            })
            .await
            .map_err(|e| e.to_string())?;
        info!(token = %session.token, tenant = %session.tenant_id, "Development session issued");
        println!("{}={}", config.session_cookie, session.token);
    }

    let bind_address = config.bind_address;
    let state = AppState::new(config, system.router(), system.session_client.clone());
    let app = server::app(state);

    let listener = TcpListener::bind(bind_address)
        .await
        .map_err(|e| format!("Failed to bind {bind_address}: {e}"))?;
    info!(%bind_address, "Listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
        })
        .await;
    if let Err(e) = served {
        error!(error = %e, "Server failed");
    }

    system.shutdown().await
}
