//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`. Module paths are hidden (`with_target(false)`); every event
//! carries structured fields such as `model`, `id`, `action` and `tenant`
//! instead.
//!
//! ## What Gets Traced
//!
//! - **Stores**: startup, shutdown, and every create/update/delete/action
//!   (`info`), plus gets and lists (`debug`)
//! - **Routing**: each action with its payload and caller, and its outcome with
//!   `elapsed_ms`
//! - **HTTP**: one span per request from `tower-http`'s `TraceLayer`
//! - **Auth**: rejected sessions and every use of script access (`warn`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Outcomes only
//! RUST_LOG=info ruledesk
//!
//! # Payloads of every store request
//! RUST_LOG=debug ruledesk
//!
//! # Routing only
//! RUST_LOG=ruledesk::router=debug ruledesk
//! ```
//!
//! **With `RUST_LOG=info`**, a prompt execution request looks like:
//!
//! ```text
//! INFO action: Executing action action="execution.create" tenant="acme" ...
//! INFO Created model="Execution" id=8f1c... size=1
//! INFO action: Action completed model="Execution" elapsed_ms=0
//! ```

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
