//! The process-wide router lives for the whole test binary, so everything
//! that touches it is in one test.

use std::sync::Arc;

use serde_json::json;

use ruledesk::clients::{install_router, installed_router, ServerActionClient};
use ruledesk::context::ExecutionContext;
use ruledesk::lifecycle::StoreSystem;
use ruledesk::router::RouterError;

#[tokio::test]
async fn test_process_wide_router() {
    let scope = ExecutionContext::new("alice", "acme");

    assert!(matches!(
        ServerActionClient::create(scope.clone()),
        Err(RouterError::RouterNotInstalled)
    ));

    let first = StoreSystem::new().unwrap();
    let second = StoreSystem::new().unwrap();
    let installed = install_router(first.router());
    let again = install_router(second.router());
    assert!(Arc::ptr_eq(&installed, &again), "second install must keep the first router");
    assert!(Arc::ptr_eq(&installed, &installed_router().unwrap()));

    let client = ServerActionClient::create(scope.clone()).unwrap();
    let rule = client
        .execute_action("rule.create", json!({"name": "Eligibility"}))
        .await
        .unwrap();
    assert_eq!(rule["id"], "rule_1");

    let simple = ServerActionClient::create_simple(scope.clone()).unwrap();
    let rules = simple.execute("rule.list", json!(null)).await.unwrap();
    assert_eq!(rules.as_array().map(Vec::len), Some(1));

    let fetched = ServerActionClient::dispatch("rule.get", json!({"id": "rule_1"}), scope)
        .await
        .unwrap();
    assert_eq!(fetched["name"], "Eligibility");

    let ghost = ServerActionClient::dispatch(
        "ghost.delete",
        json!({}),
        ExecutionContext::new("alice", "acme"),
    )
    .await;
    assert!(matches!(ghost, Err(RouterError::ActionNotFound(_))));

    // The rejected router was dropped by install_router, so its system still shuts down.
    second.shutdown().await.unwrap();
}
