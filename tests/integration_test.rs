use serde_json::{json, Value};

use ruledesk::adapters::{
    PythonCodeAdapter, PythonCodeSnapshot, RuleDetailsAdapter, RuleDetailsSnapshot, SaveOutcome,
    TabIds, TabSaveCoordinator,
};
use ruledesk::clients::ServerActionClient;
use ruledesk::context::ExecutionContext;
use ruledesk::framework::{ActorClient, FrameworkError};
use ruledesk::lifecycle::StoreSystem;
use ruledesk::model::{ExecutionStatus, RuleStatus};
use ruledesk::router::{ActionCall, RouterError};

fn acme() -> ExecutionContext {
    ExecutionContext::new("alice", "acme")
}

fn globex() -> ExecutionContext {
    ExecutionContext::new("bob", "globex")
}

/// Full end-to-end run through the router with all real actors.
#[tokio::test]
async fn test_full_rule_workflow_integration() {
    let system = StoreSystem::new().expect("built-in registry is valid");
    let client = ServerActionClient::new(system.router(), acme());

    let rule = client
        .execute_action(
            "rule.create",
            json!({"name": "Eligibility", "sourceCode": "if age > 18 then approve"}),
        )
        .await
        .expect("Failed to create rule");
    assert_eq!(rule["id"], "rule_1");
    assert_eq!(rule["status"], "draft");
    assert_eq!(rule["tenantId"], "acme");

    let updated = client
        .execute_action("rule.update", json!({"id": "rule_1", "description": "Adults only"}))
        .await
        .expect("Failed to update rule");
    assert_eq!(updated["name"], "Eligibility");
    assert_eq!(updated["description"], "Adults only");
    assert_eq!(updated["version"], 2);

    let published = client
        .execute_action("rule.publish", json!({"id": "rule_1"}))
        .await
        .expect("Failed to publish rule");
    assert_eq!(published["status"], "published");

    let prompt = client
        .execute_action(
            "prompt.create",
            json!({"ruleId": "rule_1", "name": "age-check", "content": "How old?"}),
        )
        .await
        .expect("Failed to create prompt");
    assert_eq!(prompt["ruleId"], "rule_1");

    let queue = client
        .execute_action("queue.create", json!({"name": "Nightly"}))
        .await
        .expect("Failed to create queue");
    let queue_id = queue["id"].clone();
    let queue = client
        .execute_action("queue.addRule", json!({"id": queue_id, "ruleId": "rule_1"}))
        .await
        .expect("Failed to queue rule");
    assert_eq!(queue["ruleIds"], json!(["rule_1"]));
    let queue = client
        .execute_action("queue.pause", json!({"id": queue_id}))
        .await
        .expect("Failed to pause queue");
    assert_eq!(queue["paused"], true);

    let execution = client
        .execute_action(
            "execution.create",
            json!({"ruleId": "rule_1", "promptIds": [prompt["id"]]}),
        )
        .await
        .expect("Failed to create execution");
    let execution_id = execution["id"].clone();
    assert_eq!(execution["status"], "pending");

    client
        .execute_action("execution.start", json!({"id": execution_id}))
        .await
        .expect("Failed to start execution");
    let done = client
        .execute_action(
            "execution.complete",
            json!({"id": execution_id, "output": {"approved": true}}),
        )
        .await
        .expect("Failed to complete execution");
    assert_eq!(done["status"], "completed");

    // Typed clients see the same records.
    let stored = system
        .execution_client
        .get(serde_json::from_value(execution_id).unwrap(), &acme())
        .await
        .unwrap()
        .expect("execution should exist");
    assert_eq!(stored.status, ExecutionStatus::Completed);

    drop(client);
    system.shutdown().await.expect("Failed to shut down");
}

#[tokio::test]
async fn test_records_are_isolated_per_tenant() {
    let system = StoreSystem::new().unwrap();
    let router = system.router();
    let alice = ServerActionClient::new(router.clone(), acme());
    let bob = ServerActionClient::new(router, globex());

    alice
        .execute_action("rule.create", json!({"name": "Eligibility"}))
        .await
        .unwrap();

    let seen_by_bob = bob.execute_action("rule.list", Value::Null).await.unwrap();
    assert_eq!(seen_by_bob, json!([]));
    let fetched = bob
        .execute_action("rule.get", json!({"id": "rule_1"}))
        .await
        .unwrap();
    assert_eq!(fetched, Value::Null);

    let update = bob
        .execute_action("rule.update", json!({"id": "rule_1", "name": "Hijacked"}))
        .await;
    assert!(matches!(
        update,
        Err(RouterError::Storage(FrameworkError::NotFound(_)))
    ));

    // Bob cannot attach a prompt to Alice's rule either.
    let prompt = bob
        .execute_action("prompt.create", json!({"ruleId": "rule_1", "name": "p"}))
        .await;
    assert!(matches!(
        prompt,
        Err(RouterError::Storage(FrameworkError::EntityError(_)))
    ));

    let rule = system
        .rule_client
        .get("rule_1".into(), &acme())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rule.name, "Eligibility");

    drop((alice, bob));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_update_leaves_record_untouched() {
    let system = StoreSystem::new().unwrap();
    let client = ServerActionClient::new(system.router(), acme());

    client
        .execute_action("rule.create", json!({"name": "Eligibility"}))
        .await
        .unwrap();
    client
        .execute_action("rule.archive", json!({"id": "rule_1"}))
        .await
        .unwrap();

    let revived = client
        .execute_action(
            "rule.update",
            json!({"id": "rule_1", "name": "Renamed", "status": "draft"}),
        )
        .await;
    assert!(revived.is_err());

    let rule = system
        .rule_client
        .get("rule_1".into(), &acme())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rule.name, "Eligibility");
    assert_eq!(rule.status, RuleStatus::Archived);

    drop(client);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_tab_coordinator_saves_only_changes() {
    let system = StoreSystem::new().unwrap();
    let client = ServerActionClient::new(system.router(), acme());
    client
        .execute_action(
            "rule.create",
            json!({"name": "Eligibility", "sourceCode": "approve"}),
        )
        .await
        .unwrap();

    let ids = TabIds::new("rule_1", "tab-1");
    let mut details = TabSaveCoordinator::new(RuleDetailsAdapter);
    let loaded = RuleDetailsSnapshot {
        id: "rule_1".into(),
        tab_id: "tab-1".into(),
        name: Some("Eligibility".into()),
        description: None,
        status: Some(RuleStatus::Draft),
    };
    details.open(&ids, loaded.clone());

    assert_eq!(
        details.save(&ids, &loaded, &client).await.unwrap(),
        SaveOutcome::Unchanged
    );

    let edited = RuleDetailsSnapshot {
        name: Some("Adult eligibility".into()),
        ..loaded
    };
    assert!(details.is_dirty(&ids, &edited));
    match details.save(&ids, &edited, &client).await.unwrap() {
        SaveOutcome::Saved(rule) => {
            assert_eq!(rule["name"], "Adult eligibility");
            assert_eq!(rule["sourceCode"], "approve");
        }
        SaveOutcome::Unchanged => panic!("edited tab should be saved"),
    }
    assert!(!details.is_dirty(&ids, &edited));

    // A code tab on the same rule has never been saved, so its first save goes through.
    let mut code = TabSaveCoordinator::new(PythonCodeAdapter);
    let snapshot = PythonCodeSnapshot {
        id: "rule_1".into(),
        tab_id: "tab-1".into(),
        source_code: None,
        python_code: Some("def run(ctx): return True".into()),
    };
    match code.save(&ids, &snapshot, &client).await.unwrap() {
        SaveOutcome::Saved(rule) => {
            assert_eq!(rule["pythonCode"], "def run(ctx): return True");
            assert_eq!(rule["name"], "Adult eligibility");
        }
        SaveOutcome::Unchanged => panic!("first save must go through"),
    }

    assert!(details.close(&ids).is_some());
    assert_eq!(details.open_tabs(), 0);

    drop(client);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_tab_save_stays_dirty() {
    let system = StoreSystem::new().unwrap();
    let client = ServerActionClient::new(system.router(), acme());

    let ids = TabIds::new("rule_404", "tab-1");
    let mut details = TabSaveCoordinator::new(RuleDetailsAdapter);
    let snapshot = RuleDetailsSnapshot {
        id: "rule_404".into(),
        tab_id: "tab-1".into(),
        name: Some("Ghost".into()),
        ..Default::default()
    };

    let result = details.save(&ids, &snapshot, &client).await;
    assert!(matches!(
        result,
        Err(RouterError::Storage(FrameworkError::NotFound(_)))
    ));
    assert!(details.is_dirty(&ids, &snapshot));

    drop(client);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_select_option_through_full_system() {
    let system = StoreSystem::new().unwrap();
    let client = ServerActionClient::new(system.router(), acme());
    client
        .execute_action("rule.create", json!({"name": "Eligibility"}))
        .await
        .unwrap();

    let call = ActionCall::new("rule.get", json!({"id": "rule_1"})).with_select(["status"]);
    let result = client.execute(call).await.unwrap();
    assert_eq!(result, json!({"id": "rule_1", "status": "draft"}));

    drop(client);
    system.shutdown().await.unwrap();
}
