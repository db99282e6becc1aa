use chrono::Utc;
use serde_json::{json, Value};

use ruledesk::context::ExecutionContext;
use ruledesk::framework::{mock::MockClient, FrameworkError};
use ruledesk::model::{Rule, RuleId, RuleStatus};
use ruledesk::registry::{RegistryError, ResourceRegistry, ResourceSchema};
use ruledesk::router::{ActionCall, ActionRouter, RouterError};
use ruledesk::rule_actor::RuleError;
use ruledesk::storage::Storage;

const RULES: ResourceSchema = ResourceSchema {
    action_prefix: "rule",
    database_key: "rules",
    model_name: "Rule",
    actions: &["get", "list", "update", "publish"],
};

fn ctx() -> ExecutionContext {
    ExecutionContext::new("user_1", "acme")
}

fn rule(id: &str, name: &str) -> Rule {
    let now = Utc::now();
    Rule {
        id: RuleId::from(id),
        tenant_id: "acme".to_string(),
        name: name.to_string(),
        description: None,
        status: RuleStatus::Draft,
        source_code: "approve".to_string(),
        python_code: None,
        version: 2,
        created_by: "user_1".to_string(),
        updated_by: "user_1".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// A router over a single mocked Rule store.
fn router(mock: &MockClient<Rule>) -> ActionRouter {
    let registry = ResourceRegistry::new([RULES]).unwrap();
    let storage = Storage::new().with_store("rules", mock.client());
    ActionRouter::new(&registry, storage).unwrap()
}

#[tokio::test]
async fn test_rule_update_reaches_update_path() {
    let mut mock = MockClient::<Rule>::new();
    mock.expect_update(RuleId::from("r1")).return_ok(rule("r1", "x"));
    let router = router(&mock);

    let result = router
        .execute_action(ActionCall::new("rule.update", json!({"id": "r1", "name": "x"})), &ctx())
        .await
        .unwrap();

    assert_eq!(result["id"], "r1");
    assert_eq!(result["name"], "x");
    mock.verify();
}

#[tokio::test]
async fn test_unknown_action_makes_no_storage_call() {
    let mock = MockClient::<Rule>::new();
    let router = router(&mock);

    let result = router
        .execute_action(ActionCall::new("ghost.delete", json!({})), &ctx())
        .await;
    assert!(matches!(result, Err(RouterError::ActionNotFound(name)) if name == "ghost.delete"));

    // A known prefix with an unregistered suffix is just as unknown.
    let result = router
        .execute_action(ActionCall::new("rule.delete", json!({"id": "r1"})), &ctx())
        .await;
    assert!(matches!(result, Err(RouterError::ActionNotFound(_))));

    mock.verify();
}

#[tokio::test]
async fn test_invalid_payload_makes_no_storage_call() {
    let mock = MockClient::<Rule>::new();
    let router = router(&mock);

    for data in [
        json!({"name": "x"}),
        json!({"id": "r1", "colour": "red"}),
        json!("r1"),
        Value::Null,
    ] {
        let result = router
            .execute_action(ActionCall::new("rule.update", data), &ctx())
            .await;
        assert!(
            matches!(result, Err(RouterError::InvalidPayload { .. })),
            "{result:?}"
        );
    }

    // Unit actions take nothing but the id.
    let result = router
        .execute_action(
            ActionCall::new("rule.publish", json!({"id": "r1", "bogus": 1})),
            &ctx(),
        )
        .await;
    assert!(
        matches!(result, Err(RouterError::InvalidPayload { .. })),
        "{result:?}"
    );

    mock.verify();
}

#[tokio::test]
async fn test_storage_errors_pass_through() {
    let mut mock = MockClient::<Rule>::new();
    mock.expect_action(RuleId::from("r1"))
        .return_err(FrameworkError::EntityError(Box::new(RuleError::ValidationError(
            "cannot publish a rule without source code".into(),
        ))));
    mock.expect_get(RuleId::from("r2"))
        .return_err(FrameworkError::ActorClosed);
    let router = router(&mock);

    let published = router
        .execute_action(ActionCall::new("rule.publish", json!({"id": "r1"})), &ctx())
        .await;
    match published {
        Err(RouterError::Storage(e)) => assert_eq!(
            e.into_entity::<RuleError>().unwrap(),
            RuleError::ValidationError("cannot publish a rule without source code".into())
        ),
        other => panic!("expected storage error, got {other:?}"),
    }

    let fetched = router
        .execute_action(ActionCall::new("rule.get", json!({"id": "r2"})), &ctx())
        .await;
    assert!(matches!(
        fetched,
        Err(RouterError::Storage(FrameworkError::ActorClosed))
    ));

    mock.verify();
}

#[tokio::test]
async fn test_select_projects_list_results() {
    let mut mock = MockClient::<Rule>::new();
    mock.expect_list()
        .return_ok(vec![rule("r1", "Eligibility"), rule("r2", "Scoring")]);
    let router = router(&mock);

    let call = ActionCall::new("rule.list", Value::Null).with_select(["name"]);
    let result = router.execute_action(call, &ctx()).await.unwrap();

    assert_eq!(
        result,
        json!([{"id": "r1", "name": "Eligibility"}, {"id": "r2", "name": "Scoring"}])
    );
    mock.verify();
}

#[tokio::test]
async fn test_router_requires_a_store_per_schema() {
    let registry = ResourceRegistry::builtin().unwrap();
    let mock = MockClient::<Rule>::new();
    let storage = Storage::new().with_store("rules", mock.client());

    let result = ActionRouter::new(&registry, storage);
    assert!(matches!(
        result,
        Err(RegistryError::MissingStore { database_key, .. }) if database_key == "prompts"
    ));
}
