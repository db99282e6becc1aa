use chrono::Utc;
use ruledesk::clients::RuleClient;
use ruledesk::context::ExecutionContext;
use ruledesk::framework::{mock::MockClient, ActorClient, FrameworkError};
use ruledesk::model::{PromptCreate, Rule, RuleId, RuleStatus};
use ruledesk::prompt_actor::PromptError;

fn rule(id: &str, tenant: &str) -> Rule {
    let now = Utc::now();
    Rule {
        id: RuleId::from(id),
        tenant_id: tenant.to_string(),
        name: "Eligibility".to_string(),
        description: None,
        status: RuleStatus::Draft,
        source_code: String::new(),
        python_code: None,
        version: 1,
        created_by: "user_1".to_string(),
        updated_by: "user_1".to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn prompt(rule_id: &str, name: &str) -> PromptCreate {
    PromptCreate {
        rule_id: RuleId::from(rule_id),
        name: name.to_string(),
        content: "Is the applicant over 18?".to_string(),
        position: 0,
    }
}

/// Real Prompt actor with a mocked Rule store: `on_create` must check the rule.
#[tokio::test]
async fn test_prompt_actor_validates_rule_through_mock() {
    let scope = ExecutionContext::new("user_1", "acme");
    let mut rule_mock = MockClient::<Rule>::new();
    rule_mock
        .expect_get(RuleId::from("rule_1"))
        .return_ok(Some(rule("rule_1", "acme")));

    let (prompt_actor, prompt_client) = ruledesk::prompt_actor::new();
    let handle = tokio::spawn(prompt_actor.run(RuleClient::new(rule_mock.client())));

    let created = prompt_client
        .create_prompt(prompt("rule_1", "age-check"), &scope)
        .await
        .expect("prompt should be created");
    assert_eq!(created.tenant_id, "acme");
    assert_eq!(created.id.as_str(), "prompt_1");

    let fetched = prompt_client
        .get(created.id.clone(), &scope)
        .await
        .unwrap()
        .expect("prompt should exist");
    assert_eq!(fetched.name, "age-check");

    rule_mock.verify();
    drop(prompt_client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_prompt_for_missing_rule_is_rejected() {
    let scope = ExecutionContext::new("user_1", "acme");
    let mut rule_mock = MockClient::<Rule>::new();
    rule_mock.expect_get(RuleId::from("rule_9")).return_ok(None);

    let (prompt_actor, prompt_client) = ruledesk::prompt_actor::new();
    let handle = tokio::spawn(prompt_actor.run(RuleClient::new(rule_mock.client())));

    let result = prompt_client
        .create_prompt(prompt("rule_9", "age-check"), &scope)
        .await;
    assert_eq!(result, Err(PromptError::InvalidRule("rule_9".to_string())));

    let all = prompt_client.list(Default::default(), &scope).await.unwrap();
    assert!(all.is_empty(), "rejected prompt must not be stored");

    rule_mock.verify();
    drop(prompt_client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_rule_store_failure_surfaces_as_communication_error() {
    let scope = ExecutionContext::new("user_1", "acme");
    let mut rule_mock = MockClient::<Rule>::new();
    rule_mock
        .expect_get(RuleId::from("rule_1"))
        .return_err(FrameworkError::ActorClosed);

    let (prompt_actor, prompt_client) = ruledesk::prompt_actor::new();
    let handle = tokio::spawn(prompt_actor.run(RuleClient::new(rule_mock.client())));

    let result = prompt_client
        .create_prompt(prompt("rule_1", "age-check"), &scope)
        .await;
    assert!(matches!(
        result,
        Err(PromptError::StoreCommunicationError(_))
    ));

    rule_mock.verify();
    drop(prompt_client);
    handle.await.unwrap();
}
