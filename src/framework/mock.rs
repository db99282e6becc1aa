//! # Mock Storage
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of expectations instead of by a storage actor. Use it
//! to test code that sits on top of a store (the router, model clients, hooks
//! that call other stores) without spawning actors, and to inject failures that
//! are hard to provoke with a real actor.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | none, scripted replies | real records |
//! | **Error injection** | `return_err` | needs specific state |
//! | **Use case** | code *around* a store | the store itself, full system |
//!
//! ```rust,ignore
//! let mut rules = MockClient::<Rule>::new();
//! rules.expect_get(RuleId::from("rule_1")).return_ok(Some(rule));
//! let client = rules.client();
//! // ... exercise code that calls client.get(..) ...
//! rules.verify();
//! ```
//!
//! Expectations are consumed in order. A request that does not match the next
//! expectation is answered with [`FrameworkError::ActorDropped`] and recorded;
//! [`MockClient::verify`] panics if any expectation is left over or any request
//! was unexpected.
//!
//! For tests that need to inspect the raw request, [`create_mock_client`] returns
//! the client together with the receiving end of its channel.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, oneshot};

enum Expectation<T: ActorEntity> {
    Create(Result<T, FrameworkError>),
    Get(T::Id, Result<Option<T>, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Update(T::Id, Result<T, FrameworkError>),
    Delete(T::Id, Result<T, FrameworkError>),
    Action(T::Id, Result<T::ActionResult, FrameworkError>),
}

struct MockState<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    unexpected: Vec<String>,
}

type Shared<T> = Arc<Mutex<MockState<T>>>;

fn lock<T: ActorEntity>(state: &Shared<T>) -> std::sync::MutexGuard<'_, MockState<T>> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn push<T: ActorEntity>(state: &Shared<T>, expectation: Expectation<T>) {
    lock(state).expectations.push_back(expectation);
}

fn describe<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { params, .. } => format!("Create({params:?})"),
        ResourceRequest::Get { id, .. } => format!("Get({id})"),
        ResourceRequest::List { filter, .. } => format!("List({filter:?})"),
        ResourceRequest::Update { id, .. } => format!("Update({id})"),
        ResourceRequest::Delete { id, .. } => format!("Delete({id})"),
        ResourceRequest::Action { id, action, .. } => format!("Action({id}, {action:?})"),
    }
}

/// A scripted stand-in for a storage actor.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    state: Shared<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn reply<R>(respond_to: oneshot::Sender<Result<R, FrameworkError>>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let state: Shared<T> = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            unexpected: Vec::new(),
        }));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&task_state).expectations.pop_front();
                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
                        reply(respond_to, r)
                    }
                    (ResourceRequest::Get { id, respond_to, .. }, Some(Expectation::Get(want, r)))
                        if id == want =>
                    {
                        reply(respond_to, r)
                    }
                    (ResourceRequest::List { respond_to, .. }, Some(Expectation::List(r))) => {
                        reply(respond_to, r)
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update(want, r)),
                    ) if id == want => reply(respond_to, r),
                    (
                        ResourceRequest::Delete { id, respond_to, .. },
                        Some(Expectation::Delete(want, r)),
                    ) if id == want => reply(respond_to, r),
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action(want, r)),
                    ) if id == want => reply(respond_to, r),
                    (request, expectation) => {
                        let mut state = lock(&task_state);
                        state.unexpected.push(describe(&request));
                        // Put the expectation back so verify() reports it as unmet too.
                        if let Some(expectation) = expectation {
                            state.expectations.push_front(expectation);
                        }
                        // Dropping the request drops its reply channel.
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// The client to hand to the code under test.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.state.clone(), Expectation::Create)
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.state.clone(), move |r| Expectation::Get(id, r))
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.state.clone(), Expectation::List)
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.state.clone(), move |r| Expectation::Update(id, r))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.state.clone(), move |r| Expectation::Delete(id, r))
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.state.clone(), move |r| Expectation::Action(id, r))
    }

    /// Number of expectations not consumed yet.
    pub fn remaining(&self) -> usize {
        lock(&self.state).expectations.len()
    }

    /// Panics unless every expectation was consumed and no unexpected request arrived.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.unexpected.is_empty() {
            panic!("Unexpected requests: {:?}", state.unexpected);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

/// Completes an expectation with its scripted reply.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    state: Shared<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        state: Shared<T>,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            state,
            make: Box::new(make),
        }
    }

    pub fn return_ok(self, value: R) {
        push(&self.state, (self.make)(Ok(value)));
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.state, (self.make)(Err(error)));
    }
}

/// Creates a client together with the receiving end of its channel.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ExecutionContext;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        text: String,
    }

    #[derive(Debug)]
    struct NoteCreate {
        text: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("note error")]
    struct NoteError;

    #[async_trait]
    impl ActorEntity for Note {
        type Id = u32;
        type Create = NoteCreate;
        type Update = ();
        type Filter = ();
        type Action = ();
        type ActionResult = ();
        type Context = ();
        type Error = NoteError;

        fn from_create_params(
            id: u32,
            params: NoteCreate,
            _scope: &ExecutionContext,
        ) -> Result<Self, NoteError> {
            Ok(Self {
                id,
                text: params.text,
            })
        }

        async fn on_update(
            &mut self,
            _update: (),
            _scope: &ExecutionContext,
            _ctx: &(),
        ) -> Result<(), NoteError> {
            Ok(())
        }

        async fn handle_action(
            &mut self,
            _action: (),
            _scope: &ExecutionContext,
            _ctx: &(),
        ) -> Result<(), NoteError> {
            Ok(())
        }
    }

    fn scope() -> ExecutionContext {
        ExecutionContext::new("user_1", "tenant_a")
    }

    #[tokio::test]
    async fn test_raw_channel_sees_scope() {
        let (client, mut receiver) = create_mock_client::<Note>(10);

        let task = tokio::spawn(async move {
            client
                .create(NoteCreate { text: "hi".into() }, &scope())
                .await
        });

        match receiver.recv().await {
            Some(ResourceRequest::Create {
                params,
                scope,
                respond_to,
            }) => {
                assert_eq!(params.text, "hi");
                assert_eq!(scope.tenant_id, "tenant_a");
                respond_to
                    .send(Ok(Note {
                        id: 7,
                        text: params.text,
                    }))
                    .unwrap();
            }
            other => panic!("expected Create, got {other:?}"),
        }

        assert_eq!(task.await.unwrap().unwrap().id, 7);
    }

    #[tokio::test]
    async fn test_expectations_in_order() {
        let mut mock = MockClient::<Note>::new();
        mock.expect_create().return_ok(Note {
            id: 1,
            text: "a".into(),
        });
        mock.expect_get(1).return_ok(None);

        let client = mock.client();
        let created = client
            .create(NoteCreate { text: "a".into() }, &scope())
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert!(client.get(1, &scope()).await.unwrap().is_none());

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatch_fails_request() {
        let mut mock = MockClient::<Note>::new();
        mock.expect_get(1).return_ok(None);

        let client = mock.client();
        let result = client.get(2, &scope()).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
        assert_eq!(mock.remaining(), 1);
    }

    #[tokio::test]
    async fn test_injected_error() {
        let mut mock = MockClient::<Note>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let result = mock.client().list((), &scope()).await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
        mock.verify();
    }
}
