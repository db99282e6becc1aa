//! # ruledesk
//!
//! Backend of a rule-authoring platform. Rules, their prompts, work queues
//! and prompt executions are stored in per-model actors; every read and write
//! from the outside is a named action (`rule.update`, `queue.pause`, ...)
//! routed through a static resource registry, inside the caller's tenant.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ResourceActor`](framework::ResourceActor) that owns one
//! model's records and processes requests one at a time, and the
//! [`ActorEntity`](framework::ActorEntity) trait each model implements.
//!
//! ### 2. The Models ([`model`], [`rule_actor`], [`prompt_actor`], [`queue_actor`],
//! [`execution_actor`], [`session_actor`])
//! Data lives in `model`; validation, tenancy and custom actions of each
//! model live in its `*_actor` module.
//!
//! ### 3. Routing ([`registry`], [`storage`], [`router`])
//! The [`RESOURCE_REGISTRY`](registry::RESOURCE_REGISTRY) table maps action
//! names to stores. The [`ActionRouter`](router::ActionRouter) decodes each
//! payload into a typed request for the target model before it reaches the
//! store.
//!
//! ### 4. The Interface ([`clients`], [`adapters`], [`server`])
//! Typed clients per model, the [`ServerActionClient`](clients::ServerActionClient)
//! façade over the router, tab save adapters for the editor, and the axum API.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`StoreSystem`](lifecycle::StoreSystem) starts and wires the actors, builds
//! the router and shuts everything down.
//!
//! ## Running
//!
//! ```bash
//! NEXTAUTH_URL=https://rules.example.com RUST_LOG=info cargo run -- --dev-session acme
//! ```

pub mod adapters;
pub mod clients;
pub mod context;
pub mod execution_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod prompt_actor;
pub mod queue_actor;
pub mod registry;
pub mod router;
pub mod rule_actor;
pub mod server;
pub mod session_actor;
pub mod storage;
