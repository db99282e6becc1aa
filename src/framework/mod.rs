//! Generic storage actors.
//!
//! Each persisted model is owned by one [`ResourceActor`] task that processes
//! requests sequentially; callers talk to it through a cloneable
//! [`ResourceClient`]. The same engine serves rules, prompts, queues,
//! executions and sessions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - trait a model implements to be stored
//! - [`ResourceActor`] - the task that owns a model's records
//! - [`ResourceClient`] - typed handle for CRUD + action requests
//! - [`ActorClient`] - default `get`/`list`/`delete` for model-specific clients
//! - [`FrameworkError`] - plumbing errors
//!
//! # Testing
//!
//! See [`mock`] for scripted clients that need no actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
