//! Typed requests decoded from untyped action payloads.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::framework::ActorEntity;
use crate::registry::Operation;

/// One storage call for model `T`, fully typed.
///
/// Built from the `data` of an action call before anything reaches the store,
/// so a malformed payload never turns into a partial write.
#[derive(Debug)]
pub enum ActionRequest<T: ActorEntity> {
    Create(T::Create),
    Get(T::Id),
    List(T::Filter),
    Update(T::Id, T::Update),
    Delete(T::Id),
    Custom(T::Id, T::Action),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct IdOnly<I> {
    id: I,
}

fn object(data: Value) -> Result<Map<String, Value>, String> {
    match data {
        Value::Object(map) => Ok(map),
        other => Err(format!("expected an object, got {}", kind(&other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn take_id<I: DeserializeOwned>(map: &mut Map<String, Value>) -> Result<I, String> {
    let id = map.remove("id").ok_or_else(|| "missing field `id`".to_string())?;
    serde_json::from_value(id).map_err(|e| format!("invalid `id`: {e}"))
}

impl<T> ActionRequest<T>
where
    T: ActorEntity,
    T::Id: DeserializeOwned,
    T::Create: DeserializeOwned,
    T::Update: DeserializeOwned,
    T::Filter: DeserializeOwned,
    T::Action: DeserializeOwned + Serialize,
{
    /// Decodes `data` for `operation`.
    ///
    /// - `create`: the create payload itself.
    /// - `get` / `delete`: `{ "id": ... }`.
    /// - `list`: `null` (everything) or a filter.
    /// - `update`: `{ "id": ..., <fields> }`; absent fields stay untouched.
    /// - custom: `{ "id": ..., <arguments> }`, tagged with the action name.
    ///   Keys the action does not carry are rejected, unit actions included.
    pub fn decode(operation: &Operation, data: Value) -> Result<Self, String> {
        let parse_err = |e: serde_json::Error| e.to_string();
        match operation {
            Operation::Create => serde_json::from_value(data)
                .map(ActionRequest::Create)
                .map_err(parse_err),
            Operation::Get => serde_json::from_value::<IdOnly<T::Id>>(data)
                .map(|req| ActionRequest::Get(req.id))
                .map_err(parse_err),
            Operation::Delete => serde_json::from_value::<IdOnly<T::Id>>(data)
                .map(|req| ActionRequest::Delete(req.id))
                .map_err(parse_err),
            Operation::List => match data {
                Value::Null => Ok(ActionRequest::List(T::Filter::default())),
                filter => serde_json::from_value(filter)
                    .map(ActionRequest::List)
                    .map_err(parse_err),
            },
            Operation::Update => {
                let mut fields = object(data)?;
                let id = take_id(&mut fields)?;
                let update = serde_json::from_value(Value::Object(fields)).map_err(parse_err)?;
                Ok(ActionRequest::Update(id, update))
            }
            Operation::Custom(name) => {
                let mut args = object(data)?;
                let id = take_id(&mut args)?;
                args.insert("action".to_string(), Value::String(name.clone()));
                let supplied: Vec<String> = args.keys().cloned().collect();
                let action: T::Action =
                    serde_json::from_value(Value::Object(args)).map_err(parse_err)?;
                // Internally tagged unit variants ignore extra keys on their own.
                let known = serde_json::to_value(&action).map_err(parse_err)?;
                if let Some(extra) = supplied.iter().find(|key| known.get(key.as_str()).is_none()) {
                    return Err(format!("unknown field `{extra}` for `{name}`"));
                }
                Ok(ActionRequest::Custom(id, action))
            }
        }
    }
}
