//! Procedure registry and in-process caller.
//!
//! A [`Router`] maps dotted paths (`card.getOne`) to type-erased procedures.
//! Routers compose with [`Router::nest`], and [`Router::caller`] binds one to
//! a [`CardStore`] to produce a [`Caller`] that can dispatch calls.

use std::collections::BTreeMap;
use std::sync::Arc;

use llamavocs_store::CardStore;
use schemars::schema::RootSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::card::CardCaller;
use crate::error::{Result, RpcError};
use crate::input::Input;

type Handler = Arc<dyn Fn(&CardStore, Value) -> Result<Value> + Send + Sync>;

/// Whether a procedure reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcedureKind {
    /// Read-only; callable with GET or POST.
    Query,
    /// Writes to the store; callable with POST only.
    Mutation,
}

/// Public description of a registered procedure.
#[derive(Debug, Clone, Serialize)]
pub struct ProcedureInfo {
    /// Full dotted path.
    pub path: String,
    /// Query or mutation.
    pub kind: ProcedureKind,
    /// JSON Schema of the accepted input.
    pub input: RootSchema,
}

#[derive(Clone)]
struct Procedure {
    kind: ProcedureKind,
    input_schema: Arc<RootSchema>,
    handler: Handler,
}

/// A set of named procedures.
#[derive(Clone, Default)]
pub struct Router {
    procedures: BTreeMap<String, Procedure>,
}

impl Router {
    /// An empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a read-only procedure.
    pub fn query<I, O, F>(self, name: &str, handler: F) -> Self
    where
        I: Input + 'static,
        O: Serialize + 'static,
        F: Fn(&CardStore, I::Valid) -> llamavocs_store::Result<O> + Send + Sync + 'static,
    {
        self.register::<I, O, F>(name, ProcedureKind::Query, handler)
    }

    /// Register a procedure that writes to the store.
    pub fn mutation<I, O, F>(self, name: &str, handler: F) -> Self
    where
        I: Input + 'static,
        O: Serialize + 'static,
        F: Fn(&CardStore, I::Valid) -> llamavocs_store::Result<O> + Send + Sync + 'static,
    {
        self.register::<I, O, F>(name, ProcedureKind::Mutation, handler)
    }

    /// Mount every procedure of `router` under `prefix`.
    ///
    /// # Panics
    ///
    /// Panics if a resulting path is already registered.
    pub fn nest(mut self, prefix: &str, router: Router) -> Self {
        for (path, procedure) in router.procedures {
            let path = format!("{prefix}.{path}");
            assert!(
                !self.procedures.contains_key(&path),
                "procedure '{path}' registered twice"
            );
            self.procedures.insert(path, procedure);
        }
        self
    }

    /// Describe every registered procedure, ordered by path.
    pub fn procedures(&self) -> Vec<ProcedureInfo> {
        self.procedures
            .iter()
            .map(|(path, procedure)| ProcedureInfo {
                path: path.clone(),
                kind: procedure.kind,
                input: RootSchema::clone(&procedure.input_schema),
            })
            .collect()
    }

    /// Bind the router to a store.
    pub fn caller(self, store: CardStore) -> Caller {
        Caller {
            router: Arc::new(self),
            store,
        }
    }

    fn register<I, O, F>(mut self, name: &str, kind: ProcedureKind, handler: F) -> Self
    where
        I: Input + 'static,
        O: Serialize + 'static,
        F: Fn(&CardStore, I::Valid) -> llamavocs_store::Result<O> + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(move |store: &CardStore, input: Value| -> Result<Value> {
            let input = I::validate(input)?;
            let output = handler(store, input)?;
            Ok(serde_json::to_value(output)?)
        });

        let procedure = Procedure {
            kind,
            input_schema: Arc::new(schemars::schema_for!(I)),
            handler,
        };

        assert!(
            self.procedures.insert(name.to_string(), procedure).is_none(),
            "procedure '{name}' registered twice"
        );
        self
    }
}

/// A router bound to a card store.
///
/// Calls go through the same validation and routing as calls arriving over
/// HTTP. Cloning is cheap.
#[derive(Clone)]
pub struct Caller {
    router: Arc<Router>,
    store: CardStore,
}

impl Caller {
    /// Access the typed card procedures.
    pub fn card(&self) -> CardCaller<'_> {
        CardCaller { caller: self }
    }

    /// The kind of the procedure at `path`.
    pub fn kind(&self, path: &str) -> Result<ProcedureKind> {
        self.procedure(path).map(|procedure| procedure.kind)
    }

    /// Describe every registered procedure.
    pub fn procedures(&self) -> Vec<ProcedureInfo> {
        self.router.procedures()
    }

    /// Dispatch a call with raw JSON input.
    ///
    /// Input is validated before the store is touched. Store work runs on
    /// the blocking thread pool.
    pub async fn call(&self, path: &str, input: Value) -> Result<Value> {
        let procedure = self.procedure(path)?.clone();
        let store = self.store.clone();
        debug!(path, kind = ?procedure.kind, "Dispatching call");

        let result = tokio::task::spawn_blocking(move || (procedure.handler)(&store, input))
            .await
            .map_err(|e| RpcError::internal(format!("procedure task failed: {e}")))?;

        if let Err(err) = &result {
            warn!(path, code = ?err.code, error = %err, "Call failed");
        }
        result
    }

    /// Dispatch a call with a typed input and output.
    pub(crate) async fn call_typed<I, O>(&self, path: &str, input: &I) -> Result<O>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        let output = self.call(path, serde_json::to_value(input)?).await?;
        Ok(serde_json::from_value(output)?)
    }

    fn procedure(&self, path: &str) -> Result<&Procedure> {
        self.router
            .procedures
            .get(path)
            .ok_or_else(|| RpcError::not_found(path))
    }
}
