//! Call-tracing proxy.
//!
//! # Responsibilities
//! - Forward named calls to a shared target
//! - Emit one `info` record per successful call
//! - Memoize resolved methods so repeat calls skip lookup
//!
//! # Design Decisions
//! - Target errors (unknown method included) propagate untouched
//! - Failed calls are not traced; only the return path logs
//! - The cache guard is released before the target runs, so targets may
//!   re-enter the proxy. `Dispatch::lookup` itself must not.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde_json::Value;

use crate::hierarchy::{registry, Logger};
use crate::observability::metrics;
use crate::proxy::dispatch::{Call, Dispatch, Method};
use crate::severity::Severity;

/// Wraps a target and logs every call made through it.
pub struct TracingProxy<T: Dispatch> {
    target: Arc<T>,
    logger: Logger,
    methods: DashMap<String, Method<T>>,
    resolutions: AtomicUsize,
}

impl<T: Dispatch> TracingProxy<T> {
    /// Trace under the target's type path in the global registry.
    pub fn new(target: Arc<T>) -> Self {
        Self::with_component(target, std::any::type_name::<T>())
    }

    /// Trace under `component` in the global registry.
    pub fn with_component(target: Arc<T>, component: &str) -> Self {
        Self::with_logger(target, registry().get(component))
    }

    /// Trace through an existing logger.
    pub fn with_logger(target: Arc<T>, logger: Logger) -> Self {
        Self {
            target,
            logger,
            methods: DashMap::new(),
            resolutions: AtomicUsize::new(0),
        }
    }

    pub fn target(&self) -> &Arc<T> {
        &self.target
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Invoke `name` on the target and trace the call.
    pub fn call(&self, name: &str, mut call: Call<'_>) -> Result<Value, T::Error> {
        let method = self.resolve(name)?;
        let result = method(self.target.as_ref(), &mut call)?;

        metrics::record_proxy_call(name);
        if self.logger.is_enabled(Severity::Info) {
            self.logger.info(trace_message(name, &call, &result));
        }
        Ok(result)
    }

    /// Shorthand for a call with positional arguments only.
    pub fn call_with<I, V>(&self, name: &str, args: I) -> Result<Value, T::Error>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.call(name, Call::new().args(args))
    }

    /// How many times a method had to be looked up on the target.
    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::Relaxed)
    }

    pub fn is_cached(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Memoized method names, sorted.
    pub fn cached_methods(&self) -> Vec<String> {
        let mut names: Vec<String> = self.methods.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    fn resolve(&self, name: &str) -> Result<Method<T>, T::Error> {
        if let Some(cached) = self.methods.get(name) {
            return Ok(cached.value().clone());
        }

        match self.methods.entry(name.to_string()) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                let method = self.target.lookup(name)?;
                self.resolutions.fetch_add(1, Ordering::Relaxed);
                metrics::record_proxy_resolution();
                tracing::debug!(
                    component = %self.logger.name(),
                    method = %name,
                    "Proxy method resolved"
                );
                entry.insert(method.clone());
                Ok(method)
            }
        }
    }
}

/// `name(args=[..], kwargs={..}, block=y|n) => result`
pub fn trace_message(name: &str, call: &Call<'_>, result: &Value) -> String {
    format!(
        "{}(args={}, kwargs={}, block={}) => {}",
        name,
        Value::Array(call.positional().to_vec()),
        Value::Object(call.keywords().clone()),
        if call.has_block() { "y" } else { "n" },
        result
    )
}
