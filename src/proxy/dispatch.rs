//! Name-based call mechanism for proxied targets.
//!
//! A target exposes its callable surface by mapping a method name to a
//! forwarding closure. Arguments and return values are `serde_json::Value`s
//! so any method shape can pass through one signature.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

/// Positional args, keyword args and an optional block for one call.
#[derive(Default)]
pub struct Call<'a> {
    args: Vec<Value>,
    kwargs: Map<String, Value>,
    block: Option<Box<dyn FnMut(&[Value]) -> Value + 'a>>,
}

impl<'a> Call<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Append several positional arguments.
    pub fn args<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }

    /// Set a keyword argument.
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(key.into(), value.into());
        self
    }

    /// Attach a block the target may yield to.
    pub fn block(mut self, block: impl FnMut(&[Value]) -> Value + 'a) -> Self {
        self.block = Some(Box::new(block));
        self
    }

    pub fn positional(&self) -> &[Value] {
        &self.args
    }

    pub fn keywords(&self) -> &Map<String, Value> {
        &self.kwargs
    }

    /// Positional argument `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.args.get(index)
    }

    /// Keyword argument `key`, if present.
    pub fn keyword(&self, key: &str) -> Option<&Value> {
        self.kwargs.get(key)
    }

    pub fn has_block(&self) -> bool {
        self.block.is_some()
    }

    /// Run the block with `args`; `None` when no block was given.
    pub fn yield_block(&mut self, args: &[Value]) -> Option<Value> {
        self.block.as_mut().map(|block| block(args))
    }
}

impl fmt::Debug for Call<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Call")
            .field("args", &self.args)
            .field("kwargs", &self.kwargs)
            .field("block", &self.has_block())
            .finish()
    }
}

/// A resolved forwarding function for one method of `T`.
pub type Method<T> =
    Arc<dyn Fn(&T, &mut Call<'_>) -> Result<Value, <T as Dispatch>::Error> + Send + Sync>;

/// A target whose methods can be invoked by name.
pub trait Dispatch: Send + Sync + Sized + 'static {
    /// Whatever the target raises, including for unknown methods. The
    /// proxy passes it through untouched.
    type Error;

    /// Resolve `method` to a callable, or fail the way the target does for
    /// a method it does not have.
    fn lookup(&self, method: &str) -> Result<Method<Self>, Self::Error>;
}

/// Wrap a closure as a `Method`.
pub fn method<T, F>(f: F) -> Method<T>
where
    T: Dispatch,
    F: Fn(&T, &mut Call<'_>) -> Result<Value, T::Error> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A fixed table of named methods, for targets that declare their
/// surface up front.
pub struct MethodTable<T: Dispatch> {
    methods: HashMap<&'static str, Method<T>>,
}

impl<T: Dispatch> Default for MethodTable<T> {
    fn default() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }
}

impl<T: Dispatch> MethodTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`.
    pub fn with<F>(mut self, name: &'static str, f: F) -> Self
    where
        F: Fn(&T, &mut Call<'_>) -> Result<Value, T::Error> + Send + Sync + 'static,
    {
        self.methods.insert(name, method(f));
        self
    }

    pub fn get(&self, name: &str) -> Option<Method<T>> {
        self.methods.get(name).cloned()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.methods.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl<T: Dispatch> fmt::Debug for MethodTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodTable")
            .field("methods", &self.names())
            .finish()
    }
}
