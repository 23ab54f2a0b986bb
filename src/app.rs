use std::fmt;
use std::sync::Arc;

struct Inner {
    name: String,
}

/// An opaque per-application binding handle.
///
/// The engine never looks inside it; `set_application` hands the same
/// handle to every operand so that application-scoped leaf nodes can carry
/// it back to the provider. Clones share identity (`same_app`).
#[derive(Clone)]
pub struct AppContext {
    inner: Arc<Inner>,
}

impl AppContext {
    pub fn new(name: impl Into<String>) -> Self {
        AppContext {
            inner: Arc::new(Inner { name: name.into() }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Identity comparison: true when both handles came from the same
    /// `AppContext::new` call.
    pub fn same_app(&self, other: &AppContext) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AppContext").field(&self.inner.name).finish()
    }
}
