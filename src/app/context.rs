use crate::ports::{ScaffoldStore, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<T: TemplateStore, S: ScaffoldStore> {
    templates: T,
    store: S,
}

impl<T: TemplateStore, S: ScaffoldStore> AppContext<T, S> {
    /// Create a new application context.
    pub fn new(templates: T, store: S) -> Self {
        Self { templates, store }
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Get a reference to the scaffold store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
