mod scaffold_store;
mod template_store;

pub use scaffold_store::ScaffoldStore;
pub use template_store::TemplateStore;
