mod memory_scaffold_store;
mod memory_template_store;

pub use memory_scaffold_store::MemoryScaffoldStore;
pub use memory_template_store::MemoryTemplateStore;
