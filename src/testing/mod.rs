pub mod ports;

pub use ports::{MemoryScaffoldStore, MemoryTemplateStore};
