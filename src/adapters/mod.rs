pub mod assets;
mod scaffold_filesystem;
mod template_filesystem;
mod template_layered;

pub use assets::template_assets::EmbeddedTemplateStore;
pub use scaffold_filesystem::FilesystemScaffoldStore;
pub use template_filesystem::FilesystemTemplateStore;
pub use template_layered::LayeredTemplateStore;
