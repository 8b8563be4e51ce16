pub mod dispatch;
pub mod module;

pub use dispatch::apply;
pub use module::{Module, ModuleKind, BROADCASTER};
