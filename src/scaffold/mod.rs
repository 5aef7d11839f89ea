//! Recipe-driven scaffolding
//!
//! Templates describe a project as a [`Recipe`]; the [`Executor`] runs it.

pub mod archive;
mod executor;
mod patch;
mod recipe;

pub use executor::Executor;
pub use patch::{Edit, FilePatch};
#[cfg(test)]
pub use patch::apply_edits;
pub use recipe::{Recipe, Step, TemplateFile};
