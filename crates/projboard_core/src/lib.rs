//! Core state and view bindings for the project board.
//! The store in this crate is the single source of truth for project data.

pub mod board;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

pub use board::Board;
pub use config::{BoardConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{ParseStatusError, Project, ProjectId, ProjectStatus};
pub use model::validation::{
    validate, NewProject, ProjectDraft, Rules, Validatable, ValidationError,
};
pub use state::store::{ProjectStore, Snapshot, SubscriptionId};
pub use view::input::ProjectInput;
pub use view::list::ProjectList;
pub use view::render::{render_project_item, ProjectRenderer, TextRenderer};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
