pub mod config_storage;
pub mod paths;
pub mod storage;
pub mod user_state_repository;

pub use crate::config_storage::{load_config, save_config};
pub use crate::paths::ZooPaths;
pub use crate::user_state_repository::JsonUserStateRepository;
