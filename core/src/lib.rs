//! WHGG core
//!
//! Everything between the search form and the rendered profile: validating what the user
//! typed, remembering recent searches, resolving which player a profile view is about and
//! orchestrating the four independent fetches that fill it.

pub mod config;
pub mod identity;
pub mod profile;
pub mod recent_searches;
pub mod route;
pub mod search;
pub mod storage;

pub use config::{default_data_dir, AppConfig, ConfigError};
pub use identity::{SearchFormData, SearchIdentity, ValidationError};
pub use profile::{
	ProfileAction, ProfileLoadOrchestrator, ProfileViewState, SlotKind, SlotState, SlotStatus,
};
pub use recent_searches::{RecentSearchEntry, RecentSearchStore, MAX_RECENT_SEARCHES};
pub use route::{parse_profile_route, resolve_profile, ProfileNavigation, RouteError};
pub use search::{SearchError, SearchSession};
pub use storage::{JsonFileStorage, KeyValueStorage, MemoryStorage, StorageError};

pub use whgg_api as api;
