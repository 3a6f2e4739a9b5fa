//! # void_resource_editor - Simulated Resource Backend
//!
//! A [`ResourceManager`](void_resource::ResourceManager) for editor and
//! tooling runs where no asset bundles exist:
//! - Asset loads resolve through an asset database after a random delay
//! - Scene loads and unloads poll platform operations
//! - Batch loads aggregate per batch and report once
//! - Everything advances on an explicit per-frame tick
//!
//! ## Example
//!
//! ```ignore
//! use void_resource::prelude::*;
//! use void_resource_editor::prelude::*;
//!
//! let config = EditorResourceConfig::load("resource.toml")?;
//! let manager = EditorResourceManager::new(config, database, scenes)?;
//!
//! manager.load_asset(
//!     "hero.prefab",
//!     LoadAssetCallbacks::new().on_success(|name, _asset, elapsed, _| {
//!         log::info!("{} loaded in {:.2}s", name, elapsed);
//!     }),
//! )?;
//!
//! loop {
//!     manager.tick();
//! }
//! ```

pub mod batch;
pub mod clock;
pub mod config;
pub mod delay;
pub mod manager;
pub mod memory;
pub mod queue;
pub mod task;

pub use batch::{BatchAggregator, BatchTable};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, EditorResourceConfig, ENV_MAX_DELAY, ENV_MIN_DELAY, ENV_SEED};
pub use delay::DelaySampler;
pub use manager::{EditorResourceManager, TickStats};
pub use memory::{MemoryAssetDatabase, RecordingSink, ScriptedOperation, ScriptedSceneManager};
pub use queue::{Step, TaskQueue};
pub use task::{AssetLoadSnapshot, PendingAssetLoad, PendingSceneLoad, PendingSceneUnload};

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::clock::{Clock, ManualClock, SystemClock};
    pub use crate::config::{ConfigError, EditorResourceConfig};
    pub use crate::manager::{EditorResourceManager, TickStats};
    pub use crate::memory::{MemoryAssetDatabase, RecordingSink, ScriptedSceneManager};
    pub use crate::task::AssetLoadSnapshot;
}
