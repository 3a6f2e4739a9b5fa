//! # void_resource - Resource Manager Contracts
//!
//! The callback contract shared by every resource backend. Code that loads
//! assets and scenes talks to a [`ResourceManager`] and receives results
//! through typed callback bundles, so it never needs to know whether the
//! backend streams real bundles or merely simulates latency.
//!
//! Provides:
//! - Callback bundles for asset loads, batch loads, scene loads and unloads
//! - Request types with defaults for type, priority and user data
//! - Platform collaborator traits (asset lookup, scene primitives, error sink)
//! - A [`Capability`] variant for surface a backend does not implement
//!
//! ## Example
//!
//! ```ignore
//! use void_resource::prelude::*;
//!
//! let callbacks = LoadAssetCallbacks::new()
//!     .on_success(|name, asset, elapsed, _| {
//!         log::info!("{} ready after {:.2}s", name, elapsed);
//!     })
//!     .on_failure(|name, status, message, _| {
//!         log::warn!("{} failed ({}): {}", name, status, message);
//!     });
//!
//! manager.load_asset("hero.prefab", callbacks)?;
//!
//! // Once per frame:
//! backend.tick();
//! ```

pub mod asset;
pub mod callbacks;
pub mod capability;
pub mod error;
pub mod manager;
pub mod platform;
pub mod request;

pub use asset::{shared, Asset, AssetType, UserData};
pub use callbacks::{
    LoadAssetCallbacks, LoadAssetDependencyCallback, LoadAssetFailureCallback,
    LoadAssetSuccessCallback, LoadAssetUpdateCallback, LoadAssetsCompleteCallback,
    LoadSceneCallbacks, LoadSceneFailureCallback, LoadSceneSuccessCallback,
    LoadSceneUpdateCallback, UnloadSceneCallbacks, UnloadSceneFailureCallback,
    UnloadSceneSuccessCallback,
};
pub use capability::Capability;
pub use error::{LoadResourceStatus, ResourceError, ResourceResult};
pub use manager::ResourceManager;
pub use platform::{AssetDatabase, AsyncOperation, ErrorSink, LogSink, SceneManager};
pub use request::{
    AssetBatchRequest, AssetLoadRequest, BatchId, SceneLoadRequest, SceneUnloadRequest,
    TaskId, DEFAULT_PRIORITY,
};

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::asset::{shared, Asset, AssetType, UserData};
    pub use crate::callbacks::{
        LoadAssetCallbacks, LoadAssetsCompleteCallback, LoadSceneCallbacks, UnloadSceneCallbacks,
    };
    pub use crate::capability::Capability;
    pub use crate::error::{LoadResourceStatus, ResourceError, ResourceResult};
    pub use crate::manager::ResourceManager;
    pub use crate::platform::{AssetDatabase, AsyncOperation, ErrorSink, LogSink, SceneManager};
    pub use crate::request::{
        AssetBatchRequest, AssetLoadRequest, BatchId, SceneLoadRequest, SceneUnloadRequest, TaskId,
    };
}
