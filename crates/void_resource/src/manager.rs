//! The resource manager facade
//!
//! One canonical method per operation kind (`*_with`), plus shorthand
//! methods that fill in defaults and forward. Queries a backend may not be
//! able to answer return [`Capability`] and default to unsupported, so a
//! backend only overrides what it actually provides.

use crate::asset::{Asset, AssetType};
use crate::callbacks::{LoadAssetCallbacks, LoadSceneCallbacks, UnloadSceneCallbacks};
use crate::capability::Capability;
use crate::error::ResourceResult;
use crate::request::{
    AssetBatchRequest, AssetLoadRequest, BatchId, SceneLoadRequest, SceneUnloadRequest, TaskId,
};

/// Contract every resource backend honors, simulated or real
pub trait ResourceManager: Send + Sync {
    // ---- Paths --------------------------------------------------------

    /// Read-only resource root, if set
    fn read_only_path(&self) -> Option<String>;

    /// Read-write resource root, if set
    fn read_write_path(&self) -> Option<String>;

    fn set_read_only_path(&self, path: &str) -> ResourceResult<()>;

    fn set_read_write_path(&self, path: &str) -> ResourceResult<()>;

    /// Active resource variant
    fn current_variant(&self) -> Option<String> {
        None
    }

    // ---- Canonical requests -------------------------------------------

    /// Queue an asset load
    fn load_asset_with(
        &self,
        request: AssetLoadRequest,
        callbacks: LoadAssetCallbacks,
    ) -> ResourceResult<TaskId>;

    /// Queue a batch of asset loads reported through one completion callback
    fn load_assets_with(
        &self,
        request: AssetBatchRequest,
        callbacks: LoadAssetCallbacks,
    ) -> ResourceResult<BatchId>;

    /// Queue a scene load
    fn load_scene_with(
        &self,
        request: SceneLoadRequest,
        callbacks: LoadSceneCallbacks,
    ) -> ResourceResult<TaskId>;

    /// Queue a scene unload
    fn unload_scene_with(
        &self,
        request: SceneUnloadRequest,
        callbacks: UnloadSceneCallbacks,
    ) -> ResourceResult<TaskId>;

    /// Release a previously loaded asset
    fn unload_asset(&self, asset: &Asset);

    /// Check if an asset exists
    fn has_asset(&self, name: &str) -> bool;

    // ---- Shorthand ----------------------------------------------------

    fn load_asset(&self, name: &str, callbacks: LoadAssetCallbacks) -> ResourceResult<TaskId> {
        self.load_asset_with(AssetLoadRequest::new(name), callbacks)
    }

    fn load_asset_typed(
        &self,
        name: &str,
        asset_type: AssetType,
        callbacks: LoadAssetCallbacks,
    ) -> ResourceResult<TaskId> {
        self.load_asset_with(AssetLoadRequest::new(name).with_asset_type(asset_type), callbacks)
    }

    fn load_asset_with_priority(
        &self,
        name: &str,
        priority: i32,
        callbacks: LoadAssetCallbacks,
    ) -> ResourceResult<TaskId> {
        self.load_asset_with(AssetLoadRequest::new(name).with_priority(priority), callbacks)
    }

    fn load_scene(&self, name: &str, callbacks: LoadSceneCallbacks) -> ResourceResult<TaskId> {
        self.load_scene_with(SceneLoadRequest::new(name), callbacks)
    }

    fn load_scene_with_priority(
        &self,
        name: &str,
        priority: i32,
        callbacks: LoadSceneCallbacks,
    ) -> ResourceResult<TaskId> {
        self.load_scene_with(SceneLoadRequest::new(name).with_priority(priority), callbacks)
    }

    fn unload_scene(&self, name: &str, callbacks: UnloadSceneCallbacks) -> ResourceResult<TaskId> {
        self.unload_scene_with(SceneUnloadRequest::new(name), callbacks)
    }

    // ---- Optional surface ---------------------------------------------

    fn applicable_game_version(&self) -> Capability<String> {
        Capability::Unsupported("applicable_game_version")
    }

    fn internal_resource_version(&self) -> Capability<u32> {
        Capability::Unsupported("internal_resource_version")
    }

    fn asset_count(&self) -> Capability<usize> {
        Capability::Unsupported("asset_count")
    }

    fn resource_count(&self) -> Capability<usize> {
        Capability::Unsupported("resource_count")
    }

    fn load_total_agent_count(&self) -> Capability<usize> {
        Capability::Unsupported("load_total_agent_count")
    }

    fn load_free_agent_count(&self) -> Capability<usize> {
        Capability::Unsupported("load_free_agent_count")
    }

    fn load_working_agent_count(&self) -> Capability<usize> {
        Capability::Unsupported("load_working_agent_count")
    }

    fn load_waiting_task_count(&self) -> Capability<usize> {
        Capability::Unsupported("load_waiting_task_count")
    }

    fn asset_auto_release_interval(&self) -> Capability<f32> {
        Capability::Unsupported("asset_auto_release_interval")
    }

    fn set_asset_auto_release_interval(&self, _seconds: f32) -> Capability<()> {
        Capability::Unsupported("asset_auto_release_interval")
    }

    fn asset_capacity(&self) -> Capability<usize> {
        Capability::Unsupported("asset_capacity")
    }

    fn set_asset_capacity(&self, _capacity: usize) -> Capability<()> {
        Capability::Unsupported("asset_capacity")
    }

    fn asset_expire_time(&self) -> Capability<f32> {
        Capability::Unsupported("asset_expire_time")
    }

    fn set_asset_expire_time(&self, _seconds: f32) -> Capability<()> {
        Capability::Unsupported("asset_expire_time")
    }

    fn asset_priority(&self) -> Capability<i32> {
        Capability::Unsupported("asset_priority")
    }

    fn set_asset_priority(&self, _priority: i32) -> Capability<()> {
        Capability::Unsupported("asset_priority")
    }

    fn resource_auto_release_interval(&self) -> Capability<f32> {
        Capability::Unsupported("resource_auto_release_interval")
    }

    fn set_resource_auto_release_interval(&self, _seconds: f32) -> Capability<()> {
        Capability::Unsupported("resource_auto_release_interval")
    }

    fn resource_capacity(&self) -> Capability<usize> {
        Capability::Unsupported("resource_capacity")
    }

    fn set_resource_capacity(&self, _capacity: usize) -> Capability<()> {
        Capability::Unsupported("resource_capacity")
    }

    fn resource_expire_time(&self) -> Capability<f32> {
        Capability::Unsupported("resource_expire_time")
    }

    fn set_resource_expire_time(&self, _seconds: f32) -> Capability<()> {
        Capability::Unsupported("resource_expire_time")
    }

    fn resource_priority(&self) -> Capability<i32> {
        Capability::Unsupported("resource_priority")
    }

    fn set_resource_priority(&self, _priority: i32) -> Capability<()> {
        Capability::Unsupported("resource_priority")
    }

    fn set_current_variant(&self, _variant: &str) -> Capability<()> {
        Capability::Unsupported("set_current_variant")
    }

    fn set_object_pool_manager(&self) -> Capability<()> {
        Capability::Unsupported("set_object_pool_manager")
    }

    fn set_decrypt_resource_callback(&self) -> Capability<()> {
        Capability::Unsupported("set_decrypt_resource_callback")
    }

    fn set_resource_helper(&self) -> Capability<()> {
        Capability::Unsupported("set_resource_helper")
    }

    fn add_load_resource_agent_helper(&self) -> Capability<()> {
        Capability::Unsupported("add_load_resource_agent_helper")
    }

    /// Start resource initialization (bundle manifests, versions)
    fn init_resources(&self) -> Capability<()> {
        Capability::Unsupported("init_resources")
    }

    /// Asset names inside one bundle
    fn assets_in_bundle(&self, _bundle: &str) -> Capability<Vec<String>> {
        Capability::Unsupported("assets_in_bundle")
    }

    /// Asset names carrying a group tag
    fn asset_group(&self, _tag: &str) -> Capability<Vec<String>> {
        Capability::Unsupported("asset_group")
    }

    /// Every known group tag
    fn asset_groups(&self) -> Capability<Vec<String>> {
        Capability::Unsupported("asset_groups")
    }
}
