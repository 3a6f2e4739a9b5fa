//! Callback bundles
//!
//! Each bundle holds optional callbacks for one kind of operation. Bundles
//! are cheap to clone (callbacks are reference counted) so one bundle can be
//! shared by every member of a batch load.

use std::fmt;
use std::sync::Arc;

use crate::asset::{Asset, UserData};
use crate::error::LoadResourceStatus;

/// Asset loaded: (name, asset, elapsed seconds, user data)
pub type LoadAssetSuccessCallback = Arc<dyn Fn(&str, Asset, f32, Option<&UserData>) + Send + Sync>;

/// Asset load failed: (name, status, message, user data)
pub type LoadAssetFailureCallback =
    Arc<dyn Fn(&str, LoadResourceStatus, &str, Option<&UserData>) + Send + Sync>;

/// Asset load progress: (name, progress in [0, 1], user data)
pub type LoadAssetUpdateCallback = Arc<dyn Fn(&str, f32, Option<&UserData>) + Send + Sync>;

/// Dependency loaded: (name, dependency name, loaded count, total count, user data)
pub type LoadAssetDependencyCallback =
    Arc<dyn Fn(&str, &str, usize, usize, Option<&UserData>) + Send + Sync>;

/// Batch finished: (names, assets, total duration in seconds, user data)
pub type LoadAssetsCompleteCallback =
    Arc<dyn Fn(&[String], &[Asset], f32, Option<&UserData>) + Send + Sync>;

/// Scene loaded: (name, elapsed seconds, user data)
pub type LoadSceneSuccessCallback = Arc<dyn Fn(&str, f32, Option<&UserData>) + Send + Sync>;

/// Scene load failed: (name, status, message, user data)
pub type LoadSceneFailureCallback =
    Arc<dyn Fn(&str, LoadResourceStatus, &str, Option<&UserData>) + Send + Sync>;

/// Scene load progress: (name, progress in [0, 1], user data)
pub type LoadSceneUpdateCallback = Arc<dyn Fn(&str, f32, Option<&UserData>) + Send + Sync>;

/// Scene unloaded: (name, user data)
pub type UnloadSceneSuccessCallback = Arc<dyn Fn(&str, Option<&UserData>) + Send + Sync>;

/// Scene unload failed: (name, user data)
pub type UnloadSceneFailureCallback = Arc<dyn Fn(&str, Option<&UserData>) + Send + Sync>;

/// Callbacks for a single asset load
#[derive(Clone, Default)]
pub struct LoadAssetCallbacks {
    success: Option<LoadAssetSuccessCallback>,
    failure: Option<LoadAssetFailureCallback>,
    update: Option<LoadAssetUpdateCallback>,
    dependency: Option<LoadAssetDependencyCallback>,
}

impl LoadAssetCallbacks {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the success callback
    pub fn on_success<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, Asset, f32, Option<&UserData>) + Send + Sync + 'static,
    {
        self.success = Some(Arc::new(f));
        self
    }

    /// Set the failure callback
    pub fn on_failure<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, LoadResourceStatus, &str, Option<&UserData>) + Send + Sync + 'static,
    {
        self.failure = Some(Arc::new(f));
        self
    }

    /// Set the progress callback
    pub fn on_update<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, f32, Option<&UserData>) + Send + Sync + 'static,
    {
        self.update = Some(Arc::new(f));
        self
    }

    /// Set the dependency callback
    pub fn on_dependency<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str, usize, usize, Option<&UserData>) + Send + Sync + 'static,
    {
        self.dependency = Some(Arc::new(f));
        self
    }

    pub fn success(&self) -> Option<&LoadAssetSuccessCallback> {
        self.success.as_ref()
    }

    pub fn failure(&self) -> Option<&LoadAssetFailureCallback> {
        self.failure.as_ref()
    }

    pub fn update(&self) -> Option<&LoadAssetUpdateCallback> {
        self.update.as_ref()
    }

    pub fn dependency(&self) -> Option<&LoadAssetDependencyCallback> {
        self.dependency.as_ref()
    }

    /// A bundle without a success callback cannot deliver a result
    pub fn is_valid(&self) -> bool {
        self.success.is_some()
    }

    pub fn notify_success(&self, name: &str, asset: Asset, elapsed: f32, user_data: Option<&UserData>) {
        if let Some(cb) = &self.success {
            cb(name, asset, elapsed, user_data);
        }
    }

    pub fn notify_failure(
        &self,
        name: &str,
        status: LoadResourceStatus,
        message: &str,
        user_data: Option<&UserData>,
    ) {
        if let Some(cb) = &self.failure {
            cb(name, status, message, user_data);
        }
    }

    pub fn notify_update(&self, name: &str, progress: f32, user_data: Option<&UserData>) {
        if let Some(cb) = &self.update {
            cb(name, progress, user_data);
        }
    }

    pub fn notify_dependency(
        &self,
        name: &str,
        dependency: &str,
        loaded: usize,
        total: usize,
        user_data: Option<&UserData>,
    ) {
        if let Some(cb) = &self.dependency {
            cb(name, dependency, loaded, total, user_data);
        }
    }
}

impl fmt::Debug for LoadAssetCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadAssetCallbacks")
            .field("success", &self.success.is_some())
            .field("failure", &self.failure.is_some())
            .field("update", &self.update.is_some())
            .field("dependency", &self.dependency.is_some())
            .finish()
    }
}

/// Callbacks for a scene load
#[derive(Clone, Default)]
pub struct LoadSceneCallbacks {
    success: Option<LoadSceneSuccessCallback>,
    failure: Option<LoadSceneFailureCallback>,
    update: Option<LoadSceneUpdateCallback>,
}

impl LoadSceneCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_success<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, f32, Option<&UserData>) + Send + Sync + 'static,
    {
        self.success = Some(Arc::new(f));
        self
    }

    pub fn on_failure<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, LoadResourceStatus, &str, Option<&UserData>) + Send + Sync + 'static,
    {
        self.failure = Some(Arc::new(f));
        self
    }

    pub fn on_update<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, f32, Option<&UserData>) + Send + Sync + 'static,
    {
        self.update = Some(Arc::new(f));
        self
    }

    pub fn is_valid(&self) -> bool {
        self.success.is_some()
    }

    pub fn notify_success(&self, name: &str, elapsed: f32, user_data: Option<&UserData>) {
        if let Some(cb) = &self.success {
            cb(name, elapsed, user_data);
        }
    }

    pub fn notify_failure(
        &self,
        name: &str,
        status: LoadResourceStatus,
        message: &str,
        user_data: Option<&UserData>,
    ) {
        if let Some(cb) = &self.failure {
            cb(name, status, message, user_data);
        }
    }

    pub fn notify_update(&self, name: &str, progress: f32, user_data: Option<&UserData>) {
        if let Some(cb) = &self.update {
            cb(name, progress, user_data);
        }
    }
}

impl fmt::Debug for LoadSceneCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadSceneCallbacks")
            .field("success", &self.success.is_some())
            .field("failure", &self.failure.is_some())
            .field("update", &self.update.is_some())
            .finish()
    }
}

/// Callbacks for a scene unload (no progress is reported for unloads)
#[derive(Clone, Default)]
pub struct UnloadSceneCallbacks {
    success: Option<UnloadSceneSuccessCallback>,
    failure: Option<UnloadSceneFailureCallback>,
}

impl UnloadSceneCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_success<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, Option<&UserData>) + Send + Sync + 'static,
    {
        self.success = Some(Arc::new(f));
        self
    }

    pub fn on_failure<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, Option<&UserData>) + Send + Sync + 'static,
    {
        self.failure = Some(Arc::new(f));
        self
    }

    pub fn is_valid(&self) -> bool {
        self.success.is_some()
    }

    pub fn notify_success(&self, name: &str, user_data: Option<&UserData>) {
        if let Some(cb) = &self.success {
            cb(name, user_data);
        }
    }

    pub fn notify_failure(&self, name: &str, user_data: Option<&UserData>) {
        if let Some(cb) = &self.failure {
            cb(name, user_data);
        }
    }
}

impl fmt::Debug for UnloadSceneCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnloadSceneCallbacks")
            .field("success", &self.success.is_some())
            .field("failure", &self.failure.is_some())
            .finish()
    }
}
