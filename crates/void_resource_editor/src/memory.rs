//! In-memory platform adapters
//!
//! Hosts without an asset database or scene system (tools, headless runs,
//! tests) can drive the editor backend with these.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use void_resource::{Asset, AssetDatabase, AssetType, AsyncOperation, ErrorSink, SceneManager};

/// Asset lookup backed by a map
#[derive(Default)]
pub struct MemoryAssetDatabase {
    assets: RwLock<HashMap<String, Asset>>,
}

impl MemoryAssetDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset under a name, replacing any previous one
    pub fn insert(&self, name: impl Into<String>, asset: Asset) {
        self.assets.write().insert(name.into(), asset);
    }

    pub fn remove(&self, name: &str) -> Option<Asset> {
        self.assets.write().remove(name)
    }

    pub fn len(&self) -> usize {
        self.assets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.read().is_empty()
    }
}

impl AssetDatabase for MemoryAssetDatabase {
    fn load_asset(&self, name: &str, asset_type: Option<AssetType>) -> Option<Asset> {
        let asset = self.assets.read().get(name).cloned()?;
        match asset_type {
            Some(ty) if !ty.matches(&asset) => None,
            _ => Some(asset),
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.assets.read().contains_key(name)
    }
}

/// Platform operation whose state is set from outside
#[derive(Debug, Default)]
pub struct ScriptedOperation {
    state: Mutex<OperationState>,
}

#[derive(Debug, Default, Clone, Copy)]
struct OperationState {
    done: bool,
    progress: f32,
    activated: bool,
}

impl ScriptedOperation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_progress(&self, progress: f32) {
        self.state.lock().progress = progress.clamp(0.0, 1.0);
    }

    /// Advance progress; reaching 1 finishes the operation with activation
    pub fn advance(&self, step: f32) {
        let mut state = self.state.lock();
        if state.done {
            return;
        }
        state.progress = (state.progress + step).min(1.0);
        if state.progress >= 1.0 {
            state.done = true;
            state.activated = true;
        }
    }

    /// Finish the operation
    pub fn complete(&self, activated: bool) {
        let mut state = self.state.lock();
        state.done = true;
        state.progress = 1.0;
        state.activated = activated;
    }
}

impl AsyncOperation for ScriptedOperation {
    fn is_done(&self) -> bool {
        self.state.lock().done
    }

    fn progress(&self) -> f32 {
        self.state.lock().progress
    }

    fn allow_scene_activation(&self) -> bool {
        self.state.lock().activated
    }
}

/// Scene primitives for a fixed set of known scenes
///
/// Every started operation is kept so the host can move it along; unknown
/// scene names are refused.
#[derive(Default)]
pub struct ScriptedSceneManager {
    scenes: RwLock<Vec<String>>,
    loads: Mutex<HashMap<String, Arc<ScriptedOperation>>>,
    unloads: Mutex<HashMap<String, Arc<ScriptedOperation>>>,
}

impl ScriptedSceneManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a scene known
    pub fn register(&self, name: impl Into<String>) {
        let name = name.into();
        let mut scenes = self.scenes.write();
        if !scenes.contains(&name) {
            scenes.push(name);
        }
    }

    /// Most recent load operation started for a scene
    pub fn load_operation(&self, name: &str) -> Option<Arc<ScriptedOperation>> {
        self.loads.lock().get(name).cloned()
    }

    /// Most recent unload operation started for a scene
    pub fn unload_operation(&self, name: &str) -> Option<Arc<ScriptedOperation>> {
        self.unloads.lock().get(name).cloned()
    }

    /// Advance every started operation by `step`
    pub fn advance_all(&self, step: f32) {
        for op in self.loads.lock().values().chain(self.unloads.lock().values()) {
            op.advance(step);
        }
    }

    fn start(
        &self,
        name: &str,
        operations: &Mutex<HashMap<String, Arc<ScriptedOperation>>>,
    ) -> Option<Box<dyn AsyncOperation>> {
        if !self.scenes.read().iter().any(|s| s == name) {
            return None;
        }
        let op = Arc::new(ScriptedOperation::new());
        operations.lock().insert(name.to_string(), op.clone());
        Some(Box::new(op))
    }
}

impl SceneManager for ScriptedSceneManager {
    fn load_scene_async(&self, name: &str) -> Option<Box<dyn AsyncOperation>> {
        self.start(name, &self.loads)
    }

    fn unload_scene_async(&self, name: &str) -> Option<Box<dyn AsyncOperation>> {
        self.start(name, &self.unloads)
    }
}

/// Sink that keeps every reported message
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl ErrorSink for RecordingSink {
    fn error(&self, message: &str) {
        log::error!("{}", message);
        self.messages.lock().push(message.to_string());
    }
}
