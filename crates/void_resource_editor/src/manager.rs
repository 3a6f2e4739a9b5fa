//! Editor Resource Manager - simulated asynchronous loading
//!
//! Requests are validated and queued immediately; nothing completes until
//! [`EditorResourceManager::tick`] runs. Each tick walks the asset-load
//! queue, then the scene-load queue, then the scene-unload queue, firing
//! callbacks and dropping finished records.
//!
//! Asset loads wait out a random delay fixed when they are queued, then
//! resolve synchronously through the [`AssetDatabase`]. Scene loads and
//! unloads poll the platform operation started by the [`SceneManager`].
//!
//! All entry points take `&self`. A callback holding the manager may queue
//! more work; that work is first visited on the following tick.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use void_resource::{
    Asset, AssetBatchRequest, AssetDatabase, AssetLoadRequest, BatchId, ErrorSink,
    LoadAssetCallbacks, LoadResourceStatus, LoadSceneCallbacks, LogSink, ResourceError,
    ResourceManager, ResourceResult, SceneLoadRequest, SceneManager, SceneUnloadRequest, TaskId,
    UnloadSceneCallbacks,
};

use crate::batch::{BatchAggregator, BatchTable};
use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, EditorResourceConfig};
use crate::delay::DelaySampler;
use crate::queue::{Step, TaskQueue};
use crate::task::{AssetLoadSnapshot, PendingAssetLoad, PendingSceneLoad, PendingSceneUnload};

const ASSET_NOT_FOUND: &str = "Can not load this asset from asset database.";
const SCENE_NOT_FOUND: &str = "Can not load this scene from asset database.";

/// Outcome counts for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Frame number of this tick
    pub frame: u64,
    /// Asset loads that finished (success or failure)
    pub assets_finished: usize,
    /// Batches that reported completion
    pub batches_finished: usize,
    /// Scene loads that finished
    pub scenes_loaded: usize,
    /// Scene unloads that finished
    pub scenes_unloaded: usize,
}

impl TickStats {
    /// Total records removed from the queues
    pub fn finished(&self) -> usize {
        self.assets_finished + self.scenes_loaded + self.scenes_unloaded
    }
}

/// Marks a tick in progress; cleared on drop, including during unwinding
struct TickGuard<'a>(&'a AtomicBool);

impl<'a> TickGuard<'a> {
    fn enter(flag: &'a AtomicBool) -> Option<Self> {
        if flag.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for TickGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Resource backend that simulates asynchronous loads
pub struct EditorResourceManager {
    assets: Arc<dyn AssetDatabase>,
    scenes: Arc<dyn SceneManager>,
    sink: Arc<dyn ErrorSink>,
    clock: Arc<dyn Clock>,
    delays: Mutex<DelaySampler>,
    read_only_path: RwLock<Option<String>>,
    read_write_path: RwLock<Option<String>>,
    asset_loads: TaskQueue<PendingAssetLoad>,
    scene_loads: TaskQueue<PendingSceneLoad>,
    scene_unloads: TaskQueue<PendingSceneUnload>,
    batches: BatchTable,
    next_task: AtomicU64,
    next_batch: AtomicU64,
    frame: AtomicU64,
    enabled: AtomicBool,
    ticking: AtomicBool,
}

impl EditorResourceManager {
    /// Create a manager with the system clock and the logging sink
    pub fn new(
        config: EditorResourceConfig,
        assets: Arc<dyn AssetDatabase>,
        scenes: Arc<dyn SceneManager>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!(
            "Editor resource manager: load delay {}s..{}s{}",
            config.min_load_delay_secs,
            config.max_load_delay_secs,
            if config.enabled { "" } else { " (disabled)" }
        );

        Ok(Self {
            assets,
            scenes,
            sink: Arc::new(LogSink),
            clock: Arc::new(SystemClock::new()),
            delays: Mutex::new(DelaySampler::from_config(&config)),
            read_only_path: RwLock::new(None),
            read_write_path: RwLock::new(None),
            asset_loads: TaskQueue::new(),
            scene_loads: TaskQueue::new(),
            scene_unloads: TaskQueue::new(),
            batches: BatchTable::new(),
            next_task: AtomicU64::new(1),
            next_batch: AtomicU64::new(1),
            frame: AtomicU64::new(0),
            enabled: AtomicBool::new(config.enabled),
            ticking: AtomicBool::new(false),
        })
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the validation error sink
    pub fn with_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.sink = sink;
        self
    }

    // ---- Host lifecycle -------------------------------------------------

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Enable or disable ticking; requests are still accepted while disabled
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    /// Number of ticks processed so far
    pub fn frame(&self) -> u64 {
        self.frame.load(Ordering::Acquire)
    }

    // ---- Introspection --------------------------------------------------

    pub fn pending_asset_loads(&self) -> usize {
        self.asset_loads.len()
    }

    pub fn pending_scene_loads(&self) -> usize {
        self.scene_loads.len()
    }

    pub fn pending_scene_unloads(&self) -> usize {
        self.scene_unloads.len()
    }

    /// Batches still waiting on members
    pub fn pending_batches(&self) -> usize {
        self.batches.len()
    }

    /// Nothing queued and no batch outstanding
    pub fn is_idle(&self) -> bool {
        self.asset_loads.is_empty()
            && self.scene_loads.is_empty()
            && self.scene_unloads.is_empty()
            && self.batches.is_empty()
    }

    /// Queued asset loads, in processing order
    pub fn asset_load_snapshot(&self) -> Vec<AssetLoadSnapshot> {
        self.asset_loads.snapshot(PendingAssetLoad::snapshot)
    }

    // ---- Tick -----------------------------------------------------------

    /// Advance every queue once
    ///
    /// Call once per frame. Does nothing while disabled or when called from
    /// inside one of its own callbacks.
    pub fn tick(&self) -> TickStats {
        if !self.is_enabled() {
            return TickStats::default();
        }
        let Some(_guard) = TickGuard::enter(&self.ticking) else {
            log::warn!("Ignoring re-entrant resource tick");
            return TickStats::default();
        };

        let frame = self.frame.fetch_add(1, Ordering::AcqRel) + 1;
        let mut stats = TickStats {
            frame,
            ..Default::default()
        };

        stats.assets_finished = self.advance_asset_loads();
        stats.batches_finished = self.finish_batches(frame);
        stats.scenes_loaded = self.advance_scene_loads();
        stats.scenes_unloaded = self.advance_scene_unloads();
        stats
    }

    fn advance_asset_loads(&self) -> usize {
        let now = self.clock.now();
        self.asset_loads.sweep(|task| {
            if !task.is_due(now) {
                task.callbacks()
                    .notify_update(task.name(), task.progress(now), task.user_data());
                return Step::Pending;
            }

            let elapsed = task.elapsed(now).as_secs_f32();
            match self.assets.load_asset(task.name(), task.asset_type()) {
                Some(asset) => {
                    log::debug!("Loaded asset '{}' after {:.3}s", task.name(), elapsed);
                    if let Some(batch) = task.batch() {
                        self.batches
                            .record_success(batch, task.name(), asset.clone(), elapsed);
                    }
                    task.callbacks()
                        .notify_success(task.name(), asset, elapsed, task.user_data());
                }
                None => {
                    log::debug!("Asset '{}' not found", task.name());
                    if let Some(batch) = task.batch() {
                        self.batches.record_failure(batch, task.name());
                    }
                    task.callbacks().notify_failure(
                        task.name(),
                        LoadResourceStatus::NotExist,
                        ASSET_NOT_FOUND,
                        task.user_data(),
                    );
                }
            }
            Step::Finished
        })
    }

    fn finish_batches(&self, frame: u64) -> usize {
        let ready = self.batches.take_complete(frame);
        let count = ready.len();
        for (id, batch) in ready {
            log::debug!(
                "{} finished: {} loaded, {} failed, {:.3}s total",
                id,
                batch.names().len(),
                batch.failed(),
                batch.duration()
            );
            batch.finish();
        }
        count
    }

    fn advance_scene_loads(&self) -> usize {
        let now = self.clock.now();
        self.scene_loads.sweep(|task| {
            let op = task.operation();
            if !op.is_done() {
                task.callbacks()
                    .notify_update(task.name(), op.progress(), task.user_data());
                return Step::Pending;
            }

            if op.allow_scene_activation() {
                let elapsed = task.elapsed(now).as_secs_f32();
                log::debug!("Loaded scene '{}' after {:.3}s", task.name(), elapsed);
                task.callbacks()
                    .notify_success(task.name(), elapsed, task.user_data());
            } else {
                log::debug!("Scene '{}' finished without activation", task.name());
                task.callbacks().notify_failure(
                    task.name(),
                    LoadResourceStatus::NotExist,
                    SCENE_NOT_FOUND,
                    task.user_data(),
                );
            }
            Step::Finished
        })
    }

    fn advance_scene_unloads(&self) -> usize {
        self.scene_unloads.sweep(|task| {
            let op = task.operation();
            if !op.is_done() {
                return Step::Pending;
            }

            if op.allow_scene_activation() {
                log::debug!("Unloaded scene '{}'", task.name());
                task.callbacks().notify_success(task.name(), task.user_data());
            } else {
                log::debug!("Scene '{}' failed to unload", task.name());
                task.callbacks().notify_failure(task.name(), task.user_data());
            }
            Step::Finished
        })
    }

    // ---- Request helpers ------------------------------------------------

    fn reject<T>(&self, message: &str) -> ResourceResult<T> {
        self.sink.error(message);
        Err(ResourceError::InvalidRequest(message.to_string()))
    }

    fn next_task_id(&self) -> TaskId {
        TaskId::new(self.next_task.fetch_add(1, Ordering::Relaxed))
    }

    fn enqueue_asset(
        &self,
        request: AssetLoadRequest,
        callbacks: LoadAssetCallbacks,
        batch: Option<BatchId>,
    ) -> TaskId {
        let id = self.next_task_id();
        let delay = self.delays.lock().sample();
        log::trace!("Queued asset '{}' as {} with delay {:?}", request.name, id, delay);

        self.asset_loads.push(PendingAssetLoad::new(
            id,
            request.name,
            request.asset_type,
            request.priority,
            self.clock.now(),
            delay,
            callbacks,
            request.user_data,
            batch,
        ));
        id
    }
}

impl ResourceManager for EditorResourceManager {
    fn read_only_path(&self) -> Option<String> {
        self.read_only_path.read().clone()
    }

    fn read_write_path(&self) -> Option<String> {
        self.read_write_path.read().clone()
    }

    fn set_read_only_path(&self, path: &str) -> ResourceResult<()> {
        if path.is_empty() {
            return self.reject("Read-only path is invalid.");
        }
        *self.read_only_path.write() = Some(path.to_string());
        Ok(())
    }

    fn set_read_write_path(&self, path: &str) -> ResourceResult<()> {
        if path.is_empty() {
            return self.reject("Read-write path is invalid.");
        }
        *self.read_write_path.write() = Some(path.to_string());
        Ok(())
    }

    fn load_asset_with(
        &self,
        request: AssetLoadRequest,
        callbacks: LoadAssetCallbacks,
    ) -> ResourceResult<TaskId> {
        if request.name.is_empty() {
            return self.reject("Asset name is invalid.");
        }
        if !callbacks.is_valid() {
            return self.reject("Load asset callbacks is invalid.");
        }
        Ok(self.enqueue_asset(request, callbacks, None))
    }

    fn load_assets_with(
        &self,
        request: AssetBatchRequest,
        callbacks: LoadAssetCallbacks,
    ) -> ResourceResult<BatchId> {
        if request.names.iter().any(String::is_empty) {
            return self.reject("Asset names is invalid.");
        }
        let on_done = match &request.on_done {
            Some(on_done) => on_done.clone(),
            None => return self.reject("Load assets callbacks is invalid."),
        };
        if !callbacks.is_valid() {
            return self.reject("Load asset callbacks is invalid.");
        }

        let id = BatchId::new(self.next_batch.fetch_add(1, Ordering::Relaxed));
        self.batches.open(
            id,
            BatchAggregator::new(
                on_done,
                request.user_data.clone(),
                request.names.len(),
                self.frame(),
            ),
        );
        log::debug!("Opened {} with {} assets", id, request.names.len());

        for (index, name) in request.names.iter().enumerate() {
            let mut member =
                AssetLoadRequest::new(name.as_str()).with_priority(request.priority_at(index));
            member.asset_type = request.asset_type_at(index);
            member.user_data = request.user_data.clone();
            self.enqueue_asset(member, callbacks.clone(), Some(id));
        }
        Ok(id)
    }

    fn load_scene_with(
        &self,
        request: SceneLoadRequest,
        callbacks: LoadSceneCallbacks,
    ) -> ResourceResult<TaskId> {
        if request.name.is_empty() {
            return self.reject("Scene asset name is invalid.");
        }
        if !callbacks.is_valid() {
            return self.reject("Load scene callbacks is invalid.");
        }

        let Some(operation) = self.scenes.load_scene_async(&request.name) else {
            log::warn!("Platform refused to load scene '{}'", request.name);
            return Err(ResourceError::PlatformRejected(request.name));
        };

        let id = self.next_task_id();
        self.scene_loads.push(PendingSceneLoad::new(
            id,
            operation,
            request.name,
            request.priority,
            self.clock.now(),
            callbacks,
            request.user_data,
        ));
        Ok(id)
    }

    fn unload_scene_with(
        &self,
        request: SceneUnloadRequest,
        callbacks: UnloadSceneCallbacks,
    ) -> ResourceResult<TaskId> {
        if request.name.is_empty() {
            return self.reject("Scene asset name is invalid.");
        }
        if !callbacks.is_valid() {
            return self.reject("Unload scene callbacks is invalid.");
        }

        let Some(operation) = self.scenes.unload_scene_async(&request.name) else {
            log::warn!("Platform refused to unload scene '{}'", request.name);
            return Err(ResourceError::PlatformRejected(request.name));
        };

        let id = self.next_task_id();
        self.scene_unloads.push(PendingSceneUnload::new(
            id,
            operation,
            request.name,
            callbacks,
            request.user_data,
        ));
        Ok(id)
    }

    fn unload_asset(&self, _asset: &Asset) {
        // Assets belong to the asset database in editor mode
        log::debug!("unload_asset ignored in editor resource mode");
    }

    fn has_asset(&self, name: &str) -> bool {
        self.assets.contains(name)
    }
}

impl std::fmt::Debug for EditorResourceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorResourceManager")
            .field("enabled", &self.is_enabled())
            .field("frame", &self.frame())
            .field("asset_loads", &self.asset_loads.len())
            .field("scene_loads", &self.scene_loads.len())
            .field("scene_unloads", &self.scene_unloads.len())
            .field("batches", &self.batches.len())
            .finish()
    }
}
