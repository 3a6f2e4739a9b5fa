//! Pending task records
//!
//! One record per in-flight operation. Records are never mutated after
//! creation; the scheduler only reads them and drops them once finished.

use std::fmt;
use std::time::Duration;

use void_resource::{
    AssetType, AsyncOperation, BatchId, LoadAssetCallbacks, LoadSceneCallbacks, TaskId,
    UnloadSceneCallbacks, UserData,
};

/// An asset load waiting out its simulated delay
pub struct PendingAssetLoad {
    id: TaskId,
    name: String,
    asset_type: Option<AssetType>,
    priority: i32,
    enqueued_at: Duration,
    delay: Duration,
    callbacks: LoadAssetCallbacks,
    user_data: Option<UserData>,
    batch: Option<BatchId>,
}

impl PendingAssetLoad {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: TaskId,
        name: String,
        asset_type: Option<AssetType>,
        priority: i32,
        enqueued_at: Duration,
        delay: Duration,
        callbacks: LoadAssetCallbacks,
        user_data: Option<UserData>,
        batch: Option<BatchId>,
    ) -> Self {
        Self {
            id,
            name,
            asset_type,
            priority,
            enqueued_at,
            delay,
            callbacks,
            user_data,
            batch,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn asset_type(&self) -> Option<AssetType> {
        self.asset_type
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn enqueued_at(&self) -> Duration {
        self.enqueued_at
    }

    /// The simulated delay drawn at creation
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn callbacks(&self) -> &LoadAssetCallbacks {
        &self.callbacks
    }

    pub fn user_data(&self) -> Option<&UserData> {
        self.user_data.as_ref()
    }

    /// Batch this load belongs to, if any
    pub fn batch(&self) -> Option<BatchId> {
        self.batch
    }

    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.enqueued_at)
    }

    pub fn is_due(&self, now: Duration) -> bool {
        self.elapsed(now) >= self.delay
    }

    /// Fraction of the delay already waited, in `[0, 1]`
    pub fn progress(&self, now: Duration) -> f32 {
        if self.delay.is_zero() {
            return 1.0;
        }
        (self.elapsed(now).as_secs_f32() / self.delay.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn snapshot(&self) -> AssetLoadSnapshot {
        AssetLoadSnapshot {
            id: self.id,
            name: self.name.clone(),
            priority: self.priority,
            delay: self.delay,
            batch: self.batch,
        }
    }
}

impl fmt::Debug for PendingAssetLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingAssetLoad")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("asset_type", &self.asset_type)
            .field("priority", &self.priority)
            .field("delay", &self.delay)
            .field("batch", &self.batch)
            .finish()
    }
}

/// Read-only view of a pending asset load, for tools
#[derive(Debug, Clone, PartialEq)]
pub struct AssetLoadSnapshot {
    pub id: TaskId,
    pub name: String,
    pub priority: i32,
    pub delay: Duration,
    pub batch: Option<BatchId>,
}

/// A scene load polled through its platform operation
pub struct PendingSceneLoad {
    id: TaskId,
    operation: Box<dyn AsyncOperation>,
    name: String,
    priority: i32,
    enqueued_at: Duration,
    callbacks: LoadSceneCallbacks,
    user_data: Option<UserData>,
}

impl PendingSceneLoad {
    pub fn new(
        id: TaskId,
        operation: Box<dyn AsyncOperation>,
        name: String,
        priority: i32,
        enqueued_at: Duration,
        callbacks: LoadSceneCallbacks,
        user_data: Option<UserData>,
    ) -> Self {
        Self {
            id,
            operation,
            name,
            priority,
            enqueued_at,
            callbacks,
            user_data,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn operation(&self) -> &dyn AsyncOperation {
        self.operation.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.enqueued_at)
    }

    pub fn callbacks(&self) -> &LoadSceneCallbacks {
        &self.callbacks
    }

    pub fn user_data(&self) -> Option<&UserData> {
        self.user_data.as_ref()
    }
}

impl fmt::Debug for PendingSceneLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSceneLoad")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("done", &self.operation.is_done())
            .finish()
    }
}

/// A scene unload polled through its platform operation
pub struct PendingSceneUnload {
    id: TaskId,
    operation: Box<dyn AsyncOperation>,
    name: String,
    callbacks: UnloadSceneCallbacks,
    user_data: Option<UserData>,
}

impl PendingSceneUnload {
    pub fn new(
        id: TaskId,
        operation: Box<dyn AsyncOperation>,
        name: String,
        callbacks: UnloadSceneCallbacks,
        user_data: Option<UserData>,
    ) -> Self {
        Self {
            id,
            operation,
            name,
            callbacks,
            user_data,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn operation(&self) -> &dyn AsyncOperation {
        self.operation.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn callbacks(&self) -> &UnloadSceneCallbacks {
        &self.callbacks
    }

    pub fn user_data(&self) -> Option<&UserData> {
        self.user_data.as_ref()
    }
}

impl fmt::Debug for PendingSceneUnload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSceneUnload")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("done", &self.operation.is_done())
            .finish()
    }
}
