//! Load and unload requests
//!
//! Every public entry point of a [`ResourceManager`](crate::ResourceManager)
//! reduces to one of these requests. Anything the caller leaves out takes the
//! default: no type filter, [`DEFAULT_PRIORITY`], no user data.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::asset::{Asset, AssetType, UserData};
use crate::callbacks::LoadAssetsCompleteCallback;

/// Priority used when the caller does not give one
pub const DEFAULT_PRIORITY: i32 = 0;

/// Identifier of an enqueued load or unload
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

impl TaskId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

/// Identifier of an outstanding batch load
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BatchId(pub u64);

impl BatchId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "batch#{}", self.0)
    }
}

/// Request to load one asset
#[derive(Clone)]
pub struct AssetLoadRequest {
    pub name: String,
    pub asset_type: Option<AssetType>,
    pub priority: i32,
    pub user_data: Option<UserData>,
}

impl AssetLoadRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asset_type: None,
            priority: DEFAULT_PRIORITY,
            user_data: None,
        }
    }

    /// Narrow the lookup to type `T`
    pub fn with_type<T: Any>(self) -> Self {
        self.with_asset_type(AssetType::of::<T>())
    }

    pub fn with_asset_type(mut self, asset_type: AssetType) -> Self {
        self.asset_type = Some(asset_type);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_user_data(mut self, user_data: UserData) -> Self {
        self.user_data = Some(user_data);
        self
    }
}

impl fmt::Debug for AssetLoadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetLoadRequest")
            .field("name", &self.name)
            .field("asset_type", &self.asset_type)
            .field("priority", &self.priority)
            .field("user_data", &self.user_data.is_some())
            .finish()
    }
}

/// Request to load several assets and be told once they are all done
///
/// `asset_types` and `priorities` may be shorter than `names`: a name past
/// the end of either list uses that list's last element.
#[derive(Clone, Default)]
pub struct AssetBatchRequest {
    pub names: Vec<String>,
    pub asset_types: Vec<AssetType>,
    pub priorities: Vec<i32>,
    pub on_done: Option<LoadAssetsCompleteCallback>,
    pub user_data: Option<UserData>,
}

impl AssetBatchRequest {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Use one type for every name
    pub fn with_type<T: Any>(mut self) -> Self {
        self.asset_types = vec![AssetType::of::<T>()];
        self
    }

    pub fn with_asset_types(mut self, asset_types: Vec<AssetType>) -> Self {
        self.asset_types = asset_types;
        self
    }

    /// Use one priority for every name
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priorities = vec![priority];
        self
    }

    pub fn with_priorities(mut self, priorities: Vec<i32>) -> Self {
        self.priorities = priorities;
        self
    }

    pub fn with_user_data(mut self, user_data: UserData) -> Self {
        self.user_data = Some(user_data);
        self
    }

    /// Set the callback fired once every member has finished
    pub fn on_done<F>(mut self, f: F) -> Self
    where
        F: Fn(&[String], &[Asset], f32, Option<&UserData>) + Send + Sync + 'static,
    {
        self.on_done = Some(Arc::new(f));
        self
    }

    /// Type filter for the member at `index`
    pub fn asset_type_at(&self, index: usize) -> Option<AssetType> {
        self.asset_types
            .get(index)
            .or_else(|| self.asset_types.last())
            .copied()
    }

    /// Priority for the member at `index`
    pub fn priority_at(&self, index: usize) -> i32 {
        self.priorities
            .get(index)
            .or_else(|| self.priorities.last())
            .copied()
            .unwrap_or(DEFAULT_PRIORITY)
    }
}

impl fmt::Debug for AssetBatchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetBatchRequest")
            .field("names", &self.names)
            .field("asset_types", &self.asset_types)
            .field("priorities", &self.priorities)
            .field("on_done", &self.on_done.is_some())
            .field("user_data", &self.user_data.is_some())
            .finish()
    }
}

/// Request to load a scene
#[derive(Clone)]
pub struct SceneLoadRequest {
    pub name: String,
    pub priority: i32,
    pub user_data: Option<UserData>,
}

impl SceneLoadRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: DEFAULT_PRIORITY,
            user_data: None,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_user_data(mut self, user_data: UserData) -> Self {
        self.user_data = Some(user_data);
        self
    }
}

impl fmt::Debug for SceneLoadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneLoadRequest")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("user_data", &self.user_data.is_some())
            .finish()
    }
}

/// Request to unload a scene
#[derive(Clone)]
pub struct SceneUnloadRequest {
    pub name: String,
    pub user_data: Option<UserData>,
}

impl SceneUnloadRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            user_data: None,
        }
    }

    pub fn with_user_data(mut self, user_data: UserData) -> Self {
        self.user_data = Some(user_data);
        self
    }
}

impl fmt::Debug for SceneUnloadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneUnloadRequest")
            .field("name", &self.name)
            .field("user_data", &self.user_data.is_some())
            .finish()
    }
}
