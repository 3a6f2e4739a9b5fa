//! Platform collaborators
//!
//! The host engine supplies these. The resource backends never depend on a
//! concrete platform type, only on these traits.

use std::sync::Arc;

use crate::asset::{Asset, AssetType};

/// Synchronous, path-based asset lookup
pub trait AssetDatabase: Send + Sync {
    /// Look up an asset by name, optionally narrowed to a type
    fn load_asset(&self, name: &str, asset_type: Option<AssetType>) -> Option<Asset>;

    /// Check if an asset exists
    fn contains(&self, name: &str) -> bool {
        self.load_asset(name, None).is_some()
    }
}

/// An in-progress platform operation, polled once per tick
pub trait AsyncOperation: Send + Sync {
    /// Whether the operation has finished
    fn is_done(&self) -> bool;

    /// Progress in `[0, 1]`
    fn progress(&self) -> f32;

    /// Whether the result was activated; a finished operation without
    /// activation did not succeed
    fn allow_scene_activation(&self) -> bool;
}

impl<T: AsyncOperation + ?Sized> AsyncOperation for Arc<T> {
    fn is_done(&self) -> bool {
        (**self).is_done()
    }

    fn progress(&self) -> f32 {
        (**self).progress()
    }

    fn allow_scene_activation(&self) -> bool {
        (**self).allow_scene_activation()
    }
}

impl<T: AsyncOperation + ?Sized> AsyncOperation for Box<T> {
    fn is_done(&self) -> bool {
        (**self).is_done()
    }

    fn progress(&self) -> f32 {
        (**self).progress()
    }

    fn allow_scene_activation(&self) -> bool {
        (**self).allow_scene_activation()
    }
}

/// Native scene primitives
///
/// Returning `None` means the platform refused to start the operation.
pub trait SceneManager: Send + Sync {
    /// Start loading a scene additively
    fn load_scene_async(&self, name: &str) -> Option<Box<dyn AsyncOperation>>;

    /// Start unloading a scene
    fn unload_scene_async(&self, name: &str) -> Option<Box<dyn AsyncOperation>>;
}

/// Destination for request validation failures
pub trait ErrorSink: Send + Sync {
    fn error(&self, message: &str);
}

/// Default sink forwarding to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ErrorSink for LogSink {
    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}
