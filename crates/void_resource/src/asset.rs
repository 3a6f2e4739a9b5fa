//! Loaded objects, type tags and caller context

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// A loaded asset as handed out by the platform asset database
pub type Asset = Arc<dyn Any + Send + Sync>;

/// Opaque caller context threaded through to every callback
pub type UserData = Arc<dyn Any + Send + Sync>;

/// Wrap a value so it can be passed as an [`Asset`] or [`UserData`]
pub fn shared<T: Any + Send + Sync>(value: T) -> Arc<dyn Any + Send + Sync> {
    Arc::new(value)
}

/// Type tag narrowing an asset lookup
#[derive(Clone, Copy)]
pub struct AssetType {
    id: TypeId,
    name: &'static str,
}

impl AssetType {
    /// Tag for the Rust type `T`
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Get the type ID
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Get the type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether a loaded asset is of this type
    pub fn matches(&self, asset: &Asset) -> bool {
        (**asset).type_id() == self.id
    }
}

impl PartialEq for AssetType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AssetType {}

impl std::hash::Hash for AssetType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AssetType").field(&self.name).finish()
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Texture;
    struct Mesh;

    #[test]
    fn test_asset_type_equality() {
        assert_eq!(AssetType::of::<Texture>(), AssetType::of::<Texture>());
        assert_ne!(AssetType::of::<Texture>(), AssetType::of::<Mesh>());
        assert!(AssetType::of::<Mesh>().name().ends_with("Mesh"));
    }

    #[test]
    fn test_asset_type_matches() {
        let asset = shared(Texture);
        assert!(AssetType::of::<Texture>().matches(&asset));
        assert!(!AssetType::of::<Mesh>().matches(&asset));
    }
}
