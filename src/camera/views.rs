//! Named camera viewpoints and their lookup registry.

use glam::Vec3;
use rustc_hash::FxHashMap;

use super::core::CameraPose;
use crate::options::ViewPreset;

/// A named camera viewpoint. Immutable once defined; created at startup
/// from [`crate::options::Options::views`].
#[derive(Debug, Clone, PartialEq)]
pub struct CameraView {
    /// Unique key, e.g. `"view-1"`.
    pub name: String,
    /// Eye position for this view.
    pub position: Vec3,
    /// Look-at point for this view.
    pub target: Vec3,
}

impl CameraView {
    /// The pose this view places the camera in.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.position, self.target)
    }
}

/// Lookup table for configured views, preserving configuration order.
///
/// The first configured view is the startup pose; lookups by name drive
/// [`crate::engine::ShowcaseEngine::request_view`].
#[derive(Debug, Default)]
pub struct ViewRegistry {
    order: Vec<String>,
    views: FxHashMap<String, CameraView>,
}

impl ViewRegistry {
    /// Build a registry from configured presets. Later presets with a
    /// duplicate name replace earlier ones.
    #[must_use]
    pub fn from_presets(presets: &[ViewPreset]) -> Self {
        let mut registry = Self::default();
        for preset in presets {
            let view = CameraView {
                name: preset.name.clone(),
                position: Vec3::from_array(preset.position),
                target: Vec3::from_array(preset.target),
            };
            if registry
                .views
                .insert(preset.name.clone(), view)
                .is_none()
            {
                registry.order.push(preset.name.clone());
            }
        }
        registry
    }

    /// Look up a view by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CameraView> {
        self.views.get(name)
    }

    /// The first configured view, if any.
    #[must_use]
    pub fn first(&self) -> Option<&CameraView> {
        self.order.first().and_then(|name| self.views.get(name))
    }

    /// View names in configuration order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Number of configured views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no views are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presets() -> Vec<ViewPreset> {
        vec![
            ViewPreset {
                name: "view-1".into(),
                position: [7.0, 9.0, 4.0],
                target: [0.0, 3.0, 1.0],
            },
            ViewPreset {
                name: "view-2".into(),
                position: [0.0, 2.0, 8.0],
                target: [0.0, 0.0, 0.0],
            },
        ]
    }

    #[test]
    fn registry_preserves_order_and_lookup() {
        let registry = ViewRegistry::from_presets(&presets());
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), ["view-1", "view-2"]);
        assert_eq!(
            registry.first().map(|v| v.name.as_str()),
            Some("view-1")
        );
        let v2 = registry.get("view-2").unwrap();
        assert_eq!(v2.position, Vec3::new(0.0, 2.0, 8.0));
        assert!(registry.get("view-9").is_none());
    }

    #[test]
    fn duplicate_names_replace_earlier_presets() {
        let mut list = presets();
        list.push(ViewPreset {
            name: "view-1".into(),
            position: [1.0, 1.0, 1.0],
            target: [0.0, 0.0, 0.0],
        });
        let registry = ViewRegistry::from_presets(&list);
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("view-1").unwrap().position,
            Vec3::splat(1.0)
        );
    }

    #[test]
    fn empty_registry() {
        let registry = ViewRegistry::from_presets(&[]);
        assert!(registry.is_empty());
        assert!(registry.first().is_none());
    }
}
