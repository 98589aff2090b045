//! The displayed model: placement transform and named materials.

use glam::Vec3;

/// Whether the model is the real asset or the fallback primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// The loaded asset's scene.
    Asset,
    /// The placeholder cube substituted on load failure.
    FallbackCube,
}

/// A named sub-material of the model. Color customization looks
/// materials up by name and sets the base color.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material name as authored in the asset.
    pub name: String,
    /// Linear RGB base color.
    pub base_color: [f32; 3],
}

/// The single displayed object: either the loaded asset or the fallback
/// cube. At most one model exists per session.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    name: String,
    kind: ModelKind,
    /// World-space position.
    pub position: Vec3,
    /// Euler rotation in radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
    materials: Vec<Material>,
}

impl Model {
    /// A model for a loaded asset with identity placement.
    #[must_use]
    pub fn new(name: impl Into<String>, materials: Vec<Material>) -> Self {
        Self {
            name: name.into(),
            kind: ModelKind::Asset,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            materials,
        }
    }

    /// The unit-cube placeholder substituted when the asset fails to load.
    #[must_use]
    pub fn fallback_cube(color: [f32; 3]) -> Self {
        Self {
            name: "fallback-cube".into(),
            kind: ModelKind::FallbackCube,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            materials: vec![Material {
                name: "Fallback".into(),
                base_color: color,
            }],
        }
    }

    /// Set the placement transform in one call.
    #[must_use]
    pub fn with_placement(
        mut self,
        position: Vec3,
        rotation: Vec3,
        scale: Vec3,
    ) -> Self {
        self.position = position;
        self.rotation = rotation;
        self.scale = scale;
        self
    }

    /// Model name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is the fallback primitive.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.kind == ModelKind::FallbackCube
    }

    /// The model's materials.
    #[must_use]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Set the base color of every material with the given name.
    /// Returns how many materials matched (0 for unknown names — a
    /// graceful no-op, not an error).
    pub fn set_material_color(&mut self, name: &str, color: [f32; 3]) -> usize {
        let mut matched = 0;
        for material in &mut self.materials {
            if material.name == name {
                material.base_color = color;
                matched += 1;
            }
        }
        matched
    }
}
