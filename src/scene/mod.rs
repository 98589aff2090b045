//! Scene state: the single displayed model and its load outcome.

pub mod model;

pub use model::{Material, Model, ModelKind};

/// Lifecycle of the asset load. Monotonic: `Pending` transitions to
/// exactly one of `Loaded` or `FallbackUsed`, which are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Load requested, not yet resolved.
    Pending,
    /// Real asset attached.
    Loaded,
    /// Fallback primitive attached after a load failure.
    FallbackUsed,
}

/// Holds the displayed model and the load outcome.
///
/// At most one model is ever attached; attach calls after resolution are
/// logged and ignored rather than replacing the model.
#[derive(Debug, Default)]
pub struct Scene {
    model: Option<Model>,
}

impl Scene {
    /// An empty scene awaiting the load resolution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current load outcome, derived from what is attached.
    #[must_use]
    pub fn outcome(&self) -> LoadOutcome {
        match &self.model {
            None => LoadOutcome::Pending,
            Some(m) if m.is_fallback() => LoadOutcome::FallbackUsed,
            Some(_) => LoadOutcome::Loaded,
        }
    }

    /// The attached model, if the load has resolved.
    #[must_use]
    pub fn model(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    /// Mutable access to the attached model.
    pub fn model_mut(&mut self) -> Option<&mut Model> {
        self.model.as_mut()
    }

    /// Whether the fallback path was taken.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.model.as_ref().is_some_and(Model::is_fallback)
    }

    /// Attach the loaded asset's model. Returns false (and logs) if a
    /// model is already attached.
    pub fn attach_loaded(&mut self, model: Model) -> bool {
        self.attach(model)
    }

    /// Attach the fallback cube. Returns false (and logs) if a model is
    /// already attached.
    pub fn attach_fallback(&mut self, color: [f32; 3]) -> bool {
        self.attach(Model::fallback_cube(color))
    }

    fn attach(&mut self, model: Model) -> bool {
        if let Some(existing) = &self.model {
            log::warn!(
                "refusing to attach {:?}: {:?} is already attached",
                model.name(),
                existing.name()
            );
            return false;
        }
        log::info!("attached model {:?}", model.name());
        self.model = Some(model);
        true
    }
}
