//! Asset-load contract.
//!
//! Model decoding is an external collaborator: implementations of
//! [`AssetLoader`] perform the actual fetch/decode (on a background
//! thread, over the network, from a cache — the engine does not care) and
//! deliver exactly one resolution through the non-blocking [`poll`]
//! interface. The engine polls every tick while the outcome is pending,
//! so hosts never call into the engine from another thread.
//!
//! [`poll`]: AssetLoader::poll

use std::fmt;
use std::sync::mpsc;

use crate::animation::AnimationClip;
use crate::scene::Model;

/// A successfully decoded asset: the display model plus any embedded
/// animation clips.
#[derive(Debug, Clone)]
pub struct LoadedAsset {
    /// The decoded display model.
    pub model: Model,
    /// Embedded animation clips; may be empty.
    pub clips: Vec<AnimationClip>,
}

/// The single recoverable failure kind — covers network errors, decode
/// errors, and timeouts indiscriminately. Never surfaced to the end user;
/// always absorbed into the fallback path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLoadError(pub String);

impl fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asset load failed: {}", self.0)
    }
}

impl std::error::Error for AssetLoadError {}

/// Outcome of one load request.
pub type LoadResult = Result<LoadedAsset, AssetLoadError>;

/// Non-blocking asset loader contract.
///
/// The engine calls [`request`](Self::request) exactly once at startup
/// and then [`poll`](Self::poll) every tick until a result arrives.
/// Implementations must return `Some` at most once.
pub trait AssetLoader {
    /// Begin loading the asset at `path`. Must not block.
    fn request(&mut self, path: &str);

    /// The resolution, once available. At most one `Some` ever.
    fn poll(&mut self) -> Option<LoadResult>;

    /// Optional progress as `(loaded_bytes, total_bytes)`.
    fn progress(&self) -> Option<(u64, u64)> {
        None
    }
}

/// Progress update sent alongside the result channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadProgress {
    /// Bytes fetched so far.
    pub loaded: u64,
    /// Total bytes, if known.
    pub total: u64,
}

/// Messages a background decode task sends to [`ChannelLoader`].
#[derive(Debug)]
pub enum LoadMessage {
    /// Intermediate progress update.
    Progress(LoadProgress),
    /// Terminal resolution.
    Resolved(LoadResult),
}

/// Loader backed by an mpsc channel, for hosts that decode on a
/// background thread. The engine side stays single-threaded: results are
/// observed only through `poll` on the tick thread.
pub struct ChannelLoader {
    rx: mpsc::Receiver<LoadMessage>,
    progress: Option<LoadProgress>,
    resolved: bool,
}

impl ChannelLoader {
    /// Create a loader and the sender half handed to the decode task.
    #[must_use]
    pub fn new() -> (Self, mpsc::Sender<LoadMessage>) {
        let (tx, rx) = mpsc::channel();
        (
            Self {
                rx,
                progress: None,
                resolved: false,
            },
            tx,
        )
    }
}

impl AssetLoader for ChannelLoader {
    fn request(&mut self, path: &str) {
        log::info!("requesting asset {path:?}");
    }

    fn poll(&mut self) -> Option<LoadResult> {
        if self.resolved {
            return None;
        }
        while let Ok(message) = self.rx.try_recv() {
            match message {
                LoadMessage::Progress(p) => self.progress = Some(p),
                LoadMessage::Resolved(result) => {
                    self.resolved = true;
                    return Some(result);
                }
            }
        }
        None
    }

    fn progress(&self) -> Option<(u64, u64)> {
        self.progress.map(|p| (p.loaded, p.total))
    }
}

/// Loader that resolves with a preconfigured result on the first poll
/// after a request. Used by demos and tests.
pub struct StaticLoader {
    result: Option<LoadResult>,
    requested: bool,
}

impl StaticLoader {
    /// A loader that will deliver `result` once.
    #[must_use]
    pub fn new(result: LoadResult) -> Self {
        Self {
            result: Some(result),
            requested: false,
        }
    }
}

impl AssetLoader for StaticLoader {
    fn request(&mut self, path: &str) {
        log::info!("requesting asset {path:?}");
        self.requested = true;
    }

    fn poll(&mut self) -> Option<LoadResult> {
        if self.requested {
            self.result.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_loader_resolves_once_after_request() {
        let asset = LoadedAsset {
            model: Model::new("tensor", Vec::new()),
            clips: Vec::new(),
        };
        let mut loader = StaticLoader::new(Ok(asset));
        assert!(loader.poll().is_none(), "must not resolve before request");
        loader.request("assets/tensor.glb");
        assert!(loader.poll().is_some());
        assert!(loader.poll().is_none(), "must resolve at most once");
    }

    #[test]
    fn channel_loader_delivers_progress_then_result() {
        let (mut loader, tx) = ChannelLoader::new();
        loader.request("assets/tensor.glb");
        assert!(loader.poll().is_none());
        assert!(loader.progress().is_none());

        tx.send(LoadMessage::Progress(LoadProgress {
            loaded: 512,
            total: 2048,
        }))
        .unwrap();
        assert!(loader.poll().is_none());
        assert_eq!(loader.progress(), Some((512, 2048)));

        tx.send(LoadMessage::Resolved(Err(AssetLoadError(
            "timeout".into(),
        ))))
        .unwrap();
        let result = loader.poll().unwrap();
        assert!(result.is_err());
        assert!(loader.poll().is_none());
    }
}
