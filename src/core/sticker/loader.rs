//! Sticker load lifecycle
//!
//! `Idle -> Loading -> {Playing | Failed}`, with `Playing -> Idle` on
//! teardown and any state `-> Idle` on cancellation.
//!
//! Each load attempt captures its own [`CancelToken`]. Starting a new
//! attempt or tearing down cancels the previous token and destroys any live
//! player before anything else happens, so two players never coexist for one
//! container. The token is checked once, after fetch and decode and before
//! the player is created; an in-flight fetch is never aborted, its result is
//! simply dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use derive_more::Display;
use serde::{Serialize, Serializer};

use super::asset::{AnimationData, decode_sticker};
use super::error::StickerError;

/// How many times the animation repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopMode {
    #[default]
    Forever,
    Never,
    Times(u32),
}

impl From<bool> for LoopMode {
    fn from(value: bool) -> Self {
        if value { Self::Forever } else { Self::Never }
    }
}

/// Serialized the way lottie-web expects its `loop` option: `true`, `false` or a count.
impl Serialize for LoopMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Forever => serializer.serialize_bool(true),
            Self::Never => serializer.serialize_bool(false),
            Self::Times(count) => serializer.serialize_u32(*count),
        }
    }
}

/// Playback options handed to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Playback {
    #[serde(rename = "loop")]
    pub loop_mode: LoopMode,
    pub autoplay: bool,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            loop_mode: LoopMode::Forever,
            autoplay: true,
        }
    }
}

/// One sticker to load: where it lives and how to play it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickerRequest {
    pub path: String,
    pub playback: Playback,
}

impl StickerRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            playback: Playback::default(),
        }
    }

    pub fn with_playback(mut self, playback: Playback) -> Self {
        self.playback = playback;
        self
    }
}

/// Cooperative, single-threaded cancellation flag. Once cancelled it stays cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Where the raw `.tgs` bytes come from.
#[allow(async_fn_in_trait)]
pub trait AssetSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, StickerError>;
}

/// A running animation bound to a container.
pub trait AnimationPlayer {
    /// Release the player's rendering resources. Consumes the player.
    fn destroy(self);
}

/// Creates players inside the container this backend is bound to.
pub trait PlayerBackend {
    type Player: AnimationPlayer;

    fn instantiate(
        &self,
        animation: AnimationData,
        playback: Playback,
    ) -> Result<Self::Player, StickerError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum LoadPhase {
    #[default]
    #[display("idle")]
    Idle,
    #[display("loading")]
    Loading,
    #[display("playing")]
    Playing,
    #[display("failed")]
    Failed,
}

/// How a single load attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Playing,
    Failed(StickerError),
    /// A teardown or a newer attempt superseded this one.
    Cancelled,
}

/// Handle for one load attempt, returned by [`StickerLoader::begin`].
#[derive(Debug)]
pub struct LoadTicket {
    token: CancelToken,
    request: StickerRequest,
}

impl LoadTicket {
    pub fn request(&self) -> &StickerRequest {
        &self.request
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

struct LoaderState<B: PlayerBackend> {
    backend: B,
    phase: LoadPhase,
    player: Option<B::Player>,
    token: CancelToken,
}

impl<B: PlayerBackend> LoaderState<B> {
    fn release(&mut self) {
        self.token.cancel();
        if let Some(player) = self.player.take() {
            player.destroy();
        }
        self.phase = LoadPhase::Idle;
    }
}

impl<B: PlayerBackend> Drop for LoaderState<B> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Owns at most one player for one container. Clones share the same state.
pub struct StickerLoader<B: PlayerBackend> {
    state: Rc<RefCell<LoaderState<B>>>,
}

impl<B: PlayerBackend> Clone for StickerLoader<B> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<B: PlayerBackend> StickerLoader<B> {
    pub fn new(backend: B) -> Self {
        Self {
            state: Rc::new(RefCell::new(LoaderState {
                backend,
                phase: LoadPhase::Idle,
                player: None,
                token: CancelToken::new(),
            })),
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.state.borrow().phase
    }

    pub fn has_player(&self) -> bool {
        self.state.borrow().player.is_some()
    }

    /// Start a new attempt. Cancels the previous one and destroys its player first.
    pub fn begin(&self, request: StickerRequest) -> LoadTicket {
        let mut state = self.state.borrow_mut();
        state.release();

        let token = CancelToken::new();
        state.token = token.clone();
        state.phase = LoadPhase::Loading;

        LoadTicket { token, request }
    }

    /// Fetch, decode and, unless the ticket was cancelled meanwhile, start the player.
    pub async fn run<S: AssetSource>(&self, ticket: LoadTicket, source: &S) -> LoadOutcome {
        let decoded = fetch_and_decode(source, &ticket.request.path).await;
        self.finish(ticket, decoded)
    }

    /// `begin` followed by `run`.
    pub async fn load<S: AssetSource>(&self, source: &S, request: StickerRequest) -> LoadOutcome {
        let ticket = self.begin(request);
        self.run(ticket, source).await
    }

    /// Cancel any in-flight attempt and destroy the player, if one exists.
    pub fn teardown(&self) {
        self.state.borrow_mut().release();
    }

    fn finish(
        &self,
        ticket: LoadTicket,
        decoded: Result<AnimationData, StickerError>,
    ) -> LoadOutcome {
        let LoadTicket { token, request } = ticket;

        // Superseded attempts drop their result, errors included, at debug level
        if token.is_cancelled() {
            tracing::debug!(path = %request.path, "Discarding superseded sticker load");
            return LoadOutcome::Cancelled;
        }

        let mut state = self.state.borrow_mut();
        let started = decoded.and_then(|animation| {
            state.backend.instantiate(animation, request.playback)
        });

        match started {
            Ok(player) => {
                state.player = Some(player);
                state.phase = LoadPhase::Playing;
                LoadOutcome::Playing
            }
            Err(err) => {
                tracing::error!(
                    path = %request.path,
                    stage = err.kind(),
                    "Could not load .tgs sticker: {}",
                    err
                );
                state.phase = LoadPhase::Failed;
                LoadOutcome::Failed(err)
            }
        }
    }
}

/// The loader slot of one mounted player component.
///
/// The backend is bound lazily, on the first restart after the container
/// exists, and reused for every later input change.
pub struct StickerMount<B: PlayerBackend> {
    loader: Option<StickerLoader<B>>,
}

impl<B: PlayerBackend> Default for StickerMount<B> {
    fn default() -> Self {
        Self { loader: None }
    }
}

impl<B: PlayerBackend> StickerMount<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_bound(&self) -> bool {
        self.loader.is_some()
    }

    /// Begin loading `request`, binding a backend with `bind` on first use.
    ///
    /// Returns the loader handle and ticket to hand to [`StickerLoader::run`].
    pub fn restart(
        &mut self,
        bind: impl FnOnce() -> B,
        request: StickerRequest,
    ) -> (StickerLoader<B>, LoadTicket) {
        let loader = self
            .loader
            .get_or_insert_with(|| StickerLoader::new(bind()))
            .clone();
        let ticket = loader.begin(request);
        (loader, ticket)
    }

    /// Cancel the in-flight attempt, destroy the player and unbind.
    pub fn unmount(&mut self) {
        if let Some(loader) = self.loader.take() {
            loader.teardown();
        }
    }
}

async fn fetch_and_decode<S: AssetSource>(
    source: &S,
    path: &str,
) -> Result<AnimationData, StickerError> {
    if path.trim().is_empty() {
        return Err(StickerError::Fetch("empty asset path".to_string()));
    }
    let bytes = source.fetch(path).await?;
    decode_sticker(&bytes)
}
