//! Animated sticker loading: fetch, gunzip, parse, play.

mod asset;
mod error;
mod loader;

#[cfg(test)]
pub(crate) use asset::fixtures;
#[cfg(test)]
pub(crate) use loader::testing;

pub use asset::{
    AnimationData, GZIP_MAGIC, MAX_DECOMPRESSED_BYTES, decode_sticker, decompress,
    parse_animation,
};
pub use error::StickerError;
pub use loader::{
    AnimationPlayer, AssetSource, CancelToken, LoadOutcome, LoadPhase, LoadTicket, LoopMode,
    Playback, PlayerBackend, StickerLoader, StickerMount, StickerRequest,
};
