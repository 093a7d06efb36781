//! Codec error types.

use derive_more::{Display, Error, From};

/// Why a save payload could not be turned back into a game
#[derive(Debug, Display, Error, From)]
pub enum CodecError {
    /// Not JSON, wrong version, missing `state`, or a field of the wrong shape
    #[display("malformed save payload: {_0}")]
    #[from]
    Json(serde_json::Error),
    /// The grid (or undo grid) is not `size × size`
    #[display("grid does not match declared size {size}")]
    GridShape { size: u32 },
}
