//! Player and dealer hands.
//!
//! ## Key Types
//!
//! - `Hand`: cards received so far, running score, ace and bust tracking
//! - `HandKind`: regular, split or dealer (data only)
//! - `HandState`: `Empty -> Active -> Busted`

pub mod hand;

pub use hand::{Hand, HandKind, HandState};
