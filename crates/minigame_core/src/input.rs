//! Per-tick input signals
//!
//! The coordinator never polls an input device. The game loop samples its
//! input backend once per frame and hands the result in as plain data, so
//! the same tick can be driven by a keyboard, a replay, or a test.

/// Input signals sampled for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// The player asked to deploy the bomb this frame
    pub deploy_bomb: bool,
}

impl TickInput {
    /// No signals active
    pub fn none() -> Self {
        Self::default()
    }

    /// Request a bomb deploy this frame
    pub fn deploy() -> Self {
        Self { deploy_bomb: true }
    }
}
