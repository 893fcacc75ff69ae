#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FrameState {
    Idle,      // No recomputation scheduled
    Pending,   // A recomputation runs on the next frame
    Cancelled, // Torn down, new requests are refused
}
