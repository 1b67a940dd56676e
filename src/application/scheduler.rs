/// "Run the next tick before the next repaint."
///
/// A tick that wants to keep the animation going asks for another frame
/// through this; one that doesn't ask simply ends the chain.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// One-shot frame request polled by the host loop.
///
/// Requests coalesce: asking twice before the host gets around to
/// [`take`](FrameRequest::take) still produces a single tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameRequest {
    pending: bool,
}

impl FrameRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the pending request, if any.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for FrameRequest {
    fn request_frame(&mut self) {
        self.pending = true;
    }
}
