use glam::DVec2;

/// Primary-pointer view for one frame.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    /// Cursor position in pixels, origin top-left.
    pub position: DVec2,
    /// Cursor motion since the previous frame.
    pub delta: DVec2,
    /// Button went down during this frame.
    pub pressed: bool,
    /// Button is down at the end of this frame.
    pub held: bool,
    /// Button went up during this frame.
    pub released: bool,
}

/// Everything the core consumes for one tick.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub elapsed_seconds: f64,
    pub pointer: PointerState,
}

/// Folds window events into per-frame edges and deltas.
#[derive(Default, Clone, Debug)]
pub struct PointerTracker {
    position: DVec2,
    frame_origin: DVec2,
    seen_cursor: bool,
    down: bool,
    pressed: bool,
    released: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor_moved(&mut self, position: DVec2) {
        if !self.seen_cursor {
            // first sample must not produce a jump from the origin
            self.frame_origin = position;
            self.seen_cursor = true;
        }
        self.position = position;
    }

    pub fn press(&mut self) {
        if !self.down {
            self.down = true;
            self.pressed = true;
        }
    }

    pub fn release(&mut self) {
        if self.down {
            self.down = false;
            self.released = true;
        }
    }

    #[inline]
    pub fn is_down(&self) -> bool {
        self.down
    }

    /// Snapshot for the frame that just ended; clears edges and delta.
    pub fn frame(&mut self) -> PointerState {
        let state = PointerState {
            position: self.position,
            delta: self.position - self.frame_origin,
            pressed: self.pressed,
            held: self.down,
            released: self.released,
        };
        self.frame_origin = self.position;
        self.pressed = false;
        self.released = false;
        state
    }
}
