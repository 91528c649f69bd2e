/// Canvas size and fullscreen tracking
use crate::projection::aspect_ratio;

/// Width and height in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// What the host must do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenTransition {
    Enter,
    Exit,
}

/// Windowed baseline, current canvas size and the fullscreen flag.
///
/// The canvas only follows the window while fullscreen; in windowed mode a
/// resize always snaps back to the size recorded at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    windowed: Size,
    current: Size,
    fullscreen: bool,
}

impl ViewportState {
    pub fn new(initial: Size) -> Self {
        Self {
            windowed: initial,
            current: initial,
            fullscreen: false,
        }
    }

    pub fn current(&self) -> Size {
        self.current
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn aspect(&self) -> f32 {
        aspect_ratio(self.current.width, self.current.height)
    }

    /// Applies a window resize and returns the new canvas size.
    pub fn resize(&mut self, window_inner: Size) -> Size {
        self.current = if self.fullscreen {
            window_inner
        } else {
            self.windowed
        };
        log::debug!(
            "viewport resized to {}x{} (fullscreen: {})",
            self.current.width,
            self.current.height,
            self.fullscreen
        );
        self.current
    }

    /// Flips the fullscreen flag and reports which way the host should go.
    pub fn toggle_fullscreen(&mut self) -> FullscreenTransition {
        if self.fullscreen {
            self.fullscreen = false;
            FullscreenTransition::Exit
        } else {
            self.fullscreen = true;
            FullscreenTransition::Enter
        }
    }

    /// Adopts the browser's view, e.g. after Escape or a refused request.
    ///
    /// Leaving fullscreen snaps the canvas back to the windowed baseline,
    /// since the browser may already have sent its resize while the flag
    /// was still set. Returns the new size when it changed.
    pub fn sync_fullscreen(&mut self, active: bool) -> Option<Size> {
        let leaving = self.fullscreen && !active;
        self.fullscreen = active;
        if leaving && self.current != self.windowed {
            self.current = self.windowed;
            log::debug!(
                "left fullscreen, viewport restored to {}x{}",
                self.current.width,
                self.current.height
            );
            return Some(self.current);
        }
        None
    }

    /// Exit requested regardless of the current flag.
    pub fn force_exit(&mut self) -> FullscreenTransition {
        self.fullscreen = false;
        FullscreenTransition::Exit
    }
}
