/// Everything the host can tell the application.
///
/// The host delivers these one at a time on a single thread, so handlers
/// never overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// Frame callback with the host's absolute timestamp in milliseconds
    Frame { timestamp_ms: f64 },
    /// Window inner size changed
    Resize { inner_width: u32, inner_height: u32 },
    KeyDown { key_code: u32 },
    /// The browser entered or left fullscreen, or a request was refused
    FullscreenChanged { active: bool },
    /// Pointer click; reserved, currently ignored
    Click,
}

/// Side effects only the host can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    None,
    /// Start an asynchronous fullscreen request on the canvas
    RequestFullscreen,
    ExitFullscreen,
}
