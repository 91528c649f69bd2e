/// Error types for context, pipeline and fullscreen failures
use std::fmt;

use thiserror::Error;

/// Which programmable stage a shader belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Fatal failures while bringing up the renderer.
///
/// None of these are retried; the page has to be reloaded.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to load canvas `{0}`")]
    SurfaceNotFound(String),

    #[error("WebGL context not found")]
    ContextUnavailable,

    #[error("An error occurred compiling the {stage} shader: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("Unable to link the shader program: {log}")]
    ShaderLink { log: String },

    #[error("failed to create {0}")]
    ResourceCreation(&'static str),

    #[error("browser call failed: {0}")]
    Host(String),
}

/// Failure of an asynchronous fullscreen request. Never fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FullscreenError {
    #[error("fullscreen is not supported by this browser")]
    Unsupported,

    #[error("Error attempting to enable full-screen mode: {message} ({name})")]
    Rejected { name: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_error_carries_diagnostic() {
        let err = InitError::ShaderCompile {
            stage: ShaderStage::Fragment,
            log: "ERROR: 0:3: 'vColor' : syntax error".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("fragment"));
        assert!(text.contains("syntax error"));
    }

    #[test]
    fn test_fullscreen_rejection_message() {
        let err = FullscreenError::Rejected {
            name: "TypeError".to_string(),
            message: "Permissions check failed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error attempting to enable full-screen mode: Permissions check failed (TypeError)"
        );
    }
}
