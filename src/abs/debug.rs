//! OpenGL error polling.

use glow::HasContext;

/// Describes a `glGetError` code the way GLU's `gluErrorString` does.
pub fn error_string(code: u32) -> Option<&'static str> {
    match code {
        glow::NO_ERROR => Some("no error"),
        glow::INVALID_ENUM => Some("invalid enumerant"),
        glow::INVALID_VALUE => Some("invalid value"),
        glow::INVALID_OPERATION => Some("invalid operation"),
        glow::STACK_OVERFLOW => Some("stack overflow"),
        glow::STACK_UNDERFLOW => Some("stack underflow"),
        glow::OUT_OF_MEMORY => Some("out of memory"),
        glow::INVALID_FRAMEBUFFER_OPERATION => Some("invalid framebuffer operation"),
        _ => None,
    }
}

/// Formats the log line for an error raised during `prefix`.
fn error_message(prefix: &str, code: u32) -> String {
    match error_string(code) {
        Some(description) => format!("{prefix} error: {description}"),
        None => format!("{prefix}: unspecified error!"),
    }
}

/// Polls the GL error flag and logs it. The error is never acted upon.
pub fn check_error(gl: &glow::Context, prefix: &str) {
    let code = unsafe { gl.get_error() };
    if code != glow::NO_ERROR {
        log::warn!("{}", error_message(prefix, code));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(error_string(glow::INVALID_ENUM), Some("invalid enumerant"));
        assert_eq!(
            error_string(glow::INVALID_OPERATION),
            Some("invalid operation")
        );
        assert_eq!(error_string(glow::OUT_OF_MEMORY), Some("out of memory"));
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(error_string(0xdead), None);
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message("vertex data", glow::INVALID_VALUE),
            "vertex data error: invalid value"
        );
        assert_eq!(
            error_message("main loop", 0x1234),
            "main loop: unspecified error!"
        );
    }
}
