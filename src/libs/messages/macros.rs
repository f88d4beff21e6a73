//! Messaging macros with debug-mode routing.
//!
//! Every user-facing line goes through one of these macros. In normal mode
//! they print to the console; when `POOLSIDE_DEBUG` or `RUST_LOG` is set they
//! emit `tracing` events instead, so output interleaves with the library's
//! own debug spans.
//!
//! ```text
//! msg_info!(Message::X) ──▶ debug mode? ──yes──▶ tracing::info!("ℹ️ ...")
//!                                      └─no───▶ println!("ℹ️ ...")
//! ```
//!
//! - **`msg_print!`**: plain message
//! - **`msg_success!`**: ✅ prefix
//! - **`msg_info!`**: ℹ️ prefix
//! - **`msg_warning!`**: ⚠️ prefix
//! - **`msg_error!`**: ❌ prefix, stderr in normal mode
//! - **`msg_debug!`**: 🔍 prefix, silent outside debug mode
//! - **`msg_error_anyhow!`** / **`msg_bail_anyhow!`**: build or return an
//!   `anyhow::Error` from a message

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether debug routing is on. Checked once per process.
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("POOLSIDE_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Routes a formatted line to `tracing` at `$level` in debug mode, or to
/// `$stream` (`println`/`eprintln`) otherwise. Shared by the public macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __msg_route {
    ($level:ident, $stream:ident, $prefix:expr, $msg:expr, $padded:expr) => {{
        let line = if $padded {
            format!("\n{}{}\n", $prefix, $msg)
        } else {
            format!("{}{}", $prefix, $msg)
        };
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("{}", line);
        } else {
            $stream!("{}", line);
        }
    }};
}

/// Prints a message as-is. Pass `true` as a second argument to surround it
/// with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_route!(info, println, "", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, println, "", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_route!(info, println, "✅ ", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, println, "✅ ", $msg, true)
    };
}

/// Goes to stderr in normal mode so piped tables stay clean.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_route!(error, eprintln, "❌ ", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(error, eprintln, "❌ ", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_route!(warn, println, "⚠️ ", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(warn, println, "⚠️ ", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_route!(info, println, "ℹ️ ", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, println, "ℹ️ ", $msg, true)
    };
}

/// Silent outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` carrying the message with a ❌ prefix.
///
/// ```rust,ignore
/// let swimmer = snapshot.swimmer(id).ok_or_else(|| msg_error_anyhow!(Message::SwimmerNotFound(id)))?;
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from the message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
