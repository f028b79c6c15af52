//! Argument rewriting for the mpv wrapper.
//!
//! Some launchers call the player as `mpv <x> <title> <msg-level> <rest...>`.
//! That call shape is turned into a window-title, audio-only invocation;
//! anything else is handed to the player as is.

use std::ffi::{OsStr, OsString};

/// Player binary used when `MPV_BIN` is not set.
pub const DEFAULT_MPV_BIN: &str = "/usr/local/bin/mpv";

/// Environment variable naming the player binary.
pub const MPV_BIN_ENV: &str = "MPV_BIN";

const MIN_REWRITE_ARGS: usize = 5;

/// Rewrite the arguments that follow argv\[0\].
///
/// Arguments are raw OS strings; file names that are not UTF-8 pass through
/// byte for byte.
pub fn rewrite_args(args: &[OsString]) -> Vec<OsString> {
    if args.len() < MIN_REWRITE_ARGS {
        return args.to_vec();
    }

    let mut title = OsString::from("--title=");
    title.push(&args[1]);

    let mut rewritten = Vec::with_capacity(args.len());
    rewritten.push(OsString::from("--vid=no"));
    rewritten.push(title);
    rewritten.push(colons_to_commas(&args[2]));
    rewritten.extend(args[3..].iter().cloned());
    rewritten
}

#[cfg(unix)]
fn colons_to_commas(arg: &OsStr) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes = arg
        .as_bytes()
        .iter()
        .map(|&b| if b == b':' { b',' } else { b })
        .collect();
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn colons_to_commas(arg: &OsStr) -> OsString {
    OsString::from(arg.to_string_lossy().replace(':', ","))
}

/// Player binary: `MPV_BIN` when set and non-empty, else [`DEFAULT_MPV_BIN`].
pub fn player_bin(env_override: Option<String>) -> String {
    env_override
        .filter(|bin| !bin.is_empty())
        .unwrap_or_else(|| DEFAULT_MPV_BIN.to_string())
}
