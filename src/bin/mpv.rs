use std::process;

use env_logger::Env;
use log::error;

#[cfg(unix)]
fn main() {
    use std::env;
    use std::ffi::OsString;
    use std::os::unix::process::CommandExt;
    use std::process::Command;

    use log::debug;
    use sillytools::mpv::{player_bin, rewrite_args, MPV_BIN_ENV};

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args: Vec<OsString> = env::args_os().skip(1).collect();
    let bin = player_bin(env::var(MPV_BIN_ENV).ok());
    let args = rewrite_args(&args);
    debug!("exec {} {:?}", bin, args);

    // exec only returns on failure
    let err = Command::new(&bin).args(&args).exec();
    error!("failed to exec {}: {}", bin, err);
    process::exit(1);
}

#[cfg(not(unix))]
fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    error!("the mpv wrapper needs exec(2) and only runs on unix");
    process::exit(1);
}
