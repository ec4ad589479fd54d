//   ____             _____
//  |  _ \ __      __|  ___|  ___   _ __   __ _   ___
//  | |_) |\ \ /\ / /| |_    / _ \ | '__| / _` | / _ \
//  |  __/  \ V  V / |  _|  | (_) || |   | (_| ||  __/
//  |_|      \_/\_/  |_|     \___/ |_|    \__, | \___|
//                                        |___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Clipboard handler

use arboard::Clipboard;
use log::{debug, warn};
use std::{env, process, thread, time::Duration};

use crate::error::ClipboardError;

/// Set on the detached helper process; holds the delay in seconds.
pub const CLEAR_ENV: &str = "PWFORGE_CLIPBOARD_CLEAR";
const SECRET_ENV: &str = "PWFORGE_CLIPBOARD_SECRET";

fn spawn_clear_helper(secret: &str, seconds: u64) -> Result<(), ClipboardError> {
    let exe_path = env::current_exe()?;
    let mut cmd = process::Command::new(exe_path);
    cmd.env(CLEAR_ENV, seconds.to_string())
       .env(SECRET_ENV, secret)
       .stdout(process::Stdio::null())
       .stderr(process::Stdio::inherit());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        cmd.creation_flags(0x08000000); // CREATE_NO_WINDOW
    }

    cmd.spawn()?;
    debug!("Clipboard helper will clear in {}s", seconds);
    Ok(())
}

/// Delay requested for this process if it was started as the clear helper.
pub fn clear_request() -> Option<u64> {
    env::var(CLEAR_ENV).ok()?.trim().parse().ok()
}

/// Body of the helper process: wipe the clipboard after `seconds`,
/// but only if it still holds the password we put there.
pub fn run_clear_helper(seconds: u64) -> Result<(), ClipboardError> {
    let secret = env::var(SECRET_ENV).unwrap_or_default();
    thread::sleep(Duration::from_secs(seconds));

    let mut ctx = Clipboard::new()?;
    let current_content = ctx.get_text().unwrap_or_default();
    if !secret.is_empty() && current_content == secret {
        ctx.clear()?;
        debug!("Clipboard cleared");
    } else {
        debug!("Clipboard changed since copy, leaving it alone");
    }
    Ok(())
}

/// 复制到剪贴板，可选定时清空
pub fn copy_to_clipboard(secret: &str, clear_after: Option<u64>) -> Result<(), ClipboardError> {
    let mut ctx = Clipboard::new()?;
    ctx.set_text(secret)?;
    if let Some(seconds) = clear_after {
        if let Err(e) = spawn_clear_helper(secret, seconds) {
            warn!("Password copied but will not be cleared: {}", e);
        }
    }
    Ok(())
}
