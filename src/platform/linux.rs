// Scout platform paths for Linux
// Data: ~/.local/share/scout

use std::env;
use std::path::PathBuf;

/// Returns the data directory for Scout on Linux.
/// Uses `$XDG_DATA_HOME/scout` if set, otherwise `~/.local/share/scout`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("scout")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".local").join("share").join("scout")
    }
}
