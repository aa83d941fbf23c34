//! Command-line and environment configuration

use clap::Parser;
use std::path::PathBuf;

/// Badminton match video catalogue and rally/shot tagging service
#[derive(Debug, Parser)]
#[command(name = "courtlog", version)]
pub struct Args {
    /// SQLite database path (created on first run)
    #[arg(long, env = "COURTLOG_DB", default_value = "courtlog.db")]
    pub database: PathBuf,

    /// Port to listen on
    #[arg(long, env = "COURTLOG_PORT", default_value_t = 5780)]
    pub port: u16,

    /// Directory containing match videos; unset or blank disables
    /// video serving (not a startup error)
    #[arg(long, env = "VIDEO_ROOT")]
    pub video_root: Option<String>,
}

/// Normalize the raw video-root value: unset or blank means disabled
pub fn video_root_from(raw: Option<String>) -> Option<PathBuf> {
    raw.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_video_root_is_disabled() {
        assert_eq!(video_root_from(None), None);
        assert_eq!(video_root_from(Some(String::new())), None);
        assert_eq!(video_root_from(Some("   ".to_string())), None);
        assert_eq!(
            video_root_from(Some("/videos".to_string())),
            Some(PathBuf::from("/videos"))
        );
    }
}
