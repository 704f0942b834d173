use std::path::{Path, PathBuf};

pub fn get_root_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("skimmer")
}

/// Get the directory holding stored captions, one subdirectory per video id
pub fn get_captions_dir(root: &Path) -> PathBuf {
    root.join("captions")
}

/// Get the directory holding stored captions for a single video
pub fn get_video_captions_dir(captions_dir: &Path, video_id: &str) -> PathBuf {
    captions_dir.join(video_id)
}

/// Get the path of a caption track for one language
pub fn get_caption_track_path(video_dir: &Path, lang: &str) -> PathBuf {
    video_dir.join(format!("{}.json", lang))
}

/// Get the path of the user config file, if the platform has a config dir
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("skimmer").join("config.json"))
}
