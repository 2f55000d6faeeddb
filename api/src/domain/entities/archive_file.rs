//! Archive file domain entity
//!
//! One member of a skin's zip archive (bitmaps, config files, readme).

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::SkinHash;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchiveFile {
    pub skin_hash: SkinHash,
    pub file_name: String,
    /// Content hash of the member itself
    pub file_md5: String,
    /// Modification time recorded in the archive, when present
    pub file_date: Option<DateTime<Utc>>,
    pub uncompressed_size: Option<i64>,
}

impl ArchiveFile {
    /// Directory entries are stored with a trailing slash
    pub fn is_directory(&self) -> bool {
        self.file_name.ends_with('/')
    }
}
