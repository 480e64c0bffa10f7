/// Delimiter between tags in the stored `channels` column.
pub const CHANNEL_DELIMITER: &str = ", ";

/// Fallback tag when the uploader supplies none.
pub const DEFAULT_CHANNEL: &str = "default";

/// New feed row, inserted only after the file write succeeded.
#[derive(Debug, Clone)]
pub struct NewUpload {
    pub filepath: String,
    pub channels: String,
}

/// Upload handling configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub max_file_size: usize,
    pub upload_dir: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024, // 10MB
            upload_dir: "uploads".to_string(),
        }
    }
}

/// Decode a stored channel string into its tag list.
pub fn decode_channels(stored: &str) -> Vec<String> {
    stored.split(CHANNEL_DELIMITER).map(str::to_string).collect()
}

/// Normalize raw form input into the canonical stored encoding: tags are
/// split on commas, trimmed, empties dropped and re-joined with the
/// delimiter, so `decode_channels` is exactly inverse to this. Blank input
/// collapses to the default channel.
pub fn encode_channels(raw: &str) -> String {
    let tags: Vec<&str> = raw.split(',').map(str::trim).filter(|tag| !tag.is_empty()).collect();

    if tags.is_empty() {
        DEFAULT_CHANNEL.to_string()
    } else {
        tags.join(CHANNEL_DELIMITER)
    }
}

/// Destination name for an uploaded file. The upload instant keeps two
/// uploads of the same original name apart without renaming the file
/// beyond recognition.
pub fn timestamped_filename(unix_seconds: i64, original: &str) -> String {
    format!("{}-{}", unix_seconds, original)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_splits_on_the_delimiter() {
        assert_eq!(decode_channels("a, b"), vec!["a", "b"]);
        assert_eq!(decode_channels("default"), vec!["default"]);
    }

    #[test]
    fn encode_falls_back_to_default() {
        assert_eq!(encode_channels(""), "default");
        assert_eq!(encode_channels("   "), "default");
        assert_eq!(encode_channels(", ,"), "default");
    }

    #[test]
    fn encode_normalizes_whitespace() {
        assert_eq!(encode_channels(" a ,b "), "a, b");
        assert_eq!(encode_channels("a,,b"), "a, b");
    }

    #[test]
    fn round_trip_is_lossless() {
        for raw in ["default", "a, b", "cats, pics, misc"] {
            let stored = encode_channels(raw);
            assert_eq!(stored, raw);
            assert_eq!(decode_channels(&stored).join(CHANNEL_DELIMITER), stored);
        }
    }

    #[test]
    fn filenames_embed_the_upload_instant() {
        assert_eq!(timestamped_filename(1_700_000_000, "cat.png"), "1700000000-cat.png");
        assert_ne!(
            timestamped_filename(1_700_000_000, "cat.png"),
            timestamped_filename(1_700_000_001, "cat.png")
        );
    }
}
