//! Loading JSON documents from files or stdin.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::utils::errors::PayloadError;

/// Parses a JSON document; `origin` names the source in error messages.
pub fn parse_json<T: DeserializeOwned>(origin: &str, raw: &str) -> Result<T, PayloadError> {
    serde_json::from_str(raw).map_err(|source| PayloadError::Json {
        origin: origin.to_string(),
        source,
    })
}

/// Reads and parses a JSON document from `path`, or from stdin when `path` is `-`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, PayloadError> {
    let mut raw = String::new();
    if path.as_os_str() == "-" {
        std::io::stdin()
            .read_to_string(&mut raw)
            .map_err(|source| PayloadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        return parse_json("stdin", &raw);
    }

    raw = std::fs::read_to_string(path).map_err(|source| PayloadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(&path.display().to_string(), &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursekit_models::CoursePayload;

    #[test]
    fn test_parse_json_reports_origin() {
        let err = parse_json::<CoursePayload>("course.json", "{not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON in course.json"));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = load_json::<CoursePayload>(Path::new("/nonexistent/coursekit/course.json"))
            .unwrap_err();
        assert!(matches!(err, PayloadError::Read { .. }));
    }
}
