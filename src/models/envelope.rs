use serde::Deserialize;

/// Response wrapper used by every endpoint of the users service.
///
/// `data` carries the payload. `message` is informational on success and
/// holds the reason on failure; other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub message: Option<String>,
}

/// Error body returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
