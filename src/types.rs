use serde_json::{Map, Value};

/// Free-form key/value data whose schema belongs to the backend.
///
/// Used for document metadata and session settings.
pub type Metadata = Map<String, Value>;
