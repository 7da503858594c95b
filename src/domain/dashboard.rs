// Dashboard domain model
use serde::Deserialize;
use serde_json::Value;

/// A single hit from the search endpoint. Only `uri` is used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardRef {
    pub uri: String,
}

impl DashboardRef {
    #[cfg(test)]
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// Last path segment of the reference, e.g. `db/my-dash` -> `my-dash`.
    pub fn base_name(&self) -> Option<&str> {
        let trimmed = self.uri.trim_end_matches('/');
        let base = trimmed.rsplit('/').next().unwrap_or(trimmed);
        match base {
            "" | "." | ".." => None,
            name => Some(name),
        }
    }

    pub fn file_name(&self) -> Option<String> {
        self.base_name().map(|name| format!("{}.json", name))
    }
}

/// Dashboard body as returned by the API. Never inspected, only re-indented.
///
/// Numbers keep their original text (`arbitrary_precision`), so re-indenting
/// does not round large integers or rewrite exponents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct DashboardDocument(Value);

impl DashboardDocument {
    #[cfg(test)]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    #[cfg(test)]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Two-space indented JSON with a trailing newline.
    pub fn to_pretty_json(&self) -> serde_json::Result<Vec<u8>> {
        let mut out = serde_json::to_vec_pretty(&self.0)?;
        out.push(b'\n');
        Ok(out)
    }
}
