//! Decomposition of request paths into resource path, selectors and
//! extension, e.g. `/content/rush/start.coupon.json`.

use xerago_shared::path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    pub path: String,
    pub selectors: Vec<String>,
    pub extension: Option<String>,
}

impl ResourceRequest {
    /// Whether the request carries exactly `selector` and `extension`.
    pub fn is(&self, selector: &str, extension: &str) -> bool {
        self.selectors.len() == 1 && self.selectors[0] == selector && self.extension.as_deref() == Some(extension)
    }
}

/// Only the last segment is split on dots. Returns `None` for relative or
/// malformed paths.
pub fn parse(request_path: &str) -> Option<ResourceRequest> {
    let normalized = path::normalize(request_path)?;
    let Some(parent) = path::parent(&normalized) else {
        return Some(ResourceRequest { path: normalized, selectors: Vec::new(), extension: None });
    };

    let mut parts = path::name(&normalized).split('.');
    let name = parts.next().filter(|n| !n.is_empty())?;
    let mut suffix: Vec<String> = parts.map(str::to_string).collect();
    if suffix.iter().any(String::is_empty) {
        return None;
    }

    let extension = suffix.pop();
    Some(ResourceRequest {
        path: path::join(parent, name),
        selectors: suffix,
        extension,
    })
}
