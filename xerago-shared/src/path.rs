//! Repository path helpers. Paths are absolute, `/`-separated, with no
//! trailing slash except for the root itself.

pub const ROOT: &str = "/";

/// Normalize an absolute path: collapse repeated slashes and drop a trailing
/// slash. Returns `None` for relative paths and `.`/`..` segments.
pub fn normalize(path: &str) -> Option<String> {
    let path = path.trim();
    if !path.starts_with('/') {
        return None;
    }

    let mut out = String::with_capacity(path.len());
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if segment == "." || segment == ".." {
            return None;
        }
        out.push('/');
        out.push_str(segment);
    }

    if out.is_empty() {
        out.push('/');
    }
    Some(out)
}

/// Parent of a normalized path; the root has none.
pub fn parent(path: &str) -> Option<&str> {
    if path == ROOT {
        return None;
    }
    match path.rfind('/') {
        Some(0) => Some(ROOT),
        Some(idx) => Some(&path[..idx]),
        None => None,
    }
}

/// Last segment of a normalized path (empty for the root).
pub fn name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

pub fn join(parent: &str, name: &str) -> String {
    if parent == ROOT {
        format!("/{}", name)
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Non-root segments of a normalized path, outermost first.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// A node name must be a single, non-empty segment.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('/')
}

/// Prefix shared by every descendant of `path`.
pub fn descendant_prefix(path: &str) -> String {
    if path == ROOT {
        ROOT.to_string()
    } else {
        format!("{}/", path)
    }
}
