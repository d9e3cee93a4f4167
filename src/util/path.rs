use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Extension assumed for bare layout names.
pub const LAYOUT_EXTENSION: &str = "toml";

/// Map a layout argument to a file under `layout_dir`.
///
/// Bare names (`welcome`) get the `.toml` extension; anything with an
/// extension is joined as given.
pub fn resolve_layout_path(layout_dir: &Path, layout: &Path) -> PathBuf {
    if layout.extension().is_some() {
        layout_dir.join(layout)
    } else {
        layout_dir.join(layout).with_extension(LAYOUT_EXTENSION)
    }
}

pub fn is_json_layout(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_bare_name_when_resolving_then_adds_toml_extension() {
        let resolved = resolve_layout_path(Path::new("/layouts"), Path::new("welcome"));
        assert_eq!(resolved, Path::new("/layouts").join("welcome.toml"));
    }

    #[test]
    fn given_name_with_extension_when_resolving_then_keeps_it() {
        let resolved = resolve_layout_path(Path::new("/layouts"), Path::new("poll.json"));
        assert!(is_json_layout(&resolved));
    }
}
