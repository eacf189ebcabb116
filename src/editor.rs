use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Editors tried when neither EDITOR nor VISUAL is set
const FALLBACK_EDITORS: [&str; 2] = ["/usr/bin/editor", "/usr/bin/vim"];

/// Pick the editor: `EDITOR`, then `VISUAL`, then the first fallback that exists
pub fn resolve<F, E>(lookup: F, exists: E) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<String>,
    E: Fn(&Path) -> bool,
{
    for var in ["EDITOR", "VISUAL"] {
        if let Some(editor) = lookup(var).filter(|value| !value.trim().is_empty()) {
            tracing::debug!("using editor from {}: {}", var, editor);
            return Ok(PathBuf::from(editor));
        }
    }

    FALLBACK_EDITORS
        .iter()
        .map(Path::new)
        .find(|path| exists(*path))
        .map(Path::to_path_buf)
        .ok_or(Error::MissingEditor)
}

/// Resolve the editor from the process environment
pub fn from_env() -> Result<PathBuf> {
    resolve(|name| std::env::var(name).ok(), Path::exists)
}

/// Open `file` in `editor` and wait for it to exit
pub fn open(editor: &Path, file: &Path) -> Result<()> {
    tracing::info!("opening {} in {}", file.display(), editor.display());

    let status = Command::new(editor).arg(file).status()?;

    if !status.success() {
        return Err(Error::Io(std::io::Error::other(format!(
            "editor {} exited with {}",
            editor.display(),
            status
        ))));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_editor_wins_over_visual() {
        let editor = resolve(vars(&[("EDITOR", "nano"), ("VISUAL", "code")]), |_| true).unwrap();
        assert_eq!(editor, PathBuf::from("nano"));
    }

    #[test]
    fn test_visual_used_without_editor() {
        let editor = resolve(vars(&[("VISUAL", "code")]), |_| true).unwrap();
        assert_eq!(editor, PathBuf::from("code"));
    }

    #[test]
    fn test_empty_editor_is_ignored() {
        let editor = resolve(vars(&[("EDITOR", ""), ("VISUAL", "code")]), |_| false).unwrap();
        assert_eq!(editor, PathBuf::from("code"));
    }

    #[test]
    fn test_fallback_order() {
        let editor = resolve(vars(&[]), |_| true).unwrap();
        assert_eq!(editor, PathBuf::from("/usr/bin/editor"));

        let editor = resolve(vars(&[]), |p| p == Path::new("/usr/bin/vim")).unwrap();
        assert_eq!(editor, PathBuf::from("/usr/bin/vim"));
    }

    #[test]
    fn test_missing_editor() {
        assert!(matches!(
            resolve(vars(&[]), |_| false),
            Err(Error::MissingEditor)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_open_reports_failing_editor() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(open(Path::new("true"), file.path()).is_ok());
        assert!(matches!(
            open(Path::new("false"), file.path()),
            Err(Error::Io(_))
        ));
    }
}
