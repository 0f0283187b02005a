//! Output path resolution and writing.

use std::fs;
use std::path::{Path, PathBuf};

use garb_formats::Format;

use crate::{Converted, Result};

/// Pick a collision-free output path for a converted file.
///
/// The first candidate is `{stem}_converted.{ext}`; on collision a numeric
/// suffix is appended and incremented until `exists` reports a free path.
/// Existence is an injected predicate so the resolution logic itself needs
/// no filesystem. The check-then-create sequence is not atomic; concurrent
/// writers into one directory must serialize naming themselves.
pub fn resolve_output_path<F>(dir: &Path, stem: &str, target: Format, exists: F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    let ext = target.extension();

    let mut candidate = dir.join(format!("{}_converted.{}", stem, ext));
    let mut counter = 1u32;
    while exists(&candidate) {
        candidate = dir.join(format!("{}_converted_{}.{}", stem, counter, ext));
        counter += 1;
    }
    candidate
}

/// Write a converted payload into `output_dir`, deriving the name from the
/// input file's stem.
///
/// The payload is already fully encoded when this runs, so a failed
/// conversion never leaves a partial file behind.
pub fn write_converted(output_dir: &Path, input_path: &Path, converted: &Converted) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("outfit");

    let path = resolve_output_path(output_dir, stem, converted.target, |p| p.exists());
    fs::write(&path, &converted.bytes)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_first_candidate_when_free() {
        let path = resolve_output_path(Path::new("out"), "fit", Format::Yim, |_| false);
        assert_eq!(path, Path::new("out/fit_converted.json"));
    }

    #[test]
    fn test_stand_target_uses_txt_extension() {
        let path = resolve_output_path(Path::new("out"), "fit", Format::Stand, |_| false);
        assert_eq!(path, Path::new("out/fit_converted.txt"));
    }

    #[test]
    fn test_monotonic_suffixes_under_collisions() {
        let mut taken: HashSet<PathBuf> = HashSet::new();

        for expected in [
            "out/fit_converted.json",
            "out/fit_converted_1.json",
            "out/fit_converted_2.json",
            "out/fit_converted_3.json",
        ] {
            let path =
                resolve_output_path(Path::new("out"), "fit", Format::Yim, |p| taken.contains(p));
            assert_eq!(path, Path::new(expected));
            taken.insert(path);
        }
    }

    #[test]
    fn test_write_converted_avoids_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let converted = Converted {
            source: Format::Cherax,
            target: Format::Yim,
            bytes: b"{}".to_vec(),
            warnings: Vec::new(),
        };

        let first = write_converted(dir.path(), Path::new("my_fit.json"), &converted).unwrap();
        let second = write_converted(dir.path(), Path::new("my_fit.json"), &converted).unwrap();

        assert_eq!(first, dir.path().join("my_fit_converted.json"));
        assert_eq!(second, dir.path().join("my_fit_converted_1.json"));
        assert!(first.exists() && second.exists());
    }
}
