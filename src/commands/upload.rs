use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use walkdir::WalkDir;

/// Copy every chapter PDF in `from` to the destination directory.
///
/// Best effort: a failed copy is reported and counted, but the remaining
/// files are still attempted. Exits non-zero if any transfer failed.
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> Result<()> {
    let from = from.as_ref();
    let to = to.as_ref();

    let mut files: Vec<PathBuf> = WalkDir::new(from)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No chapter files found in {}", from.display());
    }

    std::fs::create_dir_all(to)
        .with_context(|| format!("Failed to create directory: {}", to.display()))?;

    let mut failed = 0usize;
    for file in &files {
        let Some(name) = file.file_name() else {
            continue;
        };
        let dest = to.join(name);
        match std::fs::copy(file, &dest) {
            Ok(_) => info!("uploaded {}", dest.display()),
            Err(e) => {
                error!("failed to upload {}: {}", file.display(), e);
                failed += 1;
            }
        }
    }

    println!(
        "Uploaded {} of {} file(s) to {}",
        files.len() - failed,
        files.len(),
        to.display()
    );

    if failed > 0 {
        anyhow::bail!("{} file(s) failed to upload", failed);
    }

    Ok(())
}
