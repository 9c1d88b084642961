//! Filesystem helpers

use std::fs;
use std::io;
use std::path::Path;

/// Recursively copy the contents of `from` into `to`
///
/// Directories are merged and existing files overwritten, like `cp -r from/* to`.
/// Hidden entries are copied too. Symlinks are recreated as links, never
/// followed, so a link back to a parent directory cannot recurse.
pub fn copy_tree(from: &Path, to: &Path) -> io::Result<u64> {
  fs::create_dir_all(to)?;

  let mut copied = 0;
  for entry in fs::read_dir(from)? {
    let entry = entry?;
    let file_type = entry.file_type()?;
    let src = entry.path();
    let dst = to.join(entry.file_name());

    if file_type.is_symlink() {
      copy_link(&src, &dst)?;
      copied += 1;
    } else if file_type.is_dir() {
      copied += copy_tree(&src, &dst)?;
    } else {
      fs::copy(&src, &dst)?;
      copied += 1;
    }
  }

  Ok(copied)
}

#[cfg(unix)]
fn copy_link(src: &Path, dst: &Path) -> io::Result<()> {
  let target = fs::read_link(src)?;
  if let Ok(existing) = fs::symlink_metadata(dst) {
    if existing.is_dir() {
      fs::remove_dir_all(dst)?;
    } else {
      fs::remove_file(dst)?;
    }
  }
  std::os::unix::fs::symlink(target, dst)
}

/// Links need extra privileges on Windows; copy what they point at instead,
/// skipping directory links
#[cfg(not(unix))]
fn copy_link(src: &Path, dst: &Path) -> io::Result<()> {
  if fs::metadata(src)?.is_file() {
    fs::copy(src, dst)?;
  }
  Ok(())
}
