//! Recursive directory copy that keeps symlinks as links

use std::fs;
use std::io;
use std::os::unix::fs::symlink;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::Result;

/// Copy the tree at `source` into a new directory at `destination`.
///
/// Symlinks are recreated with their original target rather than followed.
/// Copied entries get fresh default metadata: permission bits, ownership and
/// timestamps of the source are not carried over.
pub fn copy_tree(source: &Path, destination: &Path) -> Result<()> {
    debug!(?source, ?destination, "copy_tree: called");

    for entry in WalkDir::new(source).follow_links(false) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source).map_err(io::Error::other)?;
        let target = destination.join(relative);
        let file_type = entry.file_type();

        if entry.depth() == 0 {
            fs::create_dir(&target)?;
        } else if file_type.is_symlink() {
            let link_target = fs::read_link(entry.path())?;
            symlink(&link_target, &target)?;
        } else if file_type.is_dir() {
            fs::create_dir(&target)?;
        } else {
            copy_contents(entry.path(), &target)?;
        }
    }

    Ok(())
}

fn copy_contents(source: &Path, target: &Path) -> io::Result<u64> {
    let mut reader = fs::File::open(source)?;
    let mut writer = fs::File::create(target)?;
    io::copy(&mut reader, &mut writer)
}
