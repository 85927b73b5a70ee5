//! Playground and template lifecycle on disk
//!
//! A [`Location`] pairs a playgrounds root with its templates root:
//!
//! ```text
//! playgrounds/
//! ├── .templates/
//! │   ├── default -> /abs/path/playgrounds/.templates/rust
//! │   └── rust/
//! └── demo/
//!     └── .playground/manifest
//! ```

use chrono::{DateTime, Utc};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::copy::copy_tree;
use crate::error::{PlaygroundError, Result};
use crate::interpolator::Interpolator;
use crate::manifest::Manifest;
use crate::name;

/// Name of the directory that marks a playgrounds root
pub const PLAYGROUNDS_DIR: &str = "playgrounds";

/// Default templates directory name under the playgrounds root
pub const TEMPLATES_DIR: &str = ".templates";

/// Reserved template name of the default-template symlink
pub const DEFAULT_TEMPLATE: &str = "default";

/// A playground as reported by [`Location::list_playgrounds`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundInfo {
    pub name: String,
    /// Originating template, unknown without a readable manifest
    pub template: Option<String>,
    /// Creation time, unknown without a readable manifest
    pub created: Option<DateTime<Utc>>,
}

/// Playgrounds root and templates root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    playground_base: PathBuf,
    templates_base: PathBuf,
}

impl Location {
    /// Relative bases are made absolute so link targets written later
    /// resolve the same from anywhere.
    pub fn new(playground_base: impl AsRef<Path>, templates_base: impl AsRef<Path>) -> Result<Self> {
        let playground_base = std::path::absolute(playground_base)?;
        let templates_base = std::path::absolute(templates_base)?;
        debug!(?playground_base, ?templates_base, "Location::new: called");
        Ok(Self {
            playground_base,
            templates_base,
        })
    }

    /// Location whose templates live in `.templates` under `root`
    pub fn from_root(root: impl AsRef<Path>) -> Result<Self> {
        Self::with_templates_dir(root, TEMPLATES_DIR)
    }

    /// Location whose templates live in `templates_dir` under `root`
    pub fn with_templates_dir(root: impl AsRef<Path>, templates_dir: &str) -> Result<Self> {
        let root = root.as_ref();
        Self::new(root, root.join(templates_dir))
    }

    /// Find the playgrounds root above `starting_path` and open it
    pub fn discover(starting_path: &Path, templates_dir: &str) -> Result<Option<Self>> {
        Self::detect(starting_path)?
            .map(|root| Self::with_templates_dir(root, templates_dir))
            .transpose()
    }

    pub fn playground_base(&self) -> &Path {
        &self.playground_base
    }

    pub fn templates_base(&self) -> &Path {
        &self.templates_base
    }

    /// Create playground `playground_name` from template `template_name`
    pub fn new_playground(&self, playground_name: &str, template_name: &str) -> Result<()> {
        debug!(%playground_name, %template_name, "Location::new_playground: called");
        if !name::is_legal(playground_name) {
            return Err(PlaygroundError::InvalidName {
                name: playground_name.to_string(),
            });
        }

        let playground_full = self.playground_base.join(playground_name);
        let template_full = self.templates_base.join(template_name);

        if exists(&playground_full)? {
            return Err(PlaygroundError::PlaygroundExists {
                name: playground_name.to_string(),
            });
        }
        if !template_name_is_safe(template_name) || !template_full.is_dir() {
            return Err(PlaygroundError::TemplateNotFound {
                name: template_name.to_string(),
            });
        }

        copy_tree(&template_full, &playground_full)?;

        let values = [("playground", playground_name), ("template", template_name)];

        // Three passes: later passes address entries by their renamed paths
        rename_entries(&playground_full, &values)?;
        interpolate_contents(&playground_full, &values)?;
        redirect_symlinks(&playground_full, &template_full)?;

        Manifest::new(playground_name, template_name, Utc::now()).write(&playground_full)?;

        info!(%playground_name, %template_name, "Created playground");
        Ok(())
    }

    /// Remove playground `playground_name` and everything in it
    pub fn destroy_playground(&self, playground_name: &str) -> Result<()> {
        debug!(%playground_name, "Location::destroy_playground: called");
        if !name::is_legal(playground_name) {
            return Err(PlaygroundError::InvalidName {
                name: playground_name.to_string(),
            });
        }

        let playground_full = self.playground_base.join(playground_name);
        if !is_real_dir(&playground_full)? {
            return Err(PlaygroundError::PlaygroundNotFound {
                name: playground_name.to_string(),
            });
        }

        fs::remove_dir_all(&playground_full)?;
        info!(%playground_name, "Destroyed playground");
        Ok(())
    }

    /// List playgrounds directly under the playgrounds root
    pub fn list_playgrounds(&self) -> Result<Vec<PlaygroundInfo>> {
        debug!(base = ?self.playground_base, "Location::list_playgrounds: called");
        let mut playgrounds = Vec::new();

        for dir_name in visible_dirs(&self.playground_base)? {
            let directory = self.playground_base.join(&dir_name);
            let name = dir_name.to_string_lossy().into_owned();
            let info = match Manifest::read(&directory) {
                Ok(Some(manifest)) => PlaygroundInfo {
                    name,
                    template: Some(manifest.template),
                    created: Some(manifest.created),
                },
                Ok(None) => unknown_playground(name),
                Err(e) => {
                    warn!(%name, error = %e, "Ignoring unreadable manifest");
                    unknown_playground(name)
                }
            };
            playgrounds.push(info);
        }

        Ok(playgrounds)
    }

    /// Create an empty template directory
    pub fn new_template(&self, template_name: &str) -> Result<()> {
        debug!(%template_name, "Location::new_template: called");
        if !name::is_legal(template_name) || template_name == DEFAULT_TEMPLATE {
            return Err(PlaygroundError::InvalidName {
                name: template_name.to_string(),
            });
        }

        let template_full = self.templates_base.join(template_name);
        if template_full.is_dir() {
            return Err(PlaygroundError::TemplateExists {
                name: template_name.to_string(),
            });
        }

        fs::create_dir_all(&template_full)?;
        info!(%template_name, "Created template");
        Ok(())
    }

    /// Remove template `template_name` and everything in it
    pub fn destroy_template(&self, template_name: &str) -> Result<()> {
        debug!(%template_name, "Location::destroy_template: called");
        let template_full = self.templates_base.join(template_name);
        if !template_name_is_safe(template_name) || !is_real_dir(&template_full)? {
            return Err(PlaygroundError::TemplateNotFound {
                name: template_name.to_string(),
            });
        }

        fs::remove_dir_all(&template_full)?;
        info!(%template_name, "Destroyed template");
        Ok(())
    }

    /// Names of the templates under the templates root
    pub fn list_templates(&self) -> Result<Vec<String>> {
        debug!(base = ?self.templates_base, "Location::list_templates: called");
        Ok(visible_dirs(&self.templates_base)?
            .into_iter()
            .filter(|name| name != DEFAULT_TEMPLATE)
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    /// Name of the template the `default` link points at, if any
    pub fn default_template(&self) -> Result<Option<String>> {
        debug!("Location::default_template: called");
        let target = match fs::read_link(self.templates_base.join(DEFAULT_TEMPLATE)) {
            Ok(target) => target,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let name = target.strip_prefix(&self.templates_base).unwrap_or(&target);
        Ok(Some(name.to_string_lossy().into_owned()))
    }

    /// Point the `default` link at template `template_name`
    pub fn set_default_template(&self, template_name: &str) -> Result<()> {
        debug!(%template_name, "Location::set_default_template: called");
        let default_path = self.templates_base.join(DEFAULT_TEMPLATE);
        let template_full = self.templates_base.join(template_name);

        if !template_name_is_safe(template_name) || template_name == DEFAULT_TEMPLATE || !template_full.is_dir() {
            return Err(PlaygroundError::TemplateNotFound {
                name: template_name.to_string(),
            });
        }

        if fs::symlink_metadata(&default_path).is_ok_and(|m| m.file_type().is_symlink()) {
            fs::remove_file(&default_path)?;
        }
        symlink(&template_full, &default_path)?;

        info!(%template_name, "Set default template");
        Ok(())
    }

    /// Walk upward from `starting_path` looking for a `playgrounds` directory.
    ///
    /// Each ancestor (the starting directory and the filesystem root
    /// included) is checked for a direct child named `playgrounds`; the
    /// deepest hit wins. Fails if `starting_path` does not exist.
    pub fn detect(starting_path: &Path) -> Result<Option<PathBuf>> {
        debug!(?starting_path, "Location::detect: called");
        let start = std::path::absolute(starting_path)?;
        fs::metadata(&start)?;

        for candidate in start.ancestors() {
            let playgrounds = candidate.join(PLAYGROUNDS_DIR);
            if playgrounds.is_dir() {
                debug!(?playgrounds, "Location::detect: found");
                return Ok(Some(playgrounds));
            }
        }

        Ok(None)
    }
}

fn unknown_playground(name: String) -> PlaygroundInfo {
    PlaygroundInfo {
        name,
        template: None,
        created: None,
    }
}

/// Template names must stay a single path component under the templates root
fn template_name_is_safe(template_name: &str) -> bool {
    !template_name.is_empty() && !template_name.contains('/') && template_name != "." && template_name != ".."
}

fn exists(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// True for a directory that is not itself a symlink
fn is_real_dir(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(meta) => Ok(meta.file_type().is_dir()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Non-hidden real directories directly under `base`
fn visible_dirs(base: &Path) -> Result<Vec<OsString>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(base)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        if !name.as_encoded_bytes().starts_with(b".") {
            names.push(name);
        }
    }
    Ok(names)
}

fn entry_names(directory: &Path) -> Result<Vec<OsString>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(directory)? {
        names.push(entry?.file_name());
    }
    Ok(names)
}

fn rename_entries(playground_full: &Path, values: &[(&str, &str)]) -> Result<()> {
    for entry_name in entry_names(playground_full)? {
        // Markers only ever appear in names that are valid UTF-8
        let Some(name) = entry_name.to_str() else {
            continue;
        };
        let interpolator = Interpolator::new(name);
        if !interpolator.is_interpolated() {
            continue;
        }

        let new_name = interpolator.interpolate(Some(values));
        if new_name != name {
            debug!(%name, %new_name, "rename_entries: renaming");
            fs::rename(playground_full.join(&entry_name), playground_full.join(&new_name))?;
        }
    }
    Ok(())
}

fn interpolate_contents(playground_full: &Path, values: &[(&str, &str)]) -> Result<()> {
    for entry_name in entry_names(playground_full)? {
        let path = playground_full.join(&entry_name);
        if !fs::symlink_metadata(&path)?.file_type().is_file() {
            continue;
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                debug!(?entry_name, "interpolate_contents: skipping non-UTF-8 file");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let new_contents = Interpolator::new(&contents).interpolate(Some(values));
        if new_contents != contents {
            fs::write(&path, new_contents)?;
        }
    }
    Ok(())
}

fn redirect_symlinks(playground_full: &Path, template_full: &Path) -> Result<()> {
    for entry_name in entry_names(playground_full)? {
        let path = playground_full.join(&entry_name);
        if !fs::symlink_metadata(&path)?.file_type().is_symlink() {
            continue;
        }

        let link_target = fs::read_link(&path)?;
        let Ok(rest) = link_target.strip_prefix(template_full) else {
            continue;
        };

        let new_target = playground_full.join(rest);
        debug!(?link_target, ?new_target, "redirect_symlinks: retargeting");
        fs::remove_file(&path)?;
        symlink(&new_target, &path)?;
    }
    Ok(())
}
