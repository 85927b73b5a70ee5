//! Playground - disposable working directories from reusable templates
//!
//! A playgrounds root holds one directory per playground plus a
//! `.templates` directory of template trees. Creating a playground copies a
//! template, substitutes `{{ playground }}` and `{{ template }}` markers in
//! top-level entry names and file contents, and retargets symlinks that
//! pointed into the template.
//!
//! # Layout
//!
//! ```text
//! playgrounds/
//! ├── .templates/
//! │   ├── default -> .../.templates/rust
//! │   └── rust/
//! │       └── {{ playground }}.rs
//! └── demo/
//!     ├── demo.rs
//!     └── .playground/
//!         └── manifest
//! ```
//!
//! # Example
//!
//! ```ignore
//! use playground::Location;
//!
//! let root = Location::detect(&std::env::current_dir()?)?.expect("no playgrounds root");
//! let location = Location::from_root(root)?;
//! location.new_playground("demo", "rust")?;
//! for pg in location.list_playgrounds()? {
//!     println!("{} {:?}", pg.name, pg.template);
//! }
//! ```

pub mod cli;
pub mod config;
mod copy;
pub mod error;
pub mod interpolator;
pub mod location;
pub mod manifest;
pub mod name;
pub mod render;

pub use error::{PlaygroundError, Result};
pub use interpolator::Interpolator;
pub use location::{DEFAULT_TEMPLATE, Location, PlaygroundInfo};
pub use manifest::Manifest;
