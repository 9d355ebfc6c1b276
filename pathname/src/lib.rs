#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathname
//!
//! A path value type with convenience operations.
//!
//! [`Pathname`] wraps a path string and offers two families of operations:
//!
//! - **Lexical** (no I/O): cleaning, joining, parent, basename, extension,
//!   absoluteness
//! - **Filesystem**: existence and type queries, listing and walking,
//!   globbing, creating and removing trees, reading and writing, copying and
//!   moving, symlinks, permissions and ownership, working-directory changes
//!
//! Filesystem operations delegate straight to the operating system and hand
//! its errors back as [`Error`]. Predicates such as [`Pathname::exist`] turn
//! every failure into `false`.
//!
//! ## Examples
//!
//! ```
//! use pathname::Pathname;
//!
//! let p = Pathname::new("demo/b/c/.");
//! assert_eq!(p.as_str(), "demo/b/c");
//! assert_eq!(p.parent().as_str(), "demo/b");
//! assert_eq!(p.basename(), "c");
//! assert_eq!(Pathname::new("/").append("/bbb/ccc").as_str(), "/bbb/ccc");
//! ```
//!
//! ```no_run
//! use pathname::Pathname;
//!
//! let scratch = Pathname::temp_dir().append_random();
//! scratch.mkpath()?;
//! scratch.append("notes.txt").write("hello")?;
//! for txt in scratch.glob("*.txt") {
//!     println!("{txt}: {}", txt.read()?);
//! }
//! scratch.rmtree()?;
//! # Ok::<(), pathname::Error>(())
//! ```

pub mod config;
mod copy_dir;
pub mod error;
pub mod lexical;
pub mod logging;
mod mutate;
mod pathname;
mod pattern;
mod query;
mod util;
mod workdir;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at crate root for convenience
pub use crate::config::{Config, CopyBackend};
pub use crate::error::{Error, Result};
pub use crate::logging::{init_logger, LogLevel, StderrLogger};
pub use crate::pathname::Pathname;
pub use crate::query::WalkControl;
pub use crate::util::{die_on_err, ignore_err};
