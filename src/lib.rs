//! # errtree
//!
//! Composable error trees: an error with a root message, an optional original
//! error it was derived from, and any number of child errors.
//!
//! ## Usage
//!
//! ```
//! use errtree::{ErrorTree, MessageError};
//!
//! let err_a = MessageError::shared("err A");
//! let err_b = MessageError::shared("err B");
//!
//! let multierr = ErrorTree::new("multierror", [err_a.clone(), err_b.clone()]);
//! assert_eq!(multierr.to_string(), "multierror:\n\terr A\n\terr B");
//! assert!(multierr.matches(err_a.as_ref()));
//! assert!(multierr.matches(err_b.as_ref()));
//! ```
//!
//! Deriving from an existing error keeps it as the original:
//!
//! ```
//! use errtree::{ErrorTree, MessageError};
//!
//! let err_a = MessageError::shared("err A");
//! let err_b = MessageError::shared("err B");
//!
//! let multierr = ErrorTree::derive_from(Some(err_a.clone()), [err_b.clone()]);
//! assert_eq!(multierr.to_string(), "err A:\n\terr B");
//! assert!(multierr.matches(err_a.as_ref()));
//! assert!(multierr.matches(err_b.as_ref()));
//! ```
//!
//! ## Modules
//!
//! - `tree` - The error tree, its rendering, matching and narrowing
//! - `tree::inspect` - `is` / `find` queries over any `std::error::Error`
//! - `tree::serialization` - JSON snapshots of trees (`serde` feature)
pub mod tree;

pub use tree::{
    find, is, same_error, shared, BoxError, ErrorTree, Inspect, MessageError, SharedError,
};
#[cfg(feature = "serde")]
pub use tree::SerializableError;
