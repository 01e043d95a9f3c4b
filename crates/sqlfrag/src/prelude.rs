//! Convenient imports for typical `sqlfrag` usage.
//!
//! This module is intentionally small and focused on the most common APIs
//! so examples can start with:
//!
//! ```
//! use sqlfrag::prelude::*;
//! ```

pub use crate::{
    Arguments, FragError, FragResult, Fragment, GenContext, Interpolation, PlaceholderStyle,
    Value, frag, raw,
};

pub use crate::{Expression, Selectable};
