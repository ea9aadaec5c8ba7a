// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Scurry Contributors

//! Robots exclusion core for the scurry crawler.
//!
//! Given a crawl target and a directive pattern from a `robots.txt` file,
//! decides whether the pattern covers the target. Both sides of that
//! comparison are untrusted (the URL comes from a crawled page, the pattern
//! from a webmaster), so the matcher guarantees bounded worst-case cost.

pub mod cli;
pub mod error;
pub mod escape;
pub mod matcher;
pub mod url;

pub use cli::{Cli, Command};
pub use error::{Error, ExitCode, Result};
pub use escape::maybe_escape;
pub use matcher::matches;
// `self::` disambiguates the module from the `url` crate.
pub use self::url::{combine, path_params_query};
