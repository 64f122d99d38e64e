// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Relay test report generation.
//!
//! Turns a batch of relay test logs and validator metric snapshots into
//! ranked HTML, Markdown and structured reports.

pub mod error;
pub mod input;
pub mod report;
pub mod types;

pub use error::ReportError;
pub use types::{TestLogEntry, ValidatorMetrics};
