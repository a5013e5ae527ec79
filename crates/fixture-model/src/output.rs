//! ---
//! fx_section: "01-fixture"
//! fx_subsection: "module"
//! fx_type: "source"
//! fx_scope: "code"
//! fx_description: "Fixture declarations consumed by symbol-extraction harnesses."
//! fx_version: "v0.1.0"
//! fx_owner: "tbd"
//! ---
//! Free functions that print a fixed line.
//!
//! Only `public_function` and `exported_function` are part of the public
//! surface; the rest stay crate-private so extraction tools see both
//! visibilities. [`FixtureFunction`] is the public way to invoke them.
//! Printing to stdout panics on a closed stream like `println!` does;
//! [`FixtureFunction::write_to`] surfaces the I/O error instead.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

pub const TOP_LEVEL_LINE: &str = "top level";
pub const ANOTHER_LINE: &str = "another";
pub const PUBLIC_LINE: &str = "public";
pub const ARROW_LINE: &str = "arrow";
pub const EXPORTED_VALUE: &str = "exported";

fn top_level_function() {
    println!("{TOP_LEVEL_LINE}");
}

fn another_function() {
    println!("{ANOTHER_LINE}");
}

pub fn public_function() {
    println!("{PUBLIC_LINE}");
}

/// Returns the exported literal instead of printing it.
pub fn exported_function() -> &'static str {
    EXPORTED_VALUE
}

fn arrow_func() -> impl Fn() {
    || println!("{ARROW_LINE}")
}

/// Printing functions of the fixture, addressable by name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FixtureFunction {
    TopLevelFunction,
    AnotherFunction,
    PublicFunction,
    ArrowFunc,
}

impl FixtureFunction {
    /// The line the function prints, without the newline.
    pub fn line(&self) -> &'static str {
        match self {
            FixtureFunction::TopLevelFunction => TOP_LEVEL_LINE,
            FixtureFunction::AnotherFunction => ANOTHER_LINE,
            FixtureFunction::PublicFunction => PUBLIC_LINE,
            FixtureFunction::ArrowFunc => ARROW_LINE,
        }
    }

    /// Invoke the declared function, printing to stdout.
    pub fn call(&self) {
        match self {
            FixtureFunction::TopLevelFunction => top_level_function(),
            FixtureFunction::AnotherFunction => another_function(),
            FixtureFunction::PublicFunction => public_function(),
            FixtureFunction::ArrowFunc => arrow_func()(),
        }
    }

    /// Emit the same single line into `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.line())
    }
}
