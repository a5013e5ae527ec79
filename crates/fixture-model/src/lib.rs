//! ---
//! fx_section: "01-fixture"
//! fx_subsection: "module"
//! fx_type: "source"
//! fx_scope: "code"
//! fx_description: "Fixture declarations consumed by symbol-extraction harnesses."
//! fx_version: "v0.1.0"
//! fx_owner: "tbd"
//! ---
//! Sample declarations analysed by symbol-extraction and linting harnesses.
//!
//! The crate is deliberately flat: a few container types, a trait, an enum
//! and some free functions that print fixed lines, mixing public and
//! private declarations. [`SymbolCatalog`] describes those
//! declarations so a harness can diff its own extraction output against them.

pub mod catalog;
pub mod entities;
pub mod output;

pub use catalog::{FixtureSymbol, SymbolCatalog, SymbolKind};
pub use entities::{
    AnotherClass, AnotherType, MyClass, MyEnum, MyInterface, MyStruct, ONLY_LINE,
};
pub use output::{
    exported_function, public_function, FixtureFunction, ANOTHER_LINE, ARROW_LINE,
    EXPORTED_VALUE, PUBLIC_LINE, TOP_LEVEL_LINE,
};
