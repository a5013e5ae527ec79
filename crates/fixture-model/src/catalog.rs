//! ---
//! fx_section: "01-fixture"
//! fx_subsection: "module"
//! fx_type: "source"
//! fx_scope: "code"
//! fx_description: "Expected symbol catalogue for extraction harnesses."
//! fx_version: "v0.1.0"
//! fx_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Kind of a declared fixture symbol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SymbolKind {
    Struct,
    Enum,
    Trait,
    Variant,
    Method,
    Function,
}

/// One declaration an extraction tool is expected to report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureSymbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Enclosing type for methods and variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub public: bool,
}

impl FixtureSymbol {
    fn top(name: &str, kind: SymbolKind, public: bool) -> Self {
        Self {
            name: name.to_owned(),
            kind,
            parent: None,
            public,
        }
    }

    fn member(parent: &str, name: &str, kind: SymbolKind, public: bool) -> Self {
        Self {
            name: name.to_owned(),
            kind,
            parent: Some(parent.to_owned()),
            public,
        }
    }

    /// `Parent::name` for members, plain name otherwise.
    pub fn qualified_name(&self) -> String {
        match &self.parent {
            Some(parent) => format!("{}::{}", parent, self.name),
            None => self.name.clone(),
        }
    }
}

/// Ordered list of declared symbols, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolCatalog {
    symbols: Vec<FixtureSymbol>,
}

impl SymbolCatalog {
    /// Catalogue of every fixture declaration in this crate.
    pub fn fixture() -> Self {
        use SymbolKind::*;
        let symbols = vec![
            FixtureSymbol::top("MyStruct", Struct, true),
            FixtureSymbol::member("MyStruct", "new", Method, true),
            FixtureSymbol::member("MyStruct", "get_value", Method, true),
            FixtureSymbol::member("MyStruct", "set_value", Method, true),
            FixtureSymbol::member("MyStruct", "private_method", Method, false),
            FixtureSymbol::top("AnotherType", Struct, true),
            FixtureSymbol::member("AnotherType", "new", Method, true),
            FixtureSymbol::member("AnotherType", "get_name", Method, true),
            FixtureSymbol::top("MyInterface", Trait, true),
            FixtureSymbol::member("MyInterface", "prop", Method, true),
            FixtureSymbol::top("MyClass", Struct, true),
            FixtureSymbol::member("MyClass", "new", Method, true),
            FixtureSymbol::member("MyClass", "method_one", Method, true),
            FixtureSymbol::member("MyClass", "method_two", Method, true),
            FixtureSymbol::top("AnotherClass", Struct, true),
            FixtureSymbol::member("AnotherClass", "only_method", Method, true),
            FixtureSymbol::top("MyEnum", Enum, true),
            FixtureSymbol::member("MyEnum", "Variant1", Variant, true),
            FixtureSymbol::member("MyEnum", "Variant2", Variant, true),
            FixtureSymbol::member("MyEnum", "payload", Method, true),
            FixtureSymbol::top("top_level_function", Function, false),
            FixtureSymbol::top("another_function", Function, false),
            FixtureSymbol::top("public_function", Function, true),
            FixtureSymbol::top("exported_function", Function, true),
            FixtureSymbol::top("arrow_func", Function, false),
        ];
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FixtureSymbol> {
        self.symbols.iter()
    }

    /// Look up a symbol by plain or qualified (`Parent::name`) name.
    ///
    /// A plain name resolves to the first declaration carrying it.
    pub fn find(&self, name: &str) -> Option<&FixtureSymbol> {
        match name.split_once("::") {
            Some((parent, member)) => self
                .symbols
                .iter()
                .find(|s| s.parent.as_deref() == Some(parent) && s.name == member),
            None => self.symbols.iter().find(|s| s.name == name),
        }
    }

    /// Members declared under `parent`, in declaration order.
    pub fn children<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = &'a FixtureSymbol> {
        self.symbols
            .iter()
            .filter(move |s| s.parent.as_deref() == Some(parent))
    }

    /// Catalogue restricted to public symbols.
    pub fn public_only(&self) -> Self {
        Self {
            symbols: self.symbols.iter().filter(|s| s.public).cloned().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SymbolCatalog {
    type Item = &'a FixtureSymbol;
    type IntoIter = std::slice::Iter<'a, FixtureSymbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
