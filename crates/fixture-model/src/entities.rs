//! ---
//! fx_section: "01-fixture"
//! fx_subsection: "module"
//! fx_type: "source"
//! fx_scope: "code"
//! fx_description: "Fixture declarations consumed by symbol-extraction harnesses."
//! fx_version: "v0.1.0"
//! fx_owner: "tbd"
//! ---

/// Container holding a single integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MyStruct {
    pub value: i32,
}

impl MyStruct {
    /// Create an instance holding the zero value.
    pub fn new() -> Self {
        Self { value: 0 }
    }

    pub fn get_value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, val: i32) {
        self.value = val;
    }

    // Non-public on purpose: extraction tools must report it as private.
    #[allow(dead_code)]
    fn private_method(&mut self) {
        self.value = self.value.wrapping_add(1);
    }
}

/// Container holding a single name, read-only after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AnotherType {
    name: String,
}

impl AnotherType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }
}

/// Object exposing a single text property.
pub trait MyInterface {
    fn prop(&self) -> &str;
}

impl MyInterface for AnotherType {
    fn prop(&self) -> &str {
        &self.name
    }
}

/// Class-shaped counterpart of [`MyStruct`]: the value is only reachable
/// through its methods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MyClass {
    value: i32,
}

impl MyClass {
    pub fn new() -> Self {
        Self { value: 0 }
    }

    pub fn method_one(&self) -> i32 {
        self.value
    }

    pub fn method_two(&mut self, arg: i32) {
        self.value = arg;
    }
}

pub const ONLY_LINE: &str = "only";

/// Class with a single method and no state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AnotherClass;

impl AnotherClass {
    pub fn only_method(&self) {
        println!("{ONLY_LINE}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MyEnum {
    Variant1,
    Variant2(i32),
}

impl MyEnum {
    /// Payload carried by [`MyEnum::Variant2`].
    pub fn payload(&self) -> Option<i32> {
        match self {
            MyEnum::Variant1 => None,
            MyEnum::Variant2(value) => Some(*value),
        }
    }
}
