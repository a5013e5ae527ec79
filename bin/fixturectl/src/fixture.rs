//! ---
//! fx_section: "03-cli"
//! fx_subsection: "binary"
//! fx_type: "source"
//! fx_scope: "code"
//! fx_description: "Control CLI exercising the fixture declarations."
//! fx_version: "v0.1.0"
//! fx_owner: "tbd"
//! ---
use anyhow::Result;
use clap::Args;
use fixture_common::FixtureConfig;
use fixture_logging::{fx_debug, LogContext};
use fixture_model::{
    exported_function, AnotherClass, AnotherType, FixtureFunction, MyClass, MyStruct,
};

pub fn call(function: FixtureFunction) -> Result<()> {
    let name = function.to_string();
    fx_debug!(
        context = LogContext::new().with_operation(&name),
        "invoking fixture function"
    );
    function.call();
    Ok(())
}

pub fn exported() -> Result<()> {
    println!("{}", exported_function());
    Ok(())
}

pub fn only() -> Result<()> {
    AnotherClass.only_method();
    Ok(())
}

#[derive(Debug, Args)]
pub struct ValueCommand {
    /// Value to write before reading back (defaults to `defaults.value`).
    #[arg(long, allow_negative_numbers = true)]
    set: Option<i32>,
    /// Go through MyClass::method_two / method_one instead of MyStruct.
    #[arg(long)]
    class: bool,
}

impl ValueCommand {
    pub fn execute(self, config: &FixtureConfig) -> Result<()> {
        let written = self.set.or(config.defaults.value);
        let (entity, operation, value) = if self.class {
            let mut item = MyClass::new();
            if let Some(value) = written {
                item.method_two(value);
            }
            ("MyClass", "method_two", item.method_one())
        } else {
            let mut item = MyStruct::new();
            if let Some(value) = written {
                item.set_value(value);
            }
            ("MyStruct", "set_value", item.get_value())
        };
        if let Some(value) = written {
            fx_debug!(
                context = LogContext::new()
                    .with_entity(entity)
                    .with_operation(operation),
                "value written: {}",
                value
            );
        }
        println!("{}", value);
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct NameCommand {
    /// Name to construct with (defaults to `defaults.name`, then "fixture").
    name: Option<String>,
}

impl NameCommand {
    pub fn execute(self, config: &FixtureConfig) -> Result<()> {
        let name = self.name.unwrap_or_else(|| config.default_name());
        let item = AnotherType::new(name);
        println!("{}", item.get_name());
        Ok(())
    }
}
