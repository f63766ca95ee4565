use std::any::Any;

use indexmap::IndexMap;
use log::debug;

use crate::{
    field::{Bound, Kind, Value},
    Argument, Descriptor, Error, Field, Flag, Input, Opt, OptionValue, Result,
};

/// Values bound for one invocation of a command, keyed by field name.
///
/// Lookups take the same descriptor the command declared. Asking for a field
/// the command never declared is a bug in the command and panics.
#[derive(Default)]
pub struct Signature {
    values: IndexMap<String, Bound>,
}

impl Signature {
    /// Binds `fields` against `input`.
    ///
    /// Options and flags are resolved first since they are matched by name
    /// anywhere in the input; arguments then take whatever positional tokens
    /// remain, in declaration order. The first failure aborts binding and
    /// consumed tokens stay consumed.
    pub fn bind(fields: &[Descriptor], input: &mut Input) -> Result<Signature> {
        let mut values = IndexMap::with_capacity(fields.len());
        let named = fields.iter().filter(|it| it.kind() != Kind::Argument);
        let positional = fields.iter().filter(|it| it.kind() == Kind::Argument);
        for field in named.chain(positional) {
            let bound = field.bind(input)?;
            values.insert(field.name().to_string(), bound);
        }
        debug!("bound {} field(s), {} token(s) left", values.len(), input.arguments().len());
        Ok(Signature { values })
    }

    /// Rejects field sets that reuse a name or a short alias, or that declare
    /// `help`, which the dispatcher always takes first.
    pub fn check(fields: &[Descriptor]) -> Result<()> {
        for (i, field) in fields.iter().enumerate() {
            if field.name() == "help" {
                return Err(Error::ReservedField(field.name().to_string()));
            }
            for prev in &fields[..i] {
                let same_short = field.short().is_some() && field.short() == prev.short();
                if field.name() == prev.name() || same_short {
                    return Err(Error::DuplicateField(field.name().to_string()));
                }
            }
        }
        Ok(())
    }

    pub fn argument<T: Any>(&self, arg: &Argument<T>) -> &T {
        match self.values.get(arg.name()) {
            Some(Bound::Argument(value)) => downcast(arg.name(), value),
            _ => undeclared(arg.name()),
        }
    }

    pub fn option<T: Any>(&self, opt: &Opt<T>) -> OptionValue<&T> {
        match self.values.get(opt.name()) {
            Some(Bound::Option(bound)) => {
                bound.as_ref().map(|value| downcast::<T>(opt.name(), value))
            }
            _ => undeclared(opt.name()),
        }
    }

    pub fn flag(&self, flag: &Flag) -> bool {
        match self.values.get(flag.name()) {
            Some(Bound::Flag(it)) => *it,
            _ => undeclared(flag.name()),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Collects the descriptors of a command's declared fields.
pub fn descriptors(fields: &[&dyn Field]) -> Vec<Descriptor> {
    fields.iter().map(|it| it.descriptor()).collect()
}

fn downcast<'a, T: Any>(name: &str, value: &'a Value) -> &'a T {
    match value.downcast_ref::<T>() {
        Some(it) => it,
        None => panic!("field `{name}` was declared with a different type"),
    }
}

fn undeclared(name: &str) -> ! {
    panic!("field `{name}` is not declared by this command")
}
