use std::{
    any::{type_name, Any},
    fmt,
    marker::PhantomData,
    str::FromStr,
};

use crate::{Error, Input, Result};

pub(crate) type Value = Box<dyn Any>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Argument,
    Option,
    Flag,
}

/// A bound option: `present` records that the option's name was on the
/// command line, even when no value followed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionValue<T> {
    pub value: Option<T>,
    pub present: bool,
}

impl<T> OptionValue<T> {
    pub const ABSENT: OptionValue<T> = OptionValue { value: None, present: false };

    pub fn as_ref(&self) -> OptionValue<&T> {
        OptionValue { value: self.value.as_ref(), present: self.present }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OptionValue<U> {
        OptionValue { value: self.value.map(f), present: self.present }
    }
}

/// The outcome of binding one descriptor.
pub(crate) enum Bound {
    Argument(Value),
    Option(OptionValue<Value>),
    Flag(bool),
}

/// Anything a command can list among its declared fields.
pub trait Field {
    fn descriptor(&self) -> Descriptor;
}

/// Type-erased view of a declared field, as used by the binder and the help
/// renderer.
#[derive(Clone)]
pub struct Descriptor {
    kind: Kind,
    name: String,
    short: Option<char>,
    help: String,
    bind: fn(&Descriptor, &mut Input) -> Result<Bound>,
}

impl Descriptor {
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn short(&self) -> Option<char> {
        self.short
    }
    pub fn help(&self) -> &str {
        &self.help
    }

    pub(crate) fn bind(&self, input: &mut Input) -> Result<Bound> {
        (self.bind)(self, input)
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("short", &self.short)
            .finish()
    }
}

/// A required positional argument, e.g. `<path>`.
pub struct Argument<T> {
    name: String,
    help: String,
    ty: PhantomData<fn() -> T>,
}

impl<T> Argument<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Argument { name: name.into(), help: String::new(), ty: PhantomData }
    }

    /// Help text; the first line goes next to the name, further lines are
    /// indented below it.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T: FromStr + Any> Argument<T> {
    pub fn bind(&self, input: &mut Input) -> Result<T> {
        let arg =
            input.next_argument().ok_or_else(|| Error::MissingRequiredArgument(self.name.clone()))?;
        arg.parse::<T>()
            .map_err(|_| Error::InvalidArgumentType { name: self.name.clone(), ty: type_name::<T>() })
    }
}

impl<T: FromStr + Any> Field for Argument<T> {
    fn descriptor(&self) -> Descriptor {
        Descriptor {
            kind: Kind::Argument,
            name: self.name.clone(),
            short: None,
            help: self.help.clone(),
            bind: |d, input| {
                let value = Argument::<T>::new(d.name.as_str()).bind(input)?;
                Ok(Bound::Argument(Box::new(value)))
            },
        }
    }
}

/// A named option carrying a value: `--name value` or `-n value`.
pub struct Opt<T> {
    name: String,
    short: Option<char>,
    help: String,
    ty: PhantomData<fn() -> T>,
}

impl<T> Opt<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Opt { name: name.into(), short: None, help: String::new(), ty: PhantomData }
    }

    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T: FromStr + Any> Opt<T> {
    pub fn bind(&self, input: &mut Input) -> Result<OptionValue<T>> {
        let value = match input.next_option(&self.name, self.short) {
            None => return Ok(OptionValue::ABSENT),
            Some(None) => None,
            Some(Some(text)) => Some(text.parse::<T>().map_err(|_| Error::InvalidOptionType {
                name: self.name.clone(),
                ty: type_name::<T>(),
            })?),
        };
        Ok(OptionValue { value, present: true })
    }
}

impl<T: FromStr + Any> Field for Opt<T> {
    fn descriptor(&self) -> Descriptor {
        Descriptor {
            kind: Kind::Option,
            name: self.name.clone(),
            short: self.short,
            help: self.help.clone(),
            bind: |d, input| {
                let opt = Opt::<T> { short: d.short, ..Opt::new(d.name.as_str()) };
                let bound = opt.bind(input)?;
                Ok(Bound::Option(bound.map(|it| Box::new(it) as Value)))
            },
        }
    }
}

/// A boolean switch: `--name` or `-n`.
pub struct Flag {
    name: String,
    short: Option<char>,
    help: String,
}

impl Flag {
    pub fn new(name: impl Into<String>) -> Self {
        Flag { name: name.into(), short: None, help: String::new() }
    }

    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bind(&self, input: &mut Input) -> bool {
        input.next_flag(&self.name, self.short)
    }
}

impl Field for Flag {
    fn descriptor(&self) -> Descriptor {
        Descriptor {
            kind: Kind::Flag,
            name: self.name.clone(),
            short: self.short,
            help: self.help.clone(),
            bind: |d, input| Ok(Bound::Flag(input.next_flag(&d.name, d.short))),
        }
    }
}
