use super::Pattern;
use crate::capture::CaptureBag;
use crate::types::{Fault, GroupName};
use crate::value::Value;
use regex::Regex;
use std::fmt;
use std::rc::Rc;

pub type PredicateFn = Rc<dyn Fn(&Value) -> bool>;
pub type CaptureFn = Rc<dyn Fn(&Value) -> Option<CaptureBag>>;
pub type AssertFn = Rc<dyn Fn(&Value) -> Result<(), Fault>>;
pub type DeriveFn = Rc<dyn Fn(&Value, &CaptureBag) -> Result<Value, Fault>>;

#[derive(Clone)]
pub enum Predicate {
    Any,
    String,
    Regex {
        regex: Regex,
        export_groups: bool,
    },
    Custom(PredicateFn),
    CustomCaptures(CaptureFn),
    NoThrow(AssertFn),
    Group {
        pattern: Pattern,
        name: GroupName,
    },
    Optional(Pattern),
    Or(Pattern, Pattern),
    And(Pattern, Pattern),
    ArraySome(Pattern),
    ArrayZeroOrOne(Pattern),
    ArrayEvery(Pattern),
    ArrayFor(Pattern),
    Coerce {
        condition: Pattern,
        derive: DeriveFn,
        target: Pattern,
    },
    Transform {
        pattern: Pattern,
        replace: DeriveFn,
    },
}

impl Predicate {
    pub fn name(&self) -> &'static str {
        match self {
            Predicate::Any => "any",
            Predicate::String => "string",
            Predicate::Regex { .. } => "regex",
            Predicate::Custom(_) => "custom",
            Predicate::CustomCaptures(_) => "custom_with_captures",
            Predicate::NoThrow(_) => "nothrow",
            Predicate::Group { .. } => "group",
            Predicate::Optional(_) => "optional",
            Predicate::Or(..) => "or",
            Predicate::And(..) => "and",
            Predicate::ArraySome(_) => "array_some",
            Predicate::ArrayZeroOrOne(_) => "array_zero_or_one",
            Predicate::ArrayEvery(_) => "array_every",
            Predicate::ArrayFor(_) => "array_for",
            Predicate::Coerce { .. } => "coerce",
            Predicate::Transform { .. } => "transform",
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Any
            | Predicate::String
            | Predicate::Custom(_)
            | Predicate::CustomCaptures(_)
            | Predicate::NoThrow(_) => {
                f.write_str(self.name())
            }
            Predicate::Regex {
                regex,
                export_groups,
            } => f
                .debug_struct("regex")
                .field("regex", &regex.as_str())
                .field("export_groups", export_groups)
                .finish(),
            Predicate::Group { pattern, name } => f
                .debug_struct("group")
                .field("name", name)
                .field("pattern", pattern)
                .finish(),
            Predicate::Optional(pattern)
            | Predicate::ArraySome(pattern)
            | Predicate::ArrayZeroOrOne(pattern)
            | Predicate::ArrayEvery(pattern)
            | Predicate::ArrayFor(pattern) => f.debug_tuple(self.name()).field(pattern).finish(),
            Predicate::Or(left, right) | Predicate::And(left, right) => f
                .debug_tuple(self.name())
                .field(left)
                .field(right)
                .finish(),
            Predicate::Coerce {
                condition, target, ..
            } => f
                .debug_struct("coerce")
                .field("condition", condition)
                .field("target", target)
                .finish_non_exhaustive(),
            Predicate::Transform { pattern, .. } => f
                .debug_struct("transform")
                .field("pattern", pattern)
                .finish_non_exhaustive(),
        }
    }
}
