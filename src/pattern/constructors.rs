use super::{Pattern, PatternError, PatternResult, Predicate, RegexCache};
use crate::capture::CaptureBag;
use crate::types::Fault;
use crate::value::Value;
use ::regex::Regex;
use std::rc::Rc;

pub fn any() -> Pattern {
    Predicate::Any.into()
}

pub fn string() -> Pattern {
    Predicate::String.into()
}

/// Unanchored: matches any string in which `regex` finds a match.
pub fn regex(regex: Regex) -> Pattern {
    Predicate::Regex {
        regex,
        export_groups: false,
    }
    .into()
}

pub fn regex_str(source: &str) -> PatternResult<Pattern> {
    RegexCache::global().compile(source).map(regex)
}

/// Like [`regex`], but also captures the regex's own groups: named groups
/// under their names, then every numbered group under `"0"`, `"1"`, ...
pub fn regex_groups(regex: Regex) -> Pattern {
    Predicate::Regex {
        regex,
        export_groups: true,
    }
    .into()
}

pub fn custom<F>(predicate: F) -> Pattern
where
    F: Fn(&Value) -> bool + 'static,
{
    Predicate::Custom(Rc::new(predicate)).into()
}

/// Like [`custom`], but a match reports the bag the predicate returns as its
/// own captures. `None` is a non-match.
pub fn custom_with_captures<F>(predicate: F) -> Pattern
where
    F: Fn(&Value) -> Option<CaptureBag> + 'static,
{
    Predicate::CustomCaptures(Rc::new(predicate)).into()
}

/// Matches when `assert` returns `Ok`. An `Err` is a non-match, never an error.
pub fn nothrow<F, E>(assert: F) -> Pattern
where
    F: Fn(&Value) -> Result<(), E> + 'static,
    E: Into<Fault>,
{
    Predicate::NoThrow(Rc::new(move |value: &Value| -> Result<(), Fault> {
        assert(value).map_err(Into::into)
    }))
    .into()
}

pub fn group<P: Into<Pattern>>(pattern: P, name: &str) -> Pattern {
    Predicate::Group {
        pattern: pattern.into(),
        name: name.into(),
    }
    .into()
}

pub fn optional<P: Into<Pattern>>(pattern: P) -> Pattern {
    Predicate::Optional(pattern.into()).into()
}

pub fn or<L: Into<Pattern>, R: Into<Pattern>>(left: L, right: R) -> Pattern {
    Predicate::Or(left.into(), right.into()).into()
}

pub fn or3<A, B, C>(first: A, second: B, third: C) -> Pattern
where
    A: Into<Pattern>,
    B: Into<Pattern>,
    C: Into<Pattern>,
{
    or(or(first, second), third)
}

pub fn or4<A, B, C, D>(first: A, second: B, third: C, fourth: D) -> Pattern
where
    A: Into<Pattern>,
    B: Into<Pattern>,
    C: Into<Pattern>,
    D: Into<Pattern>,
{
    or(or3(first, second, third), fourth)
}

pub fn any_of<I, P>(branches: I) -> PatternResult<Pattern>
where
    I: IntoIterator<Item = P>,
    P: Into<Pattern>,
{
    let mut branches = branches.into_iter().map(Into::into);
    let first = branches.next().ok_or(PatternError::EmptyAlternation)?;
    Ok(branches.fold(first, or))
}

pub fn and<L: Into<Pattern>, R: Into<Pattern>>(left: L, right: R) -> Pattern {
    Predicate::And(left.into(), right.into()).into()
}

pub fn array_some<P: Into<Pattern>>(pattern: P) -> Pattern {
    Predicate::ArraySome(pattern.into()).into()
}

pub fn array_zero_or_one<P: Into<Pattern>>(pattern: P) -> Pattern {
    Predicate::ArrayZeroOrOne(pattern.into()).into()
}

pub fn array_every<P: Into<Pattern>>(pattern: P) -> Pattern {
    Predicate::ArrayEvery(pattern.into()).into()
}

pub fn array_for<P: Into<Pattern>>(pattern: P) -> Pattern {
    Predicate::ArrayFor(pattern.into()).into()
}

/// Matches `condition`, derives a new value from the match, then matches the
/// derived value against `target` as a fresh root.
pub fn coerce<A, B, F, V>(condition: A, derive: F, target: B) -> Pattern
where
    A: Into<Pattern>,
    B: Into<Pattern>,
    F: Fn(&Value, &CaptureBag) -> V + 'static,
    V: Into<Value>,
{
    try_coerce(
        condition,
        move |value: &Value, groups: &CaptureBag| Ok::<_, Fault>(derive(value, groups)),
        target,
    )
}

/// Fallible [`coerce`]. An `Err` from `derive` aborts the whole match.
pub fn try_coerce<A, B, F, V, E>(condition: A, derive: F, target: B) -> Pattern
where
    A: Into<Pattern>,
    B: Into<Pattern>,
    F: Fn(&Value, &CaptureBag) -> Result<V, E> + 'static,
    V: Into<Value>,
    E: Into<Fault>,
{
    Predicate::Coerce {
        condition: condition.into(),
        derive: Rc::new(move |value: &Value, groups: &CaptureBag| -> Result<Value, Fault> {
            derive(value, groups).map(Into::into).map_err(Into::into)
        }),
        target: target.into(),
    }
    .into()
}

pub fn transform<P, F, V>(pattern: P, replace: F) -> Pattern
where
    P: Into<Pattern>,
    F: Fn(&Value, &CaptureBag) -> V + 'static,
    V: Into<Value>,
{
    try_transform(pattern, move |value: &Value, groups: &CaptureBag| {
        Ok::<_, Fault>(replace(value, groups))
    })
}

/// Fallible [`transform`]. An `Err` from `replace` aborts the whole match.
pub fn try_transform<P, F, V, E>(pattern: P, replace: F) -> Pattern
where
    P: Into<Pattern>,
    F: Fn(&Value, &CaptureBag) -> Result<V, E> + 'static,
    V: Into<Value>,
    E: Into<Fault>,
{
    Predicate::Transform {
        pattern: pattern.into(),
        replace: Rc::new(move |value: &Value, groups: &CaptureBag| -> Result<Value, Fault> {
            replace(value, groups).map(Into::into).map_err(Into::into)
        }),
    }
    .into()
}
