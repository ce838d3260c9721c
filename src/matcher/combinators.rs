use super::{MatchContext, MatchOutcome, match_node};
use crate::capture::{CaptureBag, CaptureEntry};
use crate::errors::{MatchError, MatchResult};
use crate::pattern::{Pattern, Predicate};
use crate::value::{List, Value};
use regex::Regex;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrayQuantifier {
    /// At least one; captures of the first match only.
    Some,
    /// At most one; captures of that match, if any.
    ZeroOrOne,
    /// All of them; captures merged in list order.
    Every,
    /// Any number; captures merged from the matching elements.
    For,
}

impl Predicate {
    pub(crate) fn matches(
        &self,
        cx: &mut MatchContext<'_>,
        value: &Value,
    ) -> MatchResult<MatchOutcome> {
        match self {
            Predicate::Any => Ok(MatchOutcome::verdict(true)),
            Predicate::String => Ok(MatchOutcome::verdict(value.is_string())),
            Predicate::Regex {
                regex,
                export_groups,
            } => Ok(match value.as_str() {
                Some(text) if *export_groups => regex_captures(regex, text),
                Some(text) => MatchOutcome::verdict(regex.is_match(text)),
                None => MatchOutcome::miss(),
            }),
            Predicate::Custom(predicate) => Ok(MatchOutcome::verdict(predicate(value))),
            Predicate::CustomCaptures(predicate) => Ok(match predicate(value) {
                Some(captures) => MatchOutcome::hit(captures),
                None => MatchOutcome::miss(),
            }),
            Predicate::NoThrow(assert) => match assert(value) {
                Ok(()) => Ok(MatchOutcome::verdict(true)),
                Err(fault) => {
                    tracing::debug!(error = %fault, kind = value.kind(), "assertion rejected value");
                    Ok(MatchOutcome::miss())
                }
            },
            Predicate::Group { pattern, name } => {
                let inner = match_node(cx, value, pattern)?;
                if !inner.matched {
                    return Ok(MatchOutcome::miss());
                }
                let entry = CaptureEntry::new(value.clone(), inner.captures, inner.replacement.clone());
                Ok(MatchOutcome::hit(CaptureBag::single(name.clone(), entry))
                    .with_replacement(inner.replacement))
            }
            Predicate::Optional(pattern) => match_node(cx, value, pattern),
            Predicate::Or(left, right) => {
                let first = match_node(cx, value, left)?;
                if first.matched {
                    return Ok(first);
                }
                let second = match_node(cx, value, right)?;
                Ok(if second.matched {
                    second
                } else {
                    MatchOutcome::miss()
                })
            }
            Predicate::And(left, right) => {
                let first = match_node(cx, value, left)?;
                if !first.matched {
                    return Ok(MatchOutcome::miss());
                }
                let second = match_node(cx, value, right)?;
                if !second.matched {
                    return Ok(MatchOutcome::miss());
                }
                let replacement = first.replacement.or(second.replacement);
                Ok(MatchOutcome::hit(first.captures.merge(second.captures))
                    .with_replacement(replacement))
            }
            Predicate::ArraySome(pattern) => match_array(cx, value, pattern, ArrayQuantifier::Some),
            Predicate::ArrayZeroOrOne(pattern) => {
                match_array(cx, value, pattern, ArrayQuantifier::ZeroOrOne)
            }
            Predicate::ArrayEvery(pattern) => {
                match_array(cx, value, pattern, ArrayQuantifier::Every)
            }
            Predicate::ArrayFor(pattern) => match_array(cx, value, pattern, ArrayQuantifier::For),
            Predicate::Coerce {
                condition,
                derive,
                target,
            } => {
                let first = match_node(cx, value, condition)?;
                if !first.matched {
                    return Ok(MatchOutcome::miss());
                }
                let derived = derive(value, &first.captures).map_err(|source| {
                    MatchError::Callback {
                        combinator: self.name(),
                        source,
                    }
                })?;
                let second = match_node(&mut cx.fresh(), &derived, target)?;
                if !second.matched {
                    return Ok(MatchOutcome::miss());
                }
                Ok(MatchOutcome::hit(first.captures.merge(second.captures))
                    .with_replacement(first.replacement))
            }
            Predicate::Transform { pattern, replace } => {
                let inner = match_node(cx, value, pattern)?;
                if !inner.matched {
                    return Ok(MatchOutcome::miss());
                }
                let replacement = replace(value, &inner.captures).map_err(|source| {
                    MatchError::Callback {
                        combinator: self.name(),
                        source,
                    }
                })?;
                Ok(MatchOutcome::hit(inner.captures).with_replacement(Some(replacement)))
            }
        }
    }
}

fn regex_captures(regex: &Regex, text: &str) -> MatchOutcome {
    let Some(found) = regex.captures(text) else {
        return MatchOutcome::miss();
    };

    let mut captures = CaptureBag::new();
    for name in regex.capture_names().flatten() {
        let value = Value::from(found.name(name).map(|m| m.as_str()));
        captures.push(name.into(), CaptureEntry::leaf(value));
    }
    for (index, group) in found.iter().enumerate() {
        let value = Value::from(group.map(|m| m.as_str()));
        captures.push(index.to_string().into(), CaptureEntry::leaf(value));
    }

    MatchOutcome::hit(captures)
}

fn match_array(
    cx: &mut MatchContext<'_>,
    value: &Value,
    pattern: &Pattern,
    quantifier: ArrayQuantifier,
) -> MatchResult<MatchOutcome> {
    let Value::List(list) = value else {
        return Ok(MatchOutcome::miss());
    };

    if !cx.enter(list.id()) {
        tracing::trace!(node = list.id(), "list re-entered on current path; treating as mismatch");
        return Ok(MatchOutcome::miss());
    }

    let outcome = scan_elements(cx, list, pattern, quantifier);
    cx.leave(list.id());
    outcome
}

fn scan_elements(
    cx: &mut MatchContext<'_>,
    list: &List,
    pattern: &Pattern,
    quantifier: ArrayQuantifier,
) -> MatchResult<MatchOutcome> {
    let mut bags: SmallVec<[CaptureBag; 4]> = SmallVec::new();
    let mut replaced: SmallVec<[(usize, Value); 4]> = SmallVec::new();

    for (index, item) in list.items().iter().enumerate() {
        let outcome = match_node(cx, item, pattern)?;
        if !outcome.matched {
            if quantifier == ArrayQuantifier::Every {
                return Ok(MatchOutcome::miss());
            }
            continue;
        }

        if quantifier == ArrayQuantifier::ZeroOrOne && !bags.is_empty() {
            return Ok(MatchOutcome::miss());
        }

        bags.push(outcome.captures);
        if let Some(replacement) = outcome.replacement {
            replaced.push((index, replacement));
        }

        if quantifier == ArrayQuantifier::Some {
            break;
        }
    }

    if quantifier == ArrayQuantifier::Some && bags.is_empty() {
        return Ok(MatchOutcome::miss());
    }

    let replacement = (!replaced.is_empty()).then(|| Value::List(list.with_replaced(&replaced)));
    Ok(MatchOutcome::hit(CaptureBag::merge_all(bags)).with_replacement(replacement))
}
