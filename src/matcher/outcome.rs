use crate::capture::CaptureBag;
use crate::value::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOutcome {
    pub matched: bool,
    pub captures: CaptureBag,
    pub replacement: Option<Value>,
}

impl MatchOutcome {
    #[inline]
    pub fn miss() -> Self {
        Self::default()
    }

    #[inline]
    pub fn hit(captures: CaptureBag) -> Self {
        Self {
            matched: true,
            captures,
            replacement: None,
        }
    }

    #[inline]
    pub(crate) fn verdict(matched: bool) -> Self {
        if matched {
            Self::hit(CaptureBag::new())
        } else {
            Self::miss()
        }
    }

    pub fn with_replacement(mut self, replacement: Option<Value>) -> Self {
        self.replacement = replacement;
        self
    }

    pub fn is_match(&self) -> bool {
        self.matched
    }
}
