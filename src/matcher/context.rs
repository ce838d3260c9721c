use crate::query::QueryOptions;
use crate::types::NodeId;
use crate::value::IdentitySet;

/// Per-call matching state. `active` holds the containers whose children are
/// being matched on the current path; re-entering one is a non-match.
#[derive(Debug)]
pub(crate) struct MatchContext<'o> {
    options: &'o QueryOptions,
    active: IdentitySet,
}

impl<'o> MatchContext<'o> {
    pub(crate) fn new(options: &'o QueryOptions) -> Self {
        Self {
            options,
            active: IdentitySet::new(),
        }
    }

    pub(crate) fn fresh(&self) -> MatchContext<'o> {
        Self::new(self.options)
    }

    #[inline]
    pub(crate) fn options(&self) -> &'o QueryOptions {
        self.options
    }

    #[inline]
    pub(crate) fn enter(&mut self, id: NodeId) -> bool {
        self.active.insert(id)
    }

    #[inline]
    pub(crate) fn leave(&mut self, id: NodeId) {
        self.active.remove(id);
    }
}
