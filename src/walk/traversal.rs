use super::{EdgeKey, IgnoreEdge};
use crate::errors::MatchResult;
use crate::types::MapKey;
use crate::value::{IdentitySet, List, Map, Value};
use smallvec::SmallVec;

#[derive(Debug, Clone)]
pub enum Visit {
    Descend,
    Replace(Value),
}

/// Single pre-order pass over a value graph.
/// Returns the root rebuilt around any replacements, or the original root
/// handle when nothing changed.
pub struct Walker<'a> {
    ignore: Option<&'a IgnoreEdge<'a>>,
    max_depth: Option<usize>,
    visited: IdentitySet,
}

impl<'a> Walker<'a> {
    pub fn new(ignore: Option<&'a IgnoreEdge<'a>>) -> Self {
        Self {
            ignore,
            max_depth: None,
            visited: IdentitySet::new(),
        }
    }

    /// Nodes deeper than `max_depth` (root is depth 1) are not visited.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn walk<F>(mut self, root: &Value, mut visit: F) -> MatchResult<Value>
    where
        F: FnMut(&Value) -> MatchResult<Visit>,
    {
        let rebuilt = self.visit_node(root, 1, &mut visit)?;
        Ok(rebuilt.unwrap_or_else(|| root.clone()))
    }

    // `None` means the node is unchanged and the caller keeps its handle.
    fn visit_node<F>(&mut self, node: &Value, depth: usize, visit: &mut F) -> MatchResult<Option<Value>>
    where
        F: FnMut(&Value) -> MatchResult<Visit>,
    {
        if let Some(id) = node.node_id()
            && !self.visited.insert(id)
        {
            return Ok(None);
        }

        if let Visit::Replace(replacement) = visit(node)? {
            tracing::trace!(depth, kind = node.kind(), "node replaced; skipping its children");
            return Ok(Some(replacement));
        }

        if self.max_depth.is_some_and(|max| depth >= max) {
            return Ok(None);
        }

        match node {
            Value::Map(map) => self.descend_map(node, map, depth, visit),
            Value::List(list) => self.descend_list(node, list, depth, visit),
            _ => Ok(None),
        }
    }

    fn descend_map<F>(
        &mut self,
        parent: &Value,
        map: &Map,
        depth: usize,
        visit: &mut F,
    ) -> MatchResult<Option<Value>>
    where
        F: FnMut(&Value) -> MatchResult<Visit>,
    {
        let mut replaced: SmallVec<[(MapKey, Value); 4]> = SmallVec::new();

        for (key, child) in map.entries() {
            if self.is_ignored(EdgeKey::Key(&key), parent, &child) {
                continue;
            }
            if let Some(replacement) = self.visit_node(&child, depth + 1, visit)? {
                replaced.push((key, replacement));
            }
        }

        Ok((!replaced.is_empty()).then(|| Value::Map(map.with_replaced(&replaced))))
    }

    fn descend_list<F>(
        &mut self,
        parent: &Value,
        list: &List,
        depth: usize,
        visit: &mut F,
    ) -> MatchResult<Option<Value>>
    where
        F: FnMut(&Value) -> MatchResult<Visit>,
    {
        let mut replaced: SmallVec<[(usize, Value); 4]> = SmallVec::new();

        for (index, child) in list.items().iter().enumerate() {
            if self.is_ignored(EdgeKey::Index(index), parent, child) {
                continue;
            }
            if let Some(replacement) = self.visit_node(child, depth + 1, visit)? {
                replaced.push((index, replacement));
            }
        }

        Ok((!replaced.is_empty()).then(|| Value::List(list.with_replaced(&replaced))))
    }

    #[inline]
    fn is_ignored(&self, key: EdgeKey<'_>, parent: &Value, child: &Value) -> bool {
        self.ignore.is_some_and(|ignore| ignore(key, parent, child))
    }
}

pub fn walk<F>(root: &Value, ignore: Option<&IgnoreEdge<'_>>, visit: F) -> MatchResult<Value>
where
    F: FnMut(&Value) -> MatchResult<Visit>,
{
    Walker::new(ignore).walk(root, visit)
}
