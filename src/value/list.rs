use super::Value;
use crate::types::NodeId;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared ordered container. Cloning clones the handle.
#[derive(Clone, Default)]
pub struct List(Rc<RefCell<Vec<Value>>>);

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self(Rc::new(RefCell::new(
            items.into_iter().map(Into::into).collect(),
        )))
    }

    pub fn push<V: Into<Value>>(&self, value: V) {
        self.0.borrow_mut().push(value.into());
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn items(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        Rc::as_ptr(&self.0) as *const () as NodeId
    }

    #[inline]
    pub fn ptr_eq(&self, other: &List) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn with_replaced(&self, replaced: &[(usize, Value)]) -> List {
        let mut items = self.0.borrow().clone();
        for (index, value) in replaced {
            if let Some(slot) = items.get_mut(*index) {
                *slot = value.clone();
            }
        }
        List(Rc::new(RefCell::new(items)))
    }
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}
