use crate::types::GroupName;
use crate::value::Value;
use smallvec::SmallVec;

pub type CaptureList = SmallVec<[CaptureEntry; 1]>;

#[derive(Debug, Clone, PartialEq)]
pub struct CaptureEntry {
    pub value: Value,
    pub groups: CaptureBag,
    pub replacement: Option<Value>,
}

impl CaptureEntry {
    pub fn new(value: Value, groups: CaptureBag, replacement: Option<Value>) -> Self {
        Self {
            value,
            groups,
            replacement,
        }
    }

    pub fn leaf(value: Value) -> Self {
        Self::new(value, CaptureBag::new(), None)
    }
}

/// Group name to ordered capture entries. Names keep first-seen order and
/// merging appends, so a name can hold several entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptureBag {
    groups: Vec<(GroupName, CaptureList)>,
}

impl CaptureBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(name: GroupName, entry: CaptureEntry) -> Self {
        let mut bag = Self::new();
        bag.push(name, entry);
        bag
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn get(&self, name: &str) -> Option<&[CaptureEntry]> {
        self.groups
            .iter()
            .find(|(group, _)| &**group == name)
            .map(|(_, entries)| entries.as_slice())
    }

    pub fn first(&self, name: &str) -> Option<&CaptureEntry> {
        self.get(name).and_then(|entries| entries.first())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.iter().map(|(name, _)| &**name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CaptureEntry])> + '_ {
        self.groups
            .iter()
            .map(|(name, entries)| (&**name, entries.as_slice()))
    }

    pub fn push(&mut self, name: GroupName, entry: CaptureEntry) {
        match self.groups.iter_mut().find(|(group, _)| *group == name) {
            Some((_, entries)) => entries.push(entry),
            None => {
                let mut entries = CaptureList::new();
                entries.push(entry);
                self.groups.push((name, entries));
            }
        }
    }

    pub fn merge(mut self, other: CaptureBag) -> Self {
        if self.is_empty() {
            return other;
        }
        for (name, entries) in other.groups {
            match self.groups.iter_mut().find(|(group, _)| *group == name) {
                Some((_, existing)) => existing.extend(entries),
                None => self.groups.push((name, entries)),
            }
        }
        self
    }

    pub fn merge_all<I>(bags: I) -> Self
    where
        I: IntoIterator<Item = CaptureBag>,
    {
        bags.into_iter().fold(CaptureBag::new(), CaptureBag::merge)
    }
}

pub fn merge_captures(left: CaptureBag, right: CaptureBag) -> CaptureBag {
    left.merge(right)
}
