mod bag;

pub use bag::{CaptureBag, CaptureEntry, CaptureList, merge_captures};
