pub mod notice;

pub use notice::{push_notice, take_notice, Notice, NoticeKind};
