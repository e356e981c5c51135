mod fetcher;
mod tree;

pub use fetcher::ShortcutsFetcher;
pub use tree::{parse_shortcuts, ShortcutKind, ShortcutNode, ShortcutTree};
