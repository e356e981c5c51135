use anyhow::{bail, Result};

use pagescroll_core::shortcuts::{ShortcutKind, ShortcutNode, ShortcutsFetcher};
use pagescroll_core::WidgetConfig;

pub async fn run(config: &WidgetConfig, url: Option<&str>) -> Result<()> {
    let Some(url) = url.or(config.shortcuts.as_deref()) else {
        bail!("No shortcuts URL given and none configured");
    };

    let fetcher = ShortcutsFetcher::new()?;
    let tree = fetcher.fetch(url).await?;

    if tree.is_empty() {
        println!("No shortcuts in {}", url);
        return Ok(());
    }

    print_nodes(&tree.roots, 0);
    println!("{} links", tree.link_count());

    Ok(())
}

fn print_nodes(nodes: &[ShortcutNode], depth: usize) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        match &node.kind {
            ShortcutKind::Link(url) => println!("{}{} -> {}", indent, node.label, url),
            ShortcutKind::Group(children) => {
                println!("{}{}/", indent, node.label);
                print_nodes(children, depth + 1);
            }
        }
    }
}
