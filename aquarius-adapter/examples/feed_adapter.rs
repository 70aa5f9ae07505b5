// Example: a feed adapter that forwards structural updates to a presentation layer.
//
// The observer stands in for a UI list widget: it only receives positional callbacks and asks
// the adapter for view types and renderers when it needs to bind a slot.
use aquarius::{ComparableItem, DataSourceObserver, ItemVariant, RenderRegistry, strategies};
use aquarius_adapter::RenderAdapter;

#[derive(Clone, Debug, PartialEq)]
enum Post {
    Day(&'static str),
    Note { id: u64, body: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum PostKind {
    Day,
    Note,
}

impl ItemVariant for Post {
    type Kind = PostKind;

    fn kind(&self) -> PostKind {
        match self {
            Post::Day(_) => PostKind::Day,
            Post::Note { .. } => PostKind::Note,
        }
    }
}

impl ComparableItem for Post {
    fn are_items_the_same(&self, other: &Self) -> bool {
        match (self, other) {
            (Post::Day(a), Post::Day(b)) => a == b,
            (Post::Note { id: a, .. }, Post::Note { id: b, .. }) => a == b,
            _ => false,
        }
    }

    fn are_contents_the_same(&self, other: &Self) -> bool {
        self == other
    }
}

#[derive(Debug, Default)]
struct PrintingList;

impl DataSourceObserver for PrintingList {
    fn on_range_inserted(&mut self, position: usize, count: usize) {
        println!("  insert {count} at {position}");
    }

    fn on_range_removed(&mut self, position: usize, count: usize) {
        println!("  remove {count} at {position}");
    }

    fn on_moved(&mut self, from: usize, to: usize) {
        println!("  move {from} -> {to}");
    }

    fn on_range_changed(&mut self, position: usize, count: usize, _payload: Option<&()>) {
        println!("  rebind {count} at {position}");
    }
}

fn render_day(post: &Post) -> String {
    format!("== {post:?} ==")
}

fn render_note(post: &Post) -> String {
    format!("- {post:?}")
}

fn main() -> aquarius::Result<()> {
    let registry = RenderRegistry::<PostKind, fn(&Post) -> String>::builder()
        .renderer(PostKind::Day, render_day)
        .renderer(PostKind::Note, render_note)
        .build();

    let mut feed = RenderAdapter::new(
        strategies::comparable(),
        PrintingList,
        registry,
        |post: &Post| match post {
            Post::Day(_) => 0,
            Post::Note { id, .. } => *id,
        },
    );

    println!("submit");
    feed.submit_list(vec![
        Post::Day("Monday"),
        Post::Note { id: 1, body: "coffee" },
        Post::Note { id: 2, body: "standup" },
    ]);

    println!("submit (edit + reorder)");
    feed.submit_list(vec![
        Post::Day("Monday"),
        Post::Note { id: 2, body: "standup" },
        Post::Note { id: 1, body: "coffee, again" },
        Post::Note { id: 3, body: "lunch" },
    ]);

    println!("swap");
    feed.swap(1, 3)?;

    println!("remove");
    let removed = feed.remove_at_position(2)?;
    println!("  removed {removed:?}");

    for position in 0..feed.item_count() {
        let render = feed.renderer_at(position)?;
        let item = feed.item(position)?;
        println!(
            "[{}] id={} {}",
            feed.item_view_type(position)?,
            feed.item_id(position)?,
            render(item)
        );
    }
    Ok(())
}
