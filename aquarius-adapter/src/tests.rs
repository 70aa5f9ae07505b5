use crate::*;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use aquarius::{
    ComparableItem, DiffStrategy, Error, ItemVariant, NoneStrategy, RenderRegistry, Update,
    UpdateLog, ViewType, strategies,
};

#[derive(Clone, Debug, PartialEq)]
enum Row {
    Header { title: String },
    Message { id: u64, text: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum RowKind {
    Header,
    Message,
}

impl ItemVariant for Row {
    type Kind = RowKind;

    fn kind(&self) -> RowKind {
        match self {
            Row::Header { .. } => RowKind::Header,
            Row::Message { .. } => RowKind::Message,
        }
    }
}

impl ComparableItem for Row {
    fn are_items_the_same(&self, other: &Self) -> bool {
        match (self, other) {
            (Row::Header { title: a }, Row::Header { title: b }) => a == b,
            (Row::Message { id: a, .. }, Row::Message { id: b, .. }) => a == b,
            _ => false,
        }
    }

    fn are_contents_the_same(&self, other: &Self) -> bool {
        self == other
    }
}

fn header(title: &str) -> Row {
    Row::Header {
        title: title.to_string(),
    }
}

fn message(id: u64, text: &str) -> Row {
    Row::Message {
        id,
        text: text.to_string(),
    }
}

fn differ() -> Differ<Row, DiffStrategy<aquarius::ComparableCallback>, UpdateLog> {
    Differ::new(strategies::comparable(), UpdateLog::new())
}

#[test]
fn first_submit_inserts_everything() {
    let mut d = differ();
    assert!(d.is_empty());
    d.submit_list(vec![header("Today"), message(1, "hi"), message(2, "yo")]);

    assert_eq!(d.len(), 3);
    assert_eq!(
        d.observer_mut().take().into_updates(),
        vec![Update::Inserted {
            position: 0,
            count: 3
        }]
    );
}

#[test]
fn submit_diffs_against_the_previous_snapshot() {
    let mut d = differ();
    d.submit_list(vec![header("Today"), message(1, "hi"), message(2, "yo")]);
    d.observer_mut().clear();

    d.submit_list(vec![header("Today"), message(2, "yo"), message(3, "new")]);
    assert_eq!(
        d.observer().updates(),
        &[
            Update::Removed {
                position: 1,
                count: 1
            },
            Update::Inserted {
                position: 2,
                count: 1
            },
        ]
    );
    assert_eq!(d.get(2), Some(&message(3, "new")));
}

#[test]
fn resubmitting_the_same_list_notifies_nothing() {
    let mut d = differ();
    let rows = vec![header("Today"), message(1, "hi")];
    d.submit_list(rows.clone());
    d.observer_mut().clear();

    d.submit_list(rows);
    assert!(d.observer().is_empty());
}

#[test]
fn old_snapshots_stay_readable() {
    let mut d = differ();
    d.submit_list(vec![message(1, "a"), message(2, "b")]);
    let before = d.snapshot();

    d.submit_list(vec![message(2, "b")]);
    assert_eq!(before.len(), 2);
    assert_eq!(d.current_list(), &[message(2, "b")]);

    let shared: Arc<[Row]> = Arc::from(vec![message(9, "z")]);
    d.submit_list(Arc::clone(&shared));
    assert!(Arc::ptr_eq(&d.snapshot(), &shared));
}

#[test]
fn remove_at_position_returns_the_item() {
    let mut d = differ();
    d.submit_list(vec![message(1, "a"), message(2, "b"), message(3, "c")]);
    d.observer_mut().clear();

    assert_eq!(d.remove_at_position(1), Ok(message(2, "b")));
    assert_eq!(d.current_list(), &[message(1, "a"), message(3, "c")]);
    assert_eq!(
        d.observer().updates(),
        &[Update::Removed {
            position: 1,
            count: 1
        }]
    );
}

#[test]
fn out_of_range_mutations_change_nothing() {
    let mut d = differ();
    d.submit_list(vec![message(1, "a"), message(2, "b")]);
    d.observer_mut().clear();
    let before = d.snapshot();

    assert_eq!(
        d.remove_at_position(2),
        Err(Error::OutOfRange {
            position: 2,
            len: 2
        })
    );
    assert_eq!(
        d.swap(0, 5),
        Err(Error::OutOfRange {
            position: 5,
            len: 2
        })
    );
    assert!(Arc::ptr_eq(&d.snapshot(), &before));
    assert!(d.observer().is_empty());

    let mut empty = differ();
    assert!(empty.remove_at_position(0).is_err());
}

#[test]
fn swap_exchanges_items_and_reports_moves() {
    let mut d = differ();
    d.submit_list(vec![
        message(1, "a"),
        message(2, "b"),
        message(3, "c"),
        message(4, "d"),
    ]);
    d.observer_mut().clear();

    d.swap(3, 1).unwrap();
    let ids: Vec<u64> = d
        .current_list()
        .iter()
        .map(|row| match row {
            Row::Message { id, .. } => *id,
            Row::Header { .. } => 0,
        })
        .collect();
    assert_eq!(ids, vec![1, 4, 3, 2]);
    assert_eq!(
        d.observer().updates(),
        &[
            Update::Moved { from: 1, to: 3 },
            Update::Moved { from: 2, to: 1 },
        ]
    );

    d.swap(3, 1).unwrap();
    assert_eq!(d.get(1), Some(&message(2, "b")));
    assert_eq!(d.get(3), Some(&message(4, "d")));

    d.observer_mut().clear();
    d.swap(2, 2).unwrap();
    assert!(d.observer().is_empty());
}

#[test]
fn borrowed_observer_sees_updates() {
    let mut log: UpdateLog = UpdateLog::new();
    {
        let mut d = Differ::new(NoneStrategy::<()>::new(), &mut log);
        d.submit_list(vec![1u8, 2, 3]);
        d.submit_list(vec![4u8, 5]);
    }
    assert_eq!(
        log.updates(),
        &[
            Update::Inserted {
                position: 0,
                count: 3
            },
            Update::Changed {
                position: 0,
                count: 2,
                payload: None
            },
            Update::Removed {
                position: 2,
                count: 1
            },
        ]
    );
}

type FeedAdapter = RenderAdapter<
    Row,
    DiffStrategy<aquarius::ComparableCallback>,
    UpdateLog,
    &'static str,
    &'static str,
>;

fn adapter() -> FeedAdapter {
    let registry = RenderRegistry::builder()
        .renderer(RowKind::Header, "header-renderer")
        .renderer(RowKind::Message, "message-renderer")
        .clicker(RowKind::Message, "open-thread")
        .build();
    RenderAdapter::new(strategies::comparable(), UpdateLog::new(), registry, |row: &Row| {
        match row {
            Row::Header { title } => title.len() as u64,
            Row::Message { id, .. } => 1000 + id,
        }
    })
}

#[test]
fn adapter_dispatches_by_position() {
    let mut a = adapter();
    a.submit_list(vec![header("Today"), message(7, "hi"), header("Yesterday")]);

    assert_eq!(a.item_count(), 3);
    assert_eq!(a.item(1), Ok(&message(7, "hi")));
    assert_eq!(a.item_id(1), Ok(1007));
    assert_eq!(a.item_id(0), Ok(5));

    assert_eq!(a.item_view_type(0), a.item_view_type(2));
    assert_eq!(a.item_view_type(1), Ok(ViewType(1)));
    assert_eq!(a.renderer_at(2), Ok(&"header-renderer"));
    assert_eq!(a.clicker_at(1), Ok(Some(&"open-thread")));
    assert_eq!(a.clicker_at(0), Ok(None));

    assert_eq!(
        a.item(3),
        Err(Error::OutOfRange {
            position: 3,
            len: 3
        })
    );
}

#[test]
fn adapter_mutations_reach_the_observer() {
    let mut a = adapter();
    a.submit_list(vec![header("Today"), message(7, "hi")]);
    a.observer_mut().clear();

    a.swap(0, 1).unwrap();
    assert_eq!(a.renderer_at(0), Ok(&"message-renderer"));
    assert_eq!(a.remove_at_position(0), Ok(message(7, "hi")));
    assert_eq!(a.item_count(), 1);

    let log = a.observer_mut().take();
    assert_eq!(log.summary(), (0, 1, 1, 0));
}

#[test]
fn adapter_reports_missing_renderers() {
    let registry: RenderRegistry<RowKind, &'static str> = RenderRegistry::builder()
        .renderer(RowKind::Header, "header-renderer")
        .view_type(RowKind::Message)
        .build();
    let mut a = RenderAdapter::new(
        NoneStrategy::<()>::new(),
        UpdateLog::new(),
        registry,
        |_: &Row| 0,
    );
    a.submit_list(vec![message(1, "a")]);

    assert_eq!(a.renderer_at(0), Err(Error::MissingRenderer(ViewType(1))));
}
