// Example: first-match spacing rules over a 3-span grid with a full-width header.
use std::num::NonZeroUsize;

use aquarius::{
    GridContext, ItemVariant, KindRule, Orientation, Padding, SpaceParam, SpaceRuleDecoration,
};

#[derive(Debug)]
enum Cell {
    Header,
    Photo(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CellKind {
    Header,
    Photo,
}

impl ItemVariant for Cell {
    type Kind = CellKind;

    fn kind(&self) -> CellKind {
        match self {
            Cell::Header => CellKind::Header,
            Cell::Photo(_) => CellKind::Photo,
        }
    }
}

fn main() {
    let decoration = SpaceRuleDecoration::<Cell>::new()
        .with_rule(
            KindRule(CellKind::Header),
            SpaceParam::new(Padding::symmetric(0, 12)),
        )
        .with_param(SpaceParam::new(Padding::all(2)).with_container(Padding::all(8)));

    let photos: Vec<Cell> = (0..7).map(Cell::Photo).collect();
    let span = NonZeroUsize::new(3).expect("non-zero span");
    let grid = GridContext::grid(Orientation::Vertical, span, photos.len());

    let header_row = GridContext::linear(Orientation::Vertical, 1);
    println!(
        "header -> {:?}",
        decoration.item_offsets(&Cell::Header, 0, &header_row)
    );
    for (position, cell) in photos.iter().enumerate() {
        let offsets = decoration.item_offsets(cell, position, &grid);
        println!("{cell:?} -> {offsets:?}");
    }
}
