use std::cell::RefCell;
use std::rc::Rc;

use supergrid::{FlatGrid, GridConfig, GridConfigError, GridItem, StackDirection};

#[derive(Debug)]
struct Photo {
    id: u32,
    hero: bool,
}

impl Photo {
    fn new(id: u32) -> Self {
        Self { id, hero: false }
    }

    fn hero(id: u32) -> Self {
        Self { id, hero: true }
    }
}

impl GridItem for Photo {
    fn full_width(&self) -> bool {
        self.hero
    }
}

fn photos(n: u32) -> Vec<Photo> {
    (0..n).map(Photo::new).collect()
}

#[test]
fn rows_follow_the_measured_dimension() {
    let mut grid: FlatGrid<Photo> = FlatGrid::new(GridConfig::new()).unwrap();
    let items = photos(5);

    assert!(grid.on_layout(355.0));
    let rows = grid.rows(&items);

    let widths: Vec<usize> = rows.iter().map(|r| r.items.len()).collect();
    assert_eq!(widths, vec![2, 2, 1]);
    assert_eq!(rows[0].items_per_row, 2);

    // Flat indices count through in visual order.
    let ids: Vec<u32> = rows
        .iter()
        .flat_map(|r| r.items.iter().map(|i| i.item.id))
        .collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    let indices: Vec<usize> = rows
        .iter()
        .flat_map(|r| r.items.iter().map(|i| i.flat_index))
        .collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);

    // Only the last row balances the grid's leading padding.
    assert!(rows[2].is_last_row);
    assert_eq!(rows[2].margin_trailing, 10.0);
    assert_eq!(rows[0].margin_trailing, 0.0);
}

#[test]
fn rotation_recomputes_the_partition() {
    let mut grid: FlatGrid<Photo> = FlatGrid::new(GridConfig::new()).unwrap();
    let items = photos(10);

    grid.on_layout(355.0);
    assert_eq!(grid.rows(&items).len(), 5);

    // Rotate: wider container, fewer rows.
    assert!(grid.on_layout(720.0));
    let rows = grid.rows(&items);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].items.len(), 5);

    // Same measurement again is a no-op.
    assert!(!grid.on_layout(720.0));
}

#[test]
fn unmeasured_grid_degrades_to_single_column() {
    let mut grid: FlatGrid<Photo> = FlatGrid::new(GridConfig::new()).unwrap();
    let items = photos(3);

    let plan = grid.plan();
    assert!(plan.provisional);
    let rows = grid.rows(&items);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.items.len() == 1));
}

#[test]
fn full_width_item_isolates_and_switches_row_style() {
    let mut grid: FlatGrid<Photo> = FlatGrid::new(GridConfig::new()).unwrap();
    let items = vec![Photo::new(0), Photo::hero(1), Photo::new(2), Photo::new(3)];

    grid.on_layout(355.0);
    let rows = grid.rows(&items);
    let widths: Vec<usize> = rows.iter().map(|r| r.items.len()).collect();
    assert_eq!(widths, vec![1, 1, 2]);

    assert!(rows[1].has_full_width_item);
    assert!(rows[1].items[0].full_width);
    assert_eq!(rows[1].row_style.direction, StackDirection::Vertical);
    assert_eq!(rows[1].row_style.padding_trailing, 0.0);

    assert!(!rows[2].has_full_width_item);
    assert_eq!(rows[2].row_style.direction, StackDirection::Horizontal);
}

#[test]
fn inverted_row_flips_items_and_reported_indices() {
    let mut grid: FlatGrid<Photo> =
        FlatGrid::new(GridConfig::new()).unwrap().inverted_row(true);
    let items = photos(3);

    grid.on_layout(355.0);
    let rows = grid.rows(&items);

    // Intra-row order flips; boundaries do not.
    let ids: Vec<u32> = rows[0].items.iter().map(|i| i.item.id).collect();
    assert_eq!(ids, vec![1, 0]);
    let indices: Vec<usize> = rows[0].items.iter().map(|i| i.flat_index).collect();
    assert_eq!(indices, vec![1, 0]);

    // A partial inverted row still reports the slot-based index.
    assert_eq!(rows[1].items[0].item.id, 2);
    assert_eq!(rows[1].items[0].flat_index, 3);
}

#[test]
fn row_keys_join_item_keys_in_render_order() {
    let mut grid: FlatGrid<Photo> = FlatGrid::new(GridConfig::new())
        .unwrap()
        .key_extractor(|photo: &Photo, _| photo.id.to_string());
    let items = photos(3);

    grid.on_layout(355.0);
    let keys: Vec<String> = grid.rows(&items).into_iter().map(|r| r.key).collect();
    assert_eq!(keys, vec!["0_1", "2"]);

    // Without an extractor the ordinal row index is the key.
    let mut grid: FlatGrid<Photo> = FlatGrid::new(GridConfig::new()).unwrap();
    grid.on_layout(355.0);
    let keys: Vec<String> = grid.rows(&items).into_iter().map(|r| r.key).collect();
    assert_eq!(keys, vec!["row_0", "row_1"]);
}

#[test]
fn observer_reports_each_distinct_items_per_row() {
    let reported = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&reported);

    let mut grid: FlatGrid<Photo> = FlatGrid::new(GridConfig::new())
        .unwrap()
        .on_items_per_row_change(move |n| sink.borrow_mut().push(n));
    let items = photos(4);

    grid.on_layout(355.0);
    grid.rows(&items);
    grid.rows(&items);
    assert_eq!(*reported.borrow(), vec![2]);

    grid.on_layout(720.0);
    grid.rows(&items);
    assert_eq!(*reported.borrow(), vec![2, 5]);
}

#[test]
fn static_dimension_ignores_layout_events() {
    let mut grid: FlatGrid<Photo> =
        FlatGrid::new(GridConfig::new().static_dimension(355.0)).unwrap();
    let items = photos(4);

    assert!(!grid.on_layout(1000.0));
    let rows = grid.rows(&items);
    assert_eq!(rows[0].items_per_row, 2);
}

#[test]
fn max_items_per_row_caps_wide_containers() {
    let mut grid: FlatGrid<Photo> =
        FlatGrid::new(GridConfig::new().max_items_per_row(3)).unwrap();
    let items = photos(7);

    grid.on_layout(2000.0);
    let rows = grid.rows(&items);
    let widths: Vec<usize> = rows.iter().map(|r| r.items.len()).collect();
    assert_eq!(widths, vec![3, 3, 1]);
}

#[test]
fn invalid_config_fails_at_construction() {
    let err = FlatGrid::<Photo>::new(GridConfig::new().item_dimension(0.0))
        .err()
        .unwrap();
    assert_eq!(err, GridConfigError::InvalidItemDimension(0.0));
}
