use life_field::{CellUpdate, Field, Pattern};
use proptest::prelude::*;

fn field_from(living: &[(usize, usize)], rows: usize, columns: usize) -> Field {
    let mut field = Field::new(rows, columns);
    for &(row, column) in living {
        field.flip_cell(row as isize, column as isize);
    }
    field
}

proptest! {
    #[test]
    fn flipping_twice_restores_the_cell(
        rows in 1usize..12,
        columns in 1usize..12,
        seed_cells in prop::collection::vec((0usize..12, 0usize..12), 0..20),
        target in (0usize..12, 0usize..12),
    ) {
        let living: Vec<_> = seed_cells
            .into_iter()
            .filter(|&(r, c)| r < rows && c < columns)
            .collect();
        let mut field = field_from(&living, rows, columns);
        let (row, column) = (target.0 % rows, target.1 % columns);
        let original = field.get(row, column);

        let first = field.flip_cell(row as isize, column as isize).unwrap();
        prop_assert_eq!(first.alive, !original);
        let second = field.flip_cell(row as isize, column as isize).unwrap();
        prop_assert_eq!(second, CellUpdate::new(row, column, original));
        prop_assert_eq!(field.get(row, column), original);
    }

    #[test]
    fn resize_keeps_overlapping_cells(
        seed_cells in prop::collection::vec((0usize..10, 0usize..10), 0..30),
        new_rows in 0usize..15,
        new_columns in 0usize..15,
    ) {
        let mut field = field_from(&[], 10, 10);
        for &(row, column) in &seed_cells {
            field.set_pattern(&[(0, 0)], row as isize, column as isize);
        }
        let before = field.clone();

        field.resize(new_rows, new_columns);
        prop_assert_eq!(field.rows(), new_rows);
        prop_assert_eq!(field.columns(), new_columns);
        for (row, column, alive) in field.cells() {
            let expected = row < 10 && column < 10 && before.get(row, column);
            prop_assert_eq!(alive, expected);
        }
    }
}

#[test]
fn growing_after_shrinking_yields_dead_cells() {
    let mut field = Field::new(4, 4);
    field.randomize(1.0);

    field.resize(2, 3);
    assert_eq!(field.living_count(), 6);

    field.resize(5, 5);
    for (row, column, alive) in field.cells() {
        assert_eq!(alive, row < 2 && column < 3, "cell ({}, {})", row, column);
    }
}

#[test]
fn glider_crosses_a_wrapped_field() {
    let glider = Pattern::parse("!Name: Glider\n.O.\n..O\nOOO\n").unwrap();
    let mut field = Field::new(8, 8);
    field.set_pattern(&glider, 4, 4);
    let start = field.living_cells();

    // A glider moves one cell diagonally every four generations
    for _ in 0..32 {
        field.step(true, false);
    }
    assert_eq!(field.living_cells(), start);
    assert_eq!(field.living_count(), 5);
}

#[test]
fn set_pattern_skips_offsets_outside_the_field() {
    let row = Pattern::from_offsets((-4..=5).map(|c| (0, c)).collect());
    let mut field = Field::new(3, 4);

    let updates = field.set_pattern(&row, 1, 0);
    assert_eq!(
        updates,
        (0..4).map(|c| CellUpdate::new(1, c, true)).collect::<Vec<_>>()
    );
    assert_eq!(field.living_count(), 4);

    assert!(field.set_pattern(&row, 3, 0).is_empty());
    assert!(field.set_pattern(&row, -1, 0).is_empty());
}

#[test]
fn blinker_oscillates_without_wrap() {
    let mut field = field_from(&[(3, 4), (4, 4), (5, 4)], 9, 9);

    field.step(false, false);
    assert_eq!(field.living_cells(), vec![(4, 3), (4, 4), (4, 5)]);

    field.step(false, false);
    assert_eq!(field.living_cells(), vec![(3, 4), (4, 4), (5, 4)]);
}
