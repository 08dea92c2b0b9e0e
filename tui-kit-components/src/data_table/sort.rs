//! Single-column client-side sorting

use std::cmp::Ordering;

use super::column::{CellValue, Column, Columns};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Glyph for a sortable column that is not the active one
pub const UNSORTED_GLYPH: &str = "↕";

/// The active column and its direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub column: String,
    pub direction: SortDirection,
}

/// Sort state of one table instance; `None` keeps input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<SortKey>,
}

impl SortState {
    pub fn active(&self) -> Option<&SortKey> {
        self.active.as_ref()
    }

    /// Direction of `column` if it is the active sort column
    pub fn direction_of(&self, column: &str) -> Option<SortDirection> {
        self.active
            .as_ref()
            .filter(|k| k.column == column)
            .map(|k| k.direction)
    }

    /// Apply a header activation
    ///
    /// A new column starts ascending; the active column flips direction.
    /// Non-sortable columns are ignored. Returns whether the state changed.
    pub fn activate<T>(&mut self, column: &Column<T>) -> bool {
        if !column.sortable {
            return false;
        }
        let direction = match self.direction_of(&column.key) {
            Some(current) => current.toggled(),
            None => SortDirection::Ascending,
        };
        self.active = Some(SortKey {
            column: column.key.clone(),
            direction,
        });
        true
    }
}

/// Compare two cells: null first, then native ordering
///
/// Numbers order numerically and precede text; text orders lexicographically.
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Null, CellValue::Null) => Ordering::Equal,
        (CellValue::Null, _) => Ordering::Less,
        (_, CellValue::Null) => Ordering::Greater,
        (CellValue::Number(x), CellValue::Number(y)) => x.total_cmp(y),
        (CellValue::Text(x), CellValue::Text(y)) => x.cmp(y),
        (CellValue::Number(_), CellValue::Text(_)) => Ordering::Less,
        (CellValue::Text(_), CellValue::Number(_)) => Ordering::Greater,
    }
}

/// Compare under a direction; nulls stay first either way
fn compare_directed(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    if a.is_null() || b.is_null() {
        return compare_cells(a, b);
    }
    match direction {
        SortDirection::Ascending => compare_cells(a, b),
        SortDirection::Descending => compare_cells(a, b).reverse(),
    }
}

/// Indices into `data` in display order
///
/// Stable: rows with equal keys keep their input order. A sort key that no
/// longer names a sortable column yields input order. `data` is untouched.
pub fn sort_order<T>(data: &[T], columns: &Columns<T>, sort: &SortState) -> Vec<usize> {
    let mut order: Vec<usize> = (0..data.len()).collect();

    let Some(key) = sort.active() else {
        return order;
    };
    let Some(column) = columns.by_key(&key.column).filter(|c| c.sortable) else {
        return order;
    };

    let values: Vec<CellValue> = data.iter().map(|record| column.value(record)).collect();
    order.sort_by(|&a, &b| compare_directed(&values[a], &values[b], key.direction));
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        age: Option<u32>,
    }

    fn row(name: &'static str, age: Option<u32>) -> Row {
        Row { name, age }
    }

    fn columns() -> Columns<Row> {
        Columns::new(vec![
            Column::new("name", "Name", |r: &Row| r.name.into()).sortable(),
            Column::new("age", "Age", |r: &Row| r.age.into()).sortable(),
            Column::new("note", "Note", |_: &Row| CellValue::Null),
        ])
        .unwrap()
    }

    fn names(data: &[Row], order: &[usize]) -> Vec<&'static str> {
        order.iter().map(|&i| data[i].name).collect()
    }

    #[test]
    fn test_activate_cycles_direction() {
        let cols = columns();
        let mut sort = SortState::default();

        assert!(sort.activate(&cols[0]));
        assert_eq!(sort.direction_of("name"), Some(SortDirection::Ascending));
        assert!(sort.activate(&cols[0]));
        assert_eq!(sort.direction_of("name"), Some(SortDirection::Descending));
        assert!(sort.activate(&cols[0]));
        assert_eq!(sort.direction_of("name"), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_switching_column_restarts_ascending() {
        let cols = columns();
        let mut sort = SortState::default();
        sort.activate(&cols[0]);
        sort.activate(&cols[0]);
        sort.activate(&cols[1]);

        assert_eq!(sort.direction_of("name"), None);
        assert_eq!(sort.direction_of("age"), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_non_sortable_is_noop() {
        let cols = columns();
        let mut sort = SortState::default();
        sort.activate(&cols[1]);
        let before = sort.clone();

        assert!(!sort.activate(&cols[2]));
        assert_eq!(sort, before);
    }

    #[test]
    fn test_no_sort_keeps_input_order() {
        let data = vec![row("C", Some(30)), row("A", Some(20)), row("B", Some(25))];
        let order = sort_order(&data, &columns(), &SortState::default());
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_name_scenario() {
        let data = vec![row("C", Some(30)), row("A", Some(20)), row("B", Some(25))];
        let cols = columns();
        let mut sort = SortState::default();

        sort.activate(&cols[0]);
        assert_eq!(names(&data, &sort_order(&data, &cols, &sort)), ["A", "B", "C"]);

        sort.activate(&cols[0]);
        assert_eq!(names(&data, &sort_order(&data, &cols, &sort)), ["C", "B", "A"]);

        // input untouched
        assert_eq!(data[0].name, "C");
    }

    #[test]
    fn test_nulls_first_both_directions() {
        let data = vec![
            row("a", Some(3)),
            row("b", None),
            row("c", Some(1)),
            row("d", None),
        ];
        let cols = columns();
        let mut sort = SortState::default();

        sort.activate(&cols[1]);
        assert_eq!(names(&data, &sort_order(&data, &cols, &sort)), ["b", "d", "c", "a"]);

        sort.activate(&cols[1]);
        assert_eq!(names(&data, &sort_order(&data, &cols, &sort)), ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let data = vec![
            row("x", Some(2)),
            row("y", Some(1)),
            row("z", Some(2)),
            row("w", Some(1)),
        ];
        let cols = columns();
        let mut sort = SortState::default();

        sort.activate(&cols[1]);
        assert_eq!(names(&data, &sort_order(&data, &cols, &sort)), ["y", "w", "x", "z"]);

        sort.activate(&cols[1]);
        let desc = sort_order(&data, &cols, &sort);
        assert_eq!(names(&data, &desc), ["x", "z", "y", "w"]);

        let single_desc = SortState {
            active: Some(SortKey {
                column: "age".into(),
                direction: SortDirection::Descending,
            }),
        };
        assert_eq!(sort_order(&data, &cols, &single_desc), desc);
    }

    #[test]
    fn test_ascending_is_idempotent() {
        let data = vec![row("b", Some(2)), row("a", Some(2)), row("c", None)];
        let cols = columns();
        let mut sort = SortState::default();
        sort.activate(&cols[1]);

        let once = sort_order(&data, &cols, &sort);
        let sorted: Vec<Row> = once.iter().map(|&i| data[i].clone()).collect();
        let twice = sort_order(&sorted, &cols, &sort);
        assert_eq!(twice, vec![0, 1, 2]);
    }

    #[test]
    fn test_unknown_sort_column_keeps_order() {
        let data = vec![row("b", None), row("a", None)];
        let sort = SortState {
            active: Some(SortKey {
                column: "gone".into(),
                direction: SortDirection::Ascending,
            }),
        };
        assert_eq!(sort_order(&data, &columns(), &sort), vec![0, 1]);
    }

    #[test]
    fn test_compare_mixed() {
        assert_eq!(
            compare_cells(&CellValue::Number(9.0), &CellValue::Text("1".into())),
            Ordering::Less
        );
        assert_eq!(
            compare_cells(&CellValue::Text("B".into()), &CellValue::Text("a".into())),
            Ordering::Less
        );
    }
}
