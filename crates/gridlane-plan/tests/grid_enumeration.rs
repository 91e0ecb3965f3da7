use gridlane_plan::{Axis, AxisValue, ParameterGrid};

fn int_axis(name: &str, values: &[i64]) -> Axis {
    Axis::new(name, values.iter().map(|v| AxisValue::Int(*v)).collect())
}

fn text_axis(name: &str, values: &[&str]) -> Axis {
    Axis::new(
        name,
        values
            .iter()
            .map(|v| AxisValue::Text(v.to_string()))
            .collect(),
    )
}

#[test]
fn total_points_is_product_of_axis_lengths() {
    let grid = ParameterGrid::new(vec![
        int_axis("a", &[1, 2, 3]),
        text_axis("b", &["x", "y", "z", "w"]),
        int_axis("c", &[0, 1]),
    ]);
    assert_eq!(grid.total_points(), 24);
    assert_eq!(grid.enumerate().count(), 24);
}

#[test]
fn enumeration_is_nested_with_first_axis_slowest() {
    let grid = ParameterGrid::new(vec![int_axis("a", &[1, 2]), text_axis("b", &["x", "y"])]);
    let visited: Vec<(u32, String, String)> = grid
        .enumerate()
        .map(|(id, point)| {
            let a = point.value_for("a").expect("a bound").canonical_text().expect("text");
            let b = point.value_for("b").expect("b bound").canonical_text().expect("text");
            (id.as_raw(), a, b)
        })
        .collect();
    assert_eq!(
        visited,
        vec![
            (1, "1".to_string(), "x".to_string()),
            (2, "1".to_string(), "y".to_string()),
            (3, "2".to_string(), "x".to_string()),
            (4, "2".to_string(), "y".to_string()),
        ]
    );
}

#[test]
fn job_ids_are_dense_and_one_based() {
    let grid = ParameterGrid::new(vec![int_axis("a", &[1, 2, 3]), int_axis("b", &[4, 5])]);
    let ids: Vec<u32> = grid.enumerate().map(|(id, _)| id.as_raw()).collect();
    assert_eq!(ids, (1..=6).collect::<Vec<u32>>());
}

#[test]
fn empty_axis_yields_zero_points_without_panicking() {
    let grid = ParameterGrid::new(vec![int_axis("a", &[1, 2]), Axis::new("b", Vec::new())]);
    assert_eq!(grid.total_points(), 0);
    assert_eq!(grid.enumerate().count(), 0);
}

#[test]
fn no_axes_yields_one_empty_point() {
    let grid = ParameterGrid::new(Vec::new());
    assert_eq!(grid.total_points(), 1);
    let points: Vec<_> = grid.enumerate().collect();
    assert_eq!(points.len(), 1);
    let (id, point) = &points[0];
    assert_eq!(id.as_raw(), 1);
    assert!(point.bindings().is_empty());
}

#[test]
fn enumerator_reports_exact_size() {
    let grid = ParameterGrid::new(vec![int_axis("a", &[1, 2]), int_axis("b", &[1, 2, 3])]);
    let mut iter = grid.enumerate();
    assert_eq!(iter.len(), 6);
    iter.next();
    assert_eq!(iter.len(), 5);
}

#[test]
fn linspace_covers_both_endpoints() {
    let axis = Axis::linspace("t_max", 10.0, 70.0, 21);
    assert_eq!(axis.len(), 21);
    assert_eq!(axis.values.first(), Some(&AxisValue::Number(10.0)));
    assert_eq!(axis.values.last(), Some(&AxisValue::Number(70.0)));
}

#[test]
fn linspace_degenerate_counts() {
    assert!(Axis::linspace("q", 0.0, 1.0, 0).is_empty());
    let single = Axis::linspace("q", 0.25, 1.0, 1);
    assert_eq!(single.values, vec![AxisValue::Number(0.25)]);
}

#[test]
fn zero_padding_matches_width() {
    let grid = ParameterGrid::new(vec![int_axis("a", &[7])]);
    let (id, _) = grid.enumerate().next().expect("one point");
    assert_eq!(id.zero_padded(3), "001");
    assert_eq!(id.zero_padded(5), "00001");
}
