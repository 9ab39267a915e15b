//! Tests for the callback traits

use std::collections::BTreeMap;

use moulberry_utils::functional::{ExceptionalConsumer, ExceptionalSupplier, TriConsumer};

/// Walk a table, handing each cell to the consumer
fn for_each_cell<C>(rows: &[&[i32]], consumer: &mut C)
where
    C: TriConsumer<usize, usize, i32>,
{
    for (r, row) in rows.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            consumer.accept(r, c, value);
        }
    }
}

/// Pull values from a supplier until it fails
fn collect_until_err<T, E>(mut supplier: impl ExceptionalSupplier<T, E>) -> (Vec<T>, E) {
    let mut out = Vec::new();
    loop {
        match supplier.get() {
            Ok(value) => out.push(value),
            Err(e) => return (out, e),
        }
    }
}

/// Feed every item to the consumer, stopping at the first failure
fn feed<T, E>(items: Vec<T>, mut consumer: impl ExceptionalConsumer<T, E>) -> Result<usize, E> {
    let mut fed = 0;
    for item in items {
        consumer.accept(item)?;
        fed += 1;
    }
    Ok(fed)
}

#[test]
fn tri_consumer_receives_coordinates() {
    let mut cells = BTreeMap::new();
    let mut record = |r: usize, c: usize, value: i32| {
        cells.insert((r, c), value);
    };

    let rows: [&[i32]; 2] = [&[1, 2], &[3]];
    for_each_cell(&rows, &mut record);

    assert_eq!(cells.len(), 3);
    assert_eq!(cells[&(0, 1)], 2);
    assert_eq!(cells[&(1, 0)], 3);
}

#[test]
fn supplier_runs_until_error() {
    let mut n = 0;
    let (values, err) = collect_until_err(|| -> Result<i32, String> {
        n += 1;
        if n > 3 { Err(format!("exhausted after {}", n - 1)) } else { Ok(n * 10) }
    });

    assert_eq!(values, vec![10, 20, 30]);
    assert_eq!(err, "exhausted after 3");
}

#[test]
fn consumer_error_short_circuits() {
    let mut accepted = Vec::new();
    let result = feed(vec![1, 2, -3, 4], |n: i32| -> Result<(), i32> {
        if n < 0 {
            return Err(n);
        }
        accepted.push(n);
        Ok(())
    });

    assert_eq!(result, Err(-3));
    assert_eq!(accepted, vec![1, 2]);
}

#[test]
fn consumer_accepts_everything() {
    let result: Result<usize, ()> = feed(vec!["a", "b"], |_: &str| Ok(()));
    assert_eq!(result, Ok(2));
}
