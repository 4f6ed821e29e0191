//! Load, merge, fill and write composed the way a pipeline step would.


use polars::prelude::LiteralValue;
use wrangle_operators::{
    fill_missing, load_table, merge, write_table, Format, JoinOptions, JoinType, LoadOptions,
    WriteOptions, KEEP_ALL,
};

use test_data_gen::{cleanup, create_temp_dir, customers, ints, orders, strs};

#[test]
fn test_csv_to_spreadsheet_pipeline() {
    let dir = create_temp_dir("pipeline");
    let customers_path = dir.join("customers.csv");
    let orders_path = dir.join("orders.bin");
    let out_path = dir.join("report.xlsx");

    write_table(&customers(), &customers_path, "csv", &WriteOptions::default()).unwrap();
    write_table(&orders(), &orders_path, "pickle", &WriteOptions::default()).unwrap();

    let left = load_table(&customers_path, "csv", &LoadOptions::default()).unwrap();
    let right = load_table(&orders_path, "pickle", &LoadOptions::default()).unwrap();

    let merged = merge(
        &left,
        &right,
        ("customer_id", "customer"),
        JoinType::Left,
        &["customer_id", "name", "order_id", "amount"],
        &JoinOptions::default(),
    )
    .unwrap();
    assert_eq!(merged.height(), 5);

    let filled = fill_missing(
        &merged,
        [
            ("amount", LiteralValue::Float64(0.0)),
            ("order_id", LiteralValue::Int64(-1)),
        ],
    )
    .unwrap();
    assert_eq!(filled.column("amount").unwrap().null_count(), 0);

    write_table(&filled, &out_path, Format::Spreadsheet, &WriteOptions::default()).unwrap();
    let report = load_table(&out_path, Format::Spreadsheet, &LoadOptions::default()).unwrap();

    assert_eq!(
        report.get_column_names_str(),
        vec!["customer_id", "name", "order_id", "amount"]
    );
    assert_eq!(ints(&report, "order_id"), ints(&filled, "order_id"));
    assert_eq!(strs(&report, "name"), strs(&filled, "name"));
    cleanup(&dir);
}

#[test]
fn test_key_error_stops_the_pipeline_before_writing() {
    let dir = create_temp_dir("pipeline-keyerr");
    let out_path = dir.join("never.csv");

    let result = merge(
        &customers(),
        &orders(),
        vec![("customer_id", "customer"), ("region", "city")],
        JoinType::Inner,
        KEEP_ALL,
        &JoinOptions::default(),
    )
    .and_then(|t| write_table(&t, &out_path, "csv", &WriteOptions::default()));

    let err = result.unwrap_err();
    assert!(err.is_key_error());
    assert_eq!(err.missing_keys(), vec!["region"]);
    assert!(!out_path.exists());
    cleanup(&dir);
}

#[test]
fn test_merge_after_csv_type_inference_matches_in_memory_merge() {
    let dir = create_temp_dir("pipeline-infer");
    let l = dir.join("l.csv");
    let r = dir.join("r.csv");
    write_table(&customers(), &l, "csv", &WriteOptions::default()).unwrap();
    write_table(&orders(), &r, "csv", &WriteOptions::default()).unwrap();

    let from_files = merge(
        &load_table(&l, "csv", &LoadOptions::default()).unwrap(),
        &load_table(&r, "csv", &LoadOptions::default()).unwrap(),
        ("customer_id", "customer"),
        JoinType::Right,
        KEEP_ALL,
        &JoinOptions::default(),
    )
    .unwrap();
    let in_memory = merge(
        &customers(),
        &orders(),
        ("customer_id", "customer"),
        JoinType::Right,
        KEEP_ALL,
        &JoinOptions::default(),
    )
    .unwrap();

    assert!(from_files.equals_missing(&in_memory));
    cleanup(&dir);
}
