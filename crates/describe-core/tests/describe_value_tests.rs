#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::collections::{BTreeMap, HashMap};

use common::{describer, Mixed, Obj};
use describe_core::model::{Complex, Data, Field, TypeDesc, Value};
use describe_core::{DescribeConfig, Describer};

#[test]
fn test_scalar_literals() {
    let d = describer();
    assert_eq!(d.describe(&true), "true");
    assert_eq!(d.describe(&1i8), "int8(1)");
    assert_eq!(d.describe("abc"), "\"abc\"");
    assert_eq!(d.describe(&-7isize), "-7");
    assert_eq!(d.describe(&1_000_000.0f64), "float64(1e+06)");
    assert_eq!(d.describe(&0.000_01f64), "float64(1e-05)");
    assert_eq!(d.describe(&f64::NAN), "float64(NaN)");
    assert_eq!(d.describe(&Complex::new(1.5f32, 0.0)), "complex64(1.5)");
}

#[test]
fn test_slices() {
    let d = describer();
    assert_eq!(d.describe(&vec![1isize, 2]), "[]int{\n\t1,\n\t2,\n}");
    assert_eq!(d.describe(&Vec::<isize>::new()), "[]int{}");
    assert_eq!(
        d.describe(&vec![vec![1u8], vec![]]),
        "[][]uint8{\n\t[]uint8{\n\t\tuint8(1),\n\t},\n\t[]uint8{},\n}"
    );
}

#[test]
fn test_map_order_is_independent_of_insertion() {
    let d = describer();

    // GIVEN a map built in reverse key order
    let mut reversed = HashMap::new();
    reversed.insert(3isize, 4isize);
    reversed.insert(1isize, 2isize);

    // THEN entries render in ascending key order
    assert_eq!(d.describe(&reversed), "map[int]int{\n\t1: 2,\n\t3: 4,\n}");
}

#[test]
fn test_string_keys_sort_bytewise() {
    let mut m = HashMap::new();
    for key in ["b", "B", "a", "ab"] {
        m.insert(key.to_string(), key.len() as u8);
    }
    assert_eq!(
        describer().describe(&m),
        "map[string]uint8{\n\t\"B\": uint8(1),\n\t\"a\": uint8(1),\n\t\"ab\": uint8(2),\n\t\"b\": uint8(1),\n}"
    );
}

#[test]
fn test_btree_and_hash_maps_describe_alike() {
    let d = describer();
    let hashed: HashMap<i64, bool> = [(5, true), (-2, false)].into_iter().collect();
    let ordered: BTreeMap<i64, bool> = [(5, true), (-2, false)].into_iter().collect();
    assert_eq!(d.describe(&hashed), d.describe(&ordered));
    assert_eq!(
        d.describe(&ordered),
        "map[int64]bool{\n\tint64(-2): false,\n\tint64(5): true,\n}"
    );
}

#[test]
fn test_unexported_field_is_redacted() {
    let value = Mixed { A: 1, a: 2 };
    assert_eq!(describer().describe(&value), "Mixed{\n\tA: 1,\n\ta: ...,\n}");
}

#[test]
fn test_named_struct_inside_containers() {
    let d = describer();
    let objs = vec![Obj { field: 1 }];
    assert_eq!(d.describe(&objs), "[]Obj{\n\tObj{\n\t\tfield: 1,\n\t},\n}");
    assert_eq!(
        d.describe(&Some(Box::new(Obj { field: 2 }))),
        "&Obj{\n\t\tfield: 2,\n\t}"
    );
}

fn first_callable() -> isize {
    1
}

fn second_callable() -> isize {
    2
}

#[test]
fn test_callables_are_labelled_in_first_seen_order() {
    let d = describer();
    let first = first_callable as fn() -> isize;
    let second = second_callable as fn() -> isize;

    assert_eq!(d.describe(&first), "func () int {func0}");
    assert_eq!(d.describe(&second), "func () int {func1}");
    assert_eq!(d.describe(&first), "func () int {func0}");
}

#[test]
fn test_clones_share_labels_but_fresh_describers_do_not() {
    let d = describer();
    let clone = d.clone();
    let second = second_callable as fn() -> isize;

    assert_eq!(d.describe(&second), "func () int {func0}");
    assert_eq!(clone.describe(&second), "func () int {func0}");
    assert_eq!(clone.registry().len(), 1);

    let fresh = describer();
    let first = first_callable as fn() -> isize;
    assert_eq!(fresh.describe(&first), "func () int {func0}");
}

#[test]
fn test_custom_indent_unit() {
    let d = Describer::new(DescribeConfig::default().with_indent("  "));
    assert_eq!(d.describe(&vec![vec![1isize]]), "[][]int{\n  []int{\n    1,\n  },\n}");
}

#[test]
fn test_hand_built_values() {
    let d = describer();
    let point = TypeDesc::structure(vec![
        Field::new("X", TypeDesc::int()),
        Field::new("Y", TypeDesc::int()),
    ])
    .named("geo", "Point");

    let value = Value::new(point, Data::Struct(vec![Data::Int(1), Data::Int(2)]));
    assert_eq!(d.describe_value(&value), "geo.Point{\n\tX: 1,\n\tY: 2,\n}");

    let own = Describer::new(DescribeConfig::default().with_namespace("geo"));
    assert_eq!(own.describe_value(&value), "Point{\n\tX: 1,\n\tY: 2,\n}");

    assert_eq!(d.describe_value(&Value::nil()), "nil");
}

#[test]
fn test_nil_collections_render_empty() {
    let d = describer();
    let slice = Value::new(TypeDesc::slice(TypeDesc::int()), Data::Nil);
    let map = Value::new(TypeDesc::map(TypeDesc::string(), TypeDesc::int()), Data::Nil);
    assert_eq!(d.describe_value(&slice), "[]int{}");
    assert_eq!(d.describe_value(&map), "map[string]int{}");
}
