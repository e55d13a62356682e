// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Batch labelling of a whole piece of furniture

use partmark_geometry::{BoxExtents, Point3, ShapeCategory};
use partmark_processing::{Config, Part, PartLabeler};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A bookcase: two sides, top, bottom, four shelves, back panel, plinth rail
fn bookcase() -> Vec<Part> {
    let sizes = [
        (0.018, 1.8, 0.3),
        (0.018, 1.8, 0.3),
        (0.8, 0.018, 0.3),
        (0.8, 0.018, 0.3),
        (0.764, 0.018, 0.28),
        (0.764, 0.018, 0.28),
        (0.764, 0.018, 0.28),
        (0.764, 0.018, 0.28),
        (0.8, 1.8, 0.004),
        (0.764, 0.07, 0.018),
    ];
    sizes
        .iter()
        .enumerate()
        .map(|(i, &(w, h, d))| Part::new(i as u32 + 1, BoxExtents::new(w, h, d).unwrap()))
        .collect()
}

#[test]
fn test_serial_and_parallel_agree() {
    init_tracing();
    let parts = bookcase();

    let serial = PartLabeler::new(Config {
        parallel_threshold: usize::MAX,
        ..Config::default()
    })
    .label_all(&parts);
    let parallel = PartLabeler::new(Config {
        parallel_threshold: 1,
        ..Config::default()
    })
    .label_all(&parts);

    assert!(serial.is_complete());
    assert_eq!(serial.labels, parallel.labels);

    let ids: Vec<u32> = parallel.labels.iter().map(|l| l.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());

    let by_id = serial.by_id();
    // Tall narrow sides come out as bars
    assert_eq!(by_id[&1].category, ShapeCategory::Bar);
    assert_eq!(by_id[&3].category, ShapeCategory::Board);
    assert_eq!(by_id[&9].category, ShapeCategory::Board);
    assert_eq!(by_id[&10].category, ShapeCategory::Bar);
}

#[test]
fn test_failures_do_not_abort_batch() {
    init_tracing();
    let mut parts = bookcase();
    parts.insert(
        3,
        Part::new(
            99,
            BoxExtents {
                width: 0.8,
                height: -0.018,
                depth: 0.3,
            },
        ),
    );

    let report = PartLabeler::default().label_all(&parts);
    assert!(!report.is_complete());
    assert_eq!(report.labels.len(), 10);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].id, 99);
    assert!(report.failures[0].message.contains("Invalid extents"));
}

#[test]
fn test_report_json() {
    let parts = vec![Part::new(1, BoxExtents::new(0.05, 0.72, 0.05).unwrap())];
    let json: serde_json::Value =
        serde_json::from_str(&PartLabeler::default().label_all(&parts).to_json().unwrap())
            .unwrap();

    let label = &json["labels"][0];
    assert_eq!(label["id"], 1);
    assert_eq!(label["category"], "bar");
    assert_eq!(label["axis"]["axis"], "y");
    assert_eq!(label["axis"]["end1"], "BottomEnd");
    assert_eq!(label["axis"]["end2"], "TopEnd");
    assert_eq!(json["failures"].as_array().map(|f| f.len()), Some(0));
}

#[test]
fn test_connection_between_two_parts() {
    init_tracing();
    let labeler = PartLabeler::default();

    // Shelf resting between the sides, its center 0.9 up
    #[rustfmt::skip]
    let shelf_matrix = [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.9, 0.0, 1.0,
    ];
    let shelf = Part::new(5, BoxExtents::new(0.764, 0.018, 0.28).unwrap())
        .with_transform(shelf_matrix);

    // Left side panel centered at x = -0.391
    #[rustfmt::skip]
    let side_matrix = [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        -0.391, 0.9, 0.0, 1.0,
    ];
    let side = Part::new(1, BoxExtents::new(0.018, 1.8, 0.3).unwrap())
        .with_transform(side_matrix);

    // The contact point where the shelf meets the side
    let contact = Point3::new(-0.382, 0.9, 0.0);

    let on_shelf = labeler.endpoint(&shelf, &contact).unwrap();
    assert_eq!(on_shelf.anchor, "<LeftFace_1/2Height_1/2Depth>");

    let on_side = labeler.endpoint(&side, &contact).unwrap();
    assert_eq!(on_side.anchor, "<RightFace_1/2Height_1/2Depth>");
}
