use cbox_layout::*;

fn default_stats() -> TemplateStatistics {
    let template = generate_template(&TemplateOptions::default()).unwrap();
    calculate_statistics(&template)
}

#[test]
fn test_statistics_dimensions() {
    let stats = default_stats();

    assert_eq!(stats.strip_outside_mm, (110.0, 282.0));
    assert_eq!(stats.side_outside_mm, (122.0, 102.0));
    assert_eq!(stats.side_panels, 2);
    assert_eq!(stats.canvas_mm, (247.0, 292.0));
}

#[test]
fn test_statistics_primitive_counts() {
    let stats = default_stats();

    // Strip outline plus eighteen outline segments per side panel
    assert_eq!(stats.cut_primitives, 1 + 2 * 18);
    // Eight strip scores, then three lines and a face rectangle per side
    assert_eq!(stats.score_primitives, 8 + 2 * 4);
    assert_eq!(stats.fold_primitives, 2 + 2 * 3);
    assert_eq!(stats.labels, 3);
}

#[test]
fn test_statistics_lengths() {
    let stats = default_stats();

    // 8 x 110 across the strip; per side 2 x 38 + 90 + the 90 x 38 face
    assert!((stats.score_length_mm - 1724.0).abs() < 0.01);
    // 2 x 106 on the strip; per side 2 x 46 + 106
    assert!((stats.fold_length_mm - 608.0).abs() < 0.01);
    // At least the strip outline
    assert!(stats.cut_length_mm > 2.0 * (110.0 + 282.0));
}

#[test]
fn test_statistics_without_optional_layers() {
    let options = TemplateOptions {
        labels: false,
        folds: false,
        ..Default::default()
    };
    let template = generate_template(&options).unwrap();
    let stats = calculate_statistics(&template);

    assert_eq!(stats.fold_primitives, 0);
    assert_eq!(stats.fold_length_mm, 0.0);
    assert_eq!(stats.labels, 0);
    assert_eq!(stats.cut_primitives, 37);
    assert_eq!(stats.score_primitives, 16);
}
