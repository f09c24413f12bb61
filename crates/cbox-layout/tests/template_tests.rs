use cbox_layout::layout::{Layer, PanelKind, Primitive};
use cbox_layout::*;

const EPSILON: f32 = 1e-3;

fn options_for(length: f32, width: f32, height: f32, thickness: f32) -> TemplateOptions {
    TemplateOptions {
        spec: BoxSpec::new(length, width, height, thickness),
        ..Default::default()
    }
}

fn sample_options() -> Vec<TemplateOptions> {
    vec![
        TemplateOptions::default(),
        options_for(20.0, 20.0, 60.0, 1.0),
        options_for(300.0, 40.0, 10.0, 6.0),
        options_for(50.0, 200.0, 25.0, 0.0),
        TemplateOptions {
            padding_mm: 12.5,
            ..options_for(120.0, 80.0, 45.0, 3.0)
        },
        options_for(94.0, 90.0, 2720.99, 4.3),
        options_for(3000.0, 2500.0, 4000.0, 7.7),
    ]
}

/// Coordinate tolerance for a template, growing with its size
fn tolerance(template: &Template) -> f32 {
    let extent = template
        .canvas
        .total_width
        .max(template.canvas.total_height);
    EPSILON.max(extent * 1e-5)
}

#[test]
fn test_generate_default_template() {
    let template = generate_template(&TemplateOptions::default()).unwrap();

    assert_eq!(template.panels.len(), 3);
    assert_eq!(template.panels[0].kind, PanelKind::Strip);
    assert_eq!(template.strip(), Some(&template.panels[0]));
    assert_eq!(template.sides().count(), 2);
    assert_eq!(template.panels[1].kind, PanelKind::Side(0));
    assert_eq!(template.panels[2].kind, PanelKind::Side(1));
    assert_eq!(template.canvas.total_width, 247.0);
    assert_eq!(template.canvas.total_height, 292.0);
    assert_eq!(template.padding_mm, 5.0);
}

#[test]
fn test_invalid_spec_produces_no_template() {
    let result = generate_template(&options_for(94.0, 90.0, 0.0, 4.0));
    assert!(matches!(
        result,
        Err(CboxError::InvalidDimension { name: "height", .. })
    ));

    let result = generate_template(&TemplateOptions {
        padding_mm: -3.0,
        ..Default::default()
    });
    assert!(matches!(result, Err(CboxError::Config(_))));
}

#[test]
fn test_every_point_inside_canvas() {
    for options in sample_options() {
        let template = generate_template(&options).unwrap();
        let canvas = template.canvas.bounds();
        let eps = tolerance(&template);

        for primitive in template.primitives() {
            for p in primitive.points() {
                assert!(p.x.is_finite() && p.y.is_finite());
                assert!(
                    template.canvas.contains(p)
                        || (p.x >= canvas.x - eps
                            && p.x <= canvas.right() + eps
                            && p.y >= canvas.y - eps
                            && p.y <= canvas.bottom() + eps),
                    "{:?} outside canvas for {:?}",
                    p,
                    options.spec
                );
            }
        }
    }
}

#[test]
fn test_primitives_stay_inside_their_panel() {
    for options in sample_options() {
        let template = generate_template(&options).unwrap();
        let eps = tolerance(&template);

        for panel in &template.panels {
            let b = panel.bounds;
            for primitive in &panel.primitives {
                for p in primitive.points() {
                    assert!(
                        p.x >= b.x - eps
                            && p.x <= b.right() + eps
                            && p.y >= b.y - eps
                            && p.y <= b.bottom() + eps,
                        "{:?} outside {:?} panel for {:?}",
                        p,
                        panel.kind,
                        options.spec
                    );
                }
            }
        }
    }
}

#[test]
fn test_panels_do_not_overlap() {
    for options in sample_options() {
        let template = generate_template(&options).unwrap();
        let eps = tolerance(&template);

        for (i, a) in template.panels.iter().enumerate() {
            for b in &template.panels[i + 1..] {
                let gap = a.bounds.gap_to(&b.bounds);
                assert!(
                    gap >= options.padding_mm - eps,
                    "{:?} and {:?} are {} mm apart",
                    a.kind,
                    b.kind,
                    gap
                );
                assert!(!a.bounds.intersects(&b.bounds));
            }
        }
    }
}

#[test]
fn test_tall_side_column_grows_canvas() {
    // Side stack: 2 * 60 + 2 * 2 + 10 = 134, two of them plus padding
    let template = generate_template(&options_for(20.0, 20.0, 60.0, 1.0)).unwrap();
    let dims = &template.dimensions;

    assert!(2.0 * dims.side_stack_height + 5.0 > dims.strip_height);
    assert!((template.canvas.total_height - 283.0).abs() < EPSILON);
}

#[test]
fn test_folds_flag_controls_fold_layer() {
    let with = generate_template(&TemplateOptions::default()).unwrap();
    let without = generate_template(&TemplateOptions {
        folds: false,
        ..Default::default()
    })
    .unwrap();

    let folds = |t: &Template| {
        t.primitives()
            .filter(|p| p.layer() == Some(Layer::Fold))
            .count()
    };
    assert_eq!(folds(&with), 8);
    assert_eq!(folds(&without), 0);

    // Nothing else changes
    let non_fold = |t: &Template| {
        t.primitives()
            .filter(|p| p.layer() != Some(Layer::Fold))
            .cloned()
            .collect::<Vec<_>>()
    };
    assert_eq!(non_fold(&with), non_fold(&without));
}

#[test]
fn test_labels_flag_controls_text() {
    let without = generate_template(&TemplateOptions {
        labels: false,
        ..Default::default()
    })
    .unwrap();
    assert!(
        !without
            .primitives()
            .any(|p| matches!(p, Primitive::Label { .. }))
    );

    let with = generate_template(&TemplateOptions::default()).unwrap();

    // Cut, score and fold layers are unaffected
    let non_label = |t: &Template| {
        t.primitives()
            .filter(|p| p.layer().is_some())
            .cloned()
            .collect::<Vec<_>>()
    };
    assert_eq!(non_label(&with), non_label(&without));

    let texts: Vec<&str> = with
        .primitives()
        .filter_map(|p| match p {
            Primitive::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        texts,
        vec![
            "Main Body (outside dims 282.0 x 110.0 mm)",
            "Side Panel (outside dims 102.0 x 122.0 mm) #1",
            "Side Panel (outside dims 102.0 x 122.0 mm) #2",
        ]
    );
}

#[test]
fn test_generation_is_deterministic() {
    for options in sample_options() {
        let a = generate_template(&options).unwrap();
        let b = generate_template(&options).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            render_template(&a, OutputFormat::Svg).unwrap(),
            render_template(&b, OutputFormat::Svg).unwrap()
        );
    }
}

#[test]
fn test_zero_thickness() {
    let template = generate_template(&options_for(94.0, 90.0, 38.0, 0.0)).unwrap();
    let dims = &template.dimensions;

    assert_eq!(dims.peel_height, 0.0);
    assert_eq!(dims.base_length, 94.0);
    assert_eq!(dims.base_width, 90.0);
    assert!(
        template
            .primitives()
            .flat_map(|p| p.points())
            .all(|p| p.x.is_finite() && p.y.is_finite())
    );
}

#[test]
fn test_side_panels_are_identical_apart_from_position() {
    let template = generate_template(&TemplateOptions {
        labels: false,
        ..Default::default()
    })
    .unwrap();
    let sides: Vec<_> = template.sides().collect();
    assert_eq!(sides.len(), 2);

    let dy = sides[1].bounds.y - sides[0].bounds.y;
    assert_eq!(sides[0].primitives.len(), sides[1].primitives.len());
    for (a, b) in sides[0].primitives.iter().zip(&sides[1].primitives) {
        for (pa, pb) in a.points().iter().zip(b.points()) {
            assert!((pa.x - pb.x).abs() < EPSILON);
            assert!((pa.y + dy - pb.y).abs() < EPSILON);
        }
    }
}
