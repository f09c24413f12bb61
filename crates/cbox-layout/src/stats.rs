use crate::layout::Layer;
use crate::template::Template;
use crate::types::*;

/// Calculate statistics for a generated template
pub fn calculate_statistics(template: &Template) -> TemplateStatistics {
    let dims = &template.dimensions;

    let mut stats = TemplateStatistics {
        strip_outside_mm: (dims.strip_width, dims.strip_height),
        side_outside_mm: (dims.side_outer_width, dims.side_stack_height),
        side_panels: template.sides().count(),
        canvas_mm: (template.canvas.total_width, template.canvas.total_height),
        cut_primitives: 0,
        score_primitives: 0,
        fold_primitives: 0,
        labels: 0,
        cut_length_mm: 0.0,
        score_length_mm: 0.0,
        fold_length_mm: 0.0,
    };

    for primitive in template.primitives() {
        let length = primitive.stroke_length();
        match primitive.layer() {
            Some(Layer::Cut) => {
                stats.cut_primitives += 1;
                stats.cut_length_mm += length;
            }
            Some(Layer::Score) => {
                stats.score_primitives += 1;
                stats.score_length_mm += length;
            }
            Some(Layer::Fold) => {
                stats.fold_primitives += 1;
                stats.fold_length_mm += length;
            }
            None => stats.labels += 1,
        }
    }

    stats
}
