//! Text rendering of a strength assessment as a coloured bar.

use crate::strength::{StrengthAssessment, StrengthLabel, MAX_SCORE};
use colored::{Color, Colorize};

pub const DEFAULT_WIDTH: usize = 20;

const FILLED: char = '█';
const EMPTY: char = '░';

pub fn tier_color(label: StrengthLabel) -> Color {
    match label {
        StrengthLabel::Weak => Color::Red,
        StrengthLabel::Medium => Color::Yellow,
        StrengthLabel::Strong => Color::Green,
    }
}

/// Number of filled cells for `score` on a bar of `width` cells, rounded.
pub fn filled_cells(score: u8, width: usize) -> usize {
    let score = usize::from(score.min(MAX_SCORE));
    let max = usize::from(MAX_SCORE);
    // Split `width` so no intermediate product can overflow.
    width / max * score + (width % max * score + max / 2) / max
}

/// The uncoloured bar, e.g. `████░░░░`.
pub fn render_bar(assessment: &StrengthAssessment, width: usize) -> String {
    let filled = filled_cells(assessment.score, width);
    let mut bar = String::with_capacity(width * FILLED.len_utf8());
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(width - filled));
    bar
}

pub fn render(assessment: &StrengthAssessment, width: usize) -> String {
    let color = tier_color(assessment.label);
    format!(
        "{} {}",
        render_bar(assessment, width).color(color),
        assessment.label.as_str().color(color).bold()
    )
}
