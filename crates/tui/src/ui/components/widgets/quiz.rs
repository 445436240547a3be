//! Knowledge-check quiz widget.
//!
//! One question, answerable once. After the answer the correct option is
//! highlighted, a wrong pick is marked, and the explanation for the chosen
//! option is shown. The answer is view state only and is not persisted.

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};
use trailhead_types::{Accent, Quiz};

use crate::ui::theme::{helpers, Theme};

use super::{wrap, WidgetLines};

#[derive(Debug, Default)]
pub struct QuizState {
    selected: Option<usize>,
}

impl QuizState {
    /// Record the user's pick. Once answered, further picks are ignored;
    /// the options behave like disabled controls.
    pub fn answer(&mut self, index: usize, option_count: usize) {
        if self.selected.is_none() && index < option_count {
            self.selected = Some(index);
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }
}

pub fn lines(
    quiz: &Quiz,
    state: &QuizState,
    theme: &Theme,
    width: usize,
    cursor: Option<usize>,
) -> WidgetLines {
    let mut out = WidgetLines::default();

    out.lines.push(helpers::caption(theme, Some(Accent::Amber), "Knowledge Check"));
    for part in wrap(&quiz.question, width) {
        out.lines.push(Line::from(Span::styled(
            part,
            theme.text_style().add_modifier(Modifier::BOLD),
        )));
    }
    out.lines.push(Line::default());

    for (idx, option) in quiz.options.iter().enumerate() {
        let mut style = theme.text_secondary_style();
        let mut marker = "( ) ";
        if let Some(sel) = state.selected() {
            if idx == quiz.correct {
                style = theme.accent_style(Accent::Green);
                marker = "(✓) ";
            } else if idx == sel {
                style = theme.accent_style(Accent::Red);
                marker = "(✗) ";
            } else {
                style = theme.text_dim_style();
            }
        }
        if cursor == Some(idx) && !state.is_answered() {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }

        let wrapped = wrap(option, width.saturating_sub(4));
        out.entry_lines.push(out.lines.len());
        for (row, part) in wrapped.iter().enumerate() {
            let prefix = if row == 0 { marker } else { "    " };
            out.lines
                .push(Line::from(vec![Span::raw(prefix), Span::styled(part.clone(), style)]));
        }
    }

    if let Some(sel) = state.selected() {
        let correct = sel == quiz.correct;
        let accent = if correct { Accent::Green } else { Accent::Red };
        let mark = if correct { "✓ " } else { "✗ " };
        out.lines.push(Line::default());
        if let Some(explanation) = quiz.explanations.get(sel) {
            for (row, part) in wrap(explanation, width.saturating_sub(2)).iter().enumerate() {
                let prefix = if row == 0 { mark } else { "  " };
                out.lines.push(Line::from(vec![
                    Span::styled(prefix.to_string(), theme.accent_style(accent)),
                    Span::styled(part.clone(), theme.accent_style(accent)),
                ]));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quiz() -> Quiz {
        Quiz {
            question: "Pick b".into(),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct: 1,
            explanations: vec!["no".into(), "yes".into(), "no".into()],
        }
    }

    #[test]
    fn first_answer_sticks() {
        let quiz = sample_quiz();
        let mut state = QuizState::default();
        state.answer(2, quiz.options.len());
        assert_eq!(state.selected(), Some(2));
        state.answer(1, quiz.options.len());
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn out_of_range_answer_is_ignored() {
        let quiz = sample_quiz();
        let mut state = QuizState::default();
        state.answer(7, quiz.options.len());
        assert!(!state.is_answered());
    }

    #[test]
    fn answered_quiz_shows_explanation_for_the_pick() {
        let quiz = sample_quiz();
        let mut state = QuizState::default();
        state.answer(0, quiz.options.len());

        let rendered = lines(&quiz, &state, &Theme::default(), 60, None);
        let text: String = rendered
            .lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.clone()))
            .collect();
        assert!(text.contains("no"), "explanation for chosen option shown");
        assert_eq!(rendered.entry_lines.len(), 3);
    }
}
