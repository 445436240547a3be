//! Highlighted-aside widget (static).

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};
use trailhead_types::Callout;

use crate::ui::theme::{helpers, Theme};

use super::{wrap, WidgetLines};

pub fn lines(callout: &Callout, theme: &Theme, width: usize) -> WidgetLines {
    let accent = callout.kind.accent();
    let mut out = Vec::new();

    out.push(Line::from(vec![
        helpers::accent_bar(theme, accent),
        Span::styled(
            format!("{} · {}", callout.kind.label(), callout.title),
            theme.accent_style(accent).add_modifier(Modifier::BOLD),
        ),
    ]));
    for part in wrap(&callout.body, width.saturating_sub(2)) {
        out.push(Line::from(vec![
            helpers::accent_bar(theme, accent),
            Span::styled(part, theme.text_secondary_style()),
        ]));
    }

    WidgetLines::from_lines(out)
}

#[cfg(test)]
mod tests {
    use trailhead_types::CalloutKind;

    use super::*;

    #[test]
    fn label_and_body_are_rendered() {
        let callout = Callout {
            kind: CalloutKind::Warn,
            title: "Careful".into(),
            body: "Here be dragons.".into(),
        };
        let rendered = lines(&callout, &Theme::default(), 50);
        let text: String = rendered
            .lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.clone()))
            .collect();
        assert!(text.contains("WARN · Careful"));
        assert!(text.contains("dragons"));
    }
}
