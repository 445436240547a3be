//! Navigator rendering and input handling.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use trailhead_types::{Accent, Effect, SectionId, MODULES};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::{App, Focus},
    ui::{
        components::{component::Component, widgets::wrap},
        theme::{helpers, Theme},
        utils::{clamp_scroll, hit_test, scroll_into_view},
    },
};

/// Height of the tab strip, borders included.
pub const TAB_STRIP_HEIGHT: u16 = 3;

/// Height of the module header rendered below the tab strip.
pub const MODULE_HEADER_HEIGHT: u16 = 6;

const HERO_BADGE: &str = "Software Engineering Roadmap · 12 Months";
const HERO_TITLE: &str = "From good coder to great engineer.";
const HERO_TEXT: &str = "Six modules. Each builds on the last. Technical skill gets you in \
    the room — the full stack of skills here determines what you do once you're there.";

const PRINCIPLES: [(&str, &str, &str, Accent); 5] = [
    (
        "01",
        "Think before typing",
        "Five minutes of design saves fifty of debugging.",
        Accent::Cyan,
    ),
    (
        "02",
        "Tradeoffs everywhere",
        "Every decision has a cost. Name it explicitly.",
        Accent::Amber,
    ),
    (
        "03",
        "Make it work first",
        "Correct before fast. Simple before clever.",
        Accent::Green,
    ),
    (
        "04",
        "Observe everything",
        "You cannot improve what you cannot measure.",
        Accent::Violet,
    ),
    (
        "05",
        "Communication is leverage",
        "A doc touches 50 engineers. Code touches 5.",
        Accent::Blue,
    ),
];

/// The primary navigation surface: tab strip plus, depending on the active
/// selection, the overview landing page or the active module's header.
#[derive(Debug, Default)]
pub struct RoadmapNavComponent;

impl Component for RoadmapNavComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match app.focus {
            Focus::Tabs => self.handle_tab_keys(app, key),
            Focus::Content if app.nav.selection().is_overview() => {
                self.handle_landing_keys(app, key)
            }
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let Some(idx) = hit_test(&app.nav.tab_areas, mouse.column, mouse.row) else {
            return Vec::new();
        };
        let target = app.nav.tab_target(idx);
        app.nav.tab_cursor = idx;
        app.nav.navigate(target, &app.ctx.bus);
        vec![Effect::NavigationOccurred(target)]
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let [tabs_area, body_area] =
            Layout::vertical([Constraint::Length(TAB_STRIP_HEIGHT), Constraint::Min(0)])
                .areas(rect);
        self.render_tabs(frame, tabs_area, app);
        if app.nav.selection().is_overview() {
            self.render_landing(frame, body_area, app);
        } else {
            self.render_header(frame, body_area, app);
        }
    }
}

impl RoadmapNavComponent {
    fn handle_tab_keys(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                app.nav.tab_cursor = app.nav.tab_cursor.saturating_sub(1);
                Vec::new()
            }
            KeyCode::Right | KeyCode::Char('l') => {
                app.nav.tab_cursor = (app.nav.tab_cursor + 1).min(app.nav.tab_count() - 1);
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let target = app.nav.tab_target(app.nav.tab_cursor);
                app.nav.navigate(target, &app.ctx.bus);
                vec![Effect::NavigationOccurred(target)]
            }
            _ => Vec::new(),
        }
    }

    fn handle_landing_keys(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                app.nav.card_cursor = app.nav.card_cursor.saturating_sub(1);
                self.keep_card_visible(app);
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.nav.card_cursor = (app.nav.card_cursor + 1).min(MODULES.len() - 1);
                self.keep_card_visible(app);
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let target = MODULES[app.nav.card_cursor].id;
                app.nav.navigate(target, &app.ctx.bus);
                vec![Effect::NavigationOccurred(target)]
            }
            KeyCode::PageUp => {
                app.nav.overview_scroll =
                    app.nav.overview_scroll.saturating_sub(app.nav.landing_viewport.max(1));
                Vec::new()
            }
            KeyCode::PageDown => {
                app.nav.overview_scroll = clamp_scroll(
                    app.nav.overview_scroll + app.nav.landing_viewport.max(1),
                    app.nav.landing_line_count,
                    app.nav.landing_viewport,
                );
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn keep_card_visible(&self, app: &mut App) {
        if let Some(line) = app.nav.card_lines.get(app.nav.card_cursor).copied() {
            app.nav.overview_scroll =
                scroll_into_view(app.nav.overview_scroll, line, app.nav.landing_viewport);
        }
    }

    fn render_tabs(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = app.ctx.theme;
        let block = helpers::block(&theme, None, app.focus == Focus::Tabs);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let compact = tabs_want_compact(inner.width);
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut areas: Vec<Rect> = Vec::new();
        let mut x = inner.x;

        for idx in 0..app.nav.tab_count() {
            let target = app.nav.tab_target(idx);
            let label = tab_label(target, compact);
            let label_width = label.width() as u16;

            let mut style = match target.descriptor() {
                Some(desc) if app.nav.selection() == target => theme
                    .accent_style(desc.accent)
                    .add_modifier(Modifier::BOLD),
                None if app.nav.selection() == target => {
                    theme.text_style().add_modifier(Modifier::BOLD)
                }
                _ => theme.text_muted_style(),
            };
            if app.focus == Focus::Tabs && idx == app.nav.tab_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }

            areas.push(Rect::new(x, inner.y, label_width, 1));
            spans.push(Span::styled(label, style));
            x += label_width;

            if idx == 0 {
                spans.push(Span::styled(" │ ", theme.text_dim_style()));
                x += 3;
            } else if idx + 1 < app.nav.tab_count() {
                spans.push(Span::raw(" "));
                x += 1;
            }
        }

        app.nav.tab_areas = areas;
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }

    fn render_landing(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = app.ctx.theme;
        let width = rect.width.saturating_sub(2) as usize;
        let focused = app.focus == Focus::Content;
        let (lines, card_lines) =
            landing_lines(&theme, width, app.nav.card_cursor, focused);

        app.nav.card_lines = card_lines;
        app.nav.landing_line_count = lines.len();
        app.nav.landing_viewport = rect.height;
        app.nav.overview_scroll = clamp_scroll(app.nav.overview_scroll, lines.len(), rect.height);

        let paragraph = Paragraph::new(lines)
            .style(helpers::panel_style(&theme))
            .scroll((app.nav.overview_scroll, 0));
        frame.render_widget(paragraph, rect.inner(ratatui::layout::Margin::new(1, 0)));
    }

    fn render_header(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = app.ctx.theme;
        let Some(desc) = app.nav.selection().descriptor() else {
            return;
        };
        let width = rect.width.saturating_sub(2) as usize;
        let lines = header_lines(desc.id, &theme, width);
        let paragraph = Paragraph::new(lines).style(helpers::panel_style(&theme));
        frame.render_widget(paragraph, rect.inner(ratatui::layout::Margin::new(1, 0)));
    }
}

fn tabs_want_compact(width: u16) -> bool {
    let full: usize = (0..=MODULES.len())
        .map(|idx| {
            let target = if idx == 0 {
                SectionId::Overview
            } else {
                MODULES[idx - 1].id
            };
            tab_label(target, false).width() + 1
        })
        .sum();
    full + 2 > width as usize
}

fn tab_label(target: SectionId, compact: bool) -> String {
    match target.descriptor() {
        None => {
            if compact {
                " OVW ".to_string()
            } else {
                " OVERVIEW ".to_string()
            }
        }
        Some(desc) => {
            if compact {
                format!(" {} {} ", desc.glyph, desc.num)
            } else {
                format!(" {} {} {} ", desc.glyph, desc.num, desc.label)
            }
        }
    }
}

/// Build the overview landing page. Returns the lines plus the first line
/// index of each module card, for cursor visibility scrolling.
fn landing_lines(
    theme: &Theme,
    width: usize,
    card_cursor: usize,
    focused: bool,
) -> (Vec<Line<'static>>, Vec<usize>) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut card_lines: Vec<usize> = Vec::new();

    lines.push(Line::from(helpers::badge(theme, Accent::Amber, HERO_BADGE)));
    lines.push(Line::from(Span::styled(
        HERO_TITLE,
        theme.text_style().add_modifier(Modifier::BOLD),
    )));
    for part in wrap(HERO_TEXT, width) {
        lines.push(Line::from(Span::styled(part, theme.text_secondary_style())));
    }
    lines.push(Line::default());

    // Phase bar: one colored segment per module.
    let segment = (width / MODULES.len()).clamp(2, 12);
    let mut bar: Vec<Span<'static>> = Vec::new();
    for desc in &MODULES {
        bar.push(Span::styled(
            "█".repeat(segment),
            theme.accent_style(desc.accent),
        ));
        bar.push(Span::raw(" "));
    }
    lines.push(Line::from(bar));
    lines.push(Line::default());

    for (idx, desc) in MODULES.iter().enumerate() {
        card_lines.push(lines.len());
        lines.push(Line::from(vec![
            helpers::accent_bar(theme, desc.accent),
            Span::styled(
                format!("MODULE {} · {}", desc.num, desc.phase.to_uppercase()),
                theme.accent_style(desc.accent),
            ),
        ]));
        let mut label_style = theme.text_style().add_modifier(Modifier::BOLD);
        if focused && idx == card_cursor {
            label_style = label_style.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::from(vec![
            helpers::accent_bar(theme, desc.accent),
            Span::styled(format!("{} {}", desc.glyph, desc.label), label_style),
            Span::styled("   Open module →", theme.accent_style(desc.accent)),
        ]));
        lines.push(Line::default());
    }

    lines.push(helpers::caption(
        theme,
        None,
        "Five Core Principles — apply from day one",
    ));
    for (num, title, text, accent) in PRINCIPLES {
        lines.push(Line::from(vec![
            helpers::accent_bar(theme, accent),
            Span::styled(format!("{num} · {title}"), theme.accent_style(accent)),
        ]));
        for part in wrap(text, width.saturating_sub(2)) {
            lines.push(Line::from(vec![
                helpers::accent_bar(theme, accent),
                Span::styled(part, theme.text_muted_style()),
            ]));
        }
        lines.push(Line::default());
    }

    (lines, card_lines)
}

/// Build the active module's header: breadcrumb, badge, title, gated
/// previous/next hints, and a rule.
fn header_lines(id: SectionId, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let Some(desc) = id.descriptor() else {
        return Vec::new();
    };
    let mut lines = Vec::with_capacity(MODULE_HEADER_HEIGHT as usize);

    lines.push(Line::from(vec![
        Span::styled("Roadmap", theme.text_muted_style()),
        Span::styled(" / ", theme.text_dim_style()),
        Span::styled(desc.label.to_string(), theme.accent_style(desc.accent)),
    ]));
    lines.push(Line::from(helpers::badge(
        theme,
        desc.accent,
        &format!("Module {} · {}", desc.num, desc.phase),
    )));
    lines.push(Line::from(Span::styled(
        format!("{} {}", desc.glyph, desc.label),
        theme.text_style().add_modifier(Modifier::BOLD),
    )));

    let mut controls: Vec<Span<'static>> = Vec::new();
    if let Some(prev) = id.previous().and_then(SectionId::descriptor) {
        controls.push(Span::styled(
            format!("← p: {} {}", prev.num, prev.label),
            theme.text_muted_style(),
        ));
    }
    if let Some(next) = id.next().and_then(SectionId::descriptor) {
        if !controls.is_empty() {
            controls.push(Span::raw("    "));
        }
        controls.push(Span::styled(
            format!("n: {} {} →", next.num, next.label),
            theme.accent_style(desc.accent),
        ));
    }
    lines.push(Line::from(controls));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "─".repeat(width.max(8)),
        theme.border_style(false),
    )));

    lines
}
