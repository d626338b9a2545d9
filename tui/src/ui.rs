//! Rendering for the single detector screen: header, disclaimer banner,
//! input box, result panel, and footer hints.

use crossterm::event::KeyCode;
use newscheck_core::Verdict;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;

use crate::app::App;
use crate::colors;
use crate::key_hint;

const PLACEHOLDER: &str = "Paste your news text here...";
const DISCLAIMER: &str = "This is a client-side demonstration with simplified keyword \
matching. A real detector would call a trained model behind a backend service.";

pub(crate) fn draw(frame: &mut Frame, app: &App) {
    let disclaimer_height = if app.session().disclaimer_visible() {
        4
    } else {
        0
    };
    let [title_area, tagline_area, _, disclaimer_area, input_area, result_area, _, footer_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(disclaimer_height),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .horizontal_margin(2)
        .vertical_margin(1)
        .areas(frame.area());

    render_header(frame, title_area, tagline_area);
    if app.session().disclaimer_visible() {
        render_disclaimer(frame, disclaimer_area);
    }
    render_input(frame, input_area, app);
    render_result(frame, result_area, app);
    render_footer(frame, footer_area, app);
}

fn render_header(frame: &mut Frame, title_area: Rect, tagline_area: Rect) {
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Fake News Detector",
            Style::default()
                .fg(colors::primary())
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Enter a news article or headline below to get a simulated prediction.",
            Style::default().fg(colors::text_dim()),
        ))
        .alignment(Alignment::Center),
        tagline_area,
    );
}

fn render_disclaimer(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::warning()))
        .title(" Disclaimer ");
    frame.render_widget(
        Paragraph::new(DISCLAIMER)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(colors::warning()))
            .block(block),
        area,
    );
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::border()))
        .title(" News text ");
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let scroll = app.input().visual_scroll(inner_width);

    let paragraph = if app.input().value().is_empty() {
        Paragraph::new(Span::styled(
            PLACEHOLDER,
            Style::default().fg(colors::text_dim()),
        ))
    } else {
        Paragraph::new(app.input().value()).scroll((0, scroll as u16))
    };
    frame.render_widget(paragraph.block(block), area);

    let cursor_x = app.input().visual_cursor().saturating_sub(scroll) as u16;
    frame.set_cursor_position((area.x + 1 + cursor_x, area.y + 1));
}

fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    let (line, border_color) = result_line(app);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Prediction ");
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn result_line(app: &App) -> (Line<'static>, Color) {
    let dim = Style::default().fg(colors::text_dim());
    if app.session().is_busy() {
        let dots = ".".repeat(app.spinner_tick() % 4 + 1);
        return (
            Line::from(Span::styled(format!("Checking{dots}"), dim)),
            colors::border(),
        );
    }
    match app.session().verdict() {
        Some(Verdict::FakeNews) => (
            verdict_line("Fake News", colors::error()),
            colors::error(),
        ),
        Some(Verdict::RealNews) => (
            verdict_line("Real News", colors::success()),
            colors::success(),
        ),
        Some(Verdict::EmptyInput) => (
            Line::from(Span::styled("Please enter some news text.", dim)),
            colors::border(),
        ),
        Some(Verdict::Undetermined) => (
            Line::from(Span::styled(
                "Cannot determine with simple keyword matching.",
                dim,
            )),
            colors::border(),
        ),
        None => (
            Line::from(Span::styled(
                "Press enter to run the simulated check.",
                dim,
            )),
            colors::border(),
        ),
    }
}

fn verdict_line(label: &'static str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::raw("Prediction: "),
        Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let detect_style = if app.session().can_start() {
        Style::default()
    } else {
        Style::default().fg(colors::text_dim())
    };
    let line = Line::from(vec![
        key_hint::plain(KeyCode::Enter).into(),
        Span::styled(" Detect News  ", detect_style),
        key_hint::ctrl(KeyCode::Char('l')).into(),
        " Clear  ".dim(),
        key_hint::ctrl(KeyCode::Char('c')).into(),
        " Quit".dim(),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
