use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::pagination::compute_window;

use super::pagination;

pub(crate) fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.engine().current_question() else {
        return;
    };
    let chunks = layout(area);

    render_progress(frame, chunks[0], app);
    render_prompt(frame, chunks[1], &question.prompt);
    render_options(frame, chunks[2], &question.options, app.cursor());
    render_pagination(frame, chunks[3], app);
    render_controls(frame, chunks[4]);
}

/// Where the pagination bar sits; mouse hit-testing uses the same rect.
pub(crate) fn pagination_area(area: Rect) -> Rect {
    layout(area)[3]
}

fn layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area)
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let progress = format!(
        "{}/{}",
        engine.current_index() + 1,
        engine.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, options: &[String], cursor: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == cursor;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_pagination(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    if let Ok(buttons) = compute_window(
        engine.total_questions(),
        engine.current_index(),
        app.max_visible(),
    ) {
        frame.render_widget(Paragraph::new(pagination::line(&buttons)), area);
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget =
        Paragraph::new("j/k option  ·  h/l question  ·  enter answer  ·  s submit  ·  q quit")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn option_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => (index + 1).to_string(),
    }
}
