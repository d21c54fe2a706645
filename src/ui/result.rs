use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

// Display rescale of the raw fraction: zero correct maps to 80, a perfect
// run to 120. Presentation only; the engine reports the raw score.
const SCORE_OFFSET: f64 = 80.0;
const SCORE_SPAN: f64 = 40.0;

pub(crate) fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (correct, total) = app.engine().score();
    let percentage = percentage(correct, total);
    let grade_color = grade_color(percentage);

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({:.0}%)", correct, total, percentage),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
        Line::from(format!("Your IQ score is {}", display_score(correct, total)).fg(Color::White)),
        Line::from(""),
        Line::from("r restart  ·  q quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}

fn percentage(correct: usize, total: usize) -> f64 {
    if total > 0 {
        (correct as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn display_score(correct: usize, total: usize) -> u32 {
    let fraction = if total > 0 {
        correct as f64 / total as f64
    } else {
        0.0
    };
    (fraction * SCORE_SPAN + SCORE_OFFSET).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_score_spans_80_to_120() {
        assert_eq!(display_score(0, 25), 80);
        assert_eq!(display_score(25, 25), 120);
        assert_eq!(display_score(13, 25), 101); // 0.52 * 40 + 80 = 100.8
    }

    #[test]
    fn grade_colors_follow_percentage_bands() {
        assert_eq!(grade_color(95.0), Color::Green);
        assert_eq!(grade_color(75.0), Color::Cyan);
        assert_eq!(grade_color(55.0), Color::Yellow);
        assert_eq!(grade_color(10.0), Color::Red);
    }
}
