use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use watchdeck_core::{
    BadgeStyle, BarStyle, DashViewModel, VideoCardView, WorkOrderCardView, WORK_ORDER_HEADER,
};

use super::keys;

/// Width of the textual progress bar, in cells.
const BAR_CELLS: usize = 20;

pub fn render(frame: &mut Frame, view: &DashViewModel, editing: bool) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_badges(frame, rows[0], view);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);
    render_feed(frame, body[0], view);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(body[1]);
    render_video_section(frame, sections[0], view);
    render_work_order_section(frame, sections[1], view);

    render_instructions(frame, rows[2], view, editing);
    frame.render_widget(
        Paragraph::new(keys::HINTS).style(Style::default().fg(Color::DarkGray)),
        rows[3],
    );
}

fn badge_color(style: BadgeStyle) -> Color {
    match style {
        BadgeStyle::Primary => Color::Blue,
        BadgeStyle::Success => Color::Green,
        BadgeStyle::Warning => Color::Yellow,
        BadgeStyle::Secondary => Color::DarkGray,
    }
}

fn bar_color(style: BarStyle) -> Color {
    // Striping has no terminal analogue; color carries the distinction.
    match style {
        BarStyle::StripedAnimated => Color::Blue,
        BarStyle::SolidSuccess => Color::Green,
        BarStyle::SolidMuted => Color::DarkGray,
    }
}

fn render_badges(frame: &mut Frame, area: Rect, view: &DashViewModel) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let program = match &view.program {
        Some(badge) => Paragraph::new(badge.text.clone()).style(
            Style::default()
                .fg(badge_color(badge.style))
                .add_modifier(Modifier::BOLD),
        ),
        None => Paragraph::new("waiting for status").style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(
        program.block(Block::default().borders(Borders::ALL).title("Program")),
        halves[0],
    );

    let temp = match &view.temp_badge {
        Some(message) => Paragraph::new(message.clone()).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        None => Paragraph::new(""),
    };
    frame.render_widget(
        temp.block(Block::default().borders(Borders::ALL).title("Box Check")),
        halves[1],
    );
}

fn render_feed(frame: &mut Frame, area: Rect, view: &DashViewModel) {
    // Newest entries are first, so the visible window always shows the
    // latest activity.
    let lines: Vec<Line> = view
        .feed
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(entry.at.clone(), Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled(entry.source.clone(), Style::default().fg(Color::Gray)),
                Span::raw("  "),
                Span::raw(entry.message.clone()),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Status Feed")),
        area,
    );
}

fn render_video_section(frame: &mut Frame, area: Rect, view: &DashViewModel) {
    let block = Block::default().borders(Borders::ALL).title("Video Processing");

    let Some(section) = &view.video_section else {
        frame.render_widget(
            Paragraph::new("no video activity yet")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    };

    let mut lines = Vec::new();
    if let Some(label) = &section.label {
        lines.push(Line::from(Span::styled(
            label.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }
    for card in &section.cards {
        lines.extend(video_card_lines(card));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn video_card_lines(card: &VideoCardView) -> Vec<Line<'static>> {
    let badge = Style::default()
        .fg(badge_color(card.badge))
        .add_modifier(Modifier::BOLD);
    vec![
        Line::from(vec![
            Span::styled(card.file.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(card.status.clone(), Style::default().add_modifier(Modifier::ITALIC)),
        ]),
        Line::from(vec![
            Span::raw("  stage: "),
            Span::styled(card.stage.clone(), badge),
            Span::raw("  "),
            Span::styled(
                format!("{} {}", text_bar(&card.progress), card.progress),
                Style::default().fg(bar_color(card.bar)),
            ),
        ]),
    ]
}

fn render_work_order_section(frame: &mut Frame, area: Rect, view: &DashViewModel) {
    let block = Block::default().borders(Borders::ALL).title("Work Orders");

    let Some(section) = &view.work_order_section else {
        frame.render_widget(
            Paragraph::new("no work orders yet")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    };

    let mut lines = Vec::new();
    for card in &section.cards {
        lines.extend(work_order_card_lines(card));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn work_order_card_lines(card: &WorkOrderCardView) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            WORK_ORDER_HEADER,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.title.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(format!("  Id: {}", card.id)),
    ];
    if let Some(image) = &card.image {
        // The JPEG itself cannot be drawn in a terminal cell grid.
        lines.push(Line::from(Span::styled(
            format!("  [image attached, {} bytes]", image.len()),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if let Some(analysis) = &card.analysis {
        lines.push(Line::from(format!("  {analysis}")));
    }
    lines
}

fn render_instructions(frame: &mut Frame, area: Rect, view: &DashViewModel, editing: bool) {
    let title = if editing {
        "AI Instructions (Enter saves, Esc cancels)"
    } else {
        "AI Instructions (i to edit)"
    };
    let mut text = view.instructions.clone();
    if editing {
        text.push('_');
    }
    let style = if editing {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    frame.render_widget(
        Paragraph::new(text)
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

/// Renders a percentage-like progress string as a fixed-width cell bar;
/// non-numeric strings ("N/A") get an empty bar.
fn text_bar(progress: &str) -> String {
    let filled = progress_ratio(progress)
        .map(|ratio| (ratio * BAR_CELLS as f64).round() as usize)
        .unwrap_or(0)
        .min(BAR_CELLS);
    let mut bar = String::with_capacity(BAR_CELLS + 2);
    bar.push('[');
    for i in 0..BAR_CELLS {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar.push(']');
    bar
}

fn progress_ratio(progress: &str) -> Option<f64> {
    let number = progress.trim().strip_suffix('%')?.trim();
    let value: f64 = number.parse().ok()?;
    Some((value / 100.0).clamp(0.0, 1.0))
}
