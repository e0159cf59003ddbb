//! TUI rendering for Cofactor using ratatui.

mod input;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use cofactor_engine::{App, FieldId, ResultView};

const FIELD_HEIGHT: u16 = 3;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),            // Title
            Constraint::Length(FIELD_HEIGHT), // Zero residual
            Constraint::Length(FIELD_HEIGHT), // One residual
            Constraint::Length(FIELD_HEIGHT), // Argument number
            Constraint::Length(FIELD_HEIGHT), // Function
            Constraint::Min(0),
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], &palette);
    for (field, area) in FieldId::ALL.into_iter().zip([chunks[1], chunks[2], chunks[3]]) {
        draw_field(frame, app, field, area, &palette, &glyphs);
    }
    draw_result(frame, app, chunks[4], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[6], &palette);
}

fn draw_title(frame: &mut Frame, area: Rect, palette: &Palette) {
    let title = Line::from(vec![
        Span::styled(
            "Cofactor",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  rebuild a function from its residuals",
            Style::default().fg(palette.text_muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

/// Right-hand side of a field panel: validity indicator plus the argument hint.
fn field_status(app: &App, field: FieldId, glyphs: &Glyphs) -> (String, bool) {
    let form = app.form();
    let ok = form.indicator_ok(field);
    let indicator = if ok { glyphs.valid } else { glyphs.invalid };
    let text = match field {
        FieldId::Left | FieldId::Right => {
            let len = if field == FieldId::Left {
                form.left().len()
            } else {
                form.right().len()
            };
            format!(" {len}/{} {indicator} ", form.settings().max_residue_len)
        }
        FieldId::Index => format!(" max: {} {indicator} ", form.left().hint()),
    };
    (text, ok)
}

fn draw_field(
    frame: &mut Frame,
    app: &App,
    field: FieldId,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let focused = app.focus() == field;
    let border_style = if focused {
        Style::default().fg(palette.primary)
    } else {
        Style::default().fg(palette.bg_border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", field.label()),
            styles::field_label(palette, focused),
        ))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (status, ok) = field_status(app, field, glyphs);
    let status_width = status.width() as u16;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(status_width)])
        .split(inner);

    let prefix = if focused {
        format!(" {} ", glyphs.focus)
    } else {
        "   ".to_string()
    };
    let prefix_width = prefix.width() as u16;
    let text = app.form().text(field);
    let line = Line::from(vec![
        Span::styled(prefix, Style::default().fg(palette.primary)),
        Span::styled(text.to_string(), Style::default().fg(palette.text_primary)),
    ]);
    frame.render_widget(Paragraph::new(line), columns[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(status, styles::indicator(palette, ok)))
            .alignment(Alignment::Right),
        columns[1],
    );

    if focused {
        let cursor = app.form().cursor(field);
        let before: usize = text.graphemes(true).take(cursor).map(str::width).sum();
        let max_x = columns[0]
            .x
            .saturating_add(columns[0].width.saturating_sub(1));
        let cursor_x = columns[0]
            .x
            .saturating_add(prefix_width)
            .saturating_add(before as u16)
            .min(max_x);
        frame.set_cursor_position((cursor_x, columns[0].y));
    }
}

fn draw_result(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let view = app.result_view();
    let border_color = if view.is_error() {
        palette.error
    } else {
        palette.bg_border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            " Function: ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(palette.bg_panel));

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(view.text().to_string(), styles::result(palette, view.is_error())),
    ];
    if app.is_loading() {
        spans.push(Span::styled(
            format!(" {}", glyphs.pending),
            Style::default().fg(palette.text_muted),
        ));
    }
    if let ResultView::Output(output) = view
        && !app.invocation().is_reset()
    {
        spans.push(Span::styled(
            format!("  ({} rows)", output.len()),
            Style::default().fg(palette.text_muted),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let mut spans = vec![
        Span::styled("Tab", styles::key_highlight(palette)),
        Span::styled(" next  ", styles::key_hint(palette)),
        Span::styled("Ctrl+U", styles::key_highlight(palette)),
        Span::styled(" clear  ", styles::key_hint(palette)),
        Span::styled("Ctrl+R", styles::key_highlight(palette)),
        Span::styled(" sample  ", styles::key_hint(palette)),
        Span::styled("Esc", styles::key_highlight(palette)),
        Span::styled(" quit ", styles::key_hint(palette)),
    ];
    if let Some(message) = app.status_message() {
        spans.push(Span::styled(
            format!("  {message}"),
            Style::default().fg(palette.text_secondary),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
