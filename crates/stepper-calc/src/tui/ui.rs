//! TUI rendering
//!
//! Visual feedback: the form is drawn at a fixed size in the middle of the
//! terminal, with any open dialog drawn over it.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
    Frame,
};

use super::app::CalculatorApp;
use crate::core::Field;
use crate::form::{Dialog, Focus};
use crate::icon::ErrorIcon;
use crate::layout::{
    centered, slot_rect, Element, CALCULATE_LABEL, FORM_LAYOUT, MACHINE_TITLE, WINDOW_TITLE,
};

/// Key hints shown on the bottom border of the form
pub const HELP_HINT: &str = " Tab next · Enter calculate · Ctrl+Q quit ";

/// Text of the dialog dismiss control
pub const DISMISS_LABEL: &str = "[ OK ]";

/// Widest a dialog may grow, in cells
const DIALOG_MAX_WIDTH: u16 = 60;

/// Narrowest dialog, in cells
const DIALOG_MIN_WIDTH: u16 = 30;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the form window and returns its inner area
    fn render_window(&self, area: Rect, buf: &mut Buffer) -> Rect {
        let size = self.app.config().window;
        let window = centered(area, size.width, size.height);

        Clear.render(window, buf);
        let block = Block::default()
            .title(format!(" {WINDOW_TITLE} "))
            .title_bottom(Line::from(HELP_HINT).centered())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(window);
        block.render(window, buf);
        inner
    }

    /// Renders every declared layout slot
    fn render_form(&self, inner: Rect, buf: &mut Buffer) {
        let form = self.app.form();
        let modal = form.dialog().is_some();

        for slot in &FORM_LAYOUT {
            let rect = slot_rect(slot, inner);
            if rect.is_empty() {
                continue;
            }
            match slot.element {
                Element::Label(field) => {
                    Paragraph::new(field.label()).render(rect, buf);
                }
                Element::Entry(field) => {
                    let focused = !modal && form.focus() == Focus::Field(field);
                    self.render_entry(field, focused, rect, buf);
                }
                Element::CalculateButton => {
                    let style = if !modal && form.focus() == Focus::CalculateButton {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Cyan)
                    };
                    Paragraph::new(Span::styled(format!("[ {CALCULATE_LABEL} ]"), style))
                        .alignment(Alignment::Center)
                        .render(rect, buf);
                }
                Element::MachineTitle => {
                    Paragraph::new(Span::styled(
                        MACHINE_TITLE,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .alignment(Alignment::Center)
                    .render(rect, buf);
                }
            }
        }
    }

    /// Renders one entry box, scrolled so the cursor stays visible
    fn render_entry(&self, field: Field, focused: bool, area: Rect, buf: &mut Buffer) {
        let form = self.app.form();
        let text = form.field_text(field);
        let entry_style = Style::default().bg(Color::DarkGray).fg(Color::White);

        let line = if focused {
            let (before, after) = text.split_at(form.cursor(field).min(text.len()));
            let mut rest = after.chars();
            let cursor_char = rest.next().unwrap_or(' ');
            Line::from(vec![
                Span::raw(before),
                Span::styled(
                    cursor_char.to_string(),
                    Style::default().bg(Color::White).fg(Color::Black),
                ),
                Span::raw(rest.as_str()),
            ])
        } else {
            Line::from(text)
        };

        let cursor_column = to_cells(text[..form.cursor(field).min(text.len())].chars().count());
        let scroll = cursor_column.saturating_sub(area.width.saturating_sub(1));

        Paragraph::new(line)
            .style(entry_style)
            .scroll((0, scroll))
            .render(area, buf);
    }

    /// Renders the open dialog over everything else
    fn render_dialog(&self, dialog: &Dialog, area: Rect, buf: &mut Buffer) {
        let icon = if dialog.is_error() { self.app.icon() } else { None };
        let icon_width = icon.map_or(0, |i| i.columns().saturating_add(2));
        let icon_height = icon.map_or(0, ErrorIcon::rows);

        let lines = dialog.lines();
        let longest = to_cells(lines.iter().map(|l| l.chars().count()).max().unwrap_or(0));

        // Borders plus one column of padding each side
        let width = longest
            .saturating_add(icon_width)
            .saturating_add(4)
            .clamp(DIALOG_MIN_WIDTH, DIALOG_MAX_WIDTH)
            .min(area.width);
        let text_width = width.saturating_sub(icon_width.saturating_add(4)).max(1);
        let text_height = wrapped_height(&lines, text_width);
        // Borders, a blank row and the dismiss row
        let height = text_height
            .max(icon_height)
            .saturating_add(4)
            .min(area.height);

        let rect = centered(area, width, height);
        Clear.render(rect, buf);

        let border = if dialog.is_error() { Color::Red } else { Color::Green };
        let block = Block::default()
            .title(format!(" {} ", dialog.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(rect);
        block.render(rect, buf);

        let body = Rect::new(
            inner.x.saturating_add(1),
            inner.y,
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(2),
        );

        if let Some(icon) = icon {
            IconWidget::new(icon).render(body, buf);
        }

        let text_area = Rect::new(
            body.x.saturating_add(icon_width),
            body.y,
            body.width.saturating_sub(icon_width),
            body.height,
        );
        let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);

        if inner.height > 0 {
            let button = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
            Paragraph::new(Span::styled(
                DISMISS_LABEL,
                Style::default()
                    .fg(Color::Black)
                    .bg(border)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .render(button, buf);
        }
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = self.render_window(area, buf);
        self.render_form(inner, buf);

        if let Some(dialog) = self.app.form().dialog() {
            self.render_dialog(dialog, area, buf);
        }
    }
}

/// Rows needed to show `lines` wrapped at `width` columns
fn wrapped_height(lines: &[String], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows = lines
        .iter()
        .map(|l| l.chars().count().div_ceil(width).max(1))
        .fold(0usize, usize::saturating_add)
        // Word wrapping can need one row more than the character count says
        .saturating_add(1);
    to_cells(rows)
}

/// Converts a count to cells, saturating at `u16::MAX`
fn to_cells(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}

/// Draws an [`ErrorIcon`] with half-block glyphs
#[derive(Debug)]
pub struct IconWidget<'a> {
    icon: &'a ErrorIcon,
}

impl<'a> IconWidget<'a> {
    /// Creates the widget
    #[must_use]
    pub fn new(icon: &'a ErrorIcon) -> Self {
        Self { icon }
    }
}

impl Widget for IconWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = self.icon.columns().min(area.width);
        let rows = self.icon.rows().min(area.height);

        for row in 0..rows {
            for column in 0..columns {
                let Some(cell) = buf.cell_mut((area.x + column, area.y + row)) else {
                    continue;
                };
                match self.icon.cell(column, row) {
                    (None, None) => {}
                    (Some([r, g, b]), None) => {
                        cell.set_symbol("▀").set_fg(Color::Rgb(r, g, b));
                    }
                    (None, Some([r, g, b])) => {
                        cell.set_symbol("▄").set_fg(Color::Rgb(r, g, b));
                    }
                    (Some(top), Some(bottom)) => {
                        cell.set_symbol("▀")
                            .set_fg(Color::Rgb(top[0], top[1], top[2]))
                            .set_bg(Color::Rgb(bottom[0], bottom[1], bottom[2]));
                    }
                }
            }
        }
    }
}
