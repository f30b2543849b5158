use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use super::app::{App, InputMode};
use super::form::FormField;
use super::theme;
use super::util::{format_amount, format_date, truncate};
use crate::store::ExpenseStore;

pub(crate) fn render(f: &mut Frame, app: &App, store: &ExpenseStore) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Header: title + running total
            Constraint::Min(5),    // Expense table
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0], store);
    render_table(f, chunks[1], app, store);
    render_status_bar(f, chunks[2], app, store);

    if app.input_mode == InputMode::Adding {
        render_add_form(f, f.area(), app);
    }
    if app.input_mode == InputMode::Confirm {
        render_confirm(f, f.area(), app);
    }
    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect, store: &ExpenseStore) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "TrackFlow",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Track your spending", theme::dim_style())),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY)),
    );
    f.render_widget(title, halves[0]);

    let count = store.expenses().len();
    let total = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format_amount(store.total()), theme::total_style())),
        Line::from(Span::styled(
            format!("{count} expense{}", if count == 1 { "" } else { "s" }),
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Total Expenses ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(total, halves[1]);
}

fn render_table(f: &mut Frame, area: Rect, app: &App, store: &ExpenseStore) {
    let expenses = store.expenses();

    if expenses.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No expenses yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press a to add your first expense",
                theme::dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Expenses (0) ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Expense", "Category", "Date", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = expenses
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, expense)| {
            let style = if i == app.expense_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let category_cell = Span::styled(
                format!("{} {}", expense.category.glyph(), expense.category),
                Style::default().fg(theme::category_color(expense.category)),
            );

            Row::new(vec![
                Cell::from(truncate(&expense.title, 40)),
                Cell::from(category_cell),
                Cell::from(format_date(expense.date)),
                Cell::from(Span::styled(
                    format_amount(expense.amount),
                    theme::amount_style(),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(14),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Expenses ({}) ", expenses.len()),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(table, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App, store: &ExpenseStore) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        InputMode::Adding => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::GREEN)
            .add_modifier(Modifier::BOLD),
        InputMode::Confirm => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::RED)
            .add_modifier(Modifier::BOLD),
    };

    let info = if app.status_message.is_empty() {
        format!(" {} | total {}", store.expenses().len(), format_amount(store.total()))
    } else {
        format!(" {}", app.status_message)
    };

    let right = match app.input_mode {
        InputMode::Normal => " a add | d delete | j/k move | ? help | q quit ",
        InputMode::Adding => " Tab next field | +/- category | Enter save | Esc cancel ",
        InputMode::Confirm => " y confirm | any other key cancels ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_add_form(f: &mut Frame, area: Rect, app: &App) {
    let rect = super::util::centered_rect(46, 15, area);
    f.render_widget(Clear, rect);

    let mut lines: Vec<Line> = Vec::new();
    for field in FormField::all() {
        let focused = app.form.focused == *field;
        let marker = if focused { "› " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", field.label()),
            if focused {
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::dim_style()
            },
        )));

        let value = app.form.text_for(*field);
        let display = if focused && *field != FormField::Category {
            format!("  {value}█")
        } else if *field == FormField::Category {
            format!("  ‹ {value} ›")
        } else {
            format!("  {value}")
        };
        lines.push(Line::from(Span::styled(display, theme::normal_style())));

        if let Some(err) = app.form.error_for(*field) {
            lines.push(Line::from(Span::styled(
                format!("  {err}"),
                theme::error_style(),
            )));
        } else {
            lines.push(Line::from(""));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT))
        .title(Span::styled(
            " Add Expense ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(lines).block(block), rect);
}

fn render_confirm(f: &mut Frame, area: Rect, app: &App) {
    let rect = super::util::centered_rect(44, 5, area);
    f.render_widget(Clear, rect);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(&*app.confirm_message, theme::normal_style())),
        Line::from(Span::styled("y to confirm", theme::dim_style())),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::RED))
        .title(Span::styled(
            " Delete ",
            Style::default().fg(theme::RED).add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(lines).centered().block(block), rect);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let rect = super::util::centered_rect(48, 14, area);
    f.render_widget(Clear, rect);

    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Style::default().fg(theme::ACCENT)),
            Span::styled(desc, theme::normal_style()),
        ])
    };

    let lines = vec![
        Line::from(""),
        entry("a", "Add an expense"),
        entry("d", "Delete the selected expense"),
        entry("j/k, ↓/↑", "Move selection"),
        entry("g/G", "Jump to top / bottom"),
        entry("Ctrl-d/u", "Half page down / up"),
        entry("?", "Toggle this help"),
        entry("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Press any key to close",
            theme::dim_style(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(lines).block(block), rect);
}
