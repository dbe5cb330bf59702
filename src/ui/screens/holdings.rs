use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.holdings.is_empty() {
        let msg = match &app.ticker_filter {
            Some(t) => vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("No holdings for '{t}'"),
                    theme::dim_style(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Esc to clear the filter",
                    theme::dim_style(),
                )),
            ],
            None => vec![
                Line::from(""),
                Line::from(Span::styled("No holdings yet", theme::dim_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "Record one with :add TICKER SHARES PRICE DATE",
                    theme::dim_style(),
                )),
            ],
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Holdings (0) ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Ticker", "Shares", "Price", "Cost", "Account", "Notes"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .holdings
        .iter()
        .enumerate()
        .skip(app.holding_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, h)| {
            let style = if i == app.holding_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(format!(" {}", h.purchase_date)),
                Cell::from(truncate(&h.ticker, 8)),
                Cell::from(format!("{}", h.shares.normalize())),
                Cell::from(format_amount(h.purchase_price)),
                Cell::from(format_amount(h.cost())),
                Cell::from(truncate(&h.account, 10)),
                Cell::from(truncate(&h.notes, 30)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(13),
        Constraint::Length(10),
        Constraint::Min(10),
    ];

    let title = match &app.ticker_filter {
        Some(t) => format!(" Holdings ({}) ticker: {t} ", app.holdings.len()),
        None => format!(" Holdings ({}) ", app.holdings.len()),
    };

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}
