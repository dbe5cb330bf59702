use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),  // Summary cards
            Constraint::Min(8),     // Cost basis chart
            Constraint::Length(10), // Recent purchases
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_cost_chart(f, chunks[1], app);
    render_recent(f, chunks[2], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_card(
        f,
        cards[0],
        "Lots",
        format!("{}", app.lot_count),
        theme::ACCENT,
        None,
    );
    render_card(
        f,
        cards[1],
        "Tickers",
        format!("{}", app.tickers.len()),
        theme::ACCENT,
        Some(truncate(&app.tickers.join(" "), 24)),
    );
    render_card(
        f,
        cards[2],
        "Invested",
        format_amount(app.total_invested),
        theme::GREEN,
        Some(app.currency.clone()),
    );
    render_card(
        f,
        cards[3],
        "Accounts",
        format!("{}", app.account_count),
        theme::ACCENT,
        None,
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: ratatui::style::Color,
    subtitle: Option<String>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            subtitle.unwrap_or_default(),
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_cost_chart(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Cost Basis by Ticker ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    if app.invested_by_ticker.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No holdings yet. Record one with :add TICKER SHARES PRICE DATE",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = app
        .invested_by_ticker
        .iter()
        .take(12)
        .map(|(ticker, amt)| {
            let val = amt.to_u64().unwrap_or(0);
            Bar::default()
                .value(val)
                .label(Line::from(truncate(ticker, 8)))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(8)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

fn render_recent(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Recent Purchases ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let lines: Vec<Line> = app
        .recent
        .iter()
        .map(|h| {
            Line::from(vec![
                Span::styled(format!(" {}  ", h.purchase_date), theme::dim_style()),
                Span::styled(
                    format!("{:<8}", truncate(&h.ticker, 8)),
                    Style::default().fg(theme::ACCENT),
                ),
                Span::styled(
                    format!(
                        " {} @ {}",
                        h.shares.normalize(),
                        format_amount(h.purchase_price)
                    ),
                    theme::normal_style(),
                ),
                Span::styled(format!("  {}", h.account), theme::dim_style()),
            ])
        })
        .collect();

    let lines = if lines.is_empty() {
        vec![Line::from(Span::styled(
            " Nothing recorded yet",
            theme::dim_style(),
        ))]
    } else {
        lines
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}
