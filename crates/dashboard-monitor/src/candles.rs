//! Candlestick chart widget.
//!
//! One terminal column per bar, newest bars on the right. Bodies span
//! open..close, wicks span high..low. Bullish bars are green, the rest red.

use dashboard_core::PriceBar;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

const LABEL_WIDTH: u16 = 10;

/// Candlestick chart over a slice of daily bars.
pub struct CandleChart<'a> {
    bars: &'a [PriceBar],
    symbol: &'a str,
}

impl<'a> CandleChart<'a> {
    pub fn new(bars: &'a [PriceBar], symbol: &'a str) -> Self {
        Self { bars, symbol }
    }

    /// Map a price to a row in the plot area (0 = top).
    fn price_to_y(price: f64, y_min: f64, y_max: f64, plot_height: u16) -> u16 {
        if (y_max - y_min).abs() < 1e-9 || plot_height == 0 {
            return 0;
        }
        let frac = (price - y_min) / (y_max - y_min);
        let y = plot_height.saturating_sub(1) as f64 * (1.0 - frac);
        y.round().clamp(0.0, plot_height.saturating_sub(1) as f64) as u16
    }
}

impl Widget for CandleChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.bars.is_empty() {
            Block::default()
                .title(format!(" {} [No Data] ", self.symbol))
                .borders(Borders::ALL)
                .render(area, buf);
            return;
        }

        let inner = Block::default().borders(Borders::ALL).inner(area);
        let plot_width = inner.width.saturating_sub(LABEL_WIDTH);
        let plot_height = inner.height.saturating_sub(1);

        let visible_count = self.bars.len().min(plot_width.max(1) as usize);
        let visible = &self.bars[self.bars.len() - visible_count..];

        let title = format!(
            " {} Candlestick Chart | {} to {} ",
            self.symbol,
            visible[0].date,
            visible[visible.len() - 1].date
        );
        let block = Block::default().title(title).borders(Borders::ALL);
        block.render(area, buf);

        if plot_width == 0 || plot_height == 0 {
            return;
        }

        let y_min = visible.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
        let y_max = visible.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
        let span = y_max - y_min;
        let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
        let (y_lower, y_upper) = (y_min - pad, y_max + pad);

        let label_style = Style::default().fg(Color::DarkGray);
        let labels = [y_upper, (y_upper + y_lower) / 2.0, y_lower];
        let rows = [0u16, plot_height / 2, plot_height.saturating_sub(1)];
        for (value, row) in labels.iter().zip(rows.iter()) {
            buf.set_string(inner.x, inner.y + row, format!("{:>9.2}", value), label_style);
        }

        let plot_left = inner.x + LABEL_WIDTH;
        for (i, bar) in visible.iter().enumerate() {
            let x = plot_left + i as u16;
            if x >= inner.right() {
                break;
            }

            let style = Style::default().fg(if bar.is_bullish() {
                Color::Green
            } else {
                Color::Red
            });

            let high_y = Self::price_to_y(bar.high, y_lower, y_upper, plot_height);
            let low_y = Self::price_to_y(bar.low, y_lower, y_upper, plot_height);
            let body_top = Self::price_to_y(bar.open.max(bar.close), y_lower, y_upper, plot_height);
            let body_bottom =
                Self::price_to_y(bar.open.min(bar.close), y_lower, y_upper, plot_height);

            for y in high_y..body_top {
                buf.set_string(x, inner.y + y, "│", style);
            }
            for y in body_top..=body_bottom {
                buf.set_string(x, inner.y + y, "█", style);
            }
            for y in (body_bottom + 1)..=low_y {
                buf.set_string(x, inner.y + y, "│", style);
            }
        }

        let footer_y = inner.y + plot_height;
        buf.set_string(
            plot_left,
            footer_y,
            format!("{} of {} bars", visible.len(), self.bars.len()),
            label_style,
        );
    }
}
