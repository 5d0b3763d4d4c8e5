//! City detail modal.
//!
//! Shows the selected city's gender split, literacy against the national
//! average, geography, density trend, and how it compares with the most
//! populous cities.

use super::constants::{DETAIL_BAR_WIDTH, DETAIL_POPUP_HEIGHT_PERCENT, DETAIL_POPUP_WIDTH_PERCENT};
use super::format::{format_compact, format_decimal, format_signed_percent, format_thousands, truncate_to_width};
use super::helpers::{centered_rect, empty_line, key_value_line, text_bar};
use super::styles::Theme;
use crate::engine::{growth_series, CityDetail, CityProfile, NATIONAL_LITERACY_AVERAGE};
use crate::model::CityRecord;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the detail modal for `city` over the whole frame.
///
/// `top_cities` feeds the comparison chart; `city` is highlighted when it is
/// among them.
pub fn render_detail_modal(
    frame: &mut Frame,
    city: &CityRecord,
    top_cities: &[&CityRecord],
    reference_year: i32,
    theme: &Theme,
) {
    let area = centered_rect(DETAIL_POPUP_WIDTH_PERCENT, DETAIL_POPUP_HEIGHT_PERCENT, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.header)
        .style(theme.base)
        .title(format!(" {}, {} ", city.name, city.state))
        .title_bottom(Line::from(" Esc to close · j/k next city ").alignment(Alignment::Center));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let detail = match CityDetail::from_record(city, reference_year) {
        Ok(detail) => detail,
        Err(err) => {
            tracing::warn!(city_id = city.id, error = %err, "Cannot compute city detail");
            let message = Paragraph::new(Line::styled(err.to_string(), theme.negative))
                .alignment(Alignment::Center);
            frame.render_widget(message, inner);
            return;
        }
    };

    let [info_area, compare_area] =
        Layout::vertical([Constraint::Length(12), Constraint::Min(6)]).areas(inner);
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(info_area);

    frame.render_widget(
        Paragraph::new(demographics_lines(city, &detail, theme)).wrap(Wrap { trim: false }),
        left,
    );
    frame.render_widget(
        Paragraph::new(geography_lines(city, &detail, theme)).wrap(Wrap { trim: false }),
        right,
    );

    let [chart_area, growth_area, profile_area] = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
    ])
    .areas(compare_area);
    render_comparison_chart(frame, chart_area, city, top_cities, theme);
    frame.render_widget(
        Paragraph::new(growth_lines(city, top_cities, theme)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(" Growth Trends (%) "),
        ),
        growth_area,
    );
    frame.render_widget(
        Paragraph::new(profile_lines(city, theme)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(" City Profile "),
        ),
        profile_area,
    );
}

fn section(title: &'static str, theme: &Theme) -> Line<'static> {
    Line::styled(title, theme.header.add_modifier(Modifier::UNDERLINED))
}

fn demographics_lines(city: &CityRecord, detail: &CityDetail, theme: &Theme) -> Vec<Line<'static>> {
    let total = city.total_population as f64;
    let gender_bar = |label: &str, count: u64, pct: f64, style| {
        Line::from(vec![
            Span::styled(format!("{label:<7}"), theme.title),
            Span::styled(text_bar(count as f64 / total, DETAIL_BAR_WIDTH), style),
            Span::styled(format!(" {pct:.1}%  ({})", format_thousands(count)), theme.value),
        ])
    };

    vec![
        section("Demographics", theme),
        key_value_line(
            "Population",
            format_thousands(city.total_population),
            theme.title,
            theme.value,
        ),
        gender_bar("Male", city.male_population, detail.male_percentage, theme.male),
        gender_bar("Female", city.female_population, detail.female_percentage, theme.female),
        empty_line(),
        Line::from(vec![
            Span::styled("Literacy: ", theme.title),
            Span::styled(format!("{:.1}%", city.literacy_rate), theme.value),
            Span::styled(
                format!(
                    "  {} vs national {NATIONAL_LITERACY_AVERAGE:.1}%",
                    format_signed_percent(detail.literacy_gap)
                ),
                theme.signed(detail.literacy_gap),
            ),
        ]),
        Line::from(vec![
            Span::styled("Growth: ", theme.title),
            Span::styled(
                format_signed_percent(detail.growth_percentage),
                theme.signed(detail.growth_percentage),
            ),
        ]),
    ]
}

fn geography_lines(city: &CityRecord, detail: &CityDetail, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Geography", theme),
        key_value_line("Region", city.region.to_string(), theme.title, theme.value),
        key_value_line(
            "Area",
            format!("{} km²", format_decimal(city.area, 1)),
            theme.title,
            theme.value,
        ),
        key_value_line(
            "Urban area",
            detail.urban_area_label.clone(),
            theme.title,
            theme.value,
        ),
        key_value_line(
            "Established",
            format!("{} ({} years)", city.established_year, detail.city_age),
            theme.title,
            theme.value,
        ),
        empty_line(),
        section("Density Trend (/km²)", theme),
    ];

    let peak = detail
        .density_trend
        .iter()
        .map(|(_, d)| *d)
        .fold(0.0_f64, f64::max);
    for (year, density) in &detail.density_trend {
        let ratio = if peak > 0.0 { density / peak } else { 0.0 };
        lines.push(Line::from(vec![
            Span::styled(format!("{year}  "), theme.title),
            Span::styled(text_bar(ratio, DETAIL_BAR_WIDTH / 2), theme.bar),
            Span::styled(format!(" {}", format_decimal(*density, 0)), theme.value),
        ]));
    }
    lines
}

fn render_comparison_chart(
    frame: &mut Frame,
    area: Rect,
    city: &CityRecord,
    top_cities: &[&CityRecord],
    theme: &Theme,
) {
    let bars: Vec<Bar> = top_cities
        .iter()
        .map(|other| {
            let style = if other.id == city.id {
                theme.bar_highlight
            } else {
                theme.bar
            };
            Bar::default()
                .label(Line::from(truncate_to_width(&other.name, 8)))
                .value(other.total_population)
                .text_value(format_compact(other.total_population))
                .style(style)
                .value_style(theme.value.add_modifier(Modifier::REVERSED))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(format!(" Top {} by Population ", top_cities.len())),
        )
        .bar_width(8)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// One line per top city: name, a bar scaled to the largest swing, and the
/// signed growth.
fn growth_lines(city: &CityRecord, top_cities: &[&CityRecord], theme: &Theme) -> Vec<Line<'static>> {
    const NAME_WIDTH: usize = 10;
    const BAR_WIDTH: usize = 10;

    let series = growth_series(top_cities);
    let widest = series.iter().map(|(_, g)| g.abs()).fold(0.0_f64, f64::max);
    top_cities
        .iter()
        .zip(series)
        .map(|(other, (name, growth))| {
            let name_style = if other.id == city.id {
                theme.bar_highlight
            } else {
                theme.title
            };
            let ratio = if widest > 0.0 { growth.abs() / widest } else { 0.0 };
            Line::from(vec![
                Span::styled(
                    format!("{:<NAME_WIDTH$} ", truncate_to_width(name, NAME_WIDTH)),
                    name_style,
                ),
                Span::styled(text_bar(ratio, BAR_WIDTH), theme.signed(growth)),
                Span::styled(format!(" {}", format_signed_percent(growth)), theme.signed(growth)),
            ])
        })
        .collect()
}

fn profile_lines(city: &CityRecord, theme: &Theme) -> Vec<Line<'static>> {
    CityProfile::from_record(city)
        .axes()
        .into_iter()
        .map(|(label, value)| {
            key_value_line(label, format!("{value:.1}"), theme.title, theme.value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::top_by_population;
    use crate::model::Dataset;
    use crate::view::styles::ColorConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(city_id: u32, width: u16, height: u16) -> String {
        let dataset = Dataset::bundled();
        let city = dataset.get(city_id).expect("city exists");
        let top = top_by_population(dataset.all(), 5);
        let theme = Theme::new(false, ColorConfig::enabled());

        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render_detail_modal(frame, city, &top, 2024, &theme))
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn modal_shows_title_and_sections() {
        let out = render(1, 140, 45);
        assert!(out.contains("Mumbai, Maharashtra"));
        assert!(out.contains("Demographics"));
        assert!(out.contains("Geography"));
        assert!(out.contains("Density Trend"));
        assert!(out.contains("City Profile"));
        assert!(out.contains("Top 5 by Population"));
        assert!(out.contains("Growth Trends"));
    }

    #[test]
    fn modal_lists_growth_of_each_top_city() {
        let out = render(1, 140, 45);
        // Mumbai's own growth also appears in the demographics block, so
        // check the other top cities.
        assert!(out.contains("+21.2%"), "Delhi growth");
        assert!(out.contains("+47.7%"), "Bengaluru growth");
        assert!(out.contains("+4.1%"), "Hyderabad growth");
        assert!(out.contains("+22.8%"), "Ahmedabad growth");
    }

    #[test]
    fn modal_shows_national_literacy_comparison() {
        let out = render(1, 140, 45);
        assert!(out.contains("vs national 77.7%"));
    }

    #[test]
    fn modal_shows_density_trend_years() {
        let out = render(2, 140, 45);
        for year in ["2011", "2015", "2020", "2024"] {
            assert!(out.contains(year), "missing trend year {year}");
        }
    }

    #[test]
    fn modal_renders_in_small_terminal() {
        // Must not panic when the popup is cramped.
        let _ = render(3, 40, 12);
    }
}
