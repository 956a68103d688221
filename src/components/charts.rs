//! Chart Components
//!
//! Plain SVG line and bar charts over day-indexed chart points.

use leptos::prelude::*;
use roadmap_core::domain::{ChartPoint, MetricKey};

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 240.0;

fn value(point: &ChartPoint, key: MetricKey) -> u64 {
    match key {
        MetricKey::Visits => point.visits,
        MetricKey::Connects => point.connects,
        MetricKey::Actions => point.actions,
        MetricKey::Tvl => 0,
    }
}

/// Largest plotted value, never below 1 so empty charts don't divide by zero
fn scale_max(points: &[ChartPoint], keys: &[MetricKey]) -> u64 {
    points
        .iter()
        .flat_map(|p| keys.iter().map(move |&k| value(p, k)))
        .max()
        .unwrap_or(0)
        .max(1)
}

fn y_of(v: u64, max: u64) -> f64 {
    HEIGHT - (v as f64 / max as f64) * HEIGHT
}

/// SVG `points` attribute for one series
fn polyline_points(points: &[ChartPoint], key: MetricKey, max: u64) -> String {
    let step = if points.len() > 1 { WIDTH / (points.len() - 1) as f64 } else { 0.0 };
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if points.len() > 1 { i as f64 * step } else { WIDTH / 2.0 };
            format!("{:.1},{:.1}", x, y_of(value(p, key), max))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// (x, y, width, height) of every bar, grouped by point
fn bar_rects(points: &[ChartPoint], keys: &[MetricKey], max: u64) -> Vec<(f64, f64, f64, f64)> {
    if points.is_empty() || keys.is_empty() {
        return Vec::new();
    }
    let group = WIDTH / points.len() as f64;
    let bar = group * 0.8 / keys.len() as f64;
    let mut rects = Vec::with_capacity(points.len() * keys.len());
    for (i, p) in points.iter().enumerate() {
        for (j, &k) in keys.iter().enumerate() {
            let y = y_of(value(p, k), max);
            rects.push((i as f64 * group + group * 0.1 + j as f64 * bar, y, bar, HEIGHT - y));
        }
    }
    rects
}

fn x_labels(points: &[ChartPoint]) -> impl IntoView {
    let labels: Vec<String> = points.iter().map(|p| p.day.clone()).collect();
    view! {
        <div class="chart-x-labels">
            {labels.into_iter().map(|l| view! { <span>{l}</span> }).collect_view()}
        </div>
    }
}

/// Visits and connects over time
#[component]
pub fn TrafficChart(
    #[prop(into)] points: Signal<Vec<ChartPoint>>,
    #[prop(into)] waiting: Signal<bool>,
) -> impl IntoView {
    const KEYS: [MetricKey; 2] = [MetricKey::Visits, MetricKey::Connects];

    view! {
        <div class="chart-panel">
            <h3 class="chart-title">"Трафик и Конверсии (Cumulative)"</h3>
            <Show when=move || waiting.get()>
                <p class="chart-empty">"Add data to Day 1 to start chart"</p>
            </Show>
            <svg class="chart" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) preserveAspectRatio="none">
                {move || points.with(|points| {
                    let max = scale_max(points, &KEYS);
                    KEYS.iter().map(|&key| view! {
                        <polyline
                            class=format!("series {}", key.as_str())
                            fill="none"
                            points=polyline_points(points, key, max)
                        />
                    }).collect_view()
                })}
            </svg>
            {move || points.with(|points| x_labels(points))}
        </div>
    }
}

/// First actions and wallet connects per day
#[component]
pub fn ActionsChart(
    #[prop(into)] points: Signal<Vec<ChartPoint>>,
    #[prop(into)] waiting: Signal<bool>,
) -> impl IntoView {
    const KEYS: [MetricKey; 2] = [MetricKey::Actions, MetricKey::Connects];

    view! {
        <div class="chart-panel">
            <h3 class="chart-title">"Действия пользователей (Daily)"</h3>
            <Show when=move || waiting.get()>
                <p class="chart-empty">"Waiting for input..."</p>
            </Show>
            <svg class="chart" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) preserveAspectRatio="none">
                {move || points.with(|points| {
                    let max = scale_max(points, &KEYS);
                    bar_rects(points, &KEYS, max)
                        .into_iter()
                        .enumerate()
                        .map(|(i, (x, y, w, h))| view! {
                            <rect
                                class=format!("series {}", KEYS[i % KEYS.len()].as_str())
                                x=x y=y width=w height=h
                            />
                        })
                        .collect_view()
                })}
            </svg>
            <div class="chart-legend">
                <span class="series actions">"First Actions"</span>
                <span class="series connects">"Wallet Connects"</span>
            </div>
            {move || points.with(|points| x_labels(points))}
        </div>
    }
}
