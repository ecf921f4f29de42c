// File: crates/plot-core/tests/autoscale.rs
// Purpose: Validate the y-domain override: niced data extent, finite-only,
// with the seeded range standing when nothing finite exists.

use plot_core::{Axis, Chart};

fn chart_over(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("x", x_min, x_max);
    chart.y_axis = Axis::new("y", y_min, y_max);
    chart
}

#[test]
fn sine_domain_nices_to_unit_interval() {
    let mut chart = chart_over(-6.28, 6.28, -5.0, 5.0);
    chart.plot_expression("sin(x)").unwrap();
    // data extent just inside [-1, 1] rounds outward to [-1, 1]
    assert_eq!(chart.y_axis.min, -1.0);
    assert_eq!(chart.y_axis.max, 1.0);
}

#[test]
fn user_y_range_is_overridden_by_data() {
    let mut chart = chart_over(0.0, 10.0, -100.0, 100.0);
    chart.plot_expression("x^2").unwrap();
    assert!(chart.y_axis.min >= -5.0, "min was {}", chart.y_axis.min);
    assert!(chart.y_axis.max >= 100.0);
    // niced bounds enclose the data tightly-ish, not the seeded span
    assert!(chart.y_axis.max <= 120.0);
}

#[test]
fn constant_division_by_zero_keeps_the_seeded_range() {
    let mut chart = chart_over(-1.0, 1.0, -2.0, 2.0);
    chart.plot_expression("1/0").unwrap();
    // every sample is +inf: no finite extent, the seeded range stands
    assert!(chart.samples.iter().all(|s| s.y.is_infinite()));
    assert_eq!(chart.y_axis.min, -2.0);
    assert_eq!(chart.y_axis.max, 2.0);
}

#[test]
fn partially_non_finite_data_scales_to_the_finite_part() {
    // ln|x| is -inf exactly at the x = 0 sample, finite everywhere else
    let mut chart = chart_over(-1.0, 1.0, -1.0, 1.0);
    chart.plot_expression("ln(abs(x))").unwrap();
    assert!(chart.samples.iter().any(|s| !s.y.is_finite()));
    let finite_max = chart
        .samples
        .iter()
        .map(|s| s.y)
        .filter(|y| y.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    assert!(chart.y_axis.max >= finite_max);
    assert!(chart.y_axis.max.is_finite());
    assert!(chart.y_axis.min.is_finite());
}

#[test]
fn constant_function_yields_a_renderable_domain() {
    let mut chart = chart_over(0.0, 1.0, -1.0, 1.0);
    chart.plot_expression("2").unwrap();
    // degenerate extent passes through; the render scale widens it safely
    assert_eq!(chart.y_axis.min, 2.0);
    assert_eq!(chart.y_axis.max, 2.0);
    chart
        .render_to_png_bytes(&plot_core::RenderOptions::default())
        .expect("degenerate domain still renders");
}
