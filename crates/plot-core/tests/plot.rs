// File: crates/plot-core/tests/plot.rs
// Purpose: Plot-operation error scenarios: bad expressions abort after axes,
// bad range text is reported before any chart state changes.

use plot_core::{parse_range, Axis, Chart, PlotError, RangeError, RenderOptions};

#[test]
fn unknown_identifier_aborts_with_axes_intact() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("x", -1.0, 1.0);
    chart.y_axis = Axis::new("y", -2.0, 2.0);

    let err = chart.plot_expression("undefinedname").unwrap_err();
    assert!(matches!(
        err,
        PlotError::Expr(plot_expr::ExprError::UnknownIdentifier { .. })
    ));

    // no series, no overlay data; axes untouched and still renderable
    assert!(chart.samples.is_empty());
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (-2.0, 2.0));
    let bytes = chart
        .render_to_png_bytes(&RenderOptions::default())
        .expect("axes-only chart renders");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn syntax_errors_are_plot_errors() {
    let mut chart = Chart::new();
    assert!(chart.plot_expression("2 +").is_err());
    assert!(chart.plot_expression("sin(").is_err());
    assert!(chart.plot_expression("").is_err());
    assert!(chart.samples.is_empty());
}

#[test]
fn error_text_is_user_presentable() {
    let mut chart = Chart::new();
    let err = chart.plot_expression("undefinedname").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid function: unknown identifier 'undefinedname'"
    );
}

#[test]
fn malformed_range_text_is_a_typed_error() {
    assert_eq!(
        parse_range("abc,2"),
        Err(RangeError::NotANumber("abc".to_string()))
    );
    // the failure happens before any chart is touched; a fresh plot after
    // the rejection works normally
    let mut chart = Chart::new();
    let (x0, x1) = parse_range("-6.28,6.28").unwrap();
    chart.x_axis = Axis::new("x", x0, x1);
    chart.plot_expression("sin(x)").unwrap();
    assert!(!chart.samples.is_empty());
}

#[test]
fn chart_stays_usable_after_a_failed_plot() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("x", 0.0, 1.0);
    chart.plot_expression("nope(x)").unwrap_err();
    chart.plot_expression("x + 1").expect("next plot succeeds");
    assert!(!chart.samples.is_empty());
}

#[test]
fn division_by_zero_renders_without_a_path_segment_to_infinity() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("x", -1.0, 1.0);
    chart.y_axis = Axis::new("y", -2.0, 2.0);
    chart.plot_expression("1/0").expect("non-finite values are data");
    let bytes = chart
        .render_to_png_bytes(&RenderOptions::default())
        .expect("all-infinite series renders as axes plus empty path");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
