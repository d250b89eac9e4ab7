use dioxus::prelude::*;

use crate::core::format;
use crate::i18n::{use_bundle, ClinicalText};

/// One group of bars in the comparison chart. Figures are illustrative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceRow {
    pub method: Method,
    pub accuracy: f64,
    pub sensitivity: f64,
    pub specificity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Traditional,
    PancreaScan,
}

impl Method {
    fn label(self, text: &ClinicalText) -> &str {
        match self {
            Method::Traditional => &text.row_traditional,
            Method::PancreaScan => &text.row_product,
        }
    }
}

pub const CLINICAL_PERFORMANCE: [PerformanceRow; 2] = [
    PerformanceRow {
        method: Method::Traditional,
        accuracy: 76.5,
        sensitivity: 72.1,
        specificity: 78.4,
    },
    PerformanceRow {
        method: Method::PancreaScan,
        accuracy: 94.7,
        sensitivity: 93.2,
        specificity: 95.8,
    },
];

#[component]
pub fn ComparisonChart() -> Element {
    let text = &use_bundle().clinical;
    let series = [
        ("accuracy", &text.chart_acc),
        ("sensitivity", &text.chart_sens),
        ("specificity", &text.chart_spec),
    ];

    rsx! {
        figure { class: "comparison-chart",
            div { class: "comparison-chart__plot",
                for row in CLINICAL_PERFORMANCE {
                    div { key: "{row.method:?}", class: "comparison-chart__group",
                        div { class: "comparison-chart__bars",
                            {bar("accuracy", row.accuracy)}
                            {bar("sensitivity", row.sensitivity)}
                            {bar("specificity", row.specificity)}
                        }
                        span { class: "comparison-chart__label", {row.method.label(text)} }
                    }
                }
            }
            figcaption { class: "comparison-chart__legend",
                for (series_class, label) in series {
                    span { key: "{series_class}", class: "comparison-chart__legend-item",
                        span { class: "comparison-chart__swatch comparison-chart__swatch--{series_class}" }
                        "{label}"
                    }
                }
            }
        }
    }
}

fn bar(series_class: &str, value: f64) -> Element {
    let height = value.clamp(0.0, 100.0);
    let title = format::format_percent(value);
    rsx! {
        div {
            class: "comparison-chart__bar comparison-chart__bar--{series_class}",
            style: "height: {height}%",
            title: "{title}",
        }
    }
}
