//! Loading a taskbar configuration with per-widget fallbacks.
//!
//! Each widget entry is dispatched on its `kind` tag and validated on its
//! own. A rejected entry is replaced by an empty spacer and logged, so the
//! rest of the bar still renders.
//!
//! Run with `RUST_LOG=warn cargo run --example taskbar_config` to see the
//! rejection logs.

use perch_validator::boundary::parse_or_fallback;
use perch_validator::prelude::*;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"{
    "position": "bottom",
    "height": 32,
    "widgets": [
        { "kind": "apps", "apps": [{ "bundleId": "com.apple.finder" }, { "bundleId": "org.mozilla.firefox", "label": "Web" }] },
        { "kind": "clock", "format": "%H:%M", "width": 80 },
        { "kind": "clock", "fromat": "%H:%M" },
        { "kind": "battery", "width": -10 },
        { "kind": "weather" }
    ]
}"#;

enum Widget {
    Apps { bundle_ids: Vec<String> },
    Clock { format: String, width: f64 },
    Battery { width: f64 },
    Spacer { width: f64, reason: String },
}

impl std::fmt::Display for Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Apps { bundle_ids } => write!(f, "apps {}", bundle_ids.join(", ")),
            Self::Clock { format, width } => write!(f, "clock `{format}` ({width}px)"),
            Self::Battery { width } => write!(f, "battery ({width}px)"),
            Self::Spacer { width, reason } => write!(f, "spacer ({width}px): {reason}"),
        }
    }
}

struct Bar {
    position: String,
    height: f64,
}

fn bar_settings() -> impl Schema<Output = Bar> {
    object! {
        "position" => string(),
        "height" => number().positive(),
    }
    .map(|record| {
        Ok(Bar {
            position: record.try_get("position")?,
            height: record.try_get("height")?,
        })
    })
}

fn apps_widget() -> impl Schema<Output = Widget> {
    let app = object! {
        "bundleId" => string(),
        "label" => string().optional(),
    };
    object! {
        "kind" => literal("apps"),
        "apps" => array(app),
    }
    .map(|record| {
        let apps: Vec<Record> = record.try_get("apps")?;
        let bundle_ids = apps
            .iter()
            .map(|app| app.try_get::<String>("bundleId"))
            .collect::<Result<_, _>>()?;
        Ok(Widget::Apps { bundle_ids })
    })
}

fn clock_widget() -> impl Schema<Output = Widget> {
    object! {
        "kind" => literal("clock"),
        "format" => string(),
        "width" => number().positive().optional(),
    }
    .map(|record| {
        Ok(Widget::Clock {
            format: record.try_get("format")?,
            width: record.try_get::<Option<f64>>("width")?.unwrap_or(60.0),
        })
    })
}

fn battery_widget() -> impl Schema<Output = Widget> {
    object! {
        "kind" => literal("battery"),
        "width" => number().positive().optional(),
    }
    .map(|record| {
        Ok(Widget::Battery {
            width: record.try_get::<Option<f64>>("width")?.unwrap_or(24.0),
        })
    })
}

fn spacer(diagnostic: &Diagnostic) -> Widget {
    Widget::Spacer {
        width: 0.0,
        reason: diagnostic.to_string(),
    }
}

fn build_widget(entry: &Value) -> Widget {
    let kind = entry
        .as_object()
        .and_then(|fields| fields.get("kind"))
        .and_then(Value::as_str);

    match kind {
        Some("apps") => parse_or_fallback(&apps_widget(), entry, |widget| widget, spacer),
        Some("clock") => parse_or_fallback(&clock_widget(), entry, |widget| widget, spacer),
        Some("battery") => parse_or_fallback(&battery_widget(), entry, |widget| widget, spacer),
        other => {
            tracing::warn!(kind = ?other, "unknown widget kind, using fallback");
            Widget::Spacer {
                width: 0.0,
                reason: format!("unknown widget kind {other:?}"),
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = match Value::from_json_str(CONFIG) {
        Ok(input) => input,
        Err(error) => {
            eprintln!("config is not valid JSON: {error}");
            return;
        }
    };

    let Some(mut settings) = input.as_object().cloned() else {
        eprintln!("config must be an object, got {}", input.kind());
        return;
    };
    let widgets = settings.shift_remove("widgets").unwrap_or(Value::Array(Vec::new()));

    // Bar settings are reported in full; widgets get one fallback each.
    let bar = match bar_settings().parse_all(&Value::Object(settings)) {
        Ok(bar) => bar,
        Err(errors) => {
            eprintln!("{errors}");
            return;
        }
    };

    println!("taskbar at {} ({}px)", bar.position, bar.height);
    for entry in widgets.as_array().unwrap_or_default() {
        println!("  {}", build_widget(entry));
    }
}
