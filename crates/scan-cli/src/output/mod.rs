use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;
mod views;

pub use views::TableView;

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Render a response that has a hand-laid table form.
pub fn render_view<T: Serialize + TableView>(
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(value.table(table_options())),
        OutputFormat::Json | OutputFormat::Raw => render(value, format),
    }
}

/// Render any serializable value to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_generic_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a response with a table view in the requested format.
pub fn output_view<T: Serialize + TableView>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_view(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_generic_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();
    let rendered = match serde_json::to_value(value)? {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) => {
            let rows = items
                .iter()
                .map(|item| vec![value_to_cell(item)])
                .collect::<Vec<_>>();
            table::render_table(None, &["value"], &rows, options)
        }
        Value::Object(map) => {
            let fields = map
                .iter()
                .map(|(key, value)| (key.as_str(), value_to_cell(value)))
                .collect::<Vec<_>>();
            table::render_fields(None, &fields, options)
        }
        scalar => value_to_cell(&scalar),
    };
    Ok(rendered)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
