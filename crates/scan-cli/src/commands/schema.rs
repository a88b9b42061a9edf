use anyhow::bail;
use scan_schema::SchemaRegistry;

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `scan-review schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    if args.type_name == "list" {
        return output(&registry.list(), flags.format);
    }

    let Some(schema) = registry.get(&args.type_name) else {
        bail!(
            "unknown schema '{}' (available: {})",
            args.type_name,
            registry.list().join(", ")
        );
    };

    // Schemas are JSON documents, so table mode prints them pretty as well.
    let rendered = match flags.format {
        OutputFormat::Raw => serde_json::to_string(schema)?,
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string_pretty(schema)?,
    };
    println!("{rendered}");
    Ok(())
}
