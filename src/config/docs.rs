//! Config field documentation: single source of truth for descriptions.
//!
//! Used by:
//! - `lcat --show-config` to annotate TOML output with inline comments
//! - `cargo xtask gen-docs` to generate `docs/Configuration.md`

use std::collections::HashMap;

/// Documentation for a config section.
pub struct SectionDoc {
    /// TOML section name (e.g., "filter", "input")
    pub name: &'static str,
    /// Human-readable description of the section
    pub description: &'static str,
    /// Fields in this section
    pub fields: &'static [FieldDoc],
}

/// Documentation for a config field.
pub struct FieldDoc {
    /// Field name as it appears in TOML
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Default value as a display string
    pub default_display: &'static str,
}

/// Config sections in canonical display order.
pub const CONFIG_SECTIONS: &[SectionDoc] = &[
    SectionDoc {
        name: "filter",
        description: "Line transformations applied when no flag is given",
        fields: &[
            FieldDoc {
                name: "trim_trailing_spaces",
                description: "Remove trailing spaces and tabs (-r)",
                default_display: "false",
            },
            FieldDoc {
                name: "number_lines",
                description: "Prefix lines with their input line number (-n)",
                default_display: "false",
            },
            FieldDoc {
                name: "show_ends",
                description: "Append $ to every line (-E)",
                default_display: "false",
            },
            FieldDoc {
                name: "show_tabs",
                description: "Display TAB characters as ^I (-T)",
                default_display: "false",
            },
            FieldDoc {
                name: "squeeze_blank",
                description: "Keep only the first line of each blank run (-s)",
                default_display: "false",
            },
        ],
    },
    SectionDoc {
        name: "input",
        description: "How input files are read",
        fields: &[
            FieldDoc {
                name: "line_scope",
                description: "\"per-source\" restarts numbering per file, \"continuous\" does not",
                default_display: "per-source",
            },
            FieldDoc {
                name: "on_error",
                description: "\"continue\" skips unreadable files, \"abort\" stops at the first",
                default_display: "continue",
            },
        ],
    },
];

/// Annotate a serialized config with a comment line above every known field.
pub fn annotate_config(toml_str: &str) -> String {
    // Build lookup: (section_name, field_name) -> description
    let mut lookup: HashMap<(&str, &str), &str> = HashMap::new();
    for section in CONFIG_SECTIONS {
        for field in section.fields {
            lookup.insert((section.name, field.name), field.description);
        }
    }

    let mut result = String::new();
    let mut current_section = String::new();

    for line in toml_str.lines() {
        let trimmed = line.trim();

        // Track section headers
        if trimmed.starts_with('[') && !trimmed.starts_with("[[") {
            let name = trimmed
                .trim_start_matches('[')
                .split(']')
                .next()
                .unwrap_or("")
                .trim();
            current_section = name.to_string();
            result.push_str(line);
            result.push('\n');
            continue;
        }

        if let Some((before_eq, _)) = trimmed.split_once('=') {
            let key = before_eq.trim();
            if let Some(desc) = lookup.get(&(current_section.as_str(), key)) {
                result.push_str(&format!("# {}\n", desc));
            }
        }

        result.push_str(line);
        result.push('\n');
    }

    result
}

/// Generate the Configuration reference page as markdown.
pub fn generate_config_markdown() -> String {
    let mut md = String::new();

    md.push_str(
        "<!-- This file is auto-generated by `cargo xtask gen-docs`. Do not edit manually. -->\n\n",
    );
    md.push_str("# Configuration\n\n");
    md.push_str("lcat reads an optional TOML file at `~/.config/lcat/config.toml`.\n");
    md.push_str("Command-line flags are added on top of these defaults.\n\n");
    md.push_str("## Quick Commands\n\n");
    md.push_str("```bash\n");
    md.push_str("lcat --show-config    # View the effective configuration\n");
    md.push_str("lcat --init-config    # Write a config file with current settings\n");
    md.push_str("lcat --no-config ...  # Ignore the config file for one run\n");
    md.push_str("```\n\n");
    md.push_str("## Configuration Sections\n\n");

    for section in CONFIG_SECTIONS {
        md.push_str(&format!("### [{}]\n\n", section.name));
        md.push_str(&format!("{}\n\n", section.description));
        md.push_str("| Option | Default | Description |\n");
        md.push_str("|--------|---------|-------------|\n");
        for field in section.fields {
            md.push_str(&format!(
                "| `{}` | `{}` | {} |\n",
                field.name,
                field.default_display,
                field.description.replace('|', "\\|")
            ));
        }
        md.push('\n');
    }

    md.push_str("## Example Configuration\n\n");
    md.push_str("```toml\n");
    md.push_str("[filter]\n");
    md.push_str("number_lines = true\n");
    md.push_str("squeeze_blank = true\n\n");
    md.push_str("[input]\n");
    md.push_str("line_scope = \"continuous\"\n");
    md.push_str("on_error = \"abort\"\n");
    md.push_str("```\n");

    md
}
