//! End-to-end rendering through the format registry.

use moddoc_render::{format, render, Module, RenderError, Settings, SortBy};

const MODULE_JSON: &str = r##"{
    "header": "# Network\n\nCreates a VPC_with_subnets. See https://example.com/a_b.",
    "inputs": [
        { "name": "tags", "type": "map(string)", "description": "Extra tags", "default": {}, "position": 2 },
        { "name": "_foo", "type": "string", "description": "Leading | underscore", "required": true, "position": 0 },
        { "name": "cidr", "type": "string", "default": "10.0.0.0/16", "position": 1 }
    ],
    "outputs": [
        { "name": "vpc_id", "description": "The VPC id", "value": "vpc-123", "position": 0 },
        { "name": "password", "description": "Admin password", "value": "hunter2", "sensitive": true, "position": 1 }
    ],
    "providers": [{ "name": "aws", "version": ">= 4.0" }],
    "requirements": [{ "name": "terraform", "version": ">= 1.3" }],
    "resources": [],
    "modules": [{ "name": "subnets", "source": "./modules/subnets" }]
}"##;

fn module() -> Module {
    serde_json::from_str(MODULE_JSON).unwrap()
}

fn settings() -> Settings {
    Settings::default()
}

#[test]
fn test_empty_resources_render_empty_state_without_table() {
    let doc = render("markdown table", &module(), &settings()).unwrap();
    let section = doc
        .split("## Resources\n\n")
        .nth(1)
        .and_then(|rest| rest.split("\n\n## ").next())
        .unwrap();
    assert_eq!(section, "No resources.");
}

#[test]
fn test_anchor_for_leading_underscore() {
    let doc = render("markdown table", &module(), &settings()).unwrap();
    assert!(doc.contains("| <a name=\"inputs__foo\"></a> [\\_foo](#inputs__foo) | Leading \\| underscore | `string` | n/a | yes |"));

    let plain = Settings {
        show_anchors: false,
        ..settings()
    };
    let doc = render("markdown table", &module(), &plain).unwrap();
    assert!(doc.contains("| _foo | Leading \\| underscore |"));
}

#[test]
fn test_sensitive_output_is_masked() {
    let with_values = Settings {
        output_values: true,
        ..settings()
    };
    let doc = render("markdown table", &module(), &with_values).unwrap();
    assert!(doc.contains("| Name | Description | Value | Sensitive |"));
    assert!(doc.contains("| `<sensitive>` | yes |"));
    assert!(doc.contains("| `\"vpc-123\"` | no |"));
    assert!(!doc.contains("hunter2"));

    let no_sensitivity = Settings {
        show_sensitivity: false,
        ..with_values
    };
    let doc = render("markdown table", &module(), &no_sensitivity).unwrap();
    assert!(doc.contains("| Name | Description | Value |\n"));
    assert!(!doc.contains("Sensitive"));
}

#[test]
fn test_header_is_escaped_but_urls_are_kept() {
    let doc = render("markdown", &module(), &settings()).unwrap();
    assert!(doc.starts_with(
        "# Network\n\nCreates a VPC\\_with\\_subnets. See https://example.com/a_b.\n\n## Requirements"
    ));
}

#[test]
fn test_hidden_sections_are_absent() {
    let only_outputs = Settings {
        show_header: false,
        show_inputs: false,
        show_module_calls: false,
        show_providers: false,
        show_requirements: false,
        show_resources: false,
        ..settings()
    };
    for name in ["markdown table", "markdown document", "asciidoc table", "asciidoc document"] {
        let doc = render(name, &module(), &only_outputs).unwrap();
        assert!(!doc.contains("Inputs"), "{name}: inputs leaked");
        assert!(!doc.contains("Requirements"), "{name}: requirements leaked");
        assert!(doc.contains("Outputs"), "{name}: outputs missing");
    }
}

#[test]
fn test_section_order() {
    let doc = render("markdown document", &module(), &settings()).unwrap();
    let positions: Vec<usize> = [
        "## Requirements",
        "## Providers",
        "## Modules",
        "## Resources",
        "## Required Inputs",
        "## Optional Inputs",
        "## Outputs",
    ]
    .iter()
    .map(|heading| doc.find(heading).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_sorting_is_decided_before_rendering() {
    let mut by_position = module();
    by_position.sort(&SortBy::default());
    let doc = render("tfvars hcl", &by_position, &settings()).unwrap();
    let names: Vec<&str> = doc.lines().map(|l| l.split(' ').next().unwrap()).collect();
    assert_eq!(names, ["_foo", "cidr", "tags"]);

    let mut by_name = module();
    by_name.sort(&SortBy {
        name: true,
        ..Default::default()
    });
    let doc = render("tfvars hcl", &by_name, &settings()).unwrap();
    let names: Vec<&str> = doc.lines().map(|l| l.split(' ').next().unwrap()).collect();
    assert_eq!(names, ["_foo", "cidr", "tags"]);

    let mut required_first = module();
    required_first.sort(&SortBy {
        name: true,
        required: true,
        ..Default::default()
    });
    assert_eq!(required_first.inputs[0].name, "_foo");
}

#[test]
fn test_rendering_is_deterministic() {
    let module = module();
    let settings = settings();
    for name in format::names() {
        let first = render(name, &module, &settings).unwrap();
        let second = render(name, &module, &settings).unwrap();
        assert_eq!(first, second, "{name} is not deterministic");
    }
}

#[test]
fn test_names_are_case_insensitive() {
    let a = render("Markdown  Table", &module(), &settings()).unwrap();
    let b = render("md", &module(), &settings()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_unknown_format_is_an_error() {
    let err = render("latex", &module(), &settings()).unwrap_err();
    assert!(matches!(err, RenderError::UnknownFormat(_)));
    assert_eq!(err.to_string(), "unknown format: 'latex'");
}

#[test]
fn test_tfvars_json() {
    let doc = render("tfvars json", &module(), &settings()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
    assert_eq!(parsed["_foo"], "");
    assert_eq!(parsed["cidr"], "10.0.0.0/16");
    assert_eq!(parsed["tags"], serde_json::json!({}));
}
