use std::path::Path;

use anyhow::Result;
use comfy_table::Table;

use pdc_cli::pipeline::{CleanRequest, clean_upload, load_registry};
use pdc_cli::types::CleanResult;
use pdc_model::FieldTag;

use crate::cli::CleanArgs;
use crate::summary::apply_table_style;

pub fn run_clean(args: &CleanArgs, standards: Option<&Path>) -> Result<CleanResult> {
    let request = CleanRequest {
        input: args.input.clone(),
        schema: args.schema.clone(),
        country: args.country.clone(),
        output_name: args.name.clone(),
        output_dir: args.output_dir.clone(),
        standards: standards.map(Path::to_path_buf),
        dry_run: args.dry_run,
        report: args.report.clone(),
    };
    clean_upload(&request)
}

pub fn run_schemas(standards: Option<&Path>) -> Result<()> {
    let registry = load_registry(standards)?;
    for schema in registry.schemas() {
        match &schema.description {
            Some(description) => println!("{} - {description}", schema.name),
            None => println!("{}", schema.name),
        }
        let mut table = Table::new();
        table.set_header(vec!["Field", "Tags", "Allowed values"]);
        apply_table_style(&mut table);
        for field in &schema.fields {
            let tags: Vec<&str> = field.tags.iter().map(FieldTag::as_str).collect();
            let allowed = field
                .enum_rule
                .as_ref()
                .map(|rule| rule.values.join(", "))
                .unwrap_or_default();
            table.add_row(vec![field.name.clone(), tags.join(", "), allowed]);
        }
        println!("{table}");
        if !schema.contact_fields.is_empty() {
            println!("Contact fields: {}", schema.contact_fields.join(", "));
        }
    }
    Ok(())
}

pub fn run_countries(standards: Option<&Path>) -> Result<()> {
    let registry = load_registry(standards)?;
    let mut table = Table::new();
    table.set_header(vec!["Country", "Label", "Dialing code", "Local digits"]);
    apply_table_style(&mut table);
    for country in registry.countries() {
        table.add_row(vec![
            country.name.clone(),
            country.label.clone().unwrap_or_default(),
            format!("+{}", country.dialing_code),
            country.local_digits.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
