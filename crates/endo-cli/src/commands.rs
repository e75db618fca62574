use std::path::{Path, PathBuf};

use tracing::info;

use endo_core::library::{TemplateDraft, TemplateLibrary};
use endo_core::models::note::{NoteData, PartialNoteData};
use endo_core::models::template::{Template, TemplateScope};
use endo_export::export::export_referral_docx;
use endo_export::images::{attach_image, clear_image};
use endo_notes::merge::{apply_template_to_note_data, capture_template_data, normalize_note_data};
use endo_notes::referral::{build_referral_blocks, render_referral_letter};
use endo_notes::soap::generate_soap_note;

use crate::cli::{Cli, Command, TemplateCommand};
use crate::config::{self, EndoConfig};

/// Read a note file. Missing fields take their initial values, and
/// diagnoses and tooth type are derived the same way a template load does.
pub fn read_note(path: &Path) -> eyre::Result<NoteData> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read note at {}: {e}", path.display()))?;
    let partial: PartialNoteData = serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("invalid note JSON in {}: {e}", path.display()))?;
    Ok(normalize_note_data(&partial))
}

/// File name for an exported referral: patient name and date when present.
pub fn export_file_name(note: &NoteData) -> String {
    let stem: String = [note.patient_name.trim(), note.date.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "referral.docx".to_string()
    } else {
        format!("referral_{stem}.docx")
    }
}

/// Distinct treatments across all tooth plans, in first-seen order.
fn procedure_types(note: &NoteData) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for treatment in note
        .tooth_treatment_plans
        .iter()
        .flat_map(|plan| plan.treatment_performed.iter())
    {
        if !types.contains(treatment) {
            types.push(treatment.clone());
        }
    }
    types
}

fn find_template<'a>(library: &'a TemplateLibrary, name: &str) -> eyre::Result<&'a Template> {
    library
        .find_by_name(name)
        .ok_or_else(|| eyre::eyre!("no template named '{name}'"))
}

fn write_or_print(output: Option<&Path>, contents: &str) -> eyre::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, contents)?;
            info!(path = %path.display(), "written");
        }
        None => println!("{contents}"),
    }
    Ok(())
}

pub async fn run(cli: Cli) -> eyre::Result<()> {
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => config::default_config_dir()?,
    };
    let mut cfg = config::load_config(&config_dir)?;

    match cli.command {
        Command::Soap(args) => {
            let note = read_note(&args.note)?;
            println!("{}", generate_soap_note(&note));
        }
        Command::Letter {
            note,
            include_post_op,
        } => {
            let note = read_note(&note.note)?;
            let include = include_post_op || cfg.referral_template.include_post_op;
            println!("{}", render_referral_letter(&build_referral_blocks(&note, include)));
        }
        Command::Export { note, output } => {
            let note = read_note(&note.note)?;
            let path = output_path(&cfg, &config_dir, output, &note);
            let bytes = export_referral_docx(&note, &cfg.referral_template).await?;
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, &bytes).await?;
            println!("{}", path.display());
        }
        Command::Template(command) => {
            run_template(command, &cfg.library_path(&config_dir))?;
        }
        Command::Image {
            slot,
            path,
            clear,
            index,
        } => {
            let slot = slot.slot(index);
            match path {
                Some(path) if !clear => {
                    attach_image(&mut cfg.referral_template, slot, &path).await?
                }
                _ => clear_image(&mut cfg.referral_template, slot),
            }
            config::save_config(&config_dir, &cfg)?;
        }
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&cfg)?);
        }
    }
    Ok(())
}

fn output_path(
    cfg: &EndoConfig,
    config_dir: &Path,
    output: Option<PathBuf>,
    note: &NoteData,
) -> PathBuf {
    output.unwrap_or_else(|| {
        cfg.output_dir
            .clone()
            .unwrap_or_else(|| config_dir.join("exports"))
            .join(export_file_name(note))
    })
}

fn run_template(command: TemplateCommand, library_path: &Path) -> eyre::Result<()> {
    let mut library = config::load_library(library_path)?;

    match command {
        TemplateCommand::List { matching } => {
            let templates: Vec<&Template> = match matching {
                Some(path) => {
                    let note = read_note(&path)?;
                    library.matching(note.visit_type, note.tooth_type).collect()
                }
                None => library.templates().iter().collect(),
            };
            for template in templates {
                let scope: Vec<&str> = template.scope.iter().map(|s| s.as_str()).collect();
                let scope = if scope.is_empty() {
                    TemplateScope::All.as_str().to_string()
                } else {
                    scope.join(",")
                };
                println!("{}\t{}", template.name, scope);
            }
        }
        TemplateCommand::Save {
            note,
            name,
            scope,
            tagged,
            overwrite,
        } => {
            let current = read_note(&note.note)?;
            let scope: Vec<TemplateScope> = scope.into_iter().map(TemplateScope::from).collect();
            let draft = TemplateDraft {
                name,
                data: capture_template_data(&current, &scope),
                scope,
                visit_type: tagged.then_some(current.visit_type),
                tooth_type: if tagged { current.tooth_type } else { None },
                procedure_types: if tagged {
                    procedure_types(&current)
                } else {
                    Vec::new()
                },
            };
            library.save(draft, overwrite)?;
            config::save_library(library_path, &library)?;
        }
        TemplateCommand::Apply { note, name, output } => {
            let current = read_note(&note.note)?;
            let template = find_template(&library, &name)?;
            let next = apply_template_to_note_data(&current, template);
            write_or_print(output.as_deref(), &serde_json::to_string_pretty(&next)?)?;
        }
        TemplateCommand::Rename { from, to } => {
            let id = find_template(&library, &from)?.id;
            library.rename(id, &to)?;
            config::save_library(library_path, &library)?;
        }
        TemplateCommand::Delete { name } => {
            let id = find_template(&library, &name)?.id;
            library.delete(id)?;
            config::save_library(library_path, &library)?;
        }
    }
    Ok(())
}
