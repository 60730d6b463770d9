use std::io::Write;

use clap::{Arg, ArgAction, ArgMatches};
use dmmf_codegen::dmmf::DmmfDocument;
use dmmf_codegen::settings::ResolveSettings;
use dmmf_codegen::{resolve_document, ResolvedObject};
use eyre::Context;

pub struct ResolveCommand;

impl ResolveCommand {
    pub fn new_cmd() -> clap::Command {
        clap::Command::new("resolve")
            .about("Select the GraphQL input type of every input object field")
            .arg(Arg::new("dmmf").long("dmmf").required(true))
            .arg(Arg::new("settings").long("settings"))
            .arg(
                Arg::new("use-input-type")
                    .long("use-input-type")
                    .value_name("KEY=VALUE")
                    .action(ArgAction::Append),
            )
            .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
            .arg(Arg::new("output").long("output"))
    }

    pub fn exec(arg_matches: &ArgMatches) -> eyre::Result<()> {
        let dmmf_path = arg_matches
            .get_one::<String>("dmmf")
            .ok_or_else(|| eyre::eyre!("--dmmf is required"))?;

        let document = std::fs::read_to_string(dmmf_path)
            .wrap_err_with(|| format!("could not read {dmmf_path}"))
            .and_then(|input| DmmfDocument::from_json(&input))
            .wrap_err_with(|| format!("could not parse dmmf document {dmmf_path}"))?;

        let settings = load_settings(arg_matches)?;
        let objects = resolve_document(&document, &settings)?;

        let rendered = if arg_matches.get_flag("json") {
            serde_json::to_string_pretty(&objects)?
        } else {
            render_text(&objects)
        };

        if let Some(output) = arg_matches.get_one::<String>("output") {
            let mut file = std::fs::File::create(output)?;
            file.write_all(rendered.as_bytes())?;
            tracing::info!(output = output.as_str(), "wrote resolved input types");
        } else {
            println!("{}", rendered);
        }

        Ok(())
    }
}

fn load_settings(arg_matches: &ArgMatches) -> eyre::Result<ResolveSettings> {
    let mut settings = match arg_matches.get_one::<String>("settings") {
        Some(path) => {
            let input = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("could not read settings {path}"))?;
            serde_json::from_str(&input)
                .wrap_err_with(|| format!("could not parse settings {path}"))?
        }
        None => ResolveSettings::default(),
    };

    let entries = arg_matches
        .get_many::<String>("use-input-type")
        .into_iter()
        .flatten()
        .map(|entry| {
            entry
                .split_once('=')
                .ok_or_else(|| eyre::eyre!("expected KEY=VALUE, got {entry}"))
        })
        .collect::<eyre::Result<Vec<_>>>()?;

    settings.merge(ResolveSettings::from_entries(entries)?);

    Ok(settings)
}

fn render_text(objects: &[ResolvedObject]) -> String {
    objects
        .iter()
        .flat_map(|object| {
            object
                .fields
                .iter()
                .map(move |field| format!("{}.{}: {}", object.name, field.name, field.input_type))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
