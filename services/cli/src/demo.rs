use crate::infra::{load_catalog, parse_catalog_kind};
use crate::render;
use crate::session::{ActionReport, WizardSession};
use clap::Args;
use job_profile::config::AppConfig;
use job_profile::error::AppError;
use job_profile::workflows::catalog::{CandidateCatalog, CatalogKind};
use job_profile::workflows::profile::{ActionScript, SearchFilter};
use std::path::PathBuf;
use tracing::info;

/// Built-in walkthrough: the title cap, the skill minimum, salary clamping,
/// case-sensitive location duplicates, and going back a step.
pub(crate) const DEMO_SCRIPT: &str = "step,action,value
title,search,eng
title,toggle,Backend Engineer
title,toggle,Frontend Engineer
title,search,
title,toggle,DevOps Engineer
title,toggle,QA Engineer
title,toggle,Product Manager
title,toggle,Data Engineer
title,continue,
skill,toggle,Rust
skill,toggle,Go
skill,continue,
skill,toggle,PostgreSQL
skill,continue,
preference,complete,
preference,toggle_work_type,Remote
preference,salary_min,20000
preference,salary_max,lots
preference,location_input,  casablanca
preference,add_location,
preference,suggest_location,Casablanca
preference,suggest_location,Casablanca
preference,back,
skill,toggle,Docker
skill,continue,
preference,complete,
";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Candidate catalog CSV (`kind,value`) to use instead of the built-in tables.
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
    /// Print the step view after every action.
    #[arg(long)]
    pub(crate) show_views: bool,
    /// Print the final profile as JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct WizardArgs {
    /// Action script CSV (`step,action,value`) to replay.
    #[arg(long)]
    pub(crate) script: PathBuf,
    /// Candidate catalog CSV (`kind,value`) to use instead of the built-in tables.
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
    /// Print the step view after every action.
    #[arg(long)]
    pub(crate) show_views: bool,
    /// Print the final profile as JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Only list one pool (job_title, skill, work_type, location).
    #[arg(long, value_parser = parse_catalog_kind)]
    pub(crate) kind: Option<CatalogKind>,
    /// Case-insensitive substring filter applied to every listed pool.
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Candidate catalog CSV (`kind,value`) to use instead of the built-in tables.
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let DemoArgs {
        catalog_csv,
        show_views,
        json,
    } = args;

    let catalog = load_catalog(catalog_csv, config)?;
    let script = ActionScript::from_reader(DEMO_SCRIPT.as_bytes())?;

    println!("Profile setup demo");
    replay(catalog, &script, config, show_views, json)
}

pub(crate) fn run_wizard(args: WizardArgs, config: &AppConfig) -> Result<(), AppError> {
    let WizardArgs {
        script,
        catalog_csv,
        show_views,
        json,
    } = args;

    let catalog = load_catalog(catalog_csv, config)?;
    info!(path = %script.display(), "loading action script");
    let script = ActionScript::from_path(script)?;

    replay(catalog, &script, config, show_views, json)
}

pub(crate) fn run_catalog(args: CatalogArgs, config: &AppConfig) -> Result<(), AppError> {
    let CatalogArgs {
        kind,
        search,
        catalog_csv,
    } = args;

    let catalog = load_catalog(catalog_csv, config)?;
    let filter = SearchFilter::new(search.unwrap_or_default());
    print!("{}", render_catalog(&catalog, kind, &filter));
    Ok(())
}

fn replay(
    catalog: CandidateCatalog,
    script: &ActionScript,
    config: &AppConfig,
    show_views: bool,
    json: bool,
) -> Result<(), AppError> {
    let mut session = WizardSession::from_config(catalog, config);
    let mut reports: Vec<ActionReport> = Vec::with_capacity(script.len());

    println!("Replaying {} actions\n", script.len());
    if show_views {
        println!("{}", session.render());
    }

    for scripted in script.actions() {
        let report = session.apply(scripted);
        println!("{}", render::action_report(&report));
        if show_views {
            println!("\n{}", session.render());
        }
        reports.push(report);
    }

    let skipped = reports
        .iter()
        .filter(|report| report.outcome.is_skipped())
        .count();
    println!(
        "\nActive step: {} | answered titles {} | skills {} | skipped actions {}",
        session.active_step().label(),
        session.answers().job_titles.len(),
        session.answers().skills.len(),
        skipped
    );

    let summary = session.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("\n{}", render::summary(&summary));
    }

    if !session.is_completed() {
        println!("Profile not completed: the script never reached a successful Complete Profile.");
    }

    Ok(())
}

fn render_catalog(
    catalog: &CandidateCatalog,
    kind: Option<CatalogKind>,
    filter: &SearchFilter,
) -> String {
    let kinds: Vec<CatalogKind> = match kind {
        Some(kind) => vec![kind],
        None => CatalogKind::ordered().to_vec(),
    };

    let mut out = String::new();
    for kind in kinds {
        let matches = catalog.search(kind, filter);
        out.push_str(&format!(
            "{} ({} of {})\n",
            kind.label(),
            matches.len(),
            catalog.pool(kind).len()
        ));
        for value in matches {
            out.push_str(&format!("- {value}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_script_parses() {
        let script = ActionScript::from_reader(DEMO_SCRIPT.as_bytes()).expect("demo script parses");
        assert_eq!(script.len(), 26);
    }

    #[test]
    fn catalog_listing_applies_kind_and_search() {
        let catalog = CandidateCatalog::standard();
        let text = render_catalog(
            &catalog,
            Some(CatalogKind::Location),
            &SearchFilter::new("RAB"),
        );
        assert!(text.starts_with("Popular Locations (1 of"));
        assert!(text.contains("- Rabat\n"));
        assert!(!text.contains("Casablanca"));
        assert!(!text.contains("Skills"));
    }
}
