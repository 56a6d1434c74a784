//! Vibecode's main application entry point and orchestration logic.
//! Handles command-line argument parsing, configuration gathering and
//! coordinates materialization with the git setup steps.

use std::path::Path;

use git2::Repository;
use log::{info, warn};
use vibecode::{
    cli::{get_args, Args},
    config::Configuration,
    error::{default_error_handler, Result},
    hooks::{
        check_environment, configure_commit_template, install_pre_commit_hook,
        write_commit_template,
    },
    ignore::SkipRules,
    logger::init_logger,
    processor::{ensure_output_dir, Processor},
    prompt::{
        default_project_name, gather_configuration, AnswersFile, ConfigurationGatherer,
        DialoguerPrompter, Preset,
    },
    renderer::HandlebarsRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn select_gatherer(args: &Args, output_root: &Path) -> Box<dyn ConfigurationGatherer> {
    let default_name = default_project_name(output_root);
    match (&args.answers, args.defaults) {
        (Some(path), _) => Box::new(AnswersFile::new(path, default_name)),
        (None, true) => Box::new(Preset),
        (None, false) => Box::new(DialoguerPrompter::new(default_name)),
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Checks that the output directory lives in a git repository
/// 2. Gathers the configuration from the selected supplier
/// 3. Materializes the templates and workspace packages
/// 4. Installs the pre-commit hook and the commit message template
fn run(args: Args) -> Result<()> {
    println!("🚀 Vibecode Blueprint Setup");
    println!("Setting up your collaborative AI development project...\n");

    let repo = if args.skip_git_check {
        None
    } else {
        Some(check_environment(&args.output_dir)?)
    };
    info!("Environment check passed");

    let output_root = ensure_output_dir(&args.output_dir)?;
    let repo = repo.or_else(|| Repository::discover(&output_root).ok());

    let config = gather_configuration(&*select_gatherer(&args, &output_root))?;

    let renderer = HandlebarsRenderer::new();
    let rules = SkipRules::new()?;
    let processor =
        Processor::new(&renderer, &rules, &args.template_dir, &output_root, &config);
    for path in processor.materialize()? {
        println!("Generated: '{}'", path.display());
    }

    if config.setup_git_hooks {
        match &repo {
            Some(repo) => {
                let hook = install_pre_commit_hook(repo, &output_root)?;
                info!("Git hooks configured: {}", hook.display());
            }
            None => warn!("No git repository found, skipping git hooks"),
        }
    }

    write_commit_template(&output_root)?;
    if let Some(repo) = &repo {
        configure_commit_template(repo);
    }

    print_completion_message(&config);
    Ok(())
}

fn print_completion_message(config: &Configuration) {
    let pm = config.package_manager;
    println!("\n🎉 Vibecode Blueprint Setup Complete!\n");

    println!("📋 Next Steps:");
    println!("1. Install dependencies: {pm} install");
    println!("2. Customize AGENTS.md with your project specifics");
    println!("3. Review and update the generated configuration files");
    println!("4. Set up your preferred AI coding assistant");
    println!("5. Start coding with AI collaboration!\n");

    println!("🔧 Quick Commands:");
    println!("- Install deps: {pm} install");
    println!("- Run guardrails: {pm} run guardrails");
    println!("- Build project: {pm} run build");
    println!("- Run tests: {pm} run test");
}
