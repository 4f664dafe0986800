//! Generate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{DEFAULT_SKILLS_DIR, GenerateOptions};
use crate::domain::config::DeployConfig;
use crate::domain::{AppError, DEFAULT_PORT, DEFAULT_REGION, DeploymentRequest, Flavor, Target};

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// App name (used for deploy_<name>/ and substituted into templates)
    #[arg(short, long)]
    pub name: Option<String>,
    /// API key / token written into secrets and .env
    #[arg(short, long)]
    pub key: Option<String>,
    /// Fly.io region [default: ams]
    #[arg(short, long)]
    pub region: Option<String>,
    /// Deployment type: openclaw or nullclaw [default: nullclaw]
    #[arg(long = "type", value_name = "TYPE")]
    pub flavor: Option<String>,
    /// Deployment target: fly or docker [default: fly]
    #[arg(short, long)]
    pub target: Option<String>,
    /// Host port for the docker target [default: 3000]
    #[arg(short, long)]
    pub port: Option<u16>,
    /// Chat bot token written into .env (docker target)
    #[arg(long)]
    pub bot_token: Option<String>,
    /// Model override written into .env (docker target)
    #[arg(long)]
    pub model: Option<String>,
    /// Read templates only from this directory
    #[arg(long)]
    pub templates: Option<PathBuf>,
    /// Skills library to side-load into docker deployments [default: skills]
    #[arg(long)]
    pub skills: Option<PathBuf>,
    /// Directory that receives deploy_<name>/ [default: .]
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
    /// Config file with deployment defaults [default: ./clawdeploy.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let cwd = std::env::current_dir()?;
    let config = crate::app::config::load_config(&cwd, args.config.as_deref())?;
    let (request, options) = resolve(args, config.unwrap_or_default())?;

    println!(
        "[*] Preparing {} deployment for {} ({})...",
        request.flavor,
        request.app_name,
        match request.target {
            Target::Fly => format!("fly.io, {}", request.region),
            Target::Docker => format!("docker, port {}", request.port),
        }
    );

    let outcome = crate::app::api::generate(&request, &options)?;

    for skip in &outcome.skipped {
        println!("ℹ️  Skipped: {}", skip);
    }
    for unmatched in &outcome.unmatched {
        println!(
            "⚠️  {}: placeholder(s) not found: {}",
            unmatched.template,
            unmatched.labels.join(", ")
        );
    }
    if let Some(count) = outcome.skills_copied {
        println!("✅ Side-loaded {} skill file(s) into {}/skills", count, outcome.work_dir.display());
    }
    println!("✅ Done! Files generated in {}", outcome.work_dir.display());
    match outcome.next_step() {
        Some(step) => println!("👉 Next, run: {}", step),
        None => println!("ℹ️  Nothing to run for target '{}'", outcome.target),
    }
    Ok(())
}

/// Merge CLI flags over config defaults over built-in defaults.
fn resolve(
    args: GenerateArgs,
    config: DeployConfig,
) -> Result<(DeploymentRequest, GenerateOptions), AppError> {
    let deploy = config.deploy;
    let paths = config.paths;

    let name = args
        .name
        .or(deploy.name)
        .ok_or_else(|| AppError::config_error("App name is required (--name)"))?;
    let key = args.key.ok_or_else(|| AppError::config_error("API key is required (--key)"))?;

    let flavor = match args.flavor {
        Some(value) => value.parse::<Flavor>()?,
        None => deploy.flavor.unwrap_or_default(),
    };
    let target = match args.target {
        Some(value) => value.parse::<Target>()?,
        None => deploy.target.unwrap_or_default(),
    };

    let request = DeploymentRequest::new(name, key)
        .with_region(args.region.or(deploy.region).unwrap_or_else(|| DEFAULT_REGION.to_string()))
        .with_flavor(flavor)
        .with_target(target)
        .with_port(args.port.or(deploy.port).unwrap_or(DEFAULT_PORT))
        .with_bot_token(args.bot_token.or(deploy.bot_token))
        .with_model(args.model.or(deploy.model));

    let options = GenerateOptions {
        templates_dir: args.templates.or(paths.templates),
        skills_dir: args
            .skills
            .or(paths.skills)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SKILLS_DIR)),
        out_dir: args.out_dir.or(paths.out_dir).unwrap_or_else(|| PathBuf::from(".")),
    };

    Ok((request, options))
}
