//! Generate command - materializes the deployment scaffold for one app.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::domain::artifacts::{
    self, COMPOSE_FILE, DOCKERFILE, ENV_FILE, FLY_TOML, RUN_SCRIPT, SETUP_SCRIPT, SKILLS_DIR,
};
use crate::domain::compose::{SKILLS_MOUNT, inject_volume_mount};
use crate::domain::{
    AppError, DeploymentRequest, GenerateOutcome, Placeholder, Skip, TemplateSet,
    UnmatchedPlaceholders, substitute,
};
use crate::ports::{ScaffoldStore, TemplateStore};

/// Execute the generate command.
///
/// Writes into `deploy_<app_name>/` under the store root:
/// - `Dockerfile` when the flavor has an image definition template
/// - `fly.toml` + `setup.sh` for the fly target
/// - `docker-compose.yml` + `.env` + `run.sh` (+ `skills/`) for the docker target
///
/// The work directory is created first. A missing platform config then
/// aborts the run before any file is written.
pub fn execute<T: TemplateStore, S: ScaffoldStore>(
    ctx: &AppContext<T, S>,
    request: &DeploymentRequest,
    skills_dir: &Path,
) -> Result<GenerateOutcome, AppError> {
    let set = TemplateSet::select(request.flavor, request.target);

    let work_dir = request.work_dir_name();
    ctx.store().create_dir_all(&work_dir)?;
    info!(
        app = %request.app_name,
        flavor = %request.flavor,
        target = %request.target,
        region = %request.region,
        "preparing deployment scaffold"
    );

    let platform_config = match &set.platform_config {
        Some(name) => {
            let content =
                ctx.templates().read_template(name)?.ok_or_else(|| AppError::template_missing(name))?;
            Some((name.as_str(), content))
        }
        None => None,
    };

    let mut scaffold = Scaffold {
        store: ctx.store(),
        work_dir: &work_dir,
        outcome: GenerateOutcome::new(ctx.store().root().join(&work_dir), request.target),
    };

    match ctx.templates().read_template(&set.image_definition)? {
        Some(dockerfile) => scaffold.write(DOCKERFILE, &dockerfile)?,
        None => scaffold.skip(Skip::ImageDefinition { template: set.image_definition.clone() }),
    }

    if let Some((name, template)) = platform_config {
        write_fly_app(&mut scaffold, request, name, &template)?;
    }

    if let Some(name) = &set.compose {
        match ctx.templates().read_template(name)? {
            Some(template) => {
                write_compose_stack(&mut scaffold, request, name, &template, skills_dir)?
            }
            None => scaffold.skip(Skip::Compose { template: name.clone() }),
        }
    }

    Ok(scaffold.outcome)
}

fn write_fly_app<S: ScaffoldStore>(
    scaffold: &mut Scaffold<'_, S>,
    request: &DeploymentRequest,
    template_name: &str,
    template: &str,
) -> Result<(), AppError> {
    let fly_toml =
        scaffold.substitute(template_name, template, &artifacts::fly_placeholders(request));
    scaffold.write(FLY_TOML, &fly_toml)?;
    scaffold.write_executable(SETUP_SCRIPT, &artifacts::setup_script(request))
}

fn write_compose_stack<S: ScaffoldStore>(
    scaffold: &mut Scaffold<'_, S>,
    request: &DeploymentRequest,
    template_name: &str,
    template: &str,
    skills_dir: &Path,
) -> Result<(), AppError> {
    let mut compose =
        scaffold.substitute(template_name, template, &artifacts::compose_placeholders(request));

    if !scaffold.store.source_dir_exists(skills_dir) {
        scaffold.skip(Skip::SkillsLibrary { path: skills_dir.to_path_buf() });
    } else if let Some(with_mount) = inject_volume_mount(&compose, SKILLS_MOUNT) {
        let dest = scaffold.path(SKILLS_DIR);
        let copied = scaffold.store.copy_dir(skills_dir, &dest)?;
        info!(source = %skills_dir.display(), copied, "side-loaded skills library");
        scaffold.outcome.skills_copied = Some(copied);
        compose = with_mount;
    } else {
        scaffold.skip(Skip::VolumesSection { template: template_name.to_string() });
    }

    scaffold.write(COMPOSE_FILE, &compose)?;
    scaffold.write(ENV_FILE, &artifacts::env_file(request))?;
    scaffold.write_executable(RUN_SCRIPT, &artifacts::run_script(request))
}

/// Tracks writes into the work directory while building the outcome.
struct Scaffold<'a, S: ScaffoldStore> {
    store: &'a S,
    work_dir: &'a str,
    outcome: GenerateOutcome,
}

impl<S: ScaffoldStore> Scaffold<'_, S> {
    fn path(&self, name: &str) -> String {
        format!("{}/{}", self.work_dir, name)
    }

    fn write(&mut self, name: &str, content: &str) -> Result<(), AppError> {
        let path = self.path(name);
        self.store.write_file(&path, content)?;
        debug!(file = %path, bytes = content.len(), "wrote");
        self.outcome.written.push(name.to_string());
        Ok(())
    }

    fn write_executable(&mut self, name: &str, content: &str) -> Result<(), AppError> {
        self.write(name, content)?;
        self.store.set_executable(&self.path(name))
    }

    fn skip(&mut self, skip: Skip) {
        info!("skipped: {}", skip);
        self.outcome.skipped.push(skip);
    }

    fn substitute(&mut self, name: &str, template: &str, placeholders: &[Placeholder]) -> String {
        let substitution = substitute(template, placeholders);
        if !substitution.is_complete() {
            warn!(
                template = name,
                placeholders = ?substitution.unmatched,
                "placeholders not found in template; left unchanged"
            );
            self.outcome.unmatched.push(UnmatchedPlaceholders {
                template: name.to_string(),
                labels: substitution.unmatched,
            });
        }
        substitution.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::EmbeddedTemplateStore;
    use crate::domain::{Flavor, Target};
    use crate::testing::{MemoryScaffoldStore, MemoryTemplateStore};

    fn embedded_ctx(
        store: MemoryScaffoldStore,
    ) -> AppContext<EmbeddedTemplateStore, MemoryScaffoldStore> {
        AppContext::new(EmbeddedTemplateStore::new(), store)
    }

    fn skills() -> &'static Path {
        Path::new("/host/skills")
    }

    #[test]
    fn fly_nullclaw_writes_config_dockerfile_and_setup() {
        let ctx = embedded_ctx(MemoryScaffoldStore::new());
        let request = DeploymentRequest::new("botx", "k123").with_region("fra");

        let outcome = execute(&ctx, &request, skills()).unwrap();

        assert_eq!(outcome.written, vec![DOCKERFILE, FLY_TOML, SETUP_SCRIPT]);
        assert!(outcome.skipped.is_empty());
        assert!(outcome.unmatched.is_empty());
        assert!(ctx.store().has_dir("deploy_botx"));

        let fly = ctx.store().file("deploy_botx/fly.toml").unwrap();
        assert!(fly.contains("app = \"botx\""));
        assert!(fly.contains("primary_region = \"fra\""));
        assert!(!fly.contains("nullclaw\""));
        assert!(ctx.store().is_executable("deploy_botx/setup.sh"));
        assert_eq!(outcome.next_step().as_deref(), Some("cd /out/deploy_botx && ./setup.sh"));
    }

    #[test]
    fn fly_openclaw_has_no_dockerfile() {
        let ctx = embedded_ctx(MemoryScaffoldStore::new());
        let request = DeploymentRequest::new("gw", "tok").with_flavor(Flavor::OpenClaw);

        let outcome = execute(&ctx, &request, skills()).unwrap();

        assert_eq!(outcome.written, vec![FLY_TOML, SETUP_SCRIPT]);
        assert_eq!(
            outcome.skipped,
            vec![Skip::ImageDefinition { template: "openclaw.Dockerfile".into() }]
        );
        let setup = ctx.store().file("deploy_gw/setup.sh").unwrap();
        assert!(!setup.contains("NULLCLAW_API_KEY"));
    }

    #[test]
    fn missing_platform_config_is_fatal_and_writes_no_files() {
        let templates = MemoryTemplateStore::new().with("nullclaw.Dockerfile", "FROM alpine\n");
        let ctx = AppContext::new(templates, MemoryScaffoldStore::new());
        let request = DeploymentRequest::new("botx", "k123");

        let err = execute(&ctx, &request, skills()).unwrap_err();

        assert!(matches!(err, AppError::TemplateMissing { ref name } if name == "nullclaw.fly.toml"));
        assert!(ctx.store().file_names().is_empty());
        assert!(ctx.store().has_dir("deploy_botx"));
    }

    #[test]
    fn docker_example_botx() {
        let ctx = embedded_ctx(MemoryScaffoldStore::new());
        let request =
            DeploymentRequest::new("botx", "k123").with_target(Target::Docker).with_port(4000);

        let outcome = execute(&ctx, &request, skills()).unwrap();

        assert_eq!(outcome.written, vec![DOCKERFILE, COMPOSE_FILE, ENV_FILE, RUN_SCRIPT]);
        let compose = ctx.store().file("deploy_botx/docker-compose.yml").unwrap();
        assert!(compose.contains("k123"));
        assert!(compose.contains("\"4000:3000\""));
        assert!(compose.contains("container_name: botx"));
        assert_eq!(ctx.store().file("deploy_botx/.env").unwrap(), "NULLCLAW_API_KEY=k123\n");
        let run = ctx.store().file("deploy_botx/run.sh").unwrap();
        assert!(run.contains("localhost:4000"));
        assert!(ctx.store().is_executable("deploy_botx/run.sh"));
        assert!(!ctx.store().is_executable("deploy_botx/.env"));
    }

    #[test]
    fn docker_without_compose_template_is_skipped() {
        let templates = MemoryTemplateStore::new().with("openclaw.fly.toml", "app = \"openclaw\"\n");
        let ctx = AppContext::new(templates, MemoryScaffoldStore::new());
        let request = DeploymentRequest::new("gw", "tok")
            .with_flavor(Flavor::OpenClaw)
            .with_target(Target::Docker);

        let outcome = execute(&ctx, &request, skills()).unwrap();

        assert!(outcome.written.is_empty());
        assert!(outcome.skipped.contains(&Skip::Compose {
            template: "openclaw.docker-compose.yml".into()
        }));
        assert!(outcome.next_step().is_none());
        assert!(ctx.store().has_dir("deploy_gw"));
    }

    #[test]
    fn skills_library_is_mounted_and_copied() {
        let ctx = embedded_ctx(MemoryScaffoldStore::new().with_source_dir(skills(), 3));
        let request = DeploymentRequest::new("botx", "k").with_target(Target::Docker);

        let outcome = execute(&ctx, &request, skills()).unwrap();

        assert_eq!(outcome.skills_copied, Some(3));
        assert_eq!(
            ctx.store().copies.borrow().as_slice(),
            &[(skills().to_path_buf(), "deploy_botx/skills".to_string())]
        );
        let compose = ctx.store().file("deploy_botx/docker-compose.yml").unwrap();
        let lines: Vec<&str> = compose.lines().collect();
        let marker = lines.iter().position(|line| line.trim() == "volumes:").unwrap();
        assert_eq!(lines[marker + 1], "      - ./skills:/app/skills");
    }

    #[test]
    fn no_skills_library_leaves_volumes_unchanged() {
        let ctx = embedded_ctx(MemoryScaffoldStore::new());
        let request = DeploymentRequest::new("botx", "k").with_target(Target::Docker);

        let outcome = execute(&ctx, &request, skills()).unwrap();

        let compose = ctx.store().file("deploy_botx/docker-compose.yml").unwrap();
        assert!(!compose.contains(SKILLS_MOUNT));
        assert!(outcome.skipped.contains(&Skip::SkillsLibrary { path: skills().to_path_buf() }));
        assert!(!ctx.store().has_dir("deploy_botx/skills"));
    }

    #[test]
    fn compose_without_volumes_section_skips_mount() {
        let templates = MemoryTemplateStore::new().with(
            "nullclaw.docker-compose.yml",
            "services:\n  nullclaw:\n    container_name: nullclaw\n",
        );
        let ctx = AppContext::new(templates, MemoryScaffoldStore::new().with_source_dir(skills(), 1));
        let request = DeploymentRequest::new("botx", "k").with_target(Target::Docker);

        let outcome = execute(&ctx, &request, skills()).unwrap();

        assert!(outcome.skipped.contains(&Skip::VolumesSection {
            template: "nullclaw.docker-compose.yml".into()
        }));
        assert!(ctx.store().copies.borrow().is_empty());
        assert_eq!(outcome.skills_copied, None);
    }

    #[test]
    fn top_level_volumes_only_skips_mount_and_stays_valid_yaml() {
        let templates = MemoryTemplateStore::new().with(
            "nullclaw.docker-compose.yml",
            "services:\n  nullclaw:\n    container_name: nullclaw\n    ports: [\"3000:3000\"]\n\nvolumes:\n  nullclaw_data:\n",
        );
        let ctx = AppContext::new(templates, MemoryScaffoldStore::new().with_source_dir(skills(), 1));
        let request = DeploymentRequest::new("botx", "k").with_target(Target::Docker);

        let outcome = execute(&ctx, &request, skills()).unwrap();

        assert!(outcome.skipped.contains(&Skip::VolumesSection {
            template: "nullclaw.docker-compose.yml".into()
        }));
        assert_eq!(outcome.skills_copied, None);
        let compose = ctx.store().file("deploy_botx/docker-compose.yml").unwrap();
        assert!(!compose.contains(SKILLS_MOUNT));
        let parsed: serde_yaml::Value = serde_yaml::from_str(&compose).unwrap();
        assert_eq!(parsed["services"]["nullclaw"]["container_name"].as_str(), Some("botx"));
    }

    #[test]
    fn unmatched_placeholders_are_reported_not_fatal() {
        let templates = MemoryTemplateStore::new()
            .with("nullclaw.fly.toml", "app = \"custom\"\nprimary_region = \"iad\"\n");
        let ctx = AppContext::new(templates, MemoryScaffoldStore::new());
        let request = DeploymentRequest::new("botx", "k");

        let outcome = execute(&ctx, &request, skills()).unwrap();

        assert_eq!(
            outcome.unmatched,
            vec![UnmatchedPlaceholders {
                template: "nullclaw.fly.toml".into(),
                labels: vec!["app name"],
            }]
        );
        assert_eq!(
            ctx.store().file("deploy_botx/fly.toml").unwrap(),
            "app = \"custom\"\nprimary_region = \"ams\"\n"
        );
    }

    #[test]
    fn rerun_overwrites_existing_output() {
        let store = MemoryScaffoldStore::new().with_file("deploy_botx/fly.toml", "stale");
        let ctx = embedded_ctx(store);
        let request = DeploymentRequest::new("botx", "k");

        execute(&ctx, &request, skills()).unwrap();
        execute(&ctx, &request, skills()).unwrap();

        assert!(ctx.store().file("deploy_botx/fly.toml").unwrap().contains("app = \"botx\""));
    }
}
