//! Rendering of the generated files that are not plain template copies.

use super::substitution::Placeholder;
use super::{DeploymentRequest, Flavor};

pub const FLY_TOML: &str = "fly.toml";
pub const DOCKERFILE: &str = "Dockerfile";
pub const SETUP_SCRIPT: &str = "setup.sh";
pub const COMPOSE_FILE: &str = "docker-compose.yml";
pub const ENV_FILE: &str = ".env";
pub const RUN_SCRIPT: &str = "run.sh";
pub const SKILLS_DIR: &str = "skills";

/// Environment variable for the optional chat bot token.
pub const BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";

/// Container port the compose templates publish.
pub const CONTAINER_PORT: u16 = 3000;

/// Placeholders in the Fly.io app config.
pub fn fly_placeholders(request: &DeploymentRequest) -> Vec<Placeholder> {
    vec![
        Placeholder::any_of(
            "app name",
            Flavor::ALL.iter().map(|flavor| format!("app = \"{}\"", flavor.as_str())),
            format!("app = \"{}\"", request.app_name),
        ),
        Placeholder::new(
            "region",
            "primary_region = \"iad\"",
            format!("primary_region = \"{}\"", request.region),
        ),
    ]
}

/// Placeholders in the compose file.
pub fn compose_placeholders(request: &DeploymentRequest) -> Vec<Placeholder> {
    vec![
        Placeholder::new(
            "app name",
            format!("container_name: {}", request.flavor.as_str()),
            format!("container_name: {}", request.app_name),
        ),
        Placeholder::new("api key", "your-api-key-here", request.api_key.expose()),
        Placeholder::new(
            "port",
            format!("\"{CONTAINER_PORT}:{CONTAINER_PORT}\""),
            format!("\"{}:{CONTAINER_PORT}\"", request.port),
        ),
    ]
}

/// Fly.io bootstrap script: create the app, set secrets, deploy.
pub fn setup_script(request: &DeploymentRequest) -> String {
    let app = &request.app_name;
    let key = request.api_key.expose();

    let mut script = String::from("#!/bin/bash\n");
    script.push_str(&format!("fly apps create {app} --org personal\n"));
    script.push_str(&format!("fly secrets set OPENCLAW_GATEWAY_TOKEN={key} --app {app}\n"));
    if request.flavor == Flavor::NullClaw {
        script.push_str(&format!("fly secrets set NULLCLAW_API_KEY={key} --app {app}\n"));
    }
    script.push_str("fly deploy\n");
    script
}

/// `.env` for the compose stack. Optional values are omitted when absent.
pub fn env_file(request: &DeploymentRequest) -> String {
    let mut env =
        format!("{}={}\n", request.flavor.primary_secret_var(), request.api_key.expose());
    if let Some(token) = request.bot_token() {
        env.push_str(&format!("{BOT_TOKEN_VAR}={token}\n"));
    }
    if let Some(model) = request.model() {
        env.push_str(&format!("{}={}\n", request.flavor.model_var(), model));
    }
    env
}

/// Local launcher: build and start the stack, then report where it listens.
pub fn run_script(request: &DeploymentRequest) -> String {
    format!(
        "#!/bin/bash\nset -e\ndocker compose up -d --build\necho \"{} is running on http://localhost:{}\"\n",
        request.app_name, request.port
    )
}
