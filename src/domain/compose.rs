//! Compose file rewriting for side-loaded skills.

/// Key that opens a service's volume list in the compose templates.
pub const VOLUMES_MARKER: &str = "volumes:";

/// Mount entry injected when a skills library is side-loaded.
pub const SKILLS_MOUNT: &str = "./skills:/app/skills";

/// Insert `- <mount>` directly below the first service-level `volumes:` line.
///
/// Only an indented marker counts: a top-level `volumes:` declares named
/// volumes and cannot hold mounts. The entry is indented two spaces deeper
/// than the marker.
///
/// Returns `None` when no service has a volumes section, leaving the caller
/// to decide whether that is worth reporting.
pub fn inject_volume_mount(compose: &str, mount: &str) -> Option<String> {
    let mut output = String::with_capacity(compose.len() + mount.len() + 16);
    let mut injected = false;

    for line in compose.split_inclusive('\n') {
        output.push_str(line);
        if injected {
            continue;
        }
        let body = line.trim_end();
        let indent = body.len() - body.trim_start().len();
        if indent > 0 && body.trim_start() == VOLUMES_MARKER {
            if !line.ends_with('\n') {
                output.push('\n');
            }
            output.push_str(&" ".repeat(indent + 2));
            output.push_str("- ");
            output.push_str(mount);
            output.push('\n');
            injected = true;
        }
    }

    injected.then_some(output)
}
