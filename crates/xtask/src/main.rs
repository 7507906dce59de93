use anyhow::Context;
use serde::Deserialize;

/// The domain crate is pure computation: no runtime, network, logging or
/// storage crates, and no dependency on the client crate.
const DOMAIN_CRATE: &str = "ttrpgz-domain";
const DOMAIN_FORBIDDEN: &[&str] = &[
    "ttrpgz-player",
    "tokio",
    "reqwest",
    "tracing",
    "tracing-subscriber",
    "async-trait",
    "dotenvy",
    "directories",
    "chrono",
];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    /// `null` for normal dependencies, "dev" or "build" otherwise
    kind: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let violations = domain_violations(&metadata)?;
    if !violations.is_empty() {
        anyhow::bail!(
            "{DOMAIN_CRATE} must stay free of I/O dependencies, found: {}",
            violations.join(", ")
        );
    }

    println!("arch-check passed");
    Ok(())
}

fn domain_violations(metadata: &Metadata) -> anyhow::Result<Vec<String>> {
    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == DOMAIN_CRATE)
        .with_context(|| format!("{DOMAIN_CRATE} not found in workspace"))?;

    Ok(domain
        .dependencies
        .iter()
        .filter(|d| d.kind.is_none())
        .filter(|d| DOMAIN_FORBIDDEN.contains(&d.name.as_str()))
        .map(|d| d.name.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(json: &str) -> Metadata {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn pure_domain_passes() {
        let m = metadata(
            r#"{"packages":[{"name":"ttrpgz-domain","dependencies":[
                {"name":"serde","kind":null},
                {"name":"tokio","kind":"dev"}
            ]}]}"#,
        );
        assert!(domain_violations(&m).unwrap().is_empty());
    }

    #[test]
    fn io_dependencies_are_reported() {
        let m = metadata(
            r#"{"packages":[{"name":"ttrpgz-domain","dependencies":[
                {"name":"reqwest","kind":null},
                {"name":"thiserror","kind":null}
            ]}]}"#,
        );
        assert_eq!(domain_violations(&m).unwrap(), vec!["reqwest".to_string()]);
    }

    #[test]
    fn missing_domain_crate_is_an_error() {
        let m = metadata(r#"{"packages":[]}"#);
        assert!(domain_violations(&m).is_err());
    }
}
