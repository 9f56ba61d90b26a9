// src/deploy/mod.rs
//! Packages the dashboard for a remote host and renders the supporting
//! shell, Nginx and systemd artifacts.

use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{info, warn};
use walkdir::WalkDir;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

pub mod templates;

pub const APP_DIR: &str = "/var/www/zxy-dashboard";
pub const BINARY_NAME: &str = "zxy-dashboard";
pub const ARCHIVE_NAME: &str = "zxy-dashboard-deployment.zip";
pub const STAGING_DIR: &str = "deployment";

/// Project-relative entries copied into the package. A trailing `/` marks a
/// directory.
pub const DEFAULT_FILES: &[&str] = &[
    "target/release/zxy-dashboard",
    "templates/",
    "static/",
    ".env.example",
];

#[derive(Debug, Clone)]
pub struct Deployer {
    pub target_server: String,
    pub target_port: u16,
    pub project_root: PathBuf,
    pub files: Vec<String>,
}

#[derive(Debug)]
pub struct DeployReport {
    pub archive: PathBuf,
    pub startup_script: PathBuf,
    pub nginx_config: PathBuf,
    pub systemd_unit: PathBuf,
    pub instructions: PathBuf,
}

impl Deployer {
    pub fn new(target_server: impl Into<String>, target_port: u16, project_root: impl Into<PathBuf>) -> Self {
        Self {
            target_server: target_server.into(),
            target_port,
            project_root: project_root.into(),
            files: DEFAULT_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.project_root.join(STAGING_DIR)
    }

    /// Stages the allowlist plus a production `.env`, then zips the staging
    /// directory. Returns the archive path.
    pub fn create_package(&self) -> Result<PathBuf> {
        info!("creating deployment package");
        let staging = self.staging_dir();
        if staging.exists() {
            fs::remove_dir_all(&staging)
                .with_context(|| format!("removing {}", staging.display()))?;
        }
        fs::create_dir_all(&staging).with_context(|| format!("creating {}", staging.display()))?;

        for item in &self.files {
            let source = self.project_root.join(item.trim_end_matches('/'));
            if source.is_file() {
                let name = source
                    .file_name()
                    .with_context(|| format!("{item} has no file name"))?;
                fs::copy(&source, staging.join(name))
                    .with_context(|| format!("copying {}", source.display()))?;
                info!(item = %item, "copied file");
            } else if source.is_dir() {
                copy_dir(&source, &staging.join(item.trim_end_matches('/')))?;
                info!(item = %item, "copied directory");
            } else {
                warn!(item = %item, "not found, skipping");
            }
        }

        self.write_production_env(&staging)?;

        let archive = self.project_root.join(ARCHIVE_NAME);
        zip_dir(&staging, &archive)?;
        info!(archive = %archive.display(), "created deployment archive");
        Ok(archive)
    }

    /// Writes `.env` with a freshly salted secret key.
    pub fn write_production_env(&self, dir: &Path) -> Result<PathBuf> {
        let salt = uuid::Uuid::new_v4().simple().to_string();
        let path = dir.join(".env");
        fs::write(&path, templates::production_env(self.target_port, &salt))
            .with_context(|| format!("writing {}", path.display()))?;
        info!("created production .env file");
        Ok(path)
    }

    pub fn write_startup_script(&self) -> Result<PathBuf> {
        let path = self.write_artifact(
            "start_dashboard.sh",
            templates::startup_script(&self.target_server, self.target_port),
        )?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .with_context(|| format!("chmod {}", path.display()))?;
        }
        Ok(path)
    }

    pub fn write_nginx_config(&self) -> Result<PathBuf> {
        self.write_artifact(
            "zxy-dashboard.nginx",
            templates::nginx_config(&self.target_server, self.target_port),
        )
    }

    pub fn write_systemd_unit(&self) -> Result<PathBuf> {
        self.write_artifact("zxy-dashboard.service", templates::systemd_unit(self.target_port))
    }

    pub fn write_instructions(&self) -> Result<PathBuf> {
        self.write_artifact(
            "DEPLOYMENT_INSTRUCTIONS.md",
            templates::instructions(&self.target_server, self.target_port),
        )
    }

    pub fn deploy(&self) -> Result<DeployReport> {
        info!(server = %self.target_server, port = self.target_port, "deploying dashboard");
        Ok(DeployReport {
            archive: self.create_package()?,
            startup_script: self.write_startup_script()?,
            nginx_config: self.write_nginx_config()?,
            systemd_unit: self.write_systemd_unit()?,
            instructions: self.write_instructions()?,
        })
    }

    fn write_artifact(&self, name: &str, contents: String) -> Result<PathBuf> {
        let path = self.project_root.join(name);
        fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "created artifact");
        Ok(path)
    }
}

fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    for entry in WalkDir::new(from) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(from)?;
        let target = to.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).with_context(|| format!("creating {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target)
                .with_context(|| format!("copying {}", entry.path().display()))?;
        }
    }
    Ok(())
}

/// Zips every file under `dir`, named relative to it with `/` separators.
fn zip_dir(dir: &Path, archive: &Path) -> Result<()> {
    let file = File::create(archive).with_context(|| format!("creating {}", archive.display()))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry
            .path()
            .strip_prefix(dir)?
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        zip.start_file(name, options)?;
        let mut src = File::open(entry.path())
            .with_context(|| format!("reading {}", entry.path().display()))?;
        io::copy(&mut src, &mut zip)?;
    }
    zip.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        let p = root.path();
        fs::create_dir_all(p.join("target/release")).unwrap();
        fs::write(p.join("target/release/zxy-dashboard"), b"\x7fELF").unwrap();
        fs::create_dir_all(p.join("templates/partials")).unwrap();
        fs::write(p.join("templates/dashboard.html"), "<html></html>").unwrap();
        fs::write(p.join("templates/partials/nav.html"), "<nav></nav>").unwrap();
        fs::write(p.join(".env.example"), "PORT=5000\n").unwrap();
        root
    }

    #[test]
    fn package_contains_allowlist_and_env() {
        let root = project();
        let deployer = Deployer::new("10.0.0.9", 8080, root.path());
        let archive = deployer.create_package().unwrap();

        let zip = zip::ZipArchive::new(File::open(&archive).unwrap()).unwrap();
        let mut names: Vec<&str> = zip.file_names().collect();
        names.sort();
        assert_eq!(
            names,
            [
                ".env",
                ".env.example",
                "templates/dashboard.html",
                "templates/partials/nav.html",
                "zxy-dashboard",
            ]
        );

        let env = fs::read_to_string(deployer.staging_dir().join(".env")).unwrap();
        let secret = env
            .lines()
            .find_map(|l| l.strip_prefix("SECRET_KEY=zxy-bi-production-secret-key-"))
            .unwrap();
        assert_eq!(secret.len(), 32);
        assert!(secret.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(env.contains("PORT=8080\n"));
    }

    #[test]
    fn staging_is_recreated_and_salt_changes() {
        let root = project();
        let deployer = Deployer::new("10.0.0.9", 80, root.path());
        fs::create_dir_all(deployer.staging_dir()).unwrap();
        fs::write(deployer.staging_dir().join("stale.txt"), "old").unwrap();

        deployer.create_package().unwrap();
        assert!(!deployer.staging_dir().join("stale.txt").exists());
        let first = fs::read_to_string(deployer.staging_dir().join(".env")).unwrap();

        deployer.create_package().unwrap();
        let second = fs::read_to_string(deployer.staging_dir().join(".env")).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn deploy_writes_every_artifact() {
        let root = project();
        let report = Deployer::new("bi.example.com", 80, root.path()).deploy().unwrap();

        for path in [
            &report.archive,
            &report.startup_script,
            &report.nginx_config,
            &report.systemd_unit,
            &report.instructions,
        ] {
            assert!(path.is_file(), "{}", path.display());
        }
        let nginx = fs::read_to_string(&report.nginx_config).unwrap();
        assert!(nginx.contains("server_name bi.example.com;"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&report.startup_script).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }
}
