//! Launch-at-login registration.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Name the startup entry is registered under.
pub const AUTOSTART_APP_NAME: &str = "Since";

/// Registers or removes an OS startup entry for an executable.
pub trait AutostartRegistrar {
    fn register(&self, app_name: &str, executable: &Path) -> Result<()>;
    /// Removing an entry that does not exist succeeds.
    fn unregister(&self, app_name: &str) -> Result<()>;
}

/// Point the startup entry at the running executable, or remove it.
pub fn set_startup_with_os<R: AutostartRegistrar + ?Sized>(registrar: &R, enable: bool) -> Result<()> {
    if enable {
        let executable = std::env::current_exe()?;
        registrar.register(AUTOSTART_APP_NAME, &executable)?;
        tracing::info!("Registered startup entry for {}", executable.display());
    } else {
        registrar.unregister(AUTOSTART_APP_NAME)?;
        tracing::info!("Removed startup entry {}", AUTOSTART_APP_NAME);
    }
    Ok(())
}

/// Startup registration for the platform the process runs on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAutostart;

impl AutostartRegistrar for SystemAutostart {
    fn register(&self, app_name: &str, executable: &Path) -> Result<()> {
        register_impl(app_name, executable)
    }

    fn unregister(&self, app_name: &str) -> Result<()> {
        unregister_impl(app_name)
    }
}

#[cfg(target_os = "windows")]
const RUN_KEY: &str = r"HKCU\Software\Microsoft\Windows\CurrentVersion\Run";

#[cfg(target_os = "windows")]
fn run_reg(args: &[&str]) -> Result<std::process::Output> {
    std::process::Command::new("reg")
        .args(args)
        .output()
        .map_err(|error| Error::Autostart(format!("failed to run reg.exe: {error}")))
}

#[cfg(target_os = "windows")]
fn register_impl(app_name: &str, executable: &Path) -> Result<()> {
    let value = format!("\"{}\"", executable.display());
    let output = run_reg(&[
        "add", RUN_KEY, "/v", app_name, "/t", "REG_SZ", "/d", &value, "/f",
    ])?;
    if output.status.success() {
        Ok(())
    } else {
        Err(Error::Autostart(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ))
    }
}

#[cfg(target_os = "windows")]
fn unregister_impl(app_name: &str) -> Result<()> {
    let query = run_reg(&["query", RUN_KEY, "/v", app_name])?;
    if !query.status.success() {
        return Ok(());
    }

    let output = run_reg(&["delete", RUN_KEY, "/v", app_name, "/f"])?;
    if output.status.success() {
        Ok(())
    } else {
        Err(Error::Autostart(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ))
    }
}

#[cfg(target_os = "linux")]
fn register_impl(app_name: &str, executable: &Path) -> Result<()> {
    XdgAutostart::for_current_user()?.register(app_name, executable)
}

#[cfg(target_os = "linux")]
fn unregister_impl(app_name: &str) -> Result<()> {
    XdgAutostart::for_current_user()?.unregister(app_name)
}

#[cfg(not(any(target_os = "windows", target_os = "linux")))]
fn register_impl(_app_name: &str, _executable: &Path) -> Result<()> {
    Err(Error::Autostart("unsupported platform".to_string()))
}

#[cfg(not(any(target_os = "windows", target_os = "linux")))]
fn unregister_impl(_app_name: &str) -> Result<()> {
    Err(Error::Autostart("unsupported platform".to_string()))
}

/// XDG `autostart` directory entries (`<dir>/<app>.desktop`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XdgAutostart {
    dir: PathBuf,
}

impl XdgAutostart {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `~/.config/autostart`
    pub fn for_current_user() -> Result<Self> {
        let base = dirs::config_dir().ok_or_else(|| {
            Error::Autostart("failed to resolve the user config directory".to_string())
        })?;
        Ok(Self::new(base.join("autostart")))
    }

    pub fn entry_path(&self, app_name: &str) -> PathBuf {
        self.dir.join(format!("{app_name}.desktop"))
    }
}

impl AutostartRegistrar for XdgAutostart {
    fn register(&self, app_name: &str, executable: &Path) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let entry = format!(
            "[Desktop Entry]\nType=Application\nName={app_name}\nExec=\"{}\"\nX-GNOME-Autostart-enabled=true\n",
            executable.display()
        );
        std::fs::write(self.entry_path(app_name), entry)?;
        Ok(())
    }

    fn unregister(&self, app_name: &str) -> Result<()> {
        match std::fs::remove_file(self.entry_path(app_name)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}
