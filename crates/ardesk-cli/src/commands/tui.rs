use anyhow::{anyhow, Result};
use ardesk_core::rules::validate_soon_days;
use ardesk_core::view::ViewKind;
use clap::Args;
use std::env;
use std::path::PathBuf;
use std::process::Command;

use crate::error::invalid_input;

#[derive(Debug, Args)]
pub struct TuiArgs {
    #[arg(long)]
    pub soon_days: Option<i64>,
    /// View to open first: dashboard, invoices, reminders or clients
    #[arg(long)]
    pub view: Option<String>,
}

pub fn launch(
    config_path: Option<PathBuf>,
    as_of: Option<String>,
    args: TuiArgs,
    verbose: bool,
) -> Result<()> {
    let mut command = build_command(config_path, as_of, args)?;
    if verbose {
        eprintln!("launching: {:?}", command);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let err = command.exec();
        Err(exec_error(err))
    }

    #[cfg(not(unix))]
    {
        use anyhow::Context as _;
        let status = command.status().with_context(|| "launch ardesk-tui")?;
        std::process::exit(status.code().unwrap_or(1));
    }
}

fn build_command(
    config_path: Option<PathBuf>,
    as_of: Option<String>,
    args: TuiArgs,
) -> Result<Command> {
    let binary = find_tui_binary();
    let mut command = Command::new(binary);
    if let Some(path) = config_path {
        command.arg("--config").arg(path);
    }
    if let Some(as_of) = as_of {
        command.arg("--as-of").arg(as_of);
    }
    if let Some(value) = args.soon_days {
        let soon_days = validate_soon_days(value)?;
        command.arg("--soon-days").arg(soon_days.to_string());
    }
    if let Some(raw) = args.view {
        let view = ViewKind::parse_label(&raw)
            .ok_or_else(|| invalid_input(format!("unknown view: {}", raw)))?;
        command.arg("--view").arg(view.label());
    }
    Ok(command)
}

fn find_tui_binary() -> PathBuf {
    let name = format!("ardesk-tui{}", env::consts::EXE_SUFFIX);
    if let Ok(current) = env::current_exe() {
        if let Some(dir) = current.parent() {
            let candidate = dir.join(&name);
            if candidate.is_file() {
                return candidate;
            }
        }
    }
    PathBuf::from(name)
}

fn exec_error(err: std::io::Error) -> anyhow::Error {
    if err.kind() == std::io::ErrorKind::NotFound {
        return anyhow!(
            "ardesk-tui binary not found; build it with `cargo build -p ardesk-tui` or install the package"
        );
    }
    anyhow!("launch ardesk-tui failed: {}", err)
}

#[cfg(test)]
mod tests {
    use super::{build_command, TuiArgs};

    #[test]
    fn build_command_forwards_options() {
        let args = TuiArgs {
            soon_days: Some(3),
            view: Some("Reminders".to_string()),
        };
        let command = build_command(None, Some("today".to_string()), args).expect("command");
        let forwarded: Vec<String> = command
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            forwarded,
            vec!["--as-of", "today", "--soon-days", "3", "--view", "reminders"]
        );
    }

    #[test]
    fn build_command_rejects_unknown_view() {
        let args = TuiArgs {
            soon_days: None,
            view: Some("ledger".to_string()),
        };
        assert!(build_command(None, None, args).is_err());
    }
}
