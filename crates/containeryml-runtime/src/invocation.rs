//! Argument lists for the runtime's subcommands.

use std::fmt;
use std::path::Path;

use containeryml_common::constants::{DETACHED_RESTART_POLICY, KILL_SIGNAL};

/// How `run` attaches to the new container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Run in the background and restart on exit.
    Detached,
    /// Attach an interactive terminal.
    Interactive,
}

impl RunMode {
    /// Maps the CLI's detach switch to a mode.
    #[must_use]
    pub const fn from_detach(detach: bool) -> Self {
        if detach {
            Self::Detached
        } else {
            Self::Interactive
        }
    }

    const fn flags(self) -> &'static [&'static str] {
        match self {
            Self::Detached => &["-d", DETACHED_RESTART_POLICY],
            Self::Interactive => &["-it"],
        }
    }
}

/// An ordered argument list for one runtime call, without the program name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<String>,
}

impl Invocation {
    /// Creates an invocation from raw arguments.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `images -q <name>`: prints image IDs tagged `name`.
    #[must_use]
    pub fn images(name: &str) -> Self {
        Self::new(["images", "-q", name])
    }

    /// `ps -q -f name=<name>`: prints IDs of running containers matching `name`.
    #[must_use]
    pub fn running(name: &str) -> Self {
        Self::new(["ps".to_owned(), "-q".to_owned(), "-f".to_owned(), format!("name={name}")])
    }

    /// `kill -s 9 <name>`.
    #[must_use]
    pub fn kill(name: &str) -> Self {
        Self::new(["kill", "-s", KILL_SIGNAL, name])
    }

    /// `rm <name>`.
    #[must_use]
    pub fn remove(name: &str) -> Self {
        Self::new(["rm", name])
    }

    /// `run --name <name> <flags> <mode flags> <name>`; the image shares
    /// the container's name.
    #[must_use]
    pub fn run(name: &str, flags: &[String], mode: RunMode) -> Self {
        let mut inv = Self::new(["run", "--name", name]);
        inv.args.extend(flags.iter().cloned());
        inv.args.extend(mode.flags().iter().map(|f| (*f).to_owned()));
        inv.args.push(name.to_owned());
        inv
    }

    /// `build --tag=<name> <flags> <context>`.
    #[must_use]
    pub fn build(name: &str, flags: &[String], context: &Path) -> Self {
        let mut inv = Self::new(["build".to_owned(), format!("--tag={name}")]);
        inv.args.extend(flags.iter().cloned());
        inv.args.push(context.display().to_string());
        inv
    }

    /// `logs --tail=<tail> -f <name>`.
    #[must_use]
    pub fn logs(name: &str, tail: u32) -> Self {
        Self::new([
            "logs".to_owned(),
            format!("--tail={tail}"),
            "-f".to_owned(),
            name.to_owned(),
        ])
    }

    /// `stats <name>`.
    #[must_use]
    pub fn stats(name: &str) -> Self {
        Self::new(["stats", name])
    }

    /// Returns the arguments.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the runtime subcommand (the first argument).
    #[must_use]
    pub fn subcommand(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args.join(" "))
    }
}
