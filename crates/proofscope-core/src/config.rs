//! Scope options and per-call-site profiles
//!
//! Profiles are serde structs for a JSON file such as
//! `~/.proofscope/profiles.json`:
//!
//! ```text
//! {
//!   "profiles": {
//!     "prove": { "expectedAccesses": 2, "inProver": true },
//!     "compile": { "inCompile": true }
//!   }
//! }
//! ```

use crate::error::Result;
use crate::types::{Actor, ModeFlags, Witness};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::{Rc, Weak};

/// Environment variable naming the profiles file.
pub const PROFILES_ENV: &str = "PROOFSCOPE_PROFILES";

/// Everything a caller may hand to a scope executor.
///
/// Unset fields take the executor's defaults. Witnesses and the actor only
/// exist at runtime and are never read from JSON.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScopeOptions {
    #[serde(skip)]
    pub witnesses: Option<Vec<Witness>>,
    #[serde(skip)]
    pub actor: Option<Weak<dyn Actor>>,
    pub expected_accesses: Option<usize>,
    /// Accepted for shape compatibility; installed contexts always start at 0.
    pub actual_accesses: Option<usize>,
    #[serde(flatten)]
    pub modes: ModeFlags,
}

impl ScopeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_witnesses(mut self, witnesses: Vec<Witness>) -> Self {
        self.witnesses = Some(witnesses);
        self
    }

    pub fn with_actor(mut self, actor: &Rc<dyn Actor>) -> Self {
        self.actor = Some(Rc::downgrade(actor));
        self
    }

    pub fn expect_accesses(mut self, count: usize) -> Self {
        self.expected_accesses = Some(count);
        self
    }

    pub fn prover(mut self) -> Self {
        self.modes.in_prover = true;
        self
    }

    pub fn compile(mut self) -> Self {
        self.modes.in_compile = true;
        self
    }

    pub fn checked_computation(mut self) -> Self {
        self.modes.in_checked_computation = true;
        self
    }

    pub fn analyze(mut self) -> Self {
        self.modes.in_analyze = true;
        self
    }
}

/// Named scope options, one entry per call site.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScopeProfiles {
    pub profiles: HashMap<String, ScopeOptions>,
}

impl ScopeProfiles {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from a specific path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load from `default_path()`, or an empty set if it is missing or malformed.
    pub fn discover() -> Self {
        Self::load(&Self::default_path()).unwrap_or_default()
    }

    /// `$PROOFSCOPE_PROFILES`, else ~/.proofscope/profiles.json
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(PROFILES_ENV) {
            return PathBuf::from(path);
        }
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        PathBuf::from(home).join(".proofscope").join("profiles.json")
    }

    pub fn contains(&self, call_site: &str) -> bool {
        self.profiles.contains_key(call_site)
    }

    /// Options for `call_site`; unknown call sites get empty options.
    pub fn options(&self, call_site: &str) -> ScopeOptions {
        self.profiles.get(call_site).cloned().unwrap_or_default()
    }
}
