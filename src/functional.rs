use std::env;
use std::path::{Path, PathBuf};
use std::sync::Once;

use log::{debug, info};

use crate::engine::Engine;
use crate::error::*;
use crate::glycol::Glycol;
use crate::psychrometrics::Psychrometrics;
use crate::refrigerant::Refrigerant;
use crate::sys::EngineLibrary;
use crate::version::EngineVersion;

/// Environment variable naming the EnergyPlus install directory.
pub const ENERGYPLUS_PATH_VAR: &str = "ENERGYPLUS_PATH";

/// Who owns the engine session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hosting {
    /// A client program loaded the library itself; the functional API
    /// must be initialized once.
    Standalone,
    /// Running inside an EnergyPlus-hosted plugin.  The engine is already
    /// initialized and must not be initialized again.
    Plugin,
}

/// Initialization state of a [`Functional`] session.
///
/// Fixed by [`Functional::new`]: a session is never observable before the
/// engine has been initialized, by itself or by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// `initializeFunctionalAPI` has been called by this session.
    Initialized,
    /// The host initialized the engine; this session never calls it.
    Hosted,
}

/// Entry point to the EnergyPlus functional API.
///
/// A session owns the engine, initializes it at most once, and hands out
/// [`Glycol`], [`Refrigerant`] and [`Psychrometrics`] accessors that
/// borrow it.  Accessors therefore cannot outlive the loaded library.
///
/// ```no_run
/// use eplus_functional::{Functional, Hosting};
///
/// let api = Functional::from_env(Hosting::Standalone)?;
/// let psy = api.psychrometrics();
/// let w = psy.humidity_ratio_c(24.0, 0.5, 101_325.0);
/// println!("W = {w:.5} kg/kg");
/// # Ok::<(), eplus_functional::FunctionalError>(())
/// ```
pub struct Functional<E: Engine = EngineLibrary> {
    engine: E,
    state: SessionState,
}

impl<E: Engine> Functional<E> {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a session around `engine`.  With [`Hosting::Standalone`]
    /// this issues the single `initializeFunctionalAPI` call; with
    /// [`Hosting::Plugin`] the engine is left untouched.
    pub fn new(engine: E, hosting: Hosting) -> Self {
        let state = match hosting {
            Hosting::Standalone => {
                engine.initialize_functional_api();
                info!("EnergyPlus functional API initialized");
                SessionState::Initialized
            }
            Hosting::Plugin => {
                debug!("hosted by EnergyPlus, skipping functional API initialization");
                SessionState::Hosted
            }
        };
        Self { engine, state }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Consume the session and return the engine.  Every accessor must
    /// have been dropped already, which the borrow checker enforces.
    pub fn into_engine(self) -> E {
        self.engine
    }

    // ── Factories ────────────────────────────────────────────────────

    /// Create a [`Glycol`] accessor.  Only `"water"` is known to the
    /// engine without an input file.
    pub fn glycol(&self, glycol_name: &str) -> Result<Glycol<'_, E>> {
        Glycol::new(&self.engine, glycol_name)
    }

    /// Create a [`Refrigerant`] accessor.  Only `"steam"` is known to the
    /// engine without an input file.
    pub fn refrigerant(&self, refrigerant_name: &str) -> Result<Refrigerant<'_, E>> {
        Refrigerant::new(&self.engine, refrigerant_name)
    }

    /// Create a [`Psychrometrics`] function table.
    pub fn psychrometrics(&self) -> Psychrometrics<'_, E> {
        Psychrometrics::new(&self.engine)
    }
}

impl Functional<EngineLibrary> {
    /// The EnergyPlus version these bindings target.
    pub fn ep_version() -> EngineVersion {
        EngineVersion::targeted()
    }

    /// Load the library from `path` (an install directory or the library
    /// file itself) and start a session.
    pub fn load(path: impl AsRef<Path>, hosting: Hosting) -> Result<Self> {
        let path = path.as_ref();
        let lib = if path.is_dir() {
            EngineLibrary::load_from_dir(path)?
        } else {
            EngineLibrary::load_from_file(path)?
        };
        Ok(Self::new(lib, hosting))
    }

    /// Locate EnergyPlus from `ENERGYPLUS_PATH` (a `.env` file is honoured)
    /// or a standard install directory, load it and start a session.
    pub fn from_env(hosting: Hosting) -> Result<Self> {
        load_dotenv();
        let dir = find_energyplus_path()?;
        Self::load(dir, hosting)
    }
}

// ── .env loading (once) ──────────────────────────────────────────────

/// Honour a `.env` from the working directory, else the first one found
/// next to the crate manifest or the running executable.
fn load_dotenv() {
    static DOTENV_INIT: Once = Once::new();
    DOTENV_INIT.call_once(|| {
        if dotenvy::dotenv().is_ok() {
            return;
        }
        let manifest_dir = env::var_os("CARGO_MANIFEST_DIR").map(PathBuf::from);
        let exe_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let fallback = [manifest_dir, exe_dir]
            .into_iter()
            .flatten()
            .map(|dir| dir.join(".env"))
            .find(|file| file.is_file());
        if let Some(file) = fallback {
            debug!("loading {}", file.display());
            let _ = dotenvy::from_path(&file);
        }
    });
}

// ── Path discovery ───────────────────────────────────────────────────

/// Default install directories for the targeted release.
fn standard_paths() -> Vec<PathBuf> {
    let v = EngineVersion::targeted();
    let tag = format!("{}-{}-{}", v.major, v.minor, v.patch);

    #[cfg(target_os = "windows")]
    let paths = vec![PathBuf::from(format!(r"C:\EnergyPlusV{tag}"))];
    #[cfg(target_os = "macos")]
    let paths = vec![PathBuf::from(format!("/Applications/EnergyPlus-{tag}"))];
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let paths = vec![
        PathBuf::from(format!("/usr/local/EnergyPlus-{tag}")),
        PathBuf::from("/usr/local/EnergyPlus"),
    ];

    paths
}

fn find_energyplus_path() -> Result<PathBuf> {
    let mut tried = Vec::<String>::new();

    if let Ok(path) = env::var(ENERGYPLUS_PATH_VAR) {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(p);
        }
        tried.push(format!("{ENERGYPLUS_PATH_VAR}={path} (does not exist)"));
    }

    for path in standard_paths() {
        if path.exists() {
            return Ok(path);
        }
        tried.push(format!("{} (not found)", path.display()));
    }

    Err(FunctionalError::LibraryNotFound(format!(
        "EnergyPlus directory not found. Tried:\n  - {}\n\
         Set {ENERGYPLUS_PATH_VAR} to the directory containing the energyplusapi library.",
        tried.join("\n  - ")
    )))
}
