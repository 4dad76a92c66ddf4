//! Version and build information.
//!
//! Provides version, git commit, and build metadata.

use std::fmt;

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: Option<&'static str>,
    pub build_date: Option<&'static str>,
    pub arch: &'static str,
    pub rustc_version: Option<&'static str>,
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tempconv {}", self.version)?;

        if let Some(commit) = self.commit {
            write!(f, " ({})", commit)?;
        }

        if let Some(date) = self.build_date {
            write!(f, " built {}", date)?;
        }

        write!(f, " for {}", self.arch)?;

        if let Some(rustc) = self.rustc_version {
            write!(f, " with rustc {}", rustc)?;
        }

        Ok(())
    }
}

/// Get build information
pub fn get_build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("TEMPCONV_GIT_HASH"),
        build_date: option_env!("TEMPCONV_BUILD_DATE"),
        arch: std::env::consts::ARCH,
        rustc_version: option_env!("TEMPCONV_RUSTC_VERSION"),
    }
}
