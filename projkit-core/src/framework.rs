//! Target framework descriptors and moniker resolution.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Framework families recognized by the default resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameworkIdentifier {
    NetFramework,
    NetStandard,
    NetCoreApp,
}

impl FrameworkIdentifier {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameworkIdentifier::NetFramework => ".NETFramework",
            FrameworkIdentifier::NetStandard => ".NETStandard",
            FrameworkIdentifier::NetCoreApp => ".NETCoreApp",
        }
    }

    /// Parses a full framework identifier (e.g. ".NETFramework").
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case(".NETFramework") {
            Some(FrameworkIdentifier::NetFramework)
        } else if name.eq_ignore_ascii_case(".NETStandard") {
            Some(FrameworkIdentifier::NetStandard)
        } else if name.eq_ignore_ascii_case(".NETCoreApp") {
            Some(FrameworkIdentifier::NetCoreApp)
        } else {
            None
        }
    }
}

/// Structured descriptor of a project's target framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFramework {
    pub identifier: FrameworkIdentifier,
    pub version: Version,
    /// Platform suffix of a short moniker (e.g. "windows" in "net6.0-windows").
    pub platform: Option<String>,
    /// The raw moniker this descriptor was resolved from.
    pub moniker: String,
}

static SHORT_MONIKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?P<family>netstandard|netcoreapp|net)(?P<version>\d+(?:\.\d+){0,2})(?:-(?P<platform>[A-Za-z][A-Za-z0-9.]*))?$",
    )
    .expect("short moniker pattern is valid")
});

impl TargetFramework {
    /// Parses a full framework name (".NETFramework,Version=v4.8") or a
    /// short moniker ("net48", "netstandard2.0", "net6.0-windows").
    ///
    /// # Errors
    ///
    /// Returns `Error::FrameworkResolution` for empty or unrecognized
    /// monikers; never substitutes a placeholder framework.
    pub fn parse(moniker: &str) -> Result<Self> {
        let trimmed = moniker.trim();
        if trimmed.is_empty() {
            return Err(unresolvable(moniker, "empty moniker"));
        }

        if trimmed.contains(',') {
            Self::parse_full_name(trimmed)
        } else {
            Self::parse_short(trimmed)
        }
    }

    fn parse_full_name(moniker: &str) -> Result<Self> {
        let mut parts = moniker.split(',').map(str::trim);
        let identifier = parts
            .next()
            .and_then(FrameworkIdentifier::from_name)
            .ok_or_else(|| unresolvable(moniker, "unknown framework identifier"))?;

        let version_part = parts
            .find_map(|part| part.strip_prefix("Version="))
            .ok_or_else(|| unresolvable(moniker, "missing Version= component"))?;
        let version = parse_dotted(version_part.trim_start_matches(['v', 'V']))
            .ok_or_else(|| unresolvable(moniker, "malformed framework version"))?;

        Ok(Self {
            identifier,
            version,
            platform: None,
            moniker: moniker.to_string(),
        })
    }

    fn parse_short(moniker: &str) -> Result<Self> {
        let captures = SHORT_MONIKER
            .captures(moniker)
            .ok_or_else(|| unresolvable(moniker, "unrecognized short moniker"))?;

        let family = captures["family"].to_ascii_lowercase();
        let raw_version = &captures["version"];
        let platform = captures
            .name("platform")
            .map(|m| m.as_str().to_ascii_lowercase());

        let (identifier, version) = match family.as_str() {
            "netstandard" => (
                FrameworkIdentifier::NetStandard,
                parse_dotted(raw_version)
                    .ok_or_else(|| unresolvable(moniker, "malformed framework version"))?,
            ),
            "netcoreapp" => (
                FrameworkIdentifier::NetCoreApp,
                parse_dotted(raw_version)
                    .ok_or_else(|| unresolvable(moniker, "malformed framework version"))?,
            ),
            // Bare "net": dotted versions of 5 and above are the unified
            // platform; everything else is the classic framework where
            // "net48" encodes version 4.8 digit by digit.
            _ => {
                if raw_version.contains('.') {
                    let version = parse_dotted(raw_version)
                        .ok_or_else(|| unresolvable(moniker, "malformed framework version"))?;
                    if version.major >= 5 {
                        (FrameworkIdentifier::NetCoreApp, version)
                    } else {
                        (FrameworkIdentifier::NetFramework, version)
                    }
                } else {
                    let version = parse_digits(raw_version)
                        .ok_or_else(|| unresolvable(moniker, "malformed framework version"))?;
                    (FrameworkIdentifier::NetFramework, version)
                }
            }
        };

        if platform.is_some() && identifier != FrameworkIdentifier::NetCoreApp {
            return Err(unresolvable(
                moniker,
                "platform suffix is only valid on net5.0+ monikers",
            ));
        }

        Ok(Self {
            identifier,
            version,
            platform,
            moniker: moniker.to_string(),
        })
    }
}

fn unresolvable(moniker: &str, message: &str) -> Error {
    Error::FrameworkResolution {
        moniker: moniker.to_string(),
        message: message.to_string(),
    }
}

/// Parses a dotted version with one to three numeric components.
fn parse_dotted(raw: &str) -> Option<Version> {
    let mut components = raw.split('.');
    let major = components.next()?.parse().ok()?;
    let minor = match components.next() {
        Some(part) => part.parse().ok()?,
        None => 0,
    };
    let patch = match components.next() {
        Some(part) => part.parse().ok()?,
        None => 0,
    };
    if components.next().is_some() {
        return None;
    }
    Some(Version::new(major, minor, patch))
}

/// Expands compressed framework digits: "48" is 4.8, "472" is 4.7.2.
fn parse_digits(raw: &str) -> Option<Version> {
    let digits: Vec<u64> = raw
        .chars()
        .map(|c| c.to_digit(10).map(u64::from))
        .collect::<Option<_>>()?;

    match digits.as_slice() {
        [major] => Some(Version::new(*major, 0, 0)),
        [major, minor] => Some(Version::new(*major, *minor, 0)),
        [major, minor, patch] => Some(Version::new(*major, *minor, *patch)),
        _ => None,
    }
}

/// Resolves a raw framework moniker into a structured descriptor.
///
/// Resolution is awaited by callers and may be expensive; the contract
/// does not cache results, so callers needing stability cache their own.
#[async_trait]
pub trait FrameworkResolver: Send + Sync {
    async fn resolve(&self, moniker: &str) -> Result<TargetFramework>;
}

/// Default resolver parsing monikers in-process.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonikerResolver;

#[async_trait]
impl FrameworkResolver for MonikerResolver {
    async fn resolve(&self, moniker: &str) -> Result<TargetFramework> {
        TargetFramework::parse(moniker)
    }
}
