// Copyright 2024-2026 ServingRuntime Contributors
// SPDX-License-Identifier: Apache-2.0

//! Runtime endpoint addresses: `port:<num>` or `unix:<absolute path>`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const PORT_PREFIX: &str = "port:";
const UNIX_PREFIX: &str = "unix:";

/// A parsed runtime endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// TCP port on the pod's loopback interface.
    Port(u16),
    /// Unix domain socket path.
    Unix(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    #[error("endpoint {0:?} must start with \"port:\" or \"unix:\"")]
    UnknownScheme(String),

    #[error("endpoint {0:?} has an invalid port (expected 1-65535)")]
    InvalidPort(String),

    #[error("endpoint {0:?} must use an absolute socket path")]
    RelativePath(String),
}

impl FromStr for Endpoint {
    type Err = EndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(port) = s.strip_prefix(PORT_PREFIX) {
            if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
                return Err(EndpointError::InvalidPort(s.to_string()));
            }
            return match port.parse::<u16>() {
                Ok(0) | Err(_) => Err(EndpointError::InvalidPort(s.to_string())),
                Ok(port) => Ok(Endpoint::Port(port)),
            };
        }
        if let Some(path) = s.strip_prefix(UNIX_PREFIX) {
            if !path.starts_with('/') {
                return Err(EndpointError::RelativePath(s.to_string()));
            }
            return Ok(Endpoint::Unix(PathBuf::from(path)));
        }
        Err(EndpointError::UnknownScheme(s.to_string()))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Port(port) => write!(f, "{}{}", PORT_PREFIX, port),
            Endpoint::Unix(path) => write!(f, "{}{}", UNIX_PREFIX, path.display()),
        }
    }
}
