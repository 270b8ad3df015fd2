// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Author {
    /// `"Name <email> (url)"`
    Text(String),
    Person {
        name: Option<String>,
        email: Option<String>,
    },
}

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    description: Option<String>,
    version: Option<String>,
    author: Option<Author>,
}

/// Extract the address from a `"Name <email>"` string.
fn angle_bracket_email(s: &str) -> Option<String> {
    let start = s.find('<')? + 1;
    let len = s[start..].find('>')?;

    if len == 0 {
        return None;
    }

    Some(s[start..start + len].to_string())
}

/// Program metadata read from a JSON package manifest.
///
/// See [Schema::package](crate::Schema::package).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackageInfo {
    /// Program description.
    pub description: Option<String>,
    /// Version number (without a `v` prefix).
    pub version: Option<String>,
    /// Address bugs should be reported to.
    pub email: Option<String>,
}

impl PackageInfo {
    /// Read the manifest at `path` (usually `package.json`).
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let json = fs::read_to_string(path)
            .map_err(|e| Error::Package(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), "read package metadata");

        Self::from_json(&json)
    }

    /// Parse manifest JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(json)
            .map_err(|e| Error::Package(format!("JSON syntax error: {}", e)))?;

        let email = match manifest.author {
            Some(Author::Person {
                email: Some(email), ..
            }) => Some(email),
            Some(Author::Person {
                name: Some(name), ..
            }) => angle_bracket_email(&name),
            Some(Author::Text(text)) => angle_bracket_email(&text),
            _ => None,
        };

        Ok(PackageInfo {
            description: manifest.description,
            version: manifest.version,
            email,
        })
    }

    /// The version as displayed by `--version`.
    pub fn version_text(&self) -> Option<String> {
        self.version.as_ref().map(|v| format!("v{}", v))
    }
}
