//! SSH section of the configuration.
use std::fmt;

use serde::Deserialize;

use crate::error::GenerateError;

/// A scalar taken verbatim from YAML (e.g. `key-size: 4096` or
/// `passphrase: ""`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// `true` / `false`.
    Bool(bool),
    /// An integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// Any string.
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// SSH directory, authorized keys and optional key generation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ssh {
    /// Public keys appended to `~/.ssh/authorized_keys`, in order.
    pub authorized_keys: Vec<String>,
    /// Whether to emit an `ssh-keygen` command.
    pub generate: bool,
    /// Key type passed to `ssh-keygen -t`.
    #[serde(default)]
    pub algorithm: Option<Scalar>,
    /// Key length passed to `ssh-keygen -b`.
    #[serde(default)]
    pub key_size: Option<Scalar>,
    /// Output path passed to `ssh-keygen -f`.
    #[serde(default)]
    pub keyfile: Option<Scalar>,
    /// Passphrase passed to `ssh-keygen -N`.
    #[serde(default)]
    pub passphrase: Option<Scalar>,
    /// Comment passed to `ssh-keygen -C`.
    #[serde(default)]
    pub comment: Option<Scalar>,
}

/// Resolved `ssh-keygen` parameters.
#[derive(Debug, Clone, Copy)]
pub struct KeygenParams<'a> {
    /// Key type.
    pub algorithm: &'a Scalar,
    /// Key length in bits.
    pub key_size: &'a Scalar,
    /// Private key path.
    pub keyfile: &'a Scalar,
    /// Passphrase (may be empty).
    pub passphrase: &'a Scalar,
    /// Key comment.
    pub comment: &'a Scalar,
}

impl Ssh {
    /// Return the key generation parameters when `generate` is set.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MissingKey`] naming the first absent field
    /// when `generate` is `true`.
    pub fn keygen(&self) -> Result<Option<KeygenParams<'_>>, GenerateError> {
        if !self.generate {
            return Ok(None);
        }
        Ok(Some(KeygenParams {
            algorithm: required(self.algorithm.as_ref(), "algorithm")?,
            key_size: required(self.key_size.as_ref(), "key-size")?,
            keyfile: required(self.keyfile.as_ref(), "keyfile")?,
            passphrase: required(self.passphrase.as_ref(), "passphrase")?,
            comment: required(self.comment.as_ref(), "comment")?,
        }))
    }
}

fn required<'a>(value: Option<&'a Scalar>, key: &str) -> Result<&'a Scalar, GenerateError> {
    value.ok_or_else(|| GenerateError::MissingKey(format!("ssh.{key}")))
}
