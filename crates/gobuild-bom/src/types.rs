//! BOM records
//!
//! `CycloneDx*` types mirror the subset of the CycloneDX JSON document we
//! read; `BomEntry` is what callers get back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BomError;

/// Hash algorithms a BOM checksum may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChecksumAlgorithm {
    #[serde(rename = "SHA-1")]
    Sha1,
    #[serde(rename = "SHA-256")]
    Sha256,
    #[serde(rename = "SHA-384")]
    Sha384,
    #[serde(rename = "SHA-512")]
    Sha512,
    #[serde(rename = "SHA3-256")]
    Sha3_256,
    #[serde(rename = "SHA3-384")]
    Sha3_384,
    #[serde(rename = "SHA3-512")]
    Sha3_512,
    #[serde(rename = "BLAKE2b-256")]
    Blake2b256,
    #[serde(rename = "BLAKE2b-384")]
    Blake2b384,
    #[serde(rename = "BLAKE2b-512")]
    Blake2b512,
    #[serde(rename = "BLAKE3")]
    Blake3,
}

impl ChecksumAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
            Self::Blake2b256 => "BLAKE2b-256",
            Self::Blake2b384 => "BLAKE2b-384",
            Self::Blake2b512 => "BLAKE2b-512",
            Self::Blake3 => "BLAKE3",
        }
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChecksumAlgorithm {
    type Err = BomError;

    /// Accepts the CycloneDX spelling, case-insensitively and with or
    /// without the hyphen (`SHA-256`, `sha256`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_uppercase();

        let algorithm = match key.as_str() {
            "SHA1" => Self::Sha1,
            "SHA256" => Self::Sha256,
            "SHA384" => Self::Sha384,
            "SHA512" => Self::Sha512,
            "SHA3256" => Self::Sha3_256,
            "SHA3384" => Self::Sha3_384,
            "SHA3512" => Self::Sha3_512,
            "BLAKE2B256" => Self::Blake2b256,
            "BLAKE2B384" => Self::Blake2b384,
            "BLAKE2B512" => Self::Blake2b512,
            "BLAKE3" => Self::Blake3,
            _ => return Err(BomError::UnknownAlgorithm(s.to_string())),
        };
        Ok(algorithm)
    }
}

/// A component checksum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checksum {
    pub algorithm: ChecksumAlgorithm,
    pub hash: String,
}

/// Metadata for one BOM entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomMetadata {
    pub version: String,
    pub purl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<Checksum>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,
}

/// One dependency in the bill of materials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomEntry {
    pub name: String,
    pub metadata: BomMetadata,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CycloneDxDocument {
    #[serde(default)]
    pub components: Vec<CycloneDxComponent>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CycloneDxComponent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub purl: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub hashes: Vec<CycloneDxHash>,
    #[serde(default)]
    pub evidence: CycloneDxEvidence,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CycloneDxHash {
    pub alg: String,
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CycloneDxEvidence {
    #[serde(default)]
    pub licenses: Vec<CycloneDxLicenseChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CycloneDxLicenseChoice {
    pub license: CycloneDxLicense,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CycloneDxLicense {
    #[serde(default)]
    pub id: String,
}
