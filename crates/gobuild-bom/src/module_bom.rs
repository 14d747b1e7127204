//! Module BOM generation with `cyclonedx-gomod`

use std::fs::{self, File};
use std::io::BufReader;

use gobuild_fs::NormalizedPath;

use crate::error::{BomError, Result};
use crate::executable::{Executable, Execution};
use crate::types::{BomEntry, BomMetadata, Checksum, CycloneDxDocument};

/// File the tool writes into the working directory
pub const BOM_FILE: &str = "bom.json";

/// Generates a bill of materials for one build target.
pub struct ModuleBom<E: Executable> {
    executable: E,
}

impl<E: Executable> ModuleBom<E> {
    pub fn new(executable: E) -> Self {
        Self { executable }
    }

    /// Run the tool for `target` and collect the components it reports.
    ///
    /// The intermediate `bom.json` is removed once decoded.
    pub fn generate(&self, working_dir: &NormalizedPath, target: &str) -> Result<Vec<BomEntry>> {
        let args: Vec<String> = [
            "app", "-json", "-files", "-licenses", "-main", target, "-output", BOM_FILE,
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        tracing::info!(
            "Running '{} {}'",
            self.executable.name(),
            args.join(" ")
        );
        let output = self.executable.execute(&Execution {
            args,
            dir: working_dir.to_native(),
        })?;

        if !output.success() {
            let combined = output.combined();
            tracing::info!("{}", combined);
            return Err(BomError::CommandFailed {
                command: self.executable.name().to_string(),
                code: output.code,
                output: combined,
            });
        }

        let bom_path = working_dir.join(BOM_FILE).to_native();
        let file = File::open(&bom_path).map_err(|e| BomError::Io {
            action: "open",
            path: bom_path.clone(),
            source: e,
        })?;

        let document: CycloneDxDocument = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| BomError::Decode {
                path: bom_path.clone(),
                source: e,
            })?;

        let mut entries = Vec::with_capacity(document.components.len());
        for component in document.components {
            let checksum = match component.hashes.first() {
                Some(hash) => Some(Checksum {
                    algorithm: hash.alg.parse()?,
                    hash: hash.content.clone(),
                }),
                None => None,
            };

            let licenses = component
                .evidence
                .licenses
                .into_iter()
                .map(|choice| choice.license.id)
                .collect();

            entries.push(BomEntry {
                name: component.name,
                metadata: BomMetadata {
                    version: component.version,
                    purl: component.purl,
                    checksum,
                    licenses,
                },
            });
        }

        fs::remove_file(&bom_path).map_err(|e| BomError::Io {
            action: "remove",
            path: bom_path,
            source: e,
        })?;

        tracing::debug!(count = entries.len(), main = target, "Collected BOM entries");
        Ok(entries)
    }
}
