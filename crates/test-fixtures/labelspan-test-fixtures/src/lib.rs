use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    labels: HashMap<String, LabelEntry>,
    designations: HashMap<String, String>,
}

/// A label fixture: the ontology attributes plus the `object_actions` map
/// recorded against them.
#[derive(Debug, Deserialize)]
struct LabelEntry {
    ontology: String,
    actions: String,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

pub mod labels {
    use super::*;

    pub fn ontology<T: DeserializeOwned>(name: &str) -> Result<T> {
        let entry = lookup(&MANIFEST.labels, "label", name)?;
        super::load_json(&entry.ontology)
    }

    pub fn actions_json(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.labels, "label", name)?;
        read_to_string(&entry.actions)
    }

    pub fn actions<T: DeserializeOwned>(name: &str) -> Result<T> {
        let entry = lookup(&MANIFEST.labels, "label", name)?;
        super::load_json(&entry.actions)
    }
}

pub mod designations {
    use super::*;

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let rel = lookup(&MANIFEST.designations, "designation", name)?;
        super::load_json(rel)
    }
}
