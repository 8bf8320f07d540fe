use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use cbesub_core::config::TogoIdConfig;
use cbesub_core::errors::ProviderError;
use cbesub_core::utils::{get_dynamic_reader, progress_bar};

use crate::http::{build_agent, get_text};
use crate::throttle::Throttle;

/// The service refuses more identifiers than this per request.
pub const MAX_BATCH_SIZE: usize = 500;

pub const REFSEQ_TO_ENSEMBL_TRANSCRIPT: &str = "refseq_rna,ensembl_transcript";
pub const AFFY_TO_ENSEMBL_TRANSCRIPT: &str = "affy_probeset,ensembl_transcript";

#[derive(Debug, Deserialize)]
struct ConvertResponse {
    #[serde(default)]
    results: Vec<Vec<Value>>,
}

///
/// Source identifier to target identifier(s), for one conversion route.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdMapping {
    pub route: String,
    pub mappings: BTreeMap<String, Vec<String>>,
    pub unmapped: Vec<String>,
}

impl IdMapping {
    pub fn new(route: &str) -> Self {
        IdMapping {
            route: route.to_string(),
            mappings: BTreeMap::new(),
            unmapped: Vec::new(),
        }
    }

    pub fn insert(&mut self, source: &str, target: &str) {
        let targets = self.mappings.entry(source.to_string()).or_default();
        if !targets.iter().any(|t| t == target) {
            targets.push(target.to_string());
        }
    }

    pub fn get(&self, source: &str) -> Option<&Vec<String>> {
        self.mappings.get(source)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        cbesub_core::utils::create_parent_dir(path)?;
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("Failed to write JSON to {:?}", path))?;
        writer.flush()?;
        Ok(())
    }
}

///
/// Pull the (source, target) pairs out of a `convert` response. Each result row
/// lists the identifier at every step of the route; the first and last are kept.
///
pub fn parse_convert_response(body: &str) -> Result<Vec<(String, String)>, ProviderError> {
    let response: ConvertResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Payload(e.to_string()))?;

    let pairs = response
        .results
        .iter()
        .filter(|row| row.len() >= 2)
        .filter_map(|row| {
            let source = row.first()?.as_str()?;
            let target = row.last()?.as_str()?;
            Some((source.to_string(), target.to_string()))
        })
        .collect();

    Ok(pairs)
}

///
/// Client for the TogoID identifier conversion API.
///
pub struct TogoIdClient {
    server: String,
    batch_size: usize,
    agent: ureq::Agent,
    throttle: Throttle,
}

impl TogoIdClient {
    pub fn new(config: &TogoIdConfig) -> Self {
        let batch_size = config.batch_size.clamp(1, MAX_BATCH_SIZE);
        if batch_size != config.batch_size {
            warn!(
                "TogoID batch size {} out of range, using {}",
                config.batch_size, batch_size
            );
        }

        TogoIdClient {
            server: config.server.trim_end_matches('/').to_string(),
            batch_size,
            agent: build_agent(),
            throttle: Throttle::from_millis(config.delay_ms),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn convert_url(&self, ids: &[String], route: &str) -> String {
        format!(
            "{}/convert?ids={}&route={}&report=all&format=json",
            self.server,
            ids.join(","),
            route
        )
    }

    ///
    /// Convert identifiers along a route such as `refseq_rna,ensembl_transcript`.
    ///
    /// Requests are issued sequentially, one per batch, and the first failing
    /// request aborts the whole conversion.
    ///
    pub fn convert(&self, ids: &[String], route: &str) -> Result<IdMapping, ProviderError> {
        let batches: Vec<&[String]> = ids.chunks(self.batch_size).collect();
        info!(
            "{} queries in {} requests, expected time {:.1}s",
            ids.len(),
            batches.len(),
            batches.len() as f64 * self.throttle.delay().as_secs_f64()
        );

        let pb = progress_bar(batches.len() as u64, "Converting identifiers");

        let mut mapping = IdMapping::new(route);
        for batch in batches {
            self.throttle.wait();
            let body = get_text(&self.agent, &self.convert_url(batch, route))?;
            for (source, target) in parse_convert_response(&body)? {
                mapping.insert(&source, &target);
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        mapping.unmapped = ids
            .iter()
            .filter(|id| !mapping.mappings.contains_key(id.as_str()))
            .cloned()
            .collect();

        info!(
            "Mapped {} of {} identifiers",
            mapping.mappings.len(),
            ids.len()
        );
        Ok(mapping)
    }
}

///
/// Read the identifiers in the first column of a tab-separated file with a header line.
///
pub fn read_identifiers(path: &Path) -> Result<Vec<String>> {
    let reader = get_dynamic_reader(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(reader);

    let mut ids = Vec::new();
    for record in csv_reader.records() {
        let record = record.with_context(|| format!("Failed to parse {:?}", path))?;
        if let Some(id) = record.get(0).map(str::trim).filter(|id| !id.is_empty()) {
            ids.push(id.to_string());
        }
    }

    if ids.is_empty() {
        anyhow::bail!("No identifiers found in {:?}", path);
    }

    Ok(ids)
}
