use log::info;
use serde::Deserialize;

use cbesub_core::config::EnsemblConfig;
use cbesub_core::errors::ProviderError;
use cbesub_core::models::{Exon, GenomicRegion, Strand};
use cbesub_core::providers::{AnnotationProvider, SequenceProvider};

use crate::http::{build_agent, get_text};
use crate::throttle::Throttle;

/// Upper bound handed to `map/cds` so the whole CDS is mapped.
const CDS_MAP_END: u64 = 99_999_999;

#[derive(Debug, Deserialize)]
struct CdsMapping {
    seq_region_name: Option<String>,
    start: u64,
    end: u64,
    strand: i64,
    #[serde(default)]
    gap: u8,
}

#[derive(Debug, Deserialize)]
struct CdsMappingResponse {
    mappings: Vec<CdsMapping>,
}

#[derive(Debug, Deserialize)]
struct SequenceResponse {
    seq: String,
}

///
/// Client for the Ensembl REST API.
///
pub struct EnsemblClient {
    server: String,
    species: String,
    agent: ureq::Agent,
    throttle: Throttle,
}

impl EnsemblClient {
    pub fn new(config: &EnsemblConfig) -> Self {
        EnsemblClient {
            server: config.server.trim_end_matches('/').to_string(),
            species: config.species.clone(),
            agent: build_agent(),
            throttle: Throttle::from_millis(config.delay_ms),
        }
    }

    pub fn cds_map_url(&self, transcript_id: &str) -> String {
        format!(
            "{}/map/cds/{}/1..{}?content-type=application/json",
            self.server, transcript_id, CDS_MAP_END
        )
    }

    pub fn sequence_url(&self, region: &GenomicRegion) -> String {
        format!(
            "{}/sequence/region/{}/{}?content-type=application/json",
            self.server, self.species, region
        )
    }

    fn get(&self, url: &str) -> Result<String, ProviderError> {
        self.throttle.wait();
        get_text(&self.agent, url)
    }
}

///
/// Parse a `map/cds` response into genomic exon segments. Gap entries are dropped.
///
pub fn parse_cds_mappings(body: &str, transcript_id: &str) -> Result<Vec<Exon>, ProviderError> {
    let response: CdsMappingResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Payload(e.to_string()))?;

    let mut exons = Vec::with_capacity(response.mappings.len());
    for mapping in response.mappings {
        if mapping.gap != 0 {
            continue;
        }
        let chrom = match mapping.seq_region_name {
            Some(chrom) => chrom,
            None => continue,
        };
        let strand = Strand::try_from(mapping.strand)?;
        exons.push(Exon::new(&chrom, mapping.start, mapping.end, strand)?);
    }

    if exons.is_empty() {
        return Err(ProviderError::MissingAnnotation(transcript_id.to_string()));
    }

    Ok(exons)
}

///
/// Parse a `sequence/region` response.
///
pub fn parse_sequence(body: &str, region: &GenomicRegion) -> Result<String, ProviderError> {
    let response: SequenceResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Payload(e.to_string()))?;

    if response.seq.is_empty() {
        return Err(ProviderError::MissingSequence(region.to_string()));
    }

    Ok(response.seq.to_ascii_uppercase())
}

impl AnnotationProvider for EnsemblClient {
    fn coding_exons(&self, transcript_id: &str) -> Result<Vec<Exon>, ProviderError> {
        let body = self.get(&self.cds_map_url(transcript_id))?;
        let exons = parse_cds_mappings(&body, transcript_id)?;
        info!("{}: {} coding exon segments", transcript_id, exons.len());
        Ok(exons)
    }
}

impl SequenceProvider for EnsemblClient {
    fn sequence(&self, region: &GenomicRegion) -> Result<String, ProviderError> {
        let body = self.get(&self.sequence_url(region))?;
        parse_sequence(&body, region)
    }
}
