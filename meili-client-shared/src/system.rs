//! Version and host system information.

use serde::{Deserialize, Serialize};

/// Build information of the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub commit_sha: String,
    pub build_date: String,
    pub pkg_version: String,
}

/// Host-wide memory, swap and io counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSystemInfo {
    pub total_memory: u64,
    pub used_memory: u64,
    pub total_swap: u64,
    pub used_swap: u64,
    pub input_data: u64,
    pub output_data: u64,
}

/// Resource usage of the service process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessInfo {
    pub memory: u64,
    pub cpu: f64,
}

/// Resource usage of the host and the service process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInformation {
    /// Used memory in percent.
    pub memory_usage: f64,
    /// Usage of each processor in percent, the first entry being the average.
    pub processor_usage: Vec<f64>,
    pub global: GlobalSystemInfo,
    pub process: ProcessInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSystemInfoPretty {
    pub total_memory: String,
    pub used_memory: String,
    pub total_swap: String,
    pub used_swap: String,
    pub input_data: String,
    pub output_data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfoPretty {
    pub memory: String,
    pub cpu: String,
}

/// Same as [`SystemInformation`] with human-readable values ("16.67 GB").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInformationPretty {
    pub memory_usage: String,
    pub processor_usage: Vec<String>,
    pub global: GlobalSystemInfoPretty,
    pub process: ProcessInfoPretty,
}
