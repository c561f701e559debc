//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::decode::DecodeArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::generate::GenArgs;

pub struct GenParams {
    pub manifest: PathBuf,
    pub types: Vec<String>,
    pub trim_prefix: Option<String>,
    pub line_comment: bool,
    pub shared: bool,
    pub nocache: bool,
    pub runtime: String,
    pub value: String,
    pub output: Option<PathBuf>,
}

impl GenParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest: parse_manifest(m),
            types: parse_types(m),
            trim_prefix: m.get_one::<String>("trim_prefix").cloned(),
            line_comment: m.get_flag("line_comment"),
            shared: m.get_flag("shared"),
            nocache: m.get_flag("nocache"),
            runtime: m
                .get_one::<String>("runtime")
                .cloned()
                .unwrap_or_else(|| "::bitnames_table".to_string()),
            value: m
                .get_one::<String>("value")
                .cloned()
                .unwrap_or_else(|| "self.0".to_string()),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<GenParams> for GenArgs {
    fn from(p: GenParams) -> Self {
        Self {
            manifest: p.manifest,
            types: p.types,
            trim_prefix: p.trim_prefix,
            line_comment: p.line_comment,
            shared: p.shared,
            cached: !p.nocache,
            runtime: p.runtime,
            value_expr: p.value,
            output: p.output,
        }
    }
}

pub struct DumpParams {
    pub manifest: PathBuf,
    pub types: Vec<String>,
    pub trim_prefix: Option<String>,
    pub line_comment: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest: parse_manifest(m),
            types: parse_types(m),
            trim_prefix: m.get_one::<String>("trim_prefix").cloned(),
            line_comment: m.get_flag("line_comment"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            manifest: p.manifest,
            types: p.types,
            trim_prefix: p.trim_prefix,
            line_comment: p.line_comment,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DecodeParams {
    pub manifest: PathBuf,
    pub type_name: String,
    pub trim_prefix: Option<String>,
    pub line_comment: bool,
    pub masks: Vec<u64>,
}

impl DecodeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest: parse_manifest(m),
            type_name: m.get_one::<String>("type").cloned().unwrap_or_default(),
            trim_prefix: m.get_one::<String>("trim_prefix").cloned(),
            line_comment: m.get_flag("line_comment"),
            masks: m
                .get_many::<u64>("masks")
                .map(|v| v.copied().collect())
                .unwrap_or_default(),
        }
    }
}

impl From<DecodeParams> for DecodeArgs {
    fn from(p: DecodeParams) -> Self {
        Self {
            manifest: p.manifest,
            type_name: p.type_name,
            trim_prefix: p.trim_prefix,
            line_comment: p.line_comment,
            masks: p.masks,
        }
    }
}

fn parse_manifest(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("manifest")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_types(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("types")
        .map(|v| v.filter(|s| !s.is_empty()).cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
