use eratos_kernel::{Family, NumberTable, SieveConfig, SieveEngine};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;

pub fn exit_with(message: impl Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}

/// Load the config file if given, then apply flag overrides.
pub fn resolve_config_or_exit(config: Option<&str>, bound: Option<i64>) -> SieveConfig {
    let mut resolved = match config {
        Some(path) => SieveConfig::load(path).unwrap_or_else(|e| exit_with(e)),
        None => SieveConfig::default(),
    };
    if let Some(bound) = bound {
        resolved.bound = bound;
    }
    resolved
}

pub fn engine_or_exit(config: &SieveConfig) -> SieveEngine {
    SieveEngine::with_config(config).unwrap_or_else(|e| exit_with(e))
}

pub fn print_json_or_exit<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => exit_with(format!("json serialization: {e}")),
    }
}

pub fn join_values<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prime values grouped by family, every family present even when empty.
pub fn family_members(table: &NumberTable) -> BTreeMap<Family, Vec<u64>> {
    let mut members: BTreeMap<Family, Vec<u64>> =
        Family::ALL.iter().map(|&f| (f, Vec::new())).collect();
    for entry in table.entries() {
        for family in entry.families() {
            if let Some(values) = members.get_mut(family) {
                values.push(entry.value());
            }
        }
    }
    members
}

pub fn yes_no(ok: bool) -> &'static str {
    if ok { "yes" } else { "no" }
}
