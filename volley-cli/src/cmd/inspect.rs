use std::collections::BTreeMap;

use serde::Serialize;

use crate::args::{OutputArgs, SourceArgs};
use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::utils::redact_header_value;

use super::source::load_batch;

#[derive(Serialize)]
struct InspectEndpoint {
    method: String,
    url: String,
    timeout: u64,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    params: BTreeMap<String, String>,
    has_body: bool,
}

pub async fn inspect_cmd(source: &SourceArgs, output: OutputArgs) -> i32 {
    let config = match load_batch(source) {
        Ok(config) => config,
        Err(e) => {
            print_error(output.format, output.quiet, &e.message());
            return e.exit_code();
        }
    };

    let listing: Vec<InspectEndpoint> = config
        .endpoints
        .iter()
        .map(|ep| InspectEndpoint {
            method: ep.method.as_str().to_string(),
            url: ep.url.clone(),
            timeout: ep.timeout_secs,
            headers: ep
                .headers
                .iter()
                .map(|(name, value)| (name.clone(), redact_header_value(name, value)))
                .collect(),
            params: ep.params.clone(),
            has_body: ep.body.is_some(),
        })
        .collect();

    if output.format == OutputFormat::Text && !output.quiet {
        println!("{} configured endpoints", listing.len());
        for (idx, ep) in listing.iter().enumerate() {
            println!(
                "  {}. [{}] {} (timeout {}s)",
                idx + 1,
                ep.method,
                ep.url,
                ep.timeout
            );
            for (name, value) in &ep.headers {
                println!("       {name}: {value}");
            }
        }
    } else {
        print_result(output.format, output.quiet, &listing);
    }

    exit_codes::SUCCESS
}
